//! Glyphs used throughout the UI.

pub const APP: &str = "󰄲"; // nf-md-checkbox_marked_outline

// Priority (signal bar style)
pub const PRIORITY_HIGH: &str = "▮▮▮";
pub const PRIORITY_MEDIUM: &str = "▮▮╌";
pub const PRIORITY_LOW: &str = "▮╌╌";

// Row actions
pub const ACTION_EDIT: &str = "✎";
pub const ACTION_DELETE: &str = "✗";

// Pagination
pub const PAGE_PREV: &str = "◀";
pub const PAGE_NEXT: &str = "▶";

pub const FILTER: &str = "󰈲"; // nf-md-filter
pub const SELECTED_ROW: &str = "›";
