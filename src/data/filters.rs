//! Status / priority filter selectors.

use super::priority::Priority;

/// Filter values as read from the selectors. `None` means "All".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilters {
    pub status: Option<String>,
    pub priority: Option<String>,
}

impl ListFilters {
    /// Build from raw selector strings; empty strings mean no filter.
    pub fn from_values(status: &str, priority: &str) -> Self {
        let keep = |v: &str| (!v.is_empty()).then(|| v.to_string());
        Self {
            status: keep(status),
            priority: keep(priority),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.priority.is_none()
    }
}

/// A single-choice selector with an implicit leading "All" entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelector {
    pub options: Vec<String>,
    pub selected: Option<usize>,
}

impl FilterSelector {
    pub fn new(options: Vec<String>) -> Self {
        Self {
            options,
            selected: None,
        }
    }

    /// Currently selected value, `None` for "All".
    pub fn value(&self) -> Option<&str> {
        self.selected
            .and_then(|idx| self.options.get(idx))
            .map(String::as_str)
    }

    /// Step forward: All -> first -> ... -> last -> All.
    pub fn select_next(&mut self) {
        self.selected = match self.selected {
            None if self.options.is_empty() => None,
            None => Some(0),
            Some(idx) if idx + 1 < self.options.len() => Some(idx + 1),
            Some(_) => None,
        };
    }

    /// Step backward: All -> last -> ... -> first -> All.
    pub fn select_prev(&mut self) {
        self.selected = match self.selected {
            None => self.options.len().checked_sub(1),
            Some(0) => None,
            Some(idx) => Some(idx - 1),
        };
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterField {
    #[default]
    Status,
    Priority,
}

impl FilterField {
    pub fn toggle(self) -> Self {
        match self {
            FilterField::Status => FilterField::Priority,
            FilterField::Priority => FilterField::Status,
        }
    }
}

/// Both selectors plus which one has focus in the filter menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub status: FilterSelector,
    pub priority: FilterSelector,
    pub focus: FilterField,
}

impl FilterState {
    pub fn new(statuses: Vec<String>) -> Self {
        Self {
            status: FilterSelector::new(statuses),
            priority: FilterSelector::new(
                Priority::ALL.iter().map(|p| p.label().to_string()).collect(),
            ),
            focus: FilterField::Status,
        }
    }

    pub fn focused_mut(&mut self) -> &mut FilterSelector {
        match self.focus {
            FilterField::Status => &mut self.status,
            FilterField::Priority => &mut self.priority,
        }
    }

    /// Read both selectors.
    pub fn values(&self) -> ListFilters {
        ListFilters::from_values(
            self.status.value().unwrap_or_default(),
            self.priority.value().unwrap_or_default(),
        )
    }

    pub fn clear(&mut self) {
        self.status.clear();
        self.priority.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statuses() -> Vec<String> {
        vec!["open".to_string(), "closed".to_string()]
    }

    #[test]
    fn test_selector_cycles_through_all() {
        let mut sel = FilterSelector::new(statuses());
        assert_eq!(sel.value(), None);
        sel.select_next();
        assert_eq!(sel.value(), Some("open"));
        sel.select_next();
        assert_eq!(sel.value(), Some("closed"));
        sel.select_next();
        assert_eq!(sel.value(), None);
        sel.select_prev();
        assert_eq!(sel.value(), Some("closed"));
    }

    #[test]
    fn test_empty_selector_stays_on_all() {
        let mut sel = FilterSelector::new(Vec::new());
        sel.select_next();
        assert_eq!(sel.value(), None);
        sel.select_prev();
        assert_eq!(sel.value(), None);
    }

    #[test]
    fn test_values_reads_both_selectors() {
        let mut state = FilterState::new(statuses());
        state.focused_mut().select_next();
        state.focus = state.focus.toggle();
        state.focused_mut().select_next();
        assert_eq!(
            state.values(),
            ListFilters {
                status: Some("open".to_string()),
                priority: Some("High".to_string()),
            }
        );
        state.clear();
        assert!(state.values().is_empty());
    }
}
