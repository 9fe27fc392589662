//! ticketdesk - terminal client for a REST ticket backend
//!
//! This library crate exposes internal modules for integration testing.

pub mod config;
pub mod data;
pub mod integrations;
pub mod report;
pub mod tui;
