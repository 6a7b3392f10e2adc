//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod background;
pub mod charts;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod navbar;
pub mod placeholder;
pub mod quick_actions;
pub mod quotes;
pub mod stat_cards;
pub mod table;
