//! Command handlers for the binary

pub mod check;
pub mod menu;
