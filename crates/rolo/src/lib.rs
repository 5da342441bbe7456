//! Rolo library - exposes modules for testing
//!
//! The binary in `main.rs` wires these to a real terminal.

pub mod cli;
pub mod commands;
pub mod menu;
pub mod prompt;
