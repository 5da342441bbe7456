//! CLI - Command-line argument parsing
//!
//! Keeps argument parsing separate from execution logic. The flags only
//! relocate the storage file or tone down terminal output; every operation
//! stays interactive.

use clap::Parser;
use std::path::PathBuf;

/// Rolo contact manager
#[derive(Parser)]
#[command(name = "rolo")]
#[command(about = "Rolo - Local contact manager", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Storage file (defaults to contacts.json in the working directory)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Disable screen clearing and color
    #[arg(long)]
    pub plain: bool,
}
