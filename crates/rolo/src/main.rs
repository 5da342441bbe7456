//! Rolo - Local contact manager
//!
//! Menu-driven terminal interface over a JSON contact file: add, remove,
//! list, and search contacts, persisting between runs.

use std::io;

use anyhow::Result;
use clap::Parser;
use console::Term;
use rolo::prompt::Prompter;
use rolo::{cli, menu};
use rolo_common::display::Ui;
use rolo_common::{ContactBook, ContactStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Quiet by default; RUST_LOG overrides. Diagnostics go to stderr so the
    // interactive surface stays clean.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let store = match cli.file {
        Some(path) => ContactStore::new(path),
        None => ContactStore::default_location(),
    };
    info!(path = %store.path().display(), "starting rolo v{}", env!("CARGO_PKG_VERSION"));

    let mut book = ContactBook::new(store.load());
    book.sort_by_name();

    let ui = Ui::new(!cli.plain);
    let term = (!cli.plain).then(Term::stdout);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Prompter::new(stdin.lock(), stdout.lock(), ui);

    menu::run(&mut book, &store, &mut console, term.as_ref())
}
