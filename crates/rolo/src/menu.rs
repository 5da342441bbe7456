//! Menu loop
//!
//! Top-level state machine driving all operations. An explicit loop rather
//! than recursive menu re-entry, so long sessions cannot grow the stack.

use std::io::{BufRead, Write};

use anyhow::Result;
use console::Term;
use rolo_common::{ContactBook, ContactStore};

use crate::commands;
use crate::prompt::Prompter;

/// Dispatcher states. `MainMenu` is the initial state and the return target
/// after each operation; `Exit` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    MainMenu,
    Add,
    Remove,
    List,
    Search,
    Exit,
}

const MENU_OPTIONS: [&str; 5] = [
    "Add Contact",
    "Remove Contact",
    "List Contacts",
    "Search Contact",
    "Exit",
];

/// Run the interactive session until the user exits.
///
/// When `term` is given the screen is cleared before each menu display;
/// `--plain` runs without one.
pub fn run<R: BufRead, W: Write>(
    book: &mut ContactBook,
    store: &ContactStore,
    console: &mut Prompter<R, W>,
    term: Option<&Term>,
) -> Result<()> {
    let ui = console.ui();
    let mut state = MenuState::MainMenu;

    loop {
        state = match state {
            MenuState::MainMenu => {
                if let Some(term) = term {
                    let _ = term.clear_screen();
                }
                console.say(&ui.banner("Welcome to the Contact List"))?;
                for (i, label) in MENU_OPTIONS.iter().enumerate() {
                    console.say(&ui.menu_option(i + 1, label))?;
                }
                console.say(&ui.rule())?;
                dispatch(console.menu_choice()?)
            }
            MenuState::Add => commands::add(book, store, console)?,
            MenuState::Remove => commands::remove(book, store, console)?,
            MenuState::List => commands::list(book, console)?,
            MenuState::Search => commands::search(book, console)?,
            MenuState::Exit => {
                console.say("Goodbye!")?;
                return Ok(());
            }
        };
    }
}

/// Map a validated menu choice to the next state. The fallback arm cannot be
/// reached while `menu_choice` bounds its input, but an unexpected value
/// re-shows the menu rather than panicking.
fn dispatch(choice: usize) -> MenuState {
    match choice {
        1 => MenuState::Add,
        2 => MenuState::Remove,
        3 => MenuState::List,
        4 => MenuState::Search,
        5 => MenuState::Exit,
        _ => MenuState::MainMenu,
    }
}
