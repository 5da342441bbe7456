//! Contact operations
//!
//! Add, remove, list, and search flows over the contact book. Every
//! mutation is followed by a full-file save. Each flow returns the next
//! menu state.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use rolo_common::{Contact, ContactBook, ContactStore};
use tracing::debug;

use crate::menu::MenuState;
use crate::prompt::Prompter;

/// Add one or more contacts. A contact needs a name and at least one of
/// phone number or email; the field choice is re-asked until one is picked.
pub fn add<R: BufRead, W: Write>(
    book: &mut ContactBook,
    store: &ContactStore,
    console: &mut Prompter<R, W>,
) -> Result<MenuState> {
    let ui = console.ui();

    loop {
        console.say("You need to enter a name, and at least a phone number or an email.")?;
        console.say(&ui.rule())?;
        let name = console.name("Name:")?;

        let (want_phone, want_email) = loop {
            let want_phone = console.yes_no("Do you want to add a phone number? (y/n)")?;
            let want_email = console.yes_no("Do you want to add an email? (y/n)")?;
            if want_phone || want_email {
                break (want_phone, want_email);
            }
            console.say(&ui.error(
                "You must add at least one of the fields: phone number or email.",
            ))?;
        };

        let phone_number = if want_phone {
            Some(console.phone()?)
        } else {
            None
        };
        let email = if want_email {
            console.email("Email:")?
        } else {
            None
        };

        book.add(Contact::new(name, phone_number, email));
        save(book, store)?;

        console.say(&ui.success("Contact saved successfully!"))?;
        console.say(&ui.rule())?;
        console.blank()?;

        if !console.yes_no("Do you want to add another contact? (y/n)")? {
            return Ok(MenuState::MainMenu);
        }
    }
}

/// Remove contacts by their 1-based listing index.
pub fn remove<R: BufRead, W: Write>(
    book: &mut ContactBook,
    store: &ContactStore,
    console: &mut Prompter<R, W>,
) -> Result<MenuState> {
    let ui = console.ui();

    if book.is_empty() {
        console.say(&ui.note("No contacts available to remove."))?;
        console.say(&ui.rule())?;
        console.blank()?;
        return Ok(MenuState::MainMenu);
    }

    loop {
        console.say("List of Contacts:")?;
        print_contacts(book, console)?;

        let index = console.index(book.len())?;
        if let Some(removed) = book.remove(index - 1) {
            debug!(name = removed.display_name(), "removed contact");
        }
        save(book, store)?;

        console.say(&ui.success("Contact removed successfully!"))?;
        console.say(&ui.rule())?;
        console.blank()?;

        if book.is_empty() {
            console.say(&ui.note("No contacts available to remove."))?;
            return Ok(MenuState::MainMenu);
        }
        if console.yes_no("Do you want to go back to the menu? (y/n)")? {
            return Ok(MenuState::MainMenu);
        }
    }
}

/// List all contacts, then offer to jump into the remove flow.
pub fn list<R: BufRead, W: Write>(
    book: &ContactBook,
    console: &mut Prompter<R, W>,
) -> Result<MenuState> {
    let ui = console.ui();

    if book.is_empty() {
        console.say(&ui.note("No contacts found."))?;
        console.say(&ui.rule())?;
        console.blank()?;
        return Ok(MenuState::MainMenu);
    }

    print_contacts(book, console)?;
    console.say(&ui.rule())?;
    console.blank()?;

    if console.yes_no("Do you want to remove a contact? (y/n)")? {
        return Ok(MenuState::Remove);
    }
    Ok(MenuState::MainMenu)
}

/// Search for a contact by name, case-insensitively. Reports a single match
/// even when duplicates exist.
pub fn search<R: BufRead, W: Write>(
    book: &ContactBook,
    console: &mut Prompter<R, W>,
) -> Result<MenuState> {
    let ui = console.ui();

    loop {
        let target = console.name("Enter the name to search:")?;

        match book.find(&target) {
            Some(contact) => {
                console.say(&ui.success(&format!(
                    "Contact found: {}, {}, {}",
                    contact.display_name(),
                    contact.display_phone(),
                    contact.display_email()
                )))?;
            }
            None => console.say("Contact not found.")?,
        }
        console.say(&ui.rule())?;

        if !console.yes_no("Do you want to search another contact? (y/n)")? {
            return Ok(MenuState::MainMenu);
        }
    }
}

fn print_contacts<R: BufRead, W: Write>(
    book: &ContactBook,
    console: &mut Prompter<R, W>,
) -> Result<()> {
    let ui = console.ui();
    for (i, contact) in book.contacts().iter().enumerate() {
        console.say(&ui.contact_line(i + 1, contact))?;
    }
    Ok(())
}

fn save(book: &ContactBook, store: &ContactStore) -> Result<()> {
    store
        .save(book.contacts())
        .with_context(|| format!("failed to save contacts to {}", store.path().display()))
}
