//! Display helpers
//!
//! Consistent terminal output for the rolo binary: status markers, the menu
//! banner, and contact line rendering. Color can be switched off for dumb
//! terminals and transcripts.

use owo_colors::OwoColorize;

use crate::contact::Contact;

const RULE: &str = "--------------------------------";

/// Terminal output helper. All user-facing messages go through this so the
/// interactive surface stays consistent.
#[derive(Debug, Clone, Copy)]
pub struct Ui {
    use_color: bool,
}

impl Ui {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    pub fn use_color(&self) -> bool {
        self.use_color
    }

    /// Banner shown above the main menu.
    pub fn banner(&self, title: &str) -> String {
        if self.use_color {
            format!("{}\n{}", title.bright_white().bold(), RULE.dimmed())
        } else {
            format!("{}\n{}", title, RULE)
        }
    }

    /// Horizontal rule closing off a section.
    pub fn rule(&self) -> String {
        if self.use_color {
            RULE.dimmed().to_string()
        } else {
            RULE.to_string()
        }
    }

    /// Numbered menu option, e.g. "[1]  Add Contact".
    pub fn menu_option(&self, number: usize, label: &str) -> String {
        if self.use_color {
            format!("{}  {}", format!("[{}]", number).cyan(), label)
        } else {
            format!("[{}]  {}", number, label)
        }
    }

    /// Success line, marked with '+'.
    pub fn success(&self, message: &str) -> String {
        if self.use_color {
            format!("{}  {}", "+".bright_green(), message)
        } else {
            format!("+  {}", message)
        }
    }

    /// Validation error line, marked with '!'.
    pub fn error(&self, message: &str) -> String {
        if self.use_color {
            format!("{}  {}", "!".yellow(), message)
        } else {
            format!("!  {}", message)
        }
    }

    /// Informational line, marked with '~'.
    pub fn note(&self, message: &str) -> String {
        if self.use_color {
            format!("{}  {}", "~".yellow(), message)
        } else {
            format!("~  {}", message)
        }
    }

    /// One listing line: "1. Name: Alice, Phone: 234-5678-901, Email: No Email".
    /// Missing fields render as explicit placeholders.
    pub fn contact_line(&self, number: usize, contact: &Contact) -> String {
        if self.use_color {
            format!(
                "{}. Name: {}, Phone: {}, Email: {}",
                number,
                contact.display_name().bright_white(),
                contact.display_phone(),
                contact.display_email()
            )
        } else {
            format!(
                "{}. Name: {}, Phone: {}, Email: {}",
                number,
                contact.display_name(),
                contact.display_phone(),
                contact.display_email()
            )
        }
    }
}
