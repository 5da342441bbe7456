//! Interactive prompt helpers
//!
//! Each helper repeats "prompt, read one line, validate, report, retry"
//! until the input passes. Validation failures never escape a helper; the
//! only error that does is a dead input stream.
//!
//! The prompter is generic over its input and output streams so the retry
//! loops can be driven by scripted input in tests. The binary wires it to
//! locked stdin/stdout.

use std::io::{self, BufRead, Write};

use rolo_common::contact::{format_phone, is_valid_email, is_valid_phone};
use rolo_common::display::Ui;

/// Menu choices run from 1 (Add) to 5 (Exit).
pub const MENU_CHOICES: std::ops::RangeInclusive<usize> = 1..=5;

/// Interactive console: prompts in, validated values out.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    ui: Ui,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, ui: Ui) -> Self {
        Self { input, output, ui }
    }

    pub fn ui(&self) -> Ui {
        self.ui
    }

    /// Consume the prompter, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a full line of output.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    /// Read one line, stripped of the trailing newline only. Interior and
    /// leading whitespace is preserved; a closed stream is fatal.
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{} ", prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Retry until the input is non-empty.
    pub fn name(&mut self, prompt: &str) -> io::Result<String> {
        loop {
            let input = self.ask(prompt)?;
            if !input.is_empty() {
                return Ok(input);
            }
            let line = self.ui.error("Invalid name. Please try again.");
            self.say(&line)?;
        }
    }

    /// Retry until the input is exactly 10 decimal digits, then return it
    /// formatted by the two-insertion rule ("2345678901" -> "234-5678-901").
    pub fn phone(&mut self) -> io::Result<String> {
        loop {
            let input = self.ask("Enter a phone number (numbers only, e.g., 2345678901):")?;
            if is_valid_phone(&input) {
                return Ok(format_phone(&input));
            }
            let line = self
                .ui
                .error("Invalid phone number. Please enter exactly 10 digits.");
            self.say(&line)?;
        }
    }

    /// Empty input means "skip" and returns `None`. Otherwise retry until
    /// the input contains both '@' and '.'.
    pub fn email(&mut self, prompt: &str) -> io::Result<Option<String>> {
        loop {
            let input = self.ask(prompt)?;
            if input.is_empty() {
                return Ok(None);
            }
            if is_valid_email(&input) {
                return Ok(Some(input));
            }
            let line = self.ui.error("Invalid email. Please enter a valid email.");
            self.say(&line)?;
        }
    }

    /// Retry until a whole number in [1,5] is entered.
    pub fn menu_choice(&mut self) -> io::Result<usize> {
        loop {
            let input = self.ask("Choose a number:")?;
            if let Ok(choice) = input.trim().parse::<usize>() {
                if MENU_CHOICES.contains(&choice) {
                    return Ok(choice);
                }
            }
            let line = self
                .ui
                .error("Invalid number. Please enter a valid number between 1 and 5.");
            self.say(&line)?;
        }
    }

    /// Retry until a 1-based index in [1,max] is entered.
    pub fn index(&mut self, max: usize) -> io::Result<usize> {
        loop {
            let input = self.ask(&format!(
                "Enter the index of the contact you want to remove (1 to {}):",
                max
            ))?;
            if let Ok(index) = input.trim().parse::<usize>() {
                if (1..=max).contains(&index) {
                    return Ok(index);
                }
            }
            let line = self.ui.error(&format!(
                "Invalid index. Please enter a valid number between 1 and {}.",
                max
            ));
            self.say(&line)?;
        }
    }

    /// Retry until trimmed, case-insensitive input is exactly "y" or "n".
    pub fn yes_no(&mut self, prompt: &str) -> io::Result<bool> {
        loop {
            let input = self.ask(prompt)?;
            match input.trim().to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => {
                    let line = self
                        .ui
                        .error("Invalid input. Please enter 'y' for Yes or 'n' for No.");
                    self.say(&line)?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(script: &str) -> Prompter<Cursor<String>, Vec<u8>> {
        Prompter::new(Cursor::new(script.to_string()), Vec::new(), Ui::new(false))
    }

    #[test]
    fn name_retries_until_non_empty() {
        let mut p = prompter("\n\nAlice\n");
        assert_eq!(p.name("Name:").unwrap(), "Alice");
    }

    #[test]
    fn name_keeps_interior_whitespace() {
        let mut p = prompter("Alice Smith\n");
        assert_eq!(p.name("Name:").unwrap(), "Alice Smith");
    }

    #[test]
    fn phone_retries_then_formats() {
        let mut p = prompter("12345\nabcdefghij\n234-567890\n2345678901\n");
        assert_eq!(p.phone().unwrap(), "234-5678-901");
    }

    #[test]
    fn email_empty_input_means_skip() {
        let mut p = prompter("\n");
        assert_eq!(p.email("Email:").unwrap(), None);
    }

    #[test]
    fn email_retries_until_at_and_dot_present() {
        let mut p = prompter("not-an-email\nuser@host\nuser@example.com\n");
        assert_eq!(
            p.email("Email:").unwrap(),
            Some("user@example.com".to_string())
        );
    }

    #[test]
    fn menu_choice_rejects_out_of_range_and_garbage() {
        let mut p = prompter("0\n6\nx\n3\n");
        assert_eq!(p.menu_choice().unwrap(), 3);
    }

    #[test]
    fn index_is_bounded_by_count() {
        let mut p = prompter("0\n4\ntwo\n2\n");
        assert_eq!(p.index(3).unwrap(), 2);
    }

    #[test]
    fn yes_no_is_case_insensitive_and_trimmed() {
        let mut p = prompter("maybe\n Y \n");
        assert!(p.yes_no("Continue? (y/n)").unwrap());
        let mut p = prompter("N\n");
        assert!(!p.yes_no("Continue? (y/n)").unwrap());
    }

    #[test]
    fn closed_stream_is_fatal() {
        let mut p = prompter("");
        let err = p.name("Name:").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
