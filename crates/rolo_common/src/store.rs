//! Contact store
//!
//! JSON file-based persistence for the contact collection. The whole
//! collection is rewritten on every save; a missing or unreadable file
//! loads as an empty collection rather than an error.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::contact::Contact;
use crate::error::RoloError;

/// Default storage file, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "contacts.json";

/// JSON-backed contact storage at a fixed path.
#[derive(Debug, Clone)]
pub struct ContactStore {
    path: PathBuf,
}

impl ContactStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the working directory under [`DEFAULT_STORE_FILE`].
    pub fn default_location() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full collection. A missing file means no contacts yet;
    /// unreadable or malformed content degrades to an empty collection.
    pub fn load(&self) -> Vec<Contact> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no contact file yet");
            return Vec::new();
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read contact file");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Contact>>(&content) {
            Ok(contacts) => {
                debug!(count = contacts.len(), "loaded contacts");
                contacts
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "malformed contact file, starting empty");
                Vec::new()
            }
        }
    }

    /// Serialize the full collection and overwrite the file.
    pub fn save(&self, contacts: &[Contact]) -> Result<(), RoloError> {
        let content = serde_json::to_string_pretty(contacts)?;
        fs::write(&self.path, content)?;
        debug!(count = contacts.len(), path = %self.path.display(), "saved contacts");
        Ok(())
    }
}
