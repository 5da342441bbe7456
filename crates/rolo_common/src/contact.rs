//! Contact record
//!
//! Pure data holder for a single contact. Field validity is enforced by the
//! interactive prompt helpers before a Contact is constructed, not here.
//! Serialized field names (`Name`, `PhoneNumber`, `Email`) match the layout
//! of existing `contacts.json` files, so old files round-trip unchanged.

use serde::{Deserialize, Serialize};

/// Number of digits a raw phone number must have before formatting.
pub const PHONE_DIGITS: usize = 10;

/// A stored contact. Any field may be absent in a file on disk; contacts
/// created through the add flow always carry a name and at least one of
/// phone number or email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Display name
    #[serde(rename = "Name", default)]
    pub name: Option<String>,

    /// Formatted phone number, e.g. "234-5678-901"
    #[serde(rename = "PhoneNumber", default)]
    pub phone_number: Option<String>,

    /// Email address
    #[serde(rename = "Email", default)]
    pub email: Option<String>,
}

impl Contact {
    pub fn new(name: String, phone_number: Option<String>, email: Option<String>) -> Self {
        Self {
            name: Some(name),
            phone_number,
            email,
        }
    }

    /// Name used for ordering and search. A missing name sorts first.
    pub fn sort_key(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("No Name")
    }

    pub fn display_phone(&self) -> &str {
        self.phone_number.as_deref().unwrap_or("No Phone")
    }

    pub fn display_email(&self) -> &str {
        self.email.as_deref().unwrap_or("No Email")
    }
}

/// Format a raw 10-digit string by inserting a separator at index 3 and then
/// at index 8 of the intermediate string, grouping digits 3/4/3:
/// "2345678901" becomes "234-5678-901".
///
/// The caller guarantees `digits` is exactly [`PHONE_DIGITS`] ASCII digits.
pub fn format_phone(digits: &str) -> String {
    debug_assert_eq!(digits.len(), PHONE_DIGITS);
    let mut formatted = digits.to_string();
    formatted.insert(3, '-');
    formatted.insert(8, '-');
    formatted
}

/// Whether `input` is a valid raw phone number: exactly 10 ASCII digits.
pub fn is_valid_phone(input: &str) -> bool {
    input.len() == PHONE_DIGITS && input.chars().all(|c| c.is_ascii_digit())
}

/// Whether `input` is an acceptable email: both '@' and '.' appear somewhere.
/// Deliberately permissive; no grammar check.
pub fn is_valid_email(input: &str) -> bool {
    input.contains('@') && input.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_phone_groups_3_4_3() {
        assert_eq!(format_phone("2345678901"), "234-5678-901");
        assert_eq!(format_phone("0000000000"), "000-0000-000");
        assert_eq!(format_phone("9876543210"), "987-6543-210");
    }

    #[test]
    fn phone_validation_requires_exactly_ten_digits() {
        assert!(is_valid_phone("2345678901"));
        assert!(!is_valid_phone("234567890"));
        assert!(!is_valid_phone("23456789012"));
        assert!(!is_valid_phone("23456789a1"));
        assert!(!is_valid_phone("234-567890"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn email_validation_requires_at_and_dot() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email(".@"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user.example"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn missing_fields_render_placeholders() {
        let contact = Contact {
            name: None,
            phone_number: None,
            email: None,
        };
        assert_eq!(contact.display_name(), "No Name");
        assert_eq!(contact.display_phone(), "No Phone");
        assert_eq!(contact.display_email(), "No Email");
        assert_eq!(contact.sort_key(), "");
    }

    #[test]
    fn serializes_with_pascal_case_field_names() {
        let contact = Contact::new("Alice".to_string(), Some("234-5678-901".to_string()), None);
        let json = serde_json::to_string(&contact).unwrap();
        assert!(json.contains("\"Name\":\"Alice\""));
        assert!(json.contains("\"PhoneNumber\":\"234-5678-901\""));
        assert!(json.contains("\"Email\":null"));
    }

    #[test]
    fn deserializes_absent_and_null_fields() {
        let from_null: Contact = serde_json::from_str(r#"{"Name":null,"Email":null}"#).unwrap();
        assert_eq!(from_null.name, None);
        assert_eq!(from_null.phone_number, None);
        assert_eq!(from_null.email, None);

        let from_absent: Contact = serde_json::from_str(r#"{"Name":"Bob"}"#).unwrap();
        assert_eq!(from_absent.name.as_deref(), Some("Bob"));
        assert_eq!(from_absent.phone_number, None);
    }
}
