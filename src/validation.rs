//! Client-side field validation.
//!
//! The email check is deliberately coarse: "something, `@`, something, `.`,
//! something" with no whitespace in the runs. It is not RFC 5322 and must
//! keep accepting everything it accepts today.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::credentials::{Credentials, Field};

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email";
pub const PASSWORD_REQUIRED: &str = "Password is required";

/// One non-whitespace character, using the ECMAScript whitespace set
/// (includes U+FEFF, excludes U+0085) rather than Unicode `White_Space`.
const NON_SPACE: &str =
    r"[^\t\n\x0B\x0C\r \x{00A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

// Unanchored: a match anywhere in the input is enough.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("{NON_SPACE}+@{NON_SPACE}+\\.{NON_SPACE}+")).expect("email pattern is a valid regex")
});

/// Per-field messages produced by one validation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn insert(&mut self, field: Field, message: &str) {
        self.0.insert(field, message.to_owned());
    }
}

/// `true` if `email` passes the coarse address pattern.
#[must_use]
pub fn is_plausible_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Check every field and collect all failures. Never short-circuits.
#[must_use]
pub fn validate_credentials(creds: &Credentials) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if creds.email.is_empty() {
        errors.insert(Field::Email, EMAIL_REQUIRED);
    } else if !is_plausible_email(&creds.email) {
        errors.insert(Field::Email, EMAIL_INVALID);
    }

    if creds.password.is_empty() {
        errors.insert(Field::Password, PASSWORD_REQUIRED);
    }

    errors
}
