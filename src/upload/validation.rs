// SPDX-License-Identifier: MPL-2.0
//! Email syntax validation for the upload form.
//!
//! Only the shape of the address is checked: `local-part@domain.tld`, where
//! the suffix is at least two letters. No DNS or mailbox lookup happens.

use regex::Regex;
use std::sync::LazyLock;

/// i18n key of the inline message shown under an invalid email.
pub const INVALID_EMAIL_KEY: &str = "upload-email-invalid";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("Email regex should compile")
});

/// Returns true if `email` looks like a deliverable address.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Returns the error key to display for `email`, if any.
///
/// An empty field shows no error even though it is not a valid address.
#[must_use]
pub fn email_error(email: &str) -> Option<&'static str> {
    if !email.is_empty() && !is_valid_email(email) {
        Some(INVALID_EMAIL_KEY)
    } else {
        None
    }
}
