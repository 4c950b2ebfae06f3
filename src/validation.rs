//! Client-side validation of the add-customer form

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{CustomerDraft, FieldErrors};

// Unanchored: any `x@y.z` run inside the value is accepted.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is a valid regex"));

pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && EMAIL_PATTERN.is_match(email)
}

/// Compute per-field error flags for a draft
pub fn validate(draft: &CustomerDraft) -> FieldErrors {
    FieldErrors {
        first_name: draft.first_name.is_empty(),
        last_name: draft.last_name.is_empty(),
        email: !is_valid_email(&draft.email),
    }
}
