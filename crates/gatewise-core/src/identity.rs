//! # Identity Types
//!
//! The account identifier newtype and the email-shape predicate.
//!
//! ## Normalization
//!
//! Account identifiers are case-insensitive: `Bob@Example.com` and
//! `bob@example.com` name the same account. [`AccountId`] enforces this by
//! lowercasing at construction, so the normalized form is the only form that
//! exists inside the system. Lowercasing is the whole of normalization; in
//! particular, surrounding whitespace is preserved, so `" bob@example.com"`
//! is a different identifier from `"bob@example.com"`.
//!
//! ## Shape
//!
//! [`AccountId`] accepts any string. Whether a submitted username looks like
//! an email address is a login-time business rule, checked against the raw
//! input by [`is_email_shaped`] — not a construction invariant of the
//! identifier.

use serde::{Deserialize, Serialize};

/// A normalized (lowercased) account identifier.
///
/// # Construction
///
/// [`AccountId::new()`] is infallible: it lowercases the input and stores the
/// result. Deserialization routes through the same constructor, so stored
/// data is normalized at the serde boundary too — two spellings of the same
/// address can never coexist as distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct AccountId(String);

impl AccountId {
    /// Create an account identifier, normalizing to lowercase.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().to_lowercase())
    }

    /// Access the normalized identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Deserializes as a plain `String`, then routes through `new()` so that the
// lowercase invariant holds for deserialized values as well.
impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}

impl From<&str> for AccountId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AccountId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns `true` when the string has the rough shape of an email address.
///
/// The rule: the first `@` must be neither the first nor the last character.
/// Nothing after the first `@` is inspected, so `a@b@c` passes. This is a
/// shape gate for obviously-not-an-email input, not an RFC 5322 validator.
///
/// The input is checked as submitted. No trimming, no normalization.
pub fn is_email_shaped(candidate: &str) -> bool {
    match candidate.find('@') {
        Some(pos) => pos > 0 && pos < candidate.len() - 1,
        None => false,
    }
}
