//! # Temporal Types — UTC-Only Timestamps
//!
//! Defines [`Timestamp`], a UTC-only timestamp truncated to seconds
//! precision. Lockout windows are expressed as `locked_until` timestamps and
//! compared against a single `now` snapshot, so the type keeps every instant
//! in one timezone and one precision.
//!
//! Non-UTC inputs are **rejected at construction** by the strict parser.
//! There is no silent conversion that could make the same instant render two
//! different ways.

use chrono::{DateTime, Duration, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A UTC-only timestamp, truncated to seconds precision.
///
/// # Construction
///
/// - [`Timestamp::now()`] — current UTC time, truncated.
/// - [`Timestamp::from_utc()`] — from a `DateTime<Utc>`, truncating sub-seconds.
/// - [`Timestamp::parse()`] — from an ISO 8601 string, rejecting non-UTC offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from the current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Parse a timestamp from an RFC 3339 / ISO 8601 string.
    ///
    /// **Rejects non-UTC inputs.** Only timestamps with the `Z` suffix are
    /// accepted. Explicit offsets like `+00:00`, `+05:30`, or `-04:00` are
    /// rejected — even `+00:00`, which is semantically equivalent to `Z`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTimestamp`] if the string is not
    /// valid RFC 3339 or uses a non-Z timezone offset.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if !s.ends_with('Z') {
            return Err(ValidationError::InvalidTimestamp {
                value: s.to_string(),
                reason: "must use Z suffix (UTC only)".to_string(),
            });
        }

        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| ValidationError::InvalidTimestamp {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Return the timestamp `minutes` minutes after this one.
    ///
    /// This is the arithmetic behind lockout windows: locking an account for
    /// `n` minutes stores `now.plus_minutes(n)`. An offset that would leave
    /// the representable range returns the timestamp unchanged.
    pub fn plus_minutes(&self, minutes: u32) -> Self {
        let delta = Duration::minutes(i64::from(minutes));
        Self(self.0.checked_add_signed(delta).unwrap_or(self.0))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Render as ISO 8601 with Z suffix (e.g., `2026-01-15T12:00:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

/// Truncate a `DateTime<Utc>` to seconds precision (discard nanoseconds).
fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}
