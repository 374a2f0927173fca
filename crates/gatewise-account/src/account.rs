//! # Account Records
//!
//! The provisioned account: identity, credential, and the administrative
//! status flags the login rules consult.

use gatewise_core::{AccountId, Timestamp};
use serde::{Deserialize, Serialize};

/// Display name assigned to every provisioned account.
///
/// Provisioning is an administrative shortcut, not a registration flow, so
/// all accounts start with the same placeholder profile.
pub const DEFAULT_DISPLAY_NAME: &str = "Sanyi";

/// A provisioned account and its administrative state.
///
/// Created by [`AccountStore::provision`](crate::AccountStore::provision)
/// and mutated only through the store's administrative operations. The
/// fields are public so that evaluation code (and tests) can read a snapshot
/// without going back through the store.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Normalized identifier; also the store key.
    pub id: AccountId,
    /// Opaque comparable secret. Never logged, never rendered.
    pub password: String,
    /// Shown in the page header after a successful login.
    pub display_name: String,
    /// Set by administrator action; terminal until explicitly reversed.
    pub disabled: bool,
    /// Whether the account's email address has been verified.
    pub email_verified: bool,
    /// Whether the credential must be rotated before normal use.
    pub password_expired: bool,
    /// Lockout deadline. The account is locked while `now < locked_until`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub locked_until: Option<Timestamp>,
}

impl Account {
    /// Create a freshly provisioned account.
    ///
    /// Flags start at their provisioning defaults: verified email, current
    /// password, no lockout, display name [`DEFAULT_DISPLAY_NAME`]. The
    /// `active` switch is the administrator's shorthand for the disabled
    /// flag: an account provisioned inactive starts disabled.
    pub fn new(id: AccountId, password: impl Into<String>, active: bool) -> Self {
        Self {
            id,
            password: password.into(),
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            disabled: !active,
            email_verified: true,
            password_expired: false,
            locked_until: None,
        }
    }

    /// Whether the account is locked at the given instant.
    ///
    /// Strictly before the deadline means locked; at the deadline or after
    /// means the lockout has lapsed. No deadline means never locked.
    pub fn is_locked_at(&self, now: Timestamp) -> bool {
        matches!(self.locked_until, Some(until) if now < until)
    }

    /// Whether the submitted secret matches the stored one.
    ///
    /// Exact, case-sensitive string equality. Unlike identifiers, passwords
    /// are never normalized.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

// Manual impl so the stored secret stays out of debug output.
impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("display_name", &self.display_name)
            .field("disabled", &self.disabled)
            .field("email_verified", &self.email_verified)
            .field("password_expired", &self.password_expired)
            .field("locked_until", &self.locked_until)
            .finish_non_exhaustive()
    }
}
