//! # Account Store
//!
//! An in-memory directory of provisioned accounts, keyed by normalized
//! identifier. Administrative operations on unknown identifiers are silent
//! no-ops: setup tooling may administer accounts in any order, and the
//! store's reaction never reveals whether an identifier exists.

use std::collections::BTreeMap;

use gatewise_core::{AccountId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::account::Account;

/// Directory of accounts, keyed case-insensitively.
///
/// A `BTreeMap` keeps iteration and serialization order deterministic.
///
/// ## Thread Safety
///
/// Mutators take `&mut self`. Share across threads behind external
/// synchronisation (e.g., `Arc<Mutex<AccountStore>>`); one store-wide lock
/// guarantees a lookup never observes a half-applied update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountStore {
    accounts: BTreeMap<AccountId, Account>,
}

impl AccountStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or replace the account under the normalized identifier.
    ///
    /// The record starts from provisioning defaults (see [`Account::new`]);
    /// re-provisioning an existing identifier discards its previous state.
    /// Identifier shape is not checked here: whether a username looks like
    /// an email address is a login-time rule, not a provisioning rule.
    pub fn provision(&mut self, identifier: &str, password: &str, active: bool) {
        let account = Account::new(AccountId::new(identifier), password, active);
        tracing::debug!(identifier = %account.id, active, "account provisioned");
        self.accounts.insert(account.id.clone(), account);
    }

    /// Lock the account for `minutes` minutes from now.
    ///
    /// Silent no-op if the identifier is unknown.
    pub fn lock(&mut self, identifier: &str, minutes: u32) {
        let id = AccountId::new(identifier);
        match self.accounts.get_mut(&id) {
            Some(account) => {
                let until = Timestamp::now().plus_minutes(minutes);
                account.locked_until = Some(until);
                tracing::debug!(identifier = %id, minutes, until = %until, "account locked");
            }
            None => tracing::debug!(identifier = %id, "lock ignored, no such account"),
        }
    }

    /// Lock the account until the given deadline.
    ///
    /// Variant of [`AccountStore::lock`] for callers that already hold the
    /// deadline (a deadline in the past leaves the account effectively
    /// unlocked). Silent no-op if the identifier is unknown.
    pub fn lock_until(&mut self, identifier: &str, until: Timestamp) {
        let id = AccountId::new(identifier);
        match self.accounts.get_mut(&id) {
            Some(account) => {
                account.locked_until = Some(until);
                tracing::debug!(identifier = %id, until = %until, "account locked");
            }
            None => tracing::debug!(identifier = %id, "lock ignored, no such account"),
        }
    }

    /// Disable the account.
    ///
    /// Silent no-op if the identifier is unknown.
    pub fn disable(&mut self, identifier: &str) {
        let id = AccountId::new(identifier);
        match self.accounts.get_mut(&id) {
            Some(account) => {
                account.disabled = true;
                tracing::debug!(identifier = %id, "account disabled");
            }
            None => tracing::debug!(identifier = %id, "disable ignored, no such account"),
        }
    }

    /// Set the email-verified flag.
    ///
    /// Silent no-op if the identifier is unknown.
    pub fn set_email_verified(&mut self, identifier: &str, verified: bool) {
        let id = AccountId::new(identifier);
        match self.accounts.get_mut(&id) {
            Some(account) => {
                account.email_verified = verified;
                tracing::debug!(identifier = %id, verified, "email verification updated");
            }
            None => {
                tracing::debug!(identifier = %id, "set_email_verified ignored, no such account");
            }
        }
    }

    /// Set the password-expired flag.
    ///
    /// Silent no-op if the identifier is unknown.
    pub fn set_password_expired(&mut self, identifier: &str, expired: bool) {
        let id = AccountId::new(identifier);
        match self.accounts.get_mut(&id) {
            Some(account) => {
                account.password_expired = expired;
                tracing::debug!(identifier = %id, expired, "password expiry updated");
            }
            None => {
                tracing::debug!(identifier = %id, "set_password_expired ignored, no such account");
            }
        }
    }

    /// Resolve an identifier to its account, if provisioned.
    ///
    /// The identifier is normalized before the lookup, so any spelling of a
    /// provisioned address resolves.
    pub fn lookup(&self, identifier: &str) -> Option<&Account> {
        self.accounts.get(&AccountId::new(identifier))
    }

    /// Remove every account, returning the store to its empty state.
    pub fn reset(&mut self) {
        let removed = self.accounts.len();
        self.accounts.clear();
        tracing::debug!(removed, "store reset");
    }

    /// Number of provisioned accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the store holds no accounts.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
