//! # Login Evaluation
//!
//! The ordered rule chain. [`evaluate_login`] is the pure classifier: one
//! attempt, one account snapshot (or its absence), one instant, one
//! [`LoginOutcome`]. [`submit_login`] is the thin store-facing wrapper that
//! resolves the account and reads the clock.
//!
//! Rules short-circuit: the first one that fires decides the outcome and
//! later account state is never consulted. The order is contractual, not an
//! optimization. Checking credentials before lockout, for example, is what
//! keeps a locked account's lockout invisible to someone guessing passwords.

use gatewise_account::{Account, AccountStore};
use gatewise_core::{is_email_shaped, Timestamp};

use crate::outcome::{DenialReason, LoginOutcome, ValidationFailure};

/// Classify one login attempt.
///
/// `account` is the snapshot the caller resolved for the submitted username
/// (`None` when nothing is provisioned under it); `now` is the single
/// instant lockout deadlines are compared against.
///
/// The rules, in order, first match wins:
///
/// 1. Username empty or whitespace-only
/// 2. Password empty or whitespace-only
/// 3. Username not email-shaped
/// 4. No account, or stored password differs from the submitted one
/// 5. Lockout deadline strictly after `now`
/// 6. Account disabled
/// 7. Email not verified
/// 8. Password expired
/// 9. Success
///
/// Pure: no store access, no clock access, no side effects. Calling it twice
/// with the same inputs yields the same outcome.
pub fn evaluate_login(
    username: &str,
    password: &str,
    account: Option<&Account>,
    now: Timestamp,
) -> LoginOutcome {
    // 1. Username present?
    if username.trim().is_empty() {
        return LoginOutcome::validation_failure(ValidationFailure::UsernameMissing);
    }

    // 2. Password present?
    if password.trim().is_empty() {
        return LoginOutcome::validation_failure(ValidationFailure::PasswordMissing);
    }

    // 3. Username shaped like an email? Checked as submitted, no trimming.
    if !is_email_shaped(username) {
        return LoginOutcome::validation_failure(ValidationFailure::UsernameNotEmail);
    }

    // 4. Credentials. Unknown account and wrong password collapse into the
    //    same denial; nothing later must distinguish them.
    let account = match account {
        Some(account) if account.password_matches(password) => account,
        _ => return LoginOutcome::denied(DenialReason::InvalidCredentials),
    };

    // 5. Lockout window still open?
    if account.is_locked_at(now) {
        return LoginOutcome::denied(DenialReason::AccountLocked);
    }

    // 6. Administratively disabled?
    if account.disabled {
        return LoginOutcome::denied(DenialReason::AccountDisabled);
    }

    // 7. Email verified?
    if !account.email_verified {
        return LoginOutcome::denied(DenialReason::EmailUnverified);
    }

    // 8. Credential rotation due?
    if account.password_expired {
        return LoginOutcome::password_change_required();
    }

    // 9. Success.
    LoginOutcome::success(account.display_name.clone())
}

/// Evaluate a login attempt against the store.
///
/// Resolves the submitted username through [`AccountStore::lookup`] (which
/// normalizes case), reads the clock exactly once, and delegates to
/// [`evaluate_login`]. Reading `now` once keeps every lockout comparison in
/// a single evaluation internally consistent.
pub fn submit_login(store: &AccountStore, username: &str, password: &str) -> LoginOutcome {
    let now = Timestamp::now();
    let outcome = evaluate_login(username, password, store.lookup(username), now);
    tracing::debug!(
        redirect = %outcome.redirect,
        session_created = outcome.session_created,
        validation = ?outcome.validation,
        denial = ?outcome.denial,
        "login evaluated"
    );
    outcome
}
