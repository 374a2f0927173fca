//! # Outcome Contract Test
//!
//! Pins the externally-visible surface of a login outcome:
//! - The exact user-facing strings, which consumers match on verbatim
//! - The JSON shape a rendering surface receives
//! - The closed label tables that reject text from outside the contract
//! - Rule precedence when an account is in several rejection states at once

use gatewise_account::AccountStore;
use gatewise_core::Timestamp;
use gatewise_engine::{
    submit_login, DenialReason, LoginOutcome, RedirectTarget, SuggestedAction, ValidationFailure,
};
use serde_json::{json, Value};

fn outcome_json(outcome: &LoginOutcome) -> Value {
    serde_json::to_value(outcome).expect("outcome serializes")
}

// ---------------------------------------------------------------------------
// 1. Verbatim user-facing text
// ---------------------------------------------------------------------------

#[test]
fn the_full_message_table_is_verbatim() {
    let expected = [
        ("Username is required.", ValidationFailure::UsernameMissing.message()),
        ("Password is required.", ValidationFailure::PasswordMissing.message()),
        (
            "Enter a valid email address.",
            ValidationFailure::UsernameNotEmail.message(),
        ),
        (
            "Invalid username or password.",
            DenialReason::InvalidCredentials.message(),
        ),
        (
            "Your account is locked. Try again later.",
            DenialReason::AccountLocked.message(),
        ),
        (
            "Your account has been disabled. Contact support.",
            DenialReason::AccountDisabled.message(),
        ),
        (
            "Please verify your email to continue.",
            DenialReason::EmailUnverified.message(),
        ),
    ];
    for (text, message) in expected {
        assert_eq!(message, text);
    }
    assert_eq!(
        SuggestedAction::ResendVerificationEmail.label(),
        "Resend verification email"
    );
}

#[test]
fn rendered_action_text_resolves_back_through_the_table() {
    let mut store = AccountStore::new();
    store.provision("bob@example.com", "secret", true);
    store.set_email_verified("bob@example.com", false);

    let outcome = submit_login(&store, "bob@example.com", "secret");
    let rendered = outcome.suggested_actions[0].label();
    assert_eq!(
        SuggestedAction::from_label(rendered).expect("contractual text"),
        SuggestedAction::ResendVerificationEmail
    );
}

#[test]
fn text_outside_the_tables_is_rejected() {
    assert!(SuggestedAction::from_label("Resend verification e-mail").is_err());
    assert!(SuggestedAction::from_label("").is_err());
    assert!("somewhere_else".parse::<RedirectTarget>().is_err());
}

// ---------------------------------------------------------------------------
// 2. JSON shape seen by a rendering surface
// ---------------------------------------------------------------------------

#[test]
fn success_outcome_json_shape() {
    let mut store = AccountStore::new();
    store.provision("bob@example.com", "secret", true);

    let outcome = submit_login(&store, "bob@example.com", "secret");
    assert_eq!(
        outcome_json(&outcome),
        json!({
            "redirect": "index_page",
            "session_created": true,
            "header_display_name": "Sanyi",
        })
    );
}

#[test]
fn denial_outcome_json_shape() {
    let mut store = AccountStore::new();
    store.provision("bob@example.com", "secret", true);
    store.set_email_verified("bob@example.com", false);

    let outcome = submit_login(&store, "bob@example.com", "secret");
    assert_eq!(
        outcome_json(&outcome),
        json!({
            "redirect": "login_page",
            "session_created": false,
            "denial": "email_unverified",
            "suggested_actions": ["resend_verification_email"],
        })
    );
}

#[test]
fn validation_outcome_json_shape() {
    let store = AccountStore::new();
    let outcome = submit_login(&store, "", "pw");
    assert_eq!(
        outcome_json(&outcome),
        json!({
            "redirect": "login_page",
            "session_created": false,
            "validation": "username_missing",
        })
    );
}

#[test]
fn password_change_outcome_json_shape() {
    let mut store = AccountStore::new();
    store.provision("bob@example.com", "secret", true);
    store.set_password_expired("bob@example.com", true);

    let outcome = submit_login(&store, "bob@example.com", "secret");
    // No cause fields at all; the redirect is the whole story.
    assert_eq!(
        outcome_json(&outcome),
        json!({
            "redirect": "change_password_page",
            "session_created": false,
        })
    );
}

#[test]
fn serialized_outcomes_deserialize_to_the_same_outcome() {
    let mut store = AccountStore::new();
    store.provision("bob@example.com", "secret", true);
    store.set_email_verified("bob@example.com", false);

    let outcome = submit_login(&store, "bob@example.com", "secret");
    let json = serde_json::to_string(&outcome).expect("outcome serializes");
    let back: LoginOutcome = serde_json::from_str(&json).expect("outcome deserializes");
    assert_eq!(outcome, back);
}

// ---------------------------------------------------------------------------
// 3. Rule precedence with stacked account states
// ---------------------------------------------------------------------------

#[test]
fn stacked_states_unwind_in_rule_order() {
    // Every rejection state at once; clearing them one at a time walks the
    // chain in order until the attempt finally succeeds.
    let mut store = AccountStore::new();
    store.provision("bob@example.com", "secret", true);
    store.lock("bob@example.com", 10);
    store.disable("bob@example.com");
    store.set_email_verified("bob@example.com", false);
    store.set_password_expired("bob@example.com", true);

    let outcome = submit_login(&store, "bob@example.com", "secret");
    assert_eq!(outcome.denial, Some(DenialReason::AccountLocked));

    store.lock_until(
        "bob@example.com",
        Timestamp::parse("2020-01-01T00:00:00Z").expect("valid timestamp"),
    );
    let outcome = submit_login(&store, "bob@example.com", "secret");
    assert_eq!(outcome.denial, Some(DenialReason::AccountDisabled));

    store.provision("bob@example.com", "secret", true);
    store.set_email_verified("bob@example.com", false);
    store.set_password_expired("bob@example.com", true);
    let outcome = submit_login(&store, "bob@example.com", "secret");
    assert_eq!(outcome.denial, Some(DenialReason::EmailUnverified));

    store.set_email_verified("bob@example.com", true);
    let outcome = submit_login(&store, "bob@example.com", "secret");
    assert!(outcome.requires_password_change());

    store.set_password_expired("bob@example.com", false);
    let outcome = submit_login(&store, "bob@example.com", "secret");
    assert!(outcome.is_success());
}

#[test]
fn validation_always_outranks_account_state() {
    let mut store = AccountStore::new();
    store.provision("bob@example.com", "secret", true);
    store.disable("bob@example.com");

    // Shape failures fire before the disabled account is ever resolved.
    let outcome = submit_login(&store, "plainuser", "secret");
    assert_eq!(outcome.validation, Some(ValidationFailure::UsernameNotEmail));
    assert_eq!(outcome.denial, None);
}

#[test]
fn credentials_always_outrank_special_states() {
    // One wrong-password probe per special state; every answer is the same
    // generic denial, so none of the states is observable without the secret.
    let mut store = AccountStore::new();

    store.provision("locked@example.com", "pw", true);
    store.lock("locked@example.com", 10);
    store.provision("disabled@example.com", "pw", true);
    store.disable("disabled@example.com");
    store.provision("unverified@example.com", "pw", true);
    store.set_email_verified("unverified@example.com", false);
    store.provision("expired@example.com", "pw", true);
    store.set_password_expired("expired@example.com", true);

    let baseline = submit_login(&store, "missing@example.com", "wrong");
    for identifier in [
        "locked@example.com",
        "disabled@example.com",
        "unverified@example.com",
        "expired@example.com",
    ] {
        let probe = submit_login(&store, identifier, "wrong");
        assert_eq!(probe, baseline, "probe for {identifier:?}");
    }
}
