//! # Login Outcomes
//!
//! The result vocabulary of a login evaluation. Every user-facing string in
//! this module is contractual: external surfaces render these exact texts,
//! so each lives in one fixed table on a closed enum. A spelling that is not
//! in the table cannot be represented, and text coming back from a surface
//! can be validated against the table it must have come from.

use gatewise_core::ValidationError;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RedirectTarget
// ---------------------------------------------------------------------------

/// Where the user is sent after the attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectTarget {
    /// Back to (or staying on) the login form.
    LoginPage,
    /// The signed-in landing page.
    IndexPage,
    /// The forced credential rotation page.
    ChangePasswordPage,
}

impl RedirectTarget {
    /// All targets, in rule-chain order of first appearance.
    pub fn all() -> &'static [RedirectTarget] {
        &[Self::LoginPage, Self::ChangePasswordPage, Self::IndexPage]
    }

    /// Returns the snake_case string identifier for this target.
    ///
    /// Matches the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LoginPage => "login_page",
            Self::IndexPage => "index_page",
            Self::ChangePasswordPage => "change_password_page",
        }
    }
}

impl std::fmt::Display for RedirectTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RedirectTarget {
    type Err = ValidationError;

    /// Parse a redirect target from its snake_case string identifier.
    ///
    /// Accepts the same identifiers produced by [`RedirectTarget::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "login_page" => Ok(Self::LoginPage),
            "index_page" => Ok(Self::IndexPage),
            "change_password_page" => Ok(Self::ChangePasswordPage),
            other => Err(ValidationError::UnknownLabel {
                kind: "redirect target",
                value: other.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// SuggestedAction
// ---------------------------------------------------------------------------

/// A follow-up control offered alongside a denial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestedAction {
    /// Offer to send the verification email again.
    ResendVerificationEmail,
}

impl SuggestedAction {
    /// Returns the snake_case string identifier for this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ResendVerificationEmail => "resend_verification_email",
        }
    }

    /// The exact text rendered on the action control.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ResendVerificationEmail => "Resend verification email",
        }
    }

    /// Resolve rendered text back to an action.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownLabel`] for text outside the table.
    pub fn from_label(label: &str) -> Result<Self, ValidationError> {
        match label {
            "Resend verification email" => Ok(Self::ResendVerificationEmail),
            other => Err(ValidationError::UnknownLabel {
                kind: "suggested action",
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for SuggestedAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ValidationFailure
// ---------------------------------------------------------------------------

/// An input-shape rejection: the attempt was malformed before any account
/// state was consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationFailure {
    /// No username submitted (empty or whitespace-only).
    UsernameMissing,
    /// No password submitted (empty or whitespace-only).
    PasswordMissing,
    /// The username is not email-shaped.
    UsernameNotEmail,
}

impl ValidationFailure {
    /// All failures, in rule order.
    pub fn all() -> &'static [ValidationFailure] {
        &[
            Self::UsernameMissing,
            Self::PasswordMissing,
            Self::UsernameNotEmail,
        ]
    }

    /// Returns the snake_case string identifier for this failure.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UsernameMissing => "username_missing",
            Self::PasswordMissing => "password_missing",
            Self::UsernameNotEmail => "username_not_email",
        }
    }

    /// The exact text shown beside the offending field.
    pub fn message(&self) -> &'static str {
        match self {
            Self::UsernameMissing => "Username is required.",
            Self::PasswordMissing => "Password is required.",
            Self::UsernameNotEmail => "Enter a valid email address.",
        }
    }
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DenialReason
// ---------------------------------------------------------------------------

/// An authentication or account-state rejection of a well-formed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// Unknown account or wrong password. The two cases share one reason and
    /// one message, so a response never confirms that an account exists.
    InvalidCredentials,
    /// A lockout deadline lies in the future.
    AccountLocked,
    /// The account was disabled by an administrator.
    AccountDisabled,
    /// The account's email address is not verified.
    EmailUnverified,
}

impl DenialReason {
    /// All reasons, in rule order.
    pub fn all() -> &'static [DenialReason] {
        &[
            Self::InvalidCredentials,
            Self::AccountLocked,
            Self::AccountDisabled,
            Self::EmailUnverified,
        ]
    }

    /// Returns the snake_case string identifier for this reason.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "invalid_credentials",
            Self::AccountLocked => "account_locked",
            Self::AccountDisabled => "account_disabled",
            Self::EmailUnverified => "email_unverified",
        }
    }

    /// The exact error text shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "Invalid username or password.",
            Self::AccountLocked => "Your account is locked. Try again later.",
            Self::AccountDisabled => "Your account has been disabled. Contact support.",
            Self::EmailUnverified => "Please verify your email to continue.",
        }
    }

    /// Follow-up controls offered alongside this denial.
    ///
    /// Only the unverified-email denial carries one: the user can ask for
    /// the verification email again. Lockout and disablement offer nothing
    /// for the user to do from the login page.
    pub fn suggested_actions(&self) -> &'static [SuggestedAction] {
        match self {
            Self::EmailUnverified => &[SuggestedAction::ResendVerificationEmail],
            Self::InvalidCredentials | Self::AccountLocked | Self::AccountDisabled => &[],
        }
    }
}

impl std::fmt::Display for DenialReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LoginOutcome
// ---------------------------------------------------------------------------

/// The complete result of evaluating one login attempt.
///
/// Exactly one terminal cause holds per outcome: a validation failure, a
/// denial, or a created session. The one exception is the expired-password
/// redirect, which carries no cause at all; the redirect target itself is
/// the whole story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginOutcome {
    /// Where the user goes next.
    pub redirect: RedirectTarget,
    /// Whether a session was created. True only for a full success.
    pub session_created: bool,
    /// Input-shape failure, if the attempt never reached account state.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub validation: Option<ValidationFailure>,
    /// Denial, if a well-formed attempt was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub denial: Option<DenialReason>,
    /// Display name for the page header. Set only on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub header_display_name: Option<String>,
    /// Follow-up controls to render, in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub suggested_actions: Vec<SuggestedAction>,
}

impl LoginOutcome {
    /// Reject the attempt with an input-shape failure.
    pub fn validation_failure(failure: ValidationFailure) -> Self {
        Self {
            validation: Some(failure),
            ..Self::default()
        }
    }

    /// Deny the attempt, carrying the reason's suggested actions.
    pub fn denied(reason: DenialReason) -> Self {
        Self {
            denial: Some(reason),
            suggested_actions: reason.suggested_actions().to_vec(),
            ..Self::default()
        }
    }

    /// Send the user to the change-password page without a session.
    ///
    /// Carries no validation or denial text; the redirect is the whole
    /// outcome.
    pub fn password_change_required() -> Self {
        Self {
            redirect: RedirectTarget::ChangePasswordPage,
            ..Self::default()
        }
    }

    /// Grant a session and land on the index page.
    pub fn success(display_name: impl Into<String>) -> Self {
        Self {
            redirect: RedirectTarget::IndexPage,
            session_created: true,
            header_display_name: Some(display_name.into()),
            ..Self::default()
        }
    }

    /// The fixed validation text, if rule 1, 2, or 3 rejected the attempt.
    pub fn validation_message(&self) -> Option<&'static str> {
        self.validation.map(|f| f.message())
    }

    /// The fixed error text, if a denial rejected the attempt.
    pub fn error_message(&self) -> Option<&'static str> {
        self.denial.map(|r| r.message())
    }

    /// Whether the attempt fully succeeded.
    pub fn is_success(&self) -> bool {
        self.session_created
    }

    /// Whether the attempt was parked on the change-password page.
    pub fn requires_password_change(&self) -> bool {
        matches!(self.redirect, RedirectTarget::ChangePasswordPage)
    }
}

impl Default for LoginOutcome {
    /// The pre-rule state: back to the login page with nothing set. Every
    /// evaluation starts here and the deciding rule overrides what it needs.
    fn default() -> Self {
        Self {
            redirect: RedirectTarget::LoginPage,
            session_created: false,
            validation: None,
            denial: None,
            header_display_name: None,
            suggested_actions: Vec::new(),
        }
    }
}
