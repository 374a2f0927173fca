//! # gatewise-engine — Login Decision Engine
//!
//! Classifies one login attempt into a [`LoginOutcome`]: where the user goes
//! next, whether a session was created, and which fixed text (if any)
//! explains a rejection.
//!
//! ## The Rule Chain
//!
//! Evaluation is a strict, ordered chain; the first matching rule decides
//! and nothing later can override it:
//!
//! 1. Missing username
//! 2. Missing password
//! 3. Username not email-shaped
//! 4. Unknown account or wrong password (indistinguishable)
//! 5. Account locked
//! 6. Account disabled
//! 7. Email not verified
//! 8. Password expired (redirect to the change-password page)
//! 9. Success
//!
//! The ordering is part of the observable contract. A locked account with a
//! wrong password reports bad credentials, not the lockout; reordering would
//! change what callers and users see.
//!
//! ## Outcomes Are Data
//!
//! A denied login is a perfectly ordinary result, not an `Err`. Everything
//! user-facing is a closed enum rendering fixed text; free-form strings
//! never reach the outcome.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod evaluation;
pub mod outcome;

// Re-export primary types for ergonomic imports.
pub use evaluation::{evaluate_login, submit_login};
pub use outcome::{DenialReason, LoginOutcome, RedirectTarget, SuggestedAction, ValidationFailure};
