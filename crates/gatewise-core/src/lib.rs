//! # gatewise-core — Foundational Types for Gatewise
//!
//! This crate is the bedrock of the Gatewise workspace. It defines the
//! primitives that the account store and the login decision engine are built
//! on. Every other crate in the workspace depends on `gatewise-core`; it
//! depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrapper for the account identifier.** [`AccountId`] normalizes
//!    to lowercase at construction, so two spellings of the same address can
//!    never coexist as distinct keys. No bare strings for identifiers.
//!
//! 2. **Shape checking is a business rule, not a construction invariant.**
//!    [`AccountId`] accepts any string; [`is_email_shaped`] is a separate
//!    predicate applied by the login rules to the raw submitted username.
//!
//! 3. **UTC-only timestamps.** The [`Timestamp`] type enforces UTC with Z
//!    suffix and seconds precision. Lockout comparisons never depend on a
//!    local timezone.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `gatewise-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::{GatewiseError, ValidationError};
pub use identity::{is_email_shaped, AccountId};
pub use temporal::Timestamp;
