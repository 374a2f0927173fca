//! # gatewise-account — Account Directory
//!
//! Holds the accounts a login attempt is evaluated against. Accounts enter
//! the directory through administrative provisioning and change state only
//! through the explicit administrative operations ([`AccountStore::lock`],
//! [`AccountStore::disable`], and friends). Nothing in this crate decides a
//! login; that is `gatewise-engine`'s job, which reads accounts from here
//! via [`AccountStore::lookup`].
//!
//! ## Key Properties
//!
//! - **Case-insensitive keying.** Every operation normalizes its identifier
//!   through `AccountId`, so `Bob@Example.com` and `bob@example.com` always
//!   resolve to the same record.
//! - **Permissive administration.** Mutating an unknown identifier is a
//!   silent no-op, never an error. Setup scripts may administer accounts in
//!   any order, and a store that answers "no such account" identically for
//!   every spelling gives away nothing about which accounts exist.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod account;
pub mod store;

pub use account::{Account, DEFAULT_DISPLAY_NAME};
pub use store::AccountStore;
