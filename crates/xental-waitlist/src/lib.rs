//! Waitlist email capture.
//!
//! Normalizes the address, inserts `{ email, source }` into a table with a
//! unique email column, and turns the outcome into one of a few fixed
//! user-facing messages.

pub mod email;
pub mod form;
pub mod rest;
pub mod store;
pub mod worker;

pub use form::{FormStatus, WaitlistForm};
pub use rest::RestStore;
pub use store::{MemoryStore, StoreError, WaitlistEntry, WaitlistStore};
pub use worker::Submitter;
