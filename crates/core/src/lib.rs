//! Arjuna Core - Shared types library.
//!
//! This crate provides common types used across all Arjuna POS components:
//! - `pos` - The point-of-sale engine (catalog, cart, checkout, transport)
//! - `cli` - Terminal front-end for cashiers
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no persistence,
//! no transport. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
