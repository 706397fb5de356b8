//! Domain models shared across the engine.

pub mod transaction;
pub mod user;

pub use transaction::{Payment, Transaction};
pub use user::User;
