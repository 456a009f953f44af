//! Domain types.

mod secret;

pub use secret::SecretRecord;
