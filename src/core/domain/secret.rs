//! Secret metadata.
//!
//! What the store knows about a secret besides its sealed value.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::types::SecretKey;

/// A stored secret's key and timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecretRecord {
    pub key: SecretKey,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SecretRecord {
    /// Record for a secret written just now.
    pub fn new(key: SecretKey, at: DateTime<Utc>) -> Self {
        Self {
            key,
            created_at: at,
            updated_at: at,
        }
    }

    /// Whether the value was replaced after first being written.
    pub fn was_updated(&self) -> bool {
        self.updated_at > self.created_at
    }
}

impl std::fmt::Display for SecretRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key)
    }
}
