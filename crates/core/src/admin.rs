//! Admin password gate.
//!
//! A single stateless comparison against the configured secret. No hashing,
//! sessions, or rate limiting.

use crate::error::CoreError;

/// Message returned to the caller on a mismatch.
pub const WRONG_PASSWORD: &str = "Wrong password";

#[derive(Clone)]
pub struct AdminGate {
    secret: String,
}

impl AdminGate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Compare `supplied` with the configured secret.
    ///
    /// An empty secret never matches, so an unset secret cannot be satisfied
    /// by an empty password.
    pub fn verify(&self, supplied: &str) -> Result<(), CoreError> {
        if !self.secret.is_empty() && supplied == self.secret {
            Ok(())
        } else {
            Err(CoreError::Unauthorized(WRONG_PASSWORD.to_string()))
        }
    }
}

impl std::fmt::Debug for AdminGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminGate").finish_non_exhaustive()
    }
}
