//! Login gate in front of the editing session.
//!
//! A plain comparison against one configured credential pair. It only decides
//! whether the caller may proceed to the editor; it is not a security control.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "admin";

/// Rejected login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    InvalidCredentials,
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials => f.write_str("Invalid username or password"),
        }
    }
}

impl Error for AuthError {}

/// Expected credential pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginGate {
    pub username: String,
    pub password: String,
}

impl Default for LoginGate {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }
}

impl LoginGate {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Checks one attempt. The username is trimmed, the password is not.
    pub fn attempt(&self, username: &str, password: &str) -> Result<(), AuthError> {
        if username.trim() == self.username && password == self.password {
            log::info!("event=login module=auth status=ok");
            Ok(())
        } else {
            log::warn!("event=login module=auth status=rejected");
            Err(AuthError::InvalidCredentials)
        }
    }
}
