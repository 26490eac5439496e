use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IdentityError {
    #[error("email must not be empty")]
    Empty,
}

/// Local identifier for the person taking the quiz.
///
/// Never sent anywhere; it is only echoed back on the results screen.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserIdentity {
    email: String,
}

impl UserIdentity {
    /// Builds an identity from user input, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::Empty` if nothing remains after trimming.
    pub fn new(email: impl AsRef<str>) -> Result<Self, IdentityError> {
        let email = email.as_ref().trim();
        if email.is_empty() {
            return Err(IdentityError::Empty);
        }
        Ok(Self {
            email: email.to_string(),
        })
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Debug for UserIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserIdentity({})", self.email)
    }
}

impl fmt::Display for UserIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.email)
    }
}
