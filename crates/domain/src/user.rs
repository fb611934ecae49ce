//! User: the owner of one or more property listings.

use serde::{Deserialize, Serialize};

use crate::error::{HomesteadError, ValidationError};
use crate::id::UserId;
use crate::time::{self, Timestamp};

/// Email of the placeholder owner used while no authenticated user exists.
pub const PLACEHOLDER_EMAIL: &str = "demo@example.com";

/// Credential stored for the placeholder owner.
pub const PLACEHOLDER_PASSWORD: &str = "hashed_password";

/// Display name of the placeholder owner.
pub const PLACEHOLDER_NAME: &str = "Demo User";

/// A registered account that owns listings.
///
/// The password never leaves the process through serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub name: Option<String>,
    pub created_at: Timestamp,
}

impl User {
    /// Create a builder for constructing a [`User`].
    #[must_use]
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }

    /// The owner that listings are attached to when no session exists.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            id: UserId::new(),
            email: PLACEHOLDER_EMAIL.to_string(),
            password: PLACEHOLDER_PASSWORD.to_string(),
            name: Some(PLACEHOLDER_NAME.to_string()),
            created_at: time::now(),
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HomesteadError::Validation`] when `email` is blank.
    pub fn validate(&self) -> Result<(), HomesteadError> {
        if self.email.trim().is_empty() {
            return Err(ValidationError::EmptyEmail.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`User`].
#[derive(Debug, Default)]
pub struct UserBuilder {
    id: Option<UserId>,
    email: Option<String>,
    password: Option<String>,
    name: Option<String>,
    created_at: Option<Timestamp>,
}

impl UserBuilder {
    #[must_use]
    pub fn id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Consume the builder, validate, and return a [`User`].
    ///
    /// # Errors
    ///
    /// Returns [`HomesteadError::Validation`] if `email` is missing or blank.
    pub fn build(self) -> Result<User, HomesteadError> {
        let user = User {
            id: self.id.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
            name: self.name,
            created_at: self.created_at.unwrap_or_else(time::now),
        };
        user.validate()?;
        Ok(user)
    }
}
