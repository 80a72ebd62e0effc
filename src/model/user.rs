use serde::{Deserialize, Serialize};

use crate::directory::UserError;

/// Identifier of a registered user.
///
/// Lookups accept any `i64`, but only positive values can belong to a [`User`].
pub type UserId = i64;

/// Represents a registered user in the directory.
///
/// A `User` is immutable once constructed. [`User::new`] guarantees that the
/// id is positive and that neither `name` nor `email` is empty, so anything
/// handed out by a [`UserDirectory`](crate::directory::UserDirectory) can be
/// notified without further checks. Deserialization goes through
/// [`UserRecord`] and the same checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserRecord")]
pub struct User {
    id: UserId,
    name: String,
    email: String,
}

/// Unvalidated wire shape of a [`User`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl TryFrom<UserRecord> for User {
    type Error = UserError;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        User::new(record.id, record.name, record.email)
    }
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Arguments
    /// * `id` - Positive identifier
    /// * `name` - User's display name
    /// * `email` - User's email address (format is not validated)
    ///
    /// # Errors
    /// - [`UserError::InvalidId`] if `id` is zero or negative
    /// - [`UserError::ValidationError`] if `name` or `email` is blank
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, UserError> {
        let name = name.into();
        let email = email.into();

        if id <= 0 {
            return Err(UserError::InvalidId(id));
        }
        if name.trim().is_empty() {
            return Err(UserError::ValidationError(format!(
                "user {id} has an empty name"
            )));
        }
        if email.trim().is_empty() {
            return Err(UserError::ValidationError(format!(
                "user {id} has an empty email"
            )));
        }

        Ok(Self { id, name, email })
    }

    /// Builds a record from literals already known to satisfy the invariants.
    pub(crate) fn from_seed(id: UserId, name: &str, email: &str) -> Self {
        debug_assert!(id > 0 && !name.is_empty() && !email.is_empty());
        Self {
            id,
            name: name.to_owned(),
            email: email.to_owned(),
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
