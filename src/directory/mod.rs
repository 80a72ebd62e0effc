//! Read-only user store and the id → user lookup.
//!
//! A [`UserDirectory`] is built once and never mutated. Callers that want the
//! built-in demo data use [`UserDirectory::seeded`] (or the process-wide
//! [`seed`] copy); tests build their own with [`UserDirectory::from_users`].

pub mod error;

pub use error::*;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use tracing::{debug, instrument};

use crate::model::{User, UserId};

const SEED_USERS: [(UserId, &str, &str); 2] = [
    (1, "Alice", "alice@example.com"),
    (2, "Bob", "bob@example.com"),
];

static SEED: LazyLock<UserDirectory> = LazyLock::new(UserDirectory::seeded);

/// Immutable mapping from [`UserId`] to [`User`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDirectory {
    users: BTreeMap<UserId, User>,
}

impl UserDirectory {
    /// Directory holding the two demo users, Alice (1) and Bob (2).
    pub fn seeded() -> Self {
        let users = SEED_USERS
            .iter()
            .map(|&(id, name, email)| (id, User::from_seed(id, name, email)))
            .collect();
        Self { users }
    }

    /// Builds a directory from already validated users.
    ///
    /// # Errors
    /// [`UserError::DuplicateId`] if two users share an id.
    pub fn from_users(users: impl IntoIterator<Item = User>) -> Result<Self, UserError> {
        let mut map = BTreeMap::new();
        for user in users {
            let id = user.id();
            if map.insert(id, user).is_some() {
                return Err(UserError::DuplicateId(id));
            }
        }
        Ok(Self { users: map })
    }

    /// Returns the user registered under `id`, or `None` if there is none.
    ///
    /// Any integer is accepted. Zero, negative and unregistered ids simply
    /// yield `None`.
    #[instrument(skip(self))]
    pub fn lookup(&self, id: UserId) -> Option<&User> {
        let user = self.users.get(&id);
        debug!(found = user.is_some(), "Lookup");
        user
    }

    pub fn contains(&self, id: UserId) -> bool {
        self.users.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Iterates users in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }
}

/// The process-wide seeded directory.
pub fn seed() -> &'static UserDirectory {
    &SEED
}

/// Looks `id` up in the process-wide seeded directory.
pub fn lookup(id: UserId) -> Option<User> {
    seed().lookup(id).cloned()
}
