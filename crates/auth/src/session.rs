//! Read access to the session the login and role-selection flows persist.
//!
//! The store itself is external (browser storage, a snapshot file, ...). This
//! module only parses what it finds and never writes.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::{ActiveRole, Principal};

/// Key holding the serialized [`Principal`].
pub const PRINCIPAL_KEY: &str = "usuario";

/// Key holding the serialized [`ActiveRole`].
pub const ACTIVE_ROLE_KEY: &str = "rolActivo";

/// Text key-value store owned by someone else.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Typed view of the current session.
///
/// Implementations must return `None` for anything they cannot read or
/// validate; they must not panic.
pub trait SessionStore {
    fn principal(&self) -> Option<Principal>;
    fn active_role(&self) -> Option<ActiveRole>;
}

impl<T: SessionStore + ?Sized> SessionStore for &T {
    fn principal(&self) -> Option<Principal> {
        (**self).principal()
    }

    fn active_role(&self) -> Option<ActiveRole> {
        (**self).active_role()
    }
}

/// In-memory [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}

impl FromIterator<(String, String)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

/// [`SessionStore`] backed by a [`KeyValueStore`] holding JSON text under
/// [`PRINCIPAL_KEY`] and [`ACTIVE_ROLE_KEY`].
#[derive(Debug, Clone)]
pub struct KvSessionStore<S> {
    inner: S,
}

impl<S: KeyValueStore> KvSessionStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.inner.get(key)?;
        match serde_json::from_str::<T>(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, error = %err, "ignoring malformed session value");
                None
            }
        }
    }
}

impl<S: KeyValueStore> SessionStore for KvSessionStore<S> {
    fn principal(&self) -> Option<Principal> {
        self.read(PRINCIPAL_KEY)
    }

    fn active_role(&self) -> Option<ActiveRole> {
        let role: ActiveRole = self.read(ACTIVE_ROLE_KEY)?;
        if role.is_valid() {
            Some(role)
        } else {
            tracing::warn!(key = ACTIVE_ROLE_KEY, "ignoring active role without a name");
            None
        }
    }
}
