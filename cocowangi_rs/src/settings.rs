//! Persisted key-value settings.
//!
//! The site keeps exactly two user preferences across reloads: the display
//! language and the dark-mode flag. Both live behind [`SettingsStore`], so the
//! managers can run against browser `localStorage`, an in-memory map, or a
//! store that is not available at all.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

/// Key holding the language code (`en` / `id`).
pub const LANGUAGE_KEY: &str = "language";

/// Key whose presence (with value [`THEME_DARK`]) marks dark mode.
pub const THEME_KEY: &str = "theme";

/// Value stored under [`THEME_KEY`] while dark mode is enabled.
pub const THEME_DARK: &str = "dark";

/// Failure talking to the backing store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// No store exists in this environment (private browsing, SSR, tests).
    #[error("settings store is unavailable")]
    Unavailable,
    /// The store exists but refused the operation (quota, security policy).
    #[error("settings store rejected `{key}`: {reason}")]
    Rejected { key: String, reason: String },
}

/// String key-value persistence used by the locale and theme managers.
///
/// Values must round-trip exactly: `set(k, "x")` followed by `get(k)` yields
/// `Some("x")`.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError>;
    fn set(&self, key: &str, value: &str) -> Result<(), SettingsError>;
    fn remove(&self, key: &str) -> Result<(), SettingsError>;
}

impl<S: SettingsStore + ?Sized> SettingsStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), SettingsError> {
        (**self).remove(key)
    }
}

impl<S: SettingsStore + ?Sized> SettingsStore for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), SettingsError> {
        (**self).remove(key)
    }
}

/// Session-only store. Used when the browser store cannot be reached.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SettingsError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_values() {
        let store = MemoryStore::new();
        store.set(LANGUAGE_KEY, "id").unwrap();
        assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("id"));

        store.set(LANGUAGE_KEY, "en").unwrap();
        assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("en"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_clears_the_key() {
        let store = MemoryStore::new();
        store.set(THEME_KEY, THEME_DARK).unwrap();
        store.remove(THEME_KEY).unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn shared_handles_see_the_same_entries() {
        let store = Rc::new(MemoryStore::new());
        let other = Rc::clone(&store);
        other.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
