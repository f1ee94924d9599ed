//! Dark/light colour scheme.

use crate::settings::{SettingsStore, THEME_DARK, THEME_KEY};

/// The document-level element whose class set carries the colour scheme.
///
/// This is the only place the site touches global presentation state.
pub trait PresentationRoot {
    fn set_dark(&self, enabled: bool);
}

impl<R: PresentationRoot + ?Sized> PresentationRoot for &R {
    fn set_dark(&self, enabled: bool) {
        (**self).set_dark(enabled)
    }
}

/// Holds the dark-mode flag, keeps it persisted and mirrors it onto the root.
///
/// Dark mode is stored by presence: the key holds `"dark"` while enabled and
/// is removed when switching back to light.
#[derive(Debug)]
pub struct ThemeManager<S: SettingsStore, R: PresentationRoot> {
    store: S,
    root: R,
    dark: bool,
}

impl<S: SettingsStore, R: PresentationRoot> ThemeManager<S, R> {
    /// Restore the persisted scheme. `fallback` is used only when nothing was
    /// stored (or the store is unreachable), e.g. the system colour preference.
    pub fn new(store: S, root: R, fallback: bool) -> Self {
        let dark = match store.get(THEME_KEY) {
            Ok(Some(value)) => value == THEME_DARK,
            Ok(None) => fallback,
            Err(err) => {
                tracing::warn!(error = %err, "theme preference unavailable, using default");
                fallback
            }
        };
        root.set_dark(dark);
        tracing::debug!(dark, "theme initialised");
        Self { store, root, dark }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn toggle(&mut self) -> bool {
        self.set_dark(!self.dark)
    }

    pub fn set_dark(&mut self, dark: bool) -> bool {
        let persisted = if dark {
            self.store.set(THEME_KEY, THEME_DARK)
        } else {
            self.store.remove(THEME_KEY)
        };
        if let Err(err) = persisted {
            tracing::warn!(error = %err, "could not persist theme, keeping it for this session");
        }
        self.dark = dark;
        self.root.set_dark(dark);
        tracing::debug!(dark, "theme changed");
        dark
    }

    pub fn root(&self) -> &R {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{MemoryStore, SettingsError};
    use std::cell::Cell;

    struct Unavailable;

    impl SettingsStore for Unavailable {
        fn get(&self, _key: &str) -> Result<Option<String>, SettingsError> {
            Err(SettingsError::Unavailable)
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), SettingsError> {
            Err(SettingsError::Unavailable)
        }
        fn remove(&self, _key: &str) -> Result<(), SettingsError> {
            Err(SettingsError::Unavailable)
        }
    }

    #[derive(Default)]
    struct Root {
        dark: Cell<bool>,
        writes: Cell<usize>,
    }

    impl PresentationRoot for Root {
        fn set_dark(&self, enabled: bool) {
            self.dark.set(enabled);
            self.writes.set(self.writes.get() + 1);
        }
    }

    #[test]
    fn applies_initial_state_to_root() {
        let store = MemoryStore::new();
        store.set(THEME_KEY, THEME_DARK).unwrap();
        let root = Root::default();
        let theme = ThemeManager::new(&store, &root, false);
        assert!(theme.is_dark());
        assert!(root.dark.get());
        assert_eq!(root.writes.get(), 1);
    }

    #[test]
    fn fallback_only_applies_without_stored_value() {
        let store = MemoryStore::new();
        let root = Root::default();
        assert!(ThemeManager::new(&store, &root, true).is_dark());

        store.set(THEME_KEY, "light").unwrap();
        assert!(!ThemeManager::new(&store, &root, true).is_dark());
    }

    #[test]
    fn toggle_to_light_removes_the_key() {
        let store = MemoryStore::new();
        let root = Root::default();
        let mut theme = ThemeManager::new(&store, &root, false);

        assert!(theme.toggle());
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some(THEME_DARK));
        assert!(root.dark.get());

        assert!(!theme.toggle());
        assert_eq!(store.get(THEME_KEY).unwrap(), None);
        assert!(!root.dark.get());
    }

    #[test]
    fn unavailable_store_uses_fallback_and_still_toggles() {
        let root = Root::default();
        let mut theme = ThemeManager::new(Unavailable, &root, false);
        assert!(!theme.is_dark());
        assert!(!root.dark.get());

        assert!(theme.toggle());
        assert!(root.dark.get());
        assert!(!theme.toggle());
        assert!(!root.dark.get());
        assert_eq!(root.writes.get(), 3);

        let prefers_dark = ThemeManager::new(Unavailable, Root::default(), true);
        assert!(prefers_dark.is_dark());
        assert!(prefers_dark.root().dark.get());
    }
}
