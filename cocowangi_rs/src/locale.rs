//! Display language selection.
//!
//! Every bilingual string on the site goes through [`select`]: callers hand in
//! the English and Indonesian copy and the current [`Language`] picks one.

use serde::{Deserialize, Serialize};

use crate::settings::{LANGUAGE_KEY, SettingsStore};

/// One of the two supported display languages.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English, the primary language.
    #[default]
    En,
    /// Bahasa Indonesia.
    Id,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Id];

    /// Code persisted in the settings store.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Id => "id",
        }
    }

    /// Parse a stored or browser-reported code (`en`, `EN`, `en-US`, `id-ID`).
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        match primary {
            "en" => Some(Language::En),
            "id" | "in" => Some(Language::Id),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Id,
            Language::Id => Language::En,
        }
    }

    pub fn is_primary(self) -> bool {
        self == Language::En
    }

    /// Short label shown on the switcher button.
    pub fn switcher_label(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Id => "ID",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::En => "🇺🇸",
            Language::Id => "🇮🇩",
        }
    }
}

/// Pick the copy for `lang`: `primary` for English, `secondary` otherwise.
pub fn select<'a>(lang: Language, primary: &'a str, secondary: &'a str) -> &'a str {
    if lang.is_primary() { primary } else { secondary }
}

/// Holds the current language and keeps it persisted.
///
/// Storage failures never surface to the user: reads fall back to English and
/// a failed write still flips the in-memory value for the rest of the session.
#[derive(Debug)]
pub struct LocaleManager<S: SettingsStore> {
    store: S,
    language: Language,
}

impl<S: SettingsStore> LocaleManager<S> {
    /// Restore the persisted language, or start in English.
    pub fn new(store: S) -> Self {
        let language = match store.get(LANGUAGE_KEY) {
            Ok(Some(code)) => Language::from_code(&code).unwrap_or_else(|| {
                tracing::warn!(%code, "ignoring unknown persisted language");
                Language::default()
            }),
            Ok(None) => Language::default(),
            Err(err) => {
                tracing::warn!(error = %err, "language preference unavailable, using default");
                Language::default()
            }
        };
        tracing::debug!(language = language.code(), "locale initialised");
        Self { store, language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Flip to the other language, persisting the choice first.
    pub fn toggle(&mut self) -> Language {
        self.set_language(self.language.toggled())
    }

    /// Switch to `language` explicitly. Persists even when unchanged so the
    /// stored value always reflects the last explicit choice.
    pub fn set_language(&mut self, language: Language) -> Language {
        if let Err(err) = self.store.set(LANGUAGE_KEY, language.code()) {
            tracing::warn!(error = %err, "could not persist language, keeping it for this session");
        }
        self.language = language;
        tracing::debug!(language = language.code(), "language changed");
        language
    }

    /// [`select`] against the current language.
    pub fn select<'a>(&self, primary: &'a str, secondary: &'a str) -> &'a str {
        select(self.language, primary, secondary)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{MemoryStore, SettingsError};

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

    #[test]
    fn defaults_to_english_when_nothing_is_stored() {
        let locale = LocaleManager::new(MemoryStore::new());
        assert_eq!(locale.language(), Language::En);
        assert_eq!(locale.select("Home", "Beranda"), "Home");
    }

    #[test]
    fn toggle_switches_copy_and_back() {
        let mut locale = LocaleManager::new(MemoryStore::new());
        locale.toggle();
        assert_eq!(locale.select("Home", "Beranda"), "Beranda");
        locale.toggle();
        assert_eq!(locale.select("Home", "Beranda"), "Home");
    }

    #[test]
    fn toggle_persists_before_reload() {
        let store = MemoryStore::new();
        {
            let mut locale = LocaleManager::new(&store);
            locale.toggle();
        }
        assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("id"));
        let reloaded = LocaleManager::new(&store);
        assert_eq!(reloaded.language(), Language::Id);
    }

    #[test]
    fn unknown_stored_code_falls_back() {
        let store = MemoryStore::new();
        store.set(LANGUAGE_KEY, "klingon").unwrap();
        assert_eq!(LocaleManager::new(&store).language(), Language::En);
    }

    #[test]
    fn unavailable_store_still_toggles_for_the_session() {
        let mut locale = LocaleManager::new(Unavailable);
        assert_eq!(locale.language(), Language::En);
        assert_eq!(locale.toggle(), Language::Id);
        assert_eq!(locale.select("Products", "Produk"), "Produk");
    }

    #[test]
    fn parses_regional_codes() {
        assert_eq!(Language::from_code("en-US"), Some(Language::En));
        assert_eq!(Language::from_code("ID"), Some(Language::Id));
        assert_eq!(Language::from_code("id_ID"), Some(Language::Id));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code(""), None);
    }
}
