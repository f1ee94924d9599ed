//! Application state shared by every page through Leptos context.

use std::rc::Rc;
use std::time::Duration;

use cocowangi::config::ConfigError;
use cocowangi::content::ContentError;
use cocowangi::locale::select;
use cocowangi::settings::{MemoryStore, SettingsStore};
use cocowangi::{Language, LocaleManager, SiteConfig, SiteContent, ThemeManager};
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use thiserror::Error;

use crate::browser::{BrowserStore, DocumentRoot, prefers_dark};

const TOAST_DURATION: Duration = Duration::from_millis(4000);

type Store = Rc<dyn SettingsStore>;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("site configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("site content: {0}")]
    Content(#[from] ContentError),
}

/// Configuration and content bundled into the binary.
#[derive(Debug, Clone)]
pub struct SiteData {
    pub config: SiteConfig,
    pub content: SiteContent,
}

impl SiteData {
    pub fn embedded() -> Result<Self, StartupError> {
        let config = SiteConfig::embedded()?;
        let content = SiteContent::embedded()?;
        content.check_categories(&config);
        Ok(Self { config, content })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub body: String,
    seq: u64,
}

/// Handles are `Copy`; the managers themselves live in the reactive arena.
#[derive(Clone, Copy)]
pub struct AppState {
    language: RwSignal<Language>,
    dark: RwSignal<bool>,
    locale: StoredValue<LocaleManager<Store>, LocalStorage>,
    theme: StoredValue<ThemeManager<Store, DocumentRoot>, LocalStorage>,
    config: StoredValue<SiteConfig>,
    content: StoredValue<SiteContent>,
    toast: RwSignal<Option<Toast>>,
    toast_seq: StoredValue<u64>,
}

impl AppState {
    pub fn new(data: SiteData) -> Self {
        let store: Store = match BrowserStore::open() {
            Some(store) => Rc::new(store),
            None => {
                tracing::warn!("localStorage unavailable, preferences kept for this visit only");
                Rc::new(MemoryStore::new())
            }
        };
        let locale = LocaleManager::new(Rc::clone(&store));
        let theme = ThemeManager::new(store, DocumentRoot, prefers_dark());
        tracing::debug!(
            language = locale.language().code(),
            dark = theme.is_dark(),
            "preferences restored"
        );

        Self {
            language: RwSignal::new(locale.language()),
            dark: RwSignal::new(theme.is_dark()),
            locale: StoredValue::new_local(locale),
            theme: StoredValue::new_local(theme),
            config: StoredValue::new(data.config),
            content: StoredValue::new(data.content),
            toast: RwSignal::new(None),
            toast_seq: StoredValue::new(0),
        }
    }

    /// Current language. Tracks, so copy built from it re-renders on toggle.
    pub fn lang(&self) -> Language {
        self.language.get()
    }

    /// English or Indonesian copy for the current language.
    pub fn t(&self, en: &'static str, id: &'static str) -> &'static str {
        select(self.lang(), en, id)
    }

    pub fn toggle_language(&self) {
        let mut next = Language::default();
        self.locale.update_value(|locale| next = locale.toggle());
        self.language.set(next);
    }

    pub fn is_dark(&self) -> bool {
        self.dark.get()
    }

    pub fn toggle_theme(&self) {
        let mut dark = false;
        self.theme.update_value(|theme| dark = theme.toggle());
        self.dark.set(dark);
    }

    pub fn with_config<R>(&self, f: impl FnOnce(&SiteConfig) -> R) -> R {
        self.config.with_value(f)
    }

    pub fn with_content<R>(&self, f: impl FnOnce(&SiteContent) -> R) -> R {
        self.content.with_value(f)
    }

    pub fn toast(&self) -> Option<Toast> {
        self.toast.get()
    }

    /// Show a toast; it dismisses itself unless replaced first.
    pub fn notify(&self, kind: ToastKind, title: &str, body: impl Into<String>) {
        let mut seq = 0;
        self.toast_seq.update_value(|n| {
            *n += 1;
            seq = *n;
        });
        self.toast.set(Some(Toast {
            kind,
            title: title.to_string(),
            body: body.into(),
            seq,
        }));

        let toast = self.toast;
        set_timeout(
            move || {
                if toast.with_untracked(|t| t.as_ref().is_some_and(|t| t.seq == seq)) {
                    toast.set(None);
                }
            },
            TOAST_DURATION,
        );
    }

    pub fn dismiss_toast(&self) {
        self.toast.set(None);
    }
}

pub fn use_app() -> AppState {
    expect_context::<AppState>()
}
