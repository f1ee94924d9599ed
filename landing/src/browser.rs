//! Browser bindings for the core crate's seams: `localStorage` settings,
//! the document root's class list and outbound window hand-offs.

use cocowangi::inquiry::{ContactFormData, HandOffError, InquirySink};
use cocowangi::links;
use cocowangi::settings::{SettingsError, SettingsStore};
use cocowangi::{Language, PresentationRoot};
use wasm_bindgen::JsValue;

const DARK_CLASS: &str = "dark";
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// `window.localStorage`, absent in private modes of some browsers.
pub struct BrowserStore {
    storage: web_sys::Storage,
}

impl BrowserStore {
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }
}

impl SettingsStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        self.storage
            .get_item(key)
            .map_err(|err| rejected(key, &err))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| rejected(key, &err))
    }

    fn remove(&self, key: &str) -> Result<(), SettingsError> {
        self.storage
            .remove_item(key)
            .map_err(|err| rejected(key, &err))
    }
}

fn rejected(key: &str, err: &JsValue) -> SettingsError {
    SettingsError::Rejected {
        key: key.to_string(),
        reason: describe(err),
    }
}

/// `<html>`; dark mode is the `dark` class on it.
pub struct DocumentRoot;

impl PresentationRoot for DocumentRoot {
    fn set_dark(&self, enabled: bool) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            tracing::warn!("no document element, colour scheme not applied");
            return;
        };
        let classes = root.class_list();
        let applied = if enabled {
            classes.add_1(DARK_CLASS)
        } else {
            classes.remove_1(DARK_CLASS)
        };
        if let Err(err) = applied {
            tracing::warn!(error = %describe(&err), "could not update root class list");
        }
    }
}

/// System colour-scheme preference, used when nothing is stored yet.
pub fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
        .is_some_and(|query| query.matches())
}

/// Open `url` in a new tab. A popup blocker shows up as `Blocked`.
pub fn open_external(url: &str) -> Result<(), HandOffError> {
    let window =
        web_sys::window().ok_or_else(|| HandOffError::Failed("no browser window".into()))?;
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(HandOffError::Blocked("popup blocked by the browser".into())),
        Err(err) => Err(HandOffError::Failed(describe(&err))),
    }
}

/// Logs the inquiry and continues the conversation on WhatsApp.
pub struct WhatsAppHandOff {
    base: String,
    lang: Language,
}

impl WhatsAppHandOff {
    pub fn new(base: impl Into<String>, lang: Language) -> Self {
        Self {
            base: base.into(),
            lang,
        }
    }
}

impl InquirySink for WhatsAppHandOff {
    async fn deliver(&self, inquiry: &ContactFormData) -> Result<(), HandOffError> {
        match serde_json::to_string(inquiry) {
            Ok(json) => tracing::info!(inquiry = %json, "inquiry received"),
            Err(err) => tracing::warn!(error = %err, "inquiry not serializable for the log"),
        }
        let text = links::inquiry_message(inquiry, self.lang);
        open_external(&links::whatsapp(&self.base, &text))
    }
}
