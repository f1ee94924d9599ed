//! Contact inquiry form.
//!
//! A small state machine around [`ContactFormData`]:
//!
//! ```text
//!            begin_submit (required fields present)
//!  Editing ─────────────────────────────────────────▶ Submitting
//!     ▲  ▲                                              │    │
//!     │  └──────── finish_submit(Err): fields kept ─────┘    │
//!     │                                                      │
//!     └─ update ── Submitted ◀── finish_submit(Ok): cleared ─┘
//! ```
//!
//! `Submitted` behaves like `Editing` (the form is empty and usable); it only
//! records that the last hand-off went through. While `Submitting`, further
//! submits and edits are refused, which gives exactly one hand-off per click
//! burst.

use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::locale::{Language, select};

/// Everything the visitor typed into the contact form.
///
/// Unset text fields are empty strings; unset selections use the empty
/// string as the "no selection" sentinel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub company: String,
    pub country: String,
    pub phone: String,
    pub product_interest: String,
    pub quantity: String,
    pub message: String,
}

/// One input of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Company,
    Country,
    Phone,
    ProductInterest,
    Quantity,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        FormField::Name,
        FormField::Email,
        FormField::Company,
        FormField::Country,
        FormField::Phone,
        FormField::ProductInterest,
        FormField::Quantity,
        FormField::Message,
    ];

    pub fn is_required(self) -> bool {
        matches!(
            self,
            FormField::Name
                | FormField::Email
                | FormField::Company
                | FormField::Country
                | FormField::ProductInterest
        )
    }

    /// The HTML `name`/`id` attribute.
    pub fn html_name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Company => "company",
            FormField::Country => "country",
            FormField::Phone => "phone",
            FormField::ProductInterest => "productInterest",
            FormField::Quantity => "quantity",
            FormField::Message => "message",
        }
    }

    pub fn label(self, lang: Language) -> &'static str {
        match self {
            FormField::Name => select(lang, "Full Name", "Nama Lengkap"),
            FormField::Email => select(lang, "Email Address", "Alamat Email"),
            FormField::Company => select(lang, "Company Name", "Nama Perusahaan"),
            FormField::Country => select(lang, "Country", "Negara"),
            FormField::Phone => select(lang, "Phone Number", "Nomor Telepon"),
            FormField::ProductInterest => select(lang, "Product Interest", "Produk yang Diminati"),
            FormField::Quantity => select(lang, "Estimated Quantity", "Perkiraan Kuantitas"),
            FormField::Message => select(lang, "Message", "Pesan"),
        }
    }

    /// Placeholder text, or the "nothing selected" option for selects.
    pub fn placeholder(self, lang: Language) -> &'static str {
        match self {
            FormField::Name => select(lang, "Enter your full name", "Masukkan nama lengkap Anda"),
            FormField::Email => select(lang, "Enter your email address", "Masukkan alamat email Anda"),
            FormField::Company => select(lang, "Enter your company name", "Masukkan nama perusahaan Anda"),
            FormField::Country => select(lang, "Select your country", "Pilih negara Anda"),
            FormField::Phone => select(lang, "Enter your phone number", "Masukkan nomor telepon Anda"),
            FormField::ProductInterest => select(lang, "Select product category", "Pilih kategori produk"),
            FormField::Quantity => select(lang, "Select quantity range", "Pilih rentang kuantitas"),
            FormField::Message => select(
                lang,
                "Tell us more about your requirements, delivery timeline, or any specific questions...",
                "Ceritakan lebih lanjut tentang kebutuhan Anda, jadwal pengiriman, atau pertanyaan khusus...",
            ),
        }
    }
}

impl ContactFormData {
    /// An empty form with the product interest pre-selected.
    pub fn with_product_interest(product: impl Into<String>) -> Self {
        Self {
            product_interest: product.into(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Company => &self.company,
            FormField::Country => &self.country,
            FormField::Phone => &self.phone,
            FormField::ProductInterest => &self.product_interest,
            FormField::Quantity => &self.quantity,
            FormField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Company => &mut self.company,
            FormField::Country => &mut self.country,
            FormField::Phone => &mut self.phone,
            FormField::ProductInterest => &mut self.product_interest,
            FormField::Quantity => &mut self.quantity,
            FormField::Message => &mut self.message,
        }
    }

    /// Required fields that are empty or whitespace-only, in form order.
    pub fn missing_required(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.get(*f).trim().is_empty())
            .collect()
    }

    pub fn is_blank(&self) -> bool {
        FormField::ALL.into_iter().all(|f| self.get(f).is_empty())
    }
}

/// Lifecycle of the form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Editing,
    Submitting,
    /// Reset after a successful hand-off; accepts edits and submits.
    Submitted,
}

/// Why a submit click did not start a hand-off.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRefused {
    #[error("required fields are empty: {}", names(.0))]
    MissingFields(Vec<FormField>),
    #[error("an inquiry is already being sent")]
    InFlight,
}

fn names(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|f| f.html_name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failure reported by the external submission channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandOffError {
    /// The channel could not be opened (e.g. popup blocked).
    #[error("hand-off blocked: {0}")]
    Blocked(String),
    #[error("hand-off failed: {0}")]
    Failed(String),
}

/// How a finished submission left the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Handed off; the form was cleared.
    Delivered,
    /// Hand-off failed; the visitor's input was kept for another try.
    Retained(HandOffError),
}

/// The external submission channel (messaging deep link, logging sink...).
pub trait InquirySink {
    fn deliver(&self, inquiry: &ContactFormData) -> impl Future<Output = Result<(), HandOffError>>;
}

#[derive(Debug, Clone, Default)]
pub struct InquiryForm {
    data: ContactFormData,
    state: FormState,
    last_error: Option<HandOffError>,
}

impl InquiryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh form, optionally pre-seeded from the `?product=` parameter.
    pub fn seeded(product_interest: Option<String>) -> Self {
        Self {
            data: product_interest
                .map(ContactFormData::with_product_interest)
                .unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn data(&self) -> &ContactFormData {
        &self.data
    }

    pub fn value(&self, field: FormField) -> &str {
        self.data.get(field)
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    pub fn last_error(&self) -> Option<&HandOffError> {
        self.last_error.as_ref()
    }

    /// Set one field. Refused (returns `false`) while a submission is in
    /// flight, since the form is about to be cleared or restored.
    pub fn update(&mut self, field: FormField, value: impl Into<String>) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self.data.slot(field) = value.into();
        self.state = FormState::Editing;
        true
    }

    /// Follow a newer `?product=` link. Applies only while nothing but the
    /// product of interest has been filled in; returns whether it applied.
    pub fn reseed(&mut self, product_interest: Option<String>) -> bool {
        let Some(product_interest) = product_interest else {
            return false;
        };
        let untouched = FormField::ALL
            .into_iter()
            .filter(|field| *field != FormField::ProductInterest)
            .all(|field| self.data.get(field).is_empty());
        if self.is_submitting() || !untouched {
            return false;
        }
        if self.data.product_interest != product_interest {
            tracing::debug!(product = %product_interest, "contact form reseeded");
            self.data.product_interest = product_interest;
        }
        true
    }

    /// Enter `Submitting` and hand back the snapshot to deliver.
    pub fn begin_submit(&mut self) -> Result<ContactFormData, SubmitRefused> {
        if self.is_submitting() {
            tracing::debug!("submit ignored, inquiry already in flight");
            return Err(SubmitRefused::InFlight);
        }
        let missing = self.data.missing_required();
        if !missing.is_empty() {
            tracing::debug!(missing = %names(&missing), "submit refused");
            return Err(SubmitRefused::MissingFields(missing));
        }
        self.state = FormState::Submitting;
        self.last_error = None;
        tracing::info!(
            product = %self.data.product_interest,
            country = %self.data.country,
            "submitting inquiry"
        );
        Ok(self.data.clone())
    }

    /// Settle the in-flight submission. Returns `None` if nothing was in
    /// flight.
    pub fn finish_submit(&mut self, result: Result<(), HandOffError>) -> Option<SubmitOutcome> {
        if !self.is_submitting() {
            tracing::warn!("finish_submit called without a submission in flight");
            return None;
        }
        Some(self.settle(result))
    }

    /// Apply a hand-off result to a form that is `Submitting`.
    fn settle(&mut self, result: Result<(), HandOffError>) -> SubmitOutcome {
        debug_assert!(self.is_submitting());
        match result {
            Ok(()) => {
                self.data = ContactFormData::default();
                self.state = FormState::Submitted;
                tracing::info!("inquiry handed off, form cleared");
                SubmitOutcome::Delivered
            }
            Err(err) => {
                tracing::warn!(error = %err, "inquiry hand-off failed, keeping input");
                self.state = FormState::Editing;
                self.last_error = Some(err.clone());
                SubmitOutcome::Retained(err)
            }
        }
    }

    /// Validate, deliver through `sink` and settle, in one call.
    pub async fn submit<K: InquirySink>(
        &mut self,
        sink: &K,
    ) -> Result<SubmitOutcome, SubmitRefused> {
        let snapshot = self.begin_submit()?;
        let result = sink.deliver(&snapshot).await;
        Ok(self.settle(result))
    }
}
