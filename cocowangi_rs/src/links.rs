//! Outbound links and the contact page's navigation parameter.
//!
//! Everything here builds URLs; opening them is left to the caller.

use crate::inquiry::ContactFormData;
use crate::locale::{Language, select};

/// Query parameter the contact page reads to pre-select a product.
pub const PRODUCT_PARAM: &str = "product";

/// WhatsApp deep link with pre-filled `text`.
pub fn whatsapp(base: &str, text: &str) -> String {
    format!("{}?text={}", base, urlencoding::encode(text))
}

/// Greeting used by the floating WhatsApp button.
pub fn greeting_message(lang: Language) -> &'static str {
    select(
        lang,
        "Hello, I am interested in your coconut products. Could you please provide more information?",
        "Halo, saya tertarik dengan produk kelapa Anda. Bisakah Anda memberikan informasi lebih lanjut?",
    )
}

/// Follow-up message sent after an inquiry form submission.
pub fn inquiry_message(inquiry: &ContactFormData, lang: Language) -> String {
    let mut text = match lang {
        Language::En => format!(
            "Hello, I submitted an inquiry form for {}. My company is {} from {}.",
            inquiry.product_interest, inquiry.company, inquiry.country
        ),
        Language::Id => format!(
            "Halo, saya telah mengirim formulir permintaan untuk {}. Perusahaan saya {} dari {}.",
            inquiry.product_interest, inquiry.company, inquiry.country
        ),
    };
    if !inquiry.quantity.is_empty() {
        text.push_str(&format!(
            " {}: {}.",
            select(lang, "Estimated quantity", "Perkiraan kuantitas"),
            inquiry.quantity
        ));
    }
    text
}

pub fn mailto(email: &str) -> String {
    format!("mailto:{}", email.trim())
}

/// `tel:` link with whitespace removed from the display number.
pub fn tel(phone: &str) -> String {
    let number: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", number)
}

pub fn maps_search(address: &str) -> String {
    format!("https://maps.google.com/?q={}", urlencoding::encode(address))
}

/// Contact page link asking for a quote on `product_name`.
pub fn quote_request(product_name: &str) -> String {
    format!(
        "/contact?{}={}",
        PRODUCT_PARAM,
        urlencoding::encode(product_name)
    )
}

/// The decoded `product` parameter of a query string (with or without the
/// leading `?`). Absent or empty means no pre-selection.
pub fn product_from_query(query: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| *key == PRODUCT_PARAM)
        .and_then(|(_, raw)| {
            let raw = raw.replace('+', " ");
            match urlencoding::decode(&raw) {
                Ok(value) => Some(value.into_owned()),
                Err(err) => {
                    tracing::warn!(error = %err, "ignoring malformed product parameter");
                    None
                }
            }
        })
        .filter(|value| !value.trim().is_empty())
}
