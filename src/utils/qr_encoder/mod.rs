//! Turns typed QR content into the exact text stored in the symbol.
//!
//! Wi-Fi, vCard and event content use their wire formats, WhatsApp and app
//! kinds become plain URLs. Every other kind is served from a landing page and
//! gets a short link instead. None of these functions fail: missing fields
//! produce an emptier, still well-formed payload.

pub mod ical;
pub mod links;
pub mod vcard;
pub mod wifi;

use log::debug;

use crate::models::content::QrContentData;
use crate::models::qr_code::QrCodeType;
use crate::utils::short_code::redirect_url;

pub use vcard::VCardEscaping;

pub const PREVIEW_URL: &str = "https://qrg.app/preview";

/// Encode with the stock settings (preview fallback, lenient vCards)
pub fn generate_qr_data(kind: QrCodeType, content: &QrContentData) -> String {
    QrEncoder::default().encode(kind, content)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrEncoder {
    fallback_url: String,
    vcard_escaping: VCardEscaping,
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new(PREVIEW_URL, VCardEscaping::default())
    }
}

impl QrEncoder {
    pub fn new(fallback_url: impl Into<String>, vcard_escaping: VCardEscaping) -> Self {
        Self {
            fallback_url: fallback_url.into(),
            vcard_escaping,
        }
    }

    pub fn fallback_url(&self) -> &str {
        &self.fallback_url
    }

    pub fn vcard_escaping(&self) -> VCardEscaping {
        self.vcard_escaping
    }

    /// `kind` must name the variant of `content`; a mismatch yields the
    /// fallback URL.
    pub fn encode(&self, kind: QrCodeType, content: &QrContentData) -> String {
        match (kind, content) {
            (QrCodeType::Wifi, QrContentData::Wifi(wifi)) => wifi::encode(wifi),
            (QrCodeType::VCard, QrContentData::VCard(card)) => {
                vcard::encode(card, self.vcard_escaping)
            }
            (QrCodeType::Event, QrContentData::Event(event)) => ical::encode(event),
            (QrCodeType::WhatsApp, QrContentData::WhatsApp(whatsapp)) => {
                links::whatsapp_url(whatsapp)
            }
            (QrCodeType::Apps, QrContentData::Apps(apps)) => links::app_store_url(apps)
                .unwrap_or(self.fallback_url.as_str())
                .to_string(),
            _ => {
                if kind != content.kind() {
                    debug!(
                        "Content of type {} encoded as {}, using fallback",
                        content.kind(),
                        kind
                    );
                }
                self.fallback_url.clone()
            }
        }
    }

    /// What the printed symbol should carry: the encoded payload for kinds
    /// that embed it, otherwise the short link of `short_code`.
    pub fn payload_for(
        &self,
        kind: QrCodeType,
        content: &QrContentData,
        base_url: &str,
        short_code: Option<&str>,
    ) -> String {
        if kind.encodes_directly() {
            return self.encode(kind, content);
        }
        match short_code {
            Some(code) => redirect_url(base_url, code),
            None => self.fallback_url.clone(),
        }
    }
}
