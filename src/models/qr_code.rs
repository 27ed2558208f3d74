use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum QrCodeType {
    SmartStore,
    Menu,
    VCard,
    Wifi,
    Secret,
    Mp3,
    Images,
    Video,
    Apps,
    Social,
    Event,
    WhatsApp,
    Business,
    Coupon,
    Feedback,
    Zapier,
    N8n,
}

/// How a scanned code reaches its content
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RedirectBehavior {
    Direct,  // The short link forwards straight to an external URL
    Landing, // The short link opens a hosted landing page
}

impl QrCodeType {
    pub fn all() -> [QrCodeType; 17] {
        [
            QrCodeType::SmartStore,
            QrCodeType::Menu,
            QrCodeType::VCard,
            QrCodeType::Wifi,
            QrCodeType::Secret,
            QrCodeType::Mp3,
            QrCodeType::Images,
            QrCodeType::Video,
            QrCodeType::Apps,
            QrCodeType::Social,
            QrCodeType::Event,
            QrCodeType::WhatsApp,
            QrCodeType::Business,
            QrCodeType::Coupon,
            QrCodeType::Feedback,
            QrCodeType::Zapier,
            QrCodeType::N8n,
        ]
    }

    /// The wire tag used in JSON and URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            QrCodeType::SmartStore => "smartstore",
            QrCodeType::Menu => "menu",
            QrCodeType::VCard => "vcard",
            QrCodeType::Wifi => "wifi",
            QrCodeType::Secret => "secret",
            QrCodeType::Mp3 => "mp3",
            QrCodeType::Images => "images",
            QrCodeType::Video => "video",
            QrCodeType::Apps => "apps",
            QrCodeType::Social => "social",
            QrCodeType::Event => "event",
            QrCodeType::WhatsApp => "whatsapp",
            QrCodeType::Business => "business",
            QrCodeType::Coupon => "coupon",
            QrCodeType::Feedback => "feedback",
            QrCodeType::Zapier => "zapier",
            QrCodeType::N8n => "n8n",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QrCodeType::SmartStore => "Smart Store",
            QrCodeType::Menu => "Menu",
            QrCodeType::VCard => "vCard Plus",
            QrCodeType::Wifi => "Wi-Fi",
            QrCodeType::Secret => "Secret",
            QrCodeType::Mp3 => "MP3 Player",
            QrCodeType::Images => "Gallery",
            QrCodeType::Video => "Video",
            QrCodeType::Apps => "App Store",
            QrCodeType::Social => "Social Bio",
            QrCodeType::Event => "Event",
            QrCodeType::WhatsApp => "WhatsApp",
            QrCodeType::Business => "Business",
            QrCodeType::Coupon => "Coupon",
            QrCodeType::Feedback => "Feedback",
            QrCodeType::Zapier => "Zapier Webhook",
            QrCodeType::N8n => "n8n Webhook",
        }
    }

    pub fn redirect_behavior(&self) -> RedirectBehavior {
        match self {
            QrCodeType::Apps | QrCodeType::WhatsApp | QrCodeType::Zapier | QrCodeType::N8n => {
                RedirectBehavior::Direct
            }
            _ => RedirectBehavior::Landing,
        }
    }

    /// Kinds whose QR symbol embeds the encoded payload instead of a short link
    pub fn encodes_directly(&self) -> bool {
        matches!(
            self,
            QrCodeType::Wifi
                | QrCodeType::VCard
                | QrCodeType::WhatsApp
                | QrCodeType::Apps
                | QrCodeType::Event
        )
    }
}

impl fmt::Display for QrCodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownQrCodeType(pub String);

impl fmt::Display for UnknownQrCodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown QR code type: {}", self.0)
    }
}

impl std::error::Error for UnknownQrCodeType {}

impl FromStr for QrCodeType {
    type Err = UnknownQrCodeType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QrCodeType::all()
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownQrCodeType(s.to_string()))
    }
}
