use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::models::qr_code::QrCodeType;

/// Payload attached to a QR code, tagged by `type`.
///
/// Every struct defaults its missing fields so a half-filled editor form still
/// deserializes; whether the required fields are present is answered by
/// [`QrContentData::is_complete`], never by the encoder.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QrContentData {
    SmartStore(SmartStoreContent),
    Menu(MenuContent),
    VCard(VCardContent),
    Wifi(WifiContent),
    Secret(SecretContent),
    Mp3(Mp3Content),
    Images(ImagesContent),
    Video(VideoContent),
    Apps(AppsContent),
    Social(SocialContent),
    Event(EventContent),
    WhatsApp(WhatsAppContent),
    Business(BusinessContent),
    Coupon(CouponContent),
    Feedback(FeedbackContent),
    Zapier(WebhookContent),
    N8n(WebhookContent),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub enum SecurityType {
    #[serde(rename = "WPA")]
    Wpa,
    #[default]
    #[serde(rename = "WPA2")]
    Wpa2,
    #[serde(rename = "WEP")]
    Wep,
    #[serde(rename = "nopass")]
    NoPass,
    // Anything else is kept verbatim and passed through to the Wi-Fi string
    #[serde(untagged)]
    Other(String),
}

impl SecurityType {
    pub fn as_str(&self) -> &str {
        match self {
            SecurityType::Wpa => "WPA",
            SecurityType::Wpa2 => "WPA2",
            SecurityType::Wep => "WEP",
            SecurityType::NoPass => "nopass",
            SecurityType::Other(raw) => raw,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct WifiContent {
    pub ssid: String,
    pub password: String,
    pub security_type: SecurityType,
    pub is_hidden: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLink {
    pub id: String,
    pub platform: String,
    pub url: String,
    pub label: Option<String>,
    pub order: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct VCardContent {
    pub first_name: String,
    pub last_name: String,
    pub company: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub photo_url: Option<String>,
    pub socials: Vec<SocialLink>,
}

impl VCardContent {
    /// "First Last", trimmed when one half is missing
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct WhatsAppContent {
    pub phone_number: String,
    pub prefilled_message: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AppsContent {
    pub app_name: String,
    pub ios_url: Option<String>,
    pub android_url: Option<String>,
    pub fallback_url: Option<String>,
    pub icon_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EventLocation {
    pub name: String,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EventContent {
    pub title: String,
    pub description: Option<String>,
    pub start_date: String, // ISO-8601
    pub end_date: Option<String>,
    pub location: Option<EventLocation>,
    pub enable_rsvp: bool,
    pub max_attendees: Option<u32>,
    pub cover_image_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SocialTheme {
    #[default]
    Light,
    Dark,
    Gradient,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialContent {
    pub display_name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub links: Vec<SocialLink>,
    pub theme: SocialTheme,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessHours {
    pub day: String,
    pub open: String,  // HH:MM
    pub close: String, // HH:MM
    pub is_closed: bool,
}

impl BusinessHours {
    fn new(day: &str, open: &str, close: &str, is_closed: bool) -> Self {
        Self {
            day: day.to_string(),
            open: open.to_string(),
            close: close.to_string(),
            is_closed,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessContent {
    pub name: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub cover_url: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub hours: Vec<BusinessHours>,
    pub services: Vec<String>,
    pub socials: Vec<SocialLink>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub photo_url: Option<String>,
    pub allergens: Vec<String>,
    pub is_available: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
    pub items: Vec<MenuItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuContent {
    pub restaurant_name: String,
    pub logo_url: Option<String>,
    pub categories: Vec<MenuCategory>,
    pub currency: String,
    pub show_allergens: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    #[default]
    Percentage,
    Fixed,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CouponContent {
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub description: Option<String>,
    pub expiry_date: Option<String>,
    pub terms: Option<String>,
    pub brand_logo_url: Option<String>,
    pub brand_color: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum QuestionType {
    #[default]
    Rating,
    Text,
    MultipleChoice,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedbackQuestion {
    pub id: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub question: String,
    pub required: bool,
    pub options: Option<Vec<String>>,
    pub max_rating: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedbackContent {
    pub title: String,
    pub description: Option<String>,
    pub questions: Vec<FeedbackQuestion>,
    pub thank_you_message: String,
    pub redirect_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Mp3Content {
    pub title: String,
    pub artist: Option<String>,
    pub cover_url: Option<String>,
    pub audio_url: String,
    pub duration: Option<f64>, // seconds
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryImage {
    pub id: String,
    pub url: String,
    pub caption: Option<String>,
    pub order: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Grid,
    Slideshow,
    Carousel,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ImagesContent {
    pub title: Option<String>,
    pub images: Vec<GalleryImage>,
    pub display_mode: DisplayMode,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum VideoSource {
    Upload,
    #[default]
    Youtube,
    Vimeo,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoContent {
    pub title: Option<String>,
    pub video_source: VideoSource,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub autoplay: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SecretContent {
    pub message: String,
    pub pin_code: String,
    pub pin_hint: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BuyButtonConfig {
    pub button_text: String,
    pub button_color: String,
    pub show_price: bool,
}

impl Default for BuyButtonConfig {
    fn default() -> Self {
        Self {
            button_text: "Add to Cart".to_string(),
            button_color: "#000000".to_string(),
            show_price: true,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SmartStoreContent {
    pub product_url: String,
    pub shopify_domain: Option<String>,
    pub buy_button_config: BuyButtonConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum WebhookMethod {
    Get,
    #[default]
    Post,
    Put,
    Patch,
    Delete,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct CustomField {
    pub key: String,
    pub value: String,
}

/// Shared shape of the Zapier and n8n webhook kinds
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct WebhookContent {
    pub webhook_url: String,
    pub http_method: WebhookMethod,
    pub redirect_url: Option<String>,
    pub custom_fields: Vec<CustomField>,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

impl QrContentData {
    pub fn kind(&self) -> QrCodeType {
        match self {
            QrContentData::SmartStore(_) => QrCodeType::SmartStore,
            QrContentData::Menu(_) => QrCodeType::Menu,
            QrContentData::VCard(_) => QrCodeType::VCard,
            QrContentData::Wifi(_) => QrCodeType::Wifi,
            QrContentData::Secret(_) => QrCodeType::Secret,
            QrContentData::Mp3(_) => QrCodeType::Mp3,
            QrContentData::Images(_) => QrCodeType::Images,
            QrContentData::Video(_) => QrCodeType::Video,
            QrContentData::Apps(_) => QrCodeType::Apps,
            QrContentData::Social(_) => QrCodeType::Social,
            QrContentData::Event(_) => QrCodeType::Event,
            QrContentData::WhatsApp(_) => QrCodeType::WhatsApp,
            QrContentData::Business(_) => QrCodeType::Business,
            QrContentData::Coupon(_) => QrCodeType::Coupon,
            QrContentData::Feedback(_) => QrCodeType::Feedback,
            QrContentData::Zapier(_) => QrCodeType::Zapier,
            QrContentData::N8n(_) => QrCodeType::N8n,
        }
    }

    /// Blank content the editor starts from when a kind is picked
    pub fn default_for(kind: QrCodeType) -> Self {
        match kind {
            QrCodeType::Wifi => QrContentData::Wifi(WifiContent::default()),
            QrCodeType::VCard => QrContentData::VCard(VCardContent::default()),
            QrCodeType::WhatsApp => QrContentData::WhatsApp(WhatsAppContent::default()),
            QrCodeType::Social => QrContentData::Social(SocialContent::default()),
            QrCodeType::Business => QrContentData::Business(BusinessContent {
                hours: vec![
                    BusinessHours::new("Monday", "09:00", "17:00", false),
                    BusinessHours::new("Tuesday", "09:00", "17:00", false),
                    BusinessHours::new("Wednesday", "09:00", "17:00", false),
                    BusinessHours::new("Thursday", "09:00", "17:00", false),
                    BusinessHours::new("Friday", "09:00", "17:00", false),
                    BusinessHours::new("Saturday", "10:00", "14:00", false),
                    BusinessHours::new("Sunday", "10:00", "14:00", true),
                ],
                ..Default::default()
            }),
            QrCodeType::Menu => QrContentData::Menu(MenuContent {
                currency: "USD".to_string(),
                show_allergens: true,
                ..Default::default()
            }),
            QrCodeType::Event => QrContentData::Event(EventContent {
                start_date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                location: Some(EventLocation::default()),
                ..Default::default()
            }),
            QrCodeType::Coupon => QrContentData::Coupon(CouponContent {
                discount_value: 10.0,
                ..Default::default()
            }),
            QrCodeType::Feedback => QrContentData::Feedback(FeedbackContent {
                thank_you_message: "Thank you for your feedback!".to_string(),
                ..Default::default()
            }),
            QrCodeType::Mp3 => QrContentData::Mp3(Mp3Content::default()),
            QrCodeType::Images => QrContentData::Images(ImagesContent::default()),
            QrCodeType::Video => QrContentData::Video(VideoContent::default()),
            QrCodeType::Apps => QrContentData::Apps(AppsContent::default()),
            QrCodeType::Secret => QrContentData::Secret(SecretContent::default()),
            QrCodeType::SmartStore => QrContentData::SmartStore(SmartStoreContent::default()),
            QrCodeType::Zapier => QrContentData::Zapier(WebhookContent::default()),
            QrCodeType::N8n => QrContentData::N8n(WebhookContent::default()),
        }
    }

    /// Whether the fields a kind cannot do without are filled in
    pub fn is_complete(&self) -> bool {
        match self {
            QrContentData::Wifi(c) => !is_blank(&c.ssid),
            QrContentData::VCard(c) => !is_blank(&c.first_name) || !is_blank(&c.last_name),
            QrContentData::WhatsApp(c) => !is_blank(&c.phone_number),
            QrContentData::Social(c) => !is_blank(&c.display_name),
            QrContentData::Business(c) => !is_blank(&c.name),
            QrContentData::Menu(c) => !is_blank(&c.restaurant_name),
            QrContentData::Event(c) => !is_blank(&c.title) && !c.start_date.is_empty(),
            QrContentData::Coupon(c) => !is_blank(&c.code),
            QrContentData::Feedback(c) => !is_blank(&c.title),
            QrContentData::Mp3(c) => !is_blank(&c.title) && !is_blank(&c.audio_url),
            QrContentData::Images(c) => !c.images.is_empty(),
            QrContentData::Video(c) => !is_blank(&c.video_url),
            QrContentData::Apps(c) => {
                !is_blank(&c.app_name) && (is_present(&c.ios_url) || is_present(&c.android_url))
            }
            QrContentData::Secret(c) => !is_blank(&c.message) && c.pin_code.trim().len() >= 4,
            QrContentData::SmartStore(c) => !is_blank(&c.product_url),
            QrContentData::Zapier(c) | QrContentData::N8n(c) => !is_blank(&c.webhook_url),
        }
    }
}
