use crate::models::content::{AppsContent, WhatsAppContent};

/// `https://wa.me/<digits>[?text=<message>]`
pub fn whatsapp_url(whatsapp: &WhatsAppContent) -> String {
    let phone: String = whatsapp
        .phone_number
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();

    match whatsapp.prefilled_message.as_deref() {
        Some(message) if !message.is_empty() => {
            format!("https://wa.me/{}?text={}", phone, urlencoding::encode(message))
        }
        _ => format!("https://wa.me/{}", phone),
    }
}

/// First store link available: fallback, then iOS, then Android
pub fn app_store_url(apps: &AppsContent) -> Option<&str> {
    [&apps.fallback_url, &apps.ios_url, &apps.android_url]
        .into_iter()
        .filter_map(|url| url.as_deref())
        .find(|url| !url.is_empty())
}
