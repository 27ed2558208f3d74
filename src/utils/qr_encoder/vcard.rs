use crate::models::content::VCardContent;

/// How text values are written into vCard lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VCardEscaping {
    /// Values are written as typed. Matches every card generated so far.
    #[default]
    Lenient,
    /// Backslash-escape `\`, `,`, `;` and newlines in text values (vCard 3.0)
    Strict,
}

impl VCardEscaping {
    fn text(&self, value: &str) -> String {
        match self {
            VCardEscaping::Lenient => value.to_string(),
            VCardEscaping::Strict => {
                let mut escaped = String::with_capacity(value.len());
                let mut chars = value.chars().peekable();
                while let Some(c) = chars.next() {
                    match c {
                        '\\' => escaped.push_str("\\\\"),
                        ',' => escaped.push_str("\\,"),
                        ';' => escaped.push_str("\\;"),
                        '\r' => {
                            if chars.peek() == Some(&'\n') {
                                chars.next();
                            }
                            escaped.push_str("\\n");
                        }
                        '\n' => escaped.push_str("\\n"),
                        _ => escaped.push(c),
                    }
                }
                escaped
            }
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub fn encode(card: &VCardContent, escaping: VCardEscaping) -> String {
    let text = |value: &str| escaping.text(value);

    let mut lines = vec![
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("N:{};{};;;", text(&card.last_name), text(&card.first_name)),
        format!("FN:{}", text(&card.full_name())),
    ];

    if let Some(company) = present(&card.company) {
        lines.push(format!("ORG:{}", text(company)));
    }
    if let Some(title) = present(&card.title) {
        lines.push(format!("TITLE:{}", text(title)));
    }
    if let Some(email) = present(&card.email) {
        lines.push(format!("EMAIL:{}", email));
    }
    if let Some(phone) = present(&card.phone) {
        lines.push(format!("TEL:{}", phone));
    }
    if let Some(website) = present(&card.website) {
        lines.push(format!("URL:{}", website));
    }
    if let Some(address) = present(&card.address) {
        lines.push(format!("ADR:;;{};;;;", text(address)));
    }
    if let Some(photo_url) = present(&card.photo_url) {
        lines.push(format!("PHOTO;VALUE=URI:{}", photo_url));
    }

    for social in card.socials.iter().filter(|s| !s.url.is_empty()) {
        lines.push(format!(
            "X-SOCIALPROFILE;TYPE={}:{}",
            social.platform, social.url
        ));
    }

    lines.push("END:VCARD".to_string());
    lines.join("\n")
}

/// Download name for a card, e.g. `Jane_Doe.vcf`
pub fn file_name(card: &VCardContent) -> String {
    let full_name = card.full_name();
    if full_name.is_empty() {
        return "contact.vcf".to_string();
    }
    let stem = full_name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{}.vcf", stem)
}
