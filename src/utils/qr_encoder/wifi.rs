use crate::models::content::WifiContent;

const SPECIAL_CHARS: [char; 6] = ['\\', ';', ',', ':', '"', '\''];

/// Backslash-escape the characters the `WIFI:` format treats as syntax
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if SPECIAL_CHARS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// `WIFI:T:<type>;S:<ssid>;P:<password>;[H:true;];`
pub fn encode(wifi: &WifiContent) -> String {
    let hidden = if wifi.is_hidden { "H:true;" } else { "" };
    format!(
        "WIFI:T:{};S:{};P:{};{};",
        wifi.security_type.as_str(),
        escape(&wifi.ssid),
        escape(&wifi.password),
        hidden
    )
}
