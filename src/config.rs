use anyhow::{Context, Result};
use std::env;

use crate::utils::qr_encoder::{PREVIEW_URL, QrEncoder, VCardEscaping};

const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:4173"];

/// Settings read once at start-up from the environment (and `.env`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub bind_addr: String,
    pub host: String, // Public base URL for short links
    pub fallback_url: String,
    pub vcard_escaping: VCardEscaping,
    pub cors_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: "127.0.0.1".to_string(),
            host: "http://localhost:8080".to_string(),
            fallback_url: PREVIEW_URL.to_string(),
            vcard_escaping: VCardEscaping::Lenient,
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; missing keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {:?}", port))?;
        }
        if let Some(bind_addr) = lookup("BIND_ADDR") {
            config.bind_addr = bind_addr;
        }
        if let Some(host) = lookup("HOST") {
            config.host = host.trim_end_matches('/').to_string();
        }
        if let Some(fallback_url) = lookup("FALLBACK_URL") {
            config.fallback_url = fallback_url;
        }
        if let Some(strict) = lookup("VCARD_STRICT_ESCAPING") {
            config.vcard_escaping = if parse_flag(&strict) {
                VCardEscaping::Strict
            } else {
                VCardEscaping::Lenient
            };
        }
        if let Some(origins) = lookup("CORS_ORIGINS") {
            config.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
        }

        Ok(config)
    }

    pub fn encoder(&self) -> QrEncoder {
        QrEncoder::new(self.fallback_url.clone(), self.vcard_escaping)
    }
}
