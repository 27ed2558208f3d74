use crate::config::AppConfig;
use crate::utils::qr_encoder::QrEncoder;

/// Shared, read-only state handed to every handler
pub struct AppState {
    pub config: AppConfig,
    pub encoder: QrEncoder,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let encoder = config.encoder();
        Self { config, encoder }
    }
}
