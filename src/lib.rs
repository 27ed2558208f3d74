pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod structs;
pub mod utils;

pub use models::content::QrContentData;
pub use models::qr_code::QrCodeType;
pub use utils::qr_encoder::{QrEncoder, generate_qr_data};
pub use utils::short_code::{generate_short_code, is_valid_short_code};
