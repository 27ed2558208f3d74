pub mod qr_encoder;
pub mod qr_render;
pub mod short_code;
