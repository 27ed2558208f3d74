pub mod content;
pub mod qr_code;
pub mod template;
pub mod wizard;
