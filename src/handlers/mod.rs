pub mod content_handlers;
pub mod health_handlers;
pub mod qr_handlers;
pub mod short_code_handlers;
pub mod wizard_handlers;
