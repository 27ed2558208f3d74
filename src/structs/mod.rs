pub mod qr_request;
pub mod short_code;
pub mod wizard_request;
