use actix_web::web;

use crate::handlers::content_handlers::{check_content, default_content};
use crate::handlers::health_handlers::health_check;
use crate::handlers::qr_handlers::{download_vcard, generate_qr_data, list_qr_types, render_qr};
use crate::handlers::short_code_handlers::{inspect_short_code, new_short_code};
use crate::handlers::wizard_handlers::advance_wizard;

/// Configure the routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health/check", web::get().to(health_check))
            .route("/types", web::get().to(list_qr_types))
            // Short codes
            .route("/shortcodes/new", web::get().to(new_short_code))
            .route("/shortcodes/{code}", web::get().to(inspect_short_code))
            // Content editing helpers
            .route("/content/validate", web::post().to(check_content))
            .route("/content/{type}/default", web::get().to(default_content))
            // Encoding and rendering
            .route("/qr/data", web::post().to(generate_qr_data))
            .route("/qr/render", web::post().to(render_qr))
            .route("/vcard", web::post().to(download_vcard))
            // Creation wizard
            .route("/wizard", web::post().to(advance_wizard)),
    );
}
