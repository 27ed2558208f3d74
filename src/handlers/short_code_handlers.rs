use actix_web::{HttpResponse, web};
use log::info;

use crate::state::app_state::AppState;
use crate::structs::short_code::{ShortCodeInfo, ShortCodeResponse};
use crate::utils::short_code::{
    generate_short_code, is_valid_short_code, landing_url, redirect_url,
};

/// Hand out a fresh code. The caller stores it and retries on a collision.
pub async fn new_short_code() -> HttpResponse {
    let short_code = generate_short_code();
    info!("Generated short code {}", short_code);
    HttpResponse::Ok().json(ShortCodeResponse { short_code })
}

/// Check a code and show the links it would use
pub async fn inspect_short_code(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> HttpResponse {
    let code = path.into_inner();
    let valid = is_valid_short_code(&code);
    let host = &app_state.config.host;

    let info = ShortCodeInfo {
        redirect_url: valid.then(|| redirect_url(host, &code)),
        landing_url: valid.then(|| landing_url(host, &code)),
        short_code: code,
        valid,
    };

    HttpResponse::Ok().json(info)
}
