use actix_web::{HttpResponse, Responder, Result, web};

use crate::models::content::QrContentData;
use crate::models::qr_code::QrCodeType;
use crate::structs::qr_request::{ContentCheckRequest, ContentCheckResponse};

/// Blank content for a kind, as the editor starts from it
pub async fn default_content(path: web::Path<String>) -> Result<impl Responder> {
    let kind = match path.into_inner().parse::<QrCodeType>() {
        Ok(kind) => kind,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": e.to_string()
            })));
        }
    };

    Ok(HttpResponse::Ok().json(QrContentData::default_for(kind)))
}

pub async fn check_content(web::Json(req): web::Json<ContentCheckRequest>) -> HttpResponse {
    HttpResponse::Ok().json(ContentCheckResponse {
        kind: req.content.kind(),
        complete: req.content.is_complete(),
    })
}
