use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{HttpResponse, Responder, Result, error, web};
use log::{info, warn};
use qrcode::types::QrError;
use validator::Validate;

use crate::models::qr_code::QrCodeType;
use crate::state::app_state::AppState;
use crate::structs::qr_request::{
    QrDataRequest, QrDataResponse, QrTypeInfo, RenderQrRequest, VCardRequest,
};
use crate::utils::qr_encoder::vcard;
use crate::utils::qr_render::{DEFAULT_SIZE, render};
use crate::utils::short_code::is_valid_short_code;

fn type_mismatch(kind: QrCodeType, content_kind: QrCodeType) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({
        "error": format!("Content of type {} cannot be encoded as {}", content_kind, kind)
    }))
}

/// Encode typed content into the text a QR symbol carries
pub async fn generate_qr_data(
    app_state: web::Data<AppState>,
    web::Json(req): web::Json<QrDataRequest>,
) -> Result<impl Responder> {
    if req.content.kind() != req.kind {
        return Ok(type_mismatch(req.kind, req.content.kind()));
    }

    let data = app_state.encoder.encode(req.kind, &req.content);

    Ok(HttpResponse::Ok().json(QrDataResponse {
        kind: req.kind,
        data,
    }))
}

/// Render the QR symbol for a piece of content as SVG or PNG
pub async fn render_qr(
    app_state: web::Data<AppState>,
    web::Json(req): web::Json<RenderQrRequest>,
) -> Result<impl Responder> {
    if let Err(errors) = req.validate() {
        return Ok(HttpResponse::BadRequest().json(errors));
    }
    if req.content.kind() != req.kind {
        return Ok(type_mismatch(req.kind, req.content.kind()));
    }

    // Landing-page kinds print their short link, so the code has to be usable
    let short_code = req.short_code.as_deref();
    if !req.kind.encodes_directly() && !short_code.is_some_and(is_valid_short_code) {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": format!("A valid short code is required for {} QR codes", req.kind)
        })));
    }

    let payload = app_state.encoder.payload_for(
        req.kind,
        &req.content,
        &app_state.config.host,
        short_code,
    );
    let styling = req.styling.unwrap_or_default();

    let rendered = match render(
        &payload,
        req.format,
        req.size.unwrap_or(DEFAULT_SIZE),
        &styling,
    ) {
        Ok(rendered) => rendered,
        Err(e) if e.downcast_ref::<QrError>().is_some() => {
            warn!("Cannot fit {} payload into a QR code: {:#}", req.kind, e);
            return Ok(HttpResponse::UnprocessableEntity().json(serde_json::json!({
                "error": format!("{:#}", e)
            })));
        }
        Err(e) => return Err(error::ErrorInternalServerError(format!("{:#}", e))),
    };

    info!(
        "Rendered {} QR code ({} bytes of payload)",
        req.kind,
        payload.len()
    );

    Ok(HttpResponse::Ok()
        .content_type(rendered.format.content_type())
        .body(rendered.body))
}

/// Download contact content as a `.vcf` file
pub async fn download_vcard(
    app_state: web::Data<AppState>,
    web::Json(req): web::Json<VCardRequest>,
) -> Result<impl Responder> {
    let card = vcard::encode(&req.content, app_state.encoder.vcard_escaping());
    let file_name = vcard::file_name(&req.content);

    Ok(HttpResponse::Ok()
        .content_type("text/vcard; charset=utf-8")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(file_name)],
        })
        .body(card))
}

pub async fn list_qr_types() -> HttpResponse {
    let types: Vec<QrTypeInfo> = QrCodeType::all().into_iter().map(QrTypeInfo::from).collect();
    HttpResponse::Ok().json(types)
}
