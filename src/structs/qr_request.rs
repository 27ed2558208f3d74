use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::content::{QrContentData, VCardContent};
use crate::models::qr_code::{QrCodeType, RedirectBehavior};
use crate::models::template::QrTemplate;
use crate::utils::qr_render::RenderFormat;

#[derive(Deserialize)]
pub struct QrDataRequest {
    #[serde(rename = "type")]
    pub kind: QrCodeType,
    pub content: QrContentData,
}

#[derive(Serialize)]
pub struct QrDataResponse {
    #[serde(rename = "type")]
    pub kind: QrCodeType,
    pub data: String,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RenderQrRequest {
    #[serde(rename = "type")]
    pub kind: QrCodeType,
    pub content: QrContentData,
    pub short_code: Option<String>, // Required for kinds served from a landing page
    #[validate(range(min = 64, max = 2048, message = "Size must be between 64 and 2048 pixels"))]
    pub size: Option<u32>,
    #[serde(default)]
    pub format: RenderFormat,
    #[validate(nested)]
    pub styling: Option<QrTemplate>,
}

#[derive(Deserialize)]
pub struct VCardRequest {
    pub content: VCardContent,
}

#[derive(Deserialize)]
pub struct ContentCheckRequest {
    pub content: QrContentData,
}

#[derive(Serialize)]
pub struct ContentCheckResponse {
    #[serde(rename = "type")]
    pub kind: QrCodeType,
    pub complete: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QrTypeInfo {
    #[serde(rename = "type")]
    pub kind: QrCodeType,
    pub label: &'static str,
    pub redirect_behavior: RedirectBehavior,
    pub encodes_directly: bool,
}

impl From<QrCodeType> for QrTypeInfo {
    fn from(kind: QrCodeType) -> Self {
        Self {
            kind,
            label: kind.label(),
            redirect_behavior: kind.redirect_behavior(),
            encodes_directly: kind.encodes_directly(),
        }
    }
}
