use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortCodeResponse {
    pub short_code: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortCodeInfo {
    pub short_code: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing_url: Option<String>,
}
