//! HTTP API tests
//!
//! Drive the full route table through actix's test service.

use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use serde_json::{Value, json};

use qrg::config::AppConfig;
use qrg::is_valid_short_code;
use qrg::routes::init_routes;
use qrg::state::app_state::AppState;

fn test_state() -> web::Data<AppState> {
    let config = AppConfig {
        host: "https://qrg.test".to_string(),
        ..AppConfig::default()
    };
    web::Data::new(AppState::new(config))
}

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .app_data(test_state())
                .configure(init_routes),
        )
        .await
    };
}

// =============================================================================
// Health & metadata
// =============================================================================

#[actix_web::test]
async fn test_health_check() {
    let app = app!();
    let resp: Value =
        test::call_and_read_body_json(&app, TestRequest::get().uri("/api/health/check").to_request())
            .await;
    assert_eq!(resp["success"], true);
}

#[actix_web::test]
async fn test_list_types() {
    let app = app!();
    let resp: Value =
        test::call_and_read_body_json(&app, TestRequest::get().uri("/api/types").to_request()).await;
    let types = resp.as_array().unwrap();
    assert_eq!(types.len(), 17);

    let whatsapp = types.iter().find(|t| t["type"] == "whatsapp").unwrap();
    assert_eq!(whatsapp["label"], "WhatsApp");
    assert_eq!(whatsapp["redirectBehavior"], "direct");
    assert_eq!(whatsapp["encodesDirectly"], true);

    let menu = types.iter().find(|t| t["type"] == "menu").unwrap();
    assert_eq!(menu["redirectBehavior"], "landing");
    assert_eq!(menu["encodesDirectly"], false);
}

// =============================================================================
// Short codes
// =============================================================================

#[actix_web::test]
async fn test_new_short_code() {
    let app = app!();
    let resp: Value = test::call_and_read_body_json(
        &app,
        TestRequest::get().uri("/api/shortcodes/new").to_request(),
    )
    .await;
    let code = resp["shortCode"].as_str().unwrap();
    assert!(is_valid_short_code(code));
}

#[actix_web::test]
async fn test_inspect_short_code() {
    let app = app!();
    let resp: Value = test::call_and_read_body_json(
        &app,
        TestRequest::get().uri("/api/shortcodes/Ab3dEf7h").to_request(),
    )
    .await;
    assert_eq!(resp["valid"], true);
    assert_eq!(resp["redirectUrl"], "https://qrg.test/r/Ab3dEf7h");
    assert_eq!(resp["landingUrl"], "https://qrg.test/c/Ab3dEf7h");

    let resp: Value = test::call_and_read_body_json(
        &app,
        TestRequest::get().uri("/api/shortcodes/Ab3dEf70").to_request(),
    )
    .await;
    assert_eq!(resp["valid"], false);
    assert!(resp.get("redirectUrl").is_none());
}

// =============================================================================
// Content helpers
// =============================================================================

#[actix_web::test]
async fn test_default_content() {
    let app = app!();
    let resp: Value = test::call_and_read_body_json(
        &app,
        TestRequest::get().uri("/api/content/wifi/default").to_request(),
    )
    .await;
    assert_eq!(resp["type"], "wifi");
    assert_eq!(resp["securityType"], "WPA2");
    assert_eq!(resp["isHidden"], false);

    let req = TestRequest::get().uri("/api/content/url/default").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_check_content() {
    let app = app!();
    let req = TestRequest::post()
        .uri("/api/content/validate")
        .set_json(json!({ "content": { "type": "secret", "message": "hi", "pinCode": "1234" } }))
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["type"], "secret");
    assert_eq!(resp["complete"], true);

    let req = TestRequest::post()
        .uri("/api/content/validate")
        .set_json(json!({ "content": { "type": "wifi", "ssid": "  " } }))
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["complete"], false);
}

// =============================================================================
// Encoding
// =============================================================================

#[actix_web::test]
async fn test_qr_data_wifi() {
    let app = app!();
    let req = TestRequest::post()
        .uri("/api/qr/data")
        .set_json(json!({
            "type": "wifi",
            "content": {
                "type": "wifi",
                "ssid": "Home;Net",
                "password": "p:a\"ss",
                "securityType": "WPA2",
                "isHidden": false
            }
        }))
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["type"], "wifi");
    assert_eq!(resp["data"], r#"WIFI:T:WPA2;S:Home\;Net;P:p\:a\"ss;;"#);
}

#[actix_web::test]
async fn test_qr_data_vcard() {
    let app = app!();
    let req = TestRequest::post()
        .uri("/api/qr/data")
        .set_json(json!({
            "type": "vcard",
            "content": {
                "type": "vcard",
                "firstName": "Jane",
                "lastName": "Doe",
                "email": "jane@x.com",
                "socials": []
            }
        }))
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    let data = resp["data"].as_str().unwrap();
    assert!(data.starts_with("BEGIN:VCARD\nVERSION:3.0\nN:Doe;Jane;;;\nFN:Jane Doe"));
    assert!(data.contains("EMAIL:jane@x.com"));
    assert!(data.ends_with("END:VCARD"));
}

#[actix_web::test]
async fn test_qr_data_landing_kind_gets_fallback() {
    let app = app!();
    let req = TestRequest::post()
        .uri("/api/qr/data")
        .set_json(json!({
            "type": "coupon",
            "content": { "type": "coupon", "code": "SAVE10" }
        }))
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["data"], "https://qrg.app/preview");
}

#[actix_web::test]
async fn test_qr_data_rejects_mismatched_type() {
    let app = app!();
    let req = TestRequest::post()
        .uri("/api/qr/data")
        .set_json(json!({
            "type": "wifi",
            "content": { "type": "whatsapp", "phoneNumber": "123" }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_qr_data_rejects_unknown_type() {
    let app = app!();
    let req = TestRequest::post()
        .uri("/api/qr/data")
        .set_json(json!({ "type": "fax", "content": { "type": "fax" } }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Rendering
// =============================================================================

#[actix_web::test]
async fn test_render_svg() {
    let app = app!();
    let req = TestRequest::post()
        .uri("/api/qr/render")
        .set_json(json!({
            "type": "whatsapp",
            "content": { "type": "whatsapp", "phoneNumber": "+1 (415) 555-2671" },
            "size": 300
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "image/svg+xml"
    );
    let body = test::read_body(resp).await;
    assert!(String::from_utf8_lossy(&body).contains("<svg"));
}

#[actix_web::test]
async fn test_render_png_for_landing_kind() {
    let app = app!();
    let req = TestRequest::post()
        .uri("/api/qr/render")
        .set_json(json!({
            "type": "menu",
            "content": { "type": "menu", "restaurantName": "Trattoria" },
            "shortCode": "Ab3dEf7h",
            "format": "png"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(header::CONTENT_TYPE).unwrap(), "image/png");
    let body = test::read_body(resp).await;
    assert!(body.starts_with(b"\x89PNG"));
}

#[actix_web::test]
async fn test_render_landing_kind_requires_short_code() {
    let app = app!();
    for short_code in [None, Some("Ab3dEf7l")] {
        let req = TestRequest::post()
            .uri("/api/qr/render")
            .set_json(json!({
                "type": "menu",
                "content": { "type": "menu", "restaurantName": "Trattoria" },
                "shortCode": short_code
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}

#[actix_web::test]
async fn test_render_rejects_out_of_range_size() {
    let app = app!();
    let req = TestRequest::post()
        .uri("/api/qr/render")
        .set_json(json!({
            "type": "wifi",
            "content": { "type": "wifi", "ssid": "Home" },
            "size": 10
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_render_payload_too_large() {
    let app = app!();
    let req = TestRequest::post()
        .uri("/api/qr/render")
        .set_json(json!({
            "type": "event",
            "content": {
                "type": "event",
                "title": "Long",
                "startDate": "2024-12-12T18:00:00Z",
                "description": "x".repeat(4000)
            }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn test_render_with_partial_styling() {
    let app = app!();
    let req = TestRequest::post()
        .uri("/api/qr/render")
        .set_json(json!({
            "type": "wifi",
            "content": { "type": "wifi", "ssid": "Home" },
            "styling": { "colors": { "dots": "#f00" } }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let svg = String::from_utf8_lossy(&body);
    assert!(svg.contains("#f00"));
    assert!(svg.contains("#ffffff"));
}

#[actix_web::test]
async fn test_render_rejects_non_hex_colours() {
    let app = app!();
    let req = TestRequest::post()
        .uri("/api/qr/render")
        .set_json(json!({
            "type": "wifi",
            "content": { "type": "wifi", "ssid": "Home" },
            "styling": { "colors": { "background": "#fff\" onload=\"alert(1)" } }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = test::read_body(resp).await;
    assert!(!String::from_utf8_lossy(&body).contains("<svg"));
}

// =============================================================================
// Creation wizard
// =============================================================================

#[actix_web::test]
async fn test_wizard_starts_fresh_without_state() {
    let app = app!();
    let req = TestRequest::post()
        .uri("/api/wizard")
        .set_json(json!({ "action": { "op": "setType", "type": "wifi" } }))
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["state"]["currentStep"], "typeSelect");
    assert_eq!(resp["state"]["selectedType"], "wifi");
    assert_eq!(resp["state"]["content"]["type"], "wifi");
    assert_eq!(resp["state"]["isDirty"], true);
    assert_eq!(resp["stepIndex"], 0);
    assert_eq!(resp["canProceed"], true);
}

#[actix_web::test]
async fn test_wizard_walks_through_steps() {
    let app = app!();
    let mut state = Value::Null;
    let actions = [
        json!({ "op": "start", "type": "whatsapp" }),
        json!({ "op": "setContent", "content": { "type": "whatsapp", "phoneNumber": "+1 555" } }),
        json!({ "op": "nextStep" }),
        json!({ "op": "updateStyling", "patch": { "colors": { "dots": "#2563eb" } } }),
        json!({ "op": "nextStep" }),
    ];
    for action in actions {
        let req = TestRequest::post()
            .uri("/api/wizard")
            .set_json(json!({ "state": state, "action": action }))
            .to_request();
        let resp: Value = test::call_and_read_body_json(&app, req).await;
        state = resp["state"].clone();
    }
    assert_eq!(state["currentStep"], "preview");
    assert_eq!(state["styling"]["colors"]["dots"], "#2563eb");
    assert_eq!(state["styling"]["colors"]["background"], "#ffffff");

    let req = TestRequest::post()
        .uri("/api/wizard")
        .set_json(json!({ "state": state, "action": { "op": "setName", "name": "Support chat" } }))
        .to_request();
    let resp: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp["stepIndex"], 3);
    assert_eq!(resp["canProceed"], true);
}

#[actix_web::test]
async fn test_wizard_rejects_bad_actions() {
    let app = app!();
    let req = TestRequest::post()
        .uri("/api/wizard")
        .set_json(json!({ "action": { "op": "jump" } }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = TestRequest::post()
        .uri("/api/wizard")
        .set_json(json!({
            "action": { "op": "updateStyling", "patch": { "colors": { "dots": "black" } } }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// vCard download
// =============================================================================

#[actix_web::test]
async fn test_download_vcard() {
    let app = app!();
    let req = TestRequest::post()
        .uri("/api/vcard")
        .set_json(json!({
            "content": { "firstName": "Jane", "lastName": "Doe", "phone": "+1 555" }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let disposition = resp
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment"));
    assert!(disposition.contains("Jane_Doe.vcf"));

    let body = test::read_body(resp).await;
    let card = String::from_utf8(body.to_vec()).unwrap();
    assert!(card.contains("\nTEL:+1 555\n"));
}
