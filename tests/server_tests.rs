// HTTP service tests with a stub generator
// Author: kelexine (https://github.com/kelexine)

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use gemtranslate::config::AppConfig;
use gemtranslate::error::{Result, TranslateError};
use gemtranslate::models::GenerateContentRequest;
use gemtranslate::server::create_router;
use gemtranslate::translation::{ContentGenerator, RequestBuilder, Translator};
use serde_json::Value;
use tower::ServiceExt;

enum Reply {
    Text(&'static str),
    Fail,
}

struct StubGenerator(Reply);

#[async_trait]
impl ContentGenerator for StubGenerator {
    async fn generate(&self, _request: GenerateContentRequest) -> Result<Option<String>> {
        match self.0 {
            Reply::Text(text) => Ok(Some(text.to_string())),
            Reply::Fail => Err(TranslateError::TransientService("HTTP 503".to_string())),
        }
    }
}

fn app(reply: Reply) -> axum::Router {
    create_router(
        AppConfig::default(),
        Translator::new(StubGenerator(reply), RequestBuilder::default()),
    )
}

async fn post_translate(app: axum::Router, body: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/translate")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_translate_endpoint() {
    let app = app(Reply::Text(
        r#"{"detected_language":"en","translations":{"primary":"bonjour","alternatives":["salut"]}}"#,
    ));
    let (status, json) = post_translate(app, r#"{"text":"hello","target_language":"fr"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["translations"]["primary"], "bonjour");
    assert_eq!(json["translations"]["alternatives"][0], "salut");
}

#[tokio::test]
async fn test_translate_endpoint_accepts_image_data_uri() {
    let app = app(Reply::Text(
        r#"{"detected_language":"ja","translations":{"primary":"salida","alternatives":[]}}"#,
    ));
    let (status, json) = post_translate(
        app,
        r#"{"target_language":"es","image_data_uri":"data:image/png;base64,AAAA"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["translations"]["primary"], "salida");
    assert_eq!(json["target_language_name"], "Spanish");
    assert_eq!(json["detected_language_name"], "Japanese");
}

#[tokio::test]
async fn test_translate_endpoint_rejects_empty_input() {
    let (status, json) = post_translate(app(Reply::Fail), r#"{"text":"","target_language":"fr"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["kind"], "invalid_input");
}

#[tokio::test]
async fn test_translate_endpoint_rejects_bad_base64() {
    let (status, json) = post_translate(
        app(Reply::Fail),
        r#"{"target_language":"fr","image":{"data":"not-valid-base64!!!","mime_type":"image/png"}}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["kind"], "invalid_input");
}

#[tokio::test]
async fn test_transient_failure_maps_to_503() {
    let (status, json) =
        post_translate(app(Reply::Fail), r#"{"text":"hello","target_language":"fr"}"#).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"]["kind"], "transient_service");
    assert_eq!(json["error"]["retryable"], true);
}

#[tokio::test]
async fn test_malformed_reply_maps_to_502() {
    let (status, json) = post_translate(
        app(Reply::Text("not json")),
        r#"{"image":"data:image/png;base64,AAAA","target_language":"fr"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"]["kind"], "malformed_response");
}

#[tokio::test]
async fn test_languages_endpoint() {
    let response = app(Reply::Fail)
        .oneshot(Request::builder().uri("/v1/languages").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json[0]["code"], "en");
    assert_eq!(json[0]["name"], "English");
}

#[tokio::test]
async fn test_health_reports_missing_key() {
    let response = app(Reply::Fail)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["api_key_configured"], false);
}
