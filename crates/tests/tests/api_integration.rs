use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use superagent_api::{build_app, AllowedOrigins, ApiConfig};
use tower::ServiceExt;

fn app() -> Router {
    build_app(&ApiConfig::default()).expect("app should build")
}

async fn post_ai(app: Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/ai")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn root_reports_running() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let parsed: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(parsed["status"], "ok");
    assert_eq!(parsed["message"], "SuperAgent backend running");
}

#[tokio::test]
async fn health_includes_metrics() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let parsed: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(parsed["metrics"]["requests_total"], 0);
    assert!(parsed["timestamp_utc"].is_string());
}

#[tokio::test]
async fn ai_returns_restaurant_cards() {
    let (status, parsed) = post_ai(app(), json!({ "text": "chicken biriyani" })).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(parsed["has_details"], true);
    assert_eq!(parsed["intent"], "restaurant");
    assert_eq!(parsed["family"], "restaurants");

    let details = parsed["details"].as_array().unwrap();
    assert_eq!(details.len(), 3);
    assert_eq!(details[0]["id"], "restaurants-1");
    assert_eq!(details[0]["type"], "restaurant");
    assert_eq!(details[0]["timing"], "Check on platform");
    assert_eq!(details[0]["dishes"], json!([]));
    assert!(details[0]["platform_url"]
        .as_str()
        .unwrap()
        .contains("chicken+biriyani"));
}

#[tokio::test]
async fn ai_treats_missing_text_as_empty() {
    for body in [json!({}), json!({ "text": null }), json!({ "text": "   " })] {
        let (status, parsed) = post_ai(app(), body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(parsed["reply"], "Please type a query.");
        assert_eq!(parsed["has_details"], false);
        assert_eq!(parsed["details"], json!([]));
    }
}

#[tokio::test]
async fn ai_falls_back_to_web_search() {
    let (_, parsed) = post_ai(
        app(),
        json!({ "text": "xyz123 completely unrelated gibberish" }),
    )
    .await;

    assert_eq!(parsed["intent"], "unknown");
    let details = parsed["details"].as_array().unwrap();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0]["id"], "fallback-1");
    assert_eq!(details[0]["type"], "web");
    assert_eq!(
        details[0]["platform_url"],
        "https://www.google.com/search?q=xyz123+completely+unrelated+gibberish"
    );
}

#[tokio::test]
async fn ai_greets_without_details() {
    let (_, parsed) = post_ai(app(), json!({ "text": "hello i want food" })).await;
    assert_eq!(parsed["reply"], "Hello! How can I assist you today?");
    assert_eq!(parsed["has_details"], false);
    assert!(parsed.get("family").is_none());
}

#[test]
fn rejects_invalid_origin_config() {
    let config = ApiConfig {
        allowed_origins: AllowedOrigins::List(vec!["bad\norigin".to_string()]),
        ..ApiConfig::default()
    };
    assert!(build_app(&config).is_err());
}
