mod common;

use assert2::check;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use casting_destiny::corpus::CorpusCache;
use casting_destiny::server;
use casting_destiny::service::SearchService;
use common::{StaticSource, sample_inventory};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

fn app(source: Arc<StaticSource>) -> Router {
    let cache = Arc::new(CorpusCache::new(source));
    server::router(Arc::new(SearchService::new(cache)))
}

async fn post_search(app: Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/search")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn search_endpoint_returns_ranked_payload() {
    let app = app(Arc::new(StaticSource::new(sample_inventory())));

    let (status, body) = post_search(app, json!({ "keywords": "Grenades, grenade, reload" })).await;

    check!(status == StatusCode::OK);
    check!(body["totalFound"] == json!(2));
    check!(body["processedKeywords"] == json!(["grenades", "grenade", "reload"]));

    let top = &body["results"][0];
    check!(top["identifier"] == json!(100));
    check!(top["name"] == json!("Demolitionist Gauntlets"));
    check!(top["type"] == json!("Unknown"));
    check!(top["rarity"] == json!("Common"));
    check!(top["matchedKeywords"] == json!(["grenade", "reload"]));
    check!(top["synergyScore"].is_u64());
    check!(top["icon"].is_string());
}

#[tokio::test]
async fn blank_keywords_get_a_client_error() {
    let app = app(Arc::new(StaticSource::new(sample_inventory())));

    let (status, body) = post_search(app, json!({ "keywords": "   " })).await;

    check!(status == StatusCode::BAD_REQUEST);
    check!(body["error"]["code"] == json!("invalid_query"));
}

#[tokio::test]
async fn missing_keywords_field_gets_a_client_error() {
    let app = app(Arc::new(StaticSource::new(sample_inventory())));

    let (status, body) = post_search(app, json!({})).await;

    check!(status == StatusCode::BAD_REQUEST);
    check!(body["error"]["code"] == json!("invalid_query"));
}

#[tokio::test]
async fn malformed_json_body_keeps_the_error_contract() {
    let app = app(Arc::new(StaticSource::new(sample_inventory())));

    let request = Request::builder()
        .method("POST")
        .uri("/api/search")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    check!(response.status() == StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    check!(body["error"]["code"] == json!("bad_request"));
    check!(body["error"]["message"].is_string());
}

#[tokio::test]
async fn upstream_outage_gets_a_server_error_without_detail() {
    let source = Arc::new(StaticSource::new(sample_inventory()));
    source.set_failing(true);
    let app = app(source);

    let (status, body) = post_search(app, json!({ "keywords": "grenade" })).await;

    check!(status == StatusCode::BAD_GATEWAY);
    check!(body["error"]["code"] == json!("corpus_unavailable"));
    let message = body["error"]["message"].as_str().unwrap();
    check!(!message.contains("simulated"), "raw upstream detail leaked: {message}");
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app(Arc::new(StaticSource::new(sample_inventory())));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    check!(response.status() == StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    check!(body["status"] == json!("ok"));
}
