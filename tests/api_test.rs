mod helpers;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use helpers::{EventLog, fake_resources};
use mini_rag::application::ports::VectorDbProvider;
use mini_rag::infrastructure::observability::REQUEST_ID_HEADER;
use mini_rag::presentation::create_router;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

#[tokio::test]
async fn given_running_app_when_requesting_welcome_then_returns_name_and_version() {
    let app = create_router(fake_resources(&EventLog::default()).await);

    let response = app
        .oneshot(Request::get("/api/v1/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["app_name"], "mini-rag");
    assert_eq!(json["app_version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn given_connected_vectordb_when_checking_health_then_reports_backends_and_resources() {
    let app = create_router(fake_resources(&EventLog::default()).await);

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["backends"]["vectordb"], "FAKE");
    let resources = json["resources"].as_array().expect("resources is a list");
    assert_eq!(resources.len(), 6);
    assert!(resources.iter().any(|r| r == "vectordb_client"));
    assert!(resources.iter().any(|r| r == "template_parser"));
}

#[tokio::test]
async fn given_disconnected_vectordb_when_checking_health_then_reports_degraded() {
    let resources = fake_resources(&EventLog::default()).await;
    resources
        .vectordb_client()
        .disconnect()
        .await
        .expect("fake disconnect succeeds");
    let app = create_router(resources);

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(response).await["status"], "degraded");
}

#[tokio::test]
async fn given_request_id_header_when_calling_then_it_is_echoed_back() {
    let app = create_router(fake_resources(&EventLog::default()).await);

    let response = app
        .oneshot(
            Request::get("/health")
                .header(REQUEST_ID_HEADER, "req-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()[REQUEST_ID_HEADER], "req-123");
}

#[tokio::test]
async fn given_no_request_id_when_calling_then_one_is_generated() {
    let app = create_router(fake_resources(&EventLog::default()).await);

    let response = app
        .oneshot(Request::get("/api/v1/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let id = response.headers()[REQUEST_ID_HEADER]
        .to_str()
        .expect("header is ascii");
    assert!(uuid::Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn given_unknown_route_when_calling_then_returns_not_found() {
    let app = create_router(fake_resources(&EventLog::default()).await);

    let response = app
        .oneshot(Request::get("/api/v1/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_one_request_when_scraping_metrics_then_request_counter_is_exposed() {
    let app = create_router(fake_resources(&EventLog::default()).await);

    let health = app
        .clone()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(health.status(), StatusCode::OK);

    let response = app
        .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let text = String::from_utf8(bytes.to_vec()).expect("metrics should be UTF-8");
    assert!(text.contains("http_requests_total"), "{text}");
    assert!(text.contains(r#"path="/health""#), "{text}");
}
