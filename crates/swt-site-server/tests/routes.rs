//! Integration tests for the SWT site router.
//!
//! Requests go through the fully assembled router with `oneshot`, so
//! middleware and extractors behave as in production. Live delivery is
//! exercised against an in-process stand-in for the Resend API.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::{Body, to_bytes};
use axum::extract::State;
use axum::http::{HeaderMap, Request, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tower::ServiceExt;

use swt_site_core::mailer::{MOCK_MESSAGE, SENT_MESSAGE};
use swt_site_server::app::build_router;
use swt_site_server::config::SiteConfig;
use swt_site_server::state::AppState;

/// Helper: router built from the given variables, mock delay disabled.
fn app_with(vars: &[(&str, &str)]) -> Router {
    let mut vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    vars.entry("SWT_CONTACT_MOCK_DELAY_MS".to_owned())
        .or_insert_with(|| "0".to_owned());
    let config = SiteConfig::from_lookup(|key| vars.get(key).cloned());
    let state = Arc::new(AppState::from_config(&config).unwrap());
    build_router(state, "./does-not-exist")
}

fn app() -> Router {
    app_with(&[])
}

async fn get(app: Router, uri: &str) -> (StatusCode, HeaderMap, String) {
    let resp = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, headers, String::from_utf8(body.to_vec()).unwrap())
}

async fn post_contact(app: Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let resp = app
        .oneshot(
            Request::post("/api/contact")
                .header(header::CONTENT_TYPE, "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn valid_form() -> String {
    json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "message": "Interested in migrating from JWT."
    })
    .to_string()
}

// ── Landing page ─────────────────────────────────────────────────────

#[tokio::test]
async fn landing_page_renders_highlighted_snippets() {
    let (status, headers, body) = get(app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );
    assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");
    assert!(body.contains("Beyond JWT."));
    assert!(body.contains(r#"<span class="tok-keyword">import</span>"#));
    assert!(body.contains(r#"<span class="tok-key">userId</span>"#));
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let (status, _, _) = get(app(), "/nope.png").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ── Contact ──────────────────────────────────────────────────────────

#[tokio::test]
async fn mock_mode_accepts_valid_submission() {
    let (status, body) = post_contact(app(), valid_form()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "message": MOCK_MESSAGE }));
}

#[tokio::test]
async fn invalid_field_is_reported_with_its_name() {
    let form = json!({ "name": "Ada", "email": "ada@", "message": "Long enough message" });
    let (status, body) = post_contact(app(), form.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": false, "error": "Invalid email address", "field": "email" })
    );
}

#[tokio::test]
async fn short_message_is_rejected() {
    let form = json!({ "name": "Ada", "email": "ada@example.com", "message": "short" });
    let (_, body) = post_contact(app(), form.to_string()).await;
    assert_eq!(body["field"], "message");
    assert_eq!(body["error"], "Message must be at least 10 characters");
}

#[tokio::test]
async fn malformed_body_gets_generic_error() {
    let (status, body) = post_contact(app(), "{not json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": false, "error": "Something went wrong. Please try again." })
    );
}

#[tokio::test]
async fn contact_responses_are_not_cached() {
    let resp = app()
        .oneshot(
            Request::post("/api/contact")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(valid_form()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.headers()[header::CACHE_CONTROL], "no-store");
}

// ── Health & crawlers ────────────────────────────────────────────────

#[tokio::test]
async fn health_reports_mode() {
    let (status, _, body) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body, json!({ "status": "ok", "mode": "mock" }));

    let live = app_with(&[("RESEND_API_KEY", "re_test")]);
    let (_, _, body) = get(live, "/health").await;
    assert!(body.contains(r#""mode":"live""#));
}

#[tokio::test]
async fn sitemap_and_robots_use_site_url() {
    let (status, headers, body) =
        get(app_with(&[("SWT_SITE_URL", "https://swt.example/")]), "/sitemap.xml").await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("application/xml")
    );
    assert!(body.contains("<loc>https://swt.example</loc>"));

    let (_, _, body) =
        get(app_with(&[("SWT_SITE_URL", "https://swt.example")]), "/robots.txt").await;
    assert!(body.contains("Sitemap: https://swt.example/sitemap.xml"));
}

// ── Live delivery ────────────────────────────────────────────────────

#[derive(Clone, Default)]
struct StubResend {
    received: Arc<Mutex<Vec<(Option<String>, Value)>>>,
    reject: bool,
}

async fn stub_emails(
    State(stub): State<StubResend>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let auth = headers
        .get(header::AUTHORIZATION)
        .map(|v| v.to_str().unwrap().to_owned());
    stub.received.lock().unwrap().push((auth, body));
    if stub.reject {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "name": "validation_error", "message": "domain is not verified" })),
        )
    } else {
        (StatusCode::OK, Json(json!({ "id": "email_123" })))
    }
}

/// Helper: serve the stub on an ephemeral port and return its base URL.
async fn spawn_stub(stub: StubResend) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new()
        .route("/emails", post(stub_emails))
        .with_state(stub);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn live_mode_delivers_through_resend() {
    let stub = StubResend::default();
    let url = spawn_stub(stub.clone()).await;
    let app = app_with(&[("RESEND_API_KEY", "re_test"), ("SWT_RESEND_API_URL", &url)]);

    let (_, body) = post_contact(app, valid_form()).await;
    assert_eq!(body, json!({ "success": true, "message": SENT_MESSAGE }));

    let received = stub.received.lock().unwrap();
    assert_eq!(received.len(), 1);
    let (auth, email) = &received[0];
    assert_eq!(auth.as_deref(), Some("Bearer re_test"));
    assert_eq!(email["to"], json!(["securewebtoken@gmail.com"]));
    assert_eq!(email["subject"], "New Contact Message from Ada Lovelace");
    assert_eq!(
        email["text"],
        "Name: Ada Lovelace\nEmail: ada@example.com\n\nMessage:\nInterested in migrating from JWT."
    );
}

#[tokio::test]
async fn resend_rejection_reports_delivery_failure() {
    let stub = StubResend {
        reject: true,
        ..StubResend::default()
    };
    let url = spawn_stub(stub.clone()).await;
    let app = app_with(&[("RESEND_API_KEY", "re_test"), ("SWT_RESEND_API_URL", &url)]);

    let (status, body) = post_contact(app, valid_form()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": false, "error": "Failed to send email. Please try again later." })
    );
    assert_eq!(stub.received.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn unreachable_resend_reports_delivery_failure() {
    // Grab a free port, then close it so connections are refused.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let app = app_with(&[("RESEND_API_KEY", "re_test"), ("SWT_RESEND_API_URL", &url)]);
    let (_, body) = post_contact(app, valid_form()).await;
    assert_eq!(
        body,
        json!({ "success": false, "error": "Failed to send email. Please try again later." })
    );
}

#[tokio::test]
async fn invalid_submission_never_reaches_resend() {
    let stub = StubResend::default();
    let url = spawn_stub(stub.clone()).await;
    let app = app_with(&[("RESEND_API_KEY", "re_test"), ("SWT_RESEND_API_URL", &url)]);

    let form = json!({ "name": "A", "email": "a@example.com", "message": "Long enough message" });
    let (_, body) = post_contact(app, form.to_string()).await;
    assert_eq!(body["field"], "name");
    assert!(stub.received.lock().unwrap().is_empty());
}
