//! Contact route: `POST /api/contact`.
//!
//! Accepts `{name, email, message}` as JSON and always answers `200` with a
//! [`ContactResult`]; the `success` flag carries the outcome. A body that is
//! not valid JSON for the form is treated as an unexpected failure.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderValue, header};
use axum::routing::post;
use axum::{Json, Router};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use swt_site_core::contact::ContactInput;
use swt_site_core::error::ContactError;
use swt_site_core::mailer::{ContactResult, ContactService};

use crate::state::AppState;

/// Upper bound on submissions in flight across all visitors.
const MAX_IN_FLIGHT: usize = 32;

/// Build the contact router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/contact", post(submit_contact))
        .layer(ConcurrencyLimitLayer::new(MAX_IN_FLIGHT))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}

async fn submit_contact(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ContactInput>, JsonRejection>,
) -> Json<ContactResult> {
    match payload {
        Ok(Json(input)) => Json(state.contact.handle(input).await),
        Err(rejection) => Json(ContactService::report(&ContactError::Unexpected {
            reason: format!("malformed contact request: {}", rejection.body_text()),
        })),
    }
}
