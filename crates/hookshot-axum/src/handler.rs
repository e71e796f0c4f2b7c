//! The `POST` view function for incoming deliveries.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;

use hookshot_core::dispatcher::{Outcome, WebhookDispatcher};
use hookshot_types::delivery::{DELIVERY_HEADER, EVENT_HEADER, SIGNATURE_HEADER};

use crate::error::WebhookRejection;

/// POST handler for the webhook endpoint.
///
/// Reads the GitHub delivery headers and the raw body, runs the dispatch
/// pipeline, and acknowledges with a small JSON body once every matching
/// hook has completed. All client errors surface as an undifferentiated
/// 400 via [`WebhookRejection`].
pub async fn postreceive(
    State(dispatcher): State<Arc<WebhookDispatcher>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<serde_json::Value>, WebhookRejection> {
    let delivery_id = headers.get(DELIVERY_HEADER).and_then(|v| v.to_str().ok());
    let event = headers.get(EVENT_HEADER).and_then(|v| v.to_str().ok());
    let signature = headers.get(SIGNATURE_HEADER).and_then(|v| v.to_str().ok());
    let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());

    let outcome = dispatcher
        .receive(delivery_id, event, signature, content_type, &body)
        .await?;

    match outcome {
        Outcome::Ping => tracing::debug!("ping acknowledged"),
        Outcome::Delivered(hooks) => tracing::info!(hooks, "delivery dispatched"),
    }

    Ok(Json(serde_json::json!({ "status": "ok" })))
}
