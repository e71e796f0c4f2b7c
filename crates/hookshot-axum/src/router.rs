//! Router construction for mounting the dispatcher into a host app.

use std::sync::Arc;

use axum::Router;
use axum::routing::post;

use hookshot_core::dispatcher::WebhookDispatcher;

use crate::handler;

/// Build a router exposing `POST <path>` for the given dispatcher.
///
/// The path comes from the dispatcher's configuration (`/postreceive` by
/// default). The host application merges the result into its own router;
/// only `POST` is accepted on the route.
pub fn build_router(dispatcher: Arc<WebhookDispatcher>) -> Router {
    let path = dispatcher.path().to_string();
    Router::new()
        .route(&path, post(handler::postreceive))
        .with_state(dispatcher)
}
