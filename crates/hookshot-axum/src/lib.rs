//! Axum integration for the Hookshot webhook dispatcher.
//!
//! Mounts a `POST /postreceive` route (path configurable) onto a host
//! axum application and runs the verification/decode/dispatch pipeline
//! from `hookshot-core` for each delivery.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use axum::Router;
//! use hookshot_axum::build_router;
//! use hookshot_core::dispatcher::WebhookDispatcher;
//! use hookshot_types::config::WebhookConfig;
//!
//! let dispatcher = Arc::new(WebhookDispatcher::with_config(
//!     WebhookConfig::new().with_secret("secret"),
//! ));
//! dispatcher.hook("push", |payload| async move {
//!     tracing::info!(?payload, "push received");
//!     anyhow::Ok(())
//! });
//!
//! let app = Router::new().merge(build_router(Arc::clone(&dispatcher)));
//! ```

pub mod error;
pub mod handler;
pub mod router;

pub use error::WebhookRejection;
pub use router::build_router;
