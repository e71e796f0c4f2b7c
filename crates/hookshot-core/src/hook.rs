//! The `Hook` trait: an async callable invoked with a decoded payload.

use std::future::Future;
use std::pin::Pin;

use serde_json::Value;

/// An async webhook handler.
///
/// Hooks are stored as trait objects, so the trait returns a boxed future
/// rather than using RPITIT. Each hook receives the decoded payload by
/// value (its own copy) and reports failure via `anyhow::Result`; a
/// failure aborts the remaining hooks for that delivery and surfaces
/// through the host framework's error path.
pub trait Hook: Send + Sync {
    /// Handle one decoded delivery payload.
    fn call(
        &self,
        payload: Value,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + 'static>>;
}

/// Blanket implementation: any async closure or `async fn` taking the
/// payload by value is a hook. This keeps registration as lightweight as
/// passing a plain function.
impl<F, Fut> Hook for F
where
    F: Fn(Value) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    fn call(
        &self,
        payload: Value,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + 'static>> {
        Box::pin(self(payload))
    }
}
