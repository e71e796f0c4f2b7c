//! Endpoint configuration for the webhook dispatcher.
//!
//! `WebhookConfig` controls where the dispatcher mounts and whether
//! deliveries must carry a valid signature. All fields have defaults:
//! the path is `/postreceive` and no secret is configured.

/// URL path the dispatcher mounts under when none is given.
pub const DEFAULT_PATH: &str = "/postreceive";

/// Configuration for one webhook endpoint.
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// URL path the `POST` route is registered at.
    pub path: String,

    /// Shared secret for signature verification. When set, every delivery
    /// must carry a matching `X-Hub-Signature` header; a missing header is
    /// a mismatch, not a pass-through.
    pub secret: Option<Vec<u8>>,
}

impl WebhookConfig {
    /// Configuration with the default path and no secret.
    pub fn new() -> Self {
        Self {
            path: DEFAULT_PATH.to_string(),
            secret: None,
        }
    }

    /// Mount the endpoint at `path` instead of the default.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Require deliveries to be signed with `secret`.
    ///
    /// Accepts text or raw bytes, matching what the sender was configured
    /// with.
    pub fn with_secret(mut self, secret: impl Into<Vec<u8>>) -> Self {
        self.secret = Some(secret.into());
        self
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self::new()
    }
}
