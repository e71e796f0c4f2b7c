//! The webhook dispatcher: registration surface and per-delivery pipeline.
//!
//! `WebhookDispatcher` owns the endpoint configuration and the hook
//! registry. `receive()` runs the whole per-request pipeline: header
//! checks, signature verification, payload decoding, and sequential hook
//! dispatch.

use std::sync::Arc;

use hookshot_types::config::WebhookConfig;
use hookshot_types::delivery::{Delivery, PING_EVENT, WILDCARD_EVENT};
use hookshot_types::error::WebhookError;

use crate::hook::Hook;
use crate::payload::decode_payload;
use crate::registry::HookRegistry;
use crate::signature::verify_signature;

/// What a successfully processed delivery amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The delivery was a `ping`; no hook ran.
    Ping,
    /// The delivery was dispatched to this many hooks (possibly zero).
    Delivered(usize),
}

/// Receives webhook deliveries and dispatches them to registered hooks.
///
/// One instance per endpoint, created at application startup. The hook
/// registry is written only by registration calls and read at request
/// time; the dispatcher holds no other cross-request state, so one
/// instance is shared across all connections.
pub struct WebhookDispatcher {
    config: WebhookConfig,
    registry: HookRegistry,
}

impl WebhookDispatcher {
    /// Dispatcher with the default configuration: path `/postreceive`, no
    /// secret, signature verification disabled.
    pub fn new() -> Self {
        Self::with_config(WebhookConfig::default())
    }

    /// Dispatcher with an explicit endpoint configuration.
    pub fn with_config(config: WebhookConfig) -> Self {
        Self {
            config,
            registry: HookRegistry::new(),
        }
    }

    /// The URL path this dispatcher expects to be mounted under.
    pub fn path(&self) -> &str {
        &self.config.path
    }

    /// Register `hook` for deliveries of `event`.
    ///
    /// Returns `&Self` so registrations chain. Registering the same hook
    /// twice runs it twice; registering nothing at all is fine -- such
    /// deliveries complete as a no-op.
    pub fn hook<H>(&self, event: &str, hook: H) -> &Self
    where
        H: Hook + 'static,
    {
        self.registry.register(event, Arc::new(hook));
        self
    }

    /// Register `hook` for every event, regardless of name.
    pub fn hook_any<H>(&self, hook: H) -> &Self
    where
        H: Hook + 'static,
    {
        self.hook(WILDCARD_EVENT, hook)
    }

    /// Process one delivery end to end.
    ///
    /// Pipeline order matters and is observable:
    /// 1. a missing event header fails before anything else,
    /// 2. when a secret is configured the signature is verified against
    ///    the raw body BEFORE any payload parsing; a missing signature
    ///    header is a mismatch, never a pass-through,
    /// 3. the payload is decoded (form `payload` field or direct JSON),
    /// 4. `ping` deliveries succeed without running any hook,
    /// 5. exact-match hooks run before wildcard hooks, sequentially, each
    ///    awaited before the next; a hook failure stops the chain.
    pub async fn receive(
        &self,
        delivery_id: Option<&str>,
        event: Option<&str>,
        signature: Option<&str>,
        content_type: Option<&str>,
        body: &[u8],
    ) -> Result<Outcome, WebhookError> {
        let event = event.ok_or(WebhookError::MissingEventHeader)?;

        if let Some(secret) = &self.config.secret {
            let header = signature.ok_or(WebhookError::SignatureMismatch)?;
            verify_signature(secret, body, header)?;
        }

        let delivery = Delivery {
            event: event.to_string(),
            delivery_id: delivery_id.map(str::to_string),
            payload: decode_payload(content_type, body)?,
        };
        tracing::debug!(
            event = %delivery.event,
            delivery_id = delivery.delivery_id.as_deref().unwrap_or(""),
            "received delivery"
        );

        if delivery.event == PING_EVENT {
            return Ok(Outcome::Ping);
        }

        let hooks = self.registry.hooks_for(&delivery.event);
        for hook in &hooks {
            hook.call(delivery.payload.clone()).await?;
        }

        Ok(Outcome::Delivered(hooks.len()))
    }
}

impl Default for WebhookDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
