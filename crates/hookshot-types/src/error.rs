use thiserror::Error;

/// Errors that can occur while processing one webhook delivery.
///
/// The first three variants are client errors; the HTTP surface reports
/// them all as an undifferentiated 400. `Handler` failures come from
/// registered hooks and surface through the host framework's server-error
/// path instead.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The event-name header was absent.
    #[error("missing event header")]
    MissingEventHeader,

    /// A secret is configured and the signature header was absent,
    /// malformed, or did not match the request body.
    #[error("signature verification failed")]
    SignatureMismatch,

    /// The request body was empty, unparseable, or decoded to a JSON value
    /// carrying no data.
    #[error("no payload data")]
    EmptyPayload,

    /// A registered hook failed while handling the delivery.
    #[error(transparent)]
    Handler(#[from] anyhow::Error),
}
