//! Error-to-response mapping for the HTTP surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use hookshot_types::error::WebhookError;

/// Wrapper for `WebhookError` that implements `IntoResponse`.
///
/// The three client-error kinds all collapse to the same generic
/// `400 Bad Request`: callers get no machine-readable distinction between
/// a missing event header, a bad signature, and an empty payload. Hook
/// failures are server-side and map to `500`.
pub struct WebhookRejection(pub WebhookError);

impl IntoResponse for WebhookRejection {
    fn into_response(self) -> Response {
        match &self.0 {
            WebhookError::MissingEventHeader
            | WebhookError::SignatureMismatch
            | WebhookError::EmptyPayload => {
                tracing::debug!(reason = %self.0, "rejecting delivery");
                (StatusCode::BAD_REQUEST, "bad request").into_response()
            }
            WebhookError::Handler(e) => {
                tracing::error!(error = %e, "hook failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}

impl From<WebhookError> for WebhookRejection {
    fn from(e: WebhookError) -> Self {
        WebhookRejection(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_400() {
        for err in [
            WebhookError::MissingEventHeader,
            WebhookError::SignatureMismatch,
            WebhookError::EmptyPayload,
        ] {
            let response = WebhookRejection(err).into_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn hook_failures_map_to_500() {
        let err = WebhookError::Handler(anyhow::anyhow!("boom"));
        let response = WebhookRejection(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
