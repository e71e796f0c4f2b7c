//! Wire-level constants and the per-request delivery record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Header carrying the event name (e.g. "push", "ping").
pub const EVENT_HEADER: &str = "x-github-event";

/// Header carrying the unique delivery identifier. Informational only.
pub const DELIVERY_HEADER: &str = "x-github-delivery";

/// Header carrying the HMAC signature of the raw request body.
pub const SIGNATURE_HEADER: &str = "x-hub-signature";

/// Event name GitHub sends to confirm webhook configuration.
pub const PING_EVENT: &str = "ping";

/// Pseudo event name whose hooks receive every delivery.
pub const WILDCARD_EVENT: &str = "*";

/// One webhook HTTP call representing one event occurrence.
///
/// Transient: built per request after the headers and payload have been
/// validated, handed to each matching hook, then dropped. The dispatcher
/// keeps no cross-request state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Delivery {
    /// Event name from the `X-GitHub-Event` header.
    pub event: String,
    /// Delivery ID from the `X-GitHub-Delivery` header, if present.
    pub delivery_id: Option<String>,
    /// The decoded JSON payload.
    pub payload: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_serializes_round_trip() {
        let delivery = Delivery {
            event: "push".to_string(),
            delivery_id: Some("72d3162e-cc78-11e3".to_string()),
            payload: serde_json::json!({"ref": "refs/heads/main"}),
        };

        let json = serde_json::to_string(&delivery).unwrap();
        let back: Delivery = serde_json::from_str(&json).unwrap();
        assert_eq!(back.event, "push");
        assert_eq!(back.delivery_id.as_deref(), Some("72d3162e-cc78-11e3"));
        assert_eq!(back.payload["ref"], "refs/heads/main");
    }
}
