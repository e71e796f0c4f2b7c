//! Payload decoding for incoming deliveries.
//!
//! GitHub posts either `application/json`, where the body is the JSON
//! payload itself, or `application/x-www-form-urlencoded`, where the body
//! carries a `payload` field holding a JSON string. Anything that is not
//! form-encoded is parsed as JSON directly.

use serde_json::Value;

use hookshot_types::error::WebhookError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Form field that carries the JSON document in form-encoded deliveries.
const PAYLOAD_FIELD: &str = "payload";

/// Decode a request body into its JSON payload.
///
/// An empty body, a parse failure, a form body without a `payload` field,
/// and a decoded value carrying no data (`null`, `false`, `0`, `""`, `[]`,
/// `{}`) all yield [`WebhookError::EmptyPayload`].
pub fn decode_payload(content_type: Option<&str>, body: &[u8]) -> Result<Value, WebhookError> {
    let value = if is_form_encoded(content_type) {
        let fields: Vec<(String, String)> =
            serde_urlencoded::from_bytes(body).map_err(|_| WebhookError::EmptyPayload)?;
        let raw = fields
            .into_iter()
            .find(|(name, _)| name == PAYLOAD_FIELD)
            .map(|(_, value)| value)
            .ok_or(WebhookError::EmptyPayload)?;
        serde_json::from_str(&raw).map_err(|_| WebhookError::EmptyPayload)?
    } else {
        serde_json::from_slice(body).map_err(|_| WebhookError::EmptyPayload)?
    };

    if is_empty_value(&value) {
        return Err(WebhookError::EmptyPayload);
    }
    Ok(value)
}

/// Content-type check, ignoring any `; charset=...` parameters.
fn is_form_encoded(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|ct| ct.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE))
        .unwrap_or(false)
}

/// A decoded value that carries no data is treated the same as a missing
/// body.
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
