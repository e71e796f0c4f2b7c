//! HMAC-SHA1 signature verification for the `X-Hub-Signature` header.
//!
//! GitHub signs the raw request body with the shared secret and sends the
//! digest as `sha1=<hexdigest>`. Verification recomputes the HMAC over the
//! body and compares in constant time.

use hmac::{Hmac, Mac};
use sha1::Sha1;

use hookshot_types::error::WebhookError;

// Type alias for HMAC-SHA1
type HmacSha1 = Hmac<Sha1>;

/// Algorithm prefix of the only signature scheme GitHub uses for this
/// header.
const SHA1_PREFIX: &str = "sha1=";

/// Verify an `X-Hub-Signature` header value against a request body.
///
/// The header format is `<algorithm>=<hexdigest>` and only `sha1` is
/// supported. A missing prefix, an unsupported algorithm, undecodable hex,
/// and a digest mismatch all yield [`WebhookError::SignatureMismatch`] --
/// the caller cannot tell them apart, matching the single client-error
/// surface.
///
/// The comparison runs in time independent of where the first differing
/// byte occurs (via the hmac crate's `verify_slice`).
pub fn verify_signature(secret: &[u8], body: &[u8], header: &str) -> Result<(), WebhookError> {
    let digest_hex = header
        .strip_prefix(SHA1_PREFIX)
        .ok_or(WebhookError::SignatureMismatch)?;
    let expected = hex_decode(digest_hex).ok_or(WebhookError::SignatureMismatch)?;

    let mut mac = mac_for(secret);
    mac.update(body);
    mac.verify_slice(&expected)
        .map_err(|_| WebhookError::SignatureMismatch)
}

/// Compute the hex HMAC-SHA1 digest of `body` keyed by `secret`.
///
/// Senders build the `sha1=<hexdigest>` header from this; tests use it to
/// construct valid deliveries.
pub fn compute_hmac_sha1_hex(secret: &[u8], body: &[u8]) -> String {
    let mut mac = mac_for(secret);
    mac.update(body);
    hex_encode(&mac.finalize().into_bytes())
}

fn mac_for(secret: &[u8]) -> HmacSha1 {
    HmacSha1::new_from_slice(secret).expect("HMAC can take key of any size")
}

/// Decode a hex string to bytes.
fn hex_decode(hex: &str) -> Option<Vec<u8>> {
    if hex.len() % 2 != 0 {
        return None;
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).ok())
        .collect()
}

/// Encode bytes to a lowercase hex string.
fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
