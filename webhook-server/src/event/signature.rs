//! Webhook signature verification.
//!
//! The platform signs the raw request body with HMAC-SHA256 keyed by the
//! channel secret and sends the base64 digest in the `X-Line-Signature`
//! header.
//! Reference: https://developers.line.biz/en/reference/messaging-api/#signature-validation

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::warn;

type HmacSha256 = Hmac<Sha256>;

/// Verify a webhook signature against the raw request body.
///
/// # Arguments
///
/// * `channel_secret` - The channel secret the platform signed with
/// * `body` - The raw request body, byte for byte as received
/// * `signature` - The base64 digest from the signature header
///
/// # Returns
///
/// `true` if the signature matches, `false` otherwise.
pub fn verify_signature(channel_secret: &str, body: &[u8], signature: &str) -> bool {
    if channel_secret.is_empty() || signature.is_empty() {
        warn!(
            has_channel_secret = !channel_secret.is_empty(),
            has_signature = !signature.is_empty(),
            "signature_missing_fields"
        );
        return false;
    }

    // Compute expected signature: base64(HMAC-SHA256(channel_secret, body))
    let mut mac = match HmacSha256::new_from_slice(channel_secret.as_bytes()) {
        Ok(m) => m,
        Err(_) => {
            warn!("signature_invalid_key");
            return false;
        }
    };

    mac.update(body);

    let expected_signature = BASE64.encode(mac.finalize().into_bytes());

    // Constant-time comparison to prevent timing attacks
    let valid = constant_time_compare(&expected_signature, signature);

    if !valid {
        warn!(
            expected_length = expected_signature.len(),
            actual_length = signature.len(),
            "signature_mismatch"
        );
    }

    valid
}

/// Constant-time string comparison to prevent timing attacks.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}
