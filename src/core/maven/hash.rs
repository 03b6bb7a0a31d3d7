// ─── Content Hashes ───
// SRI-style digests (`sha256-<base64>`) and store-safe file names.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::core::error::{CatalogError, CatalogResult};

/// Replacement for every character outside `[A-Za-z0-9-_.]` in a store name.
pub const NAME_ESCAPE: &str = "__";

/// Re-encode a hex digest as `"<algorithm>-<base64 of raw bytes>"`.
///
/// Hex input is accepted in either case.
pub fn encode_hash(algorithm: &str, hex_digest: &str) -> CatalogResult<String> {
    let bytes = hex::decode(hex_digest).map_err(|e| CatalogError::InvalidDigest {
        digest: hex_digest.to_string(),
        reason: e.to_string(),
    })?;
    Ok(format!("{}-{}", algorithm, STANDARD.encode(bytes)))
}

/// Derive a filesystem/store-safe name from a download URL.
pub fn sanitize_name(url: &str) -> String {
    let mut name = String::with_capacity(url.len());
    for c in url.chars() {
        if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
            name.push(c);
        } else {
            name.push_str(NAME_ESCAPE);
        }
    }
    name
}
