//! Content digests over canonical trace bytes.
//!
//! A trace digest is SHA-256 over the canonical JSON bytes of a
//! [`TraceResultV1`], with a domain prefix so trace digests can never
//! collide with digests of other artifact kinds. Lock tests and the
//! cross-process fixture compare these digests.

use sha2::{Digest, Sha256};

use crate::canon::CanonError;
use crate::trace::TraceResultV1;

/// Domain prefix for trace digests (null-terminated).
pub const DOMAIN_TRACE: &[u8] = b"BISECT::TRACE::V1\0";

/// A content-addressed digest in `"sha256:<hex>"` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TraceDigest(String);

impl TraceDigest {
    /// The full `"sha256:<hex>"` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The hex portion (64 lowercase hex chars).
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.0["sha256:".len()..]
    }
}

impl std::fmt::Display for TraceDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the domain-separated digest of a trace.
///
/// # Errors
///
/// Returns [`CanonError`] if canonical serialization fails; cannot happen
/// for traces built by [`crate::trace::trace`].
pub fn trace_digest(result: &TraceResultV1) -> Result<TraceDigest, CanonError> {
    let bytes = result.to_canonical_json_bytes()?;
    Ok(digest_bytes(&bytes))
}

/// Digest pre-serialized canonical bytes.
#[must_use]
pub fn digest_bytes(canonical: &[u8]) -> TraceDigest {
    let mut hasher = Sha256::new();
    hasher.update(DOMAIN_TRACE);
    hasher.update(canonical);
    TraceDigest(format!("sha256:{}", hex::encode(hasher.finalize())))
}
