//! Core library: BLAKE2b/BLAKE2s one-shot and streaming hashing for the CLI.

use once_cell::sync::Lazy;
use serde::Serialize;

pub mod encode;
pub mod errors;
pub mod oneshot;
pub mod params;
pub mod stream;
pub mod variant;

pub use encode::{encode, Digest, EncodedOutput, Encoding};
pub use errors::{HashError, ParamViolation};
pub use oneshot::{blake2b, blake2s, hash, hash_default};
pub use params::HashParams;
pub use stream::{hash_file, hash_reader, StreamHasher};
pub use variant::HashVariant;

/// Public variant info (limits table for CLI/consumers)
#[derive(Debug, Clone, Serialize)]
pub struct VariantInfo {
    pub id: &'static str,
    pub max_output_bytes: usize,
    pub max_key_bytes: usize,
}

static VARIANTS: Lazy<Vec<VariantInfo>> = Lazy::new(|| {
    [HashVariant::Blake2b, HashVariant::Blake2s]
        .into_iter()
        .map(|v| VariantInfo {
            id: v.id(),
            max_output_bytes: v.max_output_bytes(),
            max_key_bytes: v.max_key_bytes(),
        })
        .collect()
});

/// API: list supported variants and their limits
pub fn list_variants() -> &'static [VariantInfo] {
    VARIANTS.as_slice()
}

/// Version helper for CLI
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
