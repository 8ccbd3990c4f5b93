//! One-shot hashing over in-memory buffers.

use log::warn;

use crate::encode::Digest;
use crate::errors::HashError;
use crate::params::HashParams;
use crate::variant::HashVariant;

/// Hash `data` in a single call with explicit, validated parameters.
pub fn hash(params: &HashParams, data: &[u8]) -> Result<Digest, HashError> {
    params.validate()?;
    let bytes = match params.variant {
        HashVariant::Blake2b => {
            let mut p = blake2b_simd::Params::new();
            p.hash_length(params.output_len);
            if !params.key.is_empty() {
                p.key(&params.key);
            }
            p.hash(data).as_bytes().to_vec()
        }
        HashVariant::Blake2s => {
            let mut p = blake2s_simd::Params::new();
            p.hash_length(params.output_len);
            if !params.key.is_empty() {
                p.key(&params.key);
            }
            p.hash(data).as_bytes().to_vec()
        }
    };
    check_digest_len(params.variant, bytes, params.output_len)
}

/// BLAKE2b digest of `data`. Pass an empty `key` for unkeyed hashing.
pub fn blake2b(data: &[u8], output_len: usize, key: &[u8]) -> Result<Digest, HashError> {
    hash(&HashParams::keyed(HashVariant::Blake2b, output_len, key), data)
}

/// BLAKE2s digest of `data`. Pass an empty `key` for unkeyed hashing.
pub fn blake2s(data: &[u8], output_len: usize, key: &[u8]) -> Result<Digest, HashError> {
    hash(&HashParams::keyed(HashVariant::Blake2s, output_len, key), data)
}

/// Unkeyed digest at the variant's maximum output length.
pub fn hash_default(variant: HashVariant, data: &[u8]) -> Result<Digest, HashError> {
    hash(&HashParams::new(variant, variant.max_output_bytes()), data)
}

// The primitives cannot fail on validated inputs; a length mismatch would
// mean the state was driven wrong, so it is surfaced instead of ignored.
pub(crate) fn check_digest_len(
    variant: HashVariant,
    bytes: Vec<u8>,
    output_len: usize,
) -> Result<Digest, HashError> {
    if bytes.len() != output_len {
        warn!(
            "{variant}: primitive produced {} bytes, expected {output_len}",
            bytes.len()
        );
        return Err(HashError::Primitive(format!(
            "{variant} produced {} bytes, expected {output_len}",
            bytes.len()
        )));
    }
    Ok(Digest::new(bytes))
}
