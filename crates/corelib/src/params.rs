//! Hash request parameters and pre-flight validation.

use log::warn;

use crate::errors::{HashError, ParamViolation};
use crate::variant::HashVariant;

/// Parameters for a single hash computation.
///
/// Built per call and consumed immediately; an empty key means unkeyed
/// hashing. Must pass [`HashParams::validate`] before any primitive call.
#[derive(Debug, Clone)]
pub struct HashParams {
    pub variant: HashVariant,
    pub output_len: usize,
    pub key: Vec<u8>,
}

impl HashParams {
    /// Unkeyed parameters with an explicit output length.
    pub fn new(variant: HashVariant, output_len: usize) -> Self {
        Self {
            variant,
            output_len,
            key: Vec::new(),
        }
    }

    /// Keyed parameters. An empty key degenerates to unkeyed hashing.
    pub fn keyed(variant: HashVariant, output_len: usize, key: impl Into<Vec<u8>>) -> Self {
        Self {
            variant,
            output_len,
            key: key.into(),
        }
    }

    /// Check the output and key lengths against the variant's limits.
    ///
    /// Collects every violated bound rather than stopping at the first, and
    /// emits a warning per violation. Performs no hashing; a non-empty
    /// violation list aborts the operation before the primitive is touched.
    pub fn validate(&self) -> Result<(), HashError> {
        let mut violations = Vec::new();

        if self.output_len < 1 {
            violations.push(ParamViolation::OutputTooShort);
        } else if self.output_len > self.variant.max_output_bytes() {
            violations.push(ParamViolation::OutputTooLong {
                requested: self.output_len,
                max: self.variant.max_output_bytes(),
            });
        }

        if self.key.len() > self.variant.max_key_bytes() {
            violations.push(ParamViolation::KeyTooLong {
                requested: self.key.len(),
                max: self.variant.max_key_bytes(),
            });
        }

        if violations.is_empty() {
            return Ok(());
        }
        for violation in &violations {
            warn!("{}: {}", self.variant, violation);
        }
        Err(HashError::InvalidParams(violations))
    }
}
