//! Digest container and raw/hex output encoding.

use std::fmt;

/// An immutable digest of exactly the requested output length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    bytes: Vec<u8>,
}

impl Digest {
    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the digest into its bytes.
    pub fn to_vec(self) -> Vec<u8> {
        self.bytes
    }

    /// Lowercase hex rendering: two characters per byte, most-significant
    /// nibble first.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Digest length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Requested output form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Digest bytes verbatim.
    Raw,
    /// Lowercase hexadecimal text, `2 × len` characters.
    Hex,
}

/// A digest in its final output form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodedOutput {
    Raw(Vec<u8>),
    Hex(String),
}

/// Convert a digest into the caller's requested form.
pub fn encode(digest: Digest, encoding: Encoding) -> EncodedOutput {
    match encoding {
        Encoding::Raw => EncodedOutput::Raw(digest.to_vec()),
        Encoding::Hex => EncodedOutput::Hex(digest.to_hex()),
    }
}
