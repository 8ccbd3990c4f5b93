//! BLAKE2 variant descriptors and per-variant limits.

use std::fmt;

use serde::{Deserialize, Serialize};

fn normalize(id: &str) -> String {
    id.trim().to_ascii_lowercase()
}

/// The two BLAKE2 parameter sets.
///
/// Validation and encoding are identical for both; only the limits and the
/// primitive entry points differ, so everything downstream is keyed by this
/// descriptor instead of carrying two code paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashVariant {
    /// BLAKE2b: 64-bit targets, digests up to 64 bytes.
    Blake2b,
    /// BLAKE2s: smaller/constrained targets, digests up to 32 bytes.
    Blake2s,
}

impl HashVariant {
    /// Stable string id, as accepted by the CLI.
    pub fn id(self) -> &'static str {
        match self {
            Self::Blake2b => "blake2b",
            Self::Blake2s => "blake2s",
        }
    }

    /// Largest digest the variant can produce, in bytes. Also the default
    /// output length when a caller does not ask for a specific one.
    pub const fn max_output_bytes(self) -> usize {
        match self {
            Self::Blake2b => 64,
            Self::Blake2s => 32,
        }
    }

    /// Largest key the variant accepts, in bytes.
    pub const fn max_key_bytes(self) -> usize {
        match self {
            Self::Blake2b => 64,
            Self::Blake2s => 32,
        }
    }

    /// Look up a variant by string id.
    ///
    /// Supported ids: "blake2b" (also "b2b", "b"), "blake2s" (also "b2s", "s").
    pub fn parse(id: &str) -> Option<Self> {
        match normalize(id).as_str() {
            "blake2b" | "b2b" | "b" => Some(Self::Blake2b),
            "blake2s" | "b2s" | "s" => Some(Self::Blake2s),
            _ => None,
        }
    }
}

impl fmt::Display for HashVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
