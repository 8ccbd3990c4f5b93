use std::io;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// A single parameter bound violated by a hash request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum ParamViolation {
    #[error("output length is too short (minimum 1 byte)")]
    OutputTooShort,
    #[error("output length {requested} is too long (maximum {max} bytes)")]
    OutputTooLong { requested: usize, max: usize },
    #[error("key length {requested} is too long (maximum {max} bytes)")]
    KeyTooLong { requested: usize, max: usize },
}

#[derive(Debug, Error)]
pub enum HashError {
    /// One or more parameters fell outside the variant's limits. Carries
    /// every violated bound, not just the first.
    #[error("invalid hash parameters: {}", join_violations(.0))]
    InvalidParams(Vec<ParamViolation>),

    #[error("cannot open '{}' for reading", .path.display())]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A read failed mid-stream; the partial hash state is discarded.
    #[error("source read failed after {bytes_processed} bytes")]
    SourceRead {
        bytes_processed: u64,
        #[source]
        source: io::Error,
    },

    /// The primitive misbehaved despite validated inputs.
    #[error("hash primitive failure: {0}")]
    Primitive(String),
}

fn join_violations(violations: &[ParamViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
