//! Streaming hashing over incrementally read sources.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::encode::Digest;
use crate::errors::HashError;
use crate::oneshot::check_digest_len;
use crate::params::HashParams;
use crate::variant::HashVariant;

/// Read granularity for streaming sources.
const CHUNK_SIZE: usize = 1024;

enum State {
    Blake2b(blake2b_simd::State),
    Blake2s(blake2s_simd::State),
}

/// Incremental, unkeyed hasher.
///
/// Created already validated, fed by [`StreamHasher::update`], and consumed
/// by [`StreamHasher::finalize`] — producing the digest takes ownership, so
/// no bytes can be absorbed after finalization and the digest is produced
/// at most once.
pub struct StreamHasher {
    state: State,
    output_len: usize,
    bytes_processed: u64,
}

impl StreamHasher {
    /// Start an incremental hash with the given output length.
    pub fn new(variant: HashVariant, output_len: usize) -> Result<Self, HashError> {
        HashParams::new(variant, output_len).validate()?;
        let state = match variant {
            HashVariant::Blake2b => {
                let mut p = blake2b_simd::Params::new();
                p.hash_length(output_len);
                State::Blake2b(p.to_state())
            }
            HashVariant::Blake2s => {
                let mut p = blake2s_simd::Params::new();
                p.hash_length(output_len);
                State::Blake2s(p.to_state())
            }
        };
        Ok(Self {
            state,
            output_len,
            bytes_processed: 0,
        })
    }

    /// Absorb the next chunk. Each byte is fed to the primitive exactly
    /// once, in source order.
    pub fn update(&mut self, chunk: &[u8]) {
        match &mut self.state {
            State::Blake2b(s) => {
                s.update(chunk);
            }
            State::Blake2s(s) => {
                s.update(chunk);
            }
        }
        self.bytes_processed += chunk.len() as u64;
    }

    /// Total bytes absorbed so far.
    pub fn bytes_processed(&self) -> u64 {
        self.bytes_processed
    }

    pub fn variant(&self) -> HashVariant {
        match self.state {
            State::Blake2b(_) => HashVariant::Blake2b,
            State::Blake2s(_) => HashVariant::Blake2s,
        }
    }

    /// Produce the digest, consuming the hasher.
    pub fn finalize(self) -> Result<Digest, HashError> {
        let variant = self.variant();
        let bytes = match self.state {
            State::Blake2b(s) => s.finalize().as_bytes().to_vec(),
            State::Blake2s(s) => s.finalize().as_bytes().to_vec(),
        };
        check_digest_len(variant, bytes, self.output_len)
    }
}

/// Hash everything `reader` yields, in fixed-size chunks.
///
/// A zero-byte read signals end of data; a read error discards the partial
/// state and surfaces [`HashError::SourceRead`]. The digest equals the
/// one-shot digest of the concatenated bytes for any chunking of the input.
pub fn hash_reader<R: Read>(
    variant: HashVariant,
    output_len: usize,
    reader: &mut R,
) -> Result<Digest, HashError> {
    let mut hasher = StreamHasher::new(variant, output_len)?;
    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => hasher.update(&buf[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(HashError::SourceRead {
                    bytes_processed: hasher.bytes_processed(),
                    source: e,
                })
            }
        }
    }
    hasher.finalize()
}

/// Streaming BLAKE2b digest of a file at the maximum output length, unkeyed.
///
/// The file handle is released on every exit path, error paths included.
pub fn hash_file<P: AsRef<Path>>(path: P) -> Result<Digest, HashError> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|source| HashError::SourceOpen {
        path: path.to_path_buf(),
        source,
    })?;
    hash_reader(
        HashVariant::Blake2b,
        HashVariant::Blake2b.max_output_bytes(),
        &mut file,
    )
}
