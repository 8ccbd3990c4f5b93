use std::fs;
use std::io::{self, Read};

use tempfile::tempdir;

use b2kit_corelib::{hash_default, hash_file, hash_reader, HashError, HashVariant};

/// Yields `good` bytes in small reads, then fails.
struct FailingReader {
    good: Vec<u8>,
    pos: usize,
    read_len: usize,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos < self.good.len() {
            let end = (self.pos + self.read_len).min(self.good.len());
            let n = (end - self.pos).min(buf.len());
            buf[..n].copy_from_slice(&self.good[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        } else {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "source went away"))
        }
    }
}

#[test]
fn file_digest_matches_one_shot() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("payload.bin");
    // Larger than one chunk and not chunk-aligned.
    let data: Vec<u8> = (0u32..70_001).map(|i| (i % 253) as u8).collect();
    fs::write(&path, &data).unwrap();

    let streamed = hash_file(&path).unwrap();
    let oneshot = hash_default(HashVariant::Blake2b, &data).unwrap();
    assert_eq!(streamed, oneshot);
    assert_eq!(streamed.len(), 64);
}

#[test]
fn empty_file_matches_empty_message_vector() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.bin");
    fs::write(&path, b"").unwrap();

    let digest = hash_file(&path).unwrap();
    assert_eq!(digest, hash_default(HashVariant::Blake2b, b"").unwrap());
}

#[test]
fn missing_file_is_source_open() {
    let dir = tempdir().unwrap();
    let err = hash_file(dir.path().join("no-such-file")).unwrap_err();
    match err {
        HashError::SourceOpen { path, .. } => {
            assert!(path.ends_with("no-such-file"));
        }
        other => panic!("expected SourceOpen, got {other:?}"),
    }
}

#[test]
fn read_error_after_good_chunks_is_source_read() {
    let mut reader = FailingReader {
        good: vec![0x5a; 3000],
        pos: 0,
        read_len: 512,
    };
    let err = hash_reader(HashVariant::Blake2b, 64, &mut reader).unwrap_err();
    match err {
        HashError::SourceRead {
            bytes_processed,
            source,
        } => {
            assert_eq!(bytes_processed, 3000);
            assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
        }
        other => panic!("expected SourceRead, got {other:?}"),
    }
}

#[test]
fn reader_digest_is_chunking_independent() {
    let data: Vec<u8> = (0u32..5000).map(|i| (i * 31 % 256) as u8).collect();
    let oneshot = hash_default(HashVariant::Blake2s, &data).unwrap();

    for read_len in [1usize, 3, 100, 1024, 5000] {
        struct SlowReader<'a> {
            data: &'a [u8],
            pos: usize,
            read_len: usize,
        }
        impl Read for SlowReader<'_> {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                let end = (self.pos + self.read_len).min(self.data.len());
                let n = (end - self.pos).min(buf.len());
                buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
                self.pos += n;
                Ok(n)
            }
        }
        let mut reader = SlowReader {
            data: &data,
            pos: 0,
            read_len,
        };
        let streamed = hash_reader(HashVariant::Blake2s, 32, &mut reader).unwrap();
        assert_eq!(streamed, oneshot, "read_len={read_len}");
    }
}

#[test]
fn interrupted_reads_are_retried() {
    struct Interrupting {
        data: Vec<u8>,
        pos: usize,
        interrupted: bool,
    }
    impl Read for Interrupting {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::new(io::ErrorKind::Interrupted, "signal"));
            }
            let n = (self.data.len() - self.pos).min(buf.len());
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }
    let mut reader = Interrupting {
        data: b"interrupt me".to_vec(),
        pos: 0,
        interrupted: false,
    };
    let streamed = hash_reader(HashVariant::Blake2b, 64, &mut reader).unwrap();
    assert_eq!(
        streamed,
        hash_default(HashVariant::Blake2b, b"interrupt me").unwrap()
    );
}
