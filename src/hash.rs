//! BLAKE3 hashing utilities for bundle integrity

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use blake3::Hasher;

use crate::error::{SaucerError, Result};

/// Hash prefix for BLAKE3 hashes
pub const HASH_PREFIX: &str = "blake3:";

/// Calculate BLAKE3 hash of an in-memory buffer
pub fn hash_bytes(bytes: &[u8]) -> String {
    format!("{}{}", HASH_PREFIX, blake3::hash(bytes).to_hex())
}

/// Calculate BLAKE3 hash of a file
pub fn hash_file(path: &Path) -> Result<String> {
    let read_failed = |e: std::io::Error| SaucerError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    };

    let file = File::open(path).map_err(read_failed)?;

    let mut reader = BufReader::new(file);
    let mut hasher = Hasher::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader.read(&mut buffer).map_err(read_failed)?;

        if bytes_read == 0 {
            break;
        }

        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{}{}", HASH_PREFIX, hasher.finalize().to_hex()))
}

/// Calculate a single BLAKE3 hash over a set of `(path, contents)` pairs
///
/// Callers pass pairs sorted by path. Every path and body is prefixed with its length
/// as a little-endian `u64`, so no choice of bytes inside a body can shift where one
/// entry ends and the next begins.
pub fn hash_entries<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a [u8])>,
{
    let mut hasher = Hasher::new();

    for (path, contents) in entries {
        hasher.update(&(path.len() as u64).to_le_bytes());
        hasher.update(path.as_bytes());
        hasher.update(&(contents.len() as u64).to_le_bytes());
        hasher.update(contents);
    }

    format!("{}{}", HASH_PREFIX, hasher.finalize().to_hex())
}

/// Verify a hash matches the expected value
pub fn verify_hash(expected: &str, actual: &str) -> bool {
    let strip = |h: &str| h.strip_prefix(HASH_PREFIX).unwrap_or(h).to_ascii_lowercase();
    strip(expected) == strip(actual)
}
