//! File-reading capability for configuration sources.
//!
//! Responsibilities:
//! - Define the `SourceReader` boundary the loader reads raw bytes through.
//! - Provide `FsReader`, the filesystem implementation.
//!
//! Does NOT handle:
//! - Decoding or parsing the bytes (see `parser.rs`).
//! - Path resolution (see `loader/pipeline.rs`).
//!
//! Invariants / Assumptions:
//! - "Absent" is distinct from "empty": a readable empty file yields
//!   `Some(vec![])`, a missing file yields `None`.
//! - Every read failure collapses to `None`, including permission errors.
//!   This is a preserved compatibility trade-off, a known weak spot: real
//!   failures are indistinguishable from a missing file. The swallowed
//!   error is logged at debug level so it stays observable.

use std::path::Path;

/// Scoped read of one configuration source.
pub trait SourceReader {
    /// Read the file at `path`, or `None` if it is absent or unreadable.
    fn read(&self, path: &Path) -> Option<Vec<u8>>;
}

/// Filesystem-backed reader.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl SourceReader for FsReader {
    fn read(&self, path: &Path) -> Option<Vec<u8>> {
        match std::fs::read(path) {
            Ok(bytes) => Some(bytes),
            Err(error) => {
                tracing::debug!(path = %path.display(), %error, "source treated as absent");
                None
            }
        }
    }
}
