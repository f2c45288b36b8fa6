//! Tests for the load pipeline.
//!
//! Responsibilities:
//! - Test path resolution, source precedence, and error conditions.
//! - Test that validation failures leave the store untouched.
//!
//! Does NOT handle:
//! - Grammar-level parsing (tested in `parser.rs`).
//! - End-to-end loading against the real process environment (see
//!   `tests/integration_test.rs`).
//!
//! Invariants:
//! - These tests run against `MemoryEnv` and explicit temp-dir paths, so
//!   they never touch process-global state and need no serialization.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::reader::SourceReader;


/// Reader over a fixed in-memory set of files.
pub struct StubReader {
    files: BTreeMap<PathBuf, Vec<u8>>,
}

impl StubReader {
    pub fn new() -> Self {
        Self {
            files: BTreeMap::new(),
        }
    }

    pub fn with_file(mut self, path: &str, contents: &[u8]) -> Self {
        self.files.insert(PathBuf::from(path), contents.to_vec());
        self
    }
}

impl SourceReader for StubReader {
    fn read(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.get(path).cloned()
    }
}

/// Reader that fails the test if any read is attempted.
pub struct NoIoReader;

impl SourceReader for NoIoReader {
    fn read(&self, path: &Path) -> Option<Vec<u8>> {
        panic!("unexpected file read of {}", path.display());
    }
}
