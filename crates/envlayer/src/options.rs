//! Load options for the two-source pipeline.
//!
//! Responsibilities:
//! - Hold path overrides, the environment-key name, the parser override,
//!   and the text encoding for one load invocation.
//! - Provide builder-style `with_*` methods with conventional defaults.
//!
//! Does NOT handle:
//! - Path resolution against the current working directory (see
//!   `loader/pipeline.rs`, which applies the conventions for unset fields).
//!
//! Invariants:
//! - Options carry no persistent identity; construct fresh per invocation.
//! - The parser override is a pure function from decoded text to a mapping.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use encoding_rs::Encoding;

use crate::constants::DEFAULT_ENV_KEY;
use crate::parser::EnvMap;

/// Pluggable parsing strategy: decoded source text to a key/value mapping.
pub type ParseFn = Arc<dyn Fn(&str) -> EnvMap + Send + Sync>;

/// Options controlling one load invocation.
#[derive(Clone)]
pub struct LoadOptions {
    pub(crate) core_path: Option<PathBuf>,
    pub(crate) defaults_paths: BTreeMap<String, PathBuf>,
    pub(crate) process_env_key: String,
    pub(crate) parse: Option<ParseFn>,
    pub(crate) encoding: &'static Encoding,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadOptions {
    pub fn new() -> Self {
        Self {
            core_path: None,
            defaults_paths: BTreeMap::new(),
            process_env_key: DEFAULT_ENV_KEY.to_string(),
            parse: None,
            encoding: encoding_rs::UTF_8,
        }
    }

    /// Override the core file path (defaults to `.env` in the current
    /// working directory).
    pub fn with_core_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.core_path = Some(path.into());
        self
    }

    /// Map an environment name to an explicit defaults-file path. Unmapped
    /// names fall back to `.env.<name>.defaults` in the current working
    /// directory.
    pub fn with_defaults_path(mut self, environment: &str, path: impl Into<PathBuf>) -> Self {
        self.defaults_paths.insert(environment.to_string(), path.into());
        self
    }

    /// Override the key used to read the environment name from the store.
    pub fn with_process_env_key(mut self, key: &str) -> Self {
        self.process_env_key = key.to_string();
        self
    }

    /// Replace the built-in parser with a custom parsing function.
    pub fn with_parser(mut self, parse: ParseFn) -> Self {
        self.parse = Some(parse);
        self
    }

    /// Set the text encoding used to decode source file bytes.
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }
}

impl std::fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadOptions")
            .field("core_path", &self.core_path)
            .field("defaults_paths", &self.defaults_paths)
            .field("process_env_key", &self.process_env_key)
            .field("parse", &self.parse.as_ref().map(|_| "custom").unwrap_or("builtin"))
            .field("encoding", &self.encoding.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = LoadOptions::new();
        assert_eq!(options.core_path, None);
        assert!(options.defaults_paths.is_empty());
        assert_eq!(options.process_env_key, DEFAULT_ENV_KEY);
        assert!(options.parse.is_none());
        assert_eq!(options.encoding, encoding_rs::UTF_8);
    }

    #[test]
    fn test_debug_does_not_panic_with_custom_parser() {
        let options = LoadOptions::new().with_parser(Arc::new(|_| EnvMap::new()));
        let rendered = format!("{options:?}");
        assert!(rendered.contains("custom"));
    }
}
