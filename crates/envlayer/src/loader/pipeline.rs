//! Resolve, read, merge, validate, apply.
//!
//! Responsibilities:
//! - Resolve the core and defaults file paths from options and the
//!   environment discriminator.
//! - Read both sources, parse present ones, merge core-over-defaults.
//! - Validate the merged mapping against the caller's schema and apply the
//!   validated values to the environment store.
//!
//! Does NOT handle:
//! - Grammar details of the `.env` format (see `parser.rs`).
//! - Collapsing read failures to "absent" (see `reader.rs`).
//!
//! Invariants / Assumptions:
//! - The discriminator is read before any file I/O; an unset discriminator
//!   fails without touching the filesystem.
//! - Application is all-or-nothing: a validation failure leaves the store
//!   completely unchanged.
//! - A key present in the core file wins over the defaults file even when
//!   its parsed value is the empty string.

use std::path::PathBuf;

use serde::Serialize;

use crate::constants::{DEFAULT_CORE_FILE, DEFAULT_DEFAULTS_PREFIX, DEFAULT_DEFAULTS_SUFFIX};
use crate::env::{EnvStore, ProcessEnv};
use crate::options::LoadOptions;
use crate::parser::{self, EnvMap};
use crate::reader::{FsReader, SourceReader};
use crate::schema::Schema;

use super::error::LoadError;

/// Summary of a successful load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadReport {
    /// The environment name the defaults file was selected for.
    pub environment: String,
    /// Whether the core file was present and read.
    pub core_read: bool,
    /// Whether the defaults file was present and read.
    pub defaults_read: bool,
    /// Number of validated keys written to the store.
    pub applied: usize,
}

/// Loader binding options to a source reader.
pub struct EnvLoader<R: SourceReader = FsReader> {
    options: LoadOptions,
    reader: R,
}

impl EnvLoader<FsReader> {
    /// Loader over the real filesystem.
    pub fn new(options: LoadOptions) -> Self {
        Self {
            options,
            reader: FsReader,
        }
    }
}

impl Default for EnvLoader<FsReader> {
    fn default() -> Self {
        Self::new(LoadOptions::new())
    }
}

impl<R: SourceReader> EnvLoader<R> {
    /// Loader over a caller-supplied reader.
    pub fn with_reader(options: LoadOptions, reader: R) -> Self {
        Self { options, reader }
    }

    /// Run one load: resolve paths, read and parse both sources, merge,
    /// validate, and on success overlay every validated key onto `env`.
    pub fn load<S: Schema + ?Sized>(
        &self,
        schema: &S,
        env: &mut dyn EnvStore,
    ) -> Result<LoadReport, LoadError> {
        let key = &self.options.process_env_key;
        let environment = env
            .get(key)
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| LoadError::MissingEnvironmentName { key: key.clone() })?;

        let core_path = self
            .options
            .core_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CORE_FILE));
        let defaults_path = self
            .options
            .defaults_paths
            .get(&environment)
            .cloned()
            .unwrap_or_else(|| {
                PathBuf::from(format!(
                    "{DEFAULT_DEFAULTS_PREFIX}{environment}{DEFAULT_DEFAULTS_SUFFIX}"
                ))
            });

        tracing::debug!(
            %environment,
            core = %core_path.display(),
            defaults = %defaults_path.display(),
            "loading environment configuration"
        );

        let core_raw = self.reader.read(&core_path);
        let defaults_raw = self.reader.read(&defaults_path);
        if core_raw.is_none() && defaults_raw.is_none() {
            return Err(LoadError::NoSourceFile {
                core_path,
                defaults_path,
            });
        }
        let core_read = core_raw.is_some();
        let defaults_read = defaults_raw.is_some();

        let core = self.parse_source(core_raw);
        let defaults = self.parse_source(defaults_raw);

        // Core wins key-by-key; keys present only in defaults survive.
        let mut merged = defaults;
        merged.extend(core);
        tracing::debug!(keys = merged.len(), "merged core and defaults sources");

        let validated = schema
            .attempt(&merged)
            .map_err(|issues| LoadError::Validation { issues })?;

        for (name, value) in &validated {
            env.set(name, value);
        }
        tracing::info!(
            %environment,
            applied = validated.len(),
            "environment configuration applied"
        );

        Ok(LoadReport {
            environment,
            core_read,
            defaults_read,
            applied: validated.len(),
        })
    }

    /// Decode and parse one source; absent sources parse to an empty map.
    fn parse_source(&self, raw: Option<Vec<u8>>) -> EnvMap {
        let Some(bytes) = raw else {
            return EnvMap::new();
        };
        let (text, _, _) = self.options.encoding.decode(&bytes);
        match &self.options.parse {
            Some(parse) => parse(&text),
            None => parser::parse_str(&text),
        }
    }
}

/// Load environment configuration into the process environment.
///
/// Resolves the core file (`.env`) and the environment-specific defaults
/// file (`.env.<name>.defaults`) against the current working directory
/// unless overridden in `options`, merges them core-over-defaults,
/// validates with `schema`, and applies the result via [`ProcessEnv`].
pub fn load_env<S: Schema + ?Sized>(
    schema: &S,
    options: LoadOptions,
) -> Result<LoadReport, LoadError> {
    EnvLoader::new(options).load(schema, &mut ProcessEnv)
}
