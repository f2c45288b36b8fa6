//! Error types for the load pipeline.
//!
//! Responsibilities:
//! - Define error variants for every terminal failure of a load invocation.
//! - Render validation failures with the complete issue list, not just the
//!   first entry.
//!
//! Does NOT handle:
//! - I/O read failures: those collapse to "absent" at the reader boundary
//!   (see `reader.rs`) and never surface as a distinct error kind.
//!
//! Invariants:
//! - All variants are terminal for the call; nothing is retried internally.
//! - Messages name the offending condition (key, candidate paths, issues)
//!   without echoing raw file contents.

use std::path::PathBuf;
use thiserror::Error;

use crate::schema::Issue;

/// Errors that can occur while loading environment configuration.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The environment discriminator is unset or empty; no files were read.
    #[error("environment name is missing: set the {key} variable before loading")]
    MissingEnvironmentName { key: String },

    /// Neither the core file nor the defaults file could be read.
    #[error("no source file found: neither {core_path} nor {defaults_path} is readable")]
    NoSourceFile {
        core_path: PathBuf,
        defaults_path: PathBuf,
    },

    /// The schema rejected the merged mapping; nothing was applied.
    #[error("merged configuration failed validation: {}", format_issues(.issues))]
    Validation { issues: Vec<Issue> },
}

impl LoadError {
    /// The full issue list for a validation failure, empty otherwise.
    pub fn issues(&self) -> &[Issue] {
        match self {
            LoadError::Validation { issues } => issues,
            _ => &[],
        }
    }
}

fn format_issues(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(|issue| issue.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
