//! Centralized constants for the envlayer workspace.
//!
//! This module contains default values used across the crate to avoid
//! magic string duplication and improve maintainability.

// =============================================================================
// Environment Discriminator
// =============================================================================

/// Default process-environment key naming the active deployment environment
/// (e.g. "development", "production").
pub const DEFAULT_ENV_KEY: &str = "APP_ENV";

// =============================================================================
// Source File Conventions
// =============================================================================

/// Default core file name, resolved against the current working directory.
pub const DEFAULT_CORE_FILE: &str = ".env";

/// Prefix of the conventional defaults-file name: `.env.<environment>.defaults`.
pub const DEFAULT_DEFAULTS_PREFIX: &str = ".env.";

/// Suffix of the conventional defaults-file name: `.env.<environment>.defaults`.
pub const DEFAULT_DEFAULTS_SUFFIX: &str = ".defaults";
