//! Loader for two-source environment configuration.
//!
//! Responsibilities:
//! - Drive the resolve → read → parse → merge → validate → apply pipeline.
//! - Surface typed errors for every terminal failure.
//!
//! Does NOT handle:
//! - `.env` grammar (see `parser.rs`).
//! - Schema semantics (see `schema.rs`, the caller supplies the schema).
//!
//! Invariants / Assumptions:
//! - Core file values take precedence over defaults file values.
//! - At least one of the two source files must be readable.
//! - Validation failure applies nothing to the environment store.

mod error;
mod pipeline;

#[cfg(test)]
mod tests;

pub use error::LoadError;
pub use pipeline::{EnvLoader, LoadReport, load_env};
