//! Two-source environment configuration loading.
//!
//! This crate loads a primary `.env` file and an environment-specific
//! defaults file (`.env.<name>.defaults`), merges them with core-over-defaults
//! precedence, validates the merged mapping against a caller-supplied
//! [`Schema`], and applies the validated values to process environment state.
//!
//! The process environment is shared mutable state; concurrent callers must
//! serialize [`load_env`] invocations themselves.

pub mod constants;
mod env;
mod loader;
mod options;
pub mod parser;
mod reader;
mod schema;

pub use env::{EnvStore, MemoryEnv, ProcessEnv};
pub use loader::{EnvLoader, LoadError, LoadReport, load_env};
pub use options::{LoadOptions, ParseFn};
pub use parser::{EnvMap, parse_bytes, parse_str};
pub use reader::{FsReader, SourceReader};
pub use schema::{Issue, RuleSchema, Schema, SchemaFn, schema_fn};
