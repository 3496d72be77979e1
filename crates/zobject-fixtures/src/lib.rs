//! ZObject test fixtures on disk.
//!
//! A fixture file holds named test objects:
//!
//! ```yaml
//! # optional comment line, kept across rewrites
//! test_objects:
//!   success:
//!     - name: a string
//!       object: {Z1K1: Z6, Z6K1: hello}
//!   failure:
//!     - name: missing type
//!       object: {Z6K1: hello}
//! ```
//!
//! This crate loads such files (YAML or JSON), runs one of the
//! [`Operation`]s from `zobject-core` or [`mutators`] over them, and either
//! prints the result or writes it back.

pub mod config;
pub mod document;
mod error;
pub mod mutators;
pub mod operations;

pub use config::ZObjectConfig;
pub use document::{FixtureDocument, Format, Output};
pub use error::FixtureError;
pub use operations::{Context, Operation, Scope, apply, run, trim_trailing_newlines};
