//! Parsing and validation of `accessors.toml`.
//!
//! The manifest lists the classes to generate accessors for, their
//! properties, the generator settings and the encryption alias table.
//! Errors carry the manifest source so they render with miette labels.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod manifest;
mod validate;

pub use error::{Error, Result};
pub use file::AccessorsToml;
pub use manifest::{MANIFEST_FILE, Manifest};
