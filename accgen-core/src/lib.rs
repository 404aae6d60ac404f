//! Core utilities and types for the accgen accessor generator.
//!
//! This crate provides the naming transforms that decide generated method
//! names and the file writing primitives shared by renderers.

mod file;
mod naming;

// File operations
pub use file::{GeneratedFile, OutputFile, WriteResult};
// Naming transforms
pub use naming::{camelize, classify, has_is_prefix, singularize};
