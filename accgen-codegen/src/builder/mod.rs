//! Source building blocks for renderers.
//!
//! - [`CodeBuilder`] - Fluent API for building indented source text

mod code_builder;

pub use code_builder::CodeBuilder;
