//! PHP renderer for accgen.
//!
//! Turns the [`RunOutput`](accgen_codegen::RunOutput) of a pipeline run into
//! PHP source: one accessor trait per generated unit and one key registry
//! class per directory that uses encryption aliases.

mod generator;
mod methods;
mod php;

pub mod files;

pub use generator::{GenerateResult, Generator, PreviewFile};
pub use php::{GENERATED_HEADER, string_literal};
