//! Accessor decision and import resolution engine for accgen.
//!
//! Given class and property descriptors, this crate decides which accessor
//! methods a generated unit must contain, computes the import table those
//! methods need and aggregates encryption key aliases per directory. It does
//! no file I/O and renders no source text; see `accgen-codegen-php` for that.
//!
//! # Module Organization
//!
//! - [`resolve`] - Short name to fully qualified name resolution
//! - [`imports`] - Import table augmentation and deduplication
//! - [`decide`] - Per-property accessor decisions
//! - [`unit`] - Per-class generated unit assembly
//! - [`registry`] - Per-directory key registry aggregation
//! - [`pipeline`] - Run orchestration and diagnostics
//! - [`builder`] - Indentation-aware source builder for renderers

pub mod builder;
pub mod decide;
mod error;
pub mod imports;
pub mod pipeline;
pub mod registry;
pub mod resolve;
pub mod unit;

pub use builder::CodeBuilder;
pub use decide::{AccessorKind, AccessorOperation, decide};
pub use error::{Error, Result};
pub use imports::ImportTable;
pub use pipeline::{Diagnostic, Pipeline, RunOutput, Severity};
pub use registry::{KeyReference, KeyRegistry, KeyRegistryArtifact};
pub use resolve::resolve_type;
pub use unit::{GeneratedUnit, MethodRequest, assemble};
