//! Run orchestration for accessor generation.
//!
//! A [`Pipeline`] walks the class descriptors in order, assembles one
//! [`GeneratedUnit`](crate::GeneratedUnit) per class and finishes the key
//! registry once every class has been seen. Failures are recorded as
//! [`Diagnostic`]s and never stop sibling classes from being processed.
//!
//! # Example
//!
//! ```
//! use accgen_codegen::Pipeline;
//! use accgen_ir::{EncryptionAliases, Settings};
//!
//! let pipeline = Pipeline::new(Settings::default(), EncryptionAliases::new());
//! let output = pipeline.run(&[]);
//!
//! assert!(output.units.is_empty());
//! assert!(!output.has_errors());
//! ```

mod context;
mod diagnostic;
mod runner;

pub use context::RunContext;
pub use diagnostic::{Diagnostic, Severity};
pub use runner::{Pipeline, RunOutput};
