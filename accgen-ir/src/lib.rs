//! Descriptor types for the accgen accessor generator.
//!
//! These types are the hand-off point between whatever discovers classes
//! (the manifest loader, a reflection layer) and the decision engine in
//! `accgen-codegen`.
//!
//! # Architecture
//!
//! ```text
//! accessors.toml → accgen-manifest (parsing) → accgen-ir (descriptors) → codegen
//! ```
//!
//! The descriptor types are:
//! - Already decoded (no annotation syntax left to interpret)
//! - Immutable for the duration of one class's processing
//! - Self-contained (no external dependencies beyond serde)

mod class;
mod names;
mod property;
mod settings;

pub use class::{ClassDescriptor, ImportEntry};
pub use names::{NAMESPACE_SEPARATOR, first_segment, is_absolute, qualify, trailing_segment};
pub use property::{AccessorFlags, PropertyDescriptor, SCALAR_TYPES};
pub use settings::{EncryptionAliases, Settings};
