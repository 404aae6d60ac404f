//! State carried through one generation run.

use accgen_ir::{EncryptionAliases, Settings};

use super::diagnostic::{Diagnostic, Severity};
use crate::{Error, GeneratedUnit, KeyRegistry};

/// Everything a run accumulates while walking the classes.
///
/// A context is created fresh for every run, so the key registry and the
/// diagnostics of one run never reach the next.
#[derive(Debug)]
pub struct RunContext<'a> {
    /// Naming of generated artifacts.
    pub settings: &'a Settings,
    /// Alias -> key material table.
    pub aliases: &'a EncryptionAliases,
    /// Key aliases collected so far.
    pub registry: KeyRegistry,
    /// Units assembled so far, in class order.
    pub units: Vec<GeneratedUnit>,
    /// Classes that failed, in class order.
    pub failures: Vec<Error>,
    /// Diagnostics collected so far.
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> RunContext<'a> {
    /// Create a new run context.
    pub fn new(settings: &'a Settings, aliases: &'a EncryptionAliases) -> Self {
        Self {
            settings,
            aliases,
            registry: KeyRegistry::new(),
            units: Vec::new(),
            failures: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Record a class failure as an error diagnostic.
    pub fn add_failure(&mut self, location: impl Into<String>, error: Error) {
        self.diagnostics
            .push(Diagnostic::error(error.to_string()).at(location));
        self.failures.push(error);
    }

    /// Add a warning diagnostic.
    pub fn add_warning(&mut self, location: impl Into<String>, message: impl Into<String>) {
        self.diagnostics
            .push(Diagnostic::warning(message).at(location));
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d.severity, Severity::Error))
    }
}
