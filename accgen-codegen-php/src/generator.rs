use std::path::{Path, PathBuf};

use accgen_codegen::RunOutput;
use accgen_core::{GeneratedFile, WriteResult};
use eyre::Result;

use crate::files::{KeyRegistryClass, MethodsTrait};

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Path relative to the output base directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Result of writing generated files
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were created or changed
    pub written: Vec<PathBuf>,
    /// Files that already had the generated content
    pub unchanged: Vec<PathBuf>,
}

/// PHP generator: one trait per generated unit, one key registry class per
/// directory using encryption aliases.
pub struct Generator<'a> {
    output: &'a RunOutput,
}

impl<'a> Generator<'a> {
    pub fn new(output: &'a RunOutput) -> Self {
        Self { output }
    }

    /// Preview generated files without writing to disk
    pub fn preview(&self) -> Vec<PreviewFile> {
        self.files()
            .iter()
            .map(|file| PreviewFile {
                path: file.path(Path::new("")).display().to_string(),
                content: file.render(),
            })
            .collect()
    }

    /// Generate all files relative to `base`
    pub fn generate(&self, base: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        for file in self.files() {
            let path = file.path(base);
            match file.write(base)? {
                WriteResult::Written => result.written.push(path),
                WriteResult::Unchanged => result.unchanged.push(path),
            }
        }

        Ok(result)
    }

    fn files(&self) -> Vec<Box<dyn GeneratedFile + 'a>> {
        let output: &'a RunOutput = self.output;
        let settings = &output.settings;
        let mut files: Vec<Box<dyn GeneratedFile + 'a>> = Vec::new();

        for unit in &output.units {
            files.push(Box::new(MethodsTrait::new(unit, settings)));
        }
        for artifact in &output.registries {
            files.push(Box::new(KeyRegistryClass::new(artifact, settings)));
        }

        files
    }
}
