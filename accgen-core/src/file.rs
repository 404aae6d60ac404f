use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, leaving it untouched if the content is the same
    fn write(&self, base: &Path) -> Result<WriteResult> {
        OutputFile::new(self.path(base), self.render()).write()
    }
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was created or its content changed
    Written,
    /// File already had exactly this content
    Unchanged,
}

/// A rendered file ready to be persisted
#[derive(Debug, Clone)]
pub struct OutputFile {
    path: PathBuf,
    content: String,
}

impl OutputFile {
    /// Create a new output file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file, creating parent directories as needed.
    ///
    /// Files whose current content is identical are not rewritten so that
    /// modification times only move when generated code actually changes.
    pub fn write(&self) -> Result<WriteResult> {
        let existing = std::fs::read_to_string(&self.path).ok();
        if existing.as_deref() == Some(self.content.as_str()) {
            return Ok(WriteResult::Unchanged);
        }

        write_file(&self.path, &self.content)?;
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Fixed;

    impl GeneratedFile for Fixed {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("Generated").join("Fixed.php")
        }

        fn render(&self) -> String {
            "<?php\n".to_string()
        }
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_output_file_written_then_unchanged() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        let file = OutputFile::new(&path, "content");
        assert_eq!(file.write().unwrap(), WriteResult::Written);
        assert_eq!(file.write().unwrap(), WriteResult::Unchanged);
    }

    #[test]
    fn test_output_file_overwrites_changed_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");
        fs::write(&path, "original").unwrap();

        let result = OutputFile::new(&path, "updated").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_generated_file_write() {
        let temp = TempDir::new().unwrap();

        let result = Fixed.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        let written = temp.path().join("Generated").join("Fixed.php");
        assert_eq!(fs::read_to_string(written).unwrap(), "<?php\n");
    }
}
