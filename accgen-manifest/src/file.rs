use std::path::{Path, PathBuf};

use crate::{Manifest, Result};

/// An accessors.toml file with both raw content and parsed manifest.
///
/// Class file paths in the manifest are relative to the directory the
/// manifest lives in; [`AccessorsToml::base_dir`] returns that directory.
#[derive(Debug)]
pub struct AccessorsToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl AccessorsToml {
    /// Open and parse an accessors.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Directory class file paths are resolved against.
    pub fn base_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}
