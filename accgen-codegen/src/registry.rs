//! Per-directory aggregation of encryption key aliases.

use std::path::{Path, PathBuf};

use accgen_ir::EncryptionAliases;
use indexmap::IndexMap;
use serde::Serialize;

/// Key material an encryption alias points to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyReference {
    /// Reference taken from the alias table
    Resolved(String),
    /// The alias table had no entry; fails when the registry is consumed
    Unresolved,
}

impl KeyReference {
    fn lookup(alias: &str, aliases: &EncryptionAliases) -> Self {
        match aliases.get(alias) {
            Some(reference) => KeyReference::Resolved(reference.clone()),
            None => KeyReference::Unresolved,
        }
    }

    /// The resolved reference, if any.
    pub fn as_resolved(&self) -> Option<&str> {
        match self {
            KeyReference::Resolved(reference) => Some(reference),
            KeyReference::Unresolved => None,
        }
    }
}

#[derive(Debug, Default)]
struct DirectoryKeys {
    namespace: String,
    keys: IndexMap<String, KeyReference>,
}

/// The finished key registry of one directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyRegistryArtifact {
    /// Directory shared by the classes that contributed aliases
    pub directory: PathBuf,
    /// Namespace of the last contributing class
    pub namespace: String,
    /// Alias -> key reference, sorted by alias
    pub keys: Vec<(String, KeyReference)>,
}

impl KeyRegistryArtifact {
    /// Aliases without a key reference.
    pub fn unresolved(&self) -> impl Iterator<Item = &str> {
        self.keys
            .iter()
            .filter(|(_, reference)| *reference == KeyReference::Unresolved)
            .map(|(alias, _)| alias.as_str())
    }
}

/// Encryption aliases collected during one run, grouped by directory.
///
/// Owned by a single run. [`KeyRegistry::finish`] hands out the artifacts
/// and leaves the registry empty, so nothing leaks into the next run.
///
/// # Example
///
/// ```
/// use std::path::Path;
///
/// use accgen_codegen::KeyRegistry;
/// use accgen_ir::EncryptionAliases;
///
/// let aliases = EncryptionAliases::from([("db".to_string(), "/keys/db".to_string())]);
/// let mut registry = KeyRegistry::new();
/// registry.record(Path::new("src/Entity"), "App\\Entity", "db", &aliases);
///
/// let artifacts = registry.finish();
/// assert_eq!(artifacts.len(), 1);
/// assert!(registry.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct KeyRegistry {
    directories: IndexMap<PathBuf, DirectoryKeys>,
}

impl KeyRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a class in `directory` uses `alias`.
    ///
    /// The directory's namespace and the alias's key reference are
    /// overwritten by later records. Aliases missing from the table are
    /// stored as [`KeyReference::Unresolved`].
    pub fn record(
        &mut self,
        directory: &Path,
        namespace: &str,
        alias: &str,
        aliases: &EncryptionAliases,
    ) {
        let entry = self.directories.entry(directory.to_path_buf()).or_default();
        entry.namespace = namespace.to_string();
        entry
            .keys
            .insert(alias.to_string(), KeyReference::lookup(alias, aliases));
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }

    /// Get the number of directories with at least one alias.
    pub fn len(&self) -> usize {
        self.directories.len()
    }

    /// Produce one artifact per directory and clear the registry.
    ///
    /// Directories (by their string form) and aliases are sorted lexically,
    /// so the result does not depend on the order classes were processed in.
    pub fn finish(&mut self) -> Vec<KeyRegistryArtifact> {
        let mut directories = std::mem::take(&mut self.directories);
        directories.sort_by(|a, _, b, _| a.to_string_lossy().cmp(&b.to_string_lossy()));

        directories
            .into_iter()
            .map(|(directory, mut entry)| {
                entry.keys.sort_keys();
                KeyRegistryArtifact {
                    directory,
                    namespace: entry.namespace,
                    keys: entry.keys.into_iter().collect(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aliases() -> EncryptionAliases {
        EncryptionAliases::from([("a".to_string(), "/path/a".to_string())])
    }

    #[test]
    fn test_same_directory_merged_and_sorted() {
        let mut registry = KeyRegistry::new();
        let dir = Path::new("src/Entity");
        registry.record(dir, "App\\Entity", "b", &aliases());
        registry.record(dir, "App\\Entity", "a", &aliases());

        let artifacts = registry.finish();

        assert_eq!(artifacts.len(), 1);
        assert_eq!(
            artifacts[0].keys,
            vec![
                ("a".to_string(), KeyReference::Resolved("/path/a".to_string())),
                ("b".to_string(), KeyReference::Unresolved),
            ]
        );
        assert_eq!(artifacts[0].unresolved().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn test_directories_kept_apart() {
        let mut registry = KeyRegistry::new();
        registry.record(Path::new("src/Payment"), "App\\Payment", "a", &aliases());
        registry.record(Path::new("src/Entity"), "App\\Entity", "a", &aliases());

        let artifacts = registry.finish();
        let dirs: Vec<_> = artifacts.iter().map(|a| a.directory.clone()).collect();

        assert_eq!(
            dirs,
            vec![PathBuf::from("src/Entity"), PathBuf::from("src/Payment")]
        );
        assert_eq!(artifacts[1].namespace, "App\\Payment");
    }

    #[test]
    fn test_directories_sorted_as_strings() {
        let mut registry = KeyRegistry::new();
        registry.record(Path::new("a/b"), "A\\B", "a", &aliases());
        registry.record(Path::new("a-b"), "AB", "a", &aliases());

        let artifacts = registry.finish();
        let dirs: Vec<_> = artifacts.iter().map(|a| a.directory.clone()).collect();

        assert_eq!(dirs, vec![PathBuf::from("a-b"), PathBuf::from("a/b")]);
    }

    #[test]
    fn test_record_overwrites_alias() {
        let mut registry = KeyRegistry::new();
        let dir = Path::new("src/Entity");
        registry.record(dir, "App\\Entity", "a", &EncryptionAliases::new());
        registry.record(dir, "App\\Entity", "a", &aliases());

        let artifacts = registry.finish();

        assert_eq!(artifacts[0].keys.len(), 1);
        assert_eq!(artifacts[0].keys[0].1.as_resolved(), Some("/path/a"));
    }

    #[test]
    fn test_finish_clears_state() {
        let mut registry = KeyRegistry::new();
        registry.record(Path::new("src"), "App", "a", &aliases());

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.finish().len(), 1);
        assert!(registry.is_empty());
        assert!(registry.finish().is_empty());
    }
}
