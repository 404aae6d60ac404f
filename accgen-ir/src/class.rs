//! Class descriptors and their import statements.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{NAMESPACE_SEPARATOR, PropertyDescriptor, names};

/// One `use` statement of a class file.
///
/// Fully qualified names are stored without the leading namespace separator,
/// the way they are written in a `use` statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum ImportEntry {
    /// Imported under its own trailing segment (`use App\Entity\User;`)
    Plain(String),
    /// Imported under an explicit alias (`use Doctrine\ORM\Mapping as ORM;`)
    Aliased { alias: String, fqcn: String },
}

impl ImportEntry {
    /// Create a plain import.
    pub fn plain(fqcn: impl AsRef<str>) -> Self {
        ImportEntry::Plain(normalize(fqcn.as_ref()))
    }

    /// Create an aliased import.
    pub fn aliased(alias: impl Into<String>, fqcn: impl AsRef<str>) -> Self {
        ImportEntry::Aliased {
            alias: alias.into(),
            fqcn: normalize(fqcn.as_ref()),
        }
    }

    /// The fully qualified name being imported.
    pub fn fqcn(&self) -> &str {
        match self {
            ImportEntry::Plain(fqcn) => fqcn,
            ImportEntry::Aliased { fqcn, .. } => fqcn,
        }
    }

    /// The explicit alias, if any.
    pub fn alias(&self) -> Option<&str> {
        match self {
            ImportEntry::Plain(_) => None,
            ImportEntry::Aliased { alias, .. } => Some(alias),
        }
    }

    /// The short name this import makes visible.
    pub fn binding(&self) -> &str {
        match self {
            ImportEntry::Plain(fqcn) => names::trailing_segment(fqcn),
            ImportEntry::Aliased { alias, .. } => alias,
        }
    }
}

fn normalize(fqcn: &str) -> String {
    fqcn.trim().trim_start_matches(NAMESPACE_SEPARATOR).to_string()
}

impl fmt::Display for ImportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportEntry::Plain(fqcn) => write!(f, "{}", fqcn),
            ImportEntry::Aliased { alias, fqcn } => write!(f, "{} as {}", fqcn, alias),
        }
    }
}

impl FromStr for ImportEntry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let entry = match s.split_once(" as ") {
            Some((fqcn, alias)) => ImportEntry::aliased(alias.trim(), fqcn),
            None => ImportEntry::plain(s),
        };

        if entry.fqcn().is_empty() || entry.alias().is_some_and(str::is_empty) {
            return Err(format!(
                "invalid import '{}', expected 'Vendor\\Name' or 'Vendor\\Name as Alias'",
                s
            ));
        }

        Ok(entry)
    }
}

impl TryFrom<String> for ImportEntry {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ImportEntry> for String {
    fn from(entry: ImportEntry) -> Self {
        entry.to_string()
    }
}

/// Identity and contents of one class to generate accessors for.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClassDescriptor {
    /// Namespace of the class, empty for the global namespace
    #[serde(default)]
    pub namespace: String,
    /// Short class name
    pub name: String,
    /// Source file the class is declared in
    pub file: PathBuf,
    /// `use` statements of the source file, in declaration order
    #[serde(default)]
    pub imports: Vec<ImportEntry>,
    /// Properties in declaration order
    #[serde(default, rename = "property")]
    pub properties: Vec<PropertyDescriptor>,
}

impl ClassDescriptor {
    /// Fully qualified name of the class.
    pub fn fqcn(&self) -> String {
        names::qualify(&self.namespace, &self.name)
    }

    /// Directory holding the class source file.
    pub fn directory(&self) -> &Path {
        self.file.parent().unwrap_or_else(|| Path::new(""))
    }
}
