//! Property descriptors.

use serde::{Deserialize, Serialize};

use crate::names;

/// Type names that never refer to a class or interface.
///
/// Covers language builtins and the scalar column types of common mapping
/// layers. Compared case-insensitively.
pub const SCALAR_TYPES: &[&str] = &[
    "array",
    "bigint",
    "binary",
    "blob",
    "bool",
    "boolean",
    "callable",
    "decimal",
    "double",
    "float",
    "guid",
    "int",
    "integer",
    "iterable",
    "json",
    "json_array",
    "mixed",
    "null",
    "object",
    "resource",
    "simple_array",
    "smallint",
    "string",
    "text",
    "void",
];

/// Which accessor methods a property asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct AccessorFlags {
    pub get: bool,
    pub set: bool,
    pub add: bool,
    pub remove: bool,
}

impl AccessorFlags {
    /// Every accessor requested.
    pub fn all() -> Self {
        Self {
            get: true,
            set: true,
            add: true,
            remove: true,
        }
    }

    /// Returns true if at least one accessor was requested.
    pub fn any(&self) -> bool {
        self.get || self.set || self.add || self.remove
    }
}

impl TryFrom<Vec<String>> for AccessorFlags {
    type Error = String;

    fn try_from(kinds: Vec<String>) -> Result<Self, Self::Error> {
        let mut flags = AccessorFlags::default();
        for kind in &kinds {
            match kind.to_lowercase().as_str() {
                "get" | "is" => flags.get = true,
                "set" => flags.set = true,
                "add" => flags.add = true,
                "remove" => flags.remove = true,
                "all" => flags = AccessorFlags::all(),
                other => {
                    return Err(format!(
                        "unknown accessor '{}', expected get, set, add, remove or all",
                        other
                    ));
                }
            }
        }
        Ok(flags)
    }
}

impl From<AccessorFlags> for Vec<String> {
    fn from(flags: AccessorFlags) -> Self {
        [
            (flags.get, "get"),
            (flags.set, "set"),
            (flags.add, "add"),
            (flags.remove, "remove"),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, kind)| kind.to_string())
        .collect()
    }
}

/// Decoded metadata for one property.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PropertyDescriptor {
    /// Property identifier as declared
    pub name: String,
    /// Declared type, possibly a short name needing resolution.
    /// For collections this is the element type.
    #[serde(default, rename = "type")]
    pub type_name: Option<String>,
    /// Narrowed form used in method signatures, defaults to the declared type
    #[serde(default)]
    pub type_hint: Option<String>,
    /// Multi-valued association
    #[serde(default)]
    pub collection: bool,
    /// Whether null is a permitted value
    #[serde(default)]
    pub nullable: bool,
    /// Default value expression, e.g. `Status::ACTIVE`
    #[serde(default)]
    pub default: Option<String>,
    /// Name of the encryption key this property is stored with
    #[serde(default)]
    pub encryption_alias: Option<String>,
    /// Accessors requested for this property
    #[serde(default)]
    pub generate: AccessorFlags,
}

impl PropertyDescriptor {
    /// The declared type, if one was set and is non-empty.
    pub fn declared_type(&self) -> Option<&str> {
        self.type_name.as_deref().filter(|t| !t.is_empty())
    }

    /// The type hint, falling back to the declared type.
    pub fn type_hint(&self) -> Option<&str> {
        self.type_hint
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| self.declared_type())
    }

    /// Returns true for boolean properties, which get `is` accessors.
    pub fn is_boolean(&self) -> bool {
        matches!(self.declared_type(), Some("boolean" | "bool"))
    }

    /// Returns true if the type refers to a class or interface.
    pub fn is_complex_type(&self) -> bool {
        self.type_hint().is_some_and(|hint| {
            !SCALAR_TYPES
                .iter()
                .any(|scalar| scalar.eq_ignore_ascii_case(hint))
        })
    }

    /// The type named by a `Type::CONST` default value, if any.
    ///
    /// Absolute names and the `self`, `static` and `parent` keywords need no
    /// import and yield `None`.
    pub fn default_type(&self) -> Option<&str> {
        let (ty, _) = self.default.as_deref()?.split_once("::")?;
        let ty = ty.trim();

        let is_name = !ty.is_empty()
            && ty
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == names::NAMESPACE_SEPARATOR);
        let is_keyword = ["self", "static", "parent"]
            .iter()
            .any(|kw| kw.eq_ignore_ascii_case(ty));

        (is_name && !is_keyword && !names::is_absolute(ty)).then_some(ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(type_name: &str) -> PropertyDescriptor {
        PropertyDescriptor {
            name: "value".into(),
            type_name: Some(type_name.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_flags_from_list() {
        let flags = AccessorFlags::try_from(vec!["get".to_string(), "Set".to_string()]).unwrap();
        assert!(flags.get && flags.set);
        assert!(!flags.add && !flags.remove);

        assert_eq!(
            AccessorFlags::try_from(vec!["all".to_string()]).unwrap(),
            AccessorFlags::all()
        );
        assert!(AccessorFlags::try_from(vec!["fetch".to_string()]).is_err());
        assert!(!AccessorFlags::default().any());
    }

    #[test]
    fn test_type_hint_falls_back_to_type() {
        let mut prop = property("Address");
        assert_eq!(prop.type_hint(), Some("Address"));

        prop.type_hint = Some("AddressInterface".into());
        assert_eq!(prop.type_hint(), Some("AddressInterface"));
    }

    #[test]
    fn test_empty_type_is_unset() {
        assert_eq!(property("").declared_type(), None);
        assert_eq!(PropertyDescriptor::default().type_hint(), None);
    }

    #[test]
    fn test_is_complex_type() {
        assert!(property("Address").is_complex_type());
        assert!(property("\\DateTime").is_complex_type());
        assert!(!property("string").is_complex_type());
        assert!(!property("Integer").is_complex_type());
        assert!(!PropertyDescriptor::default().is_complex_type());
    }

    #[test]
    fn test_is_boolean() {
        assert!(property("boolean").is_boolean());
        assert!(property("bool").is_boolean());
        assert!(!property("string").is_boolean());
    }

    #[test]
    fn test_default_type() {
        let mut prop = property("string");
        assert_eq!(prop.default_type(), None);

        prop.default = Some("Status::ACTIVE".into());
        assert_eq!(prop.default_type(), Some("Status"));

        prop.default = Some("Enum\\Status::ACTIVE".into());
        assert_eq!(prop.default_type(), Some("Enum\\Status"));

        prop.default = Some("self::ACTIVE".into());
        assert_eq!(prop.default_type(), None);

        prop.default = Some("\\App\\Status::ACTIVE".into());
        assert_eq!(prop.default_type(), None);

        prop.default = Some("'a::b'".into());
        assert_eq!(prop.default_type(), None);
    }
}
