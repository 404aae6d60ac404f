//! Per-property accessor decisions.

use std::fmt;

use accgen_core::{camelize, classify, has_is_prefix, singularize};
use accgen_ir::{ClassDescriptor, PropertyDescriptor};
use serde::Serialize;

use crate::{Error, Result};

/// Kind of accessor method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessorKind {
    /// `getX()`, or `isX()` for booleans
    Get,
    /// `setX($value)`, scalar and reference properties only
    Set,
    /// `addX($element)`, collections only
    Add,
    /// `removeX($element)`, collections only
    Remove,
}

impl AccessorKind {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessorKind::Get => "get",
            AccessorKind::Set => "set",
            AccessorKind::Add => "add",
            AccessorKind::Remove => "remove",
        }
    }
}

impl fmt::Display for AccessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One accessor method decided for a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessorOperation {
    pub kind: AccessorKind,
    /// Public method name
    pub method: String,
}

impl AccessorOperation {
    fn new(kind: AccessorKind, method: String) -> Self {
        Self { kind, method }
    }
}

/// Decide which accessors to generate for a property, in render order.
///
/// An empty list means the property asked for nothing. A property that asked
/// for something but has no type fails with [`Error::TypeUnknown`].
///
/// Collections only ever get add/remove next to their getter; all other
/// properties only ever get a setter.
pub fn decide(
    property: &PropertyDescriptor,
    class: &ClassDescriptor,
) -> Result<Vec<AccessorOperation>> {
    let flags = property.generate;
    if !flags.any() {
        return Ok(Vec::new());
    }

    if property.declared_type().is_none() {
        return Err(Error::type_unknown(
            &property.name,
            &class.name,
            &class.namespace,
        ));
    }

    let mut operations = Vec::new();

    if flags.get {
        operations.push(AccessorOperation::new(AccessorKind::Get, getter_name(property)));
    }

    if property.collection {
        let element = classify(&singularize(&property.name));
        if flags.add {
            operations.push(AccessorOperation::new(
                AccessorKind::Add,
                format!("add{}", element),
            ));
        }
        if flags.remove {
            operations.push(AccessorOperation::new(
                AccessorKind::Remove,
                format!("remove{}", element),
            ));
        }
    } else if flags.set {
        operations.push(AccessorOperation::new(
            AccessorKind::Set,
            format!("set{}", classify(&property.name)),
        ));
    }

    Ok(operations)
}

/// Getter name: `isX` for booleans (reusing an existing `is` prefix), `getX`
/// for everything else.
fn getter_name(property: &PropertyDescriptor) -> String {
    if property.is_boolean() {
        if has_is_prefix(&property.name) {
            camelize(&property.name)
        } else {
            format!("is{}", classify(&property.name))
        }
    } else {
        format!("get{}", classify(&property.name))
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use accgen_ir::AccessorFlags;

    use super::*;

    fn class() -> ClassDescriptor {
        ClassDescriptor {
            namespace: "App\\Entity".into(),
            name: "User".into(),
            file: PathBuf::from("src/Entity/User.php"),
            imports: vec![],
            properties: vec![],
        }
    }

    fn property(name: &str, type_name: &str) -> PropertyDescriptor {
        PropertyDescriptor {
            name: name.into(),
            type_name: Some(type_name.into()),
            generate: AccessorFlags::all(),
            ..Default::default()
        }
    }

    fn methods(property: &PropertyDescriptor) -> Vec<String> {
        decide(property, &class())
            .unwrap()
            .into_iter()
            .map(|op| op.method)
            .collect()
    }

    #[test]
    fn test_boolean_reuses_is_prefix() {
        assert_eq!(methods(&property("is_active", "boolean"))[0], "isActive");
    }

    #[test]
    fn test_boolean_gets_is_prefix() {
        assert_eq!(methods(&property("active", "boolean"))[0], "isActive");
        assert_eq!(methods(&property("issued", "boolean"))[0], "isIssued");
    }

    #[test]
    fn test_non_boolean_getter() {
        assert_eq!(methods(&property("full_name", "string"))[0], "getFullName");
        assert_eq!(methods(&property("is_active", "string"))[0], "getIsActive");
    }

    #[test]
    fn test_scalar_gets_set_never_add_remove() {
        let ops = decide(&property("full_name", "string"), &class()).unwrap();
        let kinds: Vec<_> = ops.iter().map(|op| op.kind).collect();

        assert_eq!(kinds, vec![AccessorKind::Get, AccessorKind::Set]);
        assert_eq!(ops[1].method, "setFullName");
    }

    #[test]
    fn test_collection_gets_add_remove_never_set() {
        let prop = PropertyDescriptor {
            collection: true,
            ..property("addresses", "Address")
        };
        let ops = decide(&prop, &class()).unwrap();
        let kinds: Vec<_> = ops.iter().map(|op| op.kind).collect();

        assert_eq!(
            kinds,
            vec![AccessorKind::Get, AccessorKind::Add, AccessorKind::Remove]
        );
        assert_eq!(
            methods(&prop),
            vec!["getAddresses", "addAddress", "removeAddress"]
        );
    }

    #[test]
    fn test_only_requested_operations() {
        let prop = PropertyDescriptor {
            generate: AccessorFlags {
                get: true,
                ..Default::default()
            },
            ..property("name", "string")
        };
        assert_eq!(methods(&prop), vec!["getName"]);

        let prop = PropertyDescriptor {
            collection: true,
            generate: AccessorFlags {
                set: true,
                ..Default::default()
            },
            ..property("tags", "Tag")
        };
        assert!(methods(&prop).is_empty());
    }

    #[test]
    fn test_nothing_requested_skips_type_check() {
        let prop = PropertyDescriptor {
            name: "untyped".into(),
            ..Default::default()
        };
        assert_eq!(decide(&prop, &class()).unwrap(), vec![]);
    }

    #[test]
    fn test_missing_type_is_type_unknown() {
        let prop = PropertyDescriptor {
            name: "untyped".into(),
            generate: AccessorFlags::all(),
            ..Default::default()
        };
        let err = decide(&prop, &class()).unwrap_err();

        assert_eq!(err, Error::type_unknown("untyped", "User", "App\\Entity"));
    }
}
