//! Per-class generated unit assembly.

use std::path::PathBuf;

use accgen_ir::{
    ClassDescriptor, EncryptionAliases, ImportEntry, PropertyDescriptor, Settings, qualify,
};
use serde::Serialize;

use crate::{
    AccessorKind, AccessorOperation, ImportTable, KeyRegistry, Result, decide, resolve_type,
};

/// One method to render, with everything the renderer needs to know.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodRequest {
    pub operation: AccessorOperation,
    pub property: PropertyDescriptor,
    /// Fully qualified type hint, `None` for scalars and unresolvable names
    pub fully_qualified_type: Option<String>,
}

/// The accessors generated for one class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedUnit {
    /// Namespace of the generated unit (`App\Entity\Generated`)
    pub namespace: String,
    /// Name of the generated unit (`UserMethodsTrait`)
    pub name: String,
    /// Fully qualified name of the class the unit belongs to
    pub class: String,
    /// Directory of the class source file
    pub directory: PathBuf,
    /// Sorted, deduplicated `use` statements
    pub imports: Vec<ImportEntry>,
    /// Methods in property declaration order
    pub methods: Vec<MethodRequest>,
}

/// Assemble the generated unit of a class.
///
/// Returns `Ok(None)` when no property asked for an accessor. Encryption
/// aliases are recorded in `registry` only if the whole class succeeds, so a
/// class failing with [`crate::Error::TypeUnknown`] leaves no trace.
pub fn assemble(
    class: &ClassDescriptor,
    settings: &Settings,
    registry: &mut KeyRegistry,
    aliases: &EncryptionAliases,
) -> Result<Option<GeneratedUnit>> {
    let mut imports: ImportTable = class.imports.iter().cloned().collect();
    // The generated unit lives in a sub-namespace, so the class itself needs importing.
    imports.push(ImportEntry::plain(class.fqcn()));

    let mut methods = Vec::new();
    let mut staged_aliases = Vec::new();
    let mut wraps_collection = false;

    for property in &class.properties {
        let operations = decide(property, class)?;
        if operations.is_empty() {
            continue;
        }

        imports.augment(property, &class.namespace);
        let fully_qualified_type = property
            .type_hint()
            .and_then(|hint| resolve_type(hint, &imports));

        if let Some(alias) = &property.encryption_alias {
            staged_aliases.push(alias.as_str());
        }

        if property.collection && operations.iter().any(|op| op.kind == AccessorKind::Get) {
            wraps_collection = true;
        }

        methods.extend(operations.into_iter().map(|operation| MethodRequest {
            operation,
            property: property.clone(),
            fully_qualified_type: fully_qualified_type.clone(),
        }));
    }

    if wraps_collection {
        imports.push(ImportEntry::plain(&settings.collection_wrapper));
    }

    for alias in staged_aliases {
        registry.record(class.directory(), &class.namespace, alias, aliases);
    }

    if methods.is_empty() {
        tracing::debug!(class = %class.fqcn(), "no accessors requested");
        return Ok(None);
    }

    let unit = GeneratedUnit {
        namespace: qualify(&class.namespace, &settings.generated_namespace),
        name: format!("{}{}", class.name, settings.name_suffix),
        class: class.fqcn(),
        directory: class.directory().to_path_buf(),
        imports: imports.unique_sorted(),
        methods,
    };

    tracing::debug!(
        unit = %qualify(&unit.namespace, &unit.name),
        methods = unit.methods.len(),
        imports = unit.imports.len(),
        "assembled generated unit"
    );

    Ok(Some(unit))
}
