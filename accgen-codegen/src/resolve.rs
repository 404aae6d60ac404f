//! Short name to fully qualified name resolution.

use accgen_ir::{NAMESPACE_SEPARATOR, is_absolute};

use crate::ImportTable;

/// Resolve a type name against an import table.
///
/// Returns the fully qualified name with a leading namespace separator, or
/// `None` when the name is not a resolvable complex type. `None` means "no
/// import needed", never an error.
///
/// Resolution order:
/// 1. names starting at the namespace root are returned unchanged
/// 2. an alias equal to `name`
/// 3. the first plain import whose trailing segment equals `name`
///
/// The class's own name resolves through the plain import the assembler
/// seeds every table with.
pub fn resolve_type(name: &str, imports: &ImportTable) -> Option<String> {
    if is_absolute(name) {
        return Some(name.to_string());
    }

    imports
        .lookup_alias(name)
        .or_else(|| imports.lookup_plain(name))
        .map(|fqcn| format!("{}{}", NAMESPACE_SEPARATOR, fqcn))
}
