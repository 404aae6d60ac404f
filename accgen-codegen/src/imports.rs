//! Import table augmentation and deduplication.

use std::collections::HashMap;

use accgen_ir::{ImportEntry, PropertyDescriptor, first_segment, is_absolute, qualify};
use indexmap::IndexMap;

use crate::resolve_type;

/// The `use` statements of one generated unit.
///
/// Entries keep insertion order. Two indexes make lookups cheap: aliases map
/// to the position of their entry, and trailing segments of plain entries map
/// to the first plain entry that binds them. Re-importing an existing alias
/// replaces its entry in place.
///
/// # Example
///
/// ```
/// use accgen_codegen::ImportTable;
/// use accgen_ir::ImportEntry;
///
/// let mut imports = ImportTable::new();
/// imports.push(ImportEntry::plain("App\\Entity\\User"));
/// imports.push(ImportEntry::aliased("ORM", "Doctrine\\ORM\\Mapping"));
///
/// assert_eq!(imports.lookup_plain("User"), Some("App\\Entity\\User"));
/// assert_eq!(imports.lookup_alias("ORM"), Some("Doctrine\\ORM\\Mapping"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportTable {
    entries: Vec<ImportEntry>,
    aliases: IndexMap<String, usize>,
    plain: HashMap<String, usize>,
}

impl ImportTable {
    /// Create a new empty import table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry.
    pub fn push(&mut self, entry: ImportEntry) {
        match &entry {
            ImportEntry::Aliased { alias, .. } => {
                if let Some(&position) = self.aliases.get(alias) {
                    self.entries[position] = entry;
                    return;
                }
                self.aliases.insert(alias.clone(), self.entries.len());
            }
            ImportEntry::Plain(_) => {
                self.plain
                    .entry(entry.binding().to_string())
                    .or_insert(self.entries.len());
            }
        }
        self.entries.push(entry);
    }

    /// Fully qualified name imported under `alias`.
    pub fn lookup_alias(&self, alias: &str) -> Option<&str> {
        self.aliases
            .get(alias)
            .map(|&position| self.entries[position].fqcn())
    }

    /// Fully qualified name of the first plain import ending in `segment`.
    pub fn lookup_plain(&self, segment: &str) -> Option<&str> {
        self.plain
            .get(segment)
            .map(|&position| self.entries[position].fqcn())
    }

    /// Returns true if a short name is already taken by any import.
    pub fn is_bound(&self, name: &str) -> bool {
        self.aliases.contains_key(name) || self.plain.contains_key(name)
    }

    /// Add the imports a property's type and default value need.
    ///
    /// Complex types are imported through the type hint and, if it differs,
    /// the declared type. A `Type::CONST` default contributes `Type`. Absolute
    /// names need no import.
    pub fn augment(&mut self, property: &PropertyDescriptor, namespace: &str) {
        if property.is_complex_type() {
            let hint = property.type_hint();
            let declared = property.declared_type().filter(|ty| Some(*ty) != hint);

            for candidate in hint.into_iter().chain(declared) {
                if !is_absolute(candidate) {
                    self.import_relative(candidate, namespace);
                }
            }
        }

        if let Some(ty) = property.default_type() {
            self.import_relative(ty, namespace);
        }
    }

    /// Import a name relative to `namespace`.
    ///
    /// `Sub\Type` imports the child namespace once as `namespace\Sub as Sub`
    /// unless `Sub` is already bound; a plain `namespace\Sub` import is turned
    /// into that alias. `Type` is imported as `namespace\Type` unless it
    /// already resolves. A short name is never bound twice.
    fn import_relative(&mut self, name: &str, namespace: &str) {
        match first_segment(name) {
            Some(first) => {
                let fqcn = qualify(namespace, first);
                if self.lookup_alias(first).is_none()
                    && self.lookup_plain(first) == Some(fqcn.as_str())
                {
                    self.promote_to_alias(first, &fqcn);
                } else if !self.is_bound(first) {
                    self.push(ImportEntry::aliased(first, fqcn));
                }
            }
            None => {
                if resolve_type(name, self).is_none() {
                    self.push(ImportEntry::plain(qualify(namespace, name)));
                }
            }
        }
    }

    /// Rewrite every plain import of `fqcn` as `fqcn as alias`.
    fn promote_to_alias(&mut self, alias: &str, fqcn: &str) {
        for entry in &mut self.entries {
            if matches!(entry, ImportEntry::Plain(name) if name.as_str() == fqcn) {
                *entry = ImportEntry::aliased(alias, fqcn);
            }
        }
        self.reindex();
    }

    fn reindex(&mut self) {
        self.aliases.clear();
        self.plain.clear();
        for (position, entry) in self.entries.iter().enumerate() {
            match entry {
                ImportEntry::Aliased { alias, .. } => {
                    self.aliases.entry(alias.clone()).or_insert(position);
                }
                ImportEntry::Plain(_) => {
                    self.plain
                        .entry(entry.binding().to_string())
                        .or_insert(position);
                }
            }
        }
    }

    /// Entries sorted by their rendered form with exact duplicates removed.
    ///
    /// Plain entries sort by `Fqcn`, aliased ones by `Fqcn as Alias`. Only an
    /// entry identical in alias and name to its predecessor is dropped; the
    /// same class imported under two aliases keeps both.
    pub fn unique_sorted(&self) -> Vec<ImportEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by_cached_key(ImportEntry::to_string);
        sorted.dedup();
        sorted
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ImportEntry> {
        self.entries.iter()
    }

    /// Get the number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<ImportEntry> for ImportTable {
    fn from_iter<I: IntoIterator<Item = ImportEntry>>(iter: I) -> Self {
        let mut table = ImportTable::new();
        for entry in iter {
            table.push(entry);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NS: &str = "App\\Entity";

    fn property(type_name: &str) -> PropertyDescriptor {
        PropertyDescriptor {
            name: "value".into(),
            type_name: Some(type_name.into()),
            ..Default::default()
        }
    }

    fn rendered(table: &ImportTable) -> Vec<String> {
        table.unique_sorted().iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn test_same_namespace_type_imported_once() {
        let mut imports = ImportTable::new();
        imports.augment(&property("Address"), NS);
        imports.augment(&property("Address"), NS);

        assert_eq!(rendered(&imports), vec!["App\\Entity\\Address"]);
    }

    #[test]
    fn test_sub_namespace_aliased_once() {
        let mut imports = ImportTable::new();
        imports.augment(&property("Billing\\Invoice"), NS);
        imports.augment(&property("Billing\\Payment"), NS);

        assert_eq!(imports.len(), 1);
        assert_eq!(rendered(&imports), vec!["App\\Entity\\Billing as Billing"]);
    }

    #[test]
    fn test_absolute_and_scalar_types_skipped() {
        let mut imports = ImportTable::new();
        imports.augment(&property("\\DateTime"), NS);
        imports.augment(&property("string"), NS);

        assert!(imports.is_empty());
    }

    #[test]
    fn test_existing_import_not_duplicated() {
        let mut imports = ImportTable::from_iter([ImportEntry::plain("Vendor\\Money")]);
        imports.augment(&property("Money"), NS);

        assert_eq!(rendered(&imports), vec!["Vendor\\Money"]);
    }

    #[test]
    fn test_existing_alias_wins_over_plain_import() {
        let mut imports = ImportTable::from_iter([ImportEntry::aliased("Money", "Vendor\\Amount")]);
        imports.augment(&property("Money"), NS);

        assert_eq!(rendered(&imports), vec!["Vendor\\Amount as Money"]);
    }

    #[test]
    fn test_bound_first_segment_not_realiased() {
        let mut imports = ImportTable::from_iter([ImportEntry::aliased("Ext", "Vendor\\Ext")]);
        imports.augment(&property("Ext\\Thing"), NS);

        assert_eq!(rendered(&imports), vec!["Vendor\\Ext as Ext"]);
    }

    #[test]
    fn test_type_hint_and_declared_type_both_imported() {
        let mut imports = ImportTable::new();
        let prop = PropertyDescriptor {
            type_hint: Some("AddressInterface".into()),
            ..property("Address")
        };
        imports.augment(&prop, NS);

        assert_eq!(
            rendered(&imports),
            vec!["App\\Entity\\Address", "App\\Entity\\AddressInterface"]
        );
    }

    #[test]
    fn test_default_constant_type_imported() {
        let mut imports = ImportTable::new();
        let prop = PropertyDescriptor {
            default: Some("Status::ACTIVE".into()),
            ..property("string")
        };
        imports.augment(&prop, NS);

        assert_eq!(rendered(&imports), vec!["App\\Entity\\Status"]);
    }

    #[test]
    fn test_global_namespace() {
        let mut imports = ImportTable::new();
        imports.augment(&property("Address"), "");

        assert_eq!(rendered(&imports), vec!["Address"]);
    }

    #[test]
    fn test_unique_sorted_drops_exact_duplicates() {
        let imports = ImportTable::from_iter([
            ImportEntry::plain("B\\Second"),
            ImportEntry::plain("A\\First"),
            ImportEntry::plain("B\\Second"),
        ]);

        assert_eq!(rendered(&imports), vec!["A\\First", "B\\Second"]);
    }

    #[test]
    fn test_unique_sorted_keeps_distinct_aliases() {
        let imports = ImportTable::from_iter([
            ImportEntry::aliased("Left", "App\\Side"),
            ImportEntry::aliased("Right", "App\\Side"),
            ImportEntry::plain("App\\Side"),
        ]);

        assert_eq!(
            rendered(&imports),
            vec!["App\\Side", "App\\Side as Left", "App\\Side as Right"]
        );
    }

    #[test]
    fn test_unique_sorted_is_order_independent() {
        let forward = ImportTable::from_iter([
            ImportEntry::plain("App\\B"),
            ImportEntry::aliased("X", "App\\A"),
            ImportEntry::plain("App\\C"),
        ]);
        let backward = ImportTable::from_iter([
            ImportEntry::plain("App\\C"),
            ImportEntry::aliased("X", "App\\A"),
            ImportEntry::plain("App\\B"),
        ]);

        assert_eq!(forward.unique_sorted(), backward.unique_sorted());
    }

    #[test]
    fn test_augment_is_order_independent() {
        let money = property("Money");
        let currency = property("Money\\Currency");
        let constant = PropertyDescriptor {
            default: Some("Money::ZERO".into()),
            ..property("string")
        };

        let mut forward = ImportTable::new();
        forward.augment(&money, NS);
        forward.augment(&currency, NS);
        forward.augment(&constant, NS);

        let mut backward = ImportTable::new();
        backward.augment(&constant, NS);
        backward.augment(&currency, NS);
        backward.augment(&money, NS);

        assert_eq!(rendered(&forward), vec!["App\\Entity\\Money as Money"]);
        assert_eq!(forward.unique_sorted(), backward.unique_sorted());
    }

    #[test]
    fn test_foreign_plain_import_not_promoted() {
        let mut imports = ImportTable::from_iter([ImportEntry::plain("Vendor\\Money")]);
        imports.augment(&property("Money\\Currency"), NS);

        assert_eq!(rendered(&imports), vec!["Vendor\\Money"]);
    }

    #[test]
    fn test_alias_reimport_replaces_in_place() {
        let mut imports = ImportTable::new();
        imports.push(ImportEntry::aliased("Sub", "Old\\Sub"));
        imports.push(ImportEntry::aliased("Sub", "New\\Sub"));

        assert_eq!(imports.len(), 1);
        assert_eq!(imports.lookup_alias("Sub"), Some("New\\Sub"));
    }
}
