//! Generator settings shared by the engine and renderers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Encryption alias -> key material reference (usually a key file path).
pub type EncryptionAliases = BTreeMap<String, String>;

/// Naming of generated artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Sub-namespace (and directory) the generated artifacts live in
    pub generated_namespace: String,
    /// Appended to the class name to name its generated unit
    pub name_suffix: String,
    /// Class name of the per-directory key registry
    pub key_registry_class: String,
    /// Read-only wrapper returned by collection getters
    pub collection_wrapper: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            generated_namespace: "Generated".to_string(),
            name_suffix: "MethodsTrait".to_string(),
            key_registry_class: "KeyRegistry".to_string(),
            collection_wrapper: "Hostnet\\Component\\AccessorGenerator\\Collection\\ImmutableCollection"
                .to_string(),
        }
    }
}
