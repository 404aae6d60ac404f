use std::{collections::HashSet, path::Path, str::FromStr};

use accgen_ir::{ClassDescriptor, EncryptionAliases, ImportEntry, Settings};
use serde::Deserialize;

use crate::{Error, Result, validate::ParseContext};

/// Default manifest file name
pub const MANIFEST_FILE: &str = "accessors.toml";

/// Root manifest for accessors.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Naming of generated artifacts
    #[serde(default)]
    pub settings: Settings,

    /// Encryption alias -> key material path
    #[serde(default)]
    pub encryption: EncryptionAliases,

    /// Classes to generate accessors for, in processing order
    #[serde(default, rename = "class")]
    pub classes: Vec<ClassDescriptor>,
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, MANIFEST_FILE)
    }
}

impl Manifest {
    /// Parse an accessors.toml file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse an accessors.toml from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let manifest: Self =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        manifest.validate(content, filename)?;
        Ok(manifest)
    }

    /// Find a class by its fully qualified name
    pub fn class(&self, fqcn: &str) -> Option<&ClassDescriptor> {
        let fqcn = fqcn.trim_start_matches(accgen_ir::NAMESPACE_SEPARATOR);
        self.classes.iter().find(|class| class.fqcn() == fqcn)
    }

    /// Validate the manifest after parsing
    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        let ctx = ParseContext::new(src, filename);

        self.validate_settings(&ctx)?;

        let mut seen = HashSet::new();
        for class in &self.classes {
            ctx.validate_namespace(&class.namespace, "namespace")?;
            ctx.validate_class_name(&class.name, "class name")?;

            let fqcn = class.fqcn();
            if !seen.insert(fqcn.clone()) {
                return Err(Error::duplicate_class(
                    fqcn,
                    src,
                    filename,
                    ctx.find_span(&class.name),
                ));
            }

            if class.file.as_os_str().is_empty() {
                return Err(ctx.validation_error(
                    format!("class '{}' has an empty file path", fqcn),
                    &class.name,
                ));
            }

            validate_class(&ctx.push(&fqcn), class, &fqcn)?;
        }

        Ok(())
    }

    fn validate_settings(&self, ctx: &ParseContext<'_>) -> Result<()> {
        let settings = &self.settings;

        if settings.generated_namespace.is_empty() {
            return Err(ctx.validation_error(
                "generated_namespace cannot be empty",
                "generated_namespace",
            ));
        }
        ctx.validate_namespace(&settings.generated_namespace, "generated namespace")?;
        ctx.validate_name(&settings.key_registry_class, "key registry class")?;
        ctx.validate_namespace(&settings.collection_wrapper, "collection wrapper")?;

        if settings.name_suffix.is_empty() {
            return Err(ctx.validation_error(
                "name_suffix cannot be empty, the trait would clash with its class",
                "name_suffix",
            ));
        }
        ctx.validate_name(&settings.name_suffix, "name suffix")?;

        Ok(())
    }
}

fn validate_class(ctx: &ParseContext<'_>, class: &ClassDescriptor, fqcn: &str) -> Result<()> {
    for import in &class.imports {
        ctx.validate_namespace(import.fqcn(), "import")?;
        if let ImportEntry::Aliased { alias, .. } = import {
            ctx.validate_name(alias, "import alias")?;
        }
    }

    let mut seen = HashSet::new();
    for property in &class.properties {
        ctx.validate_name(&property.name, "property name")?;

        if !seen.insert(property.name.as_str()) {
            return Err(Error::duplicate_property(
                fqcn,
                &property.name,
                ctx.src(),
                ctx.filename(),
                ctx.find_span(&property.name),
            ));
        }

        if let Some(alias) = &property.encryption_alias {
            if alias.trim().is_empty() {
                return Err(ctx.validation_error(
                    format!("property '{}' has an empty encryption_alias", property.name),
                    &property.name,
                ));
            }
        }
    }

    Ok(())
}
