//! Pipeline orchestrator.

use accgen_ir::{ClassDescriptor, EncryptionAliases, Settings, qualify};
use serde::Serialize;

use super::{Diagnostic, RunContext};
use crate::{Error, GeneratedUnit, KeyRegistryArtifact, assemble};

/// Everything one run produced.
#[derive(Debug, Clone, Serialize)]
pub struct RunOutput {
    /// Settings the run was made with, needed again by renderers.
    pub settings: Settings,
    /// One unit per class that requested at least one accessor.
    pub units: Vec<GeneratedUnit>,
    /// One key registry per directory with at least one encryption alias.
    pub registries: Vec<KeyRegistryArtifact>,
    /// Errors and warnings, in the order they were found.
    pub diagnostics: Vec<Diagnostic>,
    /// The class failures behind the error diagnostics.
    #[serde(skip)]
    pub failures: Vec<Error>,
}

impl RunOutput {
    /// Check if any class failed.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Iterate over the warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }
}

/// The generation pipeline.
///
/// The pipeline itself is stateless between runs: every call to
/// [`Pipeline::run`] starts from an empty key registry.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    settings: Settings,
    aliases: EncryptionAliases,
}

impl Pipeline {
    /// Create a new pipeline.
    pub fn new(settings: Settings, aliases: EncryptionAliases) -> Self {
        Self { settings, aliases }
    }

    /// Get the settings the pipeline was created with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run the pipeline over `classes`, in order.
    ///
    /// A class failing with [`Error::TypeUnknown`] produces no unit and adds
    /// no key aliases; the remaining classes are processed normally.
    /// Aliases missing from the alias table are reported as warnings.
    pub fn run(&self, classes: &[ClassDescriptor]) -> RunOutput {
        let mut ctx = RunContext::new(&self.settings, &self.aliases);

        for class in classes {
            self.run_class(class, &mut ctx);
        }

        let registries = ctx.registry.finish();
        for artifact in &registries {
            for alias in artifact.unresolved() {
                tracing::warn!(
                    directory = %artifact.directory.display(),
                    alias,
                    "encryption alias has no key path"
                );
                ctx.add_warning(
                    artifact.directory.display().to_string(),
                    format!(
                        "encryption alias '{}' has no key path; the generated key registry will throw when it is looked up",
                        alias
                    ),
                );
            }
        }

        tracing::debug!(
            classes = classes.len(),
            units = ctx.units.len(),
            registries = registries.len(),
            failures = ctx.failures.len(),
            "run finished"
        );

        RunOutput {
            settings: self.settings.clone(),
            units: ctx.units,
            registries,
            diagnostics: ctx.diagnostics,
            failures: ctx.failures,
        }
    }

    fn run_class(&self, class: &ClassDescriptor, ctx: &mut RunContext<'_>) {
        tracing::debug!(
            class = %class.fqcn(),
            properties = class.properties.len(),
            "processing class"
        );

        match assemble(class, ctx.settings, &mut ctx.registry, ctx.aliases) {
            Ok(Some(unit)) => ctx.units.push(unit),
            Ok(None) => {}
            Err(err) => {
                let location = format!(
                    "{}::${}",
                    qualify(&class.namespace, &class.name),
                    err.property()
                );
                tracing::debug!(%location, error = %err, "class skipped");
                ctx.add_failure(location, err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use accgen_ir::{AccessorFlags, PropertyDescriptor};

    use super::*;
    use crate::Severity;

    fn property(name: &str, type_name: Option<&str>) -> PropertyDescriptor {
        PropertyDescriptor {
            name: name.into(),
            type_name: type_name.map(String::from),
            generate: AccessorFlags::all(),
            ..Default::default()
        }
    }

    fn class(name: &str, file: &str, properties: Vec<PropertyDescriptor>) -> ClassDescriptor {
        ClassDescriptor {
            namespace: "App\\Entity".into(),
            name: name.into(),
            file: PathBuf::from(file),
            imports: vec![],
            properties,
        }
    }

    fn pipeline() -> Pipeline {
        Pipeline::new(
            Settings::default(),
            EncryptionAliases::from([("a".to_string(), "/keys/a".to_string())]),
        )
    }

    #[test]
    fn test_failure_does_not_stop_siblings() {
        let classes = vec![
            class("Broken", "src/Entity/Broken.php", vec![property("x", None)]),
            class("User", "src/Entity/User.php", vec![property("name", Some("string"))]),
        ];

        let output = pipeline().run(&classes);

        assert_eq!(output.units.len(), 1);
        assert_eq!(output.units[0].name, "UserMethodsTrait");
        assert!(output.has_errors());
        assert_eq!(output.failures.len(), 1);
        assert_eq!(output.diagnostics[0].severity, Severity::Error);
        assert_eq!(
            output.diagnostics[0].location.as_deref(),
            Some("App\\Entity\\Broken::$x")
        );
    }

    #[test]
    fn test_unresolved_alias_is_warning() {
        let classes = vec![class(
            "User",
            "src/Entity/User.php",
            vec![
                PropertyDescriptor {
                    encryption_alias: Some("b".into()),
                    ..property("secret", Some("string"))
                },
                PropertyDescriptor {
                    encryption_alias: Some("a".into()),
                    ..property("token", Some("string"))
                },
            ],
        )];

        let output = pipeline().run(&classes);

        assert!(!output.has_errors());
        assert_eq!(output.registries.len(), 1);
        assert_eq!(output.registries[0].directory, Path::new("src/Entity"));
        let keys: Vec<_> = output.registries[0].keys.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["a", "b"]);

        let warnings: Vec<_> = output.warnings().collect();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("'b'"));
    }

    #[test]
    fn test_runs_do_not_share_registry_state() {
        let pipeline = pipeline();
        let with_alias = vec![class(
            "User",
            "src/Entity/User.php",
            vec![PropertyDescriptor {
                encryption_alias: Some("a".into()),
                ..property("secret", Some("string"))
            }],
        )];
        let without_alias = vec![class(
            "Tag",
            "src/Entity/Tag.php",
            vec![property("label", Some("string"))],
        )];

        assert_eq!(pipeline.run(&with_alias).registries.len(), 1);
        assert!(pipeline.run(&without_alias).registries.is_empty());
    }

    #[test]
    fn test_class_without_requests_is_skipped() {
        let classes = vec![class(
            "User",
            "src/Entity/User.php",
            vec![PropertyDescriptor {
                generate: AccessorFlags::default(),
                ..property("name", None)
            }],
        )];

        let output = pipeline().run(&classes);

        assert!(output.units.is_empty());
        assert!(output.diagnostics.is_empty());
    }
}
