use std::path::{Path, PathBuf};

use accgen_codegen::{CodeBuilder, KeyReference, KeyRegistryArtifact};
use accgen_core::GeneratedFile;
use accgen_ir::{Settings, qualify};

use crate::php::{GENERATED_HEADER, generated_dir, string_literal};

/// Per-directory lookup table from encryption alias to key path
/// (`Generated/KeyRegistry.php`).
///
/// Aliases without a key path are rendered as `null`; looking one up throws
/// a `\LogicException` at runtime.
pub struct KeyRegistryClass<'a> {
    artifact: &'a KeyRegistryArtifact,
    settings: &'a Settings,
}

impl<'a> KeyRegistryClass<'a> {
    pub fn new(artifact: &'a KeyRegistryArtifact, settings: &'a Settings) -> Self {
        Self { artifact, settings }
    }
}

impl GeneratedFile for KeyRegistryClass<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        generated_dir(base, &self.artifact.directory, &self.settings.generated_namespace)
            .join(format!("{}.php", self.settings.key_registry_class))
    }

    fn render(&self) -> String {
        let namespace = qualify(&self.artifact.namespace, &self.settings.generated_namespace);

        let mut b = CodeBuilder::php();
        b.push_line("<?php")
            .push_line(GENERATED_HEADER)
            .push_blank()
            .push_line(&format!("namespace {};", namespace))
            .push_blank();

        b.push_block(&format!("class {}", self.settings.key_registry_class), |b| {
            b.push_line("private static $keys = [").push_indent();
            for (alias, reference) in &self.artifact.keys {
                let value = match reference {
                    KeyReference::Resolved(path) => string_literal(path),
                    KeyReference::Unresolved => "null".to_string(),
                };
                b.push_line(&format!("{} => {},", string_literal(alias), value));
            }
            b.push_dedent().push_line("];").push_blank();

            b.push_docblock(&[
                "Returns the key path registered for an encryption alias.",
                "",
                "@param string $alias",
                "@return string",
                "@throws \\InvalidArgumentException",
                "@throws \\LogicException",
            ]);
            b.push_block("public static function getKeyPath(string $alias)", |b| {
                b.push_line("if (!array_key_exists($alias, self::$keys)) {")
                    .push_indent()
                    .push_line(
                        "throw new \\InvalidArgumentException(sprintf('Unknown encryption alias \"%s\".', $alias));",
                    )
                    .push_dedent()
                    .push_line("}")
                    .push_blank()
                    .push_line("if (self::$keys[$alias] === null) {")
                    .push_indent()
                    .push_line(
                        "throw new \\LogicException(sprintf('No key path configured for encryption alias \"%s\".', $alias));",
                    )
                    .push_dedent()
                    .push_line("}")
                    .push_blank()
                    .push_line("return self::$keys[$alias];");
            });
        });

        b.build()
    }
}
