use std::path::{Path, PathBuf};

use accgen_codegen::{CodeBuilder, GeneratedUnit};
use accgen_core::GeneratedFile;
use accgen_ir::Settings;

use crate::{
    methods::{MethodContext, render_method},
    php::{GENERATED_HEADER, generated_dir},
};

/// The accessor trait of one class (`Generated/UserMethodsTrait.php`)
pub struct MethodsTrait<'a> {
    unit: &'a GeneratedUnit,
    settings: &'a Settings,
}

impl<'a> MethodsTrait<'a> {
    pub fn new(unit: &'a GeneratedUnit, settings: &'a Settings) -> Self {
        Self { unit, settings }
    }
}

impl GeneratedFile for MethodsTrait<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        generated_dir(base, &self.unit.directory, &self.settings.generated_namespace)
            .join(format!("{}.php", self.unit.name))
    }

    fn render(&self) -> String {
        let unit = self.unit;
        let ctx = MethodContext {
            trait_name: &unit.name,
            collection_wrapper: &self.settings.collection_wrapper,
        };

        let mut b = CodeBuilder::php();
        b.push_line("<?php")
            .push_line(GENERATED_HEADER)
            .push_blank()
            .push_line(&format!("namespace {};", unit.namespace))
            .push_blank();

        if !unit.imports.is_empty() {
            for import in &unit.imports {
                b.push_line(&format!("use {};", import));
            }
            b.push_blank();
        }

        b.push_docblock(&[format!("Accessor methods for \\{}", unit.class)]);
        b.push_block(&format!("trait {}", unit.name), |b| {
            for (i, request) in unit.methods.iter().enumerate() {
                if i > 0 {
                    b.push_blank();
                }
                render_method(b, &ctx, request);
            }
        });

        b.build()
    }
}
