use std::path::PathBuf;

use accgen_codegen::Pipeline;
use accgen_codegen_php::Generator;
use accgen_manifest::{AccessorsToml, MANIFEST_FILE};
use clap::Args;
use eyre::{Context, Result};

use super::{UnwrapOrExit, print_diagnostics};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to accessors.toml (defaults to ./accessors.toml)
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,

    /// Base directory class file paths are relative to
    /// (defaults to the directory of accessors.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let accessors_toml = AccessorsToml::open(&self.config).unwrap_or_exit();
        let manifest = accessors_toml.manifest();
        let base = self
            .output
            .clone()
            .unwrap_or_else(|| accessors_toml.base_dir().to_path_buf());
        tracing::debug!(
            config = %accessors_toml.path().display(),
            base = %base.display(),
            classes = manifest.classes.len(),
            "loaded manifest"
        );

        let output = Pipeline::new(manifest.settings.clone(), manifest.encryption.clone())
            .run(&manifest.classes);
        let has_errors = print_diagnostics(&output.diagnostics);
        let generator = Generator::new(&output);

        if self.dry_run {
            for file in generator.preview() {
                println!("── {} ──", base.join(&file.path).display());
                println!("{}", file.content);
            }
        } else {
            let result = generator
                .generate(&base)
                .wrap_err("Failed to write generated files")?;

            for path in &result.written {
                println!("  + {}", path.display());
            }
            println!(
                "\n✓ {} file{} written, {} unchanged",
                result.written.len(),
                if result.written.len() == 1 { "" } else { "s" },
                result.unchanged.len()
            );
        }

        if has_errors {
            eprintln!("\nsome classes were skipped, see the errors above");
            std::process::exit(1);
        }

        Ok(())
    }
}
