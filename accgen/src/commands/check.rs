use std::path::{Path, PathBuf};

use accgen_codegen::{Diagnostic, Pipeline, RunOutput};
use accgen_manifest::{AccessorsToml, MANIFEST_FILE};
use clap::Args;
use eyre::{Context, Result};
use serde::Serialize;

use super::{UnwrapOrExit, print_diagnostics};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to accessors.toml (defaults to ./accessors.toml)
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Machine-readable summary of a check run.
#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    config: &'a Path,
    valid: bool,
    classes: usize,
    units: Vec<String>,
    registries: Vec<PathBuf>,
    diagnostics: &'a [Diagnostic],
}

impl<'a> CheckReport<'a> {
    fn new(config: &'a Path, classes: usize, output: &'a RunOutput) -> Self {
        Self {
            config,
            valid: !output.has_errors(),
            classes,
            units: output
                .units
                .iter()
                .map(|unit| format!("{}\\{}", unit.namespace, unit.name))
                .collect(),
            registries: output
                .registries
                .iter()
                .map(|artifact| artifact.directory.clone())
                .collect(),
            diagnostics: &output.diagnostics,
        }
    }
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let accessors_toml = AccessorsToml::open(&self.config).unwrap_or_exit();
        let manifest = accessors_toml.manifest();

        let output = Pipeline::new(manifest.settings.clone(), manifest.encryption.clone())
            .run(&manifest.classes);
        let report = CheckReport::new(&self.config, manifest.classes.len(), &output);

        if self.json {
            let json =
                serde_json::to_string_pretty(&report).wrap_err("Failed to serialize report")?;
            println!("{}", json);
        } else {
            print_diagnostics(&output.diagnostics);
            if !output.diagnostics.is_empty() {
                eprintln!();
            }
            if report.valid {
                println!("✓ {} is valid\n", self.config.display());
                println!(
                    "  {} class{}, {} generated trait{}, {} key registr{}",
                    report.classes,
                    if report.classes == 1 { "" } else { "es" },
                    report.units.len(),
                    if report.units.len() == 1 { "" } else { "s" },
                    report.registries.len(),
                    if report.registries.len() == 1 { "y" } else { "ies" },
                );
            }
        }

        if !report.valid {
            std::process::exit(1);
        }

        Ok(())
    }
}
