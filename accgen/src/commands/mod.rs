mod check;
mod completions;
mod generate;

use accgen_codegen::{Diagnostic, Severity};
use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for accgen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "accgen")]
#[command(version)]
#[command(about = "Generate PHP accessor traits from accessors.toml")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate accessor traits and key registries
    Generate(GenerateCommand),

    /// Validate accessors.toml and report diagnostics without writing
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Print diagnostics to stderr, returning true if any was an error.
pub(crate) fn print_diagnostics(diagnostics: &[Diagnostic]) -> bool {
    let mut has_errors = false;
    for diag in diagnostics {
        if matches!(diag.severity, Severity::Error) {
            has_errors = true;
        }
        eprintln!("{}: {}", diag.severity, diag.message);
        if let Some(loc) = &diag.location {
            eprintln!("  --> {}", loc);
        }
    }
    has_errors
}
