//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use glyphcheck_core::{extract, DocumentGenerator};

use crate::batch::{package_for, BatchReport, BatchTester};
use crate::config::Settings;

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for tool consumption
    Json,
}

#[derive(Parser)]
#[command(name = "glyphcheck")]
#[command(
    author,
    version,
    about = "Find out which declared Unicode characters pdflatex can typeset",
    long_about = None
)]
struct Cli {
    /// Configuration file (defaults to ./glyphcheck.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile every declared character on its own and collect the ones that work
    Test {
        #[command(flatten)]
        input: InputArgs,

        /// Directory for per-character documents and compiler output
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Consolidated document of successfully compiled characters
        #[arg(long)]
        consolidated: Option<PathBuf>,

        /// Compiler program to run
        #[arg(long)]
        compiler: Option<String>,

        /// Hide the compiler's own output
        #[arg(short, long)]
        quiet: bool,

        /// Report format printed after the run
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Write one test document with every declared character, without compiling
    Extract {
        #[command(flatten)]
        input: InputArgs,

        /// Output document
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the declared characters
    List {
        #[command(flatten)]
        input: InputArgs,

        /// Output format (text or json)
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Style file with \DeclareUnicodeCharacter declarations
    #[arg(short, long)]
    declarations: Option<PathBuf>,
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = match cli.config {
        Some(ref path) => Settings::load(path)?,
        None => Settings::discover(Path::new("."))?,
    };

    match cli.command {
        Commands::Test {
            input,
            output_dir,
            consolidated,
            compiler,
            quiet,
            format,
        } => {
            input.apply(&mut settings);
            if let Some(dir) = output_dir {
                settings.paths.output_dir = dir;
            }
            if let Some(path) = consolidated {
                settings.paths.consolidated = path;
            }
            if let Some(program) = compiler {
                settings.compiler.program = program;
            }
            settings.compiler.quiet |= quiet;
            test_command(&settings, format)?;
        }
        Commands::Extract { input, output } => {
            input.apply(&mut settings);
            if let Some(path) = output {
                settings.paths.all_characters = path;
            }
            extract_command(&settings)?;
        }
        Commands::List { input, format } => {
            input.apply(&mut settings);
            list_command(&settings.paths.declarations, format)?;
        }
    }

    Ok(())
}

impl InputArgs {
    fn apply(self, settings: &mut Settings) {
        if let Some(path) = self.declarations {
            settings.paths.declarations = path;
        }
    }
}

/// Execute the test command
pub fn test_command(settings: &Settings, format: OutputFormat) -> Result<BatchReport> {
    let tester = BatchTester::new(settings.batch_config(), settings.compiler());
    let report = tester.run()?;

    if format == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&report)
            .context("Failed to serialize batch report")?;
        println!("{}", json);
    }

    Ok(report)
}

/// Execute the extract command
///
/// Returns the number of characters written.
pub fn extract_command(settings: &Settings) -> Result<usize> {
    let declarations = &settings.paths.declarations;
    let output = &settings.paths.all_characters;

    let entries = extract(declarations)
        .with_context(|| format!("Failed to read declarations: {}", declarations.display()))?;

    DocumentGenerator::with_package(package_for(declarations))
        .generate(&entries, output)
        .with_context(|| format!("Failed to write test document: {}", output.display()))?;

    println!(
        "Successfully extracted {} Unicode characters to {}",
        entries.len(),
        output.display()
    );

    Ok(entries.len())
}

/// Execute the list command
pub fn list_command(declarations: &Path, format: OutputFormat) -> Result<()> {
    let entries = extract(declarations)
        .with_context(|| format!("Failed to read declarations: {}", declarations.display()))?;

    match format {
        OutputFormat::Text => {
            for entry in &entries {
                println!("{}", entry);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&entries)
                .context("Failed to serialize character list")?;
            println!("{}", json);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_test_overrides() {
        let cli = Cli::try_parse_from([
            "glyphcheck",
            "test",
            "--declarations",
            "chars.sty",
            "--output-dir",
            "out",
            "--compiler",
            "lualatex",
            "--quiet",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Test {
                input,
                output_dir,
                compiler,
                quiet,
                format,
                ..
            } => {
                assert_eq!(input.declarations, Some(PathBuf::from("chars.sty")));
                assert_eq!(output_dir, Some(PathBuf::from("out")));
                assert_eq!(compiler.as_deref(), Some("lualatex"));
                assert!(quiet);
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("Expected test command"),
        }
    }

    #[test]
    fn test_parse_global_config() {
        let cli = Cli::try_parse_from(["glyphcheck", "list", "--config", "ci.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("ci.toml")));
        assert!(matches!(cli.command, Commands::List { .. }));
    }

    #[test]
    fn test_requires_subcommand() {
        assert!(Cli::try_parse_from(["glyphcheck"]).is_err());
    }

    #[test]
    fn test_extract_command_writes_all_characters() {
        let dir = tempfile::tempdir().unwrap();
        let sty = dir.path().join("mychars.sty");
        std::fs::write(
            &sty,
            "\\DeclareUnicodeCharacter{0041}{A}\n\\DeclareUnicodeCharacter{0026}{AMP}\n",
        )
        .unwrap();

        let mut settings = Settings::default();
        settings.paths.declarations = sty;
        settings.paths.all_characters = dir.path().join("all.tex");

        let count = extract_command(&settings).unwrap();
        assert_eq!(count, 2);

        let latex = std::fs::read_to_string(dir.path().join("all.tex")).unwrap();
        assert!(latex.contains("\\usepackage{mychars}"));
        assert!(latex.contains("2 characters supported"));
        assert!(latex.contains("U+0041 & A \\\\"));
        assert!(!latex.contains("U+0026"));
    }

    #[test]
    fn test_list_command_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = list_command(&dir.path().join("absent.sty"), OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("Failed to read declarations"));
    }
}
