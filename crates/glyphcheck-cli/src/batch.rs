//! Batch tester
//!
//! Compiles one test document per declared character and collects the
//! characters that compiled into a consolidated document.
//!
//! Compilation is strictly sequential: every run writes its artifacts into
//! the same output directory, so running characters in parallel would need
//! a separate output directory per character first.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use glyphcheck_core::{extract, CharacterEntry, DocumentGenerator, DEFAULT_PACKAGE};

use crate::compiler::Compiler;

/// Locations used by a batch run
#[derive(Debug, Clone, PartialEq)]
pub struct BatchConfig {
    /// Style file holding the declarations
    pub declarations: PathBuf,
    /// Directory for per-character documents and compiler artifacts
    pub output_dir: PathBuf,
    /// Document listing every character that compiled
    pub consolidated: PathBuf,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            declarations: PathBuf::from("DeclareUnicodeCharacter.sty"),
            output_dir: PathBuf::from("test_results"),
            consolidated: PathBuf::from("successful-chars.tex"),
        }
    }
}

impl BatchConfig {
    /// Package name the test documents load, taken from the declaration file stem
    pub fn package(&self) -> String {
        package_for(&self.declarations)
    }

    /// Path of the single-character test document for `entry`
    pub fn document_path(&self, entry: &CharacterEntry) -> PathBuf {
        self.output_dir
            .join(entry.document_stem())
            .with_extension("tex")
    }
}

/// Package name for a declaration file, falling back to the default package
pub fn package_for(declarations: &Path) -> String {
    declarations
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_PACKAGE)
        .to_string()
}

/// Whether a single character compiled on its own
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompilationOutcome {
    /// The character tested
    pub entry: CharacterEntry,
    /// True when the compiler exited with status zero
    pub success: bool,
}

/// Outcomes of one batch run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    /// One outcome per extracted entry, in declaration order
    pub outcomes: Vec<CompilationOutcome>,
    /// Consolidated document, written only when something compiled
    pub consolidated: Option<PathBuf>,
}

impl BatchReport {
    /// Entries that compiled, in declaration order
    pub fn successes(&self) -> Vec<CharacterEntry> {
        self.outcomes
            .iter()
            .filter(|o| o.success)
            .map(|o| o.entry.clone())
            .collect()
    }

    /// Entries that failed to compile, in declaration order
    pub fn failures(&self) -> Vec<CharacterEntry> {
        self.outcomes
            .iter()
            .filter(|o| !o.success)
            .map(|o| o.entry.clone())
            .collect()
    }

    /// Number of entries that compiled
    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.success).count()
    }

    /// Number of entries tested
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Closing line printed after a run
    pub fn summary(&self) -> String {
        match self.consolidated {
            Some(ref path) => format!(
                "Created {} with {} successfully compiled characters",
                path.display(),
                self.success_count()
            ),
            None => "No characters compiled successfully".to_string(),
        }
    }
}

/// Drives extraction, per-character compilation and consolidation
pub struct BatchTester<C: Compiler> {
    config: BatchConfig,
    compiler: C,
    generator: DocumentGenerator,
}

impl<C: Compiler> BatchTester<C> {
    /// Create a tester for `config` using `compiler`
    pub fn new(config: BatchConfig, compiler: C) -> Self {
        let generator = DocumentGenerator::with_package(config.package());
        Self {
            config,
            compiler,
            generator,
        }
    }

    /// Configuration of this tester
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Run the whole batch
    ///
    /// A character that fails to compile is recorded and the run moves on.
    /// Filesystem errors abort the run.
    pub fn run(&self) -> Result<BatchReport> {
        let output_dir = &self.config.output_dir;
        fs::create_dir_all(output_dir).with_context(|| {
            format!(
                "Failed to create output directory: {}",
                output_dir.display()
            )
        })?;

        let entries = extract(&self.config.declarations).with_context(|| {
            format!(
                "Failed to read declarations: {}",
                self.config.declarations.display()
            )
        })?;
        debug!(
            "Testing {} characters with {}",
            entries.len(),
            self.compiler.name()
        );

        let mut report = BatchReport::default();
        for entry in entries {
            let success = self.test_entry(&entry)?;
            if success {
                println!("Character {} compiled successfully", entry);
            } else {
                println!("Character {} failed to compile", entry);
            }
            report.outcomes.push(CompilationOutcome { entry, success });
        }

        let successes = report.successes();
        if !successes.is_empty() {
            let consolidated = &self.config.consolidated;
            self.generator
                .generate(&successes, consolidated)
                .with_context(|| {
                    format!(
                        "Failed to write consolidated document: {}",
                        consolidated.display()
                    )
                })?;
            report.consolidated = Some(consolidated.clone());
        }
        println!("{}", report.summary());

        Ok(report)
    }

    /// Write and compile the single-character document for `entry`
    fn test_entry(&self, entry: &CharacterEntry) -> Result<bool> {
        let document = self.config.document_path(entry);
        self.generator
            .generate(std::slice::from_ref(entry), &document)
            .with_context(|| format!("Failed to write test document: {}", document.display()))?;

        let status = self.compiler.compile(&document, &self.config.output_dir);
        debug!("{} exited with status {}", self.compiler.name(), status);
        Ok(status == 0)
    }
}
