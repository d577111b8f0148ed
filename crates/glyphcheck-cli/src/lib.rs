//! glyphcheck CLI - Command-line interface library
//!
//! This library provides the CLI functionality for glyphcheck, including:
//! - Test: Compile every declared character on its own and consolidate the survivors
//! - Extract: Write one test document with every declared character
//! - List: Print the declared characters
//!
//! # Library Usage
//!
//! ```ignore
//! use glyphcheck_cli::{BatchConfig, BatchTester, Pdflatex};
//!
//! let tester = BatchTester::new(BatchConfig::default(), Pdflatex::default());
//! let report = tester.run()?;
//! println!("{} of {} characters compiled", report.success_count(), report.total());
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Test every character declared in ./DeclareUnicodeCharacter.sty
//! glyphcheck test
//!
//! # Use another style file and keep pdflatex quiet
//! glyphcheck test --declarations mychars.sty --quiet
//!
//! # Write a single document with every declared character
//! glyphcheck extract --output test-file.tex
//! ```

pub mod app;
pub mod batch;
pub mod compiler;
pub mod config;

// Re-export main entry point and types
pub use app::{extract_command, list_command, run_cli, test_command, OutputFormat};
pub use batch::{BatchConfig, BatchReport, BatchTester, CompilationOutcome};
pub use compiler::{Compiler, Pdflatex};
pub use config::Settings;
