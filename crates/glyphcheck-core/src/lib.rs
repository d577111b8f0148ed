//! glyphcheck-core - Unicode declaration extraction and LaTeX test documents
//!
//! This crate provides the two building blocks the glyphcheck batch tester
//! is made of.
//!
//! # Architecture
//!
//! 1. **Extractor** - Scans a style file for `\DeclareUnicodeCharacter{HHHH}{...}`
//!    declarations and decodes each hex identifier into a [`CharacterEntry`]
//! 2. **Document generator** - Renders a minimal LaTeX document with a table
//!    of character entries
//!
//! # Example
//!
//! ```
//! use glyphcheck_core::{scan, DocumentGenerator};
//!
//! let extraction = scan(r"\DeclareUnicodeCharacter{0041}{LATIN A}");
//! assert_eq!(extraction.entries.len(), 1);
//!
//! let latex = DocumentGenerator::new().render(&extraction.entries);
//! assert!(latex.contains("U+0041 & A \\\\"));
//! ```

pub mod document;
mod entry;
mod error;
pub mod extract;

pub use document::{DocumentGenerator, DEFAULT_PACKAGE};
pub use entry::CharacterEntry;
pub use error::{CoreError, Result};
pub use extract::{extract, scan, Extraction};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }

    #[test]
    fn test_module_structure() {
        // Verify exports are accessible
        let _ = scan;
        let _: fn(PathBuf) -> Result<Vec<CharacterEntry>> = extract;
        let _ = DocumentGenerator::render;
        let _: fn(&DocumentGenerator, &[CharacterEntry], PathBuf) -> Result<()> =
            DocumentGenerator::generate;
    }
}
