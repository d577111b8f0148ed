//! LaTeX test document generator
//!
//! Renders a minimal `article` document that loads the declaration package
//! and lists character entries in a two-column `longtable`.
//!
//! Escaping is narrow: `&` entries are dropped because they
//! would split the row, `%` is written as `\%`, and every other character is
//! written verbatim.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::entry::CharacterEntry;
use crate::error::{CoreError, Result};

/// Package loaded by generated documents unless overridden
pub const DEFAULT_PACKAGE: &str = "DeclareUnicodeCharacter";

/// Generator for character test documents
#[derive(Debug, Clone)]
pub struct DocumentGenerator {
    package: String,
}

impl Default for DocumentGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentGenerator {
    /// Create a generator that loads [`DEFAULT_PACKAGE`]
    pub fn new() -> Self {
        Self::with_package(DEFAULT_PACKAGE)
    }

    /// Create a generator that loads the given style package
    pub fn with_package(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
        }
    }

    /// Name of the package loaded by generated documents
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Render a complete test document
    pub fn render(&self, entries: &[CharacterEntry]) -> String {
        let mut output = String::new();

        // Preamble
        output.push_str("\\documentclass{article}\n");
        output.push_str("\\usepackage[utf8]{inputenc}\n");
        output.push_str(&format!("\\usepackage{{{}}}\n\n", self.package));
        output.push_str("\\usepackage{longtable}\n\n");
        output.push_str("\\begin{document}\n\n");

        output.push_str("\\section*{Unicode Characters Test}\n\n");
        output.push_str(&format!(
            "{} characters supported, no more LaTeX Error: Unicode character ... not set up for use with LaTeX.\n\n",
            entries.len()
        ));

        output.push_str("\\begin{longtable}{ll}\n");
        output.push_str("Hex Code & Character \\\\\n\\hline\n");
        for entry in entries {
            if let Some(row) = table_row(entry) {
                output.push_str(&row);
            }
        }
        output.push_str("\\end{longtable}\n\n");

        output.push_str("\\end{document}\n");
        output
    }

    /// Render a test document and write it to `path`, replacing any existing file
    pub fn generate(&self, entries: &[CharacterEntry], path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.render(entries)).map_err(|e| CoreError::io(path, e))?;
        debug!("Wrote {} entries to {}", entries.len(), path.display());
        Ok(())
    }
}

/// Table row for an entry, `None` for entries that cannot be placed in a cell
fn table_row(entry: &CharacterEntry) -> Option<String> {
    let cell = match entry.character {
        '&' => return None,
        '%' => "\\%".to_string(),
        c => c.to_string(),
    };
    Some(format!("U+{} & {} \\\\\n", entry.hex, cell))
}
