//! Declaration extraction
//!
//! Finds `\DeclareUnicodeCharacter{HHHH}{...}` declarations in a LaTeX style
//! file. Only this one declaration shape is recognized; the payload in the
//! second group is ignored and everything else in the file is skipped.
//!
//! # Example
//!
//! ```
//! use glyphcheck_core::scan;
//!
//! let sty = r"
//! \DeclareUnicodeCharacter{00E9}{\'e}
//! \DeclareUnicodeCharacter{D800}{broken}
//! ";
//! let extraction = scan(sty);
//! assert_eq!(extraction.entries[0].character, 'é');
//! assert_eq!(extraction.rejected, vec!["D800".to_string()]);
//! ```

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::entry::CharacterEntry;
use crate::error::{CoreError, Result};

/// Result of scanning declaration text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    /// Decoded entries in first-seen order, duplicates kept
    pub entries: Vec<CharacterEntry>,
    /// Hex identifiers that matched but are not Unicode scalar values
    pub rejected: Vec<String>,
}

fn declaration_regex() -> &'static Regex {
    static DECLARE_RE: OnceLock<Regex> = OnceLock::new();
    DECLARE_RE.get_or_init(|| {
        Regex::new(r"\\DeclareUnicodeCharacter\{([0-9A-F]{4})\}\{.*?\}").unwrap()
    })
}

/// Scan declaration text for character entries
///
/// Hex identifiers that do not decode are reported in
/// [`Extraction::rejected`] and never abort the scan.
pub fn scan(content: &str) -> Extraction {
    let mut extraction = Extraction::default();

    for caps in declaration_regex().captures_iter(content) {
        let hex = &caps[1];
        match CharacterEntry::from_hex(hex) {
            Some(entry) => extraction.entries.push(entry),
            None => extraction.rejected.push(hex.to_string()),
        }
    }

    extraction
}

/// Extract all character entries declared in a style file
///
/// Each rejected identifier is logged as a warning and dropped. A file with
/// no declarations yields an empty list.
pub fn extract(path: impl AsRef<Path>) -> Result<Vec<CharacterEntry>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| CoreError::io(path, e))?;

    let extraction = scan(&content);
    for hex in &extraction.rejected {
        warn!("Could not convert {} to a Unicode character", hex);
    }
    debug!(
        "Extracted {} declarations from {}",
        extraction.entries.len(),
        path.display()
    );

    Ok(extraction.entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_single_declaration() {
        let extraction = scan(r"\DeclareUnicodeCharacter{0041}{LATIN A}");
        assert_eq!(
            extraction.entries,
            vec![CharacterEntry {
                hex: "0041".to_string(),
                character: 'A',
            }]
        );
        assert!(extraction.rejected.is_empty());
    }

    #[test]
    fn test_scan_empty_input() {
        let extraction = scan("");
        assert!(extraction.entries.is_empty());
        assert!(extraction.rejected.is_empty());
    }

    #[test]
    fn test_scan_no_declarations() {
        let sty = "\\ProvidesPackage{foo}\n\\newcommand{\\bar}{baz}\n";
        assert!(scan(sty).entries.is_empty());
    }

    #[test]
    fn test_scan_keeps_order_and_duplicates() {
        let sty = r"
\DeclareUnicodeCharacter{2013}{--}
\DeclareUnicodeCharacter{00E9}{\'e}
\DeclareUnicodeCharacter{2013}{--}
";
        let hexes: Vec<_> = scan(sty).entries.into_iter().map(|e| e.hex).collect();
        assert_eq!(hexes, vec!["2013", "00E9", "2013"]);
    }

    #[test]
    fn test_scan_surrogate_rejected_others_kept() {
        let sty = r"
\DeclareUnicodeCharacter{0041}{A}
\DeclareUnicodeCharacter{D800}{high surrogate}
\DeclareUnicodeCharacter{0042}{B}
";
        let extraction = scan(sty);
        let chars: Vec<_> = extraction.entries.iter().map(|e| e.character).collect();
        assert_eq!(chars, vec!['A', 'B']);
        assert_eq!(extraction.rejected, vec!["D800"]);
    }

    #[test]
    fn test_scan_ignores_lowercase_and_wrong_length() {
        let sty = r"
\DeclareUnicodeCharacter{00e9}{lower}
\DeclareUnicodeCharacter{041}{short}
\DeclareUnicodeCharacter{1F600}{long}
\declareunicodecharacter{0041}{case}
";
        assert!(scan(sty).entries.is_empty());
    }

    #[test]
    fn test_scan_multiple_per_line() {
        let sty = r"\DeclareUnicodeCharacter{0041}{a}\DeclareUnicodeCharacter{0042}{b}";
        assert_eq!(scan(sty).entries.len(), 2);
    }

    #[test]
    fn test_scan_payload_with_nested_braces() {
        // The payload match is non-greedy and content is ignored
        let sty = r"\DeclareUnicodeCharacter{00A0}{\nobreakspace{}}";
        let extraction = scan(sty);
        assert_eq!(extraction.entries.len(), 1);
        assert_eq!(extraction.entries[0].character, '\u{00A0}');
    }
}
