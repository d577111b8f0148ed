//! Character entry type

use std::fmt;

use serde::Serialize;

/// A declared character: its 4-digit hex identifier and the decoded scalar value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterEntry {
    /// Uppercase hex identifier exactly as declared (e.g. `"00E9"`)
    pub hex: String,
    /// The Unicode scalar value `hex` decodes to
    pub character: char,
}

impl CharacterEntry {
    /// Decode a hex identifier into an entry
    ///
    /// Returns `None` when the value is not a Unicode scalar value
    /// (surrogates) or the text is not hexadecimal.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let code = u32::from_str_radix(hex, 16).ok()?;
        let character = char::from_u32(code)?;
        Some(Self {
            hex: hex.to_string(),
            character,
        })
    }

    /// File stem used for this entry's single-character test document
    pub fn document_stem(&self) -> String {
        format!("test-char-{}", self.hex)
    }
}

impl fmt::Display for CharacterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{} ({})", self.hex, self.character)
    }
}
