//! Configuration
//!
//! Settings are loaded from `glyphcheck.toml` in the working directory, or
//! from the file given with `--config`:
//!
//! ```toml
//! [paths]
//! declarations = "DeclareUnicodeCharacter.sty"
//! output_dir = "test_results"
//! consolidated = "successful-chars.tex"
//! all_characters = "test-file.tex"
//!
//! [compiler]
//! program = "pdflatex"
//! quiet = false
//! ```
//!
//! Every field is optional; missing fields take the defaults shown above.

mod settings;


pub use settings::{CompilerSettings, PathSettings, Settings, CONFIG_FILE};
