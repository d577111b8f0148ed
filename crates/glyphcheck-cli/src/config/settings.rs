//! Configuration settings

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::batch::BatchConfig;
use crate::compiler::Pdflatex;

/// Configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "glyphcheck.toml";

/// Top-level settings structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Input and output locations
    pub paths: PathSettings,
    /// External compiler settings
    pub compiler: CompilerSettings,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load `glyphcheck.toml` from `dir` if present, defaults otherwise
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Batch tester configuration derived from these settings
    pub fn batch_config(&self) -> BatchConfig {
        BatchConfig {
            declarations: self.paths.declarations.clone(),
            output_dir: self.paths.output_dir.clone(),
            consolidated: self.paths.consolidated.clone(),
        }
    }

    /// Compiler described by these settings
    pub fn compiler(&self) -> Pdflatex {
        Pdflatex::new(&self.compiler.program).quiet(self.compiler.quiet)
    }
}

/// File locations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PathSettings {
    /// Style file holding the `\DeclareUnicodeCharacter` declarations
    pub declarations: PathBuf,
    /// Directory for per-character documents and compiler artifacts
    pub output_dir: PathBuf,
    /// Document listing every character that compiled
    pub consolidated: PathBuf,
    /// Document written by `extract`, listing every declared character
    pub all_characters: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        let batch = BatchConfig::default();
        Self {
            declarations: batch.declarations,
            output_dir: batch.output_dir,
            consolidated: batch.consolidated,
            all_characters: PathBuf::from("test-file.tex"),
        }
    }
}

/// External compiler configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CompilerSettings {
    /// Program invoked for each test document
    pub program: String,
    /// Discard the compiler's own console output
    pub quiet: bool,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            program: "pdflatex".to_string(),
            quiet: false,
        }
    }
}
