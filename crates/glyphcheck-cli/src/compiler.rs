//! External compiler abstraction
//!
//! The batch tester only needs one thing from a typesetting toolchain: the
//! exit status of compiling a document. [`Compiler`] captures that, and
//! [`Pdflatex`] implements it by running a LaTeX engine as a child process.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

/// Exit status reported when the compiler process could not be started
pub const SPAWN_FAILURE_STATUS: i32 = 127;

/// Exit status reported when the compiler process was terminated by a signal
pub const SIGNAL_STATUS: i32 = -1;

/// A typesetting compiler that turns a document into artifacts
///
/// Implementors report the process exit status; zero means the document
/// compiled. Compiler diagnostics are never inspected.
pub trait Compiler {
    /// Human-readable name of this compiler
    fn name(&self) -> &str;

    /// Compile `document`, writing artifacts into `output_dir`
    fn compile(&self, document: &Path, output_dir: &Path) -> i32;
}

impl<C: Compiler + ?Sized> Compiler for &C {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn compile(&self, document: &Path, output_dir: &Path) -> i32 {
        (**self).compile(document, output_dir)
    }
}

/// Runs a LaTeX engine (`pdflatex` by default) in non-stop mode
#[derive(Debug, Clone)]
pub struct Pdflatex {
    program: String,
    quiet: bool,
}

impl Default for Pdflatex {
    fn default() -> Self {
        Self::new("pdflatex")
    }
}

impl Pdflatex {
    /// Create a compiler that runs `program`
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            quiet: false,
        }
    }

    /// Discard the compiler's stdout and stderr
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Program this compiler runs
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Whether compiler output is discarded
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    fn command(&self, document: &Path, output_dir: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-interaction=nonstopmode")
            .arg(format!("-output-directory={}", output_dir.display()))
            .arg(document)
            .stdin(Stdio::null());
        if self.quiet {
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
        }
        cmd
    }
}

impl Compiler for Pdflatex {
    fn name(&self) -> &str {
        &self.program
    }

    fn compile(&self, document: &Path, output_dir: &Path) -> i32 {
        let mut cmd = self.command(document, output_dir);
        debug!("Running {:?}", cmd);

        match cmd.status() {
            Ok(status) => status.code().unwrap_or(SIGNAL_STATUS),
            Err(e) => {
                warn!("Failed to run {}: {}", self.program, e);
                SPAWN_FAILURE_STATUS
            }
        }
    }
}
