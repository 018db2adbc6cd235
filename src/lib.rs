//! mysc: the mys to C++ transpiler
//!
//! Translates a restricted Python subset ("mys") into C++ source that builds
//! against the `mys.hpp` runtime header.
//!
//! # Example
//!
//! ```
//! let cpp = mysc::transpile("def add(a: int, b: int) -> int:\n    return a + b\n", "add.mys")
//!     .unwrap();
//! assert!(cpp.starts_with("#include \"mys.hpp\""));
//! assert!(cpp.contains("int add(int a, int b);"));
//! ```

#![doc(html_root_url = "https://docs.rs/mysc")]
#![warn(rust_2018_idioms)]

// Public modules
pub mod frontend;
pub mod middle;

// Utility modules
pub mod util;

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::frontend::parser::ast::Module;
use crate::middle::codegen::{LoweringError, ModuleTranslator};
use crate::util::diagnostic::{Diagnostic, TextEmitter};
use crate::util::span::SourceFile;

// Re-exports
pub use anyhow::{Context, Result};

/// Compiler version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compiler name
pub const NAME: &str = "mysc";

/// Transpilation failure
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TranspileError {
    /// Positional error, already rendered against the source
    #[error("{rendered}")]
    Diagnostic {
        diagnostic: Diagnostic,
        rendered: String,
    },

    /// Configuration error without a position
    #[error("{0}")]
    Config(String),
}

impl TranspileError {
    fn from_diagnostic(
        diagnostic: Diagnostic,
        source: &str,
        filename: &str,
    ) -> Self {
        let rendered = TextEmitter::new().render(&diagnostic, &SourceFile::new(filename, source));
        TranspileError::Diagnostic {
            diagnostic,
            rendered,
        }
    }

    /// The underlying diagnostic, if the error has a position
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            TranspileError::Diagnostic { diagnostic, .. } => Some(diagnostic),
            TranspileError::Config(_) => None,
        }
    }
}

/// Parse and translate mys source into C++
pub fn transpile(
    source: &str,
    filename: &str,
) -> std::result::Result<String, TranspileError> {
    debug!("Transpiling {}", filename);
    let module = frontend::parse(source).map_err(|e| {
        TranspileError::from_diagnostic(e.to_diagnostic(), source, filename)
    })?;
    transpile_ast(&module, source, filename)
}

/// Translate an already parsed module
///
/// `source` and `filename` are only used to render diagnostics.
pub fn transpile_ast(
    module: &Module,
    source: &str,
    filename: &str,
) -> std::result::Result<String, TranspileError> {
    ModuleTranslator::new()
        .translate(module)
        .map_err(|e| match e {
            LoweringError::Unsupported(diagnostic) => {
                TranspileError::from_diagnostic(diagnostic, source, filename)
            }
            LoweringError::Config(message) => TranspileError::Config(message),
        })
}

/// Read a file and transpile it
pub fn transpile_file(path: &Path) -> Result<String> {
    debug!("Reading {}", path.display());
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(transpile(&source, &path.display().to_string())?)
}
