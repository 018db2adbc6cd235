//! Frontend pipeline
//!
//! Source text to syntax tree: tokenize, then parse. Errors from either
//! stage carry the position of the offending token.

use thiserror::Error;
use tracing::debug;

pub mod core;

pub use self::core::{lexer, parser};

use crate::util::diagnostic::Diagnostic;
use crate::util::span::Span;
use lexer::LexError;
use parser::{Module, ParseError};

/// Errors raised before lowering starts
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntaxError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl SyntaxError {
    /// Location of the error
    pub fn span(&self) -> Span {
        match self {
            SyntaxError::Lex(e) => e.span(),
            SyntaxError::Parse(e) => e.span(),
        }
    }

    /// Convert into a renderable diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::syntax(self.to_string(), self.span())
    }
}

/// Parse source code into a module
pub fn parse(source: &str) -> Result<Module, SyntaxError> {
    debug!("Parsing source code ({} bytes)", source.len());

    let tokens = lexer::tokenize(source)?;
    debug!("Tokenized into {} tokens", tokens.len());

    let module = parser::parse(&tokens)?;
    debug!("Parsing successful, got {} statements", module.body.len());

    Ok(module)
}
