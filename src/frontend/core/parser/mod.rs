//! Parser module
//!
//! Implements a Pratt parser for mys source. Expressions go through the
//! binding power tables in `pratt`, statements through `statements`.
//! Parsing stops at the first error.

pub mod ast;
pub mod parser_state;
pub mod pratt;
pub mod statements;
#[cfg(test)]
pub mod tests;

// Re-export commonly used items
pub use ast::*;
pub use parser_state::{ParseError, ParserState};
pub use pratt::*;
pub use statements::StatementParser;

// Re-export lexer tokens
pub use crate::frontend::core::lexer::tokens::*;
pub use crate::util::span::Span;

/// Parse tokens into an AST module
///
/// # Arguments
/// * `tokens` - Token stream from the lexer
///
/// # Returns
/// Parsed module or first parse error
///
/// # Example
/// ```python
/// def main():
///     print("Hello")
/// ```
pub fn parse(tokens: &[Token]) -> Result<Module, ParseError> {
    let mut state = ParserState::new(tokens);
    let mut body = Vec::new();

    while !state.at_end() {
        // Blank logical lines
        if state.skip(&TokenKind::Newline) {
            continue;
        }

        match state.parse_statement() {
            Some(stmts) => body.extend(stmts),
            None => break,
        }
    }

    finish(&state, Module { body })
}

/// Parse a single expression
///
/// # Arguments
/// * `tokens` - Token stream
///
/// # Returns
/// Parsed expression or error
pub fn parse_expression(tokens: &[Token]) -> Result<Expr, ParseError> {
    let mut state = ParserState::new(tokens);
    let expr = state.parse_expression(BP_LOWEST);

    match expr {
        Some(expr) => finish(&state, expr),
        None => Err(first_error(&state)),
    }
}

fn finish<T>(
    state: &ParserState<'_>,
    value: T,
) -> Result<T, ParseError> {
    if state.has_errors() {
        Err(first_error(state))
    } else {
        Ok(value)
    }
}

fn first_error(state: &ParserState<'_>) -> ParseError {
    state
        .first_error()
        .cloned()
        .unwrap_or_else(|| ParseError::UnexpectedToken {
            found: state.current_kind().clone(),
            span: state.span(),
        })
}
