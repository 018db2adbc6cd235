//! Lexer module
//! Split into tokens, layout state, literal scanning and the tokenizer driver

pub mod literals;
pub mod state;
pub mod tokenizer;
pub mod tokens;

// Re-export types
pub use tokenizer::Lexer;
pub use tokens::{LexError, Token, TokenKind};

/// Tokenize source code
///
/// The stream always ends with `Eof`; every logical line ends with `Newline`
/// and blocks are delimited by balanced `Indent` / `Dedent` tokens.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    tracing::debug!("Tokenizing {} bytes", source.len());

    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next_token() {
        tracing::trace!("{:?} at {}", token.kind, token.span.start);
        tokens.push(token);
    }

    if let Some(err) = lexer.error {
        return Err(err);
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        span: crate::util::span::Span::new(lexer.position(), lexer.position()),
    });
    tracing::debug!("Tokenized into {} tokens", tokens.len());
    Ok(tokens)
}
