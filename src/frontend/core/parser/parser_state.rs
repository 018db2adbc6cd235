//! Parser state and error handling

use crate::frontend::core::lexer::tokens::*;
use crate::util::span::Span;

/// Parse error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// Expected a specific token or construct
    #[error("expected {expected}, found {found}")]
    ExpectedToken {
        expected: String,
        found: TokenKind,
        span: Span,
    },
    /// Unexpected token encountered
    #[error("unexpected {found}")]
    UnexpectedToken { found: TokenKind, span: Span },
    /// Generic parse error with message
    #[error("{message}")]
    Message { message: String, span: Span },
}

impl ParseError {
    /// Location of the error
    pub fn span(&self) -> Span {
        match self {
            ParseError::ExpectedToken { span, .. }
            | ParseError::UnexpectedToken { span, .. }
            | ParseError::Message { span, .. } => *span,
        }
    }
}

/// Parser state for Pratt parsing
pub struct ParserState<'a> {
    tokens: &'a [Token],
    pos: usize,
    errors: Vec<ParseError>,
}

impl<'a> ParserState<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
        }
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len() || matches!(self.current_kind(), TokenKind::Eof)
    }

    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Kind of the current token, `Eof` past the end
    pub fn current_kind(&self) -> &TokenKind {
        self.current().map(|t| &t.kind).unwrap_or(&TokenKind::Eof)
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos + 1)
    }

    /// Kind of the token after the current one
    pub fn peek_kind(&self) -> &TokenKind {
        self.peek().map(|t| &t.kind).unwrap_or(&TokenKind::Eof)
    }

    pub fn span(&self) -> Span {
        self.current()
            .or_else(|| self.tokens.last())
            .map(|t| t.span)
            .unwrap_or(Span::dummy())
    }

    /// Span of the most recently consumed token
    pub fn prev_span(&self) -> Span {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(|t| t.span)
            .unwrap_or_else(|| self.span())
    }

    /// Span from `start` to the end of the last consumed token
    pub fn span_from(
        &self,
        start: Span,
    ) -> Span {
        start.to(self.prev_span())
    }

    pub fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned()?;
        self.pos += 1;
        Some(token)
    }

    pub fn at(
        &self,
        kind: &TokenKind,
    ) -> bool {
        self.current_kind() == kind
    }

    pub fn skip(
        &mut self,
        kind: &TokenKind,
    ) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume `kind` or record an error; returns the consumed token's span
    pub fn expect(
        &mut self,
        kind: &TokenKind,
    ) -> Option<Span> {
        if self.at(kind) {
            let span = self.span();
            self.bump();
            Some(span)
        } else {
            self.error_expected(&kind.to_string());
            None
        }
    }

    /// Consume an identifier or record an error
    pub fn expect_identifier(&mut self) -> Option<crate::util::Spanned<String>> {
        if let TokenKind::Identifier(name) = self.current_kind() {
            let name = name.clone();
            let span = self.span();
            self.bump();
            Some(crate::util::Spanned::new(name, span))
        } else {
            self.error_expected("identifier");
            None
        }
    }

    /// Record an "expected X, found Y" error at the current token
    pub fn error_expected(
        &mut self,
        expected: &str,
    ) {
        let found = self.current_kind().clone();
        let span = self.span();
        self.error(ParseError::ExpectedToken {
            expected: expected.to_string(),
            found,
            span,
        });
    }

    /// Record a message error at `span`
    pub fn error_at(
        &mut self,
        message: impl Into<String>,
        span: Span,
    ) {
        self.error(ParseError::Message {
            message: message.into(),
            span,
        });
    }

    pub fn error(
        &mut self,
        error: ParseError,
    ) {
        self.errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn first_error(&self) -> Option<&ParseError> {
        self.errors.first()
    }
}
