//! Token types

use std::fmt;

use crate::util::span::Span;

/// Lexer error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexError {
    #[error("unterminated string literal")]
    UnterminatedString { span: Span },
    #[error("invalid escape sequence '{sequence}'")]
    InvalidEscape { sequence: String, span: Span },
    #[error("invalid number literal '{text}'")]
    InvalidNumber { text: String, span: Span },
    #[error("bytes can only contain ASCII literal characters")]
    NonAsciiBytes { span: Span },
    #[error("invalid character '{ch}'")]
    UnexpectedChar { ch: char, span: Span },
    #[error("unindent does not match any outer indentation level")]
    InconsistentDedent { span: Span },
    #[error("unmatched '{ch}'")]
    UnmatchedBracket { ch: char, span: Span },
    #[error("unexpected character after line continuation character")]
    BadContinuation { span: Span },
}

impl LexError {
    /// Location of the offending text
    pub fn span(&self) -> Span {
        match self {
            LexError::UnterminatedString { span }
            | LexError::InvalidEscape { span, .. }
            | LexError::InvalidNumber { span, .. }
            | LexError::NonAsciiBytes { span }
            | LexError::UnexpectedChar { span, .. }
            | LexError::InconsistentDedent { span }
            | LexError::UnmatchedBracket { span, .. }
            | LexError::BadContinuation { span } => *span,
        }
    }
}

/// Token kind
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Keywords
    KwFalse,
    KwNone,
    KwTrue,
    KwAnd,
    KwAs,
    KwAssert,
    KwAsync,
    KwAwait,
    KwBreak,
    KwClass,
    KwContinue,
    KwDef,
    KwDel,
    KwElif,
    KwElse,
    KwExcept,
    KwFinally,
    KwFor,
    KwFrom,
    KwGlobal,
    KwIf,
    KwImport,
    KwIn,
    KwIs,
    KwLambda,
    KwNonlocal,
    KwNot,
    KwOr,
    KwPass,
    KwRaise,
    KwReturn,
    KwTry,
    KwWhile,
    KwWith,
    KwYield,

    // Identifiers
    Identifier(String),

    // Literals
    IntLiteral(u128),
    FloatLiteral(f64),
    StringLiteral(String),
    BytesLiteral(Vec<u8>),
    FormattedString(String),

    // Operators
    Plus,
    Minus,
    Star,
    DoubleStar,
    Slash,
    DoubleSlash,
    Percent,
    At,
    LShift,
    RShift,
    Amp,
    Pipe,
    Caret,
    Tilde,
    Lt,
    Gt,
    Le,
    Ge,
    EqEq,
    Neq,
    Eq,
    ColonEq,
    Arrow,

    // Augmented assignment
    PlusEq,
    MinusEq,
    StarEq,
    DoubleStarEq,
    SlashEq,
    DoubleSlashEq,
    PercentEq,
    AtEq,
    AmpEq,
    PipeEq,
    CaretEq,
    LShiftEq,
    RShiftEq,

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Colon,
    Semicolon,
    Dot,
    Ellipsis,

    // Layout
    Newline,
    Indent,
    Dedent,

    // Special
    Eof,
}

impl TokenKind {
    /// Whether this token can begin an expression
    pub fn starts_expression(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier(_)
                | TokenKind::IntLiteral(_)
                | TokenKind::FloatLiteral(_)
                | TokenKind::StringLiteral(_)
                | TokenKind::BytesLiteral(_)
                | TokenKind::FormattedString(_)
                | TokenKind::KwFalse
                | TokenKind::KwNone
                | TokenKind::KwTrue
                | TokenKind::KwNot
                | TokenKind::KwLambda
                | TokenKind::KwAwait
                | TokenKind::KwYield
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Tilde
                | TokenKind::Star
                | TokenKind::LParen
                | TokenKind::LBracket
                | TokenKind::LBrace
                | TokenKind::Ellipsis
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let text = match self {
            TokenKind::Identifier(name) => return write!(f, "name '{}'", name),
            TokenKind::IntLiteral(_) | TokenKind::FloatLiteral(_) => "number",
            TokenKind::StringLiteral(_)
            | TokenKind::BytesLiteral(_)
            | TokenKind::FormattedString(_) => "string",
            TokenKind::Newline => "newline",
            TokenKind::Indent => "indent",
            TokenKind::Dedent => "dedent",
            TokenKind::Eof => "end of file",
            other => return write!(f, "'{}'", other.symbol()),
        };
        write!(f, "{}", text)
    }
}

impl TokenKind {
    /// Source spelling of keywords, operators and delimiters
    fn symbol(&self) -> &'static str {
        match self {
            TokenKind::KwFalse => "False",
            TokenKind::KwNone => "None",
            TokenKind::KwTrue => "True",
            TokenKind::KwAnd => "and",
            TokenKind::KwAs => "as",
            TokenKind::KwAssert => "assert",
            TokenKind::KwAsync => "async",
            TokenKind::KwAwait => "await",
            TokenKind::KwBreak => "break",
            TokenKind::KwClass => "class",
            TokenKind::KwContinue => "continue",
            TokenKind::KwDef => "def",
            TokenKind::KwDel => "del",
            TokenKind::KwElif => "elif",
            TokenKind::KwElse => "else",
            TokenKind::KwExcept => "except",
            TokenKind::KwFinally => "finally",
            TokenKind::KwFor => "for",
            TokenKind::KwFrom => "from",
            TokenKind::KwGlobal => "global",
            TokenKind::KwIf => "if",
            TokenKind::KwImport => "import",
            TokenKind::KwIn => "in",
            TokenKind::KwIs => "is",
            TokenKind::KwLambda => "lambda",
            TokenKind::KwNonlocal => "nonlocal",
            TokenKind::KwNot => "not",
            TokenKind::KwOr => "or",
            TokenKind::KwPass => "pass",
            TokenKind::KwRaise => "raise",
            TokenKind::KwReturn => "return",
            TokenKind::KwTry => "try",
            TokenKind::KwWhile => "while",
            TokenKind::KwWith => "with",
            TokenKind::KwYield => "yield",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::DoubleStar => "**",
            TokenKind::Slash => "/",
            TokenKind::DoubleSlash => "//",
            TokenKind::Percent => "%",
            TokenKind::At => "@",
            TokenKind::LShift => "<<",
            TokenKind::RShift => ">>",
            TokenKind::Amp => "&",
            TokenKind::Pipe => "|",
            TokenKind::Caret => "^",
            TokenKind::Tilde => "~",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Le => "<=",
            TokenKind::Ge => ">=",
            TokenKind::EqEq => "==",
            TokenKind::Neq => "!=",
            TokenKind::Eq => "=",
            TokenKind::ColonEq => ":=",
            TokenKind::Arrow => "->",
            TokenKind::PlusEq => "+=",
            TokenKind::MinusEq => "-=",
            TokenKind::StarEq => "*=",
            TokenKind::DoubleStarEq => "**=",
            TokenKind::SlashEq => "/=",
            TokenKind::DoubleSlashEq => "//=",
            TokenKind::PercentEq => "%=",
            TokenKind::AtEq => "@=",
            TokenKind::AmpEq => "&=",
            TokenKind::PipeEq => "|=",
            TokenKind::CaretEq => "^=",
            TokenKind::LShiftEq => "<<=",
            TokenKind::RShiftEq => ">>=",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Dot => ".",
            TokenKind::Ellipsis => "...",
            _ => "?",
        }
    }
}

/// Token
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl From<TokenKind> for Token {
    fn from(kind: TokenKind) -> Self {
        Token {
            kind,
            span: Span::dummy(),
        }
    }
}
