//! Tokenizer implementation
//! Main lexer structure and token generation logic, including the
//! NEWLINE / INDENT / DEDENT layout tokens of indentation-based blocks

use std::collections::VecDeque;
use std::iter::Peekable;
use std::str::Chars;

use super::literals::{
    is_digit, is_identifier_char, is_identifier_start, scan_leading_dot, scan_number, scan_string,
    StringPrefix,
};
use super::state::{IndentChange, LexerState};
use crate::frontend::core::lexer::tokens::*;
use crate::util::span::{Position, Span};

/// Main lexer structure
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    offset: usize,
    line: usize,
    column: usize,
    start_offset: usize,
    start_line: usize,
    start_column: usize,
    pub error: Option<LexError>,
    state: LexerState,
    pending: VecDeque<Token>,
    at_line_start: bool,
    line_has_tokens: bool,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            offset: 0,
            line: 1,
            column: 1,
            start_offset: 0,
            start_line: 1,
            start_column: 1,
            error: None,
            state: LexerState::new(),
            pending: VecDeque::new(),
            at_line_start: true,
            line_has_tokens: false,
            finished: false,
        }
    }

    /// Get current position
    pub fn position(&self) -> Position {
        Position::with_offset(self.line, self.column, self.offset)
    }

    /// Get start position of current token
    pub fn start_position(&self) -> Position {
        Position::with_offset(self.start_line, self.start_column, self.start_offset)
    }

    /// Get span of current token
    pub fn span(&self) -> Span {
        Span::new(self.start_position(), self.position())
    }

    /// Advance to next character
    pub fn advance(&mut self) -> Option<char> {
        match self.chars.next() {
            Some('\n') => {
                self.offset += 1;
                self.line += 1;
                self.column = 1;
                Some('\n')
            }
            Some(c) => {
                self.offset += c.len_utf8();
                self.column += 1;
                Some(c)
            }
            None => None,
        }
    }

    /// Peek at next character
    pub fn peek(&mut self) -> Option<&char> {
        self.chars.peek()
    }

    /// Peek at character after next
    pub fn peek_next(&mut self) -> Option<char> {
        self.chars.clone().nth(1)
    }

    /// Whether the next character is `c`
    fn peek_is(
        &mut self,
        c: char,
    ) -> bool {
        self.peek() == Some(&c)
    }

    /// Mark the start of the next token
    fn mark_start(&mut self) {
        self.start_offset = self.offset;
        self.start_line = self.line;
        self.start_column = self.column;
    }

    /// Skip whitespace and comments; newlines too while inside brackets
    fn skip_whitespace_and_comments(&mut self) {
        while let Some(&c) = self.peek() {
            match c {
                ' ' | '\t' | '\x0c' | '\r' => {
                    self.advance();
                }
                '\n' if self.state.in_brackets() => {
                    self.advance();
                }
                '#' => self.skip_comment(),
                _ => break,
            }
        }
    }

    fn skip_comment(&mut self) {
        while let Some(&c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Generate next token
    pub fn next_token(&mut self) -> Option<Token> {
        if let Some(token) = self.pending.pop_front() {
            return Some(token);
        }
        if self.finished || self.error.is_some() {
            return None;
        }

        loop {
            if self.at_line_start && !self.state.in_brackets() {
                match self.scan_indentation() {
                    LineStart::Blank => continue,
                    LineStart::End => return self.finish(),
                    LineStart::Content(Some(token)) => return Some(token),
                    LineStart::Content(None) => {
                        if self.error.is_some() {
                            return None;
                        }
                    }
                }
            }

            self.skip_whitespace_and_comments();
            self.mark_start();

            let c = match self.advance() {
                Some(c) => c,
                None => return self.finish(),
            };

            match c {
                '\n' => {
                    self.at_line_start = true;
                    if self.line_has_tokens {
                        self.line_has_tokens = false;
                        return Some(self.make_token(TokenKind::Newline));
                    }
                }
                '\\' => {
                    if self.peek() == Some(&'\r') {
                        self.advance();
                    }
                    if self.advance() != Some('\n') {
                        self.error = Some(LexError::BadContinuation { span: self.span() });
                        return None;
                    }
                }
                c => {
                    let token = self.scan_token(c)?;
                    self.line_has_tokens = true;
                    return Some(token);
                }
            }
        }
    }

    /// Measure the indentation of a new physical line
    fn scan_indentation(&mut self) -> LineStart {
        let mut width = 0;
        while let Some(&c) = self.peek() {
            if c == ' ' || c == '\t' || c == '\x0c' {
                width = LexerState::indent_width(width, c);
                self.advance();
            } else {
                break;
            }
        }

        match self.peek() {
            None => return LineStart::End,
            Some('#') => {
                self.skip_comment();
                self.advance();
                return LineStart::Blank;
            }
            Some('\n') | Some('\r') => {
                self.advance();
                return LineStart::Blank;
            }
            _ => {}
        }

        self.at_line_start = false;
        self.mark_start();
        let here = self.start_position();
        let layout = |kind| Token {
            kind,
            span: Span::new(here, here),
        };

        match self.state.change_indent(width) {
            IndentChange::Same => LineStart::Content(None),
            IndentChange::Indent => LineStart::Content(Some(layout(TokenKind::Indent))),
            IndentChange::Dedent(count) => {
                self.pending
                    .extend((0..count).map(|_| layout(TokenKind::Dedent)));
                LineStart::Content(self.pending.pop_front())
            }
            IndentChange::Inconsistent => {
                self.error = Some(LexError::InconsistentDedent {
                    span: Span::new(here, here),
                });
                LineStart::Content(None)
            }
        }
    }

    /// Emit the closing NEWLINE and DEDENT tokens at end of input
    fn finish(&mut self) -> Option<Token> {
        self.finished = true;
        self.mark_start();

        if let Some(open) = self.state.open_bracket_char() {
            self.error = Some(LexError::UnmatchedBracket {
                ch: open,
                span: self.span(),
            });
            return None;
        }

        if self.line_has_tokens {
            self.line_has_tokens = false;
            self.pending.push_back(self.make_token(TokenKind::Newline));
        }
        for _ in 0..self.state.close_all() {
            self.pending.push_back(self.make_token(TokenKind::Dedent));
        }
        self.pending.pop_front()
    }

    /// Scan one significant token whose first character was consumed
    fn scan_token(
        &mut self,
        c: char,
    ) -> Option<Token> {
        let kind = match c {
            c if is_identifier_start(c) => return self.scan_identifier(c),
            c if is_digit(c) => return scan_number(self, c),
            '"' | '\'' => return scan_string(self, StringPrefix::default(), c),
            '.' => {
                if self.peek().map(|c| is_digit(*c)).unwrap_or(false) {
                    return scan_leading_dot(self);
                }
                if self.peek() == Some(&'.') && self.peek_next() == Some('.') {
                    self.advance();
                    self.advance();
                    TokenKind::Ellipsis
                } else {
                    TokenKind::Dot
                }
            }
            '(' | '[' | '{' => {
                self.state.open_bracket(c);
                match c {
                    '(' => TokenKind::LParen,
                    '[' => TokenKind::LBracket,
                    _ => TokenKind::LBrace,
                }
            }
            ')' | ']' | '}' => {
                if !self.state.close_bracket(c) {
                    self.error = Some(LexError::UnmatchedBracket {
                        ch: c,
                        span: self.span(),
                    });
                    return None;
                }
                match c {
                    ')' => TokenKind::RParen,
                    ']' => TokenKind::RBracket,
                    _ => TokenKind::RBrace,
                }
            }
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '~' => TokenKind::Tilde,
            ':' => self.either('=', TokenKind::ColonEq, TokenKind::Colon),
            '=' => self.either('=', TokenKind::EqEq, TokenKind::Eq),
            '+' => self.either('=', TokenKind::PlusEq, TokenKind::Plus),
            '%' => self.either('=', TokenKind::PercentEq, TokenKind::Percent),
            '@' => self.either('=', TokenKind::AtEq, TokenKind::At),
            '&' => self.either('=', TokenKind::AmpEq, TokenKind::Amp),
            '|' => self.either('=', TokenKind::PipeEq, TokenKind::Pipe),
            '^' => self.either('=', TokenKind::CaretEq, TokenKind::Caret),
            '-' => {
                if self.peek() == Some(&'>') {
                    self.advance();
                    TokenKind::Arrow
                } else {
                    self.either('=', TokenKind::MinusEq, TokenKind::Minus)
                }
            }
            '*' => self.doubled(
                '*',
                [TokenKind::Star, TokenKind::StarEq],
                [TokenKind::DoubleStar, TokenKind::DoubleStarEq],
            ),
            '/' => self.doubled(
                '/',
                [TokenKind::Slash, TokenKind::SlashEq],
                [TokenKind::DoubleSlash, TokenKind::DoubleSlashEq],
            ),
            '<' => {
                if self.peek() == Some(&'<') {
                    self.advance();
                    self.either('=', TokenKind::LShiftEq, TokenKind::LShift)
                } else {
                    self.either('=', TokenKind::Le, TokenKind::Lt)
                }
            }
            '>' => {
                if self.peek() == Some(&'>') {
                    self.advance();
                    self.either('=', TokenKind::RShiftEq, TokenKind::RShift)
                } else {
                    self.either('=', TokenKind::Ge, TokenKind::Gt)
                }
            }
            '!' if self.peek_is('=') => {
                self.advance();
                TokenKind::Neq
            }
            c => {
                self.error = Some(LexError::UnexpectedChar {
                    ch: c,
                    span: self.span(),
                });
                return None;
            }
        };
        Some(self.make_token(kind))
    }

    /// `second`-suffixed form when the next character matches, plain form otherwise
    fn either(
        &mut self,
        second: char,
        matched: TokenKind,
        plain: TokenKind,
    ) -> TokenKind {
        if self.peek() == Some(&second) {
            self.advance();
            matched
        } else {
            plain
        }
    }

    /// Operators that double up (`*`/`**`, `/`/`//`), each with an `=` form
    fn doubled(
        &mut self,
        c: char,
        [single, single_eq]: [TokenKind; 2],
        [double, double_eq]: [TokenKind; 2],
    ) -> TokenKind {
        if self.peek() == Some(&c) {
            self.advance();
            self.either('=', double_eq, double)
        } else {
            self.either('=', single_eq, single)
        }
    }

    /// Scan identifier, keyword or prefixed string token
    fn scan_identifier(
        &mut self,
        first_char: char,
    ) -> Option<Token> {
        let mut value = String::new();
        value.push(first_char);

        while let Some(&c) = self.peek() {
            if is_identifier_char(c) {
                value.push(c);
                self.advance();
            } else {
                break;
            }
        }

        if let Some(&quote) = self.peek() {
            if quote == '"' || quote == '\'' {
                if let Some(prefix) = StringPrefix::parse(&value) {
                    self.advance();
                    return scan_string(self, prefix, quote);
                }
            }
        }

        let kind = LexerState::keyword_from_str(&value).unwrap_or(TokenKind::Identifier(value));
        Some(self.make_token(kind))
    }

    /// Create token with current span
    pub fn make_token(
        &self,
        kind: TokenKind,
    ) -> Token {
        Token {
            kind,
            span: self.span(),
        }
    }
}

/// What the start of a physical line turned out to be
enum LineStart {
    /// Whitespace or comment only
    Blank,
    /// End of input
    End,
    /// Code follows, possibly after a layout token
    Content(Option<Token>),
}
