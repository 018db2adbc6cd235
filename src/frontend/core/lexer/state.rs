//! Lexer state management
//! Handles indentation tracking, bracket nesting and keyword recognition

use crate::frontend::core::lexer::tokens::TokenKind;

/// Width a tab advances indentation to (next multiple of eight)
const TAB_WIDTH: usize = 8;

/// Outcome of comparing a new line's indentation with the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentChange {
    /// Same level as the enclosing block
    Same,
    /// One level deeper
    Indent,
    /// Closes this many blocks
    Dedent(usize),
    /// Closes blocks but lands between two recorded levels
    Inconsistent,
}

/// Lexer state management
#[derive(Debug)]
pub struct LexerState {
    indent_stack: Vec<usize>,
    brackets: Vec<char>,
}

impl LexerState {
    /// Create new lexer state
    pub fn new() -> Self {
        Self {
            indent_stack: vec![0],
            brackets: Vec::new(),
        }
    }

    /// Indentation width after consuming `c`
    pub fn indent_width(
        current: usize,
        c: char,
    ) -> usize {
        match c {
            '\t' => (current / TAB_WIDTH + 1) * TAB_WIDTH,
            '\x0c' => 0,
            _ => current + 1,
        }
    }

    /// Compare a logical line's indentation against the stack, updating it
    pub fn change_indent(
        &mut self,
        width: usize,
    ) -> IndentChange {
        let top = self.indent_stack.last().copied().unwrap_or(0);
        if width == top {
            return IndentChange::Same;
        }
        if width > top {
            self.indent_stack.push(width);
            return IndentChange::Indent;
        }

        let mut closed = 0;
        while self.indent_stack.last().copied().unwrap_or(0) > width {
            self.indent_stack.pop();
            closed += 1;
        }
        if self.indent_stack.last().copied().unwrap_or(0) != width {
            return IndentChange::Inconsistent;
        }
        IndentChange::Dedent(closed)
    }

    /// Blocks still open at end of input; resets the stack
    pub fn close_all(&mut self) -> usize {
        let open = self.indent_stack.len().saturating_sub(1);
        self.indent_stack.truncate(1);
        open
    }

    /// Enter a bracket; newlines are insignificant until it closes
    pub fn open_bracket(
        &mut self,
        c: char,
    ) {
        self.brackets.push(c);
    }

    /// Leave a bracket, returning false when it does not match the innermost one
    pub fn close_bracket(
        &mut self,
        c: char,
    ) -> bool {
        let expected = match c {
            ')' => '(',
            ']' => '[',
            '}' => '{',
            _ => return false,
        };
        if self.brackets.last() == Some(&expected) {
            self.brackets.pop();
            true
        } else {
            false
        }
    }

    /// Whether the lexer is inside (), [] or {}
    pub fn in_brackets(&self) -> bool {
        !self.brackets.is_empty()
    }

    /// Innermost bracket still open
    pub fn open_bracket_char(&self) -> Option<char> {
        self.brackets.last().copied()
    }

    /// Convert string to keyword token
    pub fn keyword_from_str(s: &str) -> Option<TokenKind> {
        match s {
            // Constants
            "False" => Some(TokenKind::KwFalse),
            "None" => Some(TokenKind::KwNone),
            "True" => Some(TokenKind::KwTrue),

            // Operators
            "and" => Some(TokenKind::KwAnd),
            "or" => Some(TokenKind::KwOr),
            "not" => Some(TokenKind::KwNot),
            "in" => Some(TokenKind::KwIn),
            "is" => Some(TokenKind::KwIs),

            // Declarations
            "def" => Some(TokenKind::KwDef),
            "class" => Some(TokenKind::KwClass),
            "lambda" => Some(TokenKind::KwLambda),
            "import" => Some(TokenKind::KwImport),
            "from" => Some(TokenKind::KwFrom),
            "as" => Some(TokenKind::KwAs),
            "global" => Some(TokenKind::KwGlobal),
            "nonlocal" => Some(TokenKind::KwNonlocal),
            "del" => Some(TokenKind::KwDel),

            // Control flow
            "if" => Some(TokenKind::KwIf),
            "elif" => Some(TokenKind::KwElif),
            "else" => Some(TokenKind::KwElse),
            "while" => Some(TokenKind::KwWhile),
            "for" => Some(TokenKind::KwFor),
            "break" => Some(TokenKind::KwBreak),
            "continue" => Some(TokenKind::KwContinue),
            "pass" => Some(TokenKind::KwPass),
            "return" => Some(TokenKind::KwReturn),
            "try" => Some(TokenKind::KwTry),
            "except" => Some(TokenKind::KwExcept),
            "finally" => Some(TokenKind::KwFinally),
            "raise" => Some(TokenKind::KwRaise),
            "with" => Some(TokenKind::KwWith),
            "assert" => Some(TokenKind::KwAssert),
            "yield" => Some(TokenKind::KwYield),

            // Coroutines
            "async" => Some(TokenKind::KwAsync),
            "await" => Some(TokenKind::KwAwait),

            _ => None,
        }
    }
}

impl Default for LexerState {
    fn default() -> Self {
        Self::new()
    }
}
