//! Statement parsing modules
//! Contains specialized modules for different statement types

pub mod bindings;
pub mod control_flow;
pub mod declarations;

// Re-export commonly used items
pub use bindings::*;
pub use control_flow::*;
pub use declarations::*;

use crate::frontend::core::lexer::tokens::*;
use crate::frontend::core::parser::ast::*;
use crate::frontend::core::parser::ParserState;

/// Statement parsing trait
pub trait StatementParser {
    /// Parse one logical line, or one compound statement
    ///
    /// A line of `;` separated simple statements yields several statements.
    fn parse_statement(&mut self) -> Option<Vec<Stmt>>;
}

impl StatementParser for ParserState<'_> {
    fn parse_statement(&mut self) -> Option<Vec<Stmt>> {
        let start_span = self.span();

        let stmt = match self.current_kind() {
            TokenKind::Indent => {
                self.error_at("unexpected indent", start_span);
                return None;
            }
            TokenKind::KwIf => control_flow::parse_if_stmt(self, start_span),
            TokenKind::KwWhile => control_flow::parse_while_stmt(self, start_span),
            TokenKind::KwFor => control_flow::parse_for_stmt(self, start_span, false),
            TokenKind::KwTry => control_flow::parse_try_stmt(self, start_span),
            TokenKind::KwWith => control_flow::parse_with_stmt(self, start_span, false),
            TokenKind::KwDef => {
                declarations::parse_function_def(self, start_span, Vec::new(), false)
            }
            TokenKind::KwClass => declarations::parse_class_def(self, start_span, Vec::new()),
            TokenKind::At => declarations::parse_decorated(self, start_span),
            TokenKind::KwAsync => parse_async_stmt(self, start_span),
            _ => return parse_simple_statements(self),
        };

        stmt.map(|stmt| vec![stmt])
    }
}

/// `async def`, `async for` or `async with`
fn parse_async_stmt(
    state: &mut ParserState<'_>,
    span: crate::util::span::Span,
) -> Option<Stmt> {
    state.bump(); // consume 'async'

    match state.current_kind() {
        TokenKind::KwDef => declarations::parse_function_def(state, span, Vec::new(), true),
        TokenKind::KwFor => control_flow::parse_for_stmt(state, span, true),
        TokenKind::KwWith => control_flow::parse_with_stmt(state, span, true),
        _ => {
            state.error_expected("'def', 'for' or 'with' after 'async'");
            None
        }
    }
}

/// Simple statements separated by `;`, terminated by a newline
pub fn parse_simple_statements(state: &mut ParserState<'_>) -> Option<Vec<Stmt>> {
    let mut stmts = Vec::new();

    loop {
        stmts.push(parse_small_statement(state)?);
        if !state.skip(&TokenKind::Semicolon) {
            break;
        }
        if at_line_end(state) {
            break;
        }
    }

    if !state.at_end() {
        state.expect(&TokenKind::Newline)?;
    }
    Some(stmts)
}

/// One simple statement
fn parse_small_statement(state: &mut ParserState<'_>) -> Option<Stmt> {
    let span = state.span();

    match state.current_kind() {
        TokenKind::KwPass => control_flow::parse_keyword_stmt(state, span, StmtKind::Pass),
        TokenKind::KwBreak => control_flow::parse_keyword_stmt(state, span, StmtKind::Break),
        TokenKind::KwContinue => {
            control_flow::parse_keyword_stmt(state, span, StmtKind::Continue)
        }
        TokenKind::KwReturn => control_flow::parse_return_stmt(state, span),
        TokenKind::KwRaise => control_flow::parse_raise_stmt(state, span),
        TokenKind::KwAssert => control_flow::parse_assert_stmt(state, span),
        TokenKind::KwDel => bindings::parse_del_stmt(state, span),
        TokenKind::KwGlobal | TokenKind::KwNonlocal => bindings::parse_scope_stmt(state, span),
        TokenKind::KwImport => declarations::parse_import_stmt(state, span),
        TokenKind::KwFrom => declarations::parse_from_import_stmt(state, span),
        _ => bindings::parse_expr_stmt(state, span),
    }
}

/// Parse the suite after a compound statement header
///
/// Either an indented block on the following lines or simple statements
/// on the same line as the colon.
pub fn parse_block(state: &mut ParserState<'_>) -> Option<Vec<Stmt>> {
    state.expect(&TokenKind::Colon)?;

    if !state.skip(&TokenKind::Newline) {
        return parse_simple_statements(state);
    }

    if !state.at(&TokenKind::Indent) {
        state.error_expected("an indented block");
        return None;
    }
    state.bump();

    let mut body = Vec::new();
    while !state.at(&TokenKind::Dedent) && !state.at_end() {
        if state.skip(&TokenKind::Newline) {
            continue;
        }
        body.extend(state.parse_statement()?);
    }
    state.skip(&TokenKind::Dedent);

    Some(body)
}

/// Whether the current token ends a logical line
pub fn at_line_end(state: &ParserState<'_>) -> bool {
    matches!(
        state.current_kind(),
        TokenKind::Newline | TokenKind::Eof
    )
}
