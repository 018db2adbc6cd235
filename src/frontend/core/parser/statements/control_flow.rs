//! Control flow statement parsing
//! Handles if/elif/else, loops, try, with, return, raise and assert

use super::parse_block;
use crate::frontend::core::lexer::tokens::*;
use crate::frontend::core::parser::ast::*;
use crate::frontend::core::parser::pratt::{BP_LOWEST, BP_TARGET};
use crate::frontend::core::parser::ParserState;
use crate::util::span::Span;

/// `pass`, `break` or `continue`
pub fn parse_keyword_stmt(
    state: &mut ParserState<'_>,
    span: Span,
    kind: StmtKind,
) -> Option<Stmt> {
    state.bump(); // consume keyword
    Some(Stmt::new(kind, span))
}

/// Parse return statement: `return [expr]`
pub fn parse_return_stmt(
    state: &mut ParserState<'_>,
    span: Span,
) -> Option<Stmt> {
    state.bump(); // consume 'return'

    let value = if state.current_kind().starts_expression() {
        Some(state.parse_expression_list(BP_LOWEST)?)
    } else {
        None
    };

    Some(Stmt::new(StmtKind::Return(value), state.span_from(span)))
}

/// `raise [exc [from cause]]`
pub fn parse_raise_stmt(
    state: &mut ParserState<'_>,
    span: Span,
) -> Option<Stmt> {
    state.bump(); // consume 'raise'

    let mut cause = None;
    let exc = if state.current_kind().starts_expression() {
        let exc = state.parse_expression(BP_LOWEST)?;
        if state.skip(&TokenKind::KwFrom) {
            cause = Some(state.parse_expression(BP_LOWEST)?);
        }
        Some(exc)
    } else {
        None
    };

    Some(Stmt::new(
        StmtKind::Raise { exc, cause },
        state.span_from(span),
    ))
}

/// `assert test [, msg]`
pub fn parse_assert_stmt(
    state: &mut ParserState<'_>,
    span: Span,
) -> Option<Stmt> {
    state.bump(); // consume 'assert'

    let test = state.parse_expression(BP_LOWEST)?;
    let msg = if state.skip(&TokenKind::Comma) {
        Some(state.parse_expression(BP_LOWEST)?)
    } else {
        None
    };

    Some(Stmt::new(
        StmtKind::Assert { test, msg },
        state.span_from(span),
    ))
}

/// Parse if statement; `elif` nests another `If` in the else branch
pub fn parse_if_stmt(
    state: &mut ParserState<'_>,
    span: Span,
) -> Option<Stmt> {
    state.bump(); // consume 'if' or 'elif'

    let test = state.parse_expression(BP_LOWEST)?;
    let body = parse_block(state)?;

    let orelse = if state.at(&TokenKind::KwElif) {
        let elif_span = state.span();
        vec![parse_if_stmt(state, elif_span)?]
    } else if state.skip(&TokenKind::KwElse) {
        parse_block(state)?
    } else {
        Vec::new()
    };

    Some(Stmt::new(
        StmtKind::If { test, body, orelse },
        state.span_from(span),
    ))
}

/// Parse while loop: `while test: body [else: orelse]`
pub fn parse_while_stmt(
    state: &mut ParserState<'_>,
    span: Span,
) -> Option<Stmt> {
    state.bump(); // consume 'while'

    let test = state.parse_expression(BP_LOWEST)?;
    let body = parse_block(state)?;
    let orelse = parse_else_block(state)?;

    Some(Stmt::new(
        StmtKind::While { test, body, orelse },
        state.span_from(span),
    ))
}

/// Parse for loop: `for target in iter: body [else: orelse]`
pub fn parse_for_stmt(
    state: &mut ParserState<'_>,
    span: Span,
    is_async: bool,
) -> Option<Stmt> {
    state.bump(); // consume 'for'

    let target = state.parse_expression_list(BP_TARGET)?;
    state.check_assign_target(&target)?;
    state.expect(&TokenKind::KwIn)?;
    let iter = state.parse_expression_list(BP_LOWEST)?;
    let body = parse_block(state)?;
    let orelse = parse_else_block(state)?;

    Some(Stmt::new(
        StmtKind::For {
            target,
            iter,
            body,
            orelse,
            is_async,
        },
        state.span_from(span),
    ))
}

fn parse_else_block(state: &mut ParserState<'_>) -> Option<Vec<Stmt>> {
    if state.skip(&TokenKind::KwElse) {
        parse_block(state)
    } else {
        Some(Vec::new())
    }
}

/// `try` with handlers, `else` and `finally`
pub fn parse_try_stmt(
    state: &mut ParserState<'_>,
    span: Span,
) -> Option<Stmt> {
    state.bump(); // consume 'try'
    let body = parse_block(state)?;

    let mut handlers = Vec::new();
    while state.at(&TokenKind::KwExcept) {
        handlers.push(parse_except_handler(state)?);
    }

    let orelse = if !handlers.is_empty() && state.skip(&TokenKind::KwElse) {
        parse_block(state)?
    } else {
        Vec::new()
    };

    let finalbody = if state.skip(&TokenKind::KwFinally) {
        parse_block(state)?
    } else {
        Vec::new()
    };

    if handlers.is_empty() && finalbody.is_empty() {
        state.error_expected("'except' or 'finally' block");
        return None;
    }

    Some(Stmt::new(
        StmtKind::Try {
            body,
            handlers,
            orelse,
            finalbody,
        },
        state.span_from(span),
    ))
}

/// `except [T [as name]]: body`
fn parse_except_handler(state: &mut ParserState<'_>) -> Option<ExceptHandler> {
    let span = state.span();
    state.bump(); // consume 'except'

    let mut name = None;
    let type_ = if state.at(&TokenKind::Colon) {
        None
    } else {
        let type_ = state.parse_expression_list(BP_LOWEST)?;
        if state.skip(&TokenKind::KwAs) {
            name = Some(state.expect_identifier()?);
        }
        Some(type_)
    };

    let body = parse_block(state)?;
    Some(ExceptHandler {
        type_,
        name,
        body,
        span,
    })
}

/// `with a as b, c: body`
pub fn parse_with_stmt(
    state: &mut ParserState<'_>,
    span: Span,
    is_async: bool,
) -> Option<Stmt> {
    state.bump(); // consume 'with'

    let mut items = Vec::new();
    loop {
        let context = state.parse_expression(BP_LOWEST)?;
        let target = if state.skip(&TokenKind::KwAs) {
            let target = state.parse_expression(BP_TARGET)?;
            state.check_assign_target(&target)?;
            Some(target)
        } else {
            None
        };
        items.push(WithItem { context, target });

        if !state.skip(&TokenKind::Comma) {
            break;
        }
    }

    let body = parse_block(state)?;
    Some(Stmt::new(
        StmtKind::With {
            items,
            body,
            is_async,
        },
        state.span_from(span),
    ))
}
