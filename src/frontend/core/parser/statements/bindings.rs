//! Assignment and binding statements
//! Handles expression statements, `=`, augmented and annotated assignment,
//! `del`, `global` and `nonlocal`.

use crate::frontend::core::lexer::tokens::*;
use crate::frontend::core::parser::ast::*;
use crate::frontend::core::parser::pratt::{describe, BP_LOWEST, BP_TARGET};
use crate::frontend::core::parser::ParserState;
use crate::util::span::Span;

/// Expression statement, or any assignment starting with an expression
pub fn parse_expr_stmt(
    state: &mut ParserState<'_>,
    span: Span,
) -> Option<Stmt> {
    let first = parse_assigned_value(state)?;

    if state.at(&TokenKind::Colon) {
        return parse_ann_assign(state, span, first);
    }

    if let Some(op) = augmented_op(state.current_kind()) {
        if !is_single_target(&first) {
            state.error_at(
                format!(
                    "'{}' is an illegal expression for augmented assignment",
                    describe(&first.kind)
                ),
                first.span,
            );
            return None;
        }
        state.bump(); // consume operator
        let value = parse_assigned_value(state)?;
        return Some(Stmt::new(
            StmtKind::AugAssign {
                target: first,
                op,
                value,
            },
            state.span_from(span),
        ));
    }

    if !state.at(&TokenKind::Eq) {
        return Some(Stmt::new(StmtKind::Expr(first), state.span_from(span)));
    }

    // a = b = value
    let mut targets = vec![first];
    while state.skip(&TokenKind::Eq) {
        targets.push(parse_assigned_value(state)?);
    }
    let value = targets.pop()?;
    for target in &targets {
        state.check_assign_target(target)?;
    }

    Some(Stmt::new(
        StmtKind::Assign { targets, value },
        state.span_from(span),
    ))
}

/// `target: annotation [= value]`
fn parse_ann_assign(
    state: &mut ParserState<'_>,
    span: Span,
    target: Expr,
) -> Option<Stmt> {
    if !is_single_target(&target) {
        state.error_at(
            format!("illegal target for annotation: {}", describe(&target.kind)),
            target.span,
        );
        return None;
    }
    state.bump(); // consume ':'

    let annotation = state.parse_expression(BP_LOWEST)?;
    let value = if state.skip(&TokenKind::Eq) {
        Some(parse_assigned_value(state)?)
    } else {
        None
    };

    Some(Stmt::new(
        StmtKind::AnnAssign {
            target,
            annotation,
            value,
        },
        state.span_from(span),
    ))
}

/// Right hand side of an assignment: a yield or a (possibly bare) tuple
fn parse_assigned_value(state: &mut ParserState<'_>) -> Option<Expr> {
    if state.at(&TokenKind::KwYield) {
        state.parse_expression(BP_LOWEST)
    } else {
        state.parse_expression_list(BP_LOWEST)
    }
}

fn is_single_target(expr: &Expr) -> bool {
    matches!(
        expr.kind,
        ExprKind::Name(_) | ExprKind::Attribute { .. } | ExprKind::Subscript { .. }
    )
}

/// Operator of an augmented assignment token
fn augmented_op(kind: &TokenKind) -> Option<BinOp> {
    let op = match kind {
        TokenKind::PlusEq => BinOp::Add,
        TokenKind::MinusEq => BinOp::Sub,
        TokenKind::StarEq => BinOp::Mult,
        TokenKind::AtEq => BinOp::MatMult,
        TokenKind::SlashEq => BinOp::Div,
        TokenKind::DoubleSlashEq => BinOp::FloorDiv,
        TokenKind::PercentEq => BinOp::Mod,
        TokenKind::DoubleStarEq => BinOp::Pow,
        TokenKind::LShiftEq => BinOp::LShift,
        TokenKind::RShiftEq => BinOp::RShift,
        TokenKind::PipeEq => BinOp::BitOr,
        TokenKind::CaretEq => BinOp::BitXor,
        TokenKind::AmpEq => BinOp::BitAnd,
        _ => return None,
    };
    Some(op)
}

/// `del a, b[0]`
pub fn parse_del_stmt(
    state: &mut ParserState<'_>,
    span: Span,
) -> Option<Stmt> {
    state.bump(); // consume 'del'

    let mut targets = Vec::new();
    loop {
        let target = state.parse_expression(BP_TARGET)?;
        state.check_assign_target(&target)?;
        targets.push(target);
        if !state.skip(&TokenKind::Comma) || super::at_line_end(state) {
            break;
        }
    }

    Some(Stmt::new(StmtKind::Delete(targets), state.span_from(span)))
}

/// `global a, b` or `nonlocal a, b`
pub fn parse_scope_stmt(
    state: &mut ParserState<'_>,
    span: Span,
) -> Option<Stmt> {
    let is_global = state.at(&TokenKind::KwGlobal);
    state.bump(); // consume keyword

    let mut names = vec![state.expect_identifier()?];
    while state.skip(&TokenKind::Comma) {
        names.push(state.expect_identifier()?);
    }

    let kind = if is_global {
        StmtKind::Global(names)
    } else {
        StmtKind::Nonlocal(names)
    };
    Some(Stmt::new(kind, state.span_from(span)))
}
