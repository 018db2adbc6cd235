//! 语句代码生成
//!
//! 每条语句产生一段不带外层缩进的文本，块由 [`lower_block`] 统一缩进。

use crate::frontend::parser::ast::{BinOp, Expr, ExprKind, Stmt, StmtKind};
use crate::middle::codegen::expr::{lower_expr, lower_exprs};
use crate::middle::codegen::tables::{self, is_primitive};
use crate::middle::codegen::types::resolve_type;
use crate::middle::codegen::{control, indent, LoweringError, LoweringResult};
use crate::util::span::Span;

/// 生成语句
pub fn lower_stmt(stmt: &Stmt) -> LoweringResult<String> {
    match &stmt.kind {
        StmtKind::Expr(expr) => Ok(format!("{};", lower_expr(expr)?)),
        StmtKind::Assign { targets, value } => lower_assign(targets, value, stmt.span),
        StmtKind::AnnAssign {
            target,
            annotation,
            value,
        } => lower_ann_assign(target, annotation, value.as_ref(), stmt.span),
        StmtKind::AugAssign { target, op, value } => {
            lower_aug_assign(target, *op, value, stmt.span)
        }
        StmtKind::Return(Some(value)) => Ok(format!("return {};", lower_expr(value)?)),
        StmtKind::Return(None) => Err(LoweringError::unsupported(
            "'return' without a value is not supported",
            stmt.span,
        )),
        StmtKind::Pass => Ok(String::new()),
        StmtKind::Break => Ok("break;".to_string()),
        StmtKind::Continue => Ok("continue;".to_string()),
        StmtKind::Assert { test, .. } => Ok(format!("ASSERT({});", lower_expr(test)?)),
        StmtKind::Raise { exc: None, .. } => Ok("throw;".to_string()),
        StmtKind::Raise { exc: Some(exc), .. } => Ok(format!("throw {};", lower_expr(exc)?)),
        StmtKind::If { test, body, orelse } => control::lower_if(test, body, orelse),
        StmtKind::While { test, body, orelse } => {
            control::lower_while(test, body, orelse, stmt.span)
        }
        StmtKind::For {
            target,
            iter,
            body,
            orelse,
            is_async,
        } => control::lower_for(target, iter, body, orelse, *is_async, stmt.span),
        StmtKind::Try {
            body,
            handlers,
            orelse,
            finalbody,
        } => control::lower_try(body, handlers, orelse, finalbody, stmt.span),
        StmtKind::With {
            items,
            body,
            is_async,
        } => control::lower_with(items, body, *is_async, stmt.span),
        // 嵌套定义、导入、作用域声明与 del
        _ => Err(LoweringError::unsupported_construct(stmt.span)),
    }
}

/// 生成语句块：逐条生成后整体缩进一级
pub fn lower_block(body: &[Stmt]) -> LoweringResult<String> {
    let lines = body
        .iter()
        .map(lower_stmt)
        .collect::<LoweringResult<Vec<_>>>()?;
    Ok(indent(&lines.join("\n")))
}

fn lower_assign(
    targets: &[Expr],
    value: &Expr,
    span: Span,
) -> LoweringResult<String> {
    let value = lower_expr(value)?;

    let target = match targets {
        [target] => target,
        _ => {
            return Err(LoweringError::unsupported(
                "assignments with more than one target is not yet supported",
                span,
            ))
        }
    };

    match &target.kind {
        ExprKind::Tuple(elts) => {
            let mut lines = vec![format!("auto value = {};", value)];
            for (i, elt) in elts.iter().enumerate() {
                lines.push(format!(
                    "auto {} = std::get<{}>(*value.m_tuple);",
                    lower_expr(elt)?,
                    i
                ));
            }
            Ok(lines.join("\n"))
        }
        _ => Ok(format!("{} = {};", lower_expr(target)?, value)),
    }
}

fn lower_ann_assign(
    target: &Expr,
    annotation: &Expr,
    value: Option<&Expr>,
    span: Span,
) -> LoweringResult<String> {
    let target = lower_expr(target)?;
    let value = value.ok_or_else(|| {
        LoweringError::unsupported(
            format!("variables must be initialized when declared ('{}')", target),
            span,
        )
    })?;

    match &annotation.kind {
        ExprKind::List(_) => {
            let ty = resolve_type(annotation)?;
            match &value.kind {
                ExprKind::List(elts) => {
                    Ok(format!("auto {} = {}({{{}}});", target, ty, lower_exprs(elts)?))
                }
                _ => Ok(format!("{} {} = {};", ty, target, lower_expr(value)?)),
            }
        }
        ExprKind::Name(ty) if is_primitive(ty) => {
            Ok(format!("{} {} = {};", ty, target, lower_expr(value)?))
        }
        ExprKind::Name(ty) if ty == "str" => {
            Ok(format!("String {}({});", target, lower_expr(value)?))
        }
        _ => Ok(format!(
            "auto {} = {}({});",
            target,
            resolve_type(annotation)?,
            lower_expr(value)?
        )),
    }
}

fn lower_aug_assign(
    target: &Expr,
    op: BinOp,
    value: &Expr,
    span: Span,
) -> LoweringResult<String> {
    let target = lower_expr(target)?;
    let value = lower_expr(value)?;
    if op == BinOp::Pow {
        return Ok(format!("{0} = ipow({0}, {1});", target, value));
    }
    let token =
        tables::binary_operator(op).ok_or_else(|| LoweringError::unsupported_construct(span))?;
    Ok(format!("{} {}= {};", target, token, value))
}
