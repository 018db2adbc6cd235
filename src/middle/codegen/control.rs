//! 控制流代码生成
//!
//! if / while / for / try / with 的翻译。`else` 子句只在 `if` 上受支持；
//! `finally` 通过捕获全部异常后重新抛出实现，因此其文本出现两次。

use crate::frontend::parser::ast::{ExceptHandler, Expr, ExprKind, Stmt, WithItem};
use crate::middle::codegen::expr::{lower_expr, lower_exprs};
use crate::middle::codegen::stmt::lower_block;
use crate::middle::codegen::{dedent, indent, LoweringError, LoweringResult};
use crate::util::span::Span;

/// `if (c) { ... } else { ... }`；空的 else 块省略
pub fn lower_if(
    test: &Expr,
    body: &[Stmt],
    orelse: &[Stmt],
) -> LoweringResult<String> {
    let mut code = vec![format!("if ({}) {{", lower_expr(test)?), lower_block(body)?];
    let orelse = lower_block(orelse)?;

    if orelse.is_empty() {
        code.push("}".to_string());
    } else {
        code.push("} else {".to_string());
        code.push(orelse);
        code.push("}".to_string());
    }

    Ok(code.join("\n"))
}

/// `while (c) { ... }`
pub fn lower_while(
    test: &Expr,
    body: &[Stmt],
    orelse: &[Stmt],
    span: Span,
) -> LoweringResult<String> {
    if !orelse.is_empty() {
        return Err(LoweringError::unsupported_construct(span));
    }

    Ok([
        format!("while ({}) {{", lower_expr(test)?),
        lower_block(body)?,
        "}".to_string(),
    ]
    .join("\n"))
}

/// `for (auto x: xs) { ... }`；元组目标使用结构化绑定
pub fn lower_for(
    target: &Expr,
    iter: &Expr,
    body: &[Stmt],
    orelse: &[Stmt],
    is_async: bool,
    span: Span,
) -> LoweringResult<String> {
    if is_async || !orelse.is_empty() {
        return Err(LoweringError::unsupported_construct(span));
    }

    let var = match &target.kind {
        ExprKind::Tuple(elts) => format!("[{}]", lower_exprs(elts)?),
        _ => lower_expr(target)?,
    };

    Ok([
        format!("for (auto {}: {}) {{", var, lower_expr(iter)?),
        lower_block(body)?,
        "}".to_string(),
    ]
    .join("\n"))
}

/// try / except / finally
pub fn lower_try(
    body: &[Stmt],
    handlers: &[ExceptHandler],
    orelse: &[Stmt],
    finalbody: &[Stmt],
    span: Span,
) -> LoweringResult<String> {
    if !orelse.is_empty() {
        return Err(LoweringError::unsupported_construct(span));
    }

    let body = lower_block(body)?;
    let handlers = handlers
        .iter()
        .map(lower_handler)
        .collect::<LoweringResult<Vec<_>>>()?;

    let code = if handlers.is_empty() {
        dedent(&body)
    } else {
        ["try {".to_string(), body, handlers.join("\n"), "}".to_string()].join("\n")
    };

    let finalbody = lower_block(finalbody)?;
    if finalbody.is_empty() {
        return Ok(code);
    }

    Ok([
        "try {".to_string(),
        indent(&code),
        finalbody.clone(),
        "} catch (...) {".to_string(),
        finalbody,
        indent("throw;"),
        "}".to_string(),
    ]
    .join("\n"))
}

/// `} catch (T& name) {` 后接处理块
fn lower_handler(handler: &ExceptHandler) -> LoweringResult<String> {
    let exception = match &handler.type_ {
        Some(type_) => lower_expr(type_)?,
        None => "std::exception".to_string(),
    };
    let name = handler
        .name
        .as_ref()
        .map_or("e", |name| name.value.as_str());

    Ok(format!(
        "}} catch ({}& {}) {{\n{}",
        exception,
        name,
        lower_block(&handler.body)?
    ))
}

/// `with e as n:` 翻译为带局部变量的作用域块
pub fn lower_with(
    items: &[WithItem],
    body: &[Stmt],
    is_async: bool,
    span: Span,
) -> LoweringResult<String> {
    if is_async {
        return Err(LoweringError::unsupported_construct(span));
    }

    let mut bindings = Vec::with_capacity(items.len());
    for item in items {
        let target = item
            .target
            .as_ref()
            .ok_or_else(|| LoweringError::unsupported_construct(item.context.span))?;
        bindings.push(format!(
            "auto {} = {};",
            lower_expr(target)?,
            lower_expr(&item.context)?
        ));
    }

    Ok([
        "{".to_string(),
        indent(&bindings.join("\n")),
        lower_block(body)?,
        "}".to_string(),
    ]
    .join("\n"))
}
