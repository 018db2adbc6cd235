//! 表达式代码生成
//!
//! 将表达式节点转换为 C++ 表达式文本。

use crate::frontend::parser::ast::{BinOp, CmpOp, Constant, Expr, ExprKind, Keyword};
use crate::middle::codegen::tables::{self, EMBEDDED_SENTINEL};
use crate::middle::codegen::{LoweringError, LoweringResult};
use crate::util::span::Span;

/// 生成表达式
pub fn lower_expr(expr: &Expr) -> LoweringResult<String> {
    match &expr.kind {
        ExprKind::Name(name) => Ok(name.clone()),
        ExprKind::Constant(constant) => lower_constant(constant, expr.span),
        ExprKind::BinOp { left, op, right } => {
            let left = lower_expr(left)?;
            let right = lower_expr(right)?;
            if *op == BinOp::Pow {
                return Ok(format!("ipow({}, {})", left, right));
            }
            let token = tables::binary_operator(*op)
                .ok_or_else(|| LoweringError::unsupported_construct(expr.span))?;
            Ok(format!("({} {} {})", left, token, right))
        }
        ExprKind::BoolOp { op, values } => {
            let token = tables::bool_operator(*op);
            let mut values = values.iter();
            let first = match values.next() {
                Some(first) => lower_expr(first)?,
                None => return Err(LoweringError::unsupported_construct(expr.span)),
            };
            values.try_fold(first, |acc, value| {
                Ok(format!("({} {} {})", acc, token, lower_expr(value)?))
            })
        }
        ExprKind::UnaryOp { op, operand } => {
            let token = tables::unary_operator(*op)
                .ok_or_else(|| LoweringError::unsupported_construct(expr.span))?;
            Ok(format!("{}{}", token, lower_expr(operand)?))
        }
        ExprKind::Compare {
            left,
            ops,
            comparators,
        } => lower_compare(left, ops, comparators, expr.span),
        ExprKind::Call {
            func,
            args,
            keywords,
        } => lower_call(func, args, keywords),
        ExprKind::Attribute { value, attr } => {
            let value = lower_expr(value)?;
            if value == "self" {
                Ok(format!("this->{}", attr.value))
            } else {
                Ok(format!("{}.{}", value, attr.value))
            }
        }
        // Only the base is kept; the index is not translated
        ExprKind::Subscript { value, .. } => lower_expr(value),
        ExprKind::Tuple(elts) => Ok(format!("Tuple<todo>({{{}}})", lower_exprs(elts)?)),
        ExprKind::List(elts) => Ok(format!("List<todo>({{{}}})", lower_exprs(elts)?)),
        ExprKind::Dict { .. } => Ok("MakeDict<todo>({})".to_string()),
        ExprKind::Lambda { .. } => Err(LoweringError::unsupported(
            "lambda functions are not supported",
            expr.span,
        )),
        _ => Err(LoweringError::unsupported_construct(expr.span)),
    }
}

/// 逗号分隔的表达式列表
pub fn lower_exprs(exprs: &[Expr]) -> LoweringResult<String> {
    let lowered = exprs
        .iter()
        .map(lower_expr)
        .collect::<LoweringResult<Vec<_>>>()?;
    Ok(lowered.join(", "))
}

fn lower_constant(
    constant: &Constant,
    span: Span,
) -> LoweringResult<String> {
    match constant {
        Constant::Str(value) => Ok(lower_string(value)),
        Constant::Bool(value) => Ok(if *value { "true" } else { "false" }.to_string()),
        Constant::Int(value) => Ok(value.to_string()),
        Constant::Float(value) => Ok(tables::float_literal(*value)),
        Constant::None => Ok("None".to_string()),
        Constant::Bytes(_) => Err(LoweringError::unsupported(
            "bytes() is not yet supported",
            span,
        )),
        Constant::Ellipsis => Err(LoweringError::unsupported(
            "'...' is not yet supported",
            span,
        )),
    }
}

/// 字符串字面量，或以哨兵开头的内嵌 C++ 代码
fn lower_string(value: &str) -> String {
    match value.strip_prefix(EMBEDDED_SENTINEL) {
        Some(code) => format!(
            "/* mys-embedded-c++ start */\n\n{}\n\n/* mys-embedded-c++ stop */",
            dedent_common(code).trim()
        ),
        None => tables::quote_string(value),
    }
}

/// 去掉所有非空白行共同的前导空白；只含空白的行变为空行
fn dedent_common(text: &str) -> String {
    let margin = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| &line[..line.len() - line.trim_start().len()])
        .fold(None, |common: Option<&str>, prefix| match common {
            None => Some(prefix),
            Some(common) => {
                let shared = common
                    .char_indices()
                    .zip(prefix.chars())
                    .find(|((_, a), b)| a != b)
                    .map(|((index, _), _)| index)
                    .unwrap_or_else(|| common.len().min(prefix.len()));
                Some(&common[..shared])
            }
        })
        .unwrap_or("");

    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                ""
            } else {
                line.strip_prefix(margin).unwrap_or(line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// 比较；链式比较不支持
fn lower_compare(
    left: &Expr,
    ops: &[CmpOp],
    comparators: &[Expr],
    span: Span,
) -> LoweringResult<String> {
    let (op, right) = match (ops, comparators) {
        ([op], [right]) => (*op, right),
        _ => return Err(LoweringError::unsupported_construct(span)),
    };

    let left = lower_expr(left)?;
    let right = lower_expr(right)?;

    match op {
        CmpOp::In => Ok(format!("contains({}, {})", left, right)),
        CmpOp::NotIn => Ok(format!("!contains({}, {})", left, right)),
        op => {
            let token =
                tables::compare_operator(op).ok_or_else(|| LoweringError::unsupported_construct(span))?;
            Ok(format!("{} {} {}", left, token, right))
        }
    }
}

/// 函数调用；`print` 改写为输出流
fn lower_call(
    func: &Expr,
    args: &[Expr],
    keywords: &[Keyword],
) -> LoweringResult<String> {
    let function_name = lower_expr(func)?;
    let args = args
        .iter()
        .map(lower_expr)
        .collect::<LoweringResult<Vec<_>>>()?;

    if let Some(keyword) = keywords.first() {
        return Err(LoweringError::unsupported_construct(keyword.span));
    }

    if function_name != "print" {
        return Ok(format!("{}({})", function_name, args.join(", ")));
    }

    let code = match args.split_first() {
        None => "std::cout << std::endl".to_string(),
        Some((first, [])) => format!("std::cout << {} << std::endl", first),
        Some((first, rest)) => format!(
            "std::cout << {} << \" \" << {} << std::endl",
            first,
            rest.join(" << \" \" << ")
        ),
    };
    Ok(code)
}
