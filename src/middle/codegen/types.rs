//! 类型标注解析
//!
//! 类型标注以表达式书写：裸名、`Optional[T]`、列表 `[T]`、元组 `(T1, T2)`、
//! 映射 `{K: V}`。本模块把它们翻译为 C++ 类型文本，并决定参数的传递方式。

use crate::frontend::parser::ast::{Constant, Expr, ExprKind, Param, ParamKind};
use crate::middle::codegen::tables::is_primitive;
use crate::middle::codegen::{LoweringError, LoweringResult};

/// 返回类型；缺省或 `None` 为 `void`
pub fn return_type(returns: Option<&Expr>) -> LoweringResult<String> {
    match returns {
        None => Ok("void".to_string()),
        Some(Expr {
            kind: ExprKind::Constant(Constant::None),
            ..
        }) => Ok("void".to_string()),
        Some(annotation) => resolve_type(annotation),
    }
}

/// 解析类型标注
pub fn resolve_type(annotation: &Expr) -> LoweringResult<String> {
    match &annotation.kind {
        ExprKind::Name(name) => Ok(named_type(name)),
        ExprKind::Subscript { value, slice } => {
            match (value.as_name(), slice.as_name()) {
                (Some("Optional"), Some(inner)) => {
                    Ok(format!("std::optional<{}>", named_type(inner)))
                }
                _ => Err(LoweringError::unsupported_construct(annotation.span)),
            }
        }
        ExprKind::List(elts) => match elts.as_slice() {
            [elt] => Ok(format!("List<{}>", resolve_type(elt)?)),
            _ => Err(LoweringError::unsupported(
                format!(
                    "lists must be homogeneous, found {} element types",
                    elts.len()
                ),
                annotation.span,
            )),
        },
        ExprKind::Tuple(elts) => {
            let elts = elts
                .iter()
                .map(resolve_type)
                .collect::<LoweringResult<Vec<_>>>()?;
            Ok(format!("Tuple<{}>", elts.join(", ")))
        }
        ExprKind::Dict { keys, values } => match (keys.as_slice(), values.as_slice()) {
            ([key], [value]) => {
                let key = key
                    .as_name()
                    .ok_or_else(|| LoweringError::unsupported_construct(key.span))?;
                Ok(format!("Dict<{}, {}>", named_type(key), resolve_type(value)?))
            }
            _ => Err(LoweringError::unsupported_construct(annotation.span)),
        },
        _ => Err(LoweringError::unsupported_construct(annotation.span)),
    }
}

/// 参数声明文本 `<type> <name>`
///
/// 基本类型按值传递，`str` 按 `String&`，其他具名类型按 `std::shared_ptr<T>&`，
/// 容器按其容器类型的引用传递。
pub fn param_string(
    function_name: &str,
    param: &Param,
) -> LoweringResult<String> {
    let name = &param.name.value;
    let annotation = param.annotation.as_ref().ok_or_else(|| {
        LoweringError::config(format!("{}({}) is not typed.", function_name, name))
    })?;

    if let Some(default) = &param.default {
        return Err(LoweringError::unsupported_construct(default.span));
    }
    if param.kind != ParamKind::Positional {
        return Err(LoweringError::unsupported_construct(param.span));
    }

    let ty = match &annotation.kind {
        ExprKind::Name(ty) if ty == "str" => "String&".to_string(),
        ExprKind::Name(ty) if is_primitive(ty) => ty.clone(),
        ExprKind::Name(ty) => format!("std::shared_ptr<{}>&", ty),
        ExprKind::Subscript { .. } | ExprKind::Dict { .. } => {
            format!("{}&", resolve_type(annotation)?)
        }
        ExprKind::List(elts) => match elts.as_slice() {
            [elt] => format!("List<{}>&", element_type(elt)?),
            _ => return Err(LoweringError::unsupported_construct(annotation.span)),
        },
        ExprKind::Tuple(elts) => {
            let elts = elts
                .iter()
                .map(element_type)
                .collect::<LoweringResult<Vec<_>>>()?;
            format!("Tuple<{}>&", elts.join(", "))
        }
        _ => return Err(LoweringError::unsupported_construct(annotation.span)),
    };

    Ok(format!("{} {}", ty, name))
}

fn named_type(name: &str) -> String {
    match name {
        "str" => "String".to_string(),
        name => name.to_string(),
    }
}

/// 容器参数的元素类型；用户类型包装为共享指针
fn element_type(elt: &Expr) -> LoweringResult<String> {
    match elt.as_name() {
        Some("str") => Ok("String".to_string()),
        Some(name) if is_primitive(name) => Ok(name.to_string()),
        Some(name) => Ok(format!("std::shared_ptr<{}>", name)),
        None => resolve_type(elt),
    }
}
