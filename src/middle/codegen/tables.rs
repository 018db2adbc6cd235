//! 字面量与运算符表
//!
//! 源语言运算符到 C++ 记号的静态映射，以及字面量的文本形式。

use std::fmt::Write;

use crate::frontend::parser::ast::{BinOp, BoolOp, CmpOp, UnaryOp};

/// 按值传递的基本类型
pub const PRIMITIVE_TYPES: [&str; 3] = ["int", "float", "bool"];

/// 内嵌 C++ 代码的字符串前缀
pub const EMBEDDED_SENTINEL: &str = "mys-embedded-c++";

/// 是否为基本类型名
pub fn is_primitive(name: &str) -> bool {
    PRIMITIVE_TYPES.contains(&name)
}

/// 二元运算符；`**` 与 `@` 没有对应记号
pub fn binary_operator(op: BinOp) -> Option<&'static str> {
    let token = match op {
        BinOp::Add => "+",
        BinOp::Sub => "-",
        BinOp::Mult => "*",
        BinOp::Div | BinOp::FloorDiv => "/",
        BinOp::Mod => "%",
        BinOp::LShift => "<<",
        BinOp::RShift => ">>",
        BinOp::BitOr => "|",
        BinOp::BitXor => "^",
        BinOp::BitAnd => "&",
        BinOp::Pow | BinOp::MatMult => return None,
    };
    Some(token)
}

/// 布尔运算符
pub fn bool_operator(op: BoolOp) -> &'static str {
    match op {
        BoolOp::And => "&&",
        BoolOp::Or => "||",
    }
}

/// 一元运算符；`~` 没有对应记号
pub fn unary_operator(op: UnaryOp) -> Option<&'static str> {
    match op {
        UnaryOp::Not => Some("!"),
        UnaryOp::UAdd => Some("+"),
        UnaryOp::USub => Some("-"),
        UnaryOp::Invert => None,
    }
}

/// 比较运算符；`in` / `not in` 改写为 `contains` 调用
pub fn compare_operator(op: CmpOp) -> Option<&'static str> {
    let token = match op {
        CmpOp::Eq | CmpOp::Is => "==",
        CmpOp::NotEq | CmpOp::IsNot => "!=",
        CmpOp::Lt => "<",
        CmpOp::LtE => "<=",
        CmpOp::Gt => ">",
        CmpOp::GtE => ">=",
        CmpOp::In | CmpOp::NotIn => return None,
    };
    Some(token)
}

/// 转义并加双引号的 C++ 字符串字面量
///
/// 控制字符按 UTF-8 字节输出三位八进制转义，其余非 ASCII 字符
/// 输出 `\uXXXX` 或 `\UXXXXXXXX`。
pub fn quote_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');

    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let mut buf = [0; 4];
                for byte in c.encode_utf8(&mut buf).bytes() {
                    let _ = write!(out, "\\{:03o}", byte);
                }
            }
            c if c.is_ascii() => out.push(c),
            c if (c as u32) <= 0xFFFF => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => {
                let _ = write!(out, "\\U{:08x}", c as u32);
            }
        }
    }

    out.push('"');
    out
}

/// 浮点字面量：最短往返十进制加 `f` 后缀
pub fn float_literal(value: f64) -> String {
    format!("{:?}f", value)
}
