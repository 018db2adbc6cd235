//! 代码生成器
//!
//! 将语法树翻译为依赖 `mys.hpp` 运行时头文件的 C++ 源码。
//! 核心设计原则：
//! 1. 每个节点产生恰好一段文本，或返回错误
//! 2. 缩进在输出时计算，不保存在节点上
//! 3. 前向声明按顶层函数的定义顺序登记，与调用顺序无关
//!
//! ## 模块划分
//!
//! - [`tables`]: 运算符表与字面量
//! - [`expr`]: 表达式
//! - [`types`]: 类型标注解析与参数传递约定
//! - [`stmt`] / [`control`]: 语句与控制流
//! - [`decl`]: 模块、类、函数与方法

pub mod control;
pub mod decl;
pub mod expr;
pub mod stmt;
pub mod tables;
pub mod types;

#[cfg(test)]
mod tests;

use thiserror::Error;
use tracing::debug;

use crate::frontend::parser::ast::Module;
use crate::util::diagnostic::Diagnostic;
use crate::util::span::Span;

/// 模块前导
pub const PREAMBLE: &str = "#include \"mys.hpp\"";

/// 代码生成错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoweringError {
    /// 不支持的结构，带位置
    #[error("{}", .0.message)]
    Unsupported(Diagnostic),

    /// 配置错误，不带位置
    #[error("{0}")]
    Config(String),
}

impl LoweringError {
    /// 指定消息的不支持结构错误
    pub fn unsupported(
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        LoweringError::Unsupported(Diagnostic::language(message, span))
    }

    /// 没有翻译规则的节点
    pub fn unsupported_construct(span: Span) -> Self {
        Self::unsupported("unsupported language construct", span)
    }

    /// 配置错误
    pub fn config(message: impl Into<String>) -> Self {
        LoweringError::Config(message.into())
    }
}

/// 代码生成结果
pub type LoweringResult<T> = Result<T, LoweringError>;

/// 单个模块的翻译器
///
/// 持有前向声明表；`translate` 按值消费翻译器，一个实例只翻译一个模块。
#[derive(Debug, Default)]
pub struct ModuleTranslator {
    /// 前向声明（`"<ret> <name>(<params>);"`），按发现顺序
    forward_declarations: Vec<String>,
}

impl ModuleTranslator {
    /// 创建新的翻译器
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// 翻译整个模块
    ///
    /// 输出为前导、全部前向声明、全部顶层声明，以空行分隔，末尾带换行。
    pub fn translate(
        mut self,
        module: &Module,
    ) -> LoweringResult<String> {
        debug!("Translating module with {} statements", module.body.len());

        let mut bodies = Vec::with_capacity(module.body.len());
        for stmt in &module.body {
            bodies.push(self.lower_module_stmt(stmt)?);
        }

        debug!(
            "Emitted {} declarations, {} forward declarations",
            bodies.len(),
            self.forward_declarations.len()
        );

        let mut parts = Vec::with_capacity(1 + self.forward_declarations.len() + bodies.len());
        parts.push(PREAMBLE.to_string());
        parts.append(&mut self.forward_declarations);
        parts.append(&mut bodies);

        Ok(parts.join("\n\n") + "\n")
    }
}

/// 每个非空行缩进四个空格，空行被丢弃
pub fn indent(text: &str) -> String {
    text.lines()
        .filter(|line| !line.is_empty())
        .map(|line| format!("    {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `indent` 的逆操作：去掉每个非空行开头的四个空格
pub fn dedent(text: &str) -> String {
    text.lines()
        .filter(|line| !line.is_empty())
        .map(|line| line.strip_prefix("    ").unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}
