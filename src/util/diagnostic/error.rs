//! 诊断数据结构
//!
//! `Diagnostic` 在出错位置产生，只在顶层渲染一次

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::span::Span;

/// 诊断类别，渲染在最后一行的前缀
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// 词法或语法错误
    SyntaxError,
    /// 可解析但无法翻译的结构
    LanguageError,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            DiagnosticKind::SyntaxError => write!(f, "SyntaxError"),
            DiagnosticKind::LanguageError => write!(f, "LanguageError"),
        }
    }
}

/// 诊断信息 `{message, line, column}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 类别
    pub kind: DiagnosticKind,
    /// 消息
    pub message: String,
    /// 位置信息
    pub span: Span,
}

impl Diagnostic {
    /// 创建语言错误诊断
    pub fn language(
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            kind: DiagnosticKind::LanguageError,
            message: message.into(),
            span,
        }
    }

    /// 创建语法错误诊断
    pub fn syntax(
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            kind: DiagnosticKind::SyntaxError,
            message: message.into(),
            span,
        }
    }

    /// 行号 (1-indexed)
    pub fn line(&self) -> usize {
        self.span.start.line
    }

    /// 列号 (1-indexed)
    pub fn column(&self) -> usize {
        self.span.start.column
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "{}:{}: {}: {}",
            self.line(),
            self.column(),
            self.kind,
            self.message
        )
    }
}

impl std::error::Error for Diagnostic {}
