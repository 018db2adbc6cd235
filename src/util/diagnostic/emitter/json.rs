//! JSON 诊断渲染器
//!
//! 提供符合 Language Server Protocol (LSP) 规范的 JSON 输出

use serde::{Deserialize, Serialize};
use serde_json::to_string_pretty;

use crate::util::diagnostic::{Diagnostic, DiagnosticKind};
use crate::util::span::Span;

/// LSP 位置范围
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LspRange {
    pub start: LspPosition,
    pub end: LspPosition,
}

/// LSP 位置 (0-indexed)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LspPosition {
    pub line: u32,
    pub character: u32,
}

/// LSP 诊断结构
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LspDiagnostic {
    /// 源文件
    pub file: String,
    /// 诊断范围
    pub range: LspRange,
    /// 严重级别，固定为 1 (Error)
    pub severity: u8,
    /// 错误类别
    pub code: DiagnosticKind,
    /// 错误代码来源
    pub source: String,
    /// 诊断消息
    pub message: String,
}

/// JSON 诊断渲染器
#[derive(Debug, Clone)]
pub struct JsonEmitter;

impl JsonEmitter {
    /// 渲染诊断为 JSON 字符串
    pub fn render(
        diagnostic: &Diagnostic,
        file: &str,
    ) -> String {
        let lsp_diagnostic = Self::to_lsp_diagnostic(diagnostic, file);
        to_string_pretty(&lsp_diagnostic).unwrap_or_else(|_| "{}".to_string())
    }

    /// 转换为 LSP 诊断结构
    pub fn to_lsp_diagnostic(
        diagnostic: &Diagnostic,
        file: &str,
    ) -> LspDiagnostic {
        LspDiagnostic {
            file: file.to_string(),
            range: Self::span_to_range(&diagnostic.span),
            severity: 1,
            code: diagnostic.kind,
            source: "mysc".to_string(),
            message: diagnostic.message.clone(),
        }
    }

    /// 转换 Span 到 LSP Range
    fn span_to_range(span: &Span) -> LspRange {
        let convert = |line: usize, column: usize| LspPosition {
            line: line.saturating_sub(1) as u32,
            character: column.saturating_sub(1) as u32,
        };
        LspRange {
            start: convert(span.start.line, span.start.column),
            end: convert(span.end.line, span.end.column),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::span::Position;

    #[test]
    fn test_render_single_diagnostic() {
        let span = Span::new(Position::new(1, 5), Position::new(1, 8));
        let diagnostic = Diagnostic::language("'...' is not yet supported", span);

        let json = JsonEmitter::render(&diagnostic, "a.mys");

        let parsed: LspDiagnostic = serde_json::from_str(&json).expect("Valid JSON");
        assert_eq!(parsed.code, DiagnosticKind::LanguageError);
        assert_eq!(parsed.file, "a.mys");
        assert_eq!(parsed.range.start, LspPosition { line: 0, character: 4 });
        assert_eq!(parsed.message, "'...' is not yet supported");
    }

    #[test]
    fn test_dummy_span_clamps_to_origin() {
        let diagnostic = Diagnostic::syntax("unexpected end of file", Span::dummy());

        let lsp = JsonEmitter::to_lsp_diagnostic(&diagnostic, "a.mys");

        assert_eq!(lsp.range.start, LspPosition { line: 0, character: 0 });
        assert_eq!(lsp.code, DiagnosticKind::SyntaxError);
    }
}
