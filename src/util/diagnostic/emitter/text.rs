//! 诊断渲染器
//!
//! 四行布局：
//!
//! ```text
//!   File "<file>", line <line>
//!     <source line>
//!     <caret>
//! LanguageError: <message>
//! ```

use crate::util::diagnostic::Diagnostic;
use crate::util::span::SourceFile;

/// 渲染器配置
#[derive(Debug, Clone)]
pub struct EmitterConfig {
    /// 是否启用颜色输出
    pub use_colors: bool,
    /// 指示字符 (默认: "^")
    pub indicator: char,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            use_colors: false,
            indicator: '^',
        }
    }
}

/// 文本诊断渲染器
#[derive(Debug, Clone, Default)]
pub struct TextEmitter {
    config: EmitterConfig,
}

impl TextEmitter {
    /// 创建新的文本渲染器
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用自定义配置创建渲染器
    pub fn with_config(config: EmitterConfig) -> Self {
        Self { config }
    }

    /// 渲染诊断到指定源码文件
    pub fn render(
        &self,
        diagnostic: &Diagnostic,
        source_file: &SourceFile,
    ) -> String {
        let line = diagnostic.line();
        let source_line = source_file.line_text(line).unwrap_or("");
        let marker = format!(
            "{}{}",
            " ".repeat(diagnostic.column().saturating_sub(1)),
            self.config.indicator
        );

        format!(
            "  File \"{}\", line {}\n    {}\n    {}\n{}: {}",
            source_file.name,
            line,
            source_line,
            self.color("error", &marker),
            self.color("bold", &diagnostic.kind.to_string()),
            diagnostic.message
        )
    }

    /// 简单的颜色渲染
    fn color(
        &self,
        style: &str,
        text: &str,
    ) -> String {
        if !self.config.use_colors {
            return text.to_string();
        }

        match style {
            "error" => format!("\x1b[31m{}\x1b[0m", text),
            "bold" => format!("\x1b[1m{}\x1b[0m", text),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::span::{Position, Span};

    /// 移除 ANSI 转义序列
    fn strip_ansi(s: &str) -> String {
        s.replace("\x1b[31m", "")
            .replace("\x1b[1m", "")
            .replace("\x1b[0m", "")
    }

    fn at(
        line: usize,
        column: usize,
    ) -> Span {
        Span::new(Position::new(line, column), Position::new(line, column + 1))
    }

    #[test]
    fn test_render_four_lines() {
        let source = SourceFile::new("foo.mys", "def main():\n    x = lambda: 1\n");
        let diagnostic = Diagnostic::language("lambda functions are not supported", at(2, 9));

        let output = TextEmitter::new().render(&diagnostic, &source);

        assert_eq!(
            output,
            "  File \"foo.mys\", line 2\n\
             \x20       x = lambda: 1\n\
             \x20           ^\n\
             LanguageError: lambda functions are not supported"
        );
    }

    #[test]
    fn test_render_syntax_error_label() {
        let source = SourceFile::new("<unknown>", "if x\n");
        let diagnostic = Diagnostic::syntax("expected ':'", at(1, 5));

        let output = TextEmitter::new().render(&diagnostic, &source);

        assert!(output.ends_with("SyntaxError: expected ':'"), "{}", output);
        assert!(output.contains("    if x\n        ^\n"), "{}", output);
    }

    #[test]
    fn test_line_past_end_renders_empty_source() {
        let source = SourceFile::new("a.mys", "");
        let diagnostic = Diagnostic::language("boom", at(7, 1));

        let output = TextEmitter::new().render(&diagnostic, &source);

        assert!(output.starts_with("  File \"a.mys\", line 7\n    \n    ^\n"));
    }

    #[test]
    fn test_colors() {
        let source = SourceFile::new("a.mys", "pass");
        let diagnostic = Diagnostic::language("boom", at(1, 1));
        let config = EmitterConfig {
            use_colors: true,
            ..Default::default()
        };

        let colored = TextEmitter::with_config(config).render(&diagnostic, &source);
        let plain = TextEmitter::new().render(&diagnostic, &source);

        assert!(colored.contains("\x1b[31m"));
        assert_eq!(strip_ansi(&colored), plain);
    }
}
