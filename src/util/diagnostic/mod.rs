//! 统一诊断系统
//!
//! 提供诊断数据结构和渲染
//!
//! # 模块结构
//!
//! - [`error`] - 诊断数据结构 (Diagnostic, DiagnosticKind)
//! - [`emitter`] - 文本与 JSON 渲染
//!
//! # 示例
//!
//! ```
//! use mysc::util::diagnostic::{Diagnostic, TextEmitter};
//! use mysc::util::span::{Position, SourceFile, Span};
//!
//! let source = SourceFile::new("a.mys", "x = lambda: 1");
//! let span = Span::new(Position::new(1, 5), Position::new(1, 11));
//! let diagnostic = Diagnostic::language("lambda functions are not supported", span);
//! let output = TextEmitter::new().render(&diagnostic, &source);
//! assert!(output.ends_with("LanguageError: lambda functions are not supported"));
//! ```

pub mod emitter;
pub mod error;

// 重新导出
pub use emitter::{EmitterConfig, JsonEmitter, TextEmitter};
pub use error::{Diagnostic, DiagnosticKind};
