//! 代码生成测试

mod control;
mod expr;

use crate::frontend::parse;
use crate::frontend::parser::ast::{Module, Stmt};
use crate::middle::codegen::stmt::lower_stmt;
use crate::middle::codegen::{LoweringError, ModuleTranslator};

/// 解析源码，期望没有语法错误
pub(crate) fn parse_module(source: &str) -> Module {
    parse(source).unwrap()
}

/// 翻译整个模块
pub(crate) fn translate(source: &str) -> Result<String, LoweringError> {
    ModuleTranslator::new().translate(&parse_module(source))
}

/// 翻译单条语句（源码的第一条）
pub(crate) fn lower(source: &str) -> Result<String, LoweringError> {
    let module = parse_module(source);
    let stmt: &Stmt = &module.body[0];
    lower_stmt(stmt)
}

/// 期望不支持结构错误，返回 (消息, 行, 列)
pub(crate) fn unsupported(result: Result<String, LoweringError>) -> (String, usize, usize) {
    match result {
        Err(LoweringError::Unsupported(diagnostic)) => (
            diagnostic.message.clone(),
            diagnostic.line(),
            diagnostic.column(),
        ),
        other => panic!("expected unsupported construct, got {:?}", other),
    }
}
