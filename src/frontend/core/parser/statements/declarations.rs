//! Declaration statement parsing
//! Handles function and class definitions, decorators, parameter lists
//! and imports.

use super::parse_block;
use crate::frontend::core::lexer::tokens::*;
use crate::frontend::core::parser::ast::*;
use crate::frontend::core::parser::pratt::BP_LOWEST;
use crate::frontend::core::parser::ParserState;
use crate::util::span::Span;

/// `@decorator` lines followed by a def or class
pub fn parse_decorated(
    state: &mut ParserState<'_>,
    span: Span,
) -> Option<Stmt> {
    let mut decorators = Vec::new();
    while state.skip(&TokenKind::At) {
        decorators.push(state.parse_expression(BP_LOWEST)?);
        state.expect(&TokenKind::Newline)?;
    }

    let def_span = state.span();
    match state.current_kind() {
        TokenKind::KwDef => parse_function_def(state, def_span, decorators, false),
        TokenKind::KwClass => parse_class_def(state, def_span, decorators),
        TokenKind::KwAsync if state.peek_kind() == &TokenKind::KwDef => {
            state.bump(); // consume 'async'
            parse_function_def(state, def_span, decorators, true)
        }
        _ => {
            state.error_at("expected 'def' or 'class' after decorator", span);
            None
        }
    }
}

/// Parse function definition: `def name(params) [-> returns]: body`
pub fn parse_function_def(
    state: &mut ParserState<'_>,
    span: Span,
    decorators: Vec<Expr>,
    is_async: bool,
) -> Option<Stmt> {
    state.bump(); // consume 'def'

    let name = state.expect_identifier()?;
    state.expect(&TokenKind::LParen)?;
    let params = parse_parameters(state, &TokenKind::RParen, true)?;
    state.expect(&TokenKind::RParen)?;

    let returns = if state.skip(&TokenKind::Arrow) {
        Some(state.parse_expression(BP_LOWEST)?)
    } else {
        None
    };

    let body = parse_block(state)?;

    Some(Stmt::new(
        StmtKind::FunctionDef(Box::new(FunctionDef {
            name,
            params,
            body,
            decorators,
            returns,
            is_async,
        })),
        state.span_from(span),
    ))
}

/// Parameter list up to (not including) `closing`
///
/// Lambdas pass `annotated = false` since their `:` ends the list.
pub fn parse_parameters(
    state: &mut ParserState<'_>,
    closing: &TokenKind,
    annotated: bool,
) -> Option<Vec<Param>> {
    let mut params = Vec::new();
    let mut kind = ParamKind::Positional;

    while !state.at(closing) {
        let start = state.span();

        if state.skip(&TokenKind::Slash) {
            // Positional-only marker; the distinction is not kept
        } else if state.skip(&TokenKind::Star) {
            if !state.at(&TokenKind::Comma) && !state.at(closing) {
                params.push(parse_parameter(state, start, ParamKind::VarArgs, annotated)?);
            }
            kind = ParamKind::KeywordOnly;
        } else if state.skip(&TokenKind::DoubleStar) {
            params.push(parse_parameter(state, start, ParamKind::KwArgs, annotated)?);
        } else {
            params.push(parse_parameter(state, start, kind, annotated)?);
        }

        if !state.skip(&TokenKind::Comma) {
            break;
        }
    }

    Some(params)
}

/// `name[: annotation][= default]`
fn parse_parameter(
    state: &mut ParserState<'_>,
    start: Span,
    kind: ParamKind,
    annotated: bool,
) -> Option<Param> {
    let name = state.expect_identifier()?;

    let annotation = if annotated && state.skip(&TokenKind::Colon) {
        Some(state.parse_expression(BP_LOWEST)?)
    } else {
        None
    };

    let default = if state.skip(&TokenKind::Eq) {
        Some(state.parse_expression(BP_LOWEST)?)
    } else {
        None
    };

    Some(Param {
        name,
        annotation,
        default,
        kind,
        span: state.span_from(start),
    })
}

/// Parse class definition: `class Name[(bases)]: body`
pub fn parse_class_def(
    state: &mut ParserState<'_>,
    span: Span,
    decorators: Vec<Expr>,
) -> Option<Stmt> {
    state.bump(); // consume 'class'

    let name = state.expect_identifier()?;
    let mut bases = Vec::new();
    let mut keywords = Vec::new();

    if state.skip(&TokenKind::LParen) {
        while !state.at(&TokenKind::RParen) {
            let arg_start = state.span();
            if matches!(state.current_kind(), TokenKind::Identifier(_))
                && state.peek_kind() == &TokenKind::Eq
            {
                let arg = state.expect_identifier()?;
                state.bump(); // consume '='
                let value = state.parse_expression(BP_LOWEST)?;
                keywords.push(Keyword {
                    arg: Some(arg),
                    value,
                    span: state.span_from(arg_start),
                });
            } else {
                bases.push(state.parse_expression(BP_LOWEST)?);
            }

            if !state.skip(&TokenKind::Comma) {
                break;
            }
        }
        state.expect(&TokenKind::RParen)?;
    }

    let body = parse_block(state)?;

    Some(Stmt::new(
        StmtKind::ClassDef(Box::new(ClassDef {
            name,
            bases,
            keywords,
            body,
            decorators,
        })),
        state.span_from(span),
    ))
}

/// `import a.b as c, d`
pub fn parse_import_stmt(
    state: &mut ParserState<'_>,
    span: Span,
) -> Option<Stmt> {
    state.bump(); // consume 'import'

    let mut names = Vec::new();
    loop {
        let start = state.span();
        let name = parse_dotted_name(state)?;
        let asname = parse_alias_name(state)?;
        names.push(Alias {
            name,
            asname,
            span: state.span_from(start),
        });

        if !state.skip(&TokenKind::Comma) {
            break;
        }
    }

    Some(Stmt::new(StmtKind::Import(names), state.span_from(span)))
}

/// `from [.]module import a as b, c` or `from module import *`
pub fn parse_from_import_stmt(
    state: &mut ParserState<'_>,
    span: Span,
) -> Option<Stmt> {
    state.bump(); // consume 'from'

    let mut level = 0;
    loop {
        if state.skip(&TokenKind::Dot) {
            level += 1;
        } else if state.skip(&TokenKind::Ellipsis) {
            level += 3;
        } else {
            break;
        }
    }

    let module = if matches!(state.current_kind(), TokenKind::Identifier(_)) {
        Some(parse_dotted_name(state)?)
    } else {
        if level == 0 {
            state.error_expected("module name");
            return None;
        }
        None
    };

    state.expect(&TokenKind::KwImport)?;

    let names = if state.at(&TokenKind::Star) {
        let star_span = state.span();
        state.bump();
        vec![Alias {
            name: "*".to_string(),
            asname: None,
            span: star_span,
        }]
    } else if state.skip(&TokenKind::LParen) {
        let names = parse_import_names(state, true)?;
        state.expect(&TokenKind::RParen)?;
        names
    } else {
        parse_import_names(state, false)?
    };

    Some(Stmt::new(
        StmtKind::ImportFrom {
            module,
            names,
            level,
        },
        state.span_from(span),
    ))
}

/// `a as b, c` after `from ... import`
fn parse_import_names(
    state: &mut ParserState<'_>,
    parenthesized: bool,
) -> Option<Vec<Alias>> {
    let mut names = Vec::new();
    loop {
        let start = state.span();
        let name = state.expect_identifier()?;
        let asname = parse_alias_name(state)?;
        names.push(Alias {
            name: name.value,
            asname,
            span: state.span_from(start),
        });

        if !state.skip(&TokenKind::Comma) {
            break;
        }
        if parenthesized && state.at(&TokenKind::RParen) {
            break;
        }
    }
    Some(names)
}

fn parse_alias_name(state: &mut ParserState<'_>) -> Option<Option<Ident>> {
    if state.skip(&TokenKind::KwAs) {
        Some(Some(state.expect_identifier()?))
    } else {
        Some(None)
    }
}

/// `a.b.c` as one string
fn parse_dotted_name(state: &mut ParserState<'_>) -> Option<String> {
    let mut name = state.expect_identifier()?.value;
    while state.skip(&TokenKind::Dot) {
        name.push('.');
        name.push_str(&state.expect_identifier()?.value);
    }
    Some(name)
}
