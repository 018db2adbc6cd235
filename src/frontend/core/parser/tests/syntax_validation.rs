//! Syntax validation tests - 语法验证测试

use crate::frontend::core::lexer::tokenize;
use crate::frontend::core::parser::{parse, ParseError};

fn check_syntax(input: &str) -> bool {
    match tokenize(input) {
        Ok(tokens) => parse(&tokens).is_ok(),
        Err(_) => false,
    }
}

fn parse_error(input: &str) -> ParseError {
    let tokens = tokenize(input).unwrap();
    parse(&tokens).unwrap_err()
}

#[test]
fn test_valid_programs() {
    assert!(check_syntax("def main():\n    print('hi')\n"));
    assert!(check_syntax("x = [i for i in range(10)]\n"));
    assert!(check_syntax("class A:\n    pass\n"));
    assert!(check_syntax("f(\n    1,\n    2,\n)\n"));
}

#[test]
fn test_missing_colon() {
    assert!(!check_syntax("def f()\n    pass\n"));
    let err = parse_error("if x\n    pass\n");
    assert_eq!(err.to_string(), "expected ':', found newline");
}

#[test]
fn test_missing_indented_block() {
    let err = parse_error("def f():\nx = 1\n");
    assert_eq!(
        err.to_string(),
        "expected an indented block, found name 'x'"
    );
    assert_eq!(err.span().start.line, 2);
}

#[test]
fn test_unexpected_indent() {
    let err = parse_error("x = 1\n    y = 2\n");
    assert_eq!(err.to_string(), "unexpected indent");
    assert_eq!(err.span().start.line, 2);
}

#[test]
fn test_invalid_assignment_targets() {
    let err = parse_error("f() = 1\n");
    assert_eq!(err.to_string(), "cannot assign to function call");
    let err = parse_error("1 = x\n");
    assert_eq!(err.to_string(), "cannot assign to literal");
    assert!(!check_syntax("a + b += 1\n"));
    assert!(!check_syntax("(a, b): int = 1\n"));
}

#[test]
fn test_try_needs_handler_or_finally() {
    assert!(!check_syntax("try:\n    pass\nx = 1\n"));
}

#[test]
fn test_mixed_bytes_and_str() {
    let err = parse_error("x = b'a' 'b'\n");
    assert_eq!(err.to_string(), "cannot mix bytes and nonbytes literals");
}

#[test]
fn test_error_position_points_at_offending_token() {
    let err = parse_error("x = (1 +)\n");
    assert_eq!(err.span().start.line, 1);
    assert_eq!(err.span().start.column, 9);
}

#[test]
fn test_trailing_garbage() {
    assert!(!check_syntax("x = 1 2\n"));
    assert!(!check_syntax("async x\n"));
    assert!(!check_syntax("@decorator\nx = 1\n"));
}
