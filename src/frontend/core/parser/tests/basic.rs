//! Expression parsing tests - 表达式解析测试

use crate::frontend::core::lexer::tokenize;
use crate::frontend::core::parser::ast::*;
use crate::frontend::core::parser::parse_expression;

fn expr(source: &str) -> Expr {
    let tokens = tokenize(source).unwrap();
    parse_expression(&tokens).unwrap()
}

fn name(expr: &Expr) -> &str {
    expr.as_name().unwrap()
}

#[test]
fn test_parse_literals() {
    assert_eq!(expr("42").kind, ExprKind::Constant(Constant::Int(42)));
    assert_eq!(expr("1.5").kind, ExprKind::Constant(Constant::Float(1.5)));
    assert_eq!(expr("True").kind, ExprKind::Constant(Constant::Bool(true)));
    assert_eq!(expr("None").kind, ExprKind::Constant(Constant::None));
    assert_eq!(expr("...").kind, ExprKind::Constant(Constant::Ellipsis));
}

#[test]
fn test_adjacent_strings_concatenate() {
    assert_eq!(
        expr("'ab' \"cd\"").kind,
        ExprKind::Constant(Constant::Str("abcd".to_string()))
    );
    assert_eq!(
        expr("b'a' b'b'").kind,
        ExprKind::Constant(Constant::Bytes(b"ab".to_vec()))
    );
    assert!(matches!(expr("'a' f'{b}'").kind, ExprKind::FormattedString(_)));
}

#[test]
fn test_mul_binds_tighter_than_add() {
    // 1 + 2 * 3 => 1 + (2 * 3)
    match expr("1 + 2 * 3").kind {
        ExprKind::BinOp { op, right, .. } => {
            assert_eq!(op, BinOp::Add);
            assert!(matches!(right.kind, ExprKind::BinOp { op: BinOp::Mult, .. }));
        }
        other => panic!("Expected BinOp, got {:?}", other),
    }
}

#[test]
fn test_subtraction_is_left_associative() {
    // a - b - c => (a - b) - c
    match expr("a - b - c").kind {
        ExprKind::BinOp { left, right, .. } => {
            assert!(matches!(left.kind, ExprKind::BinOp { op: BinOp::Sub, .. }));
            assert_eq!(name(&right), "c");
        }
        other => panic!("Expected BinOp, got {:?}", other),
    }
}

#[test]
fn test_power_is_right_associative() {
    // a ** b ** c => a ** (b ** c)
    match expr("a ** b ** c").kind {
        ExprKind::BinOp { left, right, op } => {
            assert_eq!(op, BinOp::Pow);
            assert_eq!(name(&left), "a");
            assert!(matches!(right.kind, ExprKind::BinOp { op: BinOp::Pow, .. }));
        }
        other => panic!("Expected BinOp, got {:?}", other),
    }
}

#[test]
fn test_unary_minus_binds_looser_than_power() {
    // -x ** 2 => -(x ** 2)
    match expr("-x ** 2").kind {
        ExprKind::UnaryOp { op, operand } => {
            assert_eq!(op, UnaryOp::USub);
            assert!(matches!(operand.kind, ExprKind::BinOp { op: BinOp::Pow, .. }));
        }
        other => panic!("Expected UnaryOp, got {:?}", other),
    }
}

#[test]
fn test_not_binds_looser_than_comparison() {
    match expr("not a == b").kind {
        ExprKind::UnaryOp { op, operand } => {
            assert_eq!(op, UnaryOp::Not);
            assert!(matches!(operand.kind, ExprKind::Compare { .. }));
        }
        other => panic!("Expected UnaryOp, got {:?}", other),
    }
}

#[test]
fn test_bool_op_collects_operands() {
    match expr("a and b and c or d").kind {
        ExprKind::BoolOp { op, values } => {
            assert_eq!(op, BoolOp::Or);
            assert_eq!(values.len(), 2);
            match &values[0].kind {
                ExprKind::BoolOp { op, values } => {
                    assert_eq!(*op, BoolOp::And);
                    assert_eq!(values.len(), 3);
                }
                other => panic!("Expected BoolOp, got {:?}", other),
            }
        }
        other => panic!("Expected BoolOp, got {:?}", other),
    }
}

#[test]
fn test_comparison_chain() {
    match expr("a < b <= c").kind {
        ExprKind::Compare { ops, comparators, .. } => {
            assert_eq!(ops, vec![CmpOp::Lt, CmpOp::LtE]);
            assert_eq!(comparators.len(), 2);
        }
        other => panic!("Expected Compare, got {:?}", other),
    }
}

#[test]
fn test_two_token_comparisons() {
    match expr("a not in b").kind {
        ExprKind::Compare { ops, .. } => assert_eq!(ops, vec![CmpOp::NotIn]),
        other => panic!("Expected Compare, got {:?}", other),
    }
    match expr("a is not None").kind {
        ExprKind::Compare { ops, .. } => assert_eq!(ops, vec![CmpOp::IsNot]),
        other => panic!("Expected Compare, got {:?}", other),
    }
}

#[test]
fn test_conditional_expression() {
    match expr("x if c else y").kind {
        ExprKind::IfExp { test, body, orelse } => {
            assert_eq!(name(&test), "c");
            assert_eq!(name(&body), "x");
            assert_eq!(name(&orelse), "y");
        }
        other => panic!("Expected IfExp, got {:?}", other),
    }
}

#[test]
fn test_call_arguments() {
    match expr("f(a, *b, c=1, **d)").kind {
        ExprKind::Call { func, args, keywords } => {
            assert_eq!(name(&func), "f");
            assert_eq!(args.len(), 2);
            assert!(matches!(args[1].kind, ExprKind::Starred(_)));
            assert_eq!(keywords.len(), 2);
            assert_eq!(keywords[0].arg.as_ref().unwrap().value, "c");
            assert!(keywords[1].arg.is_none());
        }
        other => panic!("Expected Call, got {:?}", other),
    }
}

#[test]
fn test_method_call_chain() {
    match expr("a.b(1).c").kind {
        ExprKind::Attribute { value, attr } => {
            assert_eq!(attr.value, "c");
            assert!(matches!(value.kind, ExprKind::Call { .. }));
        }
        other => panic!("Expected Attribute, got {:?}", other),
    }
}

#[test]
fn test_subscript_and_slices() {
    match expr("a[1]").kind {
        ExprKind::Subscript { slice, .. } => {
            assert_eq!(slice.kind, ExprKind::Constant(Constant::Int(1)))
        }
        other => panic!("Expected Subscript, got {:?}", other),
    }
    match expr("a[1:2:3]").kind {
        ExprKind::Subscript { slice, .. } => match slice.kind {
            ExprKind::Slice { lower, upper, step } => {
                assert!(lower.is_some() && upper.is_some() && step.is_some())
            }
            other => panic!("Expected Slice, got {:?}", other),
        },
        other => panic!("Expected Subscript, got {:?}", other),
    }
    match expr("a[::]").kind {
        ExprKind::Subscript { slice, .. } => assert_eq!(
            slice.kind,
            ExprKind::Slice {
                lower: None,
                upper: None,
                step: None
            }
        ),
        other => panic!("Expected Subscript, got {:?}", other),
    }
    match expr("a[i, j]").kind {
        ExprKind::Subscript { slice, .. } => {
            assert!(matches!(slice.kind, ExprKind::Tuple(ref elts) if elts.len() == 2))
        }
        other => panic!("Expected Subscript, got {:?}", other),
    }
}

#[test]
fn test_tuple_forms() {
    assert_eq!(expr("()").kind, ExprKind::Tuple(Vec::new()));
    assert!(matches!(expr("(1,)").kind, ExprKind::Tuple(ref elts) if elts.len() == 1));
    assert!(matches!(expr("(1, 2)").kind, ExprKind::Tuple(ref elts) if elts.len() == 2));
    assert_eq!(expr("(1)").kind, ExprKind::Constant(Constant::Int(1)));
}

#[test]
fn test_displays() {
    assert!(matches!(expr("[1, 2, 3]").kind, ExprKind::List(ref elts) if elts.len() == 3));
    assert!(matches!(expr("[]").kind, ExprKind::List(ref elts) if elts.is_empty()));
    assert!(matches!(expr("{1, 2}").kind, ExprKind::Set(ref elts) if elts.len() == 2));
    match expr("{}").kind {
        ExprKind::Dict { keys, values } => assert!(keys.is_empty() && values.is_empty()),
        other => panic!("Expected Dict, got {:?}", other),
    }
    match expr("{1: 'a', 2: 'b',}").kind {
        ExprKind::Dict { keys, values } => {
            assert_eq!(keys.len(), 2);
            assert_eq!(values.len(), 2);
        }
        other => panic!("Expected Dict, got {:?}", other),
    }
}

#[test]
fn test_comprehensions() {
    match expr("[x * 2 for x in xs if x > 1 if x < 9]").kind {
        ExprKind::ListComp { generators, .. } => {
            assert_eq!(generators.len(), 1);
            assert_eq!(generators[0].ifs.len(), 2);
            assert_eq!(name(&generators[0].target), "x");
        }
        other => panic!("Expected ListComp, got {:?}", other),
    }
    assert!(matches!(expr("{k: v for k, v in items}").kind, ExprKind::DictComp { .. }));
    assert!(matches!(expr("{x for x in xs}").kind, ExprKind::SetComp { .. }));
    assert!(matches!(expr("(x for x in xs)").kind, ExprKind::GeneratorExp { .. }));
    match expr("sum(x for x in xs)").kind {
        ExprKind::Call { args, .. } => {
            assert!(matches!(args[0].kind, ExprKind::GeneratorExp { .. }))
        }
        other => panic!("Expected Call, got {:?}", other),
    }
}

#[test]
fn test_lambda() {
    match expr("lambda x, y=1: x + y").kind {
        ExprKind::Lambda { params, body } => {
            assert_eq!(params.len(), 2);
            assert!(params[1].default.is_some());
            assert!(matches!(body.kind, ExprKind::BinOp { .. }));
        }
        other => panic!("Expected Lambda, got {:?}", other),
    }
}

#[test]
fn test_named_expression() {
    match expr("(n := 10)").kind {
        ExprKind::NamedExpr { target, .. } => assert_eq!(name(&target), "n"),
        other => panic!("Expected NamedExpr, got {:?}", other),
    }
}

#[test]
fn test_await_and_yield() {
    assert!(matches!(expr("await f()").kind, ExprKind::Await(_)));
    assert!(matches!(expr("(yield)").kind, ExprKind::Yield(None)));
    assert!(matches!(expr("(yield from xs)").kind, ExprKind::YieldFrom(_)));
}

#[test]
fn test_expression_spans() {
    let e = expr("foo(1, 2)");
    assert_eq!(e.span.start.line, 1);
    assert_eq!(e.span.start.column, 1);
    assert_eq!(e.span.end.column, 10);
}
