//! 表达式代码生成测试

use proptest::prelude::*;

use super::{lower, unsupported};

/// 表达式语句的 C++ 文本（去掉末尾分号）
fn expr(source: &str) -> String {
    let code = lower(source).unwrap();
    code.strip_suffix(';').unwrap().to_string()
}

#[test]
fn test_literals() {
    assert_eq!(expr("x"), "x");
    assert_eq!(expr("42"), "42");
    assert_eq!(expr("1.5"), "1.5f");
    assert_eq!(expr("2.0"), "2.0f");
    assert_eq!(expr("True"), "true");
    assert_eq!(expr("False"), "false");
    assert_eq!(expr("None"), "None");
    assert_eq!(expr("'a\\nb'"), "\"a\\nb\"");
    assert_eq!(expr("'ab' 'cd'"), "\"abcd\"");
}

#[test]
fn test_binary_operators() {
    assert_eq!(expr("a + b"), "(a + b)");
    assert_eq!(expr("a + b * c"), "(a + (b * c))");
    assert_eq!(expr("a // b"), "(a / b)");
    assert_eq!(expr("a % b << 1"), "((a % b) << 1)");
    assert_eq!(expr("a ** b"), "ipow(a, b)");
    assert_eq!(expr("(a + 1) ** 2"), "ipow((a + 1), 2)");
}

#[test]
fn test_bool_and_unary_operators() {
    assert_eq!(expr("a and b"), "(a && b)");
    assert_eq!(expr("a and b and c"), "((a && b) && c)");
    assert_eq!(expr("a or b and c"), "(a || (b && c))");
    assert_eq!(expr("not a"), "!a");
    assert_eq!(expr("-x"), "-x");
    assert_eq!(expr("+x"), "+x");
}

#[test]
fn test_comparisons() {
    assert_eq!(expr("a < b"), "a < b");
    assert_eq!(expr("a >= b + 1"), "a >= (b + 1)");
    assert_eq!(expr("a is None"), "a == None");
    assert_eq!(expr("a is not None"), "a != None");
    assert_eq!(expr("a in b"), "contains(a, b)");
    assert_eq!(expr("a not in b"), "!contains(a, b)");
}

#[test]
fn test_calls() {
    assert_eq!(expr("f()"), "f()");
    assert_eq!(expr("f(1, x)"), "f(1, x)");
    assert_eq!(expr("obj.method(1)"), "obj.method(1)");
    assert_eq!(expr("print()"), "std::cout << std::endl");
    assert_eq!(expr("print(x)"), "std::cout << x << std::endl");
    assert_eq!(
        expr("print(a, b, c)"),
        "std::cout << a << \" \" << b << \" \" << c << std::endl"
    );
}

#[test]
fn test_attributes_and_displays() {
    assert_eq!(expr("self.value"), "this->value");
    assert_eq!(expr("self.child.value"), "this->child.value");
    assert_eq!(expr("point.x"), "point.x");
    assert_eq!(expr("items[0]"), "items");
    assert_eq!(expr("(1, 2)"), "Tuple<todo>({1, 2})");
    assert_eq!(expr("[1, 2]"), "List<todo>({1, 2})");
    assert_eq!(expr("[]"), "List<todo>({})");
    assert_eq!(expr("{1: 2}"), "MakeDict<todo>({})");
}

#[test]
fn test_embedded_code() {
    let source = "'''mys-embedded-c++\n    int x = 1;\n'''\n";
    assert_eq!(
        lower(source).unwrap(),
        "/* mys-embedded-c++ start */\n\nint x = 1;\n\n/* mys-embedded-c++ stop */;"
    );
}

#[test]
fn test_unsupported_expressions() {
    assert_eq!(
        unsupported(lower("f = lambda: 1")),
        ("lambda functions are not supported".to_string(), 1, 5)
    );
    assert_eq!(
        unsupported(lower("b'abc'")),
        ("bytes() is not yet supported".to_string(), 1, 1)
    );
    assert_eq!(
        unsupported(lower("x = ...")),
        ("'...' is not yet supported".to_string(), 1, 5)
    );
    assert_eq!(
        unsupported(lower("f(x, key=1)")),
        ("unsupported language construct".to_string(), 1, 6)
    );

    for source in [
        "a @ b",
        "~a",
        "a < b < c",
        "x if c else y",
        "[x for x in xs]",
        "{1, 2}",
        "f'{x}'",
        "f(*args)",
    ] {
        let (message, line, _) = unsupported(lower(source));
        assert_eq!(message, "unsupported language construct", "{}", source);
        assert_eq!(line, 1);
    }
}

const KEYWORDS: [&str; 11] = [
    "and", "as", "def", "del", "for", "if", "in", "is", "not", "or", "try",
];

/// Fully parenthesized arithmetic source, with its operator count
fn arithmetic() -> impl Strategy<Value = (String, usize)> {
    let leaf = "[a-z]{1,3}"
        .prop_filter("keyword", |name| !KEYWORDS.contains(&name.as_str()))
        .prop_map(|name| (name, 0));
    leaf.prop_recursive(4, 32, 2, |inner| {
        (
            inner.clone(),
            prop::sample::select(vec![
                "+", "-", "*", "/", "//", "%", "<<", ">>", "|", "^", "&", "**",
            ]),
            inner,
        )
            .prop_map(|((left, a), op, (right, b))| {
                (format!("({} {} {})", left, op, right), a + b + 1)
            })
    })
}

proptest! {
    #[test]
    fn test_one_paren_pair_per_operator((source, operators) in arithmetic()) {
        let code = expr(&source);
        prop_assert_eq!(code.matches('(').count(), operators);
        prop_assert_eq!(code.matches(')').count(), operators);
    }

    #[test]
    fn test_lowering_is_single_line((source, _) in arithmetic()) {
        prop_assert!(!expr(&source).contains('\n'));
    }
}
