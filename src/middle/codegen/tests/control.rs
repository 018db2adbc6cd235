//! 控制流代码生成测试

use super::{lower, unsupported};

#[test]
fn test_if() {
    assert_eq!(
        lower("if x:\n    f()\n").unwrap(),
        "if (x) {\n    f();\n}"
    );
    assert_eq!(
        lower("if x:\n    f()\nelse:\n    g()\n").unwrap(),
        "if (x) {\n    f();\n} else {\n    g();\n}"
    );
}

#[test]
fn test_elif_nests() {
    let code = lower("if a:\n    f()\nelif b:\n    g()\nelse:\n    h()\n").unwrap();
    assert_eq!(
        code,
        "if (a) {\n    f();\n} else {\n    if (b) {\n        g();\n    } else {\n        h();\n    }\n}"
    );
}

#[test]
fn test_loops() {
    assert_eq!(
        lower("while i < 10:\n    i += 1\n").unwrap(),
        "while (i < 10) {\n    i += 1;\n}"
    );
    assert_eq!(
        lower("for x in xs:\n    print(x)\n").unwrap(),
        "for (auto x: xs) {\n    std::cout << x << std::endl;\n}"
    );
    assert_eq!(
        lower("for k, v in items:\n    pass\n").unwrap(),
        "for (auto [k, v]: items) {\n\n}"
    );
}

#[test]
fn test_loop_else_is_unsupported() {
    let (message, line, column) =
        unsupported(lower("while x:\n    f()\nelse:\n    g()\n"));
    assert_eq!(message, "unsupported language construct");
    assert_eq!((line, column), (1, 1));

    let (message, _, _) = unsupported(lower("for x in xs:\n    f()\nelse:\n    g()\n"));
    assert_eq!(message, "unsupported language construct");
}

#[test]
fn test_try_except() {
    let source = "try:\n    f()\nexcept ValueError as err:\n    g(err)\nexcept:\n    h()\n";
    assert_eq!(
        lower(source).unwrap(),
        "try {\n    f();\n} catch (ValueError& err) {\n    g(err);\n} catch (std::exception& e) {\n    h();\n}"
    );
}

#[test]
fn test_try_finally_duplicates_finally() {
    let source = "try:\n    f()\nexcept:\n    g()\nfinally:\n    cleanup()\n";
    let code = lower(source).unwrap();
    assert_eq!(
        code,
        "try {\n    try {\n        f();\n    } catch (std::exception& e) {\n        g();\n    }\n    cleanup();\n} catch (...) {\n    cleanup();\n    throw;\n}"
    );
    assert_eq!(code.matches("cleanup();").count(), 2);
}

#[test]
fn test_try_finally_without_handlers() {
    let code = lower("try:\n    f()\nfinally:\n    g()\n").unwrap();
    assert_eq!(
        code,
        "try {\n    f();\n    g();\n} catch (...) {\n    g();\n    throw;\n}"
    );
}

#[test]
fn test_try_else_is_unsupported() {
    let source = "try:\n    f()\nexcept:\n    g()\nelse:\n    h()\n";
    assert_eq!(unsupported(lower(source)).0, "unsupported language construct");
}

#[test]
fn test_with() {
    assert_eq!(
        lower("with open(p) as f, lock() as l:\n    f.read()\n").unwrap(),
        "{\n    auto f = open(p);\n    auto l = lock();\n    f.read();\n}"
    );
    let (message, line, column) = unsupported(lower("with lock():\n    f()\n"));
    assert_eq!(message, "unsupported language construct");
    assert_eq!((line, column), (1, 6));
}

#[test]
fn test_nested_definitions_are_unsupported() {
    let (message, line, column) = unsupported(lower("if x:\n    def f():\n        pass\n"));
    assert_eq!(message, "unsupported language construct");
    assert_eq!((line, column), (2, 5));
}
