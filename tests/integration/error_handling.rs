//! Error handling integration tests
//!
//! Diagnostics from the front end and the lowering, rendered against the source.

use mysc::util::diagnostic::{DiagnosticKind, JsonEmitter};
use mysc::{transpile, TranspileError};

fn rendered(source: &str) -> String {
    match transpile(source, "<unknown>") {
        Err(e @ TranspileError::Diagnostic { .. }) => e.to_string(),
        other => panic!("expected a diagnostic, got {:?}", other),
    }
}

#[test]
fn test_lambda_is_rejected_with_position() {
    let source = "def main():\n    f = lambda: 1\n";
    assert_eq!(
        rendered(source),
        "  File \"<unknown>\", line 2\n        f = lambda: 1\n            ^\nLanguageError: lambda functions are not supported"
    );
}

#[test]
fn test_module_of_only_a_lambda() {
    assert_eq!(
        rendered("lambda: 1\n"),
        "  File \"<unknown>\", line 1\n    lambda: 1\n    ^\nLanguageError: lambda functions are not supported"
    );
}

#[test]
fn test_uninitialized_declaration_points_at_name() {
    let source = "def main():\n    x: int\n";
    let error = transpile(source, "<unknown>").unwrap_err();
    let diagnostic = error.diagnostic().unwrap();
    assert_eq!((diagnostic.line(), diagnostic.column()), (2, 5));
    assert_eq!(
        rendered(source),
        "  File \"<unknown>\", line 2\n        x: int\n        ^\nLanguageError: variables must be initialized when declared ('x')"
    );
}

#[test]
fn test_unsupported_construct_at_module_level() {
    let error = transpile("x = 1\ny = [a for a in b]\n", "m.mys").unwrap_err();
    let diagnostic = error.diagnostic().unwrap();
    assert_eq!(diagnostic.kind, DiagnosticKind::LanguageError);
    assert_eq!(diagnostic.message, "unsupported language construct");
    assert_eq!((diagnostic.line(), diagnostic.column()), (2, 5));
}

#[test]
fn test_multiple_targets() {
    assert_eq!(
        rendered("def main():\n    a = b = 1\n"),
        "  File \"<unknown>\", line 2\n        a = b = 1\n        ^\nLanguageError: assignments with more than one target is not yet supported"
    );
}

#[test]
fn test_syntax_error_is_rendered() {
    let output = rendered("def main()\n    pass\n");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "  File \"<unknown>\", line 1");
    assert_eq!(lines[1], "    def main()");
    assert!(lines[3].starts_with("SyntaxError: expected ':'"), "{}", output);
}

#[test]
fn test_configuration_errors_have_no_position() {
    let error = transpile("def main() -> int:\n    return 0\n", "m.mys").unwrap_err();
    assert_eq!(error, TranspileError::Config("main() must return 'None'.".to_string()));
    assert!(error.diagnostic().is_none());

    let error = transpile("def add(a, b: int) -> int:\n    return a\n", "m.mys").unwrap_err();
    assert_eq!(error.to_string(), "add(a) is not typed.");

    let error = transpile("class A:\n    def f(x: int):\n        pass\n", "m.mys").unwrap_err();
    assert_eq!(
        error.to_string(),
        "Methods must always take 'self' as their first argument."
    );
}

#[test]
fn test_first_error_wins() {
    let error = transpile("def main():\n    x = ...\n    y = lambda: 1\n", "m.mys").unwrap_err();
    let diagnostic = error.diagnostic().unwrap();
    assert_eq!(diagnostic.message, "'...' is not yet supported");
    assert_eq!(diagnostic.line(), 2);
}

#[test]
fn test_json_rendering() {
    let error = transpile("print(b'x')\n", "bytes.mys").unwrap_err();
    let json = JsonEmitter::render(error.diagnostic().unwrap(), "bytes.mys");
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["file"], "bytes.mys");
    assert_eq!(value["message"], "bytes() is not yet supported");
    assert_eq!(value["range"]["start"]["line"], 0);
    assert_eq!(value["range"]["start"]["character"], 6);
}
