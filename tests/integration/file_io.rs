//! File entry point tests

use std::fs;

use mysc::transpile_file;
use tempfile::tempdir;

#[test]
fn test_transpile_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hello.mys");
    fs::write(&path, "def main():\n    print(1)\n").unwrap();

    let output = transpile_file(&path).unwrap();
    assert!(output.starts_with("#include \"mys.hpp\"\n\nint main();"));
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.mys");

    let error = transpile_file(&path).unwrap_err();
    assert!(error.to_string().starts_with("Failed to read file:"));
}

#[test]
fn test_diagnostic_names_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.mys");
    fs::write(&path, "x = lambda: 0\n").unwrap();

    let error = transpile_file(&path).unwrap_err();
    let message = error.to_string();
    assert!(message.contains(&format!("File \"{}\", line 1", path.display())));
    assert!(message.ends_with("LanguageError: lambda functions are not supported"));
}
