use std::fs;
use std::path::Path;

use tempfile::tempdir;

use super::*;
use crate::walk::SelectConfig;

#[test]
fn analyze_file_finds_functions() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("lib.rs");
    fs::write(
        &path,
        "fn one() {\n    let a = 1;\n}\n\nfn two(x: bool) -> u8 {\n    if x { 1 } else { 0 }\n}\n",
    )
    .unwrap();

    let spans = analyze_file(&path).unwrap().unwrap();
    assert_eq!(spans.len(), 2);
    assert_eq!(spans[0].name, "one");
    assert_eq!(spans[1].name, "two");
    assert!(spans.iter().all(|s| s.end_line >= s.start_line));
}

#[test]
fn analyze_file_unknown_language_is_none() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "fn looks_like_rust() {}\n").unwrap();

    assert!(analyze_file(&path).unwrap().is_none());
}

#[test]
fn analyze_file_no_functions_is_none() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("consts.rs");
    fs::write(&path, "const X: u8 = 1;\nconst Y: u8 = 2;\n").unwrap();

    assert!(analyze_file(&path).unwrap().is_none());
}

#[test]
fn analyze_file_invalid_utf8_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.rs");
    fs::write(&path, [0xff, 0xfe, 0x00, 0x01]).unwrap();

    assert!(analyze_file(&path).is_err());
}

#[test]
fn analyze_file_missing_file_is_an_error() {
    assert!(analyze_file(Path::new("/nonexistent/never.rs")).is_err());
}

#[test]
fn run_lists_functions() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.rs"), "fn f() {\n    let x = 1;\n}\n").unwrap();

    let result = run(dir.path(), &SelectConfig::default(), 20, false);
    assert!(result.is_ok());

    let result = run(dir.path(), &SelectConfig::default(), 20, true);
    assert!(result.is_ok());
}

#[test]
fn run_on_missing_root_fails() {
    let result = run(
        Path::new("/nonexistent/never"),
        &SelectConfig::default(),
        20,
        false,
    );
    assert!(result.is_err());
}
