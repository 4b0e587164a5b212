use std::path::PathBuf;

use super::*;

#[test]
fn detects_language_by_extension() {
    assert_eq!(language_for(&PathBuf::from("src/main.rs")).unwrap().name, "Rust");
    assert_eq!(language_for(&PathBuf::from("app.py")).unwrap().name, "Python");
    assert_eq!(language_for(&PathBuf::from("a/b/c.tsx")).unwrap().name, "TypeScript");
    assert_eq!(language_for(&PathBuf::from("x.hpp")).unwrap().name, "C++");
}

#[test]
fn extension_lookup_is_case_insensitive() {
    assert_eq!(language_for(&PathBuf::from("MAIN.RS")).unwrap().name, "Rust");
    assert_eq!(language_for(&PathBuf::from("App.Py")).unwrap().name, "Python");
}

#[test]
fn unknown_or_missing_extension_yields_none() {
    assert!(language_for(&PathBuf::from("notes.txt")).is_none());
    assert!(language_for(&PathBuf::from("Makefile")).is_none());
}

#[test]
fn every_allowed_extension_has_a_language() {
    for ext in crate::walk::ALLOWED_EXTS {
        let path = PathBuf::from(format!("file.{ext}"));
        assert!(
            language_for(&path).is_some(),
            "selection allows .{ext} but no scanning table covers it"
        );
    }
}

#[test]
fn shell_has_no_function_markers() {
    let lang = language_for(&PathBuf::from("deploy.sh")).unwrap();
    assert!(lang.function_markers.is_empty());
    assert!(!lang.brace_scoped);
}
