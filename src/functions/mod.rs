//! Function scanning: marker-based function boundaries and per-function
//! cyclomatic complexity.
//!
//! A lightweight line scanner, not a parser: it anchors on declaration
//! markers (or a call-like heuristic for the C family), tracks braces or
//! indentation to find body extents, and counts control-flow keywords and
//! boolean operators as decision points. The attribution engine consumes
//! only the resulting spans and never looks at source text itself.

mod detection;
mod markers;
mod report;

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

pub use detection::FunctionSpan;

use crate::walk::{self, SelectConfig};
use report::{print_json, print_report};

/// Scan one file for functions. `Ok(None)` when the language is unknown or
/// no functions were found; I/O and encoding failures are errors the caller
/// absorbs per file.
pub fn analyze_file(path: &Path) -> Result<Option<Vec<FunctionSpan>>, Box<dyn Error>> {
    let Some(lang) = markers::language_for(path) else {
        return Ok(None);
    };

    let source = fs::read_to_string(path)?;
    let lines: Vec<&str> = source.lines().collect();

    let spans = detection::detect_functions(&lines, lang);
    if spans.is_empty() {
        return Ok(None);
    }
    Ok(Some(spans))
}

/// One row of the `functions` listing.
pub struct FunctionEntry {
    pub path: PathBuf,
    pub name: String,
    pub start_line: usize,
    pub end_line: usize,
    pub complexity: usize,
}

/// Run the `functions` subcommand: scan every candidate file and list the
/// most complex functions.
pub fn run(path: &Path, cfg: &SelectConfig, top: usize, json: bool) -> Result<(), Box<dyn Error>> {
    let root = path.canonicalize()?;
    let mut entries: Vec<FunctionEntry> = Vec::new();

    for file in walk::select_files(path, &root, cfg) {
        match analyze_file(&file.abs) {
            Ok(Some(spans)) => {
                entries.extend(spans.into_iter().map(|span| FunctionEntry {
                    path: file.rel.clone(),
                    name: span.name,
                    start_line: span.start_line,
                    end_line: span.end_line,
                    complexity: span.complexity,
                }));
            }
            Ok(None) => {}
            Err(err) => eprintln!("warning: {}: {err}", file.rel.display()),
        }
    }

    entries.sort_by(|a, b| {
        b.complexity
            .cmp(&a.complexity)
            .then_with(|| a.path.cmp(&b.path))
            .then_with(|| a.start_line.cmp(&b.start_line))
    });
    entries.truncate(top);

    if json {
        print_json(&entries)?;
    } else {
        print_report(&entries);
    }

    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
