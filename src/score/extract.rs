use crate::budget::Budget;
use crate::functions::{self, FunctionSpan};
use crate::walk::CandidateFile;

pub const MAX_FUNCTIONS: usize = 20_000;

/// Functions scanned from one candidate file.
#[derive(Debug)]
pub struct ScannedFile {
    pub file: CandidateFile,
    pub functions: Vec<FunctionSpan>,
}

#[derive(Debug)]
pub struct Extraction {
    pub files: Vec<ScannedFile>,
    /// True when the function cap or the budget cut the scan short.
    pub truncated: bool,
}

/// Scan candidates in walk order, each file in isolation: a scanner failure
/// on one file skips that file only. Stops once the global function cap is
/// reached, keeping the partial batch from the file that crossed it, or
/// when the budget expires, keeping everything collected so far.
pub fn extract(candidates: &[CandidateFile], max_functions: usize, budget: &Budget) -> Extraction {
    let mut files: Vec<ScannedFile> = Vec::new();
    let mut count = 0usize;
    let mut truncated = false;

    for candidate in candidates {
        if budget.expired() || count >= max_functions {
            truncated = true;
            break;
        }

        let mut spans = match functions::analyze_file(&candidate.abs) {
            Ok(Some(spans)) => spans,
            Ok(None) => continue,
            Err(err) => {
                eprintln!("warning: scan {}: {err}", candidate.rel.display());
                continue;
            }
        };

        // Inverted or zero-based spans are never aggregated
        spans.retain(|s| s.start_line >= 1 && s.end_line >= s.start_line);
        if spans.is_empty() {
            continue;
        }

        let remaining = max_functions - count;
        if spans.len() > remaining {
            spans.truncate(remaining);
            truncated = true;
        }

        count += spans.len();
        files.push(ScannedFile {
            file: candidate.clone(),
            functions: spans,
        });
    }

    Extraction { files, truncated }
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
