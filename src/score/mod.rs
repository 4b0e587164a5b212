//! Contribution attribution: who wrote the complexity.
//!
//! Pipeline: select candidate files, scan their functions (bounded by the
//! global function cap and the wall-clock budget), fix the hotspot
//! threshold at the mean complexity, then blame each file once and
//! attribute weighted complexity and ownership from per-function slices of
//! the line-author map. LOC share and commit stats are independent passes
//! merged into the final report.

mod aggregate;
mod extract;
mod report;

use std::error::Error;
use std::path::Path;

use crate::budget::Budget;
use crate::git::GitRepo;
use crate::loc_share;
use crate::walk::{self, SelectConfig};

pub use extract::MAX_FUNCTIONS;

use aggregate::Accumulator;
use report::{Summary, print_json, print_report};

pub struct Options {
    pub json: bool,
    pub max_functions: usize,
    pub budget_seconds: Option<u64>,
}

pub fn run(path: &Path, select: &SelectConfig, opts: &Options) -> Result<(), Box<dyn Error>> {
    let summary = compute(path, select, opts)?;
    if opts.json {
        print_json(&summary)
    } else {
        print_report(&summary);
        Ok(())
    }
}

fn compute(path: &Path, select: &SelectConfig, opts: &Options) -> Result<Summary, Box<dyn Error>> {
    let git_repo = GitRepo::open(path)
        .map_err(|e| format!("not a git repository (or any parent): {e}"))?;
    let git_root = git_repo.root().canonicalize()?;
    let budget = Budget::start(opts.budget_seconds);

    let candidates = walk::select_files(path, &git_root, select);

    let extraction = extract::extract(&candidates, opts.max_functions, &budget);
    let complexities: Vec<usize> = extraction
        .files
        .iter()
        .flat_map(|scanned| scanned.functions.iter().map(|span| span.complexity))
        .collect();

    // Fixed for the rest of the run, even if attribution is cut short later
    let threshold = aggregate::mean_complexity(&complexities);

    let mut acc = Accumulator::default();
    let mut truncated = extraction.truncated;

    if let Some(threshold) = threshold {
        'files: for scanned in &extraction.files {
            if budget.expired() {
                truncated = true;
                break;
            }

            let lines = match git_repo.blame_lines(&scanned.file.rel) {
                Ok(lines) => lines,
                Err(err) => {
                    eprintln!("warning: blame {}: {err}", scanned.file.rel.display());
                    continue;
                }
            };

            for span in &scanned.functions {
                if budget.expired() {
                    truncated = true;
                    break 'files;
                }
                let Some(slice) = aggregate::slice_lines(&lines, span.start_line, span.end_line)
                else {
                    continue; // file changed since the scan, or corrupt bounds
                };
                acc.record(span.complexity, slice, (span.complexity as f64) > threshold);
            }
        }
    }

    let loc = loc_share::collect(&git_repo, &candidates);
    let commit_stats = git_repo.commit_stats().unwrap_or_else(|err| {
        eprintln!("warning: commit stats: {err}");
        Vec::new()
    });

    Ok(report::build_summary(
        &acc,
        &loc,
        &commit_stats,
        threshold,
        truncated,
    ))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
