//! LOC share: each author's percentage of all blamed lines.
//!
//! Runs independently of function extraction and blames every candidate
//! file, including files with no detectable functions, so the denominator
//! covers the whole selected universe.

use std::collections::HashMap;
use std::error::Error;
use std::path::Path;

use serde::Serialize;

use crate::git::{Author, GitRepo};
use crate::report_helpers::{max_width, pad, print_json_stdout, separator};
use crate::util::round_dp;
use crate::walk::{self, CandidateFile, SelectConfig};

/// Per-author physical line counts across all blamed files.
#[derive(Debug, Default)]
pub struct LocTotals {
    lines: HashMap<Author, usize>,
    total: usize,
}

impl LocTotals {
    /// Percentage of all counted lines per author. Empty when nothing was
    /// counted, so a zero total never divides.
    pub fn percentages(&self) -> HashMap<Author, f64> {
        if self.total == 0 {
            return HashMap::new();
        }
        self.lines
            .iter()
            .map(|(author, &n)| (author.clone(), 100.0 * n as f64 / self.total as f64))
            .collect()
    }

    pub fn total_lines(&self) -> usize {
        self.total
    }

    /// Count one blamed file's lines.
    pub fn add_lines(&mut self, lines: Vec<Author>) {
        for author in lines {
            *self.lines.entry(author).or_insert(0) += 1;
            self.total += 1;
        }
    }
}

/// Blame every candidate file whole and count each line for its author.
/// Files that fail to blame (untracked, renamed away) contribute nothing
/// and never fail the pass.
pub fn collect(git_repo: &GitRepo, files: &[CandidateFile]) -> LocTotals {
    let mut totals = LocTotals::default();

    for file in files {
        let Ok(lines) = git_repo.blame_lines(&file.rel) else {
            continue;
        };
        totals.add_lines(lines);
    }

    totals
}

/// Run the `loc` subcommand: select files, blame them, print line shares.
pub fn run(path: &Path, cfg: &SelectConfig, json: bool) -> Result<(), Box<dyn Error>> {
    let git_repo = GitRepo::open(path)
        .map_err(|e| format!("not a git repository (or any parent): {e}"))?;
    let git_root = git_repo.root().canonicalize()?;

    let files = walk::select_files(path, &git_root, cfg);
    let totals = collect(&git_repo, &files);

    if json {
        print_json(&totals)
    } else {
        print_report(&totals);
        Ok(())
    }
}

struct Row {
    author: Author,
    lines: usize,
    percentage: f64,
}

fn sorted_rows(totals: &LocTotals) -> Vec<Row> {
    let percentages = totals.percentages();
    let mut rows: Vec<Row> = totals
        .lines
        .iter()
        .map(|(author, &lines)| Row {
            author: author.clone(),
            lines,
            percentage: percentages.get(author).copied().unwrap_or(0.0),
        })
        .collect();
    rows.sort_by(|a, b| b.lines.cmp(&a.lines).then_with(|| a.author.cmp(&b.author)));
    rows
}

fn print_report(totals: &LocTotals) {
    let rows = sorted_rows(totals);
    if rows.is_empty() {
        println!("No blamed lines found.");
        return;
    }

    let name_width = max_width(rows.iter().map(|r| r.author.as_str()), 6);
    let sep = separator(name_width + 20);

    println!("Lines of Code by Author");
    println!("{sep}");
    println!(" {}  {:>8} {:>7}", pad("Author", name_width), "Lines", "LOC%");
    println!("{sep}");
    for row in &rows {
        println!(
            " {}  {:>8} {:>6.2}%",
            pad(row.author.as_str(), name_width),
            row.lines,
            row.percentage
        );
    }
    println!("{sep}");
    println!("Total lines: {}", totals.total_lines());
}

#[derive(Serialize)]
struct JsonEntry {
    author: Author,
    lines: usize,
    #[serde(rename = "percentage_of_LOC")]
    percentage_of_loc: f64,
}

fn print_json(totals: &LocTotals) -> Result<(), Box<dyn Error>> {
    let entries: Vec<JsonEntry> = sorted_rows(totals)
        .into_iter()
        .map(|row| JsonEntry {
            author: row.author,
            lines: row.lines,
            percentage_of_loc: round_dp(row.percentage, 2),
        })
        .collect();
    print_json_stdout(&entries)
}

#[cfg(test)]
#[path = "loc_share_test.rs"]
mod tests;
