use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::git::{Author, CommitStats};
use crate::loc_share::LocTotals;
use crate::report_helpers::{max_width, pad, print_json_stdout, separator};
use crate::util::round_dp;

use super::aggregate::{Accumulator, AuthorScore};

/// One row of the merged per-author report. Attribution metrics come from
/// the engine; LOC share and commit stats are merged in here at the
/// presentation layer, with absent metrics defaulting to zero.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorReport {
    pub author: Author,
    pub average_complexity: f64,
    pub percentage_of_functions_written: f64,
    pub percentage_of_hotspots: f64,
    #[serde(rename = "percentage_of_LOC")]
    pub percentage_of_loc: f64,
    pub commits: usize,
    pub additions: usize,
    pub deletions: usize,
    pub commit_percentage: f64,
    pub edit_percentage: f64,
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub authors: Vec<AuthorReport>,
    pub total_functions: usize,
    pub total_hotspots: usize,
    /// Mean complexity used as the hotspot cutoff; absent when no functions
    /// were collected.
    pub hotspot_threshold: Option<f64>,
    /// True when a budget or cap truncated the run; percentages then cover
    /// the processed subset, not the whole repository.
    pub partial: bool,
}

/// Merge the three per-author maps (attribution scores, LOC share, commit
/// stats) over the union of their authors.
pub fn build_summary(
    acc: &Accumulator,
    loc: &LocTotals,
    commits: &[CommitStats],
    threshold: Option<f64>,
    partial: bool,
) -> Summary {
    let scores: HashMap<Author, AuthorScore> = acc
        .finalize()
        .into_iter()
        .map(|score| (score.author.clone(), score))
        .collect();
    let loc_percentages = loc.percentages();
    let commit_map: HashMap<&Author, &CommitStats> =
        commits.iter().map(|stats| (&stats.author, stats)).collect();

    let total_commits: usize = commits.iter().map(|c| c.commits).sum();
    let total_edits: usize = commits.iter().map(|c| c.additions + c.deletions).sum();

    let mut authors: Vec<Author> = scores
        .keys()
        .chain(loc_percentages.keys())
        .chain(commits.iter().map(|c| &c.author))
        .cloned()
        .collect();
    authors.sort();
    authors.dedup();

    let mut rows: Vec<AuthorReport> = authors
        .into_iter()
        .map(|author| {
            let score = scores.get(&author);
            let stats = commit_map.get(&author).copied();
            let commit_count = stats.map_or(0, |s| s.commits);
            let edits = stats.map_or(0, |s| s.additions + s.deletions);

            AuthorReport {
                average_complexity: round_dp(score.map_or(0.0, |s| s.average_complexity), 3),
                percentage_of_functions_written: round_dp(
                    score.map_or(0.0, |s| s.functions_pct),
                    2,
                ),
                percentage_of_hotspots: round_dp(score.map_or(0.0, |s| s.hotspots_pct), 2),
                percentage_of_loc: round_dp(
                    loc_percentages.get(&author).copied().unwrap_or(0.0),
                    2,
                ),
                commits: commit_count,
                additions: stats.map_or(0, |s| s.additions),
                deletions: stats.map_or(0, |s| s.deletions),
                commit_percentage: round_dp(pct(commit_count, total_commits), 2),
                edit_percentage: round_dp(pct(edits, total_edits), 2),
                author,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.percentage_of_loc
            .partial_cmp(&a.percentage_of_loc)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.author.cmp(&b.author))
    });

    Summary {
        authors: rows,
        total_functions: acc.total_functions,
        total_hotspots: acc.total_hotspots,
        hotspot_threshold: threshold.map(|t| round_dp(t, 3)),
        partial,
    }
}

fn pct(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * part as f64 / total as f64
    }
}

pub fn print_report(summary: &Summary) {
    if summary.authors.is_empty() {
        println!("No attributable contributions found.");
        return;
    }

    let name_width = max_width(summary.authors.iter().map(|r| r.author.as_str()), 6);
    let sep = separator(name_width + 66);

    println!("Contribution Attribution");
    println!("{sep}");
    println!(
        " {}  {:>8} {:>7} {:>7} {:>7} {:>8} {:>8} {:>7}",
        pad("Author", name_width),
        "AvgCx",
        "Func%",
        "Hot%",
        "LOC%",
        "Commits",
        "Commit%",
        "Edit%"
    );
    println!("{sep}");

    for row in &summary.authors {
        println!(
            " {}  {:>8.3} {:>7.2} {:>7.2} {:>7.2} {:>8} {:>8.2} {:>7.2}",
            pad(row.author.as_str(), name_width),
            row.average_complexity,
            row.percentage_of_functions_written,
            row.percentage_of_hotspots,
            row.percentage_of_loc,
            row.commits,
            row.commit_percentage,
            row.edit_percentage
        );
    }

    println!("{sep}");

    match summary.hotspot_threshold {
        Some(threshold) => println!(
            "Functions attributed: {} (hotspots: {}, mean complexity: {threshold:.3})",
            summary.total_functions, summary.total_hotspots
        ),
        None => println!("No functions found in the selected files."),
    }

    if summary.partial {
        println!(
            "note: run truncated by budget or caps; percentages cover the processed subset only"
        );
    }
}

pub fn print_json(summary: &Summary) -> Result<(), Box<dyn std::error::Error>> {
    print_json_stdout(summary)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
