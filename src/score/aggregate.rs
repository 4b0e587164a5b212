use std::collections::HashMap;

use crate::git::Author;

/// Arithmetic mean of the collected complexities, the fixed hotspot cutoff
/// for a run. `None` when no functions were collected: an empty function
/// universe means nothing to attribute, not an error.
pub fn mean_complexity(complexities: &[usize]) -> Option<f64> {
    if complexities.is_empty() {
        return None;
    }
    let sum: usize = complexities.iter().sum();
    Some(sum as f64 / complexities.len() as f64)
}

/// Slice a whole-file line-author map down to one function's 1-based range.
/// `None` when the range falls outside the map (the file changed between
/// scan and blame, or the bounds are corrupt); the function is then
/// discarded without aggregation.
pub fn slice_lines(lines: &[Author], start_line: usize, end_line: usize) -> Option<&[Author]> {
    if start_line == 0 || end_line < start_line || end_line > lines.len() {
        return None;
    }
    Some(&lines[start_line - 1..end_line])
}

/// Per-author running totals, owned by the attribution stage and updated
/// one function at a time. Every update leaves the accumulator in a valid,
/// queryable state, so a run may stop after any function and report what it
/// has.
#[derive(Debug, Default)]
pub struct Accumulator {
    /// Weighted complexity contributions, one entry per touched function.
    contributions: HashMap<Author, Vec<f64>>,
    function_shares: HashMap<Author, f64>,
    hotspot_shares: HashMap<Author, f64>,
    pub total_functions: usize,
    pub total_hotspots: usize,
}

impl Accumulator {
    /// Attribute one function to the authors of its blamed lines.
    ///
    /// Every author with `n` of `total` lines gains a weighted complexity
    /// contribution of `complexity * n / total`. Ownership is a majority
    /// vote: all authors tied for the most lines split one share evenly.
    /// Hotspot shares go to the same owners with the same split.
    ///
    /// An empty slice contributes nothing, not even to the totals.
    pub fn record(&mut self, complexity: usize, lines: &[Author], hotspot: bool) {
        if lines.is_empty() {
            return;
        }

        let mut counts: HashMap<&Author, usize> = HashMap::new();
        for author in lines {
            *counts.entry(author).or_insert(0) += 1;
        }
        let total = lines.len() as f64;

        self.total_functions += 1;

        for (&author, &n) in &counts {
            self.contributions
                .entry(author.clone())
                .or_default()
                .push(complexity as f64 * n as f64 / total);
        }

        let max = counts.values().copied().max().unwrap_or(0);
        let owners: Vec<&Author> = counts
            .iter()
            .filter(|&(_, &n)| n == max)
            .map(|(&author, _)| author)
            .collect();
        let share = 1.0 / owners.len() as f64;

        for owner in &owners {
            *self.function_shares.entry((*owner).clone()).or_insert(0.0) += share;
        }

        if hotspot {
            self.total_hotspots += 1;
            for owner in &owners {
                *self.hotspot_shares.entry((*owner).clone()).or_insert(0.0) += share;
            }
        }
    }

    /// Finalize into per-author scores (unrounded; presentation rounds).
    /// Only authors with at least one contribution appear.
    pub fn finalize(&self) -> Vec<AuthorScore> {
        let mut scores: Vec<AuthorScore> = self
            .contributions
            .iter()
            .map(|(author, contributions)| {
                let sum: f64 = contributions.iter().sum();
                let average_complexity = sum / contributions.len() as f64;

                let owned = self.function_shares.get(author).copied().unwrap_or(0.0);
                let functions_pct = if self.total_functions > 0 {
                    100.0 * owned / self.total_functions as f64
                } else {
                    0.0
                };

                let owned_hotspots = self.hotspot_shares.get(author).copied().unwrap_or(0.0);
                let hotspots_pct = if self.total_hotspots > 0 {
                    100.0 * owned_hotspots / self.total_hotspots as f64
                } else {
                    0.0
                };

                AuthorScore {
                    author: author.clone(),
                    average_complexity,
                    functions_pct,
                    hotspots_pct,
                }
            })
            .collect();

        scores.sort_by(|a, b| {
            b.functions_pct
                .partial_cmp(&a.functions_pct)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.author.cmp(&b.author))
        });
        scores
    }
}

/// Finalized attribution metrics for one author.
#[derive(Debug, Clone)]
pub struct AuthorScore {
    pub author: Author,
    pub average_complexity: f64,
    pub functions_pct: f64,
    pub hotspots_pct: f64,
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
