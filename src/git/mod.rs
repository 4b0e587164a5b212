use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

use git2::{BlameOptions, DiffOptions, Repository, Sort};
use serde::{Serialize, Serializer};

/// A contributor identity as reported by blame or commit metadata.
///
/// Lines whose signature cannot be resolved map to `Unknown` instead of
/// being dropped, so share math stays total. Each distinct name string is a
/// distinct contributor; no alias resolution happens here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Author {
    Known(String),
    Unknown,
}

impl Author {
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some(n) if !n.trim().is_empty() => Author::Known(n.to_string()),
            _ => Author::Unknown,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Author::Known(name) => name,
            Author::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Author {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Per-author commit totals over first-parent history.
#[derive(Debug, Clone, Serialize)]
pub struct CommitStats {
    pub author: Author,
    pub commits: usize,
    pub additions: usize,
    pub deletions: usize,
}

pub struct GitRepo {
    repo: Repository,
    root: PathBuf,
}

impl GitRepo {
    pub fn open(path: &Path) -> Result<Self, Box<dyn Error>> {
        let repo = Repository::discover(path)?;
        let root = repo
            .workdir()
            .ok_or("bare repositories are not supported")?
            .to_path_buf();
        Ok(Self { repo, root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Blame a file once, for all of its lines, and return one author per
    /// line (index 0 = line 1). Hunks without a resolvable signature yield
    /// `Author::Unknown`.
    ///
    /// One blame per file is what keeps attribution tractable: callers slice
    /// the returned map per function instead of blaming each range.
    /// `rel_path` is relative to the git root. Untracked or missing files
    /// fail here and the caller skips the whole file.
    pub fn blame_lines(&self, rel_path: &Path) -> Result<Vec<Author>, Box<dyn Error>> {
        let mut opts = BlameOptions::new();
        let blame = self.repo.blame_file(rel_path, Some(&mut opts))?;

        let mut line_count = 0usize;
        for hunk in blame.iter() {
            if hunk.lines_in_hunk() == 0 {
                continue;
            }
            line_count = line_count.max(hunk.final_start_line() + hunk.lines_in_hunk() - 1);
        }

        let mut lines = vec![Author::Unknown; line_count];
        for hunk in blame.iter() {
            if hunk.lines_in_hunk() == 0 {
                continue;
            }
            let sig = hunk.final_signature();
            let author = Author::from_name(sig.name());
            let start = hunk.final_start_line() - 1; // 1-based to 0-based
            for slot in lines.iter_mut().skip(start).take(hunk.lines_in_hunk()) {
                *slot = author.clone();
            }
        }

        Ok(lines)
    }

    /// Count commits and edited lines per author, skipping merge commits.
    pub fn commit_stats(&self) -> Result<Vec<CommitStats>, Box<dyn Error>> {
        let mut map: HashMap<Author, CommitStats> = HashMap::new();
        let mut revwalk = self.repo.revwalk()?;
        revwalk.push_head()?;
        revwalk.set_sorting(Sort::TIME)?;

        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;

            if commit.parent_count() > 1 {
                continue;
            }

            let author = Author::from_name(commit.author().name());
            let (additions, deletions) = self.commit_line_stats(&commit)?;

            map.entry(author.clone())
                .and_modify(|stats| {
                    stats.commits += 1;
                    stats.additions += additions;
                    stats.deletions += deletions;
                })
                .or_insert(CommitStats {
                    author,
                    commits: 1,
                    additions,
                    deletions,
                });
        }

        let mut result: Vec<CommitStats> = map.into_values().collect();
        result.sort_by(|a, b| b.commits.cmp(&a.commits).then_with(|| a.author.cmp(&b.author)));
        Ok(result)
    }

    fn commit_line_stats(&self, commit: &git2::Commit) -> Result<(usize, usize), Box<dyn Error>> {
        let tree = commit.tree()?;
        let parent_tree = if commit.parent_count() > 0 {
            Some(commit.parent(0)?.tree()?)
        } else {
            None
        };

        let mut opts = DiffOptions::new();
        let diff =
            self.repo
                .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), Some(&mut opts))?;
        let stats = diff.stats()?;
        Ok((stats.insertions(), stats.deletions()))
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
