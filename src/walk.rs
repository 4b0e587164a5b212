use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

/// Directory names never considered source, pruned during the walk.
pub const EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    "venv",
    "__pycache__",
    ".git",
    "dist",
    "build",
    ".idea",
    ".vscode",
    ".next",
    "coverage",
    "out",
    "target",
];

/// Extensions eligible for analysis. Markup and plain config files are
/// deliberately absent: no functions to scan, and LOC share already has a
/// broad enough denominator with these.
pub const ALLOWED_EXTS: &[&str] = &[
    "py", "js", "jsx", "ts", "tsx", "java", "kt", "kts", "c", "cc", "cpp", "h", "hpp", "cs", "go",
    "rb", "php", "swift", "m", "mm", "rs", "scala", "lua", "sh", "ps1",
];

/// File-name fragments that indicate minified, bundled, or generated content.
pub const SKIP_NAME_SUBSTRINGS: &[&str] = &["min.", ".bundle", ".generated", ".map"];

pub const MAX_FILE_BYTES: u64 = 1_000_000;
pub const MAX_FILE_LINES: usize = 4_000;
pub const MAX_FILES: usize = 5_000;

/// A file that passed selection. `abs` is the on-disk path; `rel` is the
/// path git uses for it (relative to the repository root).
#[derive(Debug, Clone)]
pub struct CandidateFile {
    pub abs: PathBuf,
    pub rel: PathBuf,
}

/// Selection tunables. Defaults mirror the constants above; `cred.toml`
/// and CLI flags may override them.
#[derive(Debug, Clone)]
pub struct SelectConfig {
    pub exclude_dirs: Vec<String>,
    pub allowed_exts: Vec<String>,
    pub skip_name_substrings: Vec<String>,
    pub exclude_globs: Vec<String>,
    pub max_file_bytes: u64,
    pub max_file_lines: usize,
    pub max_files: usize,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            exclude_dirs: EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
            allowed_exts: ALLOWED_EXTS.iter().map(|s| s.to_string()).collect(),
            skip_name_substrings: SKIP_NAME_SUBSTRINGS.iter().map(|s| s.to_string()).collect(),
            exclude_globs: Vec::new(),
            max_file_bytes: MAX_FILE_BYTES,
            max_file_lines: MAX_FILE_LINES,
            max_files: MAX_FILES,
        }
    }
}

/// Walk `root` and return candidate files in sorted walk order, stopping
/// once the file cap is reached. Files later in walk order are simply never
/// considered after the cap. Unreadable or oversized files are skipped;
/// nothing here is fatal.
///
/// `git_root` must be canonical; `rel` paths are computed against it so they
/// match what git reports for the same files.
pub fn select_files(root: &Path, git_root: &Path, cfg: &SelectConfig) -> Vec<CandidateFile> {
    let globs = build_globset(&cfg.exclude_globs);
    let mut selected: Vec<CandidateFile> = Vec::new();

    for entry in walk(root, &cfg.exclude_dirs) {
        if selected.len() >= cfg.max_files {
            break;
        }

        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                eprintln!("warning: {err}");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        if !name_allowed(path, cfg) {
            continue;
        }

        if let Some(set) = &globs
            && let Ok(rel) = path.strip_prefix(root)
            && set.is_match(rel)
        {
            continue;
        }

        if !within_caps(path, cfg) {
            continue;
        }

        let Ok(abs) = path.canonicalize() else {
            continue;
        };
        let Ok(rel) = abs.strip_prefix(git_root) else {
            continue;
        };
        let rel = rel.to_path_buf();

        selected.push(CandidateFile { abs, rel });
    }

    selected
}

/// Build a directory walker that prunes excluded directories and sorts
/// entries by name, so cap truncation cuts at a reproducible point.
fn walk(root: &Path, exclude_dirs: &[String]) -> ignore::Walk {
    let dirs: Vec<String> = exclude_dirs.to_vec();
    WalkBuilder::new(root)
        .hidden(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| {
            if entry.file_type().is_some_and(|ft| ft.is_dir())
                && let Some(name) = entry.file_name().to_str()
                && dirs.iter().any(|d| d == name)
            {
                return false;
            }
            true
        })
        .build()
}

/// Check the file name against the extension allow-list and the
/// generated-content substrings.
fn name_allowed(path: &Path, cfg: &SelectConfig) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let name = name.to_ascii_lowercase();

    if cfg.skip_name_substrings.iter().any(|s| name.contains(s.as_str())) {
        return false;
    }

    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    cfg.allowed_exts
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(ext))
}

/// Enforce the byte and line caps. Lines are counted by streaming the file
/// in 32 KiB chunks and counting newline bytes, stopping early once the cap
/// is exceeded, so an oversized file is never fully loaded.
fn within_caps(path: &Path, cfg: &SelectConfig) -> bool {
    let Ok(meta) = path.metadata() else {
        return false;
    };
    if meta.len() > cfg.max_file_bytes {
        return false;
    }

    let Ok(mut file) = File::open(path) else {
        return false;
    };
    let mut buf = [0u8; 32 * 1024];
    let mut lines = 0usize;
    loop {
        match file.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                lines += buf[..n].iter().filter(|&&b| b == b'\n').count();
                if lines > cfg.max_file_lines {
                    return false;
                }
            }
            Err(_) => return false,
        }
    }
    true
}

fn build_globset(patterns: &[String]) -> Option<GlobSet> {
    if patterns.is_empty() {
        return None;
    }
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        match Glob::new(pattern) {
            Ok(glob) => {
                builder.add(glob);
            }
            Err(err) => eprintln!("warning: bad exclude pattern {pattern:?}: {err}"),
        }
    }
    builder.build().ok()
}

#[cfg(test)]
#[path = "walk_test.rs"]
mod tests;
