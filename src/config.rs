//! Optional `cred.toml` settings at the analyzed root.
//!
//! Every selection and budget constant is a tunable: the settings file
//! overrides the built-in defaults, and CLI flags override the file.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::cli::SelectionArgs;
use crate::walk::SelectConfig;

pub const SETTINGS_FILE: &str = "cred.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Extra directory names to exclude (extends the built-in set).
    pub exclude_dirs: Vec<String>,
    /// Extra glob patterns to exclude.
    pub exclude: Vec<String>,
    /// Extra generated-content name fragments (extends the built-in set).
    pub skip_names: Vec<String>,
    /// Replacement extension allow-list (built-in list kept when empty).
    pub allowed_exts: Vec<String>,
    pub max_file_bytes: Option<u64>,
    pub max_file_lines: Option<usize>,
    pub max_files: Option<usize>,
    pub max_functions: Option<usize>,
    pub budget_seconds: Option<u64>,
}

/// Load settings from `<root>/cred.toml`. A missing file yields defaults;
/// an invalid one is reported and ignored.
pub fn load(root: &Path) -> Settings {
    let path = root.join(SETTINGS_FILE);
    let Ok(raw) = fs::read_to_string(&path) else {
        return Settings::default();
    };
    match toml::from_str(&raw) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("warning: {}: {err}", path.display());
            Settings::default()
        }
    }
}

/// Resolve the effective selection config: defaults, then the settings
/// file, then CLI flags.
pub fn select_config(settings: &Settings, args: &SelectionArgs) -> SelectConfig {
    let mut cfg = SelectConfig::default();

    cfg.exclude_dirs.extend(settings.exclude_dirs.iter().cloned());
    cfg.exclude_globs.extend(settings.exclude.iter().cloned());
    cfg.skip_name_substrings
        .extend(settings.skip_names.iter().cloned());
    if !settings.allowed_exts.is_empty() {
        cfg.allowed_exts = settings.allowed_exts.clone();
    }
    if let Some(v) = settings.max_file_bytes {
        cfg.max_file_bytes = v;
    }
    if let Some(v) = settings.max_file_lines {
        cfg.max_file_lines = v;
    }
    if let Some(v) = settings.max_files {
        cfg.max_files = v;
    }

    cfg.exclude_dirs.extend(args.exclude_dirs.iter().cloned());
    cfg.exclude_globs.extend(args.exclude_globs.iter().cloned());
    if let Some(v) = args.max_file_bytes {
        cfg.max_file_bytes = v;
    }
    if let Some(v) = args.max_file_lines {
        cfg.max_file_lines = v;
    }
    if let Some(v) = args.max_files {
        cfg.max_files = v;
    }

    cfg
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
