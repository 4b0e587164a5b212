mod budget;
mod cli;
mod config;
mod functions;
mod git;
mod loc_share;
mod report_helpers;
mod score;
mod util;
mod walk;

use std::error::Error;
use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use cli::{Cli, Commands, SelectionArgs};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            selection,
            budget,
            max_functions,
        } => {
            let (target, cfg, settings) = resolve(&selection);
            let opts = score::Options {
                json: selection.json,
                budget_seconds: budget.or(settings.budget_seconds),
                max_functions: max_functions
                    .or(settings.max_functions)
                    .unwrap_or(score::MAX_FUNCTIONS),
            };
            exit_on_error(score::run(&target, &cfg, &opts));
        }
        Commands::Loc { selection } => {
            let (target, cfg, _) = resolve(&selection);
            exit_on_error(loc_share::run(&target, &cfg, selection.json));
        }
        Commands::Functions { selection, top } => {
            let (target, cfg, _) = resolve(&selection);
            exit_on_error(functions::run(&target, &cfg, top, selection.json));
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
        }
    }
}

/// Resolve the target path and the effective selection config from the
/// defaults, `cred.toml`, and CLI flags.
fn resolve(selection: &SelectionArgs) -> (PathBuf, walk::SelectConfig, config::Settings) {
    let target = selection.path.clone().unwrap_or_else(|| PathBuf::from("."));
    let settings = config::load(&target);
    let cfg = config::select_config(&settings, selection);
    (target, cfg, settings)
}

fn exit_on_error(result: Result<(), Box<dyn Error>>) {
    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
