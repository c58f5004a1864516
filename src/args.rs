// src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use review_bundle_engine::config::{DEFAULT_MAX_FILE_KIB, DEFAULT_OUTPUT};

/// Bundle a project's source and config files into one markdown document for review.
#[derive(Parser, Debug)]
#[command(name = "review-bundle", version = crate::VERSION)]
pub struct Args {
    /// Destination markdown file (overwritten on every run)
    #[arg(default_value = DEFAULT_OUTPUT, value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    /// Per-file size cap in KiB; larger files are truncated
    #[arg(default_value_t = DEFAULT_MAX_FILE_KIB)]
    pub max_file_kb: u64,

    /// Directory the configured roots are resolved against
    #[arg(short = 'C', long, default_value = ".", value_hint = ValueHint::DirPath)]
    pub project_dir: PathBuf,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
