// src/app.rs
use anyhow::{Context, Result};
use review_bundle_engine::{Config, RuleSet, RunSummary};

use crate::args::Args;

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self {
            project_dir: args.project_dir.clone(),
            output_path: args.output.clone(),
            max_file_kib: args.max_file_kb,
            rules: RuleSet::default(),
        }
    }
}

/// Build and write the bundle described by `args`.
///
/// # Errors
/// Returns the engine failure wrapped with the output path.
pub fn run(args: &Args) -> Result<RunSummary> {
    let config = Config::from(args);
    tracing::debug!(
        project_dir = %config.project_dir.display(),
        max_file_kib = config.max_file_kib,
        roots = config.rules.roots.len(),
        "resolved configuration"
    );

    review_bundle_engine::run(&config)
        .with_context(|| format!("failed to build {}", config.output_path.display()))
}
