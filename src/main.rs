// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use review_bundle::{app, args::Args, logging};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match app::run(&args) {
        Ok(summary) => {
            println!(
                "Wrote {} with {} file(s).",
                summary.output_path.display(),
                summary.files
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
