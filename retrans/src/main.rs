// retrans/src/main.rs
//! retrans entry point.
//!
//! Parses the command line, sets up logging and dispatches to a subcommand.

use anyhow::{Context, Result};
use clap::Parser;

use retrans::cli::{Cli, Commands};
use retrans::commands::apply::{run_apply, ApplyOptions};
use retrans::commands::check::run_check;
use retrans::logger;
use retrans_core::TransliterationConfig;

fn main() -> Result<()> {
    let args = Cli::parse();
    logger::init_logger(logger::level_from_flags(args.quiet, args.debug));

    match args.command {
        Commands::Apply(cmd) => {
            let config = TransliterationConfig::load_from_file(&cmd.mappings)
                .context("Failed to load mappings")?;
            run_apply(
                &config,
                ApplyOptions {
                    words: cmd.words,
                    input_file: cmd.input_file,
                    output_path: cmd.output,
                },
            )?;
        }
        Commands::Check(cmd) => {
            let summary = run_check(&cmd.mappings)?;
            println!("{}", summary);
        }
    }

    Ok(())
}
