use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fixstr_core::Strategy;

mod commands;

#[derive(Parser)]
#[command(
    name = "fixstr",
    version,
    about = "Cancel adjacent opposite-case letter pairs until none remain"
)]
struct Cli {
    /// Enable debug logging (ignored when RUST_LOG is set)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reduce each argument, or each stdin line when no argument is given
    Reduce {
        /// Strings to reduce
        text: Vec<String>,

        /// Algorithm to use (stack or rescan); overrides the config file
        #[arg(short, long)]
        strategy: Option<Strategy>,

        /// Print one JSON object per input
        #[arg(long)]
        json: bool,

        /// Config file to use instead of the usual lookup
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Report whether a string still contains a bad pair
    Check {
        /// String to inspect
        text: String,
    },
    /// Run the built-in acceptance cases (and any extra case files) under every strategy
    Verify {
        /// Extra TOML case files in `[[case]]` format
        #[arg(long = "cases")]
        cases: Vec<PathBuf>,
    },
    /// Print the resolved config and where it came from
    Config {
        /// Config file to use instead of the usual lookup
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Reduce {
            text,
            strategy,
            json,
            config,
        } => commands::cmd_reduce(&text, strategy, json, config.as_deref()),
        Commands::Check { text } => commands::cmd_check(&text),
        Commands::Verify { cases } => commands::cmd_verify(&cases),
        Commands::Config { config } => commands::cmd_config(config.as_deref()),
    }
}

/// Initialize logging. `RUST_LOG` wins when set; otherwise `-v` selects
/// debug and the default is warn.
fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
