//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use lichen::output::OutputMode;

/// lichen - Fetch and verify Go module dependencies
#[derive(Parser, Debug)]
#[command(
    name = "lichen",
    version,
    about = "Fetch and verify Go module dependencies",
    long_about = "Download Go modules ahead of license auditing.\n\n\
                  Remote modules are fetched with `go mod download`; local modules are\n\
                  taken as-is. Every requested module must resolve or the fetch fails."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ~/.config/lichen/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Download modules and verify every one was resolved
    Fetch {
        /// Module references (`path@version`, or a local directory)
        refs: Vec<String>,

        /// Go executable to run (name or path)
        #[arg(long)]
        go: Option<String>,

        /// Give up after this many seconds
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Fetch { refs, go, timeout }) => {
            let options = commands::FetchOptions {
                config: cli.config,
                go,
                timeout,
            };
            commands::fetch(&refs, &options, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": lichen::VERSION
                    })
                );
            } else {
                println!("lichen v{}", lichen::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": lichen::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("lichen v{}", lichen::VERSION);
                println!("\nRun 'lichen --help' for usage");
                println!("Run 'lichen fetch <module@version>...' to fetch modules");
            }
            Ok(())
        },
    }
}
