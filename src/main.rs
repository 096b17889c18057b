use anyhow::Result;
use clap::Parser;
use engagemap::cli::{Cli, Commands};
use engagemap::commands::analyze::{handle_analyze, AnalyzeConfig};
use engagemap::commands::init::init_config;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input_path,
            config,
            format,
            output,
            top,
        } => handle_analyze(AnalyzeConfig {
            input_path,
            config,
            format,
            output,
            top,
        }),
        Commands::Init { force } => init_config(force),
    }
}
