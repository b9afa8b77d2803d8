use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod input;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays a clean document
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("autoviv=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = cli.format;

    match cli.command {
        Commands::Extend(args) => commands::extend::run(&args, format),
        Commands::Update(args) => commands::update::run(&args, format),
        Commands::Prune(args) => commands::prune::run(&args, format),
        Commands::Get(args) => commands::get::run(&args, format),
    }
}
