mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ask(args) => commands::ask::run(&args),
        Commands::Matrix { docs, config } => {
            commands::matrix::run(docs.as_deref(), config.as_deref())
        }
        Commands::Suggest => commands::suggest::run(),
        Commands::Version => commands::version::run(),
    }
}
