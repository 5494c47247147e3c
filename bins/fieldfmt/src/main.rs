mod config;
mod error;

use clap::Parser;
use config::{Cli, Commands};

mod cmd;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run(args) => cmd::run::run(args),
        Commands::Check(args) => cmd::check::run(args),
        Commands::Cultures => cmd::cultures::run(),
    };
    if let Err(e) = result {
        tracing::error!(error = %e, "fieldfmt failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
