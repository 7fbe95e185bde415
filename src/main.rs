mod cli;

use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wordpack::CodecError;

use crate::cli::{Cli, Commands};

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordpack=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress { input, output } => cli::compress(&input, &output).map(|_| true),
        Commands::Decompress { input, output } => cli::decompress(&input, &output).map(|_| true),
        Commands::RoundTrip { input, packed, restored } => cli::round_trip(&input, &packed, &restored),
        Commands::Table => {
            cli::show_table();
            Ok(true)
        }
    };

    match result {
        Ok(true) => Ok(ExitCode::SUCCESS),
        Ok(false) => {
            error!("Restored text differs from the input");
            Ok(ExitCode::FAILURE)
        }
        Err(e @ CodecError::SourceNotFound { .. }) => {
            error!("{}", e);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
