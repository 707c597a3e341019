use std::process::ExitCode;

use clap::Parser;
use signage_cli::cli::Cli;
use signage_core::config::EditorConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "signage_cli=info,signage_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = EditorConfig::from_env()
        .map_err(anyhow::Error::from)
        .and_then(|config| signage_cli::run(cli, &config, &mut std::io::stdout().lock()));

    match result {
        Ok(status) => ExitCode::from(status.exit_code()),
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "Command failed");
            ExitCode::from(2)
        }
    }
}
