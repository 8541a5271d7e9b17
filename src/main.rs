//! media-space server binary.
//!
//! `media-space serve` opens the MySQL pool, applies the `users` migration and
//! serves the HTTP API; `media-space migrate <action>` manages the schema
//! without starting the server. Any command error is logged and exits with 1.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use media_space::{
    cli::{Cli, Commands},
    commands,
    config::Config,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = Config::from_env();
    tracing::debug!(?config, "Configuration loaded");

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, config).await,
        Commands::Migrate(args) => commands::migrate::execute(args, config).await,
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "media-space exited with an error");
        std::process::exit(1);
    }
}

/// `--verbose` forces `debug` (which includes the per-operation user service
/// logs); otherwise `RUST_LOG` applies, defaulting to `info`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
