//! `migrate` command: manage the `users` schema outside of `serve`.
//!
//! `serve` applies pending migrations on startup; this command exists for
//! operators who need to inspect, roll back or rebuild the schema by hand.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Run one migration action against `DATABASE_URL`
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    let db = Database::connect_without_migrations(&config).await?;

    match args.action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            tracing::info!("users schema is up to date");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            tracing::info!("Rolled back the most recent migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            let pending = status.iter().filter(|(_, applied)| !applied).count();

            for (name, applied) in &status {
                let marker = if *applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
            tracing::info!(total = status.len(), pending, "Migration status");
        }
        MigrateAction::Fresh => {
            // Drops the users table and every row in it
            tracing::warn!("Dropping all tables before re-running migrations");
            db.fresh_migrations().await?;
            tracing::info!("users schema rebuilt from scratch");
        }
    }

    Ok(())
}
