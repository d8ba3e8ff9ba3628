//! Supervisor Service Library
//!
//! Persists and retrieves supervisors through SeaORM, mapping between the
//! `supervisors`/`teams` tables and the domain model.

pub mod commands;
pub mod config;
pub mod infra;
pub mod repository;

use tracing::info;

use crate::commands::SupervisorAction;
use crate::config::SupervisorServiceConfig;
use crate::infra::Database;
use crate::repository::SupervisorStore;

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = SupervisorServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run a single supervisor command against the configured database.
///
/// The store is closed once the command has finished, whether or not it
/// succeeded.
pub async fn run_supervisor_command(
    action: SupervisorAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = SupervisorServiceConfig::from_env();
    let db = Database::connect(&config.database).await?;
    let store = SupervisorStore::new(db.get_connection());

    let result = commands::execute(&store, action).await;
    store.close().await?;

    println!("{}", result?);
    Ok(())
}
