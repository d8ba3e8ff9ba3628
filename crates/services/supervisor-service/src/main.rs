//! Supervisor Service - CLI for supervisor persistence.

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use supervisor_service_lib::commands::{SearchField, SupervisorAction};
use supervisor_service_lib::MigrateAction;

#[derive(Parser)]
#[command(name = "supervisor-service")]
#[command(about = "Supervisor persistence service")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
    /// Supervisor record commands
    Supervisor {
        #[command(subcommand)]
        action: SupervisorCommands,
    },
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[derive(Args)]
struct SupervisorFields {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    /// ID of an existing team
    #[arg(long)]
    team_id: String,
    /// Team display name; only the team ID is stored
    #[arg(long)]
    team_name: Option<String>,
}

#[derive(Subcommand)]
enum SupervisorCommands {
    /// Add a new supervisor
    Add {
        /// Supervisor ID (random UUID if omitted)
        #[arg(long)]
        id: Option<String>,
        #[command(flatten)]
        fields: SupervisorFields,
    },
    /// Show a supervisor with its team
    Find { id: String },
    /// Overwrite names and team of a supervisor
    Modify {
        id: String,
        #[command(flatten)]
        fields: SupervisorFields,
    },
    /// Remove a supervisor
    Remove { id: String },
    /// List all supervisors
    List,
    /// Search supervisors by name (case-insensitive)
    Search {
        /// Match against the last name instead of the first name
        #[arg(long)]
        last_name: bool,
        term: String,
    },
}

impl From<SupervisorCommands> for SupervisorAction {
    fn from(cmd: SupervisorCommands) -> Self {
        match cmd {
            SupervisorCommands::Add { id, fields } => SupervisorAction::Add {
                id,
                first_name: fields.first_name,
                last_name: fields.last_name,
                team_id: fields.team_id,
                team_name: fields.team_name.unwrap_or_default(),
            },
            SupervisorCommands::Find { id } => SupervisorAction::Find { id },
            SupervisorCommands::Modify { id, fields } => SupervisorAction::Modify {
                id,
                first_name: fields.first_name,
                last_name: fields.last_name,
                team_id: fields.team_id,
                team_name: fields.team_name.unwrap_or_default(),
            },
            SupervisorCommands::Remove { id } => SupervisorAction::Remove { id },
            SupervisorCommands::List => SupervisorAction::List,
            SupervisorCommands::Search { last_name, term } => SupervisorAction::Search {
                field: if last_name {
                    SearchField::LastName
                } else {
                    SearchField::FirstName
                },
                term,
            },
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            supervisor_service_lib::run_migrations(migrate_action).await?;
        }
        Commands::Supervisor { action } => {
            supervisor_service_lib::run_supervisor_command(action.into()).await?;
        }
    }

    Ok(())
}

/// Initialize tracing subscriber (verbose mode sets debug level)
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_without_team_name() {
        let cli = Cli::try_parse_from([
            "supervisor-service",
            "supervisor",
            "add",
            "--id",
            "s1",
            "--first-name",
            "Ana",
            "--last-name",
            "Diaz",
            "--team-id",
            "t1",
        ])
        .unwrap();

        let Commands::Supervisor { action } = cli.command else {
            panic!("expected supervisor command");
        };
        assert_eq!(
            SupervisorAction::from(action),
            SupervisorAction::Add {
                id: Some("s1".to_string()),
                first_name: "Ana".to_string(),
                last_name: "Diaz".to_string(),
                team_id: "t1".to_string(),
                team_name: String::new(),
            }
        );
    }
}
