//! Supervisor command execution for the CLI.
//!
//! Commands run against any [`SupervisorRepository`] and return the text to
//! print, so they can be exercised with the mock repository.

use thiserror::Error;

use common::StoreError;
use domain::{Supervisor, Team};

use crate::repository::SupervisorRepository;

/// Name column targeted by a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    FirstName,
    LastName,
}

/// Supervisor action requested from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupervisorAction {
    Add {
        /// Generated when absent
        id: Option<String>,
        first_name: String,
        last_name: String,
        team_id: String,
        team_name: String,
    },
    Find {
        id: String,
    },
    Modify {
        id: String,
        first_name: String,
        last_name: String,
        team_id: String,
        team_name: String,
    },
    Remove {
        id: String,
    },
    List,
    Search {
        field: SearchField,
        term: String,
    },
}

/// Errors from running a supervisor command.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("could not render output: {0}")]
    Render(#[from] serde_json::Error),
}

/// Run `action` against `repo`, returning the output to print.
pub async fn execute(
    repo: &dyn SupervisorRepository,
    action: SupervisorAction,
) -> Result<String, CommandError> {
    match action {
        SupervisorAction::Add {
            id,
            first_name,
            last_name,
            team_id,
            team_name,
        } => {
            let id = id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
            let supervisor =
                Supervisor::new(id, first_name, last_name, Team::new(team_id, team_name));
            repo.add(&supervisor).await?;
            Ok(format!("Added supervisor {}", supervisor.id))
        }
        SupervisorAction::Find { id } => match repo.find(&id).await? {
            Some(supervisor) => Ok(serde_json::to_string_pretty(&supervisor)?),
            None => Ok(format!("Supervisor {} not found", id)),
        },
        SupervisorAction::Modify {
            id,
            first_name,
            last_name,
            team_id,
            team_name,
        } => {
            let supervisor =
                Supervisor::new(id, first_name, last_name, Team::new(team_id, team_name));
            repo.modify(&supervisor).await?;
            Ok(format!("Modified supervisor {}", supervisor.id))
        }
        SupervisorAction::Remove { id } => {
            // Only the id is used by the store's delete
            let supervisor = Supervisor::new(id, "", "", Team::new("", ""));
            repo.remove(&supervisor).await?;
            Ok(format!("Removed supervisor {}", supervisor.id))
        }
        SupervisorAction::List => {
            let supervisors = repo.list().await?;
            Ok(serde_json::to_string_pretty(&supervisors)?)
        }
        SupervisorAction::Search { field, term } => {
            let supervisors = match field {
                SearchField::FirstName => repo.search_by_first_name(&term).await?,
                SearchField::LastName => repo.search_by_last_name(&term).await?,
            };
            Ok(serde_json::to_string_pretty(&supervisors)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockSupervisorRepository;
    use common::Operation;
    use mockall::predicate::eq;

    fn ana() -> Supervisor {
        Supervisor::new("s1", "Ana", "Diaz", Team::new("t1", "Ops"))
    }

    #[tokio::test]
    async fn test_add_passes_full_supervisor() {
        let mut repo = MockSupervisorRepository::new();
        repo.expect_add()
            .with(eq(ana()))
            .times(1)
            .returning(|_| Ok(()));

        let output = execute(
            &repo,
            SupervisorAction::Add {
                id: Some("s1".to_string()),
                first_name: "Ana".to_string(),
                last_name: "Diaz".to_string(),
                team_id: "t1".to_string(),
                team_name: "Ops".to_string(),
            },
        )
        .await
        .unwrap();

        assert_eq!(output, "Added supervisor s1");
    }

    #[tokio::test]
    async fn test_add_generates_id_when_missing() {
        let mut repo = MockSupervisorRepository::new();
        repo.expect_add()
            .withf(|s: &Supervisor| !s.id.is_empty() && s.team_id() == "t1")
            .times(1)
            .returning(|_| Ok(()));

        let output = execute(
            &repo,
            SupervisorAction::Add {
                id: None,
                first_name: "Ana".to_string(),
                last_name: "Diaz".to_string(),
                team_id: "t1".to_string(),
                team_name: "Ops".to_string(),
            },
        )
        .await
        .unwrap();

        assert!(output.starts_with("Added supervisor "));
    }

    #[tokio::test]
    async fn test_find_missing_is_not_an_error() {
        let mut repo = MockSupervisorRepository::new();
        repo.expect_find().returning(|_| Ok(None));

        let output = execute(&repo, SupervisorAction::Find { id: "s9".to_string() })
            .await
            .unwrap();

        assert_eq!(output, "Supervisor s9 not found");
    }

    #[tokio::test]
    async fn test_find_renders_json() {
        let mut repo = MockSupervisorRepository::new();
        repo.expect_find()
            .with(eq("s1"))
            .returning(|_| Ok(Some(ana())));

        let output = execute(&repo, SupervisorAction::Find { id: "s1".to_string() })
            .await
            .unwrap();

        let parsed: Supervisor = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, ana());
    }

    #[tokio::test]
    async fn test_remove_missing_reports_not_found() {
        let mut repo = MockSupervisorRepository::new();
        repo.expect_find().never();
        repo.expect_remove()
            .times(1)
            .returning(|s| Err(StoreError::not_found(Operation::Remove, &s.id)));

        let err = execute(&repo, SupervisorAction::Remove { id: "s1".to_string() })
            .await
            .unwrap_err();

        match err {
            CommandError::Store(e) => {
                assert!(e.is_not_found());
                assert!(e.to_string().contains("s1"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_remove_deletes_by_id_without_lookup() {
        let mut repo = MockSupervisorRepository::new();
        repo.expect_find().never();
        repo.expect_remove()
            .withf(|s: &Supervisor| s.id == "s1")
            .times(1)
            .returning(|_| Ok(()));

        let output = execute(&repo, SupervisorAction::Remove { id: "s1".to_string() })
            .await
            .unwrap();

        assert_eq!(output, "Removed supervisor s1");
    }

    #[tokio::test]
    async fn test_modify_propagates_not_found() {
        let mut repo = MockSupervisorRepository::new();
        repo.expect_modify()
            .returning(|s| Err(StoreError::not_found(Operation::Modify, &s.id)));

        let err = execute(
            &repo,
            SupervisorAction::Modify {
                id: "s1".to_string(),
                first_name: "Ana".to_string(),
                last_name: "Lopez".to_string(),
                team_id: "t2".to_string(),
                team_name: "QA".to_string(),
            },
        )
        .await
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "could not modify Supervisor with id s1: record not found"
        );
    }

    #[tokio::test]
    async fn test_search_dispatches_on_field() {
        let mut repo = MockSupervisorRepository::new();
        repo.expect_search_by_last_name()
            .with(eq("diaz"))
            .times(1)
            .returning(|_| Ok(vec![ana()]));
        repo.expect_search_by_first_name().never();

        let output = execute(
            &repo,
            SupervisorAction::Search {
                field: SearchField::LastName,
                term: "diaz".to_string(),
            },
        )
        .await
        .unwrap();

        let parsed: Vec<Supervisor> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, vec![ana()]);
    }
}
