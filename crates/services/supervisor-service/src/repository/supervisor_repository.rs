//! Supervisor repository implementation.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use super::entities::supervisor::{self, ActiveModel, Entity as SupervisorEntity};
use super::entities::team::{self, Entity as TeamEntity};
use common::{Operation, StoreError, StoreResult};
use domain::Supervisor;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Supervisor repository trait for dependency injection.
///
/// Reads only return supervisors whose assigned team resolves; a record
/// whose team join comes back empty is treated as absent.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SupervisorRepository: Send + Sync {
    /// Insert a new supervisor. Fails if the id already exists.
    async fn add(&self, supervisor: &Supervisor) -> StoreResult<()>;

    /// Delete the supervisor with `supervisor.id`
    async fn remove(&self, supervisor: &Supervisor) -> StoreResult<()>;

    /// Overwrite names and assigned team of an existing supervisor
    async fn modify(&self, supervisor: &Supervisor) -> StoreResult<()>;

    /// Find supervisor by ID, joined with its team
    async fn find(&self, id: &str) -> StoreResult<Option<Supervisor>>;

    /// List all supervisors ordered by ID
    async fn list(&self) -> StoreResult<Vec<Supervisor>>;

    /// Case-insensitive substring search on the first name
    async fn search_by_first_name(&self, term: &str) -> StoreResult<Vec<Supervisor>>;

    /// Case-insensitive substring search on the last name
    async fn search_by_last_name(&self, term: &str) -> StoreResult<Vec<Supervisor>>;
}

/// Concrete implementation of SupervisorRepository backed by SeaORM
pub struct SupervisorStore {
    db: DatabaseConnection,
}

impl SupervisorStore {
    /// Create new repository instance over an injected connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Close the underlying connection pool.
    ///
    /// Consumes the store. Every clone of the injected connection shares
    /// the pool and is closed with it.
    pub async fn close(self) -> StoreResult<()> {
        self.db
            .close()
            .await
            .map_err(|e| db_failure(Operation::Close, None, e))?;
        tracing::debug!("Supervisor store closed");
        Ok(())
    }

    async fn search(&self, column: supervisor::Column, term: &str) -> StoreResult<Vec<Supervisor>> {
        tracing::debug!(column = ?column, term, "Searching supervisors");

        let pattern = LikeExpr::new(format!("%{}%", escape_like(&term.to_lowercase()))).escape('\\');
        let rows = SupervisorEntity::find()
            .filter(Expr::expr(Func::lower(Expr::col((SupervisorEntity, column)))).like(pattern))
            .find_also_related(TeamEntity)
            .order_by_asc(supervisor::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| db_failure(Operation::Search, None, e))?;

        Ok(into_domain_rows(rows))
    }
}

/// Escape `LIKE` metacharacters so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn db_failure(operation: Operation, id: Option<&str>, err: DbErr) -> StoreError {
    let err = StoreError::database(operation, id, err);
    tracing::error!("{}", err);
    err
}

fn into_domain_rows(rows: Vec<(supervisor::Model, Option<team::Model>)>) -> Vec<Supervisor> {
    rows.into_iter()
        .filter_map(|(model, team)| model.into_domain(team))
        .collect()
}

#[async_trait]
impl SupervisorRepository for SupervisorStore {
    async fn add(&self, supervisor: &Supervisor) -> StoreResult<()> {
        tracing::debug!(id = %supervisor.id, team_id = %supervisor.team_id(), "Adding supervisor");

        SupervisorEntity::insert(ActiveModel::from(supervisor))
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| db_failure(Operation::Add, Some(supervisor.id.as_str()), e))?;

        Ok(())
    }

    async fn remove(&self, supervisor: &Supervisor) -> StoreResult<()> {
        tracing::debug!(id = %supervisor.id, "Removing supervisor");

        // Single conditional delete; the affected row count doubles as the existence check
        let result = SupervisorEntity::delete_by_id(supervisor.id.as_str())
            .exec(&self.db)
            .await
            .map_err(|e| db_failure(Operation::Remove, Some(supervisor.id.as_str()), e))?;

        if result.rows_affected == 0 {
            tracing::warn!(id = %supervisor.id, "Supervisor to remove not found");
            return Err(StoreError::not_found(Operation::Remove, &supervisor.id));
        }

        Ok(())
    }

    async fn modify(&self, supervisor: &Supervisor) -> StoreResult<()> {
        tracing::debug!(id = %supervisor.id, team_id = %supervisor.team_id(), "Modifying supervisor");

        let result = SupervisorEntity::update_many()
            .col_expr(
                supervisor::Column::FirstName,
                Expr::value(supervisor.first_name.clone()),
            )
            .col_expr(
                supervisor::Column::LastName,
                Expr::value(supervisor.last_name.clone()),
            )
            .col_expr(
                supervisor::Column::TeamId,
                Expr::value(supervisor.team_id().to_string()),
            )
            .filter(supervisor::Column::Id.eq(supervisor.id.as_str()))
            .exec(&self.db)
            .await
            .map_err(|e| db_failure(Operation::Modify, Some(supervisor.id.as_str()), e))?;

        if result.rows_affected == 0 {
            tracing::warn!(id = %supervisor.id, "Supervisor to modify not found");
            return Err(StoreError::not_found(Operation::Modify, &supervisor.id));
        }

        Ok(())
    }

    async fn find(&self, id: &str) -> StoreResult<Option<Supervisor>> {
        tracing::debug!(id, "Finding supervisor");

        let row = SupervisorEntity::find_by_id(id)
            .find_also_related(TeamEntity)
            .one(&self.db)
            .await
            .map_err(|e| db_failure(Operation::Find, Some(id), e))?;

        Ok(row.and_then(|(model, team)| model.into_domain(team)))
    }

    async fn list(&self) -> StoreResult<Vec<Supervisor>> {
        let rows = SupervisorEntity::find()
            .find_also_related(TeamEntity)
            .order_by_asc(supervisor::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| db_failure(Operation::List, None, e))?;

        Ok(into_domain_rows(rows))
    }

    async fn search_by_first_name(&self, term: &str) -> StoreResult<Vec<Supervisor>> {
        self.search(supervisor::Column::FirstName, term).await
    }

    async fn search_by_last_name(&self, term: &str) -> StoreResult<Vec<Supervisor>> {
        self.search(supervisor::Column::LastName, term).await
    }
}
