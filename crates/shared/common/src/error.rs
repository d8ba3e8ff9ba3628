//! Store error handling.
//!
//! Every failure of the supervisor store funnels into one error kind,
//! [`StoreError`], tagged with the operation, the id involved and the cause.

use sea_orm::DbErr;
use thiserror::Error;

/// Store operation that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Remove,
    Modify,
    Find,
    List,
    Search,
    Close,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Remove => "remove",
            Operation::Modify => "modify",
            Operation::Find => "find",
            Operation::List => "list",
            Operation::Search => "search",
            Operation::Close => "close",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Underlying cause of a [`StoreError`].
#[derive(Error, Debug)]
pub enum StoreCause {
    /// No record with the requested id
    #[error("record not found")]
    NotFound,

    /// Connection, constraint or query failure reported by the database
    #[error(transparent)]
    Database(#[from] DbErr),
}

/// Error returned by every store operation.
///
/// The message embeds the operation, the id and the cause, e.g.
/// `could not remove Supervisor with id s1: record not found`.
#[derive(Error, Debug)]
#[error("could not {operation} Supervisor{}: {cause}", id_suffix(.entity_id))]
pub struct StoreError {
    pub operation: Operation,
    pub entity_id: Option<String>,
    #[source]
    pub cause: StoreCause,
}

fn id_suffix(entity_id: &Option<String>) -> String {
    match entity_id {
        Some(id) => format!(" with id {}", id),
        None => String::new(),
    }
}

impl StoreError {
    pub fn not_found(operation: Operation, id: impl Into<String>) -> Self {
        Self {
            operation,
            entity_id: Some(id.into()),
            cause: StoreCause::NotFound,
        }
    }

    /// Wrap a database error; `id` is `None` for operations without a target record.
    pub fn database(operation: Operation, id: Option<&str>, err: DbErr) -> Self {
        Self {
            operation,
            entity_id: id.map(str::to_string),
            cause: StoreCause::Database(err),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.cause, StoreCause::NotFound)
    }
}

/// Result type alias
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_not_found_message_embeds_operation_and_id() {
        let err = StoreError::not_found(Operation::Remove, "s1");
        assert_eq!(
            err.to_string(),
            "could not remove Supervisor with id s1: record not found"
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn test_database_message_embeds_cause() {
        let err = StoreError::database(
            Operation::Add,
            Some("s1"),
            DbErr::Custom("duplicate key".to_string()),
        );
        let msg = err.to_string();
        assert!(msg.starts_with("could not add Supervisor with id s1: "));
        assert!(msg.contains("duplicate key"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_database_cause_is_exposed_as_source() {
        let err = StoreError::database(
            Operation::Add,
            Some("s1"),
            DbErr::Custom("duplicate key".to_string()),
        );
        let source = err.source().expect("database cause as source");
        assert!(matches!(
            source.downcast_ref::<StoreCause>(),
            Some(StoreCause::Database(DbErr::Custom(_)))
        ));
    }

    #[test]
    fn test_message_without_id() {
        let err = StoreError::database(
            Operation::List,
            None,
            DbErr::Custom("connection reset".to_string()),
        );
        assert!(err.to_string().starts_with("could not list Supervisor: "));
    }
}
