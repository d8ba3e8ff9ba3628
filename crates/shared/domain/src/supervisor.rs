//! Supervisor domain entity.

use serde::{Deserialize, Serialize};

use crate::team::Team;

/// Supervisor domain entity
///
/// A supervisor always has exactly one assigned team; the field is not
/// optional so a supervisor without a team cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supervisor {
    /// Primary key, stable for the lifetime of the record
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub assigned_team: Team,
}

impl Supervisor {
    /// Create a new supervisor assigned to `team`
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        assigned_team: Team,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            assigned_team,
        }
    }

    /// Display name, "first last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Id of the assigned team (the persisted foreign key)
    pub fn team_id(&self) -> &str {
        &self.assigned_team.id
    }
}
