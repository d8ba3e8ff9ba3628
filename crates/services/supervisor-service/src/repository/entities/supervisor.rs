//! Supervisor database entity for SeaORM.
//!
//! The assigned team is stored as the `team_id` foreign key and resolved
//! through the [`Relation::Team`] join on read.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::Supervisor;

use super::team;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "supervisors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub team_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Team,
}

impl Related<team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert to a domain supervisor using the joined team row.
    ///
    /// Returns `None` when the team did not resolve; a supervisor is never
    /// handed out with a dangling team reference.
    pub fn into_domain(self, team: Option<team::Model>) -> Option<Supervisor> {
        let team = team?;
        Some(Supervisor {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            assigned_team: team.into(),
        })
    }
}

/// Convert domain entity to a fully set active model (team stored by id)
impl From<&Supervisor> for ActiveModel {
    fn from(supervisor: &Supervisor) -> Self {
        ActiveModel {
            id: Set(supervisor.id.clone()),
            first_name: Set(supervisor.first_name.clone()),
            last_name: Set(supervisor.last_name.clone()),
            team_id: Set(supervisor.team_id().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::Team;

    fn model() -> Model {
        Model {
            id: "s1".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Diaz".to_string(),
            team_id: "t1".to_string(),
        }
    }

    #[test]
    fn test_into_domain_with_team() {
        let team = team::Model {
            id: "t1".to_string(),
            name: "Ops".to_string(),
        };

        let supervisor = model().into_domain(Some(team)).unwrap();

        assert_eq!(
            supervisor,
            Supervisor::new("s1", "Ana", "Diaz", Team::new("t1", "Ops"))
        );
    }

    #[test]
    fn test_into_domain_without_team_is_none() {
        assert!(model().into_domain(None).is_none());
    }

    #[test]
    fn test_active_model_stores_team_id() {
        let supervisor = Supervisor::new("s1", "Ana", "Diaz", Team::new("t2", "QA"));
        let active = ActiveModel::from(&supervisor);

        assert_eq!(active.id, Set("s1".to_string()));
        assert_eq!(active.team_id, Set("t2".to_string()));
    }
}
