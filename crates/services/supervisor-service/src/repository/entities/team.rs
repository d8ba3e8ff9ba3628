//! Team database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::Team;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "teams")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::supervisor::Entity")]
    Supervisors,
}

impl Related<super::supervisor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Supervisors.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Team {
    fn from(model: Model) -> Self {
        Team {
            id: model.id,
            name: model.name,
        }
    }
}

impl From<&Team> for ActiveModel {
    fn from(team: &Team) -> Self {
        ActiveModel {
            id: Set(team.id.clone()),
            name: Set(team.name.clone()),
        }
    }
}
