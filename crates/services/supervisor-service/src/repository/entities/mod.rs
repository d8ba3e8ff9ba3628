//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod supervisor;
pub mod team;

#[allow(unused_imports)]
pub use supervisor::{
    ActiveModel as SupervisorActiveModel, Entity as SupervisorEntity, Model as SupervisorModel,
};
#[allow(unused_imports)]
pub use team::{ActiveModel as TeamActiveModel, Entity as TeamEntity, Model as TeamModel};
