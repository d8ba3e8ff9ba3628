//! Migration: Create supervisors table referencing teams.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_teams_table::Teams;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Supervisors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Supervisors::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Supervisors::FirstName).string().not_null())
                    .col(ColumnDef::new(Supervisors::LastName).string().not_null())
                    .col(ColumnDef::new(Supervisors::TeamId).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_supervisors_team_id")
                            .from(Supervisors::Table, Supervisors::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Joins and team reassignment filter on team_id
        manager
            .create_index(
                Index::create()
                    .name("idx_supervisors_team_id")
                    .table(Supervisors::Table)
                    .col(Supervisors::TeamId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_supervisors_team_id")
                    .table(Supervisors::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Supervisors::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Supervisors {
    Table,
    Id,
    FirstName,
    LastName,
    TeamId,
}
