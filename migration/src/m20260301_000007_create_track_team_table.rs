use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000005_create_track_table::Track;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrackTeam::Table)
                    .if_not_exists()
                    .col(pk_auto(TrackTeam::Id))
                    .col(integer(TrackTeam::TeamId))
                    .col(integer(TrackTeam::TrackId))
                    .col(boolean(TrackTeam::IsActive).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_track_team_track_id")
                            .from(TrackTeam::Table, TrackTeam::TrackId)
                            .to(Track::Table, Track::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_track_team_track_id_team_id")
                    .table(TrackTeam::Table)
                    .col(TrackTeam::TrackId)
                    .col(TrackTeam::TeamId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrackTeam::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TrackTeam {
    Table,
    Id,
    TeamId,
    TrackId,
    IsActive,
}
