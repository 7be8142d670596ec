use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000005_create_track_table::Track,
    m20260301_000007_create_track_team_table::TrackTeam,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrackWinner::Table)
                    .if_not_exists()
                    .col(integer(TrackWinner::TrackId))
                    .col(integer(TrackWinner::TrackTeamId))
                    .col(integer(TrackWinner::Place))
                    .col(boolean(TrackWinner::IsAwardee).default(false))
                    .primary_key(
                        Index::create()
                            .col(TrackWinner::TrackId)
                            .col(TrackWinner::TrackTeamId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_track_winner_track_id")
                            .from(TrackWinner::Table, TrackWinner::TrackId)
                            .to(Track::Table, Track::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_track_winner_track_team_id")
                            .from(TrackWinner::Table, TrackWinner::TrackTeamId)
                            .to(TrackTeam::Table, TrackTeam::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrackWinner::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TrackWinner {
    Table,
    TrackId,
    TrackTeamId,
    Place,
    IsAwardee,
}
