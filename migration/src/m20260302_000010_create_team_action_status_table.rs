use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000007_create_track_team_table::TrackTeam,
    m20260302_000009_create_timeline_table::Timeline,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamActionStatus::Table)
                    .if_not_exists()
                    .col(integer(TeamActionStatus::TrackTeamId))
                    .col(integer(TeamActionStatus::TimelineId))
                    .col(integer(TeamActionStatus::ResultValue).default(0))
                    .col(string(TeamActionStatus::ResolutionLink))
                    .col(timestamp_with_time_zone(TeamActionStatus::CompletedAt))
                    .col(text(TeamActionStatus::Notes))
                    .primary_key(
                        Index::create()
                            .col(TeamActionStatus::TrackTeamId)
                            .col(TeamActionStatus::TimelineId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_action_status_track_team_id")
                            .from(TeamActionStatus::Table, TeamActionStatus::TrackTeamId)
                            .to(TrackTeam::Table, TrackTeam::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_action_status_timeline_id")
                            .from(TeamActionStatus::Table, TeamActionStatus::TimelineId)
                            .to(Timeline::Table, Timeline::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeamActionStatus::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TeamActionStatus {
    Table,
    TrackTeamId,
    TimelineId,
    ResultValue,
    ResolutionLink,
    CompletedAt,
    Notes,
}
