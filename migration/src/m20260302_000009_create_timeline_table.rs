use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000005_create_track_table::Track,
    m20260302_000008_create_timeline_status_table::TimelineStatus,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Timeline::Table)
                    .if_not_exists()
                    .col(pk_auto(Timeline::Id))
                    .col(string(Timeline::Title))
                    .col(text(Timeline::Description))
                    .col(timestamp_with_time_zone(Timeline::Deadline))
                    .col(boolean(Timeline::IsBlocking).default(false))
                    .col(boolean(Timeline::IsScoring).default(false))
                    .col(string(Timeline::Status))
                    .col(integer(Timeline::TrackId))
                    .col(integer(Timeline::TimelineStatusId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timeline_track_id")
                            .from(Timeline::Table, Timeline::TrackId)
                            .to(Track::Table, Track::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timeline_timeline_status_id")
                            .from(Timeline::Table, Timeline::TimelineStatusId)
                            .to(TimelineStatus::Table, TimelineStatus::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Timeline::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Timeline {
    Table,
    Id,
    Title,
    Description,
    Deadline,
    IsBlocking,
    IsScoring,
    Status,
    TrackId,
    TimelineStatusId,
}
