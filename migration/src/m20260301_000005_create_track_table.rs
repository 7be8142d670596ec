use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260301_000001_create_date_table::Date, m20260301_000002_create_event_table::Event};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Track::Table)
                    .if_not_exists()
                    .col(pk_auto(Track::Id))
                    .col(string(Track::Title))
                    .col(text(Track::Description))
                    .col(boolean(Track::IsScoreBased).default(false))
                    .col(string(Track::Status).default("scheduled"))
                    .col(integer(Track::EventId))
                    .col(integer(Track::DateId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_track_event_id")
                            .from(Track::Table, Track::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_track_date_id")
                            .from(Track::Table, Track::DateId)
                            .to(Date::Table, Date::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_track_status")
                    .table(Track::Table)
                    .col(Track::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Track::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Track {
    Table,
    Id,
    Title,
    Description,
    IsScoreBased,
    Status,
    EventId,
    DateId,
}
