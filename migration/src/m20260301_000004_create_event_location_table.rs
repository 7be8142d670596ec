use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000002_create_event_table::Event, m20260301_000003_create_location_table::Location,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventLocation::Table)
                    .if_not_exists()
                    .col(integer(EventLocation::EventId))
                    .col(integer(EventLocation::LocationId))
                    .primary_key(
                        Index::create()
                            .col(EventLocation::EventId)
                            .col(EventLocation::LocationId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_location_event_id")
                            .from(EventLocation::Table, EventLocation::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_location_location_id")
                            .from(EventLocation::Table, EventLocation::LocationId)
                            .to(Location::Table, Location::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventLocation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventLocation {
    Table,
    EventId,
    LocationId,
}
