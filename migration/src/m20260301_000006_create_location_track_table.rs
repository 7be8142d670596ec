use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000003_create_location_table::Location, m20260301_000005_create_track_table::Track,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LocationTrack::Table)
                    .if_not_exists()
                    .col(integer(LocationTrack::TrackId))
                    .col(integer(LocationTrack::LocationId))
                    .primary_key(
                        Index::create()
                            .col(LocationTrack::TrackId)
                            .col(LocationTrack::LocationId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_location_track_track_id")
                            .from(LocationTrack::Table, LocationTrack::TrackId)
                            .to(Track::Table, Track::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_location_track_location_id")
                            .from(LocationTrack::Table, LocationTrack::LocationId)
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
            .drop_table(Table::drop().table(LocationTrack::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LocationTrack {
    Table,
    TrackId,
    LocationId,
}
