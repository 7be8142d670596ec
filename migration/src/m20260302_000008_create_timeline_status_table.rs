use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TimelineStatus::Table)
                    .if_not_exists()
                    .col(pk_auto(TimelineStatus::Id))
                    .col(integer(TimelineStatus::CountNum))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TimelineStatus::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TimelineStatus {
    Table,
    Id,
    CountNum,
}
