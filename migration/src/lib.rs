pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_date_table;
mod m20260301_000002_create_event_table;
mod m20260301_000003_create_location_table;
mod m20260301_000004_create_event_location_table;
mod m20260301_000005_create_track_table;
mod m20260301_000006_create_location_track_table;
mod m20260301_000007_create_track_team_table;
mod m20260302_000008_create_timeline_status_table;
mod m20260302_000009_create_timeline_table;
mod m20260302_000010_create_team_action_status_table;
mod m20260302_000011_create_track_winner_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_date_table::Migration),
            Box::new(m20260301_000002_create_event_table::Migration),
            Box::new(m20260301_000003_create_location_table::Migration),
            Box::new(m20260301_000004_create_event_location_table::Migration),
            Box::new(m20260301_000005_create_track_table::Migration),
            Box::new(m20260301_000006_create_location_track_table::Migration),
            Box::new(m20260301_000007_create_track_team_table::Migration),
            Box::new(m20260302_000008_create_timeline_status_table::Migration),
            Box::new(m20260302_000009_create_timeline_table::Migration),
            Box::new(m20260302_000010_create_team_action_status_table::Migration),
            Box::new(m20260302_000011_create_track_winner_table::Migration),
        ]
    }
}
