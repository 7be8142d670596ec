use crate::server::{data::location::LocationRepository, model::location::UpdateLocationParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod event_links;
mod update;
