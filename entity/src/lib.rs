//! SeaORM entity models for the eventboard schema.
//!
//! One module per table. Join tables (`event_location`, `location_track`,
//! `team_action_status`, `track_winner`) use composite primary keys.

pub mod prelude;

pub mod date;
pub mod event;
pub mod event_location;
pub mod location;
pub mod location_track;
pub mod team_action_status;
pub mod timeline;
pub mod timeline_status;
pub mod track;
pub mod track_team;
pub mod track_winner;
