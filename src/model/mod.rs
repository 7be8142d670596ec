//! Serializable request and response types shared by the HTTP API.
//!
//! Controllers convert between these DTOs and the domain models in `server::model`.

pub mod api;
pub mod date;
pub mod event;
pub mod location;
pub mod scheduler;
pub mod status;
pub mod team_action_status;
pub mod timeline;
pub mod track;
pub mod track_winner;
