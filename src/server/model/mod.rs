//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Update parameters use explicit
//! `Option` fields: `None` leaves a column untouched, `Some(v)` writes `v` even when it
//! is `false`, `0` or an empty string.

pub mod date;
pub mod event;
pub mod location;
pub mod status;
pub mod team_action_status;
pub mod timeline;
pub mod track;
pub mod track_winner;
