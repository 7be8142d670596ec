//! HTTP handlers.
//!
//! Handlers decode requests, convert DTOs into domain params, call a service and
//! convert the result back into a DTO. Business rules live in the services.

pub mod date;
pub mod event;
pub mod location;
pub mod scheduler;
pub mod team_action_status;
pub mod timeline;
pub mod track;
pub mod track_winner;
