//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. Every write opens a
//! single `DatabaseTransaction`, hands it to the repositories it needs and commits
//! at the end, so a failure anywhere in the operation rolls back everything it did.
//! Single-query reads go straight to the connection.

pub mod date;
pub mod event;
pub mod location;
pub mod team_action_status;
pub mod timeline;
pub mod track;
pub mod track_winner;

#[cfg(test)]
mod test;
