//! Database repository layer for all domain entities.
//!
//! Repositories wrap SeaORM queries for one table (or one table and its join rows) and
//! convert entity models to domain models at the boundary. Every repository is generic
//! over `ConnectionTrait`, so services can hand it either the connection pool or an open
//! `DatabaseTransaction`.

pub mod date;
pub mod event;
pub mod location;
pub mod team_action_status;
pub mod timeline;
pub mod track;
pub mod track_team;
pub mod track_winner;

#[cfg(test)]
mod test;
