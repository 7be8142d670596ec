//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories take the
//! ids of the rows they reference, so parents must be created first (or use `helpers`).
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let date = factory::create_date(&db).await?;
//!     let event = factory::create_event(&db, date.id).await?;
//!
//!     // Create with all dependencies
//!     let (date, event, track) = factory::helpers::create_track_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let track = factory::track::TrackFactory::new(&db, event.id, date.id)
//!     .score_based(true)
//!     .status("completed")
//!     .build()
//!     .await?;
//! ```

pub mod date;
pub mod event;
pub mod helpers;
pub mod location;
pub mod team_action_status;
pub mod timeline;
pub mod track;
pub mod track_team;
pub mod track_winner;

pub use date::create_date;
pub use event::create_event;
pub use location::create_location;
pub use team_action_status::create_team_action_status;
pub use timeline::{create_timeline, create_timeline_status};
pub use track::create_track;
pub use track_team::create_track_team;
pub use track_winner::create_track_winner;
