pub use super::date::Entity as Date;
pub use super::event::Entity as Event;
pub use super::event_location::Entity as EventLocation;
pub use super::location::Entity as Location;
pub use super::location_track::Entity as LocationTrack;
pub use super::team_action_status::Entity as TeamActionStatus;
pub use super::timeline::Entity as Timeline;
pub use super::timeline_status::Entity as TimelineStatus;
pub use super::track::Entity as Track;
pub use super::track_team::Entity as TrackTeam;
pub use super::track_winner::Entity as TrackWinner;
