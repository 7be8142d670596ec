mod event;
mod location;
mod team_action_status;
mod timeline;
mod track;
mod track_winner;
