mod date;
mod event;
mod timeline;
mod track_winner;
