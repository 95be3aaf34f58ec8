pub mod game_feed;
pub mod schedule;
pub mod team;
