pub mod game_table;
pub mod team;
pub mod team_game_record;
