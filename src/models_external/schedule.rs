use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::GameId;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ScheduleRsp {
    #[serde(default)]
    pub totalGames: u32,
    #[serde(default)]
    pub dates: Vec<ScheduleDate>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ScheduleDate {
    pub date: String,
    #[serde(default)]
    pub games: Vec<ScheduleGame>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ScheduleGame {
    pub gamePk: GameId,
    pub gameType: Option<String>,
    pub season: Option<String>,
    pub gameDate: Option<DateTime<Utc>>,
}
