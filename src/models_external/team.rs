use serde::{Deserialize, Serialize};

use crate::models::{SkaterStats, TeamId};

use super::game_feed::TeamRef;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TeamsRsp {
    #[serde(default)]
    pub teams: Vec<Team>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub abbreviation: Option<String>,
    pub active: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TeamStatsRsp {
    #[serde(default)]
    pub stats: Vec<TeamStatsGroup>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TeamStatsGroup {
    #[serde(rename = "type")]
    pub statType: Option<StatType>,
    #[serde(default)]
    pub splits: Vec<TeamStatsSplit>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StatType {
    pub displayName: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TeamStatsSplit {
    #[serde(default)]
    pub stat: SkaterStats,
    pub team: Option<TeamRef>,
}
