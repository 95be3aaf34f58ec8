use serde::{Deserialize, Serialize};

use crate::models::{GameId, SkaterStats, TeamId};

// Everything is optional here, `GamePayload::try_from` decides what is required.

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct LiveFeedRsp {
    pub gamePk: Option<GameId>,
    pub liveData: Option<LiveData>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct LiveData {
    pub boxscore: Option<Boxscore>,
    pub linescore: Option<Linescore>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Boxscore {
    pub teams: Option<BoxscoreTeams>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct BoxscoreTeams {
    pub home: Option<BoxscoreTeam>,
    pub away: Option<BoxscoreTeam>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct BoxscoreTeam {
    pub team: Option<TeamRef>,
    pub teamStats: Option<TeamStats>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TeamRef {
    pub id: Option<TeamId>,
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TeamStats {
    pub teamSkaterStats: Option<SkaterStats>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Linescore {
    pub currentPeriod: Option<u8>,
    pub periods: Option<Vec<LinescorePeriod>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct LinescorePeriod {
    pub num: Option<u8>,
    pub periodType: Option<String>,
    pub home: Option<PeriodTeam>,
    pub away: Option<PeriodTeam>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PeriodTeam {
    pub goals: Option<u16>,
    pub shotsOnGoal: Option<u16>,
}
