use serde::{Deserialize, Serialize};

use crate::models::{SkaterStats, TeamId};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiTeam {
    pub id: TeamId,
    pub name: String,
    pub abbreviation: String,
    pub active: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiTeamStats {
    pub id: TeamId,
    #[serde(flatten)]
    pub stats: SkaterStats,
}
