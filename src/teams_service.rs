use crate::error::Result;
use crate::models::TeamId;
use crate::models_api::team::{ApiTeam, ApiTeamStats};
use crate::models_external::team::{Team, TeamStatsRsp};
use crate::rest_client::StatsClient;

impl From<Team> for ApiTeam {
    fn from(v: Team) -> Self {
        ApiTeam {
            id: v.id,
            abbreviation: v.abbreviation.unwrap_or_default(),
            name: v.name,
            active: v.active.unwrap_or(true),
        }
    }
}

pub struct TeamsService;

impl TeamsService {
    pub async fn read_all(client: &StatsClient) -> Result<Vec<ApiTeam>> {
        let rsp = client.get_teams().await?;
        Ok(rsp.teams.into_iter().map(ApiTeam::from).collect())
    }

    pub async fn read_stats(client: &StatsClient, team_id: TeamId) -> Result<Option<ApiTeamStats>> {
        let rsp = client.get_team_stats(team_id).await?;
        Ok(TeamsService::single_season(rsp, team_id))
    }

    /// The first `statsSingleSeason` split. Rankings are skipped. A stat named `id` gives way to the team id.
    fn single_season(rsp: TeamStatsRsp, team_id: TeamId) -> Option<ApiTeamStats> {
        rsp.stats.into_iter()
            .find(|e| e.statType.as_ref().map(|t| t.displayName == "statsSingleSeason").unwrap_or(false))
            .and_then(|e| e.splits.into_iter().next())
            .map(|split| {
                let mut stats = split.stat;
                stats.remove("id");
                ApiTeamStats { id: split.team.and_then(|e| e.id).unwrap_or(team_id), stats }
            })
    }
}
