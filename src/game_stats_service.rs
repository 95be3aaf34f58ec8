use tracing::log;

use crate::error::{Result, StatsError};
use crate::models::{GameId, GamePayload, PeriodSummary, Side, TeamBox, REGULATION_PERIODS};
use crate::models_api::game_table::GameTable;
use crate::models_api::team_game_record::TeamGameRecord;
use crate::models_external::game_feed::{BoxscoreTeam, LinescorePeriod, LiveData, PeriodTeam};
use crate::rest_client::StatsClient;

impl TeamBox {
    fn from_boxscore(team: Option<BoxscoreTeam>, side: &str) -> Result<TeamBox> {
        let path = format!("boxscore.teams.{side}");
        let team = team.ok_or_else(|| StatsError::missing(&path))?;
        let team_id = team.team
            .and_then(|e| e.id)
            .ok_or_else(|| StatsError::missing(format!("{path}.team.id")))?;
        let skater_stats = team.teamStats
            .and_then(|e| e.teamSkaterStats)
            .ok_or_else(|| StatsError::missing(format!("{path}.teamStats.teamSkaterStats")))?;
        Ok(TeamBox { team_id, skater_stats })
    }
}

fn period_team(team: Option<PeriodTeam>, path: &str) -> Result<(u32, u32)> {
    let team = team.ok_or_else(|| StatsError::missing(path))?;
    let goals = team.goals.ok_or_else(|| StatsError::missing(format!("{path}.goals")))?;
    let shots = team.shotsOnGoal.ok_or_else(|| StatsError::missing(format!("{path}.shotsOnGoal")))?;
    Ok((u32::from(goals), u32::from(shots)))
}

impl PeriodSummary {
    fn from_linescore(index: usize, period: LinescorePeriod) -> Result<PeriodSummary> {
        let path = format!("linescore.periods[{index}]");
        let (home_goals, home_shots) = period_team(period.home, &format!("{path}.home"))?;
        let (away_goals, away_shots) = period_team(period.away, &format!("{path}.away"))?;
        Ok(PeriodSummary { home_goals, home_shots, away_goals, away_shots })
    }
}

impl TryFrom<LiveData> for GamePayload {
    type Error = StatsError;

    fn try_from(v: LiveData) -> Result<Self> {
        let teams = v.boxscore
            .and_then(|e| e.teams)
            .ok_or_else(|| StatsError::missing("boxscore.teams"))?;
        let home = TeamBox::from_boxscore(teams.home, "home")?;
        let away = TeamBox::from_boxscore(teams.away, "away")?;

        let linescore = v.linescore.ok_or_else(|| StatsError::missing("linescore"))?;
        let current_period = linescore.currentPeriod
            .ok_or_else(|| StatsError::missing("linescore.currentPeriod"))?;
        let mut periods = linescore.periods
            .ok_or_else(|| StatsError::missing("linescore.periods"))?
            .into_iter()
            .enumerate()
            .map(|(i, p)| PeriodSummary::from_linescore(i, p))
            .collect::<Result<Vec<PeriodSummary>>>()?;

        let extra = periods.split_off(periods.len().min(REGULATION_PERIODS));
        let regulation = std::array::from_fn(|i| periods.get(i).copied());

        Ok(GamePayload { home, away, regulation, extra, current_period })
    }
}

pub struct GameStatsService;

impl GameStatsService {
    /// Two rows for one game, away team first. "our" is always the row's own team.
    pub fn normalize(payload: &GamePayload, game_id: GameId) -> (TeamGameRecord, TeamGameRecord) {
        let away = GameStatsService::record_for(payload, game_id, Side::Away);
        let home = GameStatsService::record_for(payload, game_id, Side::Home);
        (away, home)
    }

    fn record_for(payload: &GamePayload, game_id: GameId, side: Side) -> TeamGameRecord {
        let team = payload.team(side);
        TeamGameRecord {
            id: team.team_id,
            game_id,
            away: side.is_away(),
            skater_stats: team.skater_stats.clone(),
            periods: payload.regulation.map(|p| p.map(|e| e.view_for(side))),
            extra_periods: PeriodSummary::sum(&payload.extra).map(|e| e.view_for(side)),
            overtime: payload.is_overtime(),
        }
    }

    pub fn to_table(data: LiveData, game_id: GameId) -> Result<GameTable> {
        let payload = GamePayload::try_from(data)?;
        let missing = payload.regulation.iter().filter(|e| e.is_none()).count();
        if missing > 0 {
            log::debug!("[GAME] {game_id} missing {missing} regulation period(s)");
        }
        Ok(GameStatsService::normalize(&payload, game_id).into())
    }

    pub async fn update(client: &StatsClient, game_id: GameId) -> Result<GameTable> {
        let data = client.get_game(game_id).await?;
        GameStatsService::to_table(data, game_id)
    }
}
