use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use tracing::log;

use crate::config_handler::Config;
use crate::error::{Result, StatsError};
use crate::models::{DateRange, GameId, TeamId};
use crate::models_external::game_feed::{LiveData, LiveFeedRsp};
use crate::models_external::schedule::ScheduleRsp;
use crate::models_external::team::{TeamStatsRsp, TeamsRsp};

/// JSON over GET against the stats service.
#[derive(Clone, Debug)]
pub struct StatsClient {
    client: reqwest::Client,
    base_url: String,
}

impl StatsClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<StatsClient> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| StatsError::Transport { url: base_url.clone(), source })?;
        Ok(StatsClient { client, base_url })
    }

    pub fn from_config(config: &Config) -> Result<StatsClient> {
        StatsClient::new(&config.base_url, config.timeout())
    }

    pub fn get_teams_url(&self) -> String {
        format!("{}/teams", self.base_url)
    }

    pub fn get_team_stats_url(&self, team_id: TeamId) -> String {
        format!("{}/teams/{team_id}/stats", self.base_url)
    }

    pub fn get_game_url(&self, game_id: GameId) -> String {
        format!("{}/game/{game_id}/feed/live", self.base_url)
    }

    pub fn get_schedule_url(&self, range: &DateRange) -> String {
        format!("{}/schedule?startDate={}&endDate={}", self.base_url, range.start, range.end)
    }

    pub async fn get_teams(&self) -> Result<TeamsRsp> {
        self.get_call(&self.get_teams_url()).await
    }

    pub async fn get_team_stats(&self, team_id: TeamId) -> Result<TeamStatsRsp> {
        self.get_call(&self.get_team_stats_url(team_id)).await
    }

    /// The `liveData` block of a game's live feed.
    pub async fn get_game(&self, game_id: GameId) -> Result<LiveData> {
        let rsp: LiveFeedRsp = self.get_call(&self.get_game_url(game_id)).await?;
        rsp.liveData.ok_or_else(|| StatsError::missing("liveData"))
    }

    pub async fn get_schedule(&self, range: &DateRange) -> Result<ScheduleRsp> {
        self.get_call(&self.get_schedule_url(range)).await
    }

    async fn get_call<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let before = Instant::now();
        let transport = |source| StatsError::Transport { url: url.to_string(), source };

        let rsp = self.client.get(url).send().await
            .and_then(|e| e.error_for_status())
            .map_err(transport)?;
        let res = rsp.json().await.map_err(transport)?;
        log::info!("[REST] Call {url} {:.2?}", before.elapsed());
        Ok(res)
    }
}
