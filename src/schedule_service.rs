use tracing::log;

use crate::error::Result;
use crate::models::{DateRange, GameId};
use crate::models_external::schedule::ScheduleRsp;
use crate::rest_client::StatsClient;

pub struct ScheduleService;

impl ScheduleService {
    /// Game ids of every scheduled game, in the order the service lists dates and games.
    pub fn game_ids(rsp: &ScheduleRsp) -> Vec<GameId> {
        rsp.dates.iter()
            .flat_map(|e| e.games.iter().map(|g| g.gamePk))
            .collect()
    }

    pub async fn update(client: &StatsClient, range: &DateRange) -> Result<Vec<GameId>> {
        let rsp = client.get_schedule(range).await?;
        let game_ids = ScheduleService::game_ids(&rsp);
        log::info!("[SCHEDULE] {range} {} dates, {} games", rsp.dates.len(), game_ids.len());
        Ok(game_ids)
    }
}
