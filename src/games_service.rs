use std::time::Instant;

use futures::future::join_all;
use tracing::log;

use crate::config_handler::{Config, FailurePolicy};
use crate::error::Result;
use crate::game_stats_service::GameStatsService;
use crate::models::{DateRange, GameId};
use crate::models_api::game_table::GameTable;
use crate::rest_client::StatsClient;
use crate::schedule_service::ScheduleService;
use crate::LogResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    /// Games fetched at the same time.
    pub concurrency: usize,
    pub failure_policy: FailurePolicy,
}

impl Default for BatchOptions {
    fn default() -> Self {
        BatchOptions { concurrency: 4, failure_policy: FailurePolicy::Skip }
    }
}

impl From<&Config> for BatchOptions {
    fn from(v: &Config) -> Self {
        BatchOptions { concurrency: v.concurrency, failure_policy: v.failure_policy }
    }
}

pub struct GamesService;

impl GamesService {
    /// Fetches and normalizes every game. A failing game is skipped or aborts the run per `failure_policy`.
    pub async fn collect(client: &StatsClient, game_ids: &[GameId], options: &BatchOptions) -> Result<GameTable> {
        let before = Instant::now();
        let mut table = GameTable::new();
        let mut skipped: Vec<GameId> = vec![];

        for chunk in game_ids.chunks(options.concurrency.max(1)) {
            let results = join_all(chunk.iter().map(|game_id| async move {
                (*game_id, GameStatsService::update(client, *game_id).await)
            })).await;

            for (game_id, result) in results {
                let game_table = match options.failure_policy {
                    FailurePolicy::Abort => Some(result.map_err(|e| {
                        log::error!("[GAMES] Aborting on game {game_id}: {e}");
                        e.for_game(game_id)
                    })?),
                    FailurePolicy::Skip => result.ok_log(&format!("[GAMES] Skipping game {game_id}")),
                };
                match game_table {
                    Some(e) => table.extend(e),
                    None => skipped.push(game_id),
                }
            }
            log::debug!("[GAMES] {} rows so far", table.len());
        }

        log::info!("[GAMES] Collected {} rows from {} games, skipped {:?} {:.2?}",
            table.len(), game_ids.len() - skipped.len(), skipped, before.elapsed());
        Ok(table)
    }

    pub async fn update(client: &StatsClient, range: &DateRange, options: &BatchOptions) -> Result<GameTable> {
        let game_ids = ScheduleService::update(client, range).await?;
        log::info!("[GAMES] Total number of games to download: {}", game_ids.len());
        GamesService::collect(client, &game_ids, options).await
    }
}
