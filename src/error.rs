use chrono::NaiveDate;
use thiserror::Error;

use crate::models::GameId;

#[derive(Error, Debug)]
pub enum StatsError {
    /// A field the normalizer needs is absent. Holds the dotted path, e.g. `boxscore.teams.home.team.id`.
    #[error("Malformed payload, missing {0}")]
    MalformedPayload(String),

    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid date range {start} > {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Game {game_id} failed: {source}")]
    Game {
        game_id: GameId,
        #[source]
        source: Box<StatsError>,
    },
}

impl StatsError {
    pub fn missing(path: impl Into<String>) -> StatsError {
        StatsError::MalformedPayload(path.into())
    }

    pub fn for_game(self, game_id: GameId) -> StatsError {
        StatsError::Game { game_id, source: Box::new(self) }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
