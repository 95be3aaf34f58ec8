use std::{collections::{BTreeMap, HashMap}, net::SocketAddr, sync::Arc};

use axum::{Router, extract::{Path, Query, State}, http::StatusCode, response::IntoResponse, routing::get, Json};
use chrono::NaiveDate;
use nhl_stats_rs::models::{GameId, TeamId};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::{sync::RwLock, task::JoinHandle};

#[derive(Deserialize)]
struct ScheduleQuery {
    startDate: NaiveDate,
    endDate: NaiveDate,
}

#[derive(Clone, Default)]
pub struct AppState {
    pub schedule: Vec<(NaiveDate, GameId)>,
    pub feeds: HashMap<GameId, Value>,
    pub teams: Vec<Value>,
    pub team_stats: HashMap<TeamId, Value>,
    pub game_calls: HashMap<GameId, u16>,
}

type SafeState = Arc<RwLock<AppState>>;

/// Stand-in for the stats service, bound to a free local port.
pub struct ExternalServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
    pub api_state: SafeState,
}

impl Drop for ExternalServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl ExternalServer {
    pub async fn start() -> ExternalServer {
        let api_state = Arc::new(RwLock::new(AppState::default()));
        let app = Router::new()
            .route("/api/v1/schedule", get(ExternalServer::get_schedule))
            .route("/api/v1/game/:game_id/feed/live", get(ExternalServer::get_feed))
            .route("/api/v1/teams", get(ExternalServer::get_teams))
            .route("/api/v1/teams/:team_id/stats", get(ExternalServer::get_team_stats))
            .with_state(api_state.clone());

        let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
            .serve(app.into_make_service());
        let addr = server.local_addr();
        let handle = tokio::spawn(async move {
            _ = server.await;
        });
        ExternalServer { addr, handle, api_state }
    }

    pub fn get_url(&self) -> String {
        format!("http://{}/api/v1", self.addr)
    }

    /// Schedules a game. Without a feed the live feed endpoint answers 404.
    pub async fn add_game(&self, date: &str, game_id: GameId, feed: Option<Value>) {
        let date: NaiveDate = date.parse().expect("date to parse");
        let mut state = self.api_state.write().await;
        state.schedule.push((date, game_id));
        if let Some(feed) = feed {
            state.feeds.insert(game_id, feed);
        }
    }

    pub async fn add_team(&self, team: Value, stats: Value) {
        let mut state = self.api_state.write().await;
        let id = team["id"].as_u64().expect("team to have id") as TeamId;
        state.teams.push(team);
        state.team_stats.insert(id, stats);
    }

    pub async fn game_calls(&self, game_id: GameId) -> u16 {
        self.api_state.read().await.game_calls.get(&game_id).copied().unwrap_or_default()
    }

    async fn get_schedule(Query(query): Query<ScheduleQuery>, State(state): State<SafeState>) -> Json<Value> {
        let state = state.read().await;
        let mut dates: BTreeMap<NaiveDate, Vec<Value>> = BTreeMap::new();
        for (date, game_id) in &state.schedule {
            if *date >= query.startDate && *date <= query.endDate {
                dates.entry(*date).or_default().push(json!({
                    "gamePk": game_id,
                    "gameType": "R",
                    "season": "20192020",
                    "gameDate": format!("{date}T23:00:00Z"),
                }));
            }
        }
        let total: usize = dates.values().map(Vec::len).sum();
        let dates: Vec<Value> = dates.into_iter()
            .map(|(date, games)| json!({ "date": date.to_string(), "totalGames": games.len(), "games": games }))
            .collect();
        Json(json!({ "totalItems": total, "totalGames": total, "dates": dates }))
    }

    async fn get_feed(Path(game_id): Path<GameId>, State(state): State<SafeState>) -> impl IntoResponse {
        let mut state = state.write().await;
        *state.game_calls.entry(game_id).or_insert(0) += 1;
        match state.feeds.get(&game_id) {
            Some(feed) => Ok(Json(feed.clone())),
            None => Err((StatusCode::NOT_FOUND, format!("Game {game_id} not found"))),
        }
    }

    async fn get_teams(State(state): State<SafeState>) -> Json<Value> {
        Json(json!({ "teams": state.read().await.teams.clone() }))
    }

    async fn get_team_stats(Path(team_id): Path<TeamId>, State(state): State<SafeState>) -> impl IntoResponse {
        match state.read().await.team_stats.get(&team_id) {
            Some(stats) => Ok(Json(stats.clone())),
            None => Err((StatusCode::NOT_FOUND, format!("Team {team_id} not found"))),
        }
    }
}
