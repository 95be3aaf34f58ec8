use nhl_stats_rs::models::{GameId, TeamId};
use serde_json::{json, Value};

/// (home goals, home shots, away goals, away shots) per period.
pub type Period = (u16, u16, u16, u16);

fn skater_stats(goals: u16, shots: u16) -> Value {
    json!({
        "goals": goals,
        "pim": 6,
        "shots": shots,
        "powerPlayPercentage": "25.0",
        "powerPlayGoals": 1.0,
        "powerPlayOpportunities": 4.0,
        "faceOffWinPercentage": "51.7",
        "blocked": 14,
        "takeaways": 5,
        "giveaways": 9,
        "hits": 22
    })
}

/// A live feed shaped like the stats service sends it, trimmed to what matters here.
pub fn live_feed(game_id: GameId, home_id: TeamId, away_id: TeamId, periods: &[Period], current_period: u8) -> Value {
    let home_goals: u16 = periods.iter().map(|e| e.0).sum();
    let home_shots: u16 = periods.iter().map(|e| e.1).sum();
    let away_goals: u16 = periods.iter().map(|e| e.2).sum();
    let away_shots: u16 = periods.iter().map(|e| e.3).sum();
    let periods: Vec<Value> = periods.iter().enumerate().map(|(i, p)| {
        let period_type = if i < 3 { "REGULAR" } else { "OVERTIME" };
        json!({
            "periodType": period_type,
            "num": i + 1,
            "home": { "goals": p.0, "shotsOnGoal": p.1, "rinkSide": "left" },
            "away": { "goals": p.2, "shotsOnGoal": p.3, "rinkSide": "right" }
        })
    }).collect();

    json!({
        "gamePk": game_id,
        "gameData": { "game": { "pk": game_id, "season": "20192020", "type": "R" } },
        "liveData": {
            "linescore": {
                "currentPeriod": current_period,
                "periods": periods,
                "hasShootout": false
            },
            "boxscore": {
                "teams": {
                    "away": {
                        "team": { "id": away_id, "name": format!("Team {away_id}") },
                        "teamStats": { "teamSkaterStats": skater_stats(away_goals, away_shots) }
                    },
                    "home": {
                        "team": { "id": home_id, "name": format!("Team {home_id}") },
                        "teamStats": { "teamSkaterStats": skater_stats(home_goals, home_shots) }
                    }
                }
            }
        }
    })
}

pub fn team(id: TeamId, name: &str, abbreviation: &str) -> Value {
    json!({ "id": id, "name": name, "abbreviation": abbreviation, "active": true, "link": format!("/api/v1/teams/{id}") })
}

pub fn team_stats(id: TeamId, wins: u16) -> Value {
    json!({ "stats": [
        { "type": { "displayName": "statsSingleSeason" }, "splits": [
            { "stat": { "gamesPlayed": 82, "wins": wins, "ptPctg": "56.1", "goalsPerGame": 2.976 }, "team": { "id": id } }
        ]},
        { "type": { "displayName": "regularSeasonStatRankings" }, "splits": [
            { "stat": { "wins": "14th" }, "team": { "id": id } }
        ]}
    ]})
}
