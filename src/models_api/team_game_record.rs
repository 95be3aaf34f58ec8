use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::models::{GameId, PeriodView, SkaterStats, TeamId, REGULATION_PERIODS};

const ROW_COLUMNS: [&str; 8] = ["id", "game_id", "away", "OT_our_goals", "OT_their_goals", "OT_our_shots", "OT_their_shots", "OT"];
const PERIOD_COLUMNS: [&str; 4] = ["our_goals", "their_goals", "our_shots", "their_shots"];

/// One team's row for one game.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamGameRecord {
    pub id: TeamId,
    pub game_id: GameId,
    pub away: bool,
    pub skater_stats: SkaterStats,
    /// Regulation periods 1-3, `None` when the feed had no record for the period.
    pub periods: [Option<PeriodView>; REGULATION_PERIODS],
    /// Sum over every period after regulation, `None` when there was none.
    pub extra_periods: Option<PeriodView>,
    pub overtime: bool,
}

impl TeamGameRecord {
    /// Goals over the regulation periods that were recorded.
    pub fn regulation_goals(&self) -> u32 {
        self.periods.iter().flatten().map(|e| e.our_goals).sum()
    }
}

/// Columns the row fills in itself. A skater stat with one of these names is dropped.
fn is_row_column(key: &str) -> bool {
    if ROW_COLUMNS.contains(&key) {
        return true;
    }
    match key.split_once("_period_") {
        Some((period, rest)) => {
            PERIOD_COLUMNS.contains(&rest) && (1..=REGULATION_PERIODS).any(|p| period == p.to_string())
        },
        None => false,
    }
}

// Flat row: skater stats in feed order, then id, game_id, away, per-period goals and shots, OT columns.
// Missing periods become null.
impl Serialize for TeamGameRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in self.skater_stats.iter().filter(|e| !is_row_column(e.0)) {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("game_id", &self.game_id)?;
        map.serialize_entry("away", &self.away)?;

        for (i, p) in self.periods.iter().enumerate() {
            map.serialize_entry(&format!("{}_period_our_goals", i + 1), &p.map(|e| e.our_goals))?;
            map.serialize_entry(&format!("{}_period_their_goals", i + 1), &p.map(|e| e.their_goals))?;
        }
        for (i, p) in self.periods.iter().enumerate() {
            map.serialize_entry(&format!("{}_period_our_shots", i + 1), &p.map(|e| e.our_shots))?;
            map.serialize_entry(&format!("{}_period_their_shots", i + 1), &p.map(|e| e.their_shots))?;
        }

        let extra = self.extra_periods;
        map.serialize_entry("OT_our_goals", &extra.map(|e| e.our_goals))?;
        map.serialize_entry("OT_their_goals", &extra.map(|e| e.their_goals))?;
        map.serialize_entry("OT_our_shots", &extra.map(|e| e.our_shots))?;
        map.serialize_entry("OT_their_shots", &extra.map(|e| e.their_shots))?;
        map.serialize_entry("OT", &self.overtime)?;
        map.end()
    }
}
