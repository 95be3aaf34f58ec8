use serde::Serialize;

use crate::models::GameId;

use super::team_game_record::TeamGameRecord;

/// Rows of `TeamGameRecord`, two per game. Order is the order rows were added.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct GameTable {
    rows: Vec<TeamGameRecord>,
}

impl GameTable {
    pub fn new() -> GameTable {
        GameTable { rows: vec![] }
    }

    /// Rows of every table in turn, no dedup, no sorting.
    pub fn concat(tables: impl IntoIterator<Item = GameTable>) -> GameTable {
        let rows = tables.into_iter().flat_map(|e| e.rows).collect();
        GameTable { rows }
    }

    pub fn extend(&mut self, other: GameTable) {
        self.rows.extend(other.rows);
    }

    pub fn rows(&self) -> &[TeamGameRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn for_game(&self, game_id: GameId) -> Vec<&TeamGameRecord> {
        self.rows.iter().filter(|e| e.game_id == game_id).collect()
    }

    pub fn game_ids(&self) -> Vec<GameId> {
        let mut ids: Vec<GameId> = vec![];
        for row in &self.rows {
            if !ids.contains(&row.game_id) {
                ids.push(row.game_id);
            }
        }
        ids
    }
}

impl From<(TeamGameRecord, TeamGameRecord)> for GameTable {
    fn from(v: (TeamGameRecord, TeamGameRecord)) -> Self {
        GameTable { rows: vec![v.0, v.1] }
    }
}
