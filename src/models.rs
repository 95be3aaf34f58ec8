use chrono::NaiveDate;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Display;

use crate::error::{Result, StatsError};

pub type GameId = i64;
pub type TeamId = u32;

/// Number of regulation periods. Anything after these is overtime or shootout.
pub const REGULATION_PERIODS: usize = 3;

/// A single stat as sent by the stats service. Counts arrive as numbers, percentages as strings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum StatValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl StatValue {
    pub fn to_num(&self) -> Option<f64> {
        match self {
            StatValue::Int(n) => Some(*n as f64),
            StatValue::Float(n) => Some(*n),
            StatValue::Text(str) => str.trim().parse::<f64>().ok(),
        }
    }
}

/// Stat name to value, in the order the feed lists them. A repeated name keeps its first position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SkaterStats(Vec<(String, StatValue)>);

impl SkaterStats {
    pub fn new() -> SkaterStats {
        SkaterStats(vec![])
    }

    pub fn insert(&mut self, key: String, value: StatValue) {
        match self.0.iter_mut().find(|e| e.0 == key) {
            Some(e) => e.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&StatValue> {
        self.0.iter().find(|e| e.0 == key).map(|e| &e.1)
    }

    pub fn remove(&mut self, key: &str) -> Option<StatValue> {
        let index = self.0.iter().position(|e| e.0 == key)?;
        Some(self.0.remove(index).1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StatValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[(String, StatValue); N]> for SkaterStats {
    fn from(v: [(String, StatValue); N]) -> Self {
        let mut stats = SkaterStats::new();
        for (key, value) in v {
            stats.insert(key, value);
        }
        stats
    }
}

impl std::ops::Index<&str> for SkaterStats {
    type Output = StatValue;

    fn index(&self, key: &str) -> &StatValue {
        match self.get(key) {
            Some(e) => e,
            None => panic!("no stat named {key}"),
        }
    }
}

impl Serialize for SkaterStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct SkaterStatsVisitor;

impl<'de> Visitor<'de> for SkaterStatsVisitor {
    type Value = SkaterStats;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("a map of stat name to value")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<SkaterStats, A::Error> {
        let mut stats = SkaterStats::new();
        while let Some((key, value)) = access.next_entry::<String, StatValue>()? {
            stats.insert(key, value);
        }
        Ok(stats)
    }
}

impl<'de> Deserialize<'de> for SkaterStats {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<SkaterStats, D::Error> {
        deserializer.deserialize_map(SkaterStatsVisitor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn is_away(&self) -> bool {
        self == &Side::Away
    }
}

/// Goals and shots on goal for both teams in one period, or summed over several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PeriodSummary {
    pub home_goals: u32,
    pub home_shots: u32,
    pub away_goals: u32,
    pub away_shots: u32,
}

/// One period seen from one team: "our" is the team the row describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PeriodView {
    pub our_goals: u32,
    pub their_goals: u32,
    pub our_shots: u32,
    pub their_shots: u32,
}

impl PeriodSummary {
    pub fn view_for(&self, side: Side) -> PeriodView {
        match side {
            Side::Home => PeriodView {
                our_goals: self.home_goals,
                their_goals: self.away_goals,
                our_shots: self.home_shots,
                their_shots: self.away_shots,
            },
            Side::Away => PeriodView {
                our_goals: self.away_goals,
                their_goals: self.home_goals,
                our_shots: self.away_shots,
                their_shots: self.home_shots,
            },
        }
    }

    pub fn sum(periods: &[PeriodSummary]) -> Option<PeriodSummary> {
        if periods.is_empty() {
            return None;
        }
        Some(periods.iter().fold(PeriodSummary::default(), |acc, p| PeriodSummary {
            home_goals: acc.home_goals.saturating_add(p.home_goals),
            home_shots: acc.home_shots.saturating_add(p.home_shots),
            away_goals: acc.away_goals.saturating_add(p.away_goals),
            away_shots: acc.away_shots.saturating_add(p.away_shots),
        }))
    }
}

impl PeriodView {
    pub fn mirrored(&self) -> PeriodView {
        PeriodView {
            our_goals: self.their_goals,
            their_goals: self.our_goals,
            our_shots: self.their_shots,
            their_shots: self.our_shots,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamBox {
    pub team_id: TeamId,
    pub skater_stats: SkaterStats,
}

/// A live feed that has been checked for every field the normalizer reads.
#[derive(Debug, Clone, PartialEq)]
pub struct GamePayload {
    pub home: TeamBox,
    pub away: TeamBox,
    /// `None` where the feed has no record for that regulation period yet.
    pub regulation: [Option<PeriodSummary>; REGULATION_PERIODS],
    /// Periods after regulation, in the order the feed lists them.
    pub extra: Vec<PeriodSummary>,
    pub current_period: u8,
}

impl GamePayload {
    pub fn team(&self, side: Side) -> &TeamBox {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    pub fn is_overtime(&self) -> bool {
        usize::from(self.current_period) > REGULATION_PERIODS
    }
}

/// Inclusive range of game days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<DateRange> {
        if start > end {
            return Err(StatsError::InvalidDateRange { start, end });
        }
        Ok(DateRange { start, end })
    }
}

impl Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
