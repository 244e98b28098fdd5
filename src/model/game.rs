use chrono::{DateTime, Utc};
use serde::Serialize;

use super::common::{DataSource, SteamId};

/// One tracked player's stats for a single match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerGameStat {
    pub player_id: SteamId,
    pub name: String,
    /// Fraction of shots hit, `0.0..=1.0`.
    pub accuracy: f64,
    pub total_kills: u32,
    pub total_assists: u32,
    pub total_deaths: u32,
    pub total_damage: u32,
    pub kd_ratio: f64,
    pub finished_at: Option<DateTime<Utc>>,
}

/// The map and outcome of a single match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapResult {
    pub map: String,
    /// Team scores in the order the source reported them.
    pub score: [u32; 2],
    /// `None` when the round counts tie or are unavailable.
    pub match_won: Option<bool>,
    pub finished_at: Option<DateTime<Utc>>,
    pub data_source: DataSource,
}

/// A normalized match as produced by the fetcher, before validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchedMatch {
    pub match_id: String,
    pub players: Vec<PlayerGameStat>,
    pub map: MapResult,
}

/// The display and aggregation unit: one map outcome plus both tracked
/// players' stats for that match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchGroup {
    pub(crate) match_id: String,
    pub(crate) players: [PlayerGameStat; 2],
    pub(crate) map: MapResult,
}

impl MatchGroup {
    /// Validate a fetched match. Returns `None` unless it carries exactly two
    /// distinct players.
    pub fn from_fetched(fetched: FetchedMatch) -> Option<Self> {
        let FetchedMatch {
            match_id,
            players,
            map,
        } = fetched;
        let players: [PlayerGameStat; 2] = players.try_into().ok()?;
        if players[0].player_id == players[1].player_id {
            return None;
        }
        Some(Self {
            match_id,
            players,
            map,
        })
    }

    pub fn match_id(&self) -> &str {
        &self.match_id
    }

    /// Both tracked players' rows, in source order.
    pub fn players(&self) -> &[PlayerGameStat; 2] {
        &self.players
    }

    pub fn map(&self) -> &MapResult {
        &self.map
    }

    /// Look up a player's row by identifier.
    pub fn player(&self, id: &SteamId) -> Option<&PlayerGameStat> {
        self.players.iter().find(|p| &p.player_id == id)
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.map.finished_at
    }
}
