use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use super::common::SteamId;

/// A raw match document as returned by `GET /api/games/{id}`.
///
/// Only the fields the aggregation needs are mapped; everything else in the
/// document is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    #[serde(default, deserialize_with = "null_default")]
    pub map_name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub team_scores: Vec<u32>,
    #[serde(default, deserialize_with = "null_default")]
    pub data_source: String,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub finished_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub player_stats: Option<Vec<PlayerStatRecord>>,
}

/// Per-player stats inside a [`MatchRecord`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatRecord {
    #[serde(rename = "steam64Id")]
    pub steam64_id: SteamId,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub total_damage: Option<u32>,
    #[serde(default)]
    pub total_kills: Option<u32>,
    #[serde(default)]
    pub total_deaths: Option<u32>,
    #[serde(default)]
    pub total_assists: Option<u32>,
    #[serde(default)]
    pub kd_ratio: Option<f64>,
    #[serde(default)]
    pub t_rounds_won: Option<u32>,
    #[serde(default)]
    pub ct_rounds_won: Option<u32>,
    #[serde(default)]
    pub t_rounds_lost: Option<u32>,
    #[serde(default)]
    pub ct_rounds_lost: Option<u32>,
}

impl PlayerStatRecord {
    /// Rounds won on both sides. Absent counts are treated as zero.
    pub fn rounds_won(&self) -> u32 {
        self.t_rounds_won
            .unwrap_or(0)
            .saturating_add(self.ct_rounds_won.unwrap_or(0))
    }

    /// Rounds lost on both sides. Absent counts are treated as zero.
    pub fn rounds_lost(&self) -> u32 {
        self.t_rounds_lost
            .unwrap_or(0)
            .saturating_add(self.ct_rounds_lost.unwrap_or(0))
    }
}

/// Accepts an RFC 3339 timestamp, mapping anything else (null, empty,
/// garbage) to `None` instead of rejecting the whole document.
fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        DateTime::parse_from_rfc3339(s.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }))
}

/// Treats an explicit `null` the same as a missing field.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
