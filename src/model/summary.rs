use chrono::{DateTime, Utc};
use serde::Serialize;

use super::common::SteamId;

/// Running totals for one player across a batch of matches.
///
/// Averages are derived on read from the stored sums, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSummary {
    pub player_id: SteamId,
    /// Display name seen in the most recent contributing match.
    pub name: String,
    pub total_kills: u64,
    pub total_assists: u64,
    pub total_deaths: u64,
    pub total_damage: u64,
    pub kd_ratio_sum: f64,
    pub accuracy_sum: f64,
    pub game_count: u32,
    pub finished_at: Option<DateTime<Utc>>,
}

impl PlayerSummary {
    pub(crate) fn new(player_id: SteamId, name: impl Into<String>) -> Self {
        Self {
            player_id,
            name: name.into(),
            total_kills: 0,
            total_assists: 0,
            total_deaths: 0,
            total_damage: 0,
            kd_ratio_sum: 0.0,
            accuracy_sum: 0.0,
            game_count: 0,
            finished_at: None,
        }
    }

    pub fn avg_kd_ratio(&self) -> f64 {
        mean(self.kd_ratio_sum, self.game_count)
    }

    pub fn avg_accuracy(&self) -> f64 {
        mean(self.accuracy_sum, self.game_count)
    }
}

/// Games played and won on one map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapSummary {
    pub map: String,
    pub games_played: u32,
    pub wins: u32,
}

impl MapSummary {
    pub(crate) fn new(map: impl Into<String>) -> Self {
        Self {
            map: map.into(),
            games_played: 0,
            wins: 0,
        }
    }

    /// Wins over games played, `0.0..=1.0`.
    pub fn win_rate(&self) -> f64 {
        mean(self.wins as f64, self.games_played)
    }

    pub fn win_rate_percent(&self) -> f64 {
        self.win_rate() * 100.0
    }
}

/// Zero when nothing was counted.
fn mean(sum: f64, count: u32) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
