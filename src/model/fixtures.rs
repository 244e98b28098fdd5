//! Builders shared by unit tests across the crate.

use chrono::{DateTime, TimeZone, Utc};

use super::{DataSource, MapResult, MatchGroup, PlayerGameStat, SteamId};

pub(crate) fn at(day: u32, hour: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(2024, 9, day, hour, 0, 0).single()
}

pub(crate) fn player(id: &str, name: &str, kills: u32, deaths: u32) -> PlayerGameStat {
    PlayerGameStat {
        player_id: SteamId::new(id),
        name: name.to_string(),
        accuracy: 0.2,
        total_kills: kills,
        total_assists: 3,
        total_deaths: deaths,
        total_damage: kills * 90,
        kd_ratio: kills as f64 / deaths.max(1) as f64,
        finished_at: None,
    }
}

pub(crate) fn group(
    match_id: &str,
    map: &str,
    score: [u32; 2],
    match_won: Option<bool>,
    finished_at: Option<DateTime<Utc>>,
    mut players: [PlayerGameStat; 2],
) -> MatchGroup {
    for p in players.iter_mut() {
        p.finished_at = finished_at;
    }
    MatchGroup {
        match_id: match_id.to_string(),
        players,
        map: MapResult {
            map: map.to_string(),
            score,
            match_won,
            finished_at,
            data_source: DataSource::Matchmaking,
        },
    }
}
