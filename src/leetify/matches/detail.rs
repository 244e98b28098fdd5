use std::cmp::Ordering;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::config::DuoConfig;
use crate::error::Result;
use crate::leetify;
use crate::model::{
    DataSource, FetchedMatch, MapResult, MatchRecord, PlayerGameStat, PlayerStatRecord,
};

/// Fetch one match document and reduce it to the tracked players' rows.
///
/// Returns `Ok(None)` when the document has no player stats at all.
#[instrument(skip(client, config))]
pub(crate) async fn get_match(
    client: &reqwest::Client,
    config: &DuoConfig,
    match_id: &str,
) -> Result<Option<FetchedMatch>> {
    let url = config.match_url(match_id);
    let record: MatchRecord = leetify::get_json(client, &url).await?;
    let fetched = normalize_match(match_id, record, config);
    debug!(
        match_id,
        players = fetched.as_ref().map(|m| m.players.len()),
        "parsed match"
    );
    Ok(fetched)
}

pub(crate) fn normalize_match(
    match_id: &str,
    record: MatchRecord,
    config: &DuoConfig,
) -> Option<FetchedMatch> {
    let MatchRecord {
        map_name,
        team_scores,
        data_source,
        finished_at,
        player_stats,
    } = record;
    let player_stats = player_stats?;

    let tracked = player_stats
        .into_iter()
        .filter(|p| config.is_tracked(&p.steam64_id))
        .collect_vec();

    let match_won = resolve_match_won(&tracked);

    let players = tracked
        .into_iter()
        .map(|p| PlayerGameStat {
            kd_ratio: p.kd_ratio.unwrap_or_else(|| {
                kd_ratio(p.total_kills.unwrap_or(0), p.total_deaths.unwrap_or(0))
            }),
            player_id: p.steam64_id,
            name: p.name,
            accuracy: p.accuracy.unwrap_or(0.0),
            total_kills: p.total_kills.unwrap_or(0),
            total_assists: p.total_assists.unwrap_or(0),
            total_deaths: p.total_deaths.unwrap_or(0),
            total_damage: p.total_damage.unwrap_or(0),
            finished_at,
        })
        .collect_vec();

    let score = match team_scores.as_slice() {
        [a, b, ..] => [*a, *b],
        [a] => [*a, 0],
        [] => [0, 0],
    };

    Some(FetchedMatch {
        match_id: match_id.to_string(),
        players,
        map: MapResult {
            map: map_name,
            score,
            match_won,
            finished_at,
            data_source: DataSource::parse_lenient(&data_source),
        },
    })
}

/// Decide the match outcome from the tracked players' round counts.
///
/// Each player whose won and lost rounds differ yields a verdict; the last
/// such verdict wins. A tie (or no players) leaves the outcome unresolved.
pub(crate) fn resolve_match_won(players: &[PlayerStatRecord]) -> Option<bool> {
    players
        .iter()
        .filter_map(|p| match p.rounds_won().cmp(&p.rounds_lost()) {
            Ordering::Greater => Some(true),
            Ordering::Less => Some(false),
            Ordering::Equal => None,
        })
        .last()
}

fn kd_ratio(kills: u32, deaths: u32) -> f64 {
    kills as f64 / deaths.max(1) as f64
}
