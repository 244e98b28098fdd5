use std::collections::BTreeMap;

use crate::model::{MapSummary, MatchGroup};

/// Count games and wins per map. Only a resolved win counts towards `wins`;
/// losses and unresolved outcomes still count as games played.
pub fn summarize_maps(matches: &[MatchGroup]) -> BTreeMap<String, MapSummary> {
    let mut maps = BTreeMap::new();
    for group in matches {
        let summary = maps
            .entry(group.map.map.clone())
            .or_insert_with(|| MapSummary::new(&group.map.map));
        summary.games_played += 1;
        if group.map.match_won == Some(true) {
            summary.wins += 1;
        }
    }
    maps
}
