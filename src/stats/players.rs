use std::collections::BTreeMap;

use crate::model::{MatchGroup, PlayerSummary, SteamId};

/// Fold every player row of every group into per-player running totals.
///
/// Input order does not matter: `finished_at` keeps the latest timestamp
/// seen, and the display name follows it.
pub fn summarize(matches: &[MatchGroup]) -> BTreeMap<SteamId, PlayerSummary> {
    matches
        .iter()
        .flat_map(|group| group.players.iter())
        .fold(BTreeMap::new(), |mut acc, player| {
            let summary = acc
                .entry(player.player_id.clone())
                .or_insert_with(|| PlayerSummary::new(player.player_id.clone(), &player.name));

            summary.total_kills += u64::from(player.total_kills);
            summary.total_assists += u64::from(player.total_assists);
            summary.total_deaths += u64::from(player.total_deaths);
            summary.total_damage += u64::from(player.total_damage);
            summary.kd_ratio_sum += player.kd_ratio;
            summary.accuracy_sum += player.accuracy;
            summary.game_count += 1;

            if summary.finished_at.is_none() || player.finished_at > summary.finished_at {
                summary.finished_at = player.finished_at;
                summary.name.clone_from(&player.name);
            }
            acc
        })
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::model::fixtures::{at, group, player};

    fn matches() -> Vec<MatchGroup> {
        vec![
            group(
                "a",
                "de_mirage",
                [13, 7],
                Some(true),
                at(1, 20),
                [player("1", "botq", 20, 10), player("2", "qros", 12, 12)],
            ),
            group(
                "b",
                "de_inferno",
                [9, 13],
                Some(false),
                at(3, 18),
                [player("1", "botq", 10, 20), player("2", "qros", 18, 9)],
            ),
            group(
                "c",
                "de_nuke",
                [13, 13],
                None,
                at(2, 21),
                [player("2", "qros_old", 14, 14), player("1", "botq", 16, 8)],
            ),
        ]
    }

    #[test]
    fn test_summarize_totals() {
        let summary = summarize(&matches());
        assert_eq!(summary.len(), 2);

        let botq = &summary[&SteamId::new("1")];
        assert_eq!(botq.total_kills, 46);
        assert_eq!(botq.total_deaths, 38);
        assert_eq!(botq.total_assists, 9);
        assert_eq!(botq.total_damage, 46 * 90);
        assert_eq!(botq.game_count, 3);
    }

    #[test]
    fn test_averages_are_mean_of_matches() {
        let summary = summarize(&matches());
        let qros = &summary[&SteamId::new("2")];
        let expected = (12.0 / 12.0 + 18.0 / 9.0 + 14.0 / 14.0) / 3.0;
        assert!((qros.avg_kd_ratio() - expected).abs() < 1e-9);
        assert!((qros.avg_accuracy() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_finished_at_is_max_regardless_of_order() {
        let forward = summarize(&matches());
        let reversed = summarize(&matches().into_iter().rev().collect_vec());
        let shuffled = {
            let m = matches();
            vec![m[2].clone(), m[0].clone(), m[1].clone()]
        };
        let shuffled = summarize(&shuffled);

        assert_eq!(forward, reversed);
        assert_eq!(forward, shuffled);
        assert_eq!(forward[&SteamId::new("1")].finished_at, at(3, 18));
    }

    #[test]
    fn test_name_follows_most_recent_match() {
        let summary = summarize(&matches());
        assert_eq!(summary[&SteamId::new("2")].name, "qros");
    }

    #[test]
    fn test_empty_input() {
        assert!(summarize(&[]).is_empty());
    }
}
