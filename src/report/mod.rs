//! Presentation of aggregated match statistics as plain-text tables.

mod format;
mod score;

use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use itertools::Itertools;
use tracing::debug;

pub use format::{format_finished_at, format_fraction_percent, format_ratio};
pub use score::{display_score, DisplayScore, Outcome};

use crate::config::TrackedPlayer;
use crate::model::{MapSummary, MatchGroup, PlayerGameStat, PlayerSummary, SteamId};
use crate::stats::{self, DateRange, Page};

pub const DEFAULT_RECORDS_PER_PAGE: usize = 15;
pub const MAX_RECORDS_PER_PAGE: usize = 100;

/// User-adjustable view settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    pub records_per_page: usize,
    /// 1-based page of the game-by-game table.
    pub page: usize,
    /// Applied before any aggregation.
    pub date_range: Option<DateRange>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            records_per_page: DEFAULT_RECORDS_PER_PAGE,
            page: 1,
            date_range: None,
        }
    }
}

impl ReportOptions {
    /// Clamped to `1..=100`.
    pub fn with_records_per_page(mut self, records_per_page: usize) -> Self {
        self.records_per_page = records_per_page.clamp(1, MAX_RECORDS_PER_PAGE);
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = Some(date_range);
        self
    }
}

/// Everything needed to render the game, player and map tables.
#[derive(Debug, Clone)]
pub struct DuoReport {
    pub matches: Vec<MatchGroup>,
    pub players: BTreeMap<SteamId, PlayerSummary>,
    pub maps: BTreeMap<String, MapSummary>,
    tracked: [TrackedPlayer; 2],
    options: ReportOptions,
}

impl DuoReport {
    /// Filter `matches` by the configured date range and aggregate what is
    /// left. The input is expected newest first, as returned by the client.
    pub fn build(matches: &[MatchGroup], tracked: &[TrackedPlayer; 2], options: ReportOptions) -> Self {
        let matches = match &options.date_range {
            Some(range) => stats::filter_by_date_range(matches, range),
            None => matches.to_vec(),
        };
        let players = stats::summarize(&matches);
        let maps = stats::summarize_maps(&matches);
        debug!(
            matches = matches.len(),
            players = players.len(),
            maps = maps.len(),
            "built report"
        );
        Self {
            matches,
            players,
            maps,
            tracked: tracked.clone(),
            options,
        }
    }

    pub fn page(&self) -> Page<'_, MatchGroup> {
        stats::paginate(&self.matches, self.options.records_per_page, self.options.page)
    }

    /// Resolve the name to show for a player: a configured label first, then
    /// the most recent name seen in the data.
    pub fn display_name(&self, id: &SteamId) -> String {
        self.tracked
            .iter()
            .find(|p| &p.id == id)
            .and_then(|p| p.label.clone())
            .or_else(|| self.players.get(id).map(|s| s.name.clone()))
            .unwrap_or_else(|| id.to_string())
    }

    /// Look up a player's summary by the name it is displayed under.
    pub fn player_by_name(&self, name: &str) -> Option<&PlayerSummary> {
        self.players
            .values()
            .find(|s| self.display_name(&s.player_id) == name)
    }

    fn tracked_rank(&self, id: &SteamId) -> usize {
        self.tracked
            .iter()
            .position(|p| &p.id == id)
            .unwrap_or(self.tracked.len())
    }

    fn ordered_players<'a>(&self, group: &'a MatchGroup) -> Vec<&'a PlayerGameStat> {
        group
            .players
            .iter()
            .sorted_by_key(|p| self.tracked_rank(&p.player_id))
            .collect_vec()
    }

    pub fn games_table(&self) -> Table {
        table(&GAME_HEADERS, self.game_rows())
    }

    /// Two rows per match on the current page; the game number, map, score,
    /// result and finish time appear only on the first.
    pub fn game_rows(&self) -> Vec<Vec<String>> {
        let mut rows = Vec::new();
        let page = self.page();
        for (offset, group) in page.items.iter().enumerate() {
            for (row, player) in self.ordered_players(group).into_iter().enumerate() {
                let shared = if row == 0 {
                    vec![
                        (page.first_index + offset + 1).to_string(),
                        group.map.map.clone(),
                        display_score(group.map.score, group.map.match_won).to_string(),
                        Outcome::from(group.map.match_won).to_string(),
                    ]
                } else {
                    vec![String::new(); 4]
                };
                let finished_at = if row == 0 {
                    format_finished_at(group.finished_at())
                } else {
                    String::new()
                };
                let cells = shared
                    .into_iter()
                    .chain([
                        self.display_name(&player.player_id),
                        player.total_kills.to_string(),
                        player.total_assists.to_string(),
                        player.total_deaths.to_string(),
                        format_ratio(player.kd_ratio),
                        format_fraction_percent(player.accuracy),
                        player.total_damage.to_string(),
                        finished_at,
                    ])
                    .collect_vec();
                rows.push(cells);
            }
        }
        rows
    }

    pub fn players_table(&self) -> Table {
        table(&PLAYER_HEADERS, self.player_rows())
    }

    pub fn player_rows(&self) -> Vec<Vec<String>> {
        self.players
            .values()
            .sorted_by_key(|s| self.tracked_rank(&s.player_id))
            .map(|summary| {
                vec![
                    self.display_name(&summary.player_id),
                    summary.total_kills.to_string(),
                    summary.total_assists.to_string(),
                    summary.total_deaths.to_string(),
                    format_ratio(summary.avg_kd_ratio()),
                    format_fraction_percent(summary.avg_accuracy()),
                    summary.total_damage.to_string(),
                ]
            })
            .collect_vec()
    }

    pub fn maps_table(&self) -> Table {
        table(&MAP_HEADERS, self.map_rows())
    }

    /// Most played maps first.
    pub fn map_rows(&self) -> Vec<Vec<String>> {
        self.maps
            .values()
            .sorted_by_key(|m| (Reverse(m.games_played), m.map.clone()))
            .map(|summary| {
                vec![
                    summary.map.clone(),
                    summary.games_played.to_string(),
                    summary.wins.to_string(),
                    format_fraction_percent(summary.win_rate()),
                ]
            })
            .collect_vec()
    }
}

const GAME_HEADERS: [&str; 12] = [
    "Game",
    "Map",
    "Score",
    "Result",
    "Player",
    "Kills",
    "Assists",
    "Deaths",
    "K/D Ratio",
    "Accuracy",
    "Damage",
    "Finished At",
];

const PLAYER_HEADERS: [&str; 7] = [
    "Player",
    "Total Kills",
    "Total Assists",
    "Total Deaths",
    "Avg K/D Ratio",
    "Avg Accuracy",
    "Total Damage",
];

const MAP_HEADERS: [&str; 4] = ["Map", "Games", "Wins", "Win Rate"];

fn table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(headers.to_vec());
    for row in rows {
        table.add_row(row);
    }
    table
}

impl Display for DuoReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.matches.is_empty() {
            return writeln!(f, "No data available.");
        }
        let page = self.page();
        writeln!(f, "Game-by-Game Statistics")?;
        writeln!(f, "{}", self.games_table())?;
        writeln!(f, "Page {} of {}", page.page, page.total_pages)?;
        writeln!(f)?;
        writeln!(f, "Player Summary Statistics")?;
        writeln!(f, "{}", self.players_table())?;
        writeln!(f, "Map Statistics")?;
        write!(f, "{}", self.maps_table())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{at, group, player};

    const BOTQ: &str = "76561198002392306";
    const QROS: &str = "76561198040886804";

    fn tracked() -> [TrackedPlayer; 2] {
        [TrackedPlayer::new(BOTQ), TrackedPlayer::new(QROS)]
    }

    fn stat(id: &str, name: &str, kills: u32, deaths: u32, accuracy: f64) -> PlayerGameStat {
        PlayerGameStat {
            accuracy,
            ..player(id, name, kills, deaths)
        }
    }

    fn scenario() -> Vec<MatchGroup> {
        vec![
            group(
                "inferno",
                "Inferno",
                [13, 9],
                Some(false),
                at(2, 21),
                [
                    stat(QROS, "qros", 11, 17, 0.15),
                    stat(BOTQ, "botq", 14, 16, 0.22),
                ],
            ),
            group(
                "mirage",
                "Mirage",
                [13, 7],
                Some(true),
                at(1, 20),
                [
                    stat(BOTQ, "botq", 22, 11, 0.30),
                    stat(QROS, "qros", 17, 12, 0.25),
                ],
            ),
        ]
    }

    #[test]
    fn test_end_to_end_scenario() {
        let report = DuoReport::build(&scenario(), &tracked(), ReportOptions::default());

        let botq = report.player_by_name("botq").unwrap();
        assert_eq!(botq.total_kills, 36);
        assert_eq!(botq.game_count, 2);
        assert!((botq.avg_accuracy() - 0.26).abs() < 1e-9);

        let mirage = &report.maps["Mirage"];
        assert_eq!((mirage.games_played, mirage.wins), (1, 1));
        assert_eq!(format_fraction_percent(mirage.win_rate()), "100.00%");
        let inferno = &report.maps["Inferno"];
        assert_eq!((inferno.games_played, inferno.wins), (1, 0));
        assert_eq!(format_fraction_percent(inferno.win_rate()), "0.00%");
    }

    #[test]
    fn test_game_rows_pair_players_in_tracked_order() {
        let report = DuoReport::build(&scenario(), &tracked(), ReportOptions::default());
        let rows = report.game_rows();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.len() == GAME_HEADERS.len()));

        assert_eq!(rows[0][..5], ["1", "Inferno", "9 - 13", "LOST", "botq"]);
        assert_eq!(rows[1][..5], ["", "", "", "", "qros"]);
        assert_eq!(rows[1][11], "");
        assert_eq!(rows[2][..5], ["2", "Mirage", "13 - 7", "WON", "botq"]);
        assert_eq!(rows[2][8], "2.00");
        assert_eq!(rows[2][9], "30.00%");
        assert_eq!(rows[2][11], "01.09.2024 20:00");
    }

    #[test]
    fn test_summary_rows() {
        let report = DuoReport::build(&scenario(), &tracked(), ReportOptions::default());
        let players = report.player_rows();
        assert_eq!(players[0][0], "botq");
        assert_eq!(players[0][1], "36");
        assert_eq!(players[0][5], "26.00%");
        assert_eq!(players[1][0], "qros");

        let maps = report.map_rows();
        assert_eq!(maps[0], ["Inferno", "1", "0", "0.00%"]);
        assert_eq!(maps[1], ["Mirage", "1", "1", "100.00%"]);
    }

    #[test]
    fn test_labels_override_names() {
        let tracked = [
            TrackedPlayer::new(BOTQ).with_label("B"),
            TrackedPlayer::new(QROS),
        ];
        let report = DuoReport::build(&scenario(), &tracked, ReportOptions::default());
        assert_eq!(report.display_name(&SteamId::new(BOTQ)), "B");
        assert_eq!(report.display_name(&SteamId::new(QROS)), "qros");
        assert!(report.player_by_name("botq").is_none());
        assert!(report.player_by_name("B").is_some());
    }

    #[test]
    fn test_date_range_applies_before_aggregation() {
        let range = DateRange::new(at(2, 0).unwrap(), at(3, 0).unwrap()).unwrap();
        let options = ReportOptions::default().with_date_range(range);
        let report = DuoReport::build(&scenario(), &tracked(), options);

        assert_eq!(report.matches.len(), 1);
        assert_eq!(report.player_by_name("botq").unwrap().total_kills, 14);
        assert!(!report.maps.contains_key("Mirage"));
    }

    #[test]
    fn test_pagination_numbers_games_across_pages() {
        let options = ReportOptions::default().with_records_per_page(1).with_page(2);
        let report = DuoReport::build(&scenario(), &tracked(), options);
        let rows = report.game_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "2");
        assert_eq!(rows[0][1], "Mirage");

        // summaries still cover every match
        assert_eq!(report.player_by_name("qros").unwrap().game_count, 2);
    }

    #[test]
    fn test_records_per_page_is_clamped() {
        assert_eq!(ReportOptions::default().with_records_per_page(0).records_per_page, 1);
        assert_eq!(ReportOptions::default().with_records_per_page(500).records_per_page, 100);
    }

    #[test]
    fn test_empty_report() {
        let report = DuoReport::build(&[], &tracked(), ReportOptions::default());
        assert_eq!(report.to_string(), "No data available.\n");
        assert!(report.players.is_empty());
    }

    #[test]
    fn test_full_render_mentions_all_sections() {
        let rendered = DuoReport::build(&scenario(), &tracked(), ReportOptions::default()).to_string();
        assert!(rendered.contains("Game-by-Game Statistics"));
        assert!(rendered.contains("Page 1 of 1"));
        assert!(rendered.contains("Player Summary Statistics"));
        assert!(rendered.contains("Map Statistics"));
        assert!(rendered.contains("Inferno"));
        assert!(rendered.contains("100.00%"));
    }
}
