use std::env;

use itertools::Itertools;
use tracing::debug;

use crate::error::{Result, StatsError};
use crate::model::{DataSource, SteamId};

pub const DEFAULT_API_BASE_URL: &str = "https://api.leetify.com/api/games";
pub const DEFAULT_MATCH_LIST_URL: &str = "https://puppeteer-render-hbjn.onrender.com/scrape";

const API_URL_KEY: &str = "DUO_STATS_API_URL";
const MATCH_LIST_URL_KEY: &str = "DUO_STATS_MATCH_LIST_URL";
const PLAYERS_KEY: &str = "DUO_STATS_PLAYERS";
const DATA_SOURCE_KEY: &str = "DUO_STATS_DATA_SOURCE";

/// One of the two players whose stats are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedPlayer {
    pub id: SteamId,
    /// Overrides the display name reported by the stats site.
    pub label: Option<String>,
}

impl TrackedPlayer {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: SteamId::new(id),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Where matches come from and whose stats are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct DuoConfig {
    /// Per-match documents are fetched from `{api_base_url}/{match_id}`.
    pub api_base_url: String,
    /// Endpoint returning a JSON array of match identifiers.
    pub match_list_url: String,
    pub tracked_players: [TrackedPlayer; 2],
    /// Only matches from this source are retained.
    pub data_source: DataSource,
}

impl Default for DuoConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            match_list_url: DEFAULT_MATCH_LIST_URL.to_string(),
            tracked_players: [
                TrackedPlayer::new("76561198002392306"),
                TrackedPlayer::new("76561198040886804"),
            ],
            data_source: DataSource::Matchmaking,
        }
    }
}

impl DuoConfig {
    /// Build a config from the defaults, overridden by `DUO_STATS_*`
    /// environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`DuoConfig::from_env`] but reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(url) = value(API_URL_KEY) {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(url) = value(MATCH_LIST_URL_KEY) {
            config.match_list_url = url;
        }
        if let Some(players) = value(PLAYERS_KEY) {
            config.tracked_players = parse_players(&players)?;
        }
        if let Some(source) = value(DATA_SOURCE_KEY) {
            config.data_source = DataSource::parse_lenient(&source);
        }

        debug!(
            api = %config.api_base_url,
            data_source = %config.data_source,
            "loaded configuration"
        );
        Ok(config)
    }

    pub fn is_tracked(&self, id: &SteamId) -> bool {
        self.tracked_players.iter().any(|p| &p.id == id)
    }

    pub fn match_url(&self, match_id: &str) -> String {
        format!("{}/{match_id}", self.api_base_url)
    }
}

/// Parse `id[=label],id[=label]`.
fn parse_players(raw: &str) -> Result<[TrackedPlayer; 2]> {
    let players = raw
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once('=') {
            Some((id, label)) => TrackedPlayer::new(id.trim()).with_label(label.trim()),
            None => TrackedPlayer::new(entry),
        })
        .collect_vec();

    if let Some(bad) = players
        .iter()
        .find(|p| p.id.as_str().is_empty() || !p.id.as_str().bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(StatsError::Config {
            key: PLAYERS_KEY,
            message: format!("'{}' is not a steam64 id", bad.id),
        });
    }

    let count = players.len();
    let [first, second]: [TrackedPlayer; 2] =
        players.try_into().map_err(|_| StatsError::Config {
            key: PLAYERS_KEY,
            message: format!("expected exactly two players, got {count}"),
        })?;
    if first.id == second.id {
        return Err(StatsError::Config {
            key: PLAYERS_KEY,
            message: "both entries name the same player".to_string(),
        });
    }
    Ok([first, second])
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = DuoConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, DuoConfig::default());
        assert_eq!(
            config.match_url("abc"),
            "https://api.leetify.com/api/games/abc"
        );
        assert!(config.is_tracked(&SteamId::new("76561198040886804")));
        assert!(!config.is_tracked(&SteamId::new("1")));
    }

    #[test]
    fn test_overrides() {
        let config = DuoConfig::from_lookup(lookup(&[
            (API_URL_KEY, "http://localhost:8080/games/"),
            (PLAYERS_KEY, "111=botq, 222"),
            (DATA_SOURCE_KEY, "faceit"),
        ]))
        .unwrap();
        assert_eq!(config.match_url("x"), "http://localhost:8080/games/x");
        assert_eq!(config.tracked_players[0].label.as_deref(), Some("botq"));
        assert_eq!(config.tracked_players[1].id.as_str(), "222");
        assert_eq!(config.tracked_players[1].label, None);
        assert_eq!(config.data_source, DataSource::Faceit);
    }

    #[test]
    fn test_invalid_players() {
        for raw in ["111", "111,222,333", "111,abc", "111,111"] {
            let err = DuoConfig::from_lookup(lookup(&[(PLAYERS_KEY, raw)])).unwrap_err();
            assert!(matches!(err, StatsError::Config { key: PLAYERS_KEY, .. }), "{raw}");
        }
    }
}
