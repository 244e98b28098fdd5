use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

/// A stable steam64 account identifier.
///
/// Display names on the stats site can change at any time, so this is the
/// only key used to identify a player across matches.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SteamId(String);

impl SteamId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SteamId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SteamId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// The upstream classification of how a match was played.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum DataSource {
    Matchmaking,
    Faceit,
    Renown,
    #[strum(default)]
    Other(String),
}

impl DataSource {
    pub fn as_str(&self) -> &str {
        match self {
            DataSource::Matchmaking => "matchmaking",
            DataSource::Faceit => "faceit",
            DataSource::Renown => "renown",
            DataSource::Other(raw) => raw,
        }
    }

    /// Classify a raw source string; unknown values land in `Other`.
    pub fn parse_lenient(raw: &str) -> Self {
        raw.parse()
            .unwrap_or_else(|_| DataSource::Other(raw.to_string()))
    }
}

impl Display for DataSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
