use tracing::instrument;

use crate::config::DuoConfig;
use crate::error::Result;
use crate::leetify;
use crate::model::{FetchedMatch, MatchGroup};
use crate::report::{DuoReport, ReportOptions};

/// The main entry point for fetching a duo's match statistics.
///
/// `DuoStatsClient` wraps a [`reqwest::Client`] together with a
/// [`DuoConfig`] naming the two tracked players and the endpoints to use.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> duo_stats::Result<()> {
/// use duo_stats::{DuoStatsClient, ReportOptions};
///
/// let client = DuoStatsClient::new();
/// let matches = client.get_all_match_groups().await?;
/// let report = client.report(&matches, ReportOptions::default());
/// println!("{report}");
/// # Ok(())
/// # }
/// ```
pub struct DuoStatsClient {
    http: reqwest::Client,
    config: DuoConfig,
}

impl DuoStatsClient {
    /// Create a new client with the default configuration.
    pub fn new() -> Self {
        Self::with_config(DuoConfig::default())
    }

    pub fn with_config(config: DuoConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, config: DuoConfig) -> Self {
        Self {
            http: client,
            config,
        }
    }

    pub fn config(&self) -> &DuoConfig {
        &self.config
    }

    /// Fetch one match and reduce it to the tracked players' rows.
    ///
    /// `Ok(None)` means the match has no player stats; it is not an error.
    #[instrument(skip(self))]
    pub async fn get_match(&self, match_id: &str) -> Result<Option<FetchedMatch>> {
        leetify::matches::detail::get_match(&self.http, &self.config, match_id).await
    }

    /// Fetch the match identifiers from the configured scrape endpoint.
    #[instrument(skip(self))]
    pub async fn get_match_ids(&self) -> Result<Vec<String>> {
        leetify::matches::list::get_match_ids(&self.http, &self.config.match_list_url).await
    }

    /// Fetch the given matches concurrently and return the complete groups
    /// from the configured data source, newest first. Any failed fetch fails
    /// the whole call.
    #[instrument(skip(self, match_ids))]
    pub async fn get_match_groups(&self, match_ids: &[String]) -> Result<Vec<MatchGroup>> {
        leetify::matches::batch::get_match_groups(&self.http, &self.config, match_ids).await
    }

    /// Fetch the identifier list and then every match on it.
    #[instrument(skip(self))]
    pub async fn get_all_match_groups(&self) -> Result<Vec<MatchGroup>> {
        let ids = self.get_match_ids().await?;
        self.get_match_groups(&ids).await
    }

    /// Aggregate already-fetched matches for the tracked players.
    pub fn report(&self, matches: &[MatchGroup], options: ReportOptions) -> DuoReport {
        DuoReport::build(matches, &self.config.tracked_players, options)
    }
}

impl Default for DuoStatsClient {
    fn default() -> Self {
        Self::new()
    }
}
