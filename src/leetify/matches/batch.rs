use std::cmp::Reverse;

use futures::future::try_join_all;
use itertools::Itertools;
use tracing::{debug, instrument, warn};

use crate::config::DuoConfig;
use crate::error::Result;
use crate::leetify::matches::detail;
use crate::model::{DataSource, FetchedMatch, MatchGroup};

/// Fetch every match concurrently and keep the well-formed groups from the
/// configured data source, most recent first.
///
/// The first failing fetch aborts the whole batch.
#[instrument(skip(client, config, match_ids), fields(count = match_ids.len()))]
pub(crate) async fn get_match_groups(
    client: &reqwest::Client,
    config: &DuoConfig,
    match_ids: &[String],
) -> Result<Vec<MatchGroup>> {
    let fetched = try_join_all(
        match_ids
            .iter()
            .map(|id| detail::get_match(client, config, id)),
    )
    .await?;

    let groups = collect_match_groups(fetched, &config.data_source);
    debug!(
        requested = match_ids.len(),
        kept = groups.len(),
        "collected match groups"
    );
    Ok(groups)
}

pub(crate) fn collect_match_groups(
    fetched: Vec<Option<FetchedMatch>>,
    data_source: &DataSource,
) -> Vec<MatchGroup> {
    fetched
        .into_iter()
        .flatten()
        .filter_map(|m| {
            let match_id = m.match_id.clone();
            let players = m.players.len();
            let group = MatchGroup::from_fetched(m);
            if group.is_none() {
                warn!(
                    %match_id,
                    players,
                    "dropping match without two distinct tracked players"
                );
            }
            group
        })
        .filter(|g| &g.map.data_source == data_source)
        .sorted_by_key(|g| Reverse(g.finished_at()))
        .collect_vec()
}
