use itertools::Itertools;
use scraper::{Html, Selector};
use tracing::{debug, instrument};

use crate::error::Result;
use crate::leetify;

/// Fetch the list of match identifiers from the scrape endpoint, which
/// answers with a JSON array of strings.
#[instrument(skip(client))]
pub(crate) async fn get_match_ids(client: &reqwest::Client, url: &str) -> Result<Vec<String>> {
    let ids: Vec<String> = leetify::get_json(client, url).await?;
    let ids = ids
        .into_iter()
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .unique()
        .collect_vec();
    debug!(count = ids.len(), "fetched match ids");
    Ok(ids)
}

/// Extract match identifiers from a rendered match-list page.
///
/// Each `app-matches-list-item` links to `/app/match-details/{id}/...`-style
/// paths; the identifier is the last non-empty path segment.
pub fn parse_match_ids_html(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("app-matches-list-item a[href]")?;
    let ids = document
        .select(&selector)
        .filter_map(|e| e.value().attr("href"))
        .filter_map(|href| {
            let path = href.split(['?', '#']).next().unwrap_or_default();
            path.split('/')
                .rfind(|segment| !segment.is_empty())
                .map(str::to_string)
        })
        .unique()
        .collect_vec();
    debug!(count = ids.len(), "parsed match ids from list page");
    Ok(ids)
}
