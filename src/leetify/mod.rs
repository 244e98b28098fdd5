pub(crate) mod matches;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Result, StatsError};

/// Fetch a URL and return the response body as text.
pub(crate) async fn get_text(client: &reqwest::Client, url: &str) -> Result<String> {
    debug!(url, "fetching document");

    let response = client.get(url).send().await.map_err(|e| StatsError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(StatsError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    response.text().await.map_err(|e| StatsError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })
}

/// Fetch a URL and deserialize the response body as JSON.
pub(crate) async fn get_json<T: DeserializeOwned>(client: &reqwest::Client, url: &str) -> Result<T> {
    let body = get_text(client, url).await?;
    parse_json(url, &body)
}

pub(crate) fn parse_json<T: DeserializeOwned>(url: &str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| StatsError::Json {
        url: url.to_owned(),
        source: e,
    })
}
