use crate::prelude::*;
use polyhymnia_core::query::QueryParams;
use polyhymnia_core::words::{normalize_words, RawWord, WordResult};
use std::time::Duration;

/// Default limit for the whole request, connect and read included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Create the HTTP client used for Datamuse requests.
pub fn create_client(timeout: Duration) -> Result<reqwest::Client, Error> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("polyhymnia/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| Error::Request(e.to_string()))
}

/// GET `url` and decode the body as a Datamuse word array.
///
/// Anything other than `200 OK` is an error, as is a body that is not a JSON
/// array of word entries.
pub async fn fetch_words(client: &reqwest::Client, url: &str) -> Result<Vec<RawWord>, Error> {
    let parsed = reqwest::Url::parse(url).map_err(|_| Error::InvalidUrl(url.to_string()))?;

    log::debug!("GET {parsed}");

    let response = client.get(parsed).send().await.map_err(|e| {
        if e.is_builder() {
            Error::Request(e.to_string())
        } else {
            Error::Network(e.to_string())
        }
    })?;

    let status = response.status();
    log::debug!("Datamuse responded with {status}");

    if status != reqwest::StatusCode::OK {
        return Err(Error::UnexpectedStatus(status.as_u16()));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| Error::Body(e.to_string()))?;

    serde_json::from_slice(&body).map_err(|e| Error::Decode(e.to_string()))
}

/// Run a query against `base_url` and return normalized results.
pub async fn query_words(
    client: &reqwest::Client,
    params: &QueryParams,
    base_url: &str,
) -> Result<Vec<WordResult>, Error> {
    let url = params.build_url(base_url);
    let raw = fetch_words(client, &url).await?;

    log::trace!("normalizing {} entries", raw.len());

    Ok(normalize_words(raw, &url))
}
