//! HTTP client for the catalog's GraphQL endpoint.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;

use super::FetchError;
use super::graphql::{decode_records, decode_types, records_request_body, types_request_body};
use crate::state::{FetchParams, RawRecord, TypeRef};
use crate::theme::Settings;

/// Longest response body excerpt kept in [`FetchError::Status`].
const STATUS_BODY_EXCERPT: usize = 200;

/// Explicitly constructed gateway to the remote catalog.
///
/// Cheap to clone: the inner `reqwest::Client` pools connections and is
/// reference counted.
#[derive(Clone, Debug)]
pub struct CatalogClient {
    http: reqwest::Client,
    endpoint: String,
    language_id: i64,
    moves_limit: u32,
}

impl CatalogClient {
    /// What: Build a client from settings.
    ///
    /// Inputs:
    /// - `settings`: endpoint, timeouts, description language and moves limit
    ///
    /// Output:
    /// - `Ok(client)`; `Err` when the HTTP client cannot be built (TLS backend failure).
    ///
    /// # Errors
    /// - `FetchError::Transport` when `reqwest` fails to initialize
    pub fn from_settings(settings: &Settings) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .user_agent(format!("Pokedex/{}", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;
        Ok(Self {
            http,
            endpoint: settings.endpoint.clone(),
            language_id: settings.description_language_id,
            moves_limit: settings.moves_limit,
        })
    }

    /// Endpoint this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST a GraphQL body and return the response text of a 2xx answer.
    async fn post(&self, body: &Value) -> Result<String, FetchError> {
        let resp = self.http.post(&self.endpoint).json(body).send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: text.chars().take(STATUS_BODY_EXCERPT).collect(),
            });
        }
        Ok(text)
    }

    /// What: Run the records query for one page.
    ///
    /// Inputs:
    /// - `params`: order, paging window, name pattern and stat range
    ///
    /// Output:
    /// - Matching records (at most `params.limit`) ordered by name.
    ///
    /// # Errors
    /// - Any [`FetchError`]: transport, HTTP status, decode or GraphQL errors
    pub async fn fetch_records(&self, params: &FetchParams) -> Result<Vec<RawRecord>, FetchError> {
        let body = records_request_body(params, self.language_id, self.moves_limit);
        let text = self.post(&body).await?;
        let records = decode_records(&text)?;
        tracing::debug!(
            count = records.len(),
            offset = params.offset,
            limit = params.limit,
            "records fetched"
        );
        Ok(records)
    }

    /// What: Run the records query, treating every failure as "no results".
    ///
    /// Inputs:
    /// - `params`: query parameters
    ///
    /// Output:
    /// - Records on success; an empty list on failure (the failure is logged).
    ///
    /// Details:
    /// - Callers cannot tell an empty page from a failed request. Prefer
    ///   [`CatalogClient::fetch_records`] where the difference matters.
    pub async fn fetch_records_or_empty(&self, params: &FetchParams) -> Vec<RawRecord> {
        match self.fetch_records(params).await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(error = %e, endpoint = %self.endpoint, "records query failed");
                Vec::new()
            }
        }
    }

    /// What: Fetch every type descriptor, independent of paging.
    ///
    /// Output:
    /// - `{id, name}` pairs ordered by id.
    ///
    /// # Errors
    /// - Any [`FetchError`]
    pub async fn fetch_all_types(&self) -> Result<Vec<TypeRef>, FetchError> {
        let text = self.post(&types_request_body()).await?;
        let types = decode_types(&text)?;
        tracing::debug!(count = types.len(), "types fetched");
        Ok(types)
    }
}
