use std::time::Duration;

use reqwest::Client as HttpClient;
use tokio::time::sleep;

use crate::config::RenConfig;
use crate::error::FetchError;
use crate::model::{Dataset, RawRecord};

/// Locale sent with every request. The category codes in the responses are
/// tied to it.
const CULTURE: &str = "pt-PT";

pub struct Client {
    http_client: HttpClient,
    config: RenConfig,
}

impl Client {
    pub fn new(config: RenConfig) -> Self {
        let http_client = HttpClient::new();
        Self {
            http_client,
            config,
        }
    }

    /// Fetches the raw records for one (dataset, year, month).
    ///
    /// Transport failures and non-success statuses are logged and yield an
    /// empty batch so the month is skipped and the run keeps going. The one
    /// fetch error that propagates is a success response whose body is not
    /// the expected JSON array.
    pub async fn fetch_month(
        &self,
        dataset: Dataset,
        year: i32,
        month: u32,
    ) -> Result<Vec<RawRecord>, FetchError> {
        let url = format!(
            "{}{}",
            self.config.base_url,
            month_query_path(dataset, year, month)
        );

        let response = match self.send_with_retry(&url, year, month).await {
            Some(response) => response,
            None => return Ok(Vec::new()),
        };

        if !response.status().is_success() {
            tracing::error!(
                "Error fetching data for {}-{:02}: HTTP {}",
                year,
                month,
                response.status().as_u16()
            );
            return Ok(Vec::new());
        }

        tracing::info!("Data fetched successfully for {}-{:02}", year, month);
        response
            .json::<Vec<RawRecord>>()
            .await
            .map_err(|source| FetchError::malformed_payload(year, month, source))
    }

    /// Sends the GET request, retrying transport-level failures with
    /// exponential backoff. Returns None once retries are exhausted. Error
    /// statuses come back as responses and are never retried.
    async fn send_with_retry(&self, url: &str, year: i32, month: u32) -> Option<reqwest::Response> {
        let mut attempt = 0u32;
        loop {
            match self.http_client.get(url).send().await {
                Ok(response) => return Some(response),
                Err(err) if attempt < self.config.fetch_retries => {
                    attempt += 1;
                    let backoff =
                        Duration::from_millis(self.config.retry_backoff_ms << (attempt - 1));
                    tracing::warn!(
                        "Transport error for {}-{:02} (attempt {}): {}; retrying in {:?}",
                        year,
                        month,
                        attempt,
                        err,
                        backoff
                    );
                    sleep(backoff).await;
                }
                Err(err) => {
                    tracing::error!("Error fetching data for {}-{:02}: {}", year, month, err);
                    return None;
                }
            }
        }
    }
}

/// Endpoint path plus query string for one month, relative to the base URL.
/// The month is zero-padded to match the upstream convention.
pub(crate) fn month_query_path(dataset: Dataset, year: i32, month: u32) -> String {
    format!(
        "{}?culture={}&year={}&month={:02}",
        dataset.endpoint_path(),
        CULTURE,
        year,
        month
    )
}
