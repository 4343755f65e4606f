//! Remote time fetcher.
//!
//! One HTTP GET per monitored zone against the timezonedb lookup service,
//! performed exactly once at startup. The trait seam keeps the transport
//! swappable without touching display logic. Failures are terminal: they are
//! logged and collapsed to "no value", which the display renders as the
//! error sentinel for the rest of the process lifetime. No retries.

use std::future::Future;

use chrono::NaiveDateTime;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::clock::{parse_formatted, RemoteTimes, ZONE_LISBON, ZONE_NEW_YORK};
use crate::config::Config;

const BASE_URL: &str = "https://api.timezonedb.com/v2.1/get-time-zone";
const USER_AGENT: &str = concat!("floating_clock/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Network-level failure (DNS, connect, TLS, read).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("unexpected status: {0}")]
    Status(StatusCode),

    /// The body was not the expected JSON object.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The `formatted` field did not hold a recognizable timestamp.
    #[error("unparseable timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),
}

/// Looks up the current wall-clock time in a zone.
pub trait TimeFetcher {
    /// Fetches the current time for an IANA zone identifier.
    fn fetch(&self, zone: &str) -> impl Future<Output = Result<NaiveDateTime, FetchError>> + Send;
}

/// Success body of the lookup service. Only `formatted` is consumed.
#[derive(Debug, Deserialize)]
struct ZoneResponse {
    formatted: String,
}

fn decode_body(text: &str) -> Result<NaiveDateTime, FetchError> {
    let body: ZoneResponse = serde_json::from_str(text)?;
    Ok(parse_formatted(&body.formatted)?)
}

/// `TimeFetcher` backed by reqwest, using the client's default timeouts.
pub struct TimezoneDbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl TimezoneDbClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        Self::with_base_url(config, BASE_URL.to_string())
    }

    /// Same client against a different endpoint. Used by tests.
    pub fn with_base_url(config: &Config, base_url: String) -> Result<Self, FetchError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url,
            api_key: config.api_key.clone(),
        })
    }
}

impl TimeFetcher for TimezoneDbClient {
    async fn fetch(&self, zone: &str) -> Result<NaiveDateTime, FetchError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("format", "json"),
                ("by", "zone"),
                ("zone", zone),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        decode_body(&response.text().await?)
    }
}

/// Runs one fetch and collapses any failure to `None`, logging a diagnostic.
/// Nothing propagates past this point.
pub async fn fetch_or_log<F: TimeFetcher>(fetcher: &F, zone: &str) -> Option<NaiveDateTime> {
    match fetcher.fetch(zone).await {
        Ok(time) => Some(time),
        Err(err) => {
            tracing::warn!(zone, error = %err, "failed to fetch remote time");
            None
        }
    }
}

/// The one-shot startup fetch for both monitored zones, in order.
pub async fn fetch_remote_times<F: TimeFetcher>(fetcher: &F) -> RemoteTimes {
    RemoteTimes {
        lisbon: fetch_or_log(fetcher, ZONE_LISBON).await,
        new_york: fetch_or_log(fetcher, ZONE_NEW_YORK).await,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::clock::display_block;

    #[test]
    fn decode_extracts_the_formatted_field() {
        let time = decode_body(r#"{"status":"OK","formatted":"2024-01-01T12:34:56+00:00"}"#)
            .unwrap();
        assert_eq!(time.format("%H:%M:%S").to_string(), "12:34:56");
    }

    #[test]
    fn decode_rejects_missing_field_and_bad_timestamp() {
        assert!(matches!(
            decode_body(r#"{"status":"OK"}"#),
            Err(FetchError::Decode(_))
        ));
        assert!(matches!(
            decode_body(r#"{"formatted":"noon-ish"}"#),
            Err(FetchError::Timestamp(_))
        ));
        assert!(matches!(
            decode_body("<html>teapot</html>"),
            Err(FetchError::Decode(_))
        ));
    }

    struct ServerError;

    impl TimeFetcher for ServerError {
        async fn fetch(&self, _zone: &str) -> Result<NaiveDateTime, FetchError> {
            Err(FetchError::Status(StatusCode::INTERNAL_SERVER_ERROR))
        }
    }

    #[tokio::test]
    async fn server_error_yields_the_error_sentinel() {
        let remote = fetch_remote_times(&ServerError).await;
        assert_eq!(remote.lisbon, None);
        assert_eq!(remote.new_york, None);
        assert_eq!(
            display_block("12:00:00", &remote),
            "Local: 12:00:00\nLisboa: Error\nManhattan: Error"
        );
    }

    #[tokio::test]
    async fn transport_failure_is_caught_locally() {
        // Nothing listens on the discard port; the connection is refused.
        let config = Config {
            api_key: "key".to_string(),
        };
        let client =
            TimezoneDbClient::with_base_url(&config, "http://127.0.0.1:9/get-time-zone".to_string())
                .unwrap();
        assert_eq!(fetch_or_log(&client, ZONE_LISBON).await, None);
    }
}
