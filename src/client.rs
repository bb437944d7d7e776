use std::time::Duration;

use reqwest::header;
use tokio::time::sleep;

use crate::{
    countries,
    wire::{parse_response, AddressRequest},
    AddrGenError, AddressRecord, ClientOptions, Result,
};

/// Production endpoint of the address API.
pub const API_URL: &str = "https://www.meiguodizhi.com/api/v1/dz";

/// Fixed User-Agent sent with every request.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// HTTP client for the address generation endpoint.
#[derive(Clone, Debug)]
pub struct AddressClient {
    http: reqwest::Client,
    api_url: String,
    options: ClientOptions,
}

impl Default for AddressClient {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressClient {
    /// Creates a client against the production endpoint.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: API_URL.to_owned(),
            options: ClientOptions::default(),
        }
    }

    /// Points the client at a different endpoint URL.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Applies client options such as timeout and retry behavior.
    pub fn with_options(mut self, opts: ClientOptions) -> Self {
        self.options = opts;
        self
    }

    /// Fetches one validated address record for the given country code.
    ///
    /// Unknown codes fail with [`AddrGenError::UnknownCountry`] before any
    /// network activity. Transport failures and non-200 statuses are retried
    /// up to `max_attempts` total tries with a fixed sleep between them. A
    /// 200 response with a malformed or unexpected body fails the fetch on
    /// that attempt without consuming further retries.
    pub async fn fetch(&self, code: &str) -> Result<AddressRecord> {
        let country = countries::lookup(code)
            .ok_or_else(|| AddrGenError::UnknownCountry(code.to_owned()))?;
        let payload = AddressRequest::for_path(country.path);
        let max_attempts = self.options.max_attempts.max(1);

        let mut attempt = 1u32;
        loop {
            let response = self
                .http
                .post(&self.api_url)
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::USER_AGENT, USER_AGENT)
                .timeout(Duration::from_millis(self.options.timeout_ms))
                .json(&payload)
                .send()
                .await;

            match response {
                Ok(response) => {
                    let status = response.status();
                    let body = response.text().await.map_err(AddrGenError::Transport)?;

                    if !status.is_success() {
                        tracing::warn!(
                            status = status.as_u16(),
                            attempt,
                            max_attempts,
                            "non-success status from address API"
                        );
                        if attempt < max_attempts {
                            self.wait_before_retry().await;
                            attempt += 1;
                            continue;
                        }
                        return Err(AddrGenError::Http {
                            status: status.as_u16(),
                            body,
                        });
                    }

                    // Body-level failures are terminal on the first bad
                    // response, unlike transport failures.
                    return parse_response(&body);
                }
                Err(err) => {
                    if is_retryable_transport(&err) {
                        tracing::warn!(
                            error = %err,
                            attempt,
                            max_attempts,
                            "transport failure contacting address API"
                        );
                        if attempt < max_attempts {
                            self.wait_before_retry().await;
                            attempt += 1;
                            continue;
                        }
                    }
                    return Err(AddrGenError::Transport(err));
                }
            }
        }
    }

    async fn wait_before_retry(&self) {
        tracing::debug!(
            delay_ms = self.options.retry_delay_ms,
            "retrying address request"
        );
        sleep(Duration::from_millis(self.options.retry_delay_ms)).await;
    }
}

/// Timeouts and connection failures retry; anything else fails outright.
fn is_retryable_transport(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect()
}

#[cfg(test)]
mod tests {
    use super::{AddressClient, API_URL};
    use crate::{AddrGenError, ClientOptions};

    #[test]
    fn defaults_target_production_endpoint() {
        let client = AddressClient::new();
        assert!(format!("{client:?}").contains(API_URL));
    }

    #[test]
    fn builder_overrides_url_and_options() {
        let client = AddressClient::new()
            .with_api_url("http://127.0.0.1:1/api")
            .with_options(ClientOptions {
                timeout_ms: 50,
                max_attempts: 1,
                retry_delay_ms: 0,
            });
        let debug = format!("{client:?}");
        assert!(debug.contains("http://127.0.0.1:1/api"));
        assert!(debug.contains("max_attempts: 1"));
    }

    #[tokio::test]
    async fn unknown_country_fails_without_network() {
        // An unroutable URL would surface as a transport error if the
        // lookup guard ever let the request through.
        let client = AddressClient::new().with_api_url("http://127.0.0.1:1/api");
        let err = client.fetch("zz").await.expect_err("must fail");
        match err {
            AddrGenError::UnknownCountry(code) => assert_eq!(code, "zz"),
            other => panic!("expected unknown country error, got {other:?}"),
        }
    }
}
