//! HTTP client for the upstream weather API.

use std::{fmt, future::Future, time::Duration};

use reqwest::Client;
use serde::Deserialize;

use crate::{ProviderResponse, Result};

const API_KEY_HEADER: &str = "X-RapidAPI-Key";
const API_HOST_HEADER: &str = "X-RapidAPI-Host";

fn default_timeout_secs() -> u64 { 30 }

/// Connection settings for the weather provider.
#[derive(Clone, Deserialize)]
pub struct ProviderConfig {
  /// Endpoint queried with `?q=<location>`.
  pub base_uri:     String,
  pub api_key:      String,
  /// Value sent in the host identifier header.
  pub host:         String,
  #[serde(default = "default_timeout_secs")]
  pub timeout_secs: u64,
}

impl fmt::Debug for ProviderConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ProviderConfig")
      .field("base_uri", &self.base_uri)
      .field("api_key", &"<redacted>")
      .field("host", &self.host)
      .field("timeout_secs", &self.timeout_secs)
      .finish()
  }
}

/// Source of raw current-conditions responses, one location at a time.
pub trait WeatherProvider: Send + Sync {
  /// Fetch current conditions for `location`. Any HTTP response, success or
  /// not, is returned as a [`ProviderResponse`]; only transport failures are
  /// errors here.
  fn fetch<'a>(
    &'a self,
    location: &'a str,
  ) -> impl Future<Output = Result<ProviderResponse>> + Send + 'a;
}

/// [`WeatherProvider`] backed by the RapidAPI-hosted weather API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone, Debug)]
pub struct WeatherApiClient {
  client: Client,
  config: ProviderConfig,
}

impl WeatherApiClient {
  pub fn new(config: ProviderConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .build()?;
    Ok(Self { client, config })
  }
}

impl WeatherProvider for WeatherApiClient {
  async fn fetch(&self, location: &str) -> Result<ProviderResponse> {
    let resp = self
      .client
      .get(&self.config.base_uri)
      .query(&[("q", location)])
      .header(API_KEY_HEADER, &self.config.api_key)
      .header(API_HOST_HEADER, &self.config.host)
      .send()
      .await?;

    let status = resp.status().as_u16();
    if !resp.status().is_success() {
      tracing::warn!(location, status, "provider returned an error status");
    }
    let body = resp.bytes().await?;

    Ok(ProviderResponse { status, body })
  }
}
