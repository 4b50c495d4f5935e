//! The ingestion path for a single tracked location.

use std::sync::Arc;

use meteolog_core::{Error, Result, sample::Sample, store::WeatherStore};
use meteolog_provider::{WeatherProvider, normalize};

/// Fetches, normalises and persists one location at a time.
pub struct Ingestor<P, S> {
  provider: P,
  store:    Arc<S>,
}

impl<P, S> Ingestor<P, S>
where
  P: WeatherProvider,
  S: WeatherStore,
{
  pub fn new(provider: P, store: Arc<S>) -> Self { Self { provider, store } }

  /// Run the full path for `location` and return the stored sample.
  ///
  /// Every failure, whatever stage it comes from, is reported as the
  /// service-level [`Error`] so the caller can handle them uniformly.
  pub async fn ingest(&self, location: &str) -> Result<Sample> {
    let response    = self.provider.fetch(location).await?;
    let observation = normalize(&response)?;

    if let Some(updated) = &observation.provider_updated {
      tracing::debug!(location, provider_updated = %updated, "provider data received");
    }

    let resolved = self
      .store
      .resolve_location(&observation.city, &observation.country)
      .await
      .map_err(Error::persistence)?;

    let sample = self
      .store
      .append_sample(resolved.city_id, observation.conditions)
      .await
      .map_err(Error::persistence)?;

    Ok(sample)
  }
}
