//! The polling loop.

use std::time::Duration;

use meteolog_core::{Result, sample::Sample, store::WeatherStore};
use meteolog_provider::WeatherProvider;
use tokio_util::sync::CancellationToken;

use crate::Ingestor;

/// Pause between the end of one cycle and the start of the next.
pub const POLL_INTERVAL: Duration = Duration::from_secs(601);

/// The outcome of ingesting one location.
#[derive(Debug)]
pub struct LocationOutcome {
  pub location: String,
  pub result:   Result<Sample>,
}

/// Per-location outcomes of one cycle, in processing order.
#[derive(Debug, Default)]
pub struct CycleReport {
  pub outcomes: Vec<LocationOutcome>,
}

impl CycleReport {
  pub fn succeeded(&self) -> usize {
    self.outcomes.iter().filter(|o| o.result.is_ok()).count()
  }

  pub fn failed(&self) -> usize { self.outcomes.len() - self.succeeded() }
}

/// Polls every tracked location once per cycle, sequentially and in order.
///
/// A failing location is logged and skipped; it never aborts the cycle or the
/// loop. There are no retries: a failed location waits for the next cycle.
pub struct Scheduler<P, S> {
  ingestor:  Ingestor<P, S>,
  locations: Vec<String>,
}

impl<P, S> Scheduler<P, S>
where
  P: WeatherProvider,
  S: WeatherStore,
{
  pub fn new(ingestor: Ingestor<P, S>, locations: Vec<String>) -> Self {
    Self { ingestor, locations }
  }

  pub fn locations(&self) -> &[String] { &self.locations }

  /// Run one full cycle over every tracked location.
  pub async fn run_cycle(&self) -> CycleReport {
    self.cycle(&CancellationToken::new()).await
  }

  /// Run cycles until `token` is cancelled.
  ///
  /// Cancellation is observed before each location and during the sleep
  /// between cycles; an in-flight fetch or write is allowed to finish.
  pub async fn run(self, token: CancellationToken) {
    tracing::info!(
      locations = self.locations.len(),
      interval_secs = POLL_INTERVAL.as_secs(),
      "scheduler started"
    );

    while !token.is_cancelled() {
      let report = self.cycle(&token).await;
      tracing::info!(
        succeeded = report.succeeded(),
        failed = report.failed(),
        "ingestion cycle complete"
      );

      tokio::select! {
        _ = token.cancelled() => break,
        _ = tokio::time::sleep(POLL_INTERVAL) => {}
      }
    }

    tracing::info!("scheduler stopped");
  }

  async fn cycle(&self, token: &CancellationToken) -> CycleReport {
    let mut report = CycleReport::default();

    for location in &self.locations {
      if token.is_cancelled() {
        break;
      }

      tracing::info!(location = %location, "fetching weather data");
      let result = self.ingestor.ingest(location).await;

      match &result {
        Ok(sample) => tracing::debug!(
          location = %location,
          sample_id = %sample.sample_id,
          "sample stored"
        ),
        Err(e) => tracing::error!(
          location = %location,
          status = e.status_code(),
          error = %e,
          "failed to ingest weather data"
        ),
      }

      report.outcomes.push(LocationOutcome { location: location.clone(), result });
    }

    report
  }
}
