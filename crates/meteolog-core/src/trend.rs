//! Trend windows over the sample log.

use chrono::{DateTime, TimeDelta, Utc};

use crate::{sample::WeatherRecord, store::WeatherStore};

/// Window used when the caller does not ask for one.
pub const DEFAULT_TREND_HOURS: i64 = 2;

/// The range `[now - hours, now]` a trend query covers.
///
/// A negative length gives a window that starts in the future and so holds
/// no samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendWindow {
  hours: i64,
}

impl TrendWindow {
  pub fn hours(hours: i64) -> Self { Self { hours } }

  pub fn is_empty(&self) -> bool { self.hours < 0 }

  /// The oldest `observed_at` still inside the window.
  ///
  /// Saturates at the edges of the representable range instead of
  /// overflowing.
  pub fn threshold(&self, now: DateTime<Utc>) -> DateTime<Utc> {
    TimeDelta::try_hours(self.hours)
      .and_then(|delta| now.checked_sub_signed(delta))
      .unwrap_or(if self.is_empty() {
        DateTime::<Utc>::MAX_UTC
      } else {
        DateTime::<Utc>::MIN_UTC
      })
  }
}

impl Default for TrendWindow {
  fn default() -> Self { Self::hours(DEFAULT_TREND_HOURS) }
}

/// Samples for `city` inside `window`, measured back from now.
pub async fn trend_for<S: WeatherStore>(
  store: &S,
  city: &str,
  window: TrendWindow,
) -> Result<Vec<WeatherRecord>, S::Error> {
  if window.is_empty() {
    return Ok(Vec::new());
  }
  store.trend(city, window.threshold(Utc::now())).await
}
