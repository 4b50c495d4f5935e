//! Provider payload decoding and normalisation.

use bytes::Bytes;
use meteolog_core::sample::Conditions;
use serde::Deserialize;

use crate::{Error, Result};

/// A raw provider response: status code plus undecoded body.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
  pub status: u16,
  pub body:   Bytes,
}

impl ProviderResponse {
  pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
    Self { status, body: body.into() }
  }

  pub fn is_success(&self) -> bool { (200..300).contains(&self.status) }
}

/// A normalised observation: the location identity needed for dimension
/// lookup plus the conditions to store.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
  pub city:             String,
  pub country:          String,
  pub conditions:       Conditions,
  /// The provider's own `last_updated` stamp. Informational only; stored
  /// samples are stamped with capture time.
  pub provider_updated: Option<String>,
}

// ─── Wire shape ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct Payload {
  location: Option<LocationBlock>,
  current:  Option<CurrentBlock>,
}

#[derive(Debug, Deserialize)]
struct LocationBlock {
  name:    String,
  country: String,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
  temp_c:       f64,
  wind_kph:     f64,
  cloud:        i32,
  last_updated: Option<String>,
}

// ─── Normalisation ───────────────────────────────────────────────────────────

/// Turn a raw response into an [`Observation`].
///
/// Checks run in a fixed order and the first failure wins: a non-2xx status
/// yields [`Error::Status`], an undecodable body [`Error::Decode`], and a
/// payload without its `location` or `current` block [`Error::MissingBlock`].
pub fn normalize(response: &ProviderResponse) -> Result<Observation> {
  if !response.is_success() {
    return Err(Error::Status(response.status));
  }

  let payload: Payload = serde_json::from_slice(&response.body)?;

  let location = payload.location.ok_or(Error::MissingBlock("location"))?;
  let current  = payload.current.ok_or(Error::MissingBlock("current"))?;

  Ok(Observation {
    city:             location.name,
    country:          location.country,
    conditions:       Conditions {
      temperature: current.temp_c,
      wind_speed:  current.wind_kph,
      cloud_cover: current.cloud,
    },
    provider_updated: current.last_updated,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  const PARIS: &str = r#"{
    "location": { "name": "Paris", "country": "France", "tz_id": "Europe/Paris" },
    "current":  { "temp_c": 15.5, "wind_kph": 20.1, "cloud": 80,
                  "last_updated": "2024-09-25 12:00", "humidity": 72 }
  }"#;

  fn status_of(result: Result<Observation>) -> u16 {
    meteolog_core::Error::from(result.unwrap_err()).status_code()
  }

  #[test]
  fn normalizes_a_complete_payload() {
    let obs = normalize(&ProviderResponse::new(200, PARIS)).unwrap();
    assert_eq!(obs.city, "Paris");
    assert_eq!(obs.country, "France");
    assert_eq!(obs.conditions, Conditions {
      temperature: 15.5,
      wind_speed:  20.1,
      cloud_cover: 80,
    });
    assert_eq!(obs.provider_updated.as_deref(), Some("2024-09-25 12:00"));
  }

  #[test]
  fn upstream_status_is_passed_through() {
    let r500 = normalize(&ProviderResponse::new(500, ""));
    assert!(matches!(r500, Err(Error::Status(500))));
    assert_eq!(status_of(r500), 500);

    let r503 = normalize(&ProviderResponse::new(503, "Service Unavailable"));
    assert_eq!(status_of(r503), 503);
  }

  #[test]
  fn status_is_checked_before_the_body() {
    // A valid body does not rescue a failed status.
    let result = normalize(&ProviderResponse::new(429, PARIS));
    assert!(matches!(result, Err(Error::Status(429))));
  }

  #[test]
  fn non_json_body_is_a_validation_error() {
    let result = normalize(&ProviderResponse::new(200, "invalid json"));
    assert!(matches!(result, Err(Error::Decode(_))));
    assert_eq!(status_of(result), 500);
  }

  #[test]
  fn wrongly_typed_fields_fail_to_decode() {
    let body = r#"{"location":{"name":"Paris","country":"France"},
                   "current":{"temp_c":"warm","wind_kph":20.1,"cloud":80}}"#;
    let result = normalize(&ProviderResponse::new(200, body));
    assert!(matches!(result, Err(Error::Decode(_))));
  }

  #[test]
  fn missing_location_block_is_a_validation_error() {
    let body = r#"{"current":{"temp_c":15.5,"wind_kph":20.1,"cloud":80}}"#;
    let result = normalize(&ProviderResponse::new(200, body));
    assert!(matches!(result, Err(Error::MissingBlock("location"))));
    assert_eq!(status_of(result), 500);
  }

  #[test]
  fn missing_current_block_is_a_validation_error() {
    let body = r#"{"location":{"name":"Paris","country":"France"},"current":null}"#;
    let result = normalize(&ProviderResponse::new(200, body));
    assert!(matches!(result, Err(Error::MissingBlock("current"))));
    assert_eq!(status_of(result), 500);
  }

  #[test]
  fn empty_object_reports_location_first() {
    let result = normalize(&ProviderResponse::new(200, "{}"));
    assert!(matches!(result, Err(Error::MissingBlock("location"))));
  }
}
