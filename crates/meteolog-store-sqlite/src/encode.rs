//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 UTC strings with a fixed microsecond
//! precision and a `Z` suffix, so lexical order in SQL matches time order.
//! UUIDs are stored as hyphenated lowercase strings.

use chrono::{DateTime, SecondsFormat, Utc};
use meteolog_core::{
  location::{City, Country},
  sample::WeatherRecord,
};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Raw rows ─────────────────────────────────────────────────────────────────

/// A `countries` row as read from SQLite.
pub struct RawCountry {
  pub country_id: String,
  pub name:       String,
}

impl RawCountry {
  pub fn into_country(self) -> Result<Country> {
    Ok(Country {
      country_id: decode_uuid(&self.country_id)?,
      name:       self.name,
    })
  }
}

/// A `cities` row as read from SQLite.
pub struct RawCity {
  pub city_id:    String,
  pub name:       String,
  pub country_id: String,
}

impl RawCity {
  pub fn into_city(self) -> Result<City> {
    Ok(City {
      city_id:    decode_uuid(&self.city_id)?,
      name:       self.name,
      country_id: decode_uuid(&self.country_id)?,
    })
  }
}

/// A sample joined to its city and country names.
pub struct RawRecord {
  pub city:        String,
  pub country:     String,
  pub temperature: f64,
  pub wind_speed:  f64,
  pub cloud_cover: i32,
  pub observed_at: String,
}

impl RawRecord {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      city:        row.get(0)?,
      country:     row.get(1)?,
      temperature: row.get(2)?,
      wind_speed:  row.get(3)?,
      cloud_cover: row.get(4)?,
      observed_at: row.get(5)?,
    })
  }

  pub fn into_record(self) -> Result<WeatherRecord> {
    Ok(WeatherRecord {
      city:        self.city,
      country:     self.country,
      temperature: self.temperature,
      wind_speed:  self.wind_speed,
      clouds:      self.cloud_cover,
      last_update: decode_dt(&self.observed_at)?,
    })
  }
}
