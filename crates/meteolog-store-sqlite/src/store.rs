//! [`SqliteStore`] — the SQLite implementation of [`WeatherStore`].

use std::path::Path;

use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

use meteolog_core::{
  location::{City, Country, ResolvedLocation},
  sample::{Conditions, Sample, WeatherRecord},
  store::WeatherStore,
};

use crate::{
  Result,
  encode::{RawCity, RawCountry, RawRecord, decode_uuid, encode_dt, encode_uuid},
  schema::SCHEMA,
};

const RECORD_COLUMNS: &str = "
  ci.name, co.name, s.temperature, s.wind_speed, s.cloud_cover, s.observed_at
  FROM samples s
  JOIN cities    ci ON ci.city_id    = s.city_id
  JOIN countries co ON co.country_id = ci.country_id";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A meteolog store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Insert a fully-built [`Sample`] into the `samples` table.
  pub(crate) async fn insert_sample(&self, sample: &Sample) -> Result<()> {
    let sample_id_str   = encode_uuid(sample.sample_id);
    let city_id_str     = encode_uuid(sample.city_id);
    let observed_at_str = encode_dt(sample.observed_at);
    let Conditions { temperature, wind_speed, cloud_cover } = sample.conditions;

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO samples (
             sample_id, city_id, temperature, wind_speed, cloud_cover, observed_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            sample_id_str,
            city_id_str,
            temperature,
            wind_speed,
            cloud_cover,
            observed_at_str,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn query_records(
    &self,
    sql: String,
    params: Vec<String>,
  ) -> Result<Vec<WeatherRecord>> {
    let raws: Vec<RawRecord> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(params.iter()), RawRecord::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawRecord::into_record).collect()
  }
}

// ─── WeatherStore impl ───────────────────────────────────────────────────────

impl WeatherStore for SqliteStore {
  type Error = crate::Error;

  // ── Dimensions ────────────────────────────────────────────────────────────

  async fn resolve_location(
    &self,
    city: &str,
    country: &str,
  ) -> Result<ResolvedLocation> {
    let city_name       = city.to_owned();
    let country_name    = country.to_owned();
    let new_country_str = encode_uuid(Uuid::new_v4());
    let new_city_str    = encode_uuid(Uuid::new_v4());

    // Insert-or-ignore against the UNIQUE constraints, then re-read, all in
    // one transaction on the single writer connection.
    let (city_id_str, country_id_str, created_country, created_city) = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let created_country = tx.execute(
          "INSERT INTO countries (country_id, name) VALUES (?1, ?2)
           ON CONFLICT (name) DO NOTHING",
          rusqlite::params![new_country_str, country_name],
        )? > 0;
        let country_id: String = tx.query_row(
          "SELECT country_id FROM countries WHERE name = ?1",
          rusqlite::params![country_name],
          |r| r.get(0),
        )?;

        let created_city = tx.execute(
          "INSERT INTO cities (city_id, name, country_id) VALUES (?1, ?2, ?3)
           ON CONFLICT (name, country_id) DO NOTHING",
          rusqlite::params![new_city_str, city_name, country_id],
        )? > 0;
        let city_id: String = tx.query_row(
          "SELECT city_id FROM cities WHERE name = ?1 AND country_id = ?2",
          rusqlite::params![city_name, country_id],
          |r| r.get(0),
        )?;

        tx.commit()?;
        Ok((city_id, country_id, created_country, created_city))
      })
      .await?;

    if created_country {
      tracing::debug!(country, "created country");
    }
    if created_city {
      tracing::debug!(city, country, "created city");
    }

    Ok(ResolvedLocation {
      city_id:    decode_uuid(&city_id_str)?,
      country_id: decode_uuid(&country_id_str)?,
    })
  }

  async fn list_countries(&self) -> Result<Vec<Country>> {
    let raws: Vec<RawCountry> = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare("SELECT country_id, name FROM countries ORDER BY rowid")?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawCountry {
              country_id: row.get(0)?,
              name:       row.get(1)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawCountry::into_country).collect()
  }

  async fn list_cities(&self) -> Result<Vec<City>> {
    let raws: Vec<RawCity> = self
      .conn
      .call(|conn| {
        let mut stmt = conn
          .prepare("SELECT city_id, name, country_id FROM cities ORDER BY rowid")?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawCity {
              city_id:    row.get(0)?,
              name:       row.get(1)?,
              country_id: row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawCity::into_city).collect()
  }

  // ── Samples — append-only writes ──────────────────────────────────────────

  async fn append_sample(
    &self,
    city_id: Uuid,
    conditions: Conditions,
  ) -> Result<Sample> {
    // Stored at microsecond precision; the returned sample matches later reads.
    let sample = Sample {
      sample_id:   Uuid::new_v4(),
      city_id,
      conditions,
      observed_at: Utc::now().trunc_subsecs(6),
    };

    self.insert_sample(&sample).await?;
    Ok(sample)
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn snapshot(&self) -> Result<Vec<WeatherRecord>> {
    self
      .query_records(format!("SELECT {RECORD_COLUMNS} ORDER BY s.rowid"), vec![])
      .await
  }

  async fn trend(
    &self,
    city: &str,
    since: DateTime<Utc>,
  ) -> Result<Vec<WeatherRecord>> {
    self
      .query_records(
        format!(
          "SELECT {RECORD_COLUMNS}
           WHERE ci.name = ?1 AND s.observed_at >= ?2
           ORDER BY s.observed_at, s.rowid"
        ),
        vec![city.to_owned(), encode_dt(since)],
      )
      .await
  }
}
