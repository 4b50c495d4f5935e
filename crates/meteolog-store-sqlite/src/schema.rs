//! SQL schema for the meteolog SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE ... IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS countries (
    country_id  TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    UNIQUE (name)
);

CREATE TABLE IF NOT EXISTS cities (
    city_id     TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    country_id  TEXT NOT NULL REFERENCES countries(country_id),
    UNIQUE (name, country_id)
);

-- Samples are strictly append-only.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS samples (
    sample_id   TEXT PRIMARY KEY,
    city_id     TEXT NOT NULL REFERENCES cities(city_id),
    temperature REAL NOT NULL,     -- degrees Celsius
    wind_speed  REAL NOT NULL,     -- km/h
    cloud_cover INTEGER NOT NULL,  -- percent
    observed_at TEXT NOT NULL      -- fixed-width RFC 3339 UTC; store-assigned
);

CREATE INDEX IF NOT EXISTS samples_city_observed_idx ON samples(city_id, observed_at);
CREATE INDEX IF NOT EXISTS cities_name_idx           ON cities(name);

PRAGMA user_version = 1;
";
