//! Weather provider adapter for meteolog.
//!
//! Fetches current conditions for a location over HTTP and normalises the raw
//! response into an [`Observation`]. Normalisation is pure and synchronous,
//! so it can be exercised without a network.
//!
//! # Quick start
//!
//! ```no_run
//! use meteolog_provider::{ProviderResponse, normalize};
//!
//! let body = r#"{"location":{"name":"Paris","country":"France"},
//!   "current":{"temp_c":15.5,"wind_kph":20.1,"cloud":80}}"#;
//! let obs = normalize(&ProviderResponse::new(200, body)).unwrap();
//! println!("{} / {}: {}°C", obs.city, obs.country, obs.conditions.temperature);
//! ```

mod client;
pub mod error;
mod payload;

pub use client::{ProviderConfig, WeatherApiClient, WeatherProvider};
pub use error::{Error, Result};
pub use payload::{Observation, ProviderResponse, normalize};
