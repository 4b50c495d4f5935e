//! Error type for `meteolog-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),
}

impl From<Error> for meteolog_core::Error {
  fn from(err: Error) -> Self { meteolog_core::Error::persistence(err) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
