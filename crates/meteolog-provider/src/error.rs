//! Error types for the provider adapter.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("provider responded with status {0}")]
  Status(u16),

  #[error("failed to decode provider payload: {0}")]
  Decode(#[from] serde_json::Error),

  #[error("provider payload is missing the `{0}` block")]
  MissingBlock(&'static str),

  #[error("request failed: {0}")]
  Request(#[from] reqwest::Error),
}

impl From<Error> for meteolog_core::Error {
  fn from(err: Error) -> Self {
    use meteolog_core::Error as Core;
    match &err {
      Error::Status(status) => Core::Upstream { status: *status },
      Error::Decode(_) | Error::MissingBlock(_) => Core::Validation(err.to_string()),
      Error::Request(_) => Core::Transport(err.to_string()),
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
