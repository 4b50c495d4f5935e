//! The service-level error shared by every ingestion stage.

use thiserror::Error;

/// Status reported for failures that have no upstream status of their own.
pub const INTERNAL_STATUS: u16 = 500;

/// A failure while ingesting one location.
///
/// Each variant carries (or implies) the status code reported to the caller;
/// see [`Error::status_code`].
#[derive(Debug, Error)]
pub enum Error {
  /// The provider payload could not be decoded or is missing a required block.
  #[error("invalid provider payload: {0}")]
  Validation(String),

  /// The provider answered with a non-success status.
  #[error("provider responded with status {status}")]
  Upstream { status: u16 },

  /// The request to the provider never produced a response.
  #[error("provider request failed: {0}")]
  Transport(String),

  /// Writing or reading dimension or sample rows failed.
  #[error("persistence error: {0}")]
  Persistence(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap any storage backend error.
  pub fn persistence<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Persistence(Box::new(err))
  }

  /// The status code this error is reported with. Upstream failures pass the
  /// provider's own status through; everything else is a 500.
  pub fn status_code(&self) -> u16 {
    match self {
      Self::Upstream { status } => *status,
      Self::Validation(_) | Self::Transport(_) | Self::Persistence(_) => {
        INTERNAL_STATUS
      }
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
