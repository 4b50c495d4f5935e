//! Ingestion for meteolog: the per-location fetch → normalise → persist
//! pipeline, and the scheduler that drives it on a fixed cadence.

mod pipeline;
mod scheduler;

pub use pipeline::Ingestor;
pub use scheduler::{CycleReport, LocationOutcome, POLL_INTERVAL, Scheduler};
