//! Core types and trait definitions for meteolog.
//!
//! This crate is deliberately free of HTTP and database dependencies. The
//! provider adapter, the storage backend, the scheduler and the API all depend
//! on it.

// Native `async fn` in traits; the `Send` bounds are spelled out on the trait.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod location;
pub mod sample;
pub mod store;
pub mod trend;

pub use error::{Error, Result};
