//! REST API client module for the Alpine Club service.
//!
//! This module provides the `ApiClient` for talking to the mountains,
//! groups, climbers and ascents endpoints. Requests are unauthenticated and
//! never retried; response bodies are parsed leniently into a `Payload`.

pub mod client;
pub mod error;
pub mod payload;

pub use client::ApiClient;
pub use error::ApiError;
pub use payload::Payload;
