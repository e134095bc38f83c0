//! Core library for alpinedesk.
//!
//! Provides everything the terminal client needs that is not UI:
//!
//! - `api`: HTTP client wrapper for the Alpine Club REST API
//! - `models`: Lenient record types for mountains, groups, climbers, ascents, stats
//! - `utils`: Display formatting shared by every page
//! - `config`: Base URL, API prefix and timeout configuration

pub mod api;
pub mod config;
pub mod models;
pub mod utils;

pub use api::{ApiClient, ApiError, Payload};
pub use config::Config;
