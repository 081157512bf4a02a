//! Task API Wrappers
//!
//! Frontend bindings to the remote task API, organized by domain.

mod tasks;

use thiserror::Error;

pub use tasks::*;

/// Default server address when no override is compiled in.
const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Base URL of the task API.
///
/// Overridable at build time through the `TASKMASTER_API_BASE` environment
/// variable.
pub fn api_base() -> &'static str {
    option_env!("TASKMASTER_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

/// Transport, HTTP-status, or decode failure from the task API.
///
/// The UI does not distinguish subkinds; every failure surfaces as a generic
/// banner message keyed to the operation that failed.
#[derive(Debug, Error)]
#[error("task API request failed: {0}")]
pub struct ApiError(#[from] reqwest::Error);

pub(crate) fn client() -> reqwest::Client {
    reqwest::Client::new()
}
