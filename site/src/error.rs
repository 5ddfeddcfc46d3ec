//! Error types for the site crate.
//!
//! Surface errors never reach the rendered page: every caller degrades to a
//! default value or a no-op and logs the condition. Content errors are
//! returned to whoever hands us the CMS payload.

use thiserror::Error;

/// Failure talking to the display surface (window/document).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// No display surface is present (pre-render, server, tests).
    #[error("display surface unavailable")]
    EnvironmentUnavailable,
    /// The host rejected a call (e.g. `addEventListener` threw).
    #[error("display surface call failed: {0}")]
    Host(String),
}

/// Failure decoding header content supplied by the CMS.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Payload is not valid JSON or does not match the expected envelope.
    #[error("invalid content payload: {0}")]
    Json(#[from] serde_json::Error),
    /// Envelope parsed but a required attribute is absent.
    #[error("content payload is missing `{0}`")]
    MissingField(&'static str),
}
