//! Error types for dripfeed.
//!
//! In normal operation neither stream stage yields an `Err`: parse failures
//! are skipped and upstream failures arrive as data in a terminal
//! [`TextStreamUpdate`](crate::types::TextStreamUpdate). These errors exist
//! for the APIs that fold a whole stream back into a `Result`, such as
//! [`collect_text`](crate::collect::collect_text).

use thiserror::Error;

/// Primary error type for dripfeed operations.
#[derive(Error, Debug)]
pub enum DripfeedError {
    /// The terminal update carried an upstream error payload.
    #[error("upstream error: {0}")]
    Upstream(serde_json::Value),

    /// The update stream ended without a terminal update.
    #[error("stream ended without a terminal update")]
    Interrupted,
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, DripfeedError>;
