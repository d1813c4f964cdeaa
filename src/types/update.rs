//! The normalized update record emitted over the life of one token stream.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::usage::ResponseUsage;

/// One normalized update pulled from a completion stream.
///
/// A stream yields zero or more non-terminal updates followed by exactly one
/// terminal update (`done: true`). An update carrying `error` is always
/// terminal. Citation updates carry the payload alongside an empty `value`.
/// Concatenating `value` across the non-terminal, non-citation updates of a
/// stream reconstructs the full generated text.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TextStreamUpdate {
    /// Terminal marker. No further updates follow once this is true.
    pub done: bool,
    /// Incremental text fragment (possibly empty).
    pub value: String,
    /// Opaque citations payload, when the event carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citations: Option<Value>,
    /// Opaque upstream error payload; only ever set on a terminal update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
    /// Token accounting, when the event carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<ResponseUsage>,
}

impl TextStreamUpdate {
    /// Create a non-terminal text delta.
    pub fn delta(value: impl Into<String>, usage: Option<ResponseUsage>) -> Self {
        Self {
            done: false,
            value: value.into(),
            citations: None,
            error: None,
            usage,
        }
    }

    /// Create a non-terminal citations-only update.
    pub fn citations(citations: Value) -> Self {
        Self {
            citations: Some(citations),
            ..Self::default()
        }
    }

    /// Create the terminal update for normal completion.
    pub fn finished() -> Self {
        Self {
            done: true,
            ..Self::default()
        }
    }

    /// Create a terminal update carrying an upstream error payload.
    pub fn failed(error: Value) -> Self {
        Self {
            done: true,
            error: Some(error),
            ..Self::default()
        }
    }
}
