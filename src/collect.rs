//! Draining an update stream into a final result.

use futures::stream::BoxStream;
use futures::StreamExt;
use serde_json::Value;

use crate::error::{DripfeedError, Result};
use crate::types::{ResponseUsage, TextStreamUpdate};

/// Everything accumulated while draining a text stream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StreamTextResult {
    /// The full concatenated text.
    pub text: String,
    /// Citation payloads observed along the way, in arrival order.
    pub citations: Vec<Value>,
    /// Token accounting from the last update that carried any.
    pub usage: Option<ResponseUsage>,
}

/// Drain a stream of updates into a [`StreamTextResult`].
///
/// Returns [`DripfeedError::Upstream`] when an update carries an error
/// payload and [`DripfeedError::Interrupted`] when the stream ends without
/// a terminal update.
pub async fn collect_text(
    mut stream: BoxStream<'static, TextStreamUpdate>,
) -> Result<StreamTextResult> {
    let mut result = StreamTextResult::default();

    while let Some(update) = stream.next().await {
        if let Some(error) = update.error {
            return Err(DripfeedError::Upstream(error));
        }
        if let Some(citations) = update.citations {
            result.citations.push(citations);
        }
        result.text.push_str(&update.value);
        if let Some(usage) = update.usage {
            result.usage = Some(usage);
        }
        if update.done {
            return Ok(result);
        }
    }

    Err(DripfeedError::Interrupted)
}
