//! Conversion of framed SSE events into paced update records.
//!
//! [`update_stream`] is the first pipeline stage: it reads framed events from
//! an already-decoded source, parses each payload, and yields
//! [`TextStreamUpdate`] records, smoothing text-delta emission with a
//! [`Pacer`].

use std::fmt;

use eventsource_stream::Event;
use futures::stream::BoxStream;
use futures::{Stream, StreamExt};
use serde::Deserialize;
use serde_json::Value;
use tracing::{trace, warn};

use crate::pacing::Pacer;
use crate::types::{ResponseUsage, TextStreamUpdate};

/// Payload prefix signaling intentional stream termination, distinct from
/// transport-level closure.
pub const DONE_SENTINEL: &str = "[DONE]";

/// Convert a stream of framed SSE events into update records.
///
/// The returned stream is lazy, single-pass, and forward-only, and always
/// ends with exactly one terminal update (`done: true`): on source
/// exhaustion, on the [`DONE_SENTINEL`] payload, on an upstream-reported
/// error, or on a source-level failure. Undecodable payloads are logged and
/// skipped; the stream continues. Each text delta is followed by an adaptive
/// delay; citation-only updates are not paced.
pub fn update_stream<S, E>(events: S) -> BoxStream<'static, TextStreamUpdate>
where
    S: Stream<Item = Result<Event, E>> + Send + 'static,
    E: fmt::Display + Send + 'static,
{
    let stream = async_stream::stream! {
        let mut pacer = Pacer::new();
        let mut events = std::pin::pin!(events);

        loop {
            let started = tokio::time::Instant::now();

            let event = match events.next().await {
                Some(Ok(event)) => event,
                Some(Err(err)) => {
                    warn!(error = %err, "event source failed");
                    yield TextStreamUpdate::failed(Value::String(err.to_string()));
                    break;
                }
                None => {
                    yield TextStreamUpdate::finished();
                    break;
                }
            };

            if event.data.is_empty() {
                continue;
            }
            if event.data.starts_with(DONE_SENTINEL) {
                yield TextStreamUpdate::finished();
                break;
            }

            let chunk = match serde_json::from_str::<CompletionChunk>(&event.data) {
                Ok(chunk) => chunk,
                Err(err) => {
                    warn!(error = %err, "skipping undecodable event payload");
                    continue;
                }
            };

            if let Some(error) = chunk.error {
                yield TextStreamUpdate::failed(error);
                break;
            }

            if let Some(citations) = chunk.citations {
                yield TextStreamUpdate::citations(citations);
                continue;
            }

            let value = chunk
                .choices
                .unwrap_or_default()
                .into_iter()
                .next()
                .and_then(|choice| choice.delta)
                .and_then(|delta| delta.content)
                .unwrap_or_default();
            trace!(bytes = value.len(), "text delta");
            yield TextStreamUpdate::delta(value, chunk.usage);

            pacer.observe(started.elapsed());
            let pause = pacer.next_pause();
            if !pause.is_zero() {
                tokio::time::sleep(pause).await;
            }
        }
    };

    Box::pin(stream)
}

// Wire format of one completion chunk (internal). Absent and explicitly null
// levels of the delta path are equivalent.

#[derive(Deserialize)]
struct CompletionChunk {
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    citations: Option<Value>,
    #[serde(default)]
    choices: Option<Vec<ChunkChoice>>,
    #[serde(default)]
    usage: Option<ResponseUsage>,
}

#[derive(Deserialize)]
struct ChunkChoice {
    #[serde(default)]
    delta: Option<ChunkDelta>,
}

#[derive(Deserialize)]
struct ChunkDelta {
    #[serde(default)]
    content: Option<String>,
}
