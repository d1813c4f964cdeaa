//! Assembly of the full stream pipeline.
//!
//! Frames transport bytes into events, transduces them into paced updates,
//! and optionally re-chunks large deltas. The transport itself stays with
//! the caller; this module starts from the raw response body bytes.

use std::fmt;
use std::sync::Arc;

use bon::Builder;
use eventsource_stream::Eventsource;
use futures::stream::BoxStream;
use futures::Stream;

use crate::chunking::split_large_deltas;
use crate::types::TextStreamUpdate;
use crate::updates::update_stream;
use crate::visibility::{AlwaysVisible, Visibility};

/// Settings controlling one text stream.
#[derive(Clone, Builder)]
pub struct StreamOptions {
    /// Split large text deltas into small randomized chunks.
    #[builder(default)]
    pub split_large_deltas: bool,
    /// Visibility of the consuming context; hidden contexts skip the pauses
    /// between chunks.
    #[builder(default = Arc::new(AlwaysVisible))]
    pub visibility: Arc<dyn Visibility>,
}

impl Default for StreamOptions {
    fn default() -> Self {
        Self {
            split_large_deltas: false,
            visibility: Arc::new(AlwaysVisible),
        }
    }
}

impl fmt::Debug for StreamOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamOptions")
            .field("split_large_deltas", &self.split_large_deltas)
            .field("visibility", &"..")
            .finish()
    }
}

/// Build the update stream for an OpenAI-style SSE response body.
///
/// `body` is the byte stream of an already-established response (an HTTP
/// client's `bytes_stream()` is typical). It is decoded into framed events
/// and transduced into paced [`TextStreamUpdate`] records. When
/// [`split_large_deltas`](StreamOptions::split_large_deltas) is set, large
/// deltas are additionally re-chunked so they arrive gradually. The returned
/// stream ends with exactly one terminal update.
pub fn openai_text_stream<B, C, E>(
    body: B,
    options: StreamOptions,
) -> BoxStream<'static, TextStreamUpdate>
where
    B: Stream<Item = Result<C, E>> + Send + 'static,
    C: AsRef<[u8]> + Send + 'static,
    E: fmt::Display + Send + 'static,
{
    let updates = update_stream(body.eventsource());
    if options.split_large_deltas {
        split_large_deltas(updates, options.visibility)
    } else {
        updates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_to_pass_through() {
        let options = StreamOptions::default();
        assert!(!options.split_large_deltas);
        assert!(!options.visibility.is_hidden());
    }

    #[test]
    fn options_builder_fills_defaults() {
        let options = StreamOptions::builder().split_large_deltas(true).build();
        assert!(options.split_large_deltas);
        assert!(!options.visibility.is_hidden());
    }
}
