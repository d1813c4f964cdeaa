//! Pacing and re-chunking for LLM token streams.
//!
//! `dripfeed` sits between an OpenAI-style server-sent-event response body
//! and a renderer. It frames the raw bytes into events, normalizes each
//! event into a [`TextStreamUpdate`](types::TextStreamUpdate), and smooths
//! bursty delivery with an adaptive inter-update delay so downstream
//! consumers see steady progress instead of stutter.
//!
//! The crate never owns the transport. Callers hand in any byte stream
//! (an HTTP client's `bytes_stream()` is typical) and get back a stream of
//! plain update records in which errors, citations, usage accounting, and
//! completion are all data rather than stream failures.
//!
//! Optionally, large text deltas can be split into one-to-three character
//! chunks emitted at a trickle, for renderers that look better fed slowly.
//!
//! # Quick Start
//!
//! ```
//! use dripfeed::prelude::*;
//! use futures::StreamExt;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let body = futures::stream::iter([
//!     Ok::<_, std::convert::Infallible>(
//!         &b"data: {\"choices\":[{\"delta\":{\"content\":\"Hello\"}}]}\n\n"[..],
//!     ),
//!     Ok(&b"data: [DONE]\n\n"[..]),
//! ]);
//!
//! let mut updates = openai_text_stream(body, StreamOptions::default());
//! while let Some(update) = updates.next().await {
//!     if update.done {
//!         break;
//!     }
//!     print!("{}", update.value);
//! }
//! # }
//! ```

pub mod chunking;
pub mod collect;
pub mod error;
pub mod pacing;
pub mod pipeline;
pub mod prelude;
pub mod types;
pub mod updates;
pub mod visibility;

pub use collect::{collect_text, StreamTextResult};
pub use error::{DripfeedError, Result};
pub use pipeline::{openai_text_stream, StreamOptions};
pub use types::{ResponseUsage, TextStreamUpdate};
