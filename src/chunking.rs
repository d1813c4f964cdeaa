//! Splitting of large text deltas into small randomized chunks.
//!
//! Some providers deliver large multi-token deltas in a single event.
//! Rendering one of those as a single atomic update looks discontinuous to a
//! human reader, so this stage re-introduces synthetic granularity: fragments
//! of five or more characters are re-emitted as a run of one-to-three
//! character updates with a short pause between them. Total content and
//! total order are preserved.

use std::sync::Arc;
use std::time::Duration;

use futures::stream::BoxStream;
use futures::StreamExt;
use rand::Rng;

use crate::types::TextStreamUpdate;
use crate::visibility::Visibility;

/// Fragments shorter than this pass through unchanged.
const SPLIT_THRESHOLD: usize = 5;
/// Upper bound on the random sub-chunk length, in characters.
const MAX_CHUNK_CHARS: usize = 3;
/// Pause between emitted sub-chunks.
const CHUNK_PAUSE: Duration = Duration::from_millis(10);

/// Re-chunk an update stream so large text deltas arrive gradually.
///
/// Terminal and citation-bearing updates are forwarded unchanged, as are
/// text fragments shorter than five characters. Longer fragments are split
/// into sub-chunks of random length in `[1, 3]` characters, each emitted as
/// its own text-only update. The pause after each sub-chunk is skipped while
/// `visibility` reports the consuming context hidden, where timers are
/// throttled and the pause would only inflate wall-clock latency.
pub fn split_large_deltas(
    updates: BoxStream<'static, TextStreamUpdate>,
    visibility: Arc<dyn Visibility>,
) -> BoxStream<'static, TextStreamUpdate> {
    let stream = async_stream::stream! {
        let mut updates = std::pin::pin!(updates);

        while let Some(update) = updates.next().await {
            if update.done {
                yield update;
                break;
            }
            if update.citations.is_some() {
                yield update;
                continue;
            }
            if update.value.chars().count() < SPLIT_THRESHOLD {
                yield update;
                continue;
            }

            let mut rest = update.value;
            while !rest.is_empty() {
                let take = rand::thread_rng().gen_range(1..=MAX_CHUNK_CHARS);
                let split_at = rest
                    .char_indices()
                    .nth(take)
                    .map(|(idx, _)| idx)
                    .unwrap_or(rest.len());
                let remainder = rest.split_off(split_at);
                yield TextStreamUpdate::delta(rest, None);
                rest = remainder;

                if !visibility.is_hidden() {
                    tokio::time::sleep(CHUNK_PAUSE).await;
                }
            }
        }
    };

    Box::pin(stream)
}
