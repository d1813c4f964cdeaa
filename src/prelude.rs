//! Convenience re-exports of the types most callers need.
//!
//! ```
//! use dripfeed::prelude::*;
//! ```

pub use crate::collect::{collect_text, StreamTextResult};
pub use crate::error::{DripfeedError, Result};
pub use crate::pipeline::{openai_text_stream, StreamOptions};
pub use crate::types::{ResponseUsage, TextStreamUpdate};
pub use crate::updates::{update_stream, DONE_SENTINEL};
pub use crate::visibility::{AlwaysVisible, Visibility, VisibilityFlag};
