//! Token accounting reported by the completion endpoint.

use serde::{Deserialize, Serialize};

/// Token counts for one completion, as reported in the stream payload.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ResponseUsage {
    /// Tokens in the prompt, including images and tools if any.
    pub prompt_tokens: u32,
    /// Tokens generated.
    pub completion_tokens: u32,
    /// Sum of the above two fields (by convention, not enforced).
    pub total_tokens: u32,
}

impl ResponseUsage {
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }
}
