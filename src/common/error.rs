use thiserror::Error;

use super::types::FrameId;

/// Replacer error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplacerError {
    /// A pinned frame was handed to `remove`. This is a bug in the caller.
    #[error("Cannot remove frame {0}: frame is not evictable")]
    RemoveNonEvictable(FrameId),

    #[error("Invalid history depth k = {0}, must be at least 1")]
    InvalidK(usize),
}

pub type Result<T> = std::result::Result<T, ReplacerError>;
