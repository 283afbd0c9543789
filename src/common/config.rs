use super::error::{ReplacerError, Result};

/// Default K value for LRU-K replacement policy
pub const DEFAULT_LRUK_K: usize = 2;

/// Default buffer pool size (number of frames)
pub const DEFAULT_BUFFER_POOL_SIZE: usize = 10;

/// Construction parameters for an `LruKReplacer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplacerConfig {
    /// Number of frames in the owning pool. Advisory only.
    pub num_frames: usize,
    /// History depth
    pub k: usize,
}

impl ReplacerConfig {
    pub fn new(num_frames: usize, k: usize) -> Self {
        Self { num_frames, k }
    }

    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn with_num_frames(mut self, num_frames: usize) -> Self {
        self.num_frames = num_frames;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(ReplacerError::InvalidK(self.k));
        }
        Ok(())
    }
}

impl Default for ReplacerConfig {
    fn default() -> Self {
        Self {
            num_frames: DEFAULT_BUFFER_POOL_SIZE,
            k: DEFAULT_LRUK_K,
        }
    }
}
