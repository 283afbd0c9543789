//! lruk - LRU-K frame replacement for a disk-oriented buffer pool
//!
//! A buffer pool keeps a fixed number of frames in memory. When all of them
//! are occupied and a new page must be brought in, some frame has to give up
//! its page. This crate decides which one.
//!
//! # Architecture
//!
//! - **Buffer** (`buffer`): the replacement policy
//!   - `LruKReplacer`: tracks the last k accesses of every frame and evicts
//!     the evictable frame with the largest backward k-distance
//!   - `KDistance`: finite distance or `Unbounded` for frames with fewer
//!     than k accesses
//!
//! - **Common** (`common`): shared types, errors and configuration
//!   - `FrameId`, `AccessType`, `Timestamp`
//!   - `ReplacerError`, `Result`
//!   - `ReplacerConfig` and default constants
//!
//! The replacer does no locking of its own. The owning buffer pool is
//! expected to keep it behind whatever lock already guards its page table.
//!
//! # Example
//!
//! ```rust
//! use lruk::buffer::LruKReplacer;
//! use lruk::common::{AccessType, FrameId};
//!
//! let mut replacer = LruKReplacer::new(3, 2)?;
//!
//! for id in 0..3 {
//!     replacer.record_access(FrameId::new(id), AccessType::Lookup);
//!     replacer.set_evictable(FrameId::new(id), true);
//! }
//!
//! // Every frame has fewer than k accesses, so the oldest one goes first.
//! assert_eq!(replacer.evict(), Some(FrameId::new(0)));
//! assert_eq!(replacer.size(), 2);
//! # Ok::<(), lruk::ReplacerError>(())
//! ```

pub mod buffer;
pub mod common;

// Re-export commonly used types at the crate root
pub use buffer::{KDistance, LruKReplacer};
pub use common::{AccessType, FrameId, ReplacerConfig, ReplacerError, Result};
