use std::cmp::Reverse;
use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::common::{AccessType, FrameId, ReplacerConfig, ReplacerError, Result, Timestamp};

use super::access_history::{AccessHistory, KDistance};

/// LRU-K Replacement Policy
///
/// The LRU-K algorithm evicts a frame whose backward k-distance is the maximum
/// of all evictable frames in the replacer. Backward k-distance is computed as
/// the difference in time between the current timestamp and the timestamp of
/// the kth previous access.
///
/// A frame with fewer than k historical accesses is given +inf as its backward
/// k-distance. If multiple frames have +inf backward k-distance, the replacer
/// evicts the one whose most recent access is the oldest, which is plain LRU.
///
/// The replacer holds no locks. Every mutating method takes `&mut self`, so
/// the owner must serialize access itself, typically by keeping the replacer
/// behind the same mutex that guards its page table.
#[derive(Debug)]
pub struct LruKReplacer {
    /// K value for the LRU-K algorithm
    k: usize,
    /// Number of frames in the owning pool. Advisory, never enforced.
    num_frames: usize,
    /// Next timestamp to hand out
    current_timestamp: Timestamp,
    /// Access history of every tracked frame
    frames: HashMap<FrameId, AccessHistory>,
    /// Number of tracked frames with the evictable flag set
    num_evictable: usize,
}

impl LruKReplacer {
    /// Creates a new LRU-K replacer for a pool of `num_frames` frames.
    pub fn new(num_frames: usize, k: usize) -> Result<Self> {
        Self::from_config(&ReplacerConfig::new(num_frames, k))
    }

    pub fn from_config(config: &ReplacerConfig) -> Result<Self> {
        config.validate()?;
        debug!(num_frames = config.num_frames, k = config.k, "creating LRU-K replacer");

        Ok(Self {
            k: config.k,
            num_frames: config.num_frames,
            current_timestamp: 0,
            frames: HashMap::with_capacity(config.num_frames),
            num_evictable: 0,
        })
    }

    /// Evicts the evictable frame with the largest backward k-distance and
    /// stops tracking it. Returns None if there are no evictable frames.
    pub fn evict(&mut self) -> Option<FrameId> {
        if self.num_evictable == 0 {
            trace!("no evictable frames");
            return None;
        }

        let now = self.current_timestamp;
        let k = self.k;

        // Unique timestamps mean the (distance, recency) key never ties.
        let (victim, distance) = self
            .frames
            .iter()
            .filter(|(_, history)| history.is_evictable())
            .map(|(frame_id, history)| (*frame_id, history.k_distance(now, k), history.most_recent()))
            .max_by_key(|&(_, distance, most_recent)| (distance, Reverse(most_recent)))
            .map(|(frame_id, distance, _)| (frame_id, distance))?;

        self.frames.remove(&victim);
        self.num_evictable -= 1;

        debug!(frame_id = %victim, ?distance, "evicted frame");
        Some(victim)
    }

    /// Records that the given frame was accessed at the current timestamp.
    /// A frame seen for the first time starts out non-evictable.
    pub fn record_access(&mut self, frame_id: FrameId, access_type: AccessType) {
        if frame_id.as_usize() >= self.num_frames {
            warn!(frame_id = %frame_id, num_frames = self.num_frames, "frame id beyond pool capacity");
        }

        let timestamp = self.current_timestamp;
        self.current_timestamp += 1;

        let k = self.k;
        let history = self
            .frames
            .entry(frame_id)
            .or_insert_with(|| AccessHistory::new(k));
        history.record(timestamp, k);

        trace!(
            frame_id = %frame_id,
            timestamp,
            %access_type,
            history_len = history.len(),
            "recorded access"
        );
    }

    /// Sets whether a frame is evictable.
    /// When a frame's pin count drops to 0, it should be marked as evictable.
    /// Unknown frames are ignored.
    pub fn set_evictable(&mut self, frame_id: FrameId, evictable: bool) {
        let Some(history) = self.frames.get_mut(&frame_id) else {
            return;
        };

        if history.is_evictable() == evictable {
            return;
        }

        history.set_evictable(evictable);
        if evictable {
            self.num_evictable += 1;
        } else {
            self.num_evictable -= 1;
        }

        debug!(frame_id = %frame_id, evictable, size = self.num_evictable, "evictable flag changed");
    }

    /// Stops tracking a frame whose page was deleted outside of eviction.
    ///
    /// Removing an unknown frame is a no-op. Removing a frame that is still
    /// pinned (not evictable) returns `ReplacerError::RemoveNonEvictable` and
    /// leaves the replacer untouched.
    pub fn remove(&mut self, frame_id: FrameId) -> Result<()> {
        let Some(history) = self.frames.get(&frame_id) else {
            return Ok(());
        };

        if !history.is_evictable() {
            warn!(frame_id = %frame_id, "attempted to remove a pinned frame");
            return Err(ReplacerError::RemoveNonEvictable(frame_id));
        }

        self.frames.remove(&frame_id);
        self.num_evictable -= 1;

        debug!(frame_id = %frame_id, "removed frame");
        Ok(())
    }

    /// Returns the number of evictable frames.
    pub fn size(&self) -> usize {
        self.num_evictable
    }

    /// Returns the k value of this replacer.
    pub fn k(&self) -> usize {
        self.k
    }

    pub fn num_frames(&self) -> usize {
        self.num_frames
    }

    /// Returns the timestamp the next access will be recorded at.
    pub fn current_timestamp(&self) -> Timestamp {
        self.current_timestamp
    }

    /// Number of frames being tracked, evictable or not.
    pub fn tracked_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn is_tracked(&self, frame_id: FrameId) -> bool {
        self.frames.contains_key(&frame_id)
    }

    /// Returns the evictable flag of a tracked frame.
    pub fn is_evictable(&self, frame_id: FrameId) -> Option<bool> {
        self.frames.get(&frame_id).map(AccessHistory::is_evictable)
    }

    /// Returns the backward k-distance of a tracked frame as of now.
    pub fn k_distance(&self, frame_id: FrameId) -> Option<KDistance> {
        self.frames
            .get(&frame_id)
            .map(|history| history.k_distance(self.current_timestamp, self.k))
    }
}
