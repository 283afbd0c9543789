use std::collections::VecDeque;

use crate::common::Timestamp;

/// Backward k-distance of a frame.
///
/// `Unbounded` stands for a frame with fewer than k recorded accesses and
/// orders above every `Finite` distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KDistance {
    Finite(u64),
    Unbounded,
}

impl KDistance {
    pub fn is_unbounded(&self) -> bool {
        matches!(self, KDistance::Unbounded)
    }
}

/// Tracks access history for a single frame
#[derive(Debug, Clone)]
pub(crate) struct AccessHistory {
    /// At most k timestamps, most recent at front
    timestamps: VecDeque<Timestamp>,
    /// Whether this frame is currently evictable
    evictable: bool,
}

impl AccessHistory {
    pub(crate) fn new(k: usize) -> Self {
        Self {
            timestamps: VecDeque::with_capacity(k),
            evictable: false,
        }
    }

    /// Pushes `timestamp` as the newest access, dropping the oldest one once
    /// the window already holds k entries.
    pub(crate) fn record(&mut self, timestamp: Timestamp, k: usize) {
        debug_assert!(self.timestamps.front().map_or(true, |&ts| ts < timestamp));
        if self.timestamps.len() >= k {
            self.timestamps.pop_back();
        }
        self.timestamps.push_front(timestamp);
    }

    pub(crate) fn k_distance(&self, now: Timestamp, k: usize) -> KDistance {
        match self.oldest() {
            Some(oldest) if self.timestamps.len() >= k => KDistance::Finite(now - oldest),
            _ => KDistance::Unbounded,
        }
    }

    pub(crate) fn most_recent(&self) -> Option<Timestamp> {
        self.timestamps.front().copied()
    }

    pub(crate) fn oldest(&self) -> Option<Timestamp> {
        self.timestamps.back().copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub(crate) fn is_evictable(&self) -> bool {
        self.evictable
    }

    pub(crate) fn set_evictable(&mut self, evictable: bool) {
        self.evictable = evictable;
    }
}
