use std::fmt;

/// Frame identifier type - identifies a slot in the buffer pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub u32);

impl FrameId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FrameId({})", self.0)
    }
}

impl From<u32> for FrameId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Logical timestamp used for LRU-K tracking
pub type Timestamp = u64;

/// Classification of a frame access, supplied by the caller.
///
/// The LRU-K policy ignores it today. It is carried so that scan-resistant
/// variants can be added without touching call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccessType {
    #[default]
    Unknown,
    Lookup,
    Scan,
    Index,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccessType::Unknown => "unknown",
            AccessType::Lookup => "lookup",
            AccessType::Scan => "scan",
            AccessType::Index => "index",
        };
        f.write_str(name)
    }
}
