use core::fmt;
use core::num::NonZeroU32;

/// Stable identifier of a pipe segment within a chain.
///
/// Segment ids are user-facing and 1-based ("segment 1", "segment 2", ...).
/// They survive add/remove edits of the chain, so they are not positions.
/// `NonZero` keeps `Option<SegmentId>` the same size as `SegmentId`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(NonZeroU32);

impl SegmentId {
    /// The id given to the first segment of a fresh chain.
    pub const FIRST: SegmentId = SegmentId(NonZeroU32::MIN);

    /// Create an id from its 1-based raw value. Returns `None` for zero.
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    /// Create an id from a 0-based position by storing index+1.
    pub fn from_index(index: u32) -> Self {
        Self(NonZeroU32::MIN.saturating_add(index))
    }

    /// Raw 1-based value.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Id following this one; used when appending to a chain.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Debug for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SegmentId({})", self.get())
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
