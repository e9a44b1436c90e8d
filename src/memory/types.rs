/*!
 * Memory Types
 * Address ranges, request records and allocation outcomes
 */

use crate::core::types::{Address, Pid, Size};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-open simulated address range `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRange {
    pub start: Address,
    pub end: Address,
}

impl BlockRange {
    /// Range of `size` units starting at `base`. The end saturates so an
    /// overflowing request can never fit in memory.
    pub fn new(base: Address, size: Size) -> Self {
        Self {
            start: base,
            end: base.saturating_add(size),
        }
    }

    pub fn len(&self) -> Size {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// How `self` overlaps `existing`, if it does. Ranges that only touch
    /// (`self.end == existing.start` or `self.start == existing.end`) do not.
    pub fn overlap_with(&self, existing: &BlockRange) -> Option<OverlapKind> {
        if self.start >= existing.end || existing.start >= self.end {
            return None;
        }

        let kind = if self.start <= existing.start && self.end >= existing.end {
            OverlapKind::Contains
        } else if self.start >= existing.start && self.end <= existing.end {
            OverlapKind::ContainedIn
        } else if self.start > existing.start {
            OverlapKind::RightPartial
        } else {
            OverlapKind::LeftPartial
        };
        Some(kind)
    }

    /// `inner` lies inside `self` with room on both sides
    pub fn strictly_encloses(&self, inner: &BlockRange) -> bool {
        inner.start > self.start && inner.end < self.end
    }
}

impl fmt::Display for BlockRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Shape of a rejected overlap, seen from the new request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapKind {
    /// Starts inside an existing block and runs past its end
    RightPartial,
    /// Starts before an existing block and ends inside it
    LeftPartial,
    /// Covers an existing block entirely
    Contains,
    /// Lies entirely within an existing block
    ContainedIn,
}

/// Why an allocation was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    ExceedsCapacity { end: Address, total: Size },
    Overlap { kind: OverlapKind, existing: BlockRange },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExceedsCapacity { end, total } => {
                write!(f, "end {} exceeds available memory {}", end, total)
            }
            Self::Overlap { kind, existing } => {
                write!(f, "{:?} overlap with block {}", kind, existing)
            }
        }
    }
}

/// Result of an allocate request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationOutcome {
    Granted(BlockRange),
    Rejected(Rejection),
}

impl AllocationOutcome {
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted(_))
    }
}

/// One allocate request as recorded by the allocator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryRequest {
    pub range: BlockRange,
    pub owner: Pid,
    pub granted: bool,
}

/// Memory statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MemoryStats {
    pub total_memory: Size,
    pub allocated_memory: Size,
    pub granted_requests: usize,
    pub rejected_requests: usize,
}
