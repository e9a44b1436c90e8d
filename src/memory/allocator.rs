/*!
 * Memory Allocator
 * Contiguous block allocation and access checks for simulated processes
 */

use super::types::{AllocationOutcome, BlockRange, MemoryRequest, MemoryStats, Rejection};
use crate::core::types::{Address, Pid, Size};
use log::debug;

/// Simulated memory unit
///
/// Every allocate request is recorded in arrival order. Granted blocks are
/// pairwise non-overlapping and end within `total_memory`. Nothing is ever
/// freed or mutated after it is recorded.
#[derive(Debug, Clone)]
pub struct MemoryAllocator {
    total_memory: Size,
    requests: Vec<MemoryRequest>,
}

impl MemoryAllocator {
    pub fn new(total_memory: Size) -> Self {
        debug!("Memory allocator initialized with {} units", total_memory);
        Self {
            total_memory,
            requests: Vec::new(),
        }
    }

    /// Request the block `[base, base + size)` for `pid`
    pub fn allocate(&mut self, pid: Pid, base: Address, size: Size) -> AllocationOutcome {
        let range = BlockRange::new(base, size);
        let outcome = match self.check(&range) {
            Some(rejection) => AllocationOutcome::Rejected(rejection),
            None => AllocationOutcome::Granted(range),
        };

        match outcome {
            AllocationOutcome::Granted(_) => {
                debug!("PID {}: granted block {}", pid, range)
            }
            AllocationOutcome::Rejected(ref rejection) => {
                debug!("PID {}: rejected block {} ({})", pid, range, rejection)
            }
        }

        self.requests.push(MemoryRequest {
            range,
            owner: pid,
            granted: outcome.is_granted(),
        });
        outcome
    }

    fn check(&self, range: &BlockRange) -> Option<Rejection> {
        if range.end > self.total_memory {
            return Some(Rejection::ExceedsCapacity {
                end: range.end,
                total: self.total_memory,
            });
        }

        self.granted_blocks().find_map(|existing| {
            range
                .overlap_with(existing)
                .map(|kind| Rejection::Overlap {
                    kind,
                    existing: *existing,
                })
        })
    }

    /// Whether `[base, base + size)` lies strictly inside a granted block.
    /// A request matching a block's bounds exactly is inaccessible.
    pub fn access(&self, base: Address, size: Size) -> bool {
        let requested = BlockRange::new(base, size);
        self.granted_blocks()
            .any(|block| block.strictly_encloses(&requested))
    }

    /// Granted blocks in creation order
    pub fn granted_blocks(&self) -> impl Iterator<Item = &BlockRange> {
        self.requests
            .iter()
            .filter(|request| request.granted)
            .map(|request| &request.range)
    }

    /// All recorded requests, granted or not, in arrival order
    pub fn requests(&self) -> &[MemoryRequest] {
        &self.requests
    }

    pub fn stats(&self) -> MemoryStats {
        let granted_requests = self.requests.iter().filter(|r| r.granted).count();
        MemoryStats {
            total_memory: self.total_memory,
            allocated_memory: self.granted_blocks().map(BlockRange::len).sum(),
            granted_requests,
            rejected_requests: self.requests.len() - granted_requests,
        }
    }
}
