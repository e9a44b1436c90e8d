/*!
 * Memory Module
 * Simulated contiguous-memory allocator
 */

pub mod allocator;
pub mod types;

// Re-export public API
pub use allocator::MemoryAllocator;
pub use types::{
    AllocationOutcome, BlockRange, MemoryRequest, MemoryStats, OverlapKind, Rejection,
};
