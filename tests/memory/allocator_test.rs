/*!
 * Allocator Tests
 * Allocation bounds, overlap shapes and strict access checks
 */

use pretty_assertions::assert_eq;
use sim_kernel::memory::{AllocationOutcome, MemoryAllocator, OverlapKind, Rejection};

#[test]
fn test_whole_memory_fits_exactly() {
    let total = 12_000;
    let mut memory = MemoryAllocator::new(total);
    assert!(memory.allocate(0, 0, total).is_granted());

    let mut memory = MemoryAllocator::new(total);
    assert!(!memory.allocate(0, 0, total + 1).is_granted());
}

#[test]
fn test_overlap_shapes_against_one_block() {
    let mut memory = MemoryAllocator::new(1_000);
    assert!(memory.allocate(0, 100, 50).is_granted());

    let shape = |outcome: AllocationOutcome| match outcome {
        AllocationOutcome::Rejected(Rejection::Overlap { kind, .. }) => Some(kind),
        _ => None,
    };

    assert_eq!(shape(memory.allocate(1, 140, 20)), Some(OverlapKind::RightPartial));
    assert_eq!(shape(memory.allocate(1, 90, 20)), Some(OverlapKind::LeftPartial));
    assert_eq!(shape(memory.allocate(1, 50, 200)), Some(OverlapKind::Contains));
    assert_eq!(shape(memory.allocate(1, 120, 10)), Some(OverlapKind::ContainedIn));

    // Touching on either side is not an overlap
    assert!(memory.allocate(1, 150, 10).is_granted());
    assert!(memory.allocate(1, 90, 10).is_granted());
}

#[test]
fn test_rejections_are_recorded_but_not_enforced() {
    let mut memory = MemoryAllocator::new(1_000);
    assert!(memory.allocate(0, 100, 50).is_granted());
    assert!(!memory.allocate(1, 120, 10).is_granted());

    // The rejected [120, 130) does not block its neighbour
    assert!(memory.allocate(2, 150, 30).is_granted());

    let owners: Vec<_> = memory.requests().iter().map(|r| (r.owner, r.granted)).collect();
    assert_eq!(owners, vec![(0, true), (1, false), (2, true)]);
}

#[test]
fn test_access_requires_room_on_both_sides() {
    let mut memory = MemoryAllocator::new(1_000);
    memory.allocate(0, 100, 50);

    assert!(memory.access(110, 30));
    assert!(memory.access(101, 48));
    assert!(!memory.access(100, 50));
    assert!(!memory.access(101, 49));
    assert!(!memory.access(0, 10));
}

#[test]
fn test_access_spans_only_one_block() {
    let mut memory = MemoryAllocator::new(1_000);
    memory.allocate(0, 100, 50);
    memory.allocate(0, 150, 50);

    assert!(memory.access(160, 10));
    assert!(!memory.access(140, 20));
}

#[test]
fn test_access_does_not_mutate() {
    let mut memory = MemoryAllocator::new(1_000);
    memory.allocate(0, 100, 50);
    let before = memory.stats();

    for _ in 0..3 {
        memory.access(110, 10);
        memory.access(900, 10);
    }

    assert_eq!(memory.stats(), before);
    assert_eq!(memory.requests().len(), 1);
}
