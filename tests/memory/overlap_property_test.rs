/*!
 * Allocator Property Tests
 * Granted blocks never overlap and never exceed capacity
 */

use proptest::prelude::*;
use sim_kernel::memory::MemoryAllocator;

const TOTAL: u64 = 256;

proptest! {
    #[test]
    fn granted_blocks_are_disjoint(requests in prop::collection::vec((0u64..300, 0u64..80), 1..40)) {
        let mut memory = MemoryAllocator::new(TOTAL);
        for (pid, (base, size)) in requests.iter().enumerate() {
            memory.allocate(pid as u32, *base, *size);
        }

        let granted: Vec<_> = memory.granted_blocks().copied().collect();
        for block in &granted {
            prop_assert!(block.end <= TOTAL);
        }
        for (i, a) in granted.iter().enumerate() {
            for b in &granted[i + 1..] {
                prop_assert!(
                    a.end <= b.start || b.end <= a.start,
                    "{} overlaps {}", a, b
                );
            }
        }
    }

    #[test]
    fn access_succeeds_only_inside_a_granted_block(
        base in 0u64..200,
        size in 1u64..50,
        probe in 0u64..260,
        len in 0u64..60,
    ) {
        let mut memory = MemoryAllocator::new(TOTAL);
        let granted = memory.allocate(0, base, size).is_granted();

        let inside = granted && probe > base && probe + len < base + size;
        prop_assert_eq!(memory.access(probe, len), inside);
    }
}
