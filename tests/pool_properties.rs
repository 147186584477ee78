//! Bump pool and pass-through pool property tests

use bytes::BytesMut;
use memutil::{MemPool, PoolError, RawMemPool, SimpleMemPool};
use proptest::prelude::*;

fn span(buf: &BytesMut) -> (usize, usize) {
    let start = buf.as_ptr() as usize;
    (start, start + buf.len())
}

/// (slab_size, max_request_size) with max <= slab, both > 0
fn arb_valid_config() -> impl Strategy<Value = (usize, usize)> {
    (1usize..4096).prop_flat_map(|slab| (Just(slab), 1..=slab))
}

proptest! {
    #[test]
    fn requests_within_max_always_served(
        (slab, max) in arb_valid_config(),
        fractions in prop::collection::vec(0.0f64..=1.0, 1..64),
    ) {
        let mut pool = SimpleMemPool::new(slab, max).unwrap();
        for f in fractions {
            let size = (f * max as f64) as usize;
            let buf = pool.alloc(size);
            prop_assert_eq!(buf.map(|b| b.len()), Some(size));
        }
    }

    #[test]
    fn requests_above_max_always_refused(
        (slab, max) in arb_valid_config(),
        warmup in prop::collection::vec(0.0f64..=1.0, 0..16),
        excess in 1usize..10_000,
    ) {
        let mut pool = SimpleMemPool::new(slab, max).unwrap();
        for f in warmup {
            pool.alloc((f * max as f64) as usize);
        }
        let before = pool.remaining();
        prop_assert!(pool.alloc(max + excess).is_none());
        prop_assert_eq!(pool.remaining(), before);
    }

    #[test]
    fn buffers_within_a_slab_never_overlap(
        (slab, max) in arb_valid_config(),
        sizes in prop::collection::vec(1usize..4096, 1..64),
    ) {
        let mut pool = SimpleMemPool::new(slab, max).unwrap();
        let mut issued: Vec<(u64, (usize, usize), BytesMut)> = Vec::new();

        for size in sizes.into_iter().map(|s| s.min(max)) {
            let buf = pool.alloc(size).unwrap();
            issued.push((pool.slab_generation(), span(&buf), buf));
        }

        for (i, (gen_a, a, _)) in issued.iter().enumerate() {
            for (gen_b, b, _) in issued.iter().skip(i + 1) {
                if gen_a == gen_b {
                    prop_assert!(a.1 <= b.0 || b.1 <= a.0);
                }
            }
        }
    }

    #[test]
    fn exact_fill_then_one_more_refills(
        (slab, max) in arb_valid_config(),
        extra in 1usize..4096,
    ) {
        let mut pool = SimpleMemPool::new(slab, max).unwrap();

        let mut left = slab;
        while left > 0 {
            let size = left.min(max);
            pool.alloc(size).unwrap();
            left -= size;
        }
        prop_assert_eq!(pool.slab_generation(), 0);
        prop_assert_eq!(pool.remaining(), 0);

        pool.alloc(extra.min(max)).unwrap();
        prop_assert_eq!(pool.slab_generation(), 1);
    }

    #[test]
    fn max_above_slab_always_rejected(slab in 0usize..100_000, excess in 1usize..100_000) {
        let is_invalid = matches!(
            SimpleMemPool::new(slab, slab + excess),
            Err(PoolError::InvalidConfiguration { .. })
        );
        prop_assert!(is_invalid);
    }

    #[test]
    fn raw_pool_serves_any_size(max in 1usize..1024, size in 0usize..8192) {
        let mut pool = RawMemPool::new(max).unwrap();
        prop_assert_eq!(pool.alloc(size).map(|b| b.len()), Some(size));
    }
}

#[test]
fn test_raw_pool_rejects_zero_max() {
    assert!(matches!(
        RawMemPool::new(0),
        Err(PoolError::InvalidConfiguration { .. })
    ));
}

#[test]
fn test_slab_scenario() {
    let mut pool = SimpleMemPool::new(1024, 100).unwrap();

    let first: Vec<BytesMut> = (0..3).map(|_| pool.alloc(100).unwrap()).collect();
    let spans: Vec<_> = first.iter().map(span).collect();
    assert!(first.iter().all(|b| b.len() == 100));
    assert!(spans[0].1 <= spans[1].0 && spans[1].1 <= spans[2].0);

    assert!(pool.alloc(1025).is_none());

    let slab_start = spans[0].0;
    let rest: Vec<BytesMut> = (3..11).map(|_| pool.alloc(100).unwrap()).collect();
    assert_eq!(pool.slab_generation(), 1);

    // The 11th buffer comes from a new slab, outside the first one's range
    let last = span(rest.last().unwrap());
    assert!(last.1 <= slab_start || last.0 >= slab_start + 1024);
}
