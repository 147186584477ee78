//! Counting global allocator
//!
//! Wraps the system allocator and keeps lock-free, process-wide counters.
//! Install it in a binary to make `allocated()` report real numbers:
//!
//! ```ignore
//! #[global_allocator]
//! static GLOBAL: memutil::usage::CountingAllocator = memutil::usage::CountingAllocator;
//! ```

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counters, updated by `CountingAllocator`
static COUNTERS: Counters = Counters::new();

struct Counters {
    allocations: AtomicU64,
    deallocations: AtomicU64,
    reallocations: AtomicU64,
    live_bytes: AtomicU64,
}

impl Counters {
    const fn new() -> Self {
        Self {
            allocations: AtomicU64::new(0),
            deallocations: AtomicU64::new(0),
            reallocations: AtomicU64::new(0),
            live_bytes: AtomicU64::new(0),
        }
    }

    #[inline]
    fn alloc(&self, size: usize) {
        self.allocations.fetch_add(1, Ordering::Relaxed);
        self.live_bytes.fetch_add(size as u64, Ordering::Relaxed);
    }

    #[inline]
    fn dealloc(&self, size: usize) {
        self.deallocations.fetch_add(1, Ordering::Relaxed);
        self.live_bytes.fetch_sub(size as u64, Ordering::Relaxed);
    }

    #[inline]
    fn realloc(&self, old_size: usize, new_size: usize) {
        self.reallocations.fetch_add(1, Ordering::Relaxed);
        if new_size >= old_size {
            self.live_bytes
                .fetch_add((new_size - old_size) as u64, Ordering::Relaxed);
        } else {
            self.live_bytes
                .fetch_sub((old_size - new_size) as u64, Ordering::Relaxed);
        }
    }
}

/// `GlobalAlloc` that delegates to `System` and counts live bytes
pub struct CountingAllocator;

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            COUNTERS.alloc(layout.size());
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc_zeroed(layout);
        if !ptr.is_null() {
            COUNTERS.alloc(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        COUNTERS.dealloc(layout.size());
        System.dealloc(ptr, layout);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = System.realloc(ptr, layout, new_size);
        // On failure the old block is untouched
        if !new_ptr.is_null() {
            COUNTERS.realloc(layout.size(), new_size);
        }
        new_ptr
    }
}

/// Snapshot of allocator counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllocStats {
    pub allocations: u64,
    pub deallocations: u64,
    pub reallocations: u64,
    pub live_bytes: u64,
}

/// Read all counters. All zero unless `CountingAllocator` is installed.
pub fn alloc_stats() -> AllocStats {
    AllocStats {
        allocations: COUNTERS.allocations.load(Ordering::Relaxed),
        deallocations: COUNTERS.deallocations.load(Ordering::Relaxed),
        reallocations: COUNTERS.reallocations.load(Ordering::Relaxed),
        live_bytes: COUNTERS.live_bytes.load(Ordering::Relaxed),
    }
}

/// Bytes currently allocated through `CountingAllocator`
#[inline]
pub fn live_bytes() -> u64 {
    COUNTERS.live_bytes.load(Ordering::Relaxed)
}
