//! Allocation usage reporting
//!
//! A counting global allocator and a formatter for its live byte count.

mod counting;
mod report;

pub use counting::{alloc_stats, live_bytes, AllocStats, CountingAllocator};
pub use report::{allocated, UsageBreakdown};
