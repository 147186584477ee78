//! Bump slab pool
//!
//! Buffers are split off the front of a pre-allocated slab. When the slab
//! cannot satisfy a request it is replaced by a fresh one and its unused tail
//! is abandoned. Issued buffers share the slab's storage through `BytesMut`
//! reference counting, so a replaced slab lives until its last buffer drops.
//!
//! The pool is single-owner. Wrap it in [`super::SharedPool`] to share it
//! across threads.

use bytes::BytesMut;
use tracing::debug;

use super::{MemPool, PoolError};

/// Bump pool counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Slabs allocated, including the initial one
    pub slabs_allocated: u64,
    pub requests_served: u64,
    pub requests_refused: u64,
    pub bytes_served: u64,
    /// Unused tail bytes abandoned on slab replacement
    pub bytes_discarded: u64,
}

/// Forward-only pool carving buffers out of fixed-size slabs
#[derive(Debug)]
pub struct SimpleMemPool {
    /// Unissued suffix of the current slab
    slab: BytesMut,
    slab_size: usize,
    max_request_size: usize,
    generation: u64,
    stats: PoolStats,
}

impl SimpleMemPool {
    /// Create a pool and allocate its first slab
    ///
    /// Fails if `max_request_size > slab_size`, since such requests could
    /// never fit in a slab.
    pub fn new(slab_size: usize, max_request_size: usize) -> Result<Self, PoolError> {
        if max_request_size > slab_size {
            return Err(PoolError::invalid(format!(
                "max_request_size ({}) > slab_size ({})",
                max_request_size, slab_size
            )));
        }

        debug!(slab_size, max_request_size, "Created slab memory pool");

        Ok(Self {
            slab: BytesMut::zeroed(slab_size),
            slab_size,
            max_request_size,
            generation: 0,
            stats: PoolStats {
                slabs_allocated: 1,
                ..PoolStats::default()
            },
        })
    }

    /// Size of each freshly allocated slab
    pub fn slab_size(&self) -> usize {
        self.slab_size
    }

    /// Bytes left in the current slab
    pub fn remaining(&self) -> usize {
        self.slab.len()
    }

    /// Number of slab replacements so far
    pub fn slab_generation(&self) -> u64 {
        self.generation
    }

    /// Get pool statistics
    pub fn stats(&self) -> PoolStats {
        self.stats.clone()
    }

    fn refill(&mut self) {
        self.stats.bytes_discarded += self.slab.len() as u64;
        self.stats.slabs_allocated += 1;
        self.generation += 1;
        // Dropping the old handle releases only the pool's share
        self.slab = BytesMut::zeroed(self.slab_size);
    }
}

impl MemPool for SimpleMemPool {
    fn alloc(&mut self, size: usize) -> Option<BytesMut> {
        if size > self.max_request_size {
            self.stats.requests_refused += 1;
            return None;
        }

        if self.slab.len() < size {
            self.refill();
        }

        self.stats.requests_served += 1;
        self.stats.bytes_served += size as u64;

        if size == 0 {
            return Some(BytesMut::new());
        }
        Some(self.slab.split_to(size))
    }

    fn max_request_size(&self) -> usize {
        self.max_request_size
    }
}
