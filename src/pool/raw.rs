//! Pass-through pool
//!
//! Every request is a fresh allocation from the global allocator.

use bytes::BytesMut;
use tracing::debug;

use super::{MemPool, PoolError};

/// Pool that hands every request straight to the allocator
#[derive(Debug, Clone)]
pub struct RawMemPool {
    max_request_size: usize,
}

impl RawMemPool {
    /// Create a pass-through pool
    ///
    /// `max_request_size` is advisory; `alloc` does not enforce it.
    pub fn new(max_request_size: usize) -> Result<Self, PoolError> {
        if max_request_size == 0 {
            return Err(PoolError::invalid("max_request_size must be > 0"));
        }

        debug!(max_request_size, "Created raw memory pool");
        Ok(Self { max_request_size })
    }
}

impl MemPool for RawMemPool {
    #[inline]
    fn alloc(&mut self, size: usize) -> Option<BytesMut> {
        Some(BytesMut::zeroed(size))
    }

    fn max_request_size(&self) -> usize {
        self.max_request_size
    }
}
