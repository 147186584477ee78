//! Mutex wrapper for sharing a pool across threads
//!
//! The pools themselves are unsynchronized; this serializes callers outside
//! the pool so the single-owner fast path stays lock-free.

use bytes::BytesMut;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

use super::MemPool;

/// Cloneable handle to a pool guarded by a mutex
pub struct SharedPool<P> {
    inner: Arc<Mutex<P>>,
}

impl<P> Clone for SharedPool<P> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<P: MemPool> SharedPool<P> {
    pub fn new(pool: P) -> Self {
        Self {
            inner: Arc::new(Mutex::new(pool)),
        }
    }

    /// Allocate through the shared handle
    pub fn alloc(&self, size: usize) -> Option<BytesMut> {
        self.inner.lock().alloc(size)
    }

    /// Lock the pool for direct access (stats, several allocations at once)
    pub fn lock(&self) -> MutexGuard<'_, P> {
        self.inner.lock()
    }
}

impl<P: MemPool> MemPool for SharedPool<P> {
    fn alloc(&mut self, size: usize) -> Option<BytesMut> {
        SharedPool::alloc(self, size)
    }

    fn max_request_size(&self) -> usize {
        self.inner.lock().max_request_size()
    }
}
