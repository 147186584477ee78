//! Byte buffer pools
//!
//! Two strategies behind one `MemPool` interface: a pass-through pool that
//! allocates every buffer fresh, and a bump pool that carves buffers out of
//! pre-allocated slabs.

mod bump;
mod raw;
mod shared;

pub use bump::{PoolStats, SimpleMemPool};
pub use raw::RawMemPool;
pub use shared::SharedPool;

use bytes::BytesMut;
use thiserror::Error;

/// Pool errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    /// Size constraints violated at construction
    #[error("invalid pool configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Request exceeded the configured maximum
    #[error("request of {requested} bytes exceeds max request size {max}")]
    RequestTooLarge { requested: usize, max: usize },
}

impl PoolError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// Common allocation interface
pub trait MemPool {
    /// Allocate exactly `size` bytes.
    ///
    /// `None` means the pool refused the request. It is never used for a
    /// zero-length success.
    fn alloc(&mut self, size: usize) -> Option<BytesMut>;

    /// Upper bound on a single request
    fn max_request_size(&self) -> usize;

    /// Like `alloc`, but reports a refusal as `RequestTooLarge`
    fn try_alloc(&mut self, size: usize) -> Result<BytesMut, PoolError> {
        let max = self.max_request_size();
        self.alloc(size)
            .ok_or(PoolError::RequestTooLarge { requested: size, max })
    }
}

impl<P: MemPool + ?Sized> MemPool for Box<P> {
    fn alloc(&mut self, size: usize) -> Option<BytesMut> {
        (**self).alloc(size)
    }

    fn max_request_size(&self) -> usize {
        (**self).max_request_size()
    }
}
