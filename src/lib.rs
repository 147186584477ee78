//! memutil - byte buffer pools
//!
//! A pass-through pool and a bump slab pool behind one `MemPool` interface,
//! plus a counting global allocator for reporting live allocation.

pub mod config;
pub mod pool;
pub mod usage;
pub mod util;

pub use config::Config;
pub use pool::{MemPool, PoolError, RawMemPool, SharedPool, SimpleMemPool};
pub use usage::allocated;

/// Crate version for display
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
