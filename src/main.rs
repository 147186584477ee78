//! memutil - Entry Point
//!
//! Runs a fixed allocation workload through both pools and reports pool
//! statistics and live process allocation.

use anyhow::{Context, Result};
use bytes::BytesMut;
use std::path::PathBuf;
use tracing::info;

use memutil::usage::{alloc_stats, CountingAllocator};
use memutil::{allocated, Config, MemPool, VERSION};

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

fn main() -> Result<()> {
    // Parse command line arguments
    let config_path = std::env::args().nth(1).map(PathBuf::from);

    let config = match &config_path {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => Config::default(),
    };

    memutil::util::init_tracing(&config.logging)?;

    info!(
        version = VERSION,
        config_path = ?config_path,
        usage = %allocated(),
        "Starting memutil"
    );

    let mut raw = config.raw.build()?;
    let mut slab = config.pool.build()?;

    let held = run_workload(&mut raw, &config)?;
    info!(
        pool = "raw",
        buffers = held.len(),
        usage = %allocated(),
        "Workload complete"
    );
    drop(held);

    let held = run_workload(&mut slab, &config)?;
    let stats = slab.stats();
    info!(
        pool = "slab",
        buffers = held.len(),
        slabs_allocated = stats.slabs_allocated,
        bytes_served = stats.bytes_served,
        bytes_discarded = stats.bytes_discarded,
        usage = %allocated(),
        "Workload complete"
    );
    drop(held);

    let totals = alloc_stats();
    info!(
        allocations = totals.allocations,
        deallocations = totals.deallocations,
        reallocations = totals.reallocations,
        usage = %allocated(),
        "Done"
    );
    Ok(())
}

/// Allocate `requests` buffers and keep them alive
fn run_workload<P: MemPool>(pool: &mut P, config: &Config) -> Result<Vec<BytesMut>> {
    let size = config.workload.request_size;
    (0..config.workload.requests)
        .map(|_| pool.try_alloc(size).map_err(Into::into))
        .collect()
}
