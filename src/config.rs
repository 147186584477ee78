//! Configuration management
//!
//! Loads pool, workload and logging settings from TOML. Every section is
//! optional and falls back to defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::pool::{PoolError, RawMemPool, SimpleMemPool};

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pool: PoolConfig,
    #[serde(default)]
    pub raw: RawConfig,
    #[serde(default)]
    pub workload: WorkloadConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Bump pool configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PoolConfig {
    /// Bytes per slab
    #[serde(default = "default_slab_size")]
    pub slab_size: usize,
    /// Largest single request; must not exceed `slab_size`
    #[serde(default = "default_max_request_size")]
    pub max_request_size: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            slab_size: default_slab_size(),
            max_request_size: default_max_request_size(),
        }
    }
}

impl PoolConfig {
    pub fn build(&self) -> Result<SimpleMemPool, PoolError> {
        SimpleMemPool::new(self.slab_size, self.max_request_size)
    }
}

/// Pass-through pool configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfig {
    #[serde(default = "default_raw_max_request_size")]
    pub max_request_size: usize,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            max_request_size: default_raw_max_request_size(),
        }
    }
}

impl RawConfig {
    pub fn build(&self) -> Result<RawMemPool, PoolError> {
        RawMemPool::new(self.max_request_size)
    }
}

/// Demo workload run by the binary
#[derive(Debug, Clone, Deserialize)]
pub struct WorkloadConfig {
    /// Number of allocations per pool
    #[serde(default = "default_requests")]
    pub requests: usize,
    /// Bytes per allocation
    #[serde(default = "default_request_size")]
    pub request_size: usize,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            requests: default_requests(),
            request_size: default_request_size(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format: "json" or "pretty"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// Default value functions
fn default_slab_size() -> usize { 64 * 1024 }
fn default_max_request_size() -> usize { 4096 }
fn default_raw_max_request_size() -> usize { 64 * 1024 }
fn default_requests() -> usize { 10_000 }
fn default_request_size() -> usize { 512 }
fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "pretty".to_string() }

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&contents)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)
            .with_context(|| "Failed to parse config file")?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.pool.max_request_size > self.pool.slab_size {
            anyhow::bail!("pool.max_request_size must be <= pool.slab_size");
        }
        if self.raw.max_request_size == 0 {
            anyhow::bail!("raw.max_request_size must be > 0");
        }
        if self.workload.request_size > self.pool.max_request_size {
            anyhow::bail!("workload.request_size must be <= pool.max_request_size");
        }
        Ok(())
    }
}
