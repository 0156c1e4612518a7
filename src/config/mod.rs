//! Configuration for the Snowflake generator

mod builder;

use std::fmt;
use std::time::Duration;

use thiserror::Error;

pub use builder::SnowflakeConfigBuilder;
use builder::{
    DEFAULT_EPOCH, DEFAULT_POLL_INTERVAL, DEFAULT_SPIN_ENABLED, DEFAULT_SPIN_LOOPS,
    DEFAULT_SPIN_YIELD_EVERY,
};

use crate::codec::{BitLayout, SnowflakeParts, UNUSED_BITS};

/// Errors related to `SnowflakeConfig` builder validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A field width is outside the supported range [1, 16]
    #[error("{field} bits {bits} must be between 1 and 16")]
    InvalidFieldBits { field: &'static str, bits: u8 },
    /// The widths leave too few bits for the timestamp
    #[error("Timestamp would only get {bits} bits, at least 35 are required")]
    TimestampTooNarrow { bits: u8 },
}

/// Configuration for the Snowflake generator.
/// Immutable once built; the layout carries every derived shift and mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnowflakeConfig {
    epoch: u64,
    layout: BitLayout,
    spin_enabled: bool,
    spin_loops: u32,
    spin_yield_every: u32,
    poll_interval: Duration,
}

impl SnowflakeConfig {
    /// Create config from builder
    pub(crate) fn from_builder(b: SnowflakeConfigBuilder) -> Self {
        Self {
            epoch: b.epoch,
            layout: b.layout,
            spin_enabled: b.spin_enabled,
            spin_loops: b.spin_loops,
            spin_yield_every: b.spin_yield_every,
            poll_interval: b.poll_interval,
        }
    }

    /// Create a new configuration builder
    pub fn builder() -> SnowflakeConfigBuilder {
        SnowflakeConfigBuilder::new()
    }

    /// Decompose an ID produced under this configuration
    #[inline]
    pub const fn decode(&self, id: u64) -> SnowflakeParts {
        self.layout.decode(id)
    }

    #[inline(always)]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    #[inline(always)]
    pub const fn layout(&self) -> &BitLayout {
        &self.layout
    }

    #[inline(always)]
    pub const fn max_data_center_id(&self) -> u16 {
        self.layout.max_data_center_id()
    }

    #[inline(always)]
    pub const fn max_machine_id(&self) -> u16 {
        self.layout.max_machine_id()
    }

    #[inline(always)]
    pub const fn max_sequence(&self) -> u16 {
        self.layout.max_sequence()
    }

    #[inline(always)]
    pub const fn spin_enabled(&self) -> bool {
        self.spin_enabled
    }

    #[inline(always)]
    pub const fn spin_loops(&self) -> u32 {
        self.spin_loops
    }

    #[inline(always)]
    pub const fn spin_yield_every(&self) -> u32 {
        self.spin_yield_every
    }

    #[inline(always)]
    pub const fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

impl Default for SnowflakeConfig {
    fn default() -> Self {
        Self {
            epoch: DEFAULT_EPOCH,
            layout: BitLayout::default(),
            spin_enabled: DEFAULT_SPIN_ENABLED,
            spin_loops: DEFAULT_SPIN_LOOPS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl fmt::Display for SnowflakeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let l = &self.layout;
        write!(
            f,
            "epoch={} bits(unused={}, timestamp={}, data_center={}, machine={}, sequence={}) \
             max(data_center={}, machine={}, sequence={}) \
             shift(timestamp={}, data_center={}, machine={})",
            self.epoch,
            UNUSED_BITS,
            l.timestamp_bits(),
            l.data_center_bits(),
            l.machine_bits(),
            l.sequence_bits(),
            l.max_data_center_id(),
            l.max_machine_id(),
            l.max_sequence(),
            l.timestamp_shift(),
            l.data_center_shift(),
            l.machine_shift(),
        )
    }
}
