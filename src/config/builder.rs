//! SnowflakeConfig builder for constructing configuration

use std::time::Duration;

use super::{ConfigError, SnowflakeConfig};
use crate::codec::BitLayout;

/// Default configuration values
pub(super) const DEFAULT_EPOCH: u64 = 1577836800000; // January 1, 2020 UTC
pub(super) const DEFAULT_SPIN_ENABLED: bool = true;
pub(super) const DEFAULT_SPIN_LOOPS: u32 = 64;
pub(super) const DEFAULT_SPIN_YIELD_EVERY: u32 = 16;
pub(super) const DEFAULT_POLL_INTERVAL: Duration = Duration::from_micros(100);

/// Supported width for the data center, machine and sequence fields
const FIELD_BITS_RANGE: std::ops::RangeInclusive<u8> = 1..=16;
/// Narrowest timestamp field accepted, roughly one year of milliseconds
const MIN_TIMESTAMP_BITS: u8 = 35;

/// Builder for SnowflakeConfig
#[derive(Debug)]
pub struct SnowflakeConfigBuilder {
    pub(super) epoch: u64,
    pub(super) layout: BitLayout,
    pub(super) spin_enabled: bool,
    pub(super) spin_loops: u32,
    pub(super) spin_yield_every: u32,
    pub(super) poll_interval: Duration,
}

impl SnowflakeConfigBuilder {
    /// Create a new SnowflakeConfigBuilder with default values
    pub fn new() -> Self {
        Self {
            epoch: DEFAULT_EPOCH,
            layout: BitLayout::default(),
            spin_enabled: DEFAULT_SPIN_ENABLED,
            spin_loops: DEFAULT_SPIN_LOOPS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Set the data center, machine and sequence widths.
    /// The timestamp takes the remaining `63 - sum` bits.
    pub fn layout(
        mut self,
        data_center_bits: u8,
        machine_bits: u8,
        sequence_bits: u8,
    ) -> Result<Self, ConfigError> {
        for (field, bits) in [
            ("data_center", data_center_bits),
            ("machine", machine_bits),
            ("sequence", sequence_bits),
        ] {
            if !FIELD_BITS_RANGE.contains(&bits) {
                return Err(ConfigError::InvalidFieldBits { field, bits });
            }
        }

        let timestamp_bits = 63 - (data_center_bits + machine_bits + sequence_bits);
        if timestamp_bits < MIN_TIMESTAMP_BITS {
            return Err(ConfigError::TimestampTooNarrow {
                bits: timestamp_bits,
            });
        }

        self.layout = BitLayout::new(data_center_bits, machine_bits, sequence_bits);
        Ok(self)
    }

    /// Set the epoch in milliseconds since the UNIX epoch
    pub const fn epoch(mut self, epoch: u64) -> Self {
        self.epoch = epoch;
        self
    }

    /// Enable or disable micro spin before sleeping on sequence exhaustion
    pub const fn enable_spin(mut self, enable: bool) -> Self {
        self.spin_enabled = enable;
        self
    }

    /// Set number of spin loops attempted before falling back to sleep
    pub const fn spin_loops(mut self, loops: u32) -> Self {
        self.spin_loops = loops;
        self
    }

    /// Set spin yield cadence. Yield every N spin iterations; 0 disables yielding
    pub const fn spin_yield_every(mut self, n: u32) -> Self {
        self.spin_yield_every = n;
        self
    }

    /// Set the sleep between clock polls once spinning gave up
    pub const fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Build the final SnowflakeConfig
    pub fn build(self) -> SnowflakeConfig {
        SnowflakeConfig::from_builder(self)
    }
}

impl Default for SnowflakeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
