//! Core Snowflake generator implementation
//!
//! Split into modules for testability:
//! - `state` - Last issued millisecond and sequence, guarded by one mutex
//! - `wait` - Spin and sleep strategy for sequence exhaustion
//! - `generate` - ID generation logic

mod generate;
mod state;
mod wait;

use parking_lot::Mutex;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::codec::{BitLayout, SnowflakeParts};
use crate::config::SnowflakeConfig;
use crate::error::SnowflakeError;

use state::State;

/// Thread-safe Snowflake ID generator for one `(data_center_id, machine_id)` pair.
///
/// The state and its lock live and die with the value; share it behind an
/// `Arc` to generate from several threads.
#[derive(Debug)]
#[repr(align(64))]
pub struct Snowflake<C = SystemClock> {
    // === Hot path fields ===
    pub(crate) state: Mutex<State>,
    clock: C,
    layout: BitLayout,
    epoch: u64,
    data_center_id: u16,
    machine_id: u16,

    // === Cold path fields ===
    config: SnowflakeConfig,
}

impl Snowflake<SystemClock> {
    /// Create with default configuration
    pub fn new(data_center_id: u16, machine_id: u16) -> Result<Self, SnowflakeError> {
        Self::with_config(data_center_id, machine_id, SnowflakeConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(
        data_center_id: u16,
        machine_id: u16,
        config: SnowflakeConfig,
    ) -> Result<Self, SnowflakeError> {
        Self::with_clock(data_center_id, machine_id, config, SystemClock)
    }
}

impl<C: Clock> Snowflake<C> {
    /// Create with custom configuration and clock source
    pub fn with_clock(
        data_center_id: u16,
        machine_id: u16,
        config: SnowflakeConfig,
        clock: C,
    ) -> Result<Self, SnowflakeError> {
        Self::validate_node(data_center_id, machine_id, &config)?;
        debug!(data_center_id, machine_id, %config, "snowflake generator created");
        Ok(Self {
            state: Mutex::new(State::default()),
            clock,
            layout: *config.layout(),
            epoch: config.epoch(),
            data_center_id,
            machine_id,
            config,
        })
    }

    fn validate_node(
        data_center_id: u16,
        machine_id: u16,
        config: &SnowflakeConfig,
    ) -> Result<(), SnowflakeError> {
        let max = config.max_data_center_id();
        if data_center_id > max {
            return Err(SnowflakeError::InvalidDataCenterId {
                data_center_id,
                max,
            });
        }
        let max = config.max_machine_id();
        if machine_id > max {
            return Err(SnowflakeError::InvalidMachineId { machine_id, max });
        }
        Ok(())
    }

    #[inline(always)]
    pub const fn data_center_id(&self) -> u16 {
        self.data_center_id
    }

    #[inline(always)]
    pub const fn machine_id(&self) -> u16 {
        self.machine_id
    }

    #[inline(always)]
    pub const fn config(&self) -> &SnowflakeConfig {
        &self.config
    }

    #[inline(always)]
    pub const fn layout(&self) -> &BitLayout {
        &self.layout
    }

    #[inline(always)]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Decompose an ID produced by a generator with this configuration
    #[inline]
    pub const fn decode(&self, id: u64) -> SnowflakeParts {
        self.layout.decode(id)
    }

    /// Render an ID as `"<UTC time>, #<sequence>, @(<data center>, <machine>)"`
    pub fn format_id(&self, id: u64) -> String {
        let parts = self.decode(id);
        let time = match parts.datetime(self.epoch) {
            Some(dt) => dt.format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
            None => parts.unix_millis(self.epoch).to_string(),
        };
        format!(
            "{}, #{}, @({}, {})",
            time, parts.sequence, parts.data_center_id, parts.machine_id
        )
    }

    /// Snapshot of `(last_timestamp, sequence)`
    #[allow(dead_code)] // Used in clock_tests.rs
    pub(crate) fn snapshot(&self) -> (u64, u16) {
        let state = self.state.lock();
        (state.last_timestamp, state.sequence)
    }
}
