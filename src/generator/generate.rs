//! ID generation logic

use tracing::{trace, warn};

use super::state::Step;
use super::wait::wait_next_millis;
use super::Snowflake;
use crate::clock::Clock;
use crate::error::SnowflakeError;

impl<C: Clock> Snowflake<C> {
    /// Generate a new ID.
    ///
    /// Calls on one instance serialize on its lock and return strictly
    /// increasing values while the clock does not go backwards. When the
    /// sequence for the current millisecond is used up, the call blocks with
    /// the lock held until the clock reads a later millisecond.
    ///
    /// # Errors
    /// - [`SnowflakeError::ClockMovedBackwards`] if the clock reads earlier
    ///   than the last issued millisecond
    /// - [`SnowflakeError::ClockBeforeEpoch`] if the clock reads earlier than
    ///   the configured epoch
    /// - [`SnowflakeError::TimestampOverflow`] once the elapsed time no longer
    ///   fits the timestamp field
    ///
    /// On error the generator state is left unchanged.
    pub fn next_id(&self) -> Result<u64, SnowflakeError> {
        let mut state = self.state.lock();
        let now = self.clock.now_millis();

        let (timestamp, sequence) = match state.step(now, self.layout.max_sequence()) {
            Step::Regressed { delta } => {
                warn!(
                    delta,
                    last_timestamp = state.last_timestamp,
                    "clock moved backwards"
                );
                return Err(SnowflakeError::ClockMovedBackwards { delta });
            }
            Step::Increment { sequence } => (now, sequence),
            Step::Exhausted => {
                trace!(
                    last_timestamp = state.last_timestamp,
                    "sequence exhausted, waiting for next millisecond"
                );
                let next = wait_next_millis(state.last_timestamp, &self.config, || {
                    self.clock.now_millis()
                });
                (next, 0)
            }
            Step::Advanced => (now, 0),
        };

        let offset = self.offset(timestamp)?;
        state.commit(timestamp, sequence);

        Ok(self
            .layout
            .encode(offset, self.data_center_id, self.machine_id, sequence))
    }

    /// Milliseconds since the epoch, checked against the timestamp width
    #[inline]
    fn offset(&self, timestamp: u64) -> Result<u64, SnowflakeError> {
        let Some(offset) = timestamp.checked_sub(self.epoch) else {
            warn!(now = timestamp, epoch = self.epoch, "clock reads before epoch");
            return Err(SnowflakeError::ClockBeforeEpoch {
                now: timestamp,
                epoch: self.epoch,
            });
        };

        let max = self.layout.max_timestamp();
        if offset > max {
            warn!(timestamp = offset, max, "timestamp space exhausted");
            return Err(SnowflakeError::TimestampOverflow {
                timestamp: offset,
                max,
            });
        }

        Ok(offset)
    }
}
