use thiserror::Error;

/// Represents errors that can occur while constructing a generator or producing IDs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnowflakeError {
    /// Data center ID does not fit the configured data center bits
    #[error("Data center ID {data_center_id} is invalid. Maximum allowed value is {max}")]
    InvalidDataCenterId { data_center_id: u16, max: u16 },
    /// Machine ID does not fit the configured machine bits
    #[error("Machine ID {machine_id} is invalid. Maximum allowed value is {max}")]
    InvalidMachineId { machine_id: u16, max: u16 },
    /// Error when clock moves backwards (system time issue)
    #[error("Clock moved backwards. Refusing to generate id for {delta} milliseconds")]
    ClockMovedBackwards { delta: u64 },
    /// Clock reads a time before the configured epoch
    #[error("Clock reads {now} which is before the epoch {epoch}. Refusing to generate id")]
    ClockBeforeEpoch { now: u64, epoch: u64 },
    /// Elapsed time since the epoch no longer fits the timestamp field
    #[error("Timestamp {timestamp} exceeds the maximum encodable value {max}")]
    TimestampOverflow { timestamp: u64, max: u64 },
}
