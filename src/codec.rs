//! Bit layout of a Snowflake ID
//!
//! ```text
//! | unused (1) | timestamp | data center | machine | sequence |
//! ```
//!
//! Shifts and masks are derived once when the layout is built.

use chrono::{DateTime, Utc};

/// Width of the reserved sign bit
pub const UNUSED_BITS: u8 = 1;

/// Field widths plus the shifts and masks derived from them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitLayout {
    timestamp_bits: u8,
    data_center_bits: u8,
    machine_bits: u8,
    sequence_bits: u8,

    machine_shift: u8,
    data_center_shift: u8,
    timestamp_shift: u8,

    timestamp_mask: u64,
    data_center_mask: u16,
    machine_mask: u16,
    sequence_mask: u16,
}

/// Decoded components of an ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnowflakeParts {
    /// Milliseconds since the generator epoch
    pub timestamp: u64,
    pub data_center_id: u16,
    pub machine_id: u16,
    pub sequence: u16,
}

impl SnowflakeParts {
    /// Absolute timestamp in milliseconds since the UNIX epoch
    #[inline]
    pub const fn unix_millis(&self, epoch: u64) -> u64 {
        self.timestamp + epoch
    }

    /// Creation time as a UTC date, `None` if it is out of chrono's range
    pub fn datetime(&self, epoch: u64) -> Option<DateTime<Utc>> {
        let millis = i64::try_from(self.unix_millis(epoch)).ok()?;
        DateTime::<Utc>::from_timestamp_millis(millis)
    }
}

impl BitLayout {
    pub const DEFAULT_DATA_CENTER_BITS: u8 = 5;
    pub const DEFAULT_MACHINE_BITS: u8 = 5;
    pub const DEFAULT_SEQUENCE_BITS: u8 = 12;

    /// Calculate mask for given number of bits
    #[inline]
    const fn calculate_mask(bits: u8) -> u16 {
        ((1u32 << bits) - 1) as u16
    }

    /// Build a layout; widths are assumed validated by the config builder
    pub(crate) const fn new(data_center_bits: u8, machine_bits: u8, sequence_bits: u8) -> Self {
        let timestamp_bits = 64 - UNUSED_BITS - data_center_bits - machine_bits - sequence_bits;
        let machine_shift = sequence_bits;
        let data_center_shift = sequence_bits + machine_bits;
        let timestamp_shift = data_center_shift + data_center_bits;

        Self {
            timestamp_bits,
            data_center_bits,
            machine_bits,
            sequence_bits,
            machine_shift,
            data_center_shift,
            timestamp_shift,
            timestamp_mask: (1u64 << timestamp_bits) - 1,
            data_center_mask: Self::calculate_mask(data_center_bits),
            machine_mask: Self::calculate_mask(machine_bits),
            sequence_mask: Self::calculate_mask(sequence_bits),
        }
    }

    /// Pack the four fields into an ID. Every argument must fit its width.
    #[inline(always)]
    pub const fn encode(
        &self,
        timestamp: u64,
        data_center_id: u16,
        machine_id: u16,
        sequence: u16,
    ) -> u64 {
        (timestamp << self.timestamp_shift)
            | ((data_center_id as u64) << self.data_center_shift)
            | ((machine_id as u64) << self.machine_shift)
            | (sequence as u64)
    }

    /// Decompose an ID into its components in a single pass
    #[inline]
    pub const fn decode(&self, id: u64) -> SnowflakeParts {
        SnowflakeParts {
            timestamp: self.timestamp(id),
            data_center_id: self.data_center_id(id),
            machine_id: self.machine_id(id),
            sequence: self.sequence(id),
        }
    }

    /// Extract timestamp component from an ID
    #[inline(always)]
    pub const fn timestamp(&self, id: u64) -> u64 {
        (id >> self.timestamp_shift) & self.timestamp_mask
    }

    /// Extract data center component from an ID
    #[inline(always)]
    pub const fn data_center_id(&self, id: u64) -> u16 {
        ((id >> self.data_center_shift) & self.data_center_mask as u64) as u16
    }

    /// Extract machine component from an ID
    #[inline(always)]
    pub const fn machine_id(&self, id: u64) -> u16 {
        ((id >> self.machine_shift) & self.machine_mask as u64) as u16
    }

    /// Extract sequence component from an ID
    #[inline(always)]
    pub const fn sequence(&self, id: u64) -> u16 {
        (id & self.sequence_mask as u64) as u16
    }

    #[inline(always)]
    pub const fn timestamp_bits(&self) -> u8 {
        self.timestamp_bits
    }

    #[inline(always)]
    pub const fn data_center_bits(&self) -> u8 {
        self.data_center_bits
    }

    #[inline(always)]
    pub const fn machine_bits(&self) -> u8 {
        self.machine_bits
    }

    #[inline(always)]
    pub const fn sequence_bits(&self) -> u8 {
        self.sequence_bits
    }

    #[inline(always)]
    pub const fn timestamp_shift(&self) -> u8 {
        self.timestamp_shift
    }

    #[inline(always)]
    pub const fn data_center_shift(&self) -> u8 {
        self.data_center_shift
    }

    #[inline(always)]
    pub const fn machine_shift(&self) -> u8 {
        self.machine_shift
    }

    #[inline(always)]
    pub const fn max_timestamp(&self) -> u64 {
        self.timestamp_mask
    }

    #[inline(always)]
    pub const fn max_data_center_id(&self) -> u16 {
        self.data_center_mask
    }

    #[inline(always)]
    pub const fn max_machine_id(&self) -> u16 {
        self.machine_mask
    }

    #[inline(always)]
    pub const fn max_sequence(&self) -> u16 {
        self.sequence_mask
    }
}

impl Default for BitLayout {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_DATA_CENTER_BITS,
            Self::DEFAULT_MACHINE_BITS,
            Self::DEFAULT_SEQUENCE_BITS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shifts() {
        let layout = BitLayout::default();
        assert_eq!(layout.timestamp_bits(), 41);
        assert_eq!(layout.machine_shift(), 12);
        assert_eq!(layout.data_center_shift(), 17);
        assert_eq!(layout.timestamp_shift(), 22);
    }

    #[test]
    fn test_default_masks() {
        let layout = BitLayout::default();
        assert_eq!(layout.max_timestamp(), (1u64 << 41) - 1);
        assert_eq!(layout.max_data_center_id(), 31);
        assert_eq!(layout.max_machine_id(), 31);
        assert_eq!(layout.max_sequence(), 4095);
    }

    #[test]
    fn test_encode_known_value() {
        let layout = BitLayout::default();
        assert_eq!(layout.encode(100, 1, 1, 0), 419565568);
        assert_eq!(layout.encode(100, 1, 1, 1), 419565569);
    }

    #[test]
    fn test_decode() {
        let layout = BitLayout::default();
        let id = layout.encode(0x1234567, 17, 9, 123);

        assert_eq!(layout.timestamp(id), 0x1234567);
        assert_eq!(layout.data_center_id(id), 17);
        assert_eq!(layout.machine_id(id), 9);
        assert_eq!(layout.sequence(id), 123);

        let parts = layout.decode(id);
        assert_eq!(
            parts,
            SnowflakeParts {
                timestamp: 0x1234567,
                data_center_id: 17,
                machine_id: 9,
                sequence: 123,
            }
        );
    }

    #[test]
    fn test_component_boundaries() {
        let layout = BitLayout::default();
        let id = layout.encode(
            layout.max_timestamp(),
            layout.max_data_center_id(),
            layout.max_machine_id(),
            layout.max_sequence(),
        );

        // Every bit but the sign bit is set
        assert_eq!(id, u64::MAX >> 1);
        let parts = layout.decode(id);
        assert_eq!(parts.timestamp, layout.max_timestamp());
        assert_eq!(parts.data_center_id, 31);
        assert_eq!(parts.machine_id, 31);
        assert_eq!(parts.sequence, 4095);
    }

    #[test]
    fn test_custom_layout() {
        let layout = BitLayout::new(3, 7, 10);
        assert_eq!(layout.timestamp_bits(), 43);
        assert_eq!(layout.machine_shift(), 10);
        assert_eq!(layout.data_center_shift(), 17);
        assert_eq!(layout.timestamp_shift(), 20);

        let id = layout.encode(99, 7, 127, 1023);
        assert_eq!(
            layout.decode(id),
            SnowflakeParts {
                timestamp: 99,
                data_center_id: 7,
                machine_id: 127,
                sequence: 1023,
            }
        );
    }

    #[test]
    fn test_parts_datetime() {
        let parts = SnowflakeParts {
            timestamp: 100,
            data_center_id: 1,
            machine_id: 1,
            sequence: 0,
        };
        let epoch = 1577836800000;
        assert_eq!(parts.unix_millis(epoch), 1577836800100);

        let dt = parts.datetime(epoch).unwrap();
        assert_eq!(
            dt.format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
            "2020-01-01 00:00:00.100"
        );
    }
}
