//! Mutable generator state guarded by the instance mutex

/// The latest issued millisecond and the sequence used within it
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State {
    /// UNIX milliseconds of the latest ID; 0 until the first one is issued
    pub last_timestamp: u64,
    pub sequence: u16,
}

/// What the next ID should carry, decided before the state is touched
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Clock is behind the last issued millisecond by `delta`
    Regressed { delta: u64 },
    /// Same millisecond, next free sequence
    Increment { sequence: u16 },
    /// Same millisecond, sequence space used up
    Exhausted,
    /// Clock moved past the last issued millisecond
    Advanced,
}

impl State {
    /// Classify a clock reading against the current state
    #[inline]
    pub const fn step(&self, now: u64, max_sequence: u16) -> Step {
        if now < self.last_timestamp {
            return Step::Regressed {
                delta: self.last_timestamp - now,
            };
        }
        if now > self.last_timestamp {
            return Step::Advanced;
        }
        let sequence = self.sequence.wrapping_add(1) & max_sequence;
        if sequence == 0 {
            Step::Exhausted
        } else {
            Step::Increment { sequence }
        }
    }

    #[inline(always)]
    pub fn commit(&mut self, timestamp: u64, sequence: u16) {
        self.last_timestamp = timestamp;
        self.sequence = sequence;
    }
}
