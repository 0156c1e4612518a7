//! Behaviour when the clock misbehaves

#[cfg(test)]
mod tests {
    use crate::tests::test_utils::{manual_generator, EPOCH};
    use crate::*;

    #[test]
    fn test_clock_regression_is_refused() {
        let (generator, clock) = manual_generator(100);
        generator.next_id().unwrap();

        clock.set(EPOCH + 90);
        assert_eq!(
            generator.next_id().unwrap_err(),
            SnowflakeError::ClockMovedBackwards { delta: 10 }
        );
    }

    #[test]
    fn test_clock_regression_leaves_state_untouched() {
        let (generator, clock) = manual_generator(100);
        for _ in 0..3 {
            generator.next_id().unwrap();
        }
        let before = generator.snapshot();

        clock.set(EPOCH + 50);
        for _ in 0..5 {
            assert!(generator.next_id().is_err());
        }
        assert_eq!(generator.snapshot(), before);
    }

    #[test]
    fn test_recovers_once_clock_catches_up() {
        let (generator, clock) = manual_generator(100);
        let first = generator.next_id().unwrap();

        clock.set(EPOCH + 99);
        assert!(generator.next_id().is_err());

        // Back at the last issued millisecond: the sequence continues
        clock.set(EPOCH + 100);
        let second = generator.next_id().unwrap();
        assert_eq!(generator.decode(second).sequence, 1);
        assert!(second > first);

        clock.set(EPOCH + 120);
        let third = generator.decode(generator.next_id().unwrap());
        assert_eq!((third.timestamp, third.sequence), (120, 0));
    }

    #[test]
    fn test_clock_before_epoch() {
        let clock = ManualClock::new(EPOCH - 1);
        let cfg = SnowflakeConfig::builder().epoch(EPOCH).build();
        let generator = Snowflake::with_clock(0, 0, cfg, clock.clone()).unwrap();

        assert_eq!(
            generator.next_id().unwrap_err(),
            SnowflakeError::ClockBeforeEpoch {
                now: EPOCH - 1,
                epoch: EPOCH
            }
        );
        assert_eq!(generator.snapshot(), (0, 0));

        clock.set(EPOCH);
        assert_eq!(generator.next_id().unwrap(), 0);
    }

    #[test]
    fn test_timestamp_overflow() {
        let layout = BitLayout::default();
        let clock = ManualClock::new(layout.max_timestamp() + 1);
        let cfg = SnowflakeConfig::builder().epoch(0).build();
        let generator = Snowflake::with_clock(0, 0, cfg, clock).unwrap();

        assert_eq!(
            generator.next_id().unwrap_err(),
            SnowflakeError::TimestampOverflow {
                timestamp: 1 << 41,
                max: (1 << 41) - 1
            }
        );
        assert_eq!(generator.snapshot(), (0, 0));
    }

    #[test]
    fn test_shared_dyn_clock() {
        use std::sync::Arc;

        let manual = ManualClock::new(EPOCH + 7);
        let clock: Arc<dyn Clock> = Arc::new(manual.clone());
        let generator = Snowflake::with_clock(1, 2, SnowflakeConfig::default(), clock).unwrap();

        assert_eq!(generator.decode(generator.next_id().unwrap()).timestamp, 7);
        manual.advance(1);
        assert_eq!(generator.decode(generator.next_id().unwrap()).timestamp, 8);
    }
}
