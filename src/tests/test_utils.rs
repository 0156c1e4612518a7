//! Shared test utilities for Snowflake tests

use std::collections::HashSet;

use crate::{ManualClock, Snowflake, SnowflakeConfig};

/// January 1, 2020 UTC, the default epoch
pub const EPOCH: u64 = 1577836800000;

/// Generator at `(1, 1)` driven by a manual clock frozen at `EPOCH + offset`
pub fn manual_generator(offset: u64) -> (Snowflake<ManualClock>, ManualClock) {
    let clock = ManualClock::new(EPOCH + offset);
    let config = SnowflakeConfig::builder().epoch(EPOCH).build();
    let generator = Snowflake::with_clock(1, 1, config, clock.clone()).unwrap();
    (generator, clock)
}

/// Assert that all IDs in the collection are unique
pub fn assert_unique_ids(ids: &[u64], expected_count: usize) {
    let set: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(
        set.len(),
        expected_count,
        "Expected {} unique IDs, but got {} (duplicates detected)",
        expected_count,
        set.len()
    );
}

/// Assert that IDs are strictly increasing in the order given
pub fn assert_strictly_increasing(ids: &[u64]) {
    for i in 1..ids.len() {
        assert!(
            ids[i] > ids[i - 1],
            "ID at position {} ({}) is not greater than previous ID ({})",
            i,
            ids[i],
            ids[i - 1]
        );
    }
}

/// Assert collection has expected unique count and is strictly increasing once sorted
pub fn assert_unique_and_monotonic(mut ids: Vec<u64>, expected_count: usize) {
    assert_unique_ids(&ids, expected_count);
    ids.sort_unstable();
    assert_strictly_increasing(&ids);
}
