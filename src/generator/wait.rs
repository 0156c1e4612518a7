//! Wait strategy for sequence exhaustion
//!
//! Spins briefly, then sleeps between polls until the clock moves strictly
//! past the exhausted millisecond. There is no upper bound: a clock that never
//! advances keeps the caller here.

use std::thread;
use std::time::Duration;

use crate::config::SnowflakeConfig;

/// Perform spin-wait loop, checking for timestamp advancement
///
/// Returns Some(new_ts) if timestamp advanced, None if spin loops exhausted
#[inline]
pub fn spin_wait<F>(from_timestamp: u64, config: &SnowflakeConfig, get_time: F) -> Option<u64>
where
    F: Fn() -> u64,
{
    if !config.spin_enabled() || config.spin_loops() == 0 {
        return None;
    }

    let yield_every = config.spin_yield_every();

    for i in 0..config.spin_loops() {
        let new_ts = get_time();
        if new_ts > from_timestamp {
            return Some(new_ts);
        }

        std::hint::spin_loop();

        if yield_every != 0 && i % yield_every == yield_every - 1 {
            thread::yield_now();
        }
    }

    None
}

/// Sleep `interval` between polls, returning the first reading past `from_timestamp`
#[inline]
pub fn sleep_until_next_ms<F>(from_timestamp: u64, interval: Duration, get_time: F) -> u64
where
    F: Fn() -> u64,
{
    loop {
        let new_ts = get_time();
        if new_ts > from_timestamp {
            return new_ts;
        }
        if interval.is_zero() {
            thread::yield_now();
        } else {
            thread::sleep(interval);
        }
    }
}

/// Block until `get_time` reads strictly later than `from_timestamp`
pub fn wait_next_millis<F>(from_timestamp: u64, config: &SnowflakeConfig, get_time: F) -> u64
where
    F: Fn() -> u64,
{
    if let Some(new_ts) = spin_wait(from_timestamp, config, &get_time) {
        return new_ts;
    }
    sleep_until_next_ms(from_timestamp, config.poll_interval(), get_time)
}
