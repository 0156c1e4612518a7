//! # snowflake-gen
//!
//! A Rust implementation of the Twitter Snowflake ID generator.
//!
//! Generate 64-bit unique identifiers that are:
//! - 📈 Time-sorted (k-sortable across hosts)
//! - 🔄 Strictly increasing per generator
//! - 🔒 Thread-safe
//! - 🌐 Distributed-ready, with no coordination between nodes
//!
//! ```text
//! | 0 | 41 bits timestamp | 5 bits data center | 5 bits machine | 12 bits sequence |
//! ```
//!
//! ```
//! use snowflake_gen::Snowflake;
//!
//! let generator = Snowflake::new(1, 1).unwrap();
//! let id = generator.next_id().unwrap();
//! let parts = generator.decode(id);
//! assert_eq!((parts.data_center_id, parts.machine_id), (1, 1));
//! ```

#![forbid(unsafe_code)]

pub mod clock;
mod codec;
mod config;
mod error;
mod generator;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use clock::{Clock, ManualClock, SystemClock};
pub use codec::{BitLayout, SnowflakeParts, UNUSED_BITS};
pub use config::{ConfigError, SnowflakeConfig, SnowflakeConfigBuilder};
pub use error::SnowflakeError;
pub use generator::Snowflake;
