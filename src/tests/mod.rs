//! Crate-level test suites

pub mod test_utils;

mod clock_tests;
