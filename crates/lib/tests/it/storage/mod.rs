//! Storage strategy integration tests
//!
//! Each test drives a strategy through a full map round trip rather than
//! calling the strategy directly.

mod strategy_tests;
