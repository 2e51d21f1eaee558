//! Unit test suite entry point.

mod page_wiring_tests;
mod payload_tests;
