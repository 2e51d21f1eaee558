//! Integration test suite entry point. Exercises the CLI binary.

mod cli_tests;
