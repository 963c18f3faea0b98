//! Unit tests for `compsel_core` types.

mod diagnostic_tests;
