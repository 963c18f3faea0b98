//! Unit tests for `compsel_parser`.

mod number_tests;

mod behaviour;
