//! Integration tests for tinct crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between the value types, the conversion engine and the operators.
//! Tests that install a custom range table live in `tests/`, one binary
//! per table, since the registry can be set only once per process.
