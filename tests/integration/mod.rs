//! Integration tests for the console core.

pub mod common;
pub mod filter_test;
pub mod registry_test;
