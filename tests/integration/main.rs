//! Integration tests for readalong
//!
//! Run with: cargo test --test integration

mod helpers;

mod cli_test;
mod config_test;
mod sync_test;
