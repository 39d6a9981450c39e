//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - The CLI binary under test
//! - Catalog directory and config fixtures

pub mod fixtures;

use assert_cmd::Command;

/// Helper to get the tweak-catalog binary command
#[allow(dead_code)]
pub fn get_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tweak-catalog"));
    cmd.env("NO_EMOJI", "1").env_remove("RUST_LOG");
    cmd
}
