//! CLI command implementations

pub mod account_types;
pub mod logs;
pub mod session;

use std::path::PathBuf;

use anyhow::{Context, Result};
use bingham_core::BankContext;

/// Get the bank directory from environment or default
pub fn get_bank_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("BINGHAM_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".bingham"))
        .context("Could not find home directory; set BINGHAM_DIR")
}

/// Create a fresh banking context for this process
pub fn get_context() -> Result<BankContext> {
    let bank_dir = get_bank_dir()?;
    BankContext::new(&bank_dir, env!("CARGO_PKG_VERSION"))
        .context("Failed to initialize bank context")
}
