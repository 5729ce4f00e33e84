//! Command implementations for growbuf-cmd

use anyhow::Result;

pub mod append;
pub mod strings;
pub mod timer;

pub fn verify_iterations(iterations: usize) -> Result<()> {
    anyhow::ensure!(iterations > 0, "--iterations must be greater than zero");
    Ok(())
}
