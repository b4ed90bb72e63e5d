//! CLI command implementations.

pub mod contracts;
pub mod endpoints;

use std::io::Write;

/// Write one block of command output to stdout.
fn emit(text: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{text}")
}
