//! JSON output for CLI commands
//!
//! One JSON object per line on stdout.

use std::io::{self, Write};

use serde::Serialize;

use super::errors::CliResult;

/// Write a success response to stdout
pub fn write_response<T: Serialize>(data: &T) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });

    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
