//! Interactive shell.
//!
//! Reads one command per line, prints the reply, and stops after `exit` or
//! at end of input.

use crate::commands::Session;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Marker printed before every input line.
pub const PROMPT: &str = ">>> ";

/// Run `session` over `input` until it exits or the input ends.
///
/// Reaching end of input saves the session like `exit` does, without the
/// farewell.
///
/// # Errors
///
/// Returns an error if reading or writing the terminal fails, or if a
/// command fails for a reason other than bad input.
pub fn run<R, W>(session: &mut Session, mut input: R, mut output: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut buf = Vec::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buf.clear();
        let read = match input.read_until(b'\n', &mut buf) {
            Ok(read) => read,
            Err(err) => {
                tracing::error!(error = %err, "Reading input failed, saving before closing");
                session.save()?;
                return Err(err).context("Failed to read input");
            }
        };
        if read == 0 {
            tracing::info!("End of input, closing session");
            writeln!(output)?;
            session.save()?;
            return Ok(());
        }

        // Undecodable bytes become U+FFFD and the line is handled as usual
        let line = String::from_utf8_lossy(&buf);
        let response = session.execute(line.trim_end_matches(['\r', '\n']))?;
        writeln!(output, "{}", response.text)?;

        if response.exit {
            tracing::info!("Session closed by exit command");
            return Ok(());
        }
    }
}
