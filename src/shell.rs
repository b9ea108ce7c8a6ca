//! The interactive read-dispatch loop.

use std::io;
use std::io::prelude::*;

use log::warn;

use crate::cmdline::CommandLine;
use crate::session::Session;

pub const PROMPT: &str = "msh> ";

// Longest accepted input line. Anything past this many bytes before the
// newline stays in the stream and is read as the next command.
const MAX_COMMAND_SIZE: u64 = 254;

/// Runs the shell until `input` is exhausted.
///
/// Command errors are printed and the loop keeps going; only an
/// unreadable input stream or an unwritable output stream ends it early.
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    let mut session = Session::new();
    let mut line = String::new();
    loop {
        output.write_all(PROMPT.as_bytes())?;
        output.flush()?;

        line.clear();
        match input.by_ref().take(MAX_COMMAND_SIZE).read_line(&mut line) {
            Ok(0) => return Ok(()),
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                warn!("discarding non-UTF-8 input: {}", e);
                continue;
            }
            Err(e) => return Err(e),
        }

        let cmd = CommandLine::parse(&line);
        session.dispatch(&cmd, &mut output)?;
    }
}
