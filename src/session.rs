//! Open/close lifecycle of the image handle and command dispatch.

use std::fs::File;
use std::io;
use std::io::prelude::*;

use log::{debug, error, warn};

use crate::bpb::BiosParameterBlock;
use crate::cmdline::CommandLine;
use crate::error::{Error, Result};

/// Owns at most one open image handle.
///
/// The handle exists exactly while the session is open; `close` and drop
/// both release it.
#[derive(Debug, Default)]
pub struct Session {
    image: Option<File>,
}

impl Session {
    pub fn new() -> Self {
        Session { image: None }
    }

    pub fn is_open(&self) -> bool {
        self.image.is_some()
    }

    /// Opens `path` read-only. Refused while an image is already open;
    /// any failure to open the path, including an absent path token,
    /// reports the image as not found.
    pub fn open(&mut self, path: Option<&str>) -> Result<()> {
        if self.image.is_some() {
            return Err(Error::AlreadyOpen);
        }
        let path = path.ok_or(Error::NotFound)?;
        match File::open(path) {
            Ok(file) => {
                self.image = Some(file);
                Ok(())
            }
            Err(e) => {
                warn!("open {}: {}", path, e);
                Err(Error::NotFound)
            }
        }
    }

    /// Releases the handle. A no-op when nothing is open.
    pub fn close(&mut self) {
        self.image = None;
    }

    /// Reads the boot parameter block from the open image and writes
    /// the report to `out`. The session is left unchanged either way.
    pub fn info<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let image = self.image.as_mut().ok_or(Error::NotOpen)?;
        let bpb = BiosParameterBlock::read(image)?;
        bpb.write_report(out)?;
        Ok(())
    }

    /// Dispatches one tokenized line.
    ///
    /// `open` is recognized in any state; everything else first requires
    /// an open image, and unrecognized input on an open image is ignored
    /// without comment. Command failures print a single `Error:` line to
    /// `out`; only a failure to write to `out` itself propagates.
    pub fn dispatch<W: Write>(&mut self, cmd: &CommandLine<'_>, out: &mut W) -> io::Result<()> {
        if cmd.arg(0) == Some("open") {
            if let Err(e) = self.open(cmd.arg(1)) {
                writeln!(out, "Error: {}", e)?;
            }
        } else if !self.is_open() {
            writeln!(out, "Error: {}", Error::NotOpen)?;
        } else if cmd.arg(0) == Some("close") {
            self.close();
        } else if cmd.arg(0) == Some("info") {
            if let Err(e) = self.info(out) {
                error!("info: {}", e);
                writeln!(out, "Error: {}", e)?;
            }
        } else {
            debug!("ignoring input: {:?}", cmd.arg(0));
        }
        Ok(())
    }
}
