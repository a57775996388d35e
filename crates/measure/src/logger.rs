//! Log handles passed to each measurement procedure.
//!
//! Each handle is bound to the procedure that owns it, so every record can be
//! attributed to the raw path or the typed client path.
use std::fmt::Display;

use log::Level;

/// Which procedure produced a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Source {
    Raw,
    Eth2Client,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Raw => "raw",
            Source::Eth2Client => "eth2Client",
        }
    }
}

impl Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait ProbeLog {
    fn log(&self, level: Level, message: &str);

    fn info(&self, message: &str) {
        self.log(Level::Info, message)
    }

    fn debug(&self, message: &str) {
        self.log(Level::Debug, message)
    }

    fn error(&self, message: &str) {
        self.log(Level::Error, message)
    }
}

impl<T: ProbeLog + ?Sized> ProbeLog for &T {
    fn log(&self, level: Level, message: &str) {
        (**self).log(level, message)
    }
}

/// Forwards to the `log` facade with the source as the log target
/// (e.g., `RUST_LOG=eth2Client=debug`).
#[derive(Clone, Copy, Debug)]
pub struct SourceLogger {
    source: Source,
}

impl SourceLogger {
    pub fn new(source: Source) -> Self {
        SourceLogger { source }
    }
}

impl ProbeLog for SourceLogger {
    fn log(&self, level: Level, message: &str) {
        log::log!(target: self.source.as_str(), level, "{message}");
    }
}
