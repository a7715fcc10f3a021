//! Diagnostic logging setup

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{
    EnvFilter, fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Where diagnostic logs are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogOutput {
    Stderr,
    File(PathBuf),
    Off,
}

impl LogOutput {
    /// Pick a destination for a run mode
    ///
    /// A log file always wins. Without one, full-screen mode logs nothing, since
    /// stderr would draw over the terminal UI.
    #[must_use]
    pub fn for_mode(full_screen: bool, log_file: Option<PathBuf>) -> Self {
        match log_file {
            Some(path) => Self::File(path),
            None if full_screen => Self::Off,
            None => Self::Stderr,
        }
    }
}

/// Install the global `tracing` subscriber
///
/// Filtering follows `RUST_LOG` and defaults to `warn`. Stderr output never mixes
/// with game output on stdout.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init(output: &LogOutput) -> io::Result<()> {
    let (writer, ansi) = match output {
        LogOutput::Stderr => (BoxMakeWriter::new(io::stderr), true),
        LogOutput::File(path) => (BoxMakeWriter::new(Mutex::new(File::create(path)?)), false),
        LogOutput::Off => (BoxMakeWriter::new(io::sink), false),
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(ansi)
                .with_target(false),
        )
        .try_init()
        .ok();

    Ok(())
}
