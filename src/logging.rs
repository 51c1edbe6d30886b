//! Logging context for a run.
//!
//! [`Logging::init`] installs a `tracing` subscriber with two outputs:
//! - the console (stderr), INFO and above
//! - an append-only log file, DEBUG and above (overridable with `RUST_LOG`)
//!
//! Lines carry timestamp, severity, target and message. The subscriber is the
//! default only while the returned [`Logging`] value is alive; nothing is
//! installed globally.
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, filter::LevelFilter, fmt};

use crate::error::Result;

const DEFAULT_FILE_LEVEL: &str = "debug";

/// Local wall-clock timestamps with millisecond precision.
struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

pub struct Logging {
    path: PathBuf,
    _guard: DefaultGuard,
}

impl Logging {
    /// Open (or create) the log file at `path` and start logging to it and to
    /// the console. Call once at startup and keep the value alive for the run.
    pub fn init(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        let file_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILE_LEVEL));

        let guard = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_timer(LocalTimer)
                    .with_filter(LevelFilter::INFO),
            )
            .with(
                fmt::layer()
                    .with_writer(Arc::new(file))
                    .with_ansi(false)
                    .with_timer(LocalTimer)
                    .with_filter(file_filter),
            )
            .set_default();

        Ok(Self {
            path,
            _guard: guard,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
