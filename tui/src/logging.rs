//! Log setup
//!
//! Logs go to the configured file when there is one. Otherwise they go to
//! stderr, which shares the screen with the grid and has to be muted while
//! the alternate screen is up.

use std::fs::File;
use std::io;
use std::sync::Mutex;

use anyhow::Context;
use chroma_life_core::SimulationConfig;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{reload, EnvFilter, Registry};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_DIRECTIVES: &str = "error";

type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Switch for log output that shares the terminal with the grid
pub struct StderrGate {
    handle: Option<FilterHandle>,
    directives: String,
}

impl StderrGate {
    /// Drop every event until [`unmute`](Self::unmute)
    pub fn mute(&self) {
        self.apply(EnvFilter::new("off"));
    }

    /// Go back to the configured filter
    pub fn unmute(&self) {
        self.apply(EnvFilter::new(&self.directives));
    }

    /// False when logs go to a file and never need muting
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    fn apply(&self, filter: EnvFilter) {
        if let Some(handle) = &self.handle {
            // Only fails once the subscriber is gone, and then nothing logs.
            let _ = handle.reload(filter);
        }
    }
}

/// Subscriber writing to `writer` through a filter the returned gate controls
pub fn gated_subscriber<W>(
    directives: &str,
    writer: W,
) -> (impl tracing::Subscriber + Send + Sync + 'static, StderrGate)
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(EnvFilter::new(directives));
    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(writer),
    );
    let gate = StderrGate {
        handle: Some(handle),
        directives: directives.to_string(),
    };
    (subscriber, gate)
}

/// Install the global subscriber for `config`
///
/// # Errors
///
/// Fails if the log file cannot be created or a subscriber is already set.
pub fn init(config: &SimulationConfig) -> anyhow::Result<StderrGate> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV)
        .unwrap_or_else(|_| DEFAULT_DIRECTIVES.to_string());

    match &config.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let subscriber = tracing_subscriber::registry()
                .with(EnvFilter::new(&directives))
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                );
            tracing::subscriber::set_global_default(subscriber)
                .context("Failed to install logger")?;
            Ok(StderrGate {
                handle: None,
                directives,
            })
        }
        None => {
            let (subscriber, gate) = gated_subscriber(&directives, io::stderr);
            tracing::subscriber::set_global_default(subscriber)
                .context("Failed to install logger")?;
            Ok(gate)
        }
    }
}
