//! Subscriber setup.

use super::exporter::{self, SERVICE_NAME};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use std::path::Path;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// File name of the OTLP trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "folio-otlp.json";

/// Installs the global subscriber: OTLP file export plus warnings on stderr.
///
/// Tracing is optional. If the data directory cannot be created the OTLP layer
/// is skipped, and a second call is a no-op.
///
/// # Example
///
/// ```rust
/// use folio::observability::init_tracing;
/// use folio::Config;
///
/// let dir = tempfile::tempdir()?;
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config, dir.path());
/// tracing::debug!("tracing is now active");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn init_tracing(config: &Config, data_dir: &Path) {
    let level = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(LevelFilter::WARN);

    let otel = match std::fs::create_dir_all(data_dir) {
        Ok(()) => {
            let provider = exporter::create_tracer_provider(data_dir.join(TRACE_FILE_NAME));
            Some(OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME)))
        }
        Err(e) => {
            eprintln!("folio: tracing disabled, cannot create {}: {e}", data_dir.display());
            None
        }
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel)
        .with(stderr)
        .try_init();
}
