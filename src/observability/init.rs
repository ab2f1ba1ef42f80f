//! Subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the live trace file inside the trace directory.
pub const TRACE_FILE_NAME: &str = "docket-otlp.json";

const SERVICE_NAME: &str = "docket";

/// Installs the global tracing subscriber.
///
/// Spans pass through an [`EnvFilter`] built from `config.trace_level`
/// (default `info`) and are exported to [`TRACE_FILE_NAME`] in
/// `config.trace_dir`, or the platform data directory when unset.
///
/// Tracing is optional: if the directory cannot be created, nothing is
/// installed. Only the first successful call in a process takes effect.
///
/// # Example
///
/// ```rust
/// use docket::observability::init_tracing;
/// use docket::Config;
///
/// let dir = std::env::temp_dir().join("docket-doc-traces");
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     trace_dir: Some(dir),
///     ..Config::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");
    let dir = config
        .trace_dir
        .clone()
        .unwrap_or_else(crate::infrastructure::get_data_dir);

    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);
    let provider = tracer::create_tracer_provider(dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_trace_directory() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("nested").join("traces");
        let config = Config {
            trace_dir: Some(dir.clone()),
            ..Config::default()
        };

        init_tracing(&config);
        init_tracing(&config);

        assert!(dir.is_dir());
    }
}
