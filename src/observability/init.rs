//! Tracing subscriber setup.

use super::tracer;
use crate::infrastructure::paths::get_data_dir;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and instrumentation scope name recorded on every span.
pub const SERVICE_NAME: &str = "propview";

/// File name of the OTLP trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "propview-otlp.json";

/// Level used when `trace_level` is unset or not a valid filter directive.
const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber exporting spans to the trace file.
///
/// `config.trace_level` accepts any `EnvFilter` directive (`debug`,
/// `propview::domain=trace`, ...). Observability is optional: if the data
/// directory cannot be created, nothing is installed. Only the first call in
/// a process takes effect.
///
/// ```rust
/// use propview::observability::init_tracing;
/// use propview::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider =
        tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
