//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! - Traces are written to `~/.local/share/zellij/propview/propview-otlp.json`
//! - The file rotates at 10 MB, keeping 3 timestamped backups
//! - Each line is one OTLP JSON `resourceSpans` document
//! - The level comes from the `trace_level` plugin option (default `info`)
//!
//! # Modules
//!
//! - [`init`]: subscriber setup
//! - [`tracer`]: tracer provider with the file exporter
//! - [`span_formatter`]: OTLP JSON encoding
//! - [`file_writer`]: rotating file writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use file_writer::{RotationPolicy, DEFAULT_MAX_BACKUPS, DEFAULT_MAX_BYTES};
pub use init::{init_tracing, SERVICE_NAME, TRACE_FILE_NAME};
