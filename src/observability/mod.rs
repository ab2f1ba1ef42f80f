//! OpenTelemetry tracing with file export.
//!
//! Everything in the crate logs through `tracing`. When the host calls
//! [`init_tracing`], spans are exported as OTLP-JSON lines to a size-rotated
//! file, so a session can be inspected offline with any OTLP viewer:
//!
//! ```text
//! tracing → tracing-opentelemetry → opentelemetry_sdk → FileSpanExporter → docket-otlp.json
//! ```
//!
//! The filter honours `Config::trace_level` (default `info`); the file lives
//! in `Config::trace_dir` or the platform data directory.

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
