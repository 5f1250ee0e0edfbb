//! OpenTelemetry tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK (simple processor)
//!     → FileSpanExporter → <data_dir>/folio-otlp.json (+ .1 .2 .3)
//! ```
//!
//! Warnings and errors are also echoed to stderr so CLI users see them.
//!
//! # Level Resolution
//!
//! 1. `RUST_LOG`
//! 2. `trace_level` from the config file or `--trace-level`
//! 3. `"info"`
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `exporter`: `SpanExporter` writing to the trace file
//! - `span_formatter`: OTLP JSON serialization
//! - `file_writer`: Size-based rotation

mod exporter;
mod file_writer;
mod init;
mod span_formatter;

pub use exporter::SERVICE_NAME;
pub use init::{init_tracing, TRACE_FILE_NAME};
