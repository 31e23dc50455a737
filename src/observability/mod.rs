//! OpenTelemetry tracing exported to a local JSON file.
//!
//! The terminal owns stdout, so spans and events go to disk instead:
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → JsonFileExporter → dirbrowse-otlp.json
//! ```
//!
//! The file lives in the data directory (`$XDG_DATA_HOME/dirbrowse` or
//! `~/.local/share/dirbrowse`), holds one OTLP JSON document per line, and
//! rotates at 10 MB keeping three backups. Verbosity comes from the
//! `trace_level` option, an `EnvFilter` directive such as `debug` or
//! `dirbrowse=trace`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber installation
//! - [`tracer`]: Tracer provider and file exporter
//! - [`span_formatter`]: OTLP JSON encoding
//! - [`file_writer`]: Rotating line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
