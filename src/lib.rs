//! report-export: apply a pluggable set of output-format exporters to a report payload
//!
//! [`ReportService`] holds exporters in registration order and runs all of
//! them on one payload. New formats are added by implementing [`Exporter`];
//! the registry itself never changes.

pub mod cli;
pub mod config;
pub mod domain;
pub mod export;
pub mod registry;

pub use config::load_config;
pub use domain::{Config, ExportFormat, FailurePolicy};
pub use export::{build_exporter, ExportError, Exporter, OutputSink};
pub use registry::{GenerateError, HandlerFailure, ReportService};
