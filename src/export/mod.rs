//! Exporters: the output-format handlers applied by the registry.

pub mod csv;
pub mod json;
pub mod pdf;
pub mod sink;
pub mod xml;

use crate::domain::ExportFormat;
use std::io;
use std::rc::Rc;
use std::sync::Arc;
use thiserror::Error;

pub use csv::CsvExporter;
pub use json::JsonExporter;
pub use pdf::PdfExporter;
pub use sink::{OutputSink, SharedBuffer};
pub use xml::XmlExporter;

/// A handler that refused or failed to export a payload.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("{exporter} exporter cannot handle payload: {reason}")]
    Unsupported { exporter: String, reason: String },

    #[error("{exporter} exporter failed writing output: {source}")]
    Io {
        exporter: String,
        #[source]
        source: io::Error,
    },

    #[error("{exporter} exporter failed to serialize payload: {source}")]
    Serialize {
        exporter: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ExportError {
    pub fn unsupported(exporter: &str, reason: impl Into<String>) -> Self {
        ExportError::Unsupported { exporter: exporter.to_string(), reason: reason.into() }
    }

    pub fn io(exporter: &str, source: io::Error) -> Self {
        ExportError::Io { exporter: exporter.to_string(), source }
    }
}

/// One output format. Implementations must not retain or alter the payload.
pub trait Exporter {
    fn name(&self) -> &str;
    fn export(&self, payload: &str) -> Result<(), ExportError>;
}

impl<E: Exporter + ?Sized> Exporter for Rc<E> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn export(&self, payload: &str) -> Result<(), ExportError> {
        (**self).export(payload)
    }
}

impl<E: Exporter + ?Sized> Exporter for Arc<E> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn export(&self, payload: &str) -> Result<(), ExportError> {
        (**self).export(payload)
    }
}

pub fn build_exporter(format: ExportFormat, sink: OutputSink) -> Box<dyn Exporter> {
    match format {
        ExportFormat::Pdf => Box::new(PdfExporter::new(sink)),
        ExportFormat::Csv => Box::new(CsvExporter::new(sink)),
        ExportFormat::Xml => Box::new(XmlExporter::new(sink)),
        ExportFormat::Json => Box::new(JsonExporter::new(sink)),
    }
}
