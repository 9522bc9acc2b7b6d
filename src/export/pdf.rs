//! PDF-style report line.

use super::{ExportError, Exporter, OutputSink};

pub struct PdfExporter {
    sink: OutputSink,
}

impl PdfExporter {
    pub fn new(sink: OutputSink) -> Self {
        Self { sink }
    }
}

impl Exporter for PdfExporter {
    fn name(&self) -> &str {
        "pdf"
    }

    fn export(&self, payload: &str) -> Result<(), ExportError> {
        self.sink
            .write_line(&format!("PDF export: {payload}"))
            .map_err(|e| ExportError::io(self.name(), e))
    }
}
