//! CSV exporter: the payload as a single RFC 4180 field.

use super::{ExportError, Exporter, OutputSink};

pub struct CsvExporter {
    sink: OutputSink,
}

impl CsvExporter {
    pub fn new(sink: OutputSink) -> Self {
        Self { sink }
    }
}

impl Exporter for CsvExporter {
    fn name(&self) -> &str {
        "csv"
    }

    fn export(&self, payload: &str) -> Result<(), ExportError> {
        self.sink
            .write_line(&format!("CSV export: {}", csv_field(payload)))
            .map_err(|e| ExportError::io(self.name(), e))
    }
}

pub fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
