//! JSON exporter.

use super::{ExportError, Exporter, OutputSink};
use serde::Serialize;

#[derive(Serialize)]
struct JsonRecord<'a> {
    format: &'static str,
    payload: &'a str,
}

pub struct JsonExporter {
    sink: OutputSink,
}

impl JsonExporter {
    pub fn new(sink: OutputSink) -> Self {
        Self { sink }
    }
}

impl Exporter for JsonExporter {
    fn name(&self) -> &str {
        "json"
    }

    fn export(&self, payload: &str) -> Result<(), ExportError> {
        let record = JsonRecord { format: "json", payload };
        let line = serde_json::to_string(&record).map_err(|source| ExportError::Serialize {
            exporter: self.name().to_string(),
            source,
        })?;
        self.sink
            .write_line(&format!("JSON export: {line}"))
            .map_err(|e| ExportError::io(self.name(), e))
    }
}
