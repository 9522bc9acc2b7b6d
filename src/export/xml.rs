//! XML exporter.
//!
//! Rejects payloads containing characters XML 1.0 cannot represent, even
//! escaped, instead of emitting a malformed document.

use super::{ExportError, Exporter, OutputSink};

pub struct XmlExporter {
    sink: OutputSink,
}

impl XmlExporter {
    pub fn new(sink: OutputSink) -> Self {
        Self { sink }
    }
}

impl Exporter for XmlExporter {
    fn name(&self) -> &str {
        "xml"
    }

    fn export(&self, payload: &str) -> Result<(), ExportError> {
        if let Some(bad) = payload.chars().find(|c| !is_xml_char(*c)) {
            return Err(ExportError::unsupported(
                self.name(),
                format!("character U+{:04X} is not allowed in XML", bad as u32),
            ));
        }
        self.sink
            .write_line(&format!("XML export: <report>{}</report>", escape_xml(payload)))
            .map_err(|e| ExportError::io(self.name(), e))
    }
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}')
        || c >= '\u{10000}'
}

pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_is_escaped() {
        let (sink, buffer) = OutputSink::buffer();
        XmlExporter::new(sink).export("R&D <2024>").expect("export");
        assert_eq!(buffer.lines(), vec!["XML export: <report>R&amp;D &lt;2024&gt;</report>"]);
    }

    #[test]
    fn control_characters_are_unsupported() {
        let (sink, buffer) = OutputSink::buffer();
        let err = XmlExporter::new(sink).export("bell\u{7}").expect_err("should reject");
        assert!(matches!(err, ExportError::Unsupported { .. }));
        assert!(err.to_string().contains("U+0007"));
        assert!(buffer.contents().is_empty());
    }

    #[test]
    fn non_bmp_characters_are_allowed() {
        assert!(is_xml_char('\u{1F4C8}'));
        assert!(!is_xml_char('\u{FFFE}'));
    }
}
