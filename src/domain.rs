//! Core domain types shared by the registry, config and CLI.

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// Output formats with a built-in exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Pdf,
    Csv,
    Xml,
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] =
        [ExportFormat::Pdf, ExportFormat::Csv, ExportFormat::Xml, ExportFormat::Json];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Csv => "csv",
            ExportFormat::Xml => "xml",
            ExportFormat::Json => "json",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "PDF-style report line",
            ExportFormat::Csv => "single CSV field, quoted when needed",
            ExportFormat::Xml => "<report> element with escaped text",
            ExportFormat::Json => "JSON object with format and payload keys",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "csv" => Ok(ExportFormat::Csv),
            "xml" => Ok(ExportFormat::Xml),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!(
                "Unknown export format '{}' (expected one of: pdf, csv, xml, json)",
                other
            )),
        }
    }
}

impl<'de> Deserialize<'de> for ExportFormat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// What `generate` does after a handler fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first failure; later handlers are not invoked.
    #[default]
    FailFast,
    /// Invoke every handler and report all failures afterwards.
    Continue,
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail-fast" | "fail_fast" | "failfast" => Ok(FailurePolicy::FailFast),
            "continue" => Ok(FailurePolicy::Continue),
            other => Err(format!(
                "Invalid failure policy '{}' (expected fail-fast or continue)",
                other
            )),
        }
    }
}

impl<'de> Deserialize<'de> for FailurePolicy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(deserialize_with = "deserialize_formats")]
    pub formats: Vec<ExportFormat>,
    pub failure_policy: FailurePolicy,
    pub payload: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            formats: vec![ExportFormat::Pdf, ExportFormat::Csv],
            failure_policy: FailurePolicy::FailFast,
            payload: None,
        }
    }
}

/// Accepts either a list (`["pdf", "csv"]`) or a comma-separated string (`"pdf, csv"`).
fn deserialize_formats<'de, D>(deserializer: D) -> Result<Vec<ExportFormat>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum FormatList {
        Csv(String),
        List(Vec<String>),
    }

    let parts = match FormatList::deserialize(deserializer)? {
        FormatList::Csv(s) => s.split(',').map(str::to_string).collect::<Vec<_>>(),
        FormatList::List(list) => list,
    };

    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .map(|part| part.parse().map_err(serde::de::Error::custom))
        .collect()
}
