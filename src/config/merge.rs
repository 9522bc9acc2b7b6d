//! Apply CLI overrides on top of file configuration.

use crate::domain::{Config, ExportFormat, FailurePolicy};

#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub formats: Option<Vec<ExportFormat>>,
    pub failure_policy: Option<FailurePolicy>,
    pub payload: Option<String>,
}

pub fn merge_cli_with_config(mut config: Config, overrides: CliOverrides) -> Config {
    if let Some(formats) = overrides.formats {
        config.formats = formats;
    }
    if let Some(policy) = overrides.failure_policy {
        config.failure_policy = policy;
    }
    if overrides.payload.is_some() {
        config.payload = overrides.payload;
    }
    config
}
