//! Generate command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::io::Read;
use std::path::PathBuf;

use super::utils::{parse_formats, trim_line_ending};
use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::FailurePolicy;
use crate::export::{build_exporter, OutputSink};
use crate::registry::ReportService;

#[derive(Args)]
pub struct GenerateArgs {
    /// Report payload ('-' reads stdin; omitted falls back to config, then stdin)
    #[arg(value_name = "PAYLOAD")]
    pub payload: Option<String>,

    /// Output formats in run order (comma-separated, e.g., 'pdf,csv')
    #[arg(short = 'f', long, value_name = "FORMATS")]
    pub format: Option<String>,

    /// Path to config file (report-export.toml or .report-export.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Keep running later exporters after one fails
    #[arg(long, conflicts_with = "fail_fast")]
    pub continue_on_error: bool,

    /// Stop at the first failing exporter, even if the config says to continue
    #[arg(long)]
    pub fail_fast: bool,

    /// Write exporter output to this file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed resolving current directory")?;
    let file_config = load_config(&cwd, args.config.as_deref())?;

    let stdin_requested = args.payload.as_deref() == Some("-");
    let overrides = CliOverrides {
        formats: parse_formats(args.format.as_deref())?,
        failure_policy: cli_failure_policy(args.continue_on_error, args.fail_fast),
        payload: args.payload.filter(|p| p != "-"),
    };
    let config = merge_cli_with_config(file_config, overrides);

    let payload = match config.payload {
        Some(payload) if !stdin_requested => payload,
        _ => read_stdin_payload()?,
    };

    let sink = match &args.output {
        Some(path) => OutputSink::file(path)?,
        None => OutputSink::stdout(),
    };

    let mut service = ReportService::with_policy(config.failure_policy);
    for format in &config.formats {
        service.register_boxed(build_exporter(*format, sink.clone()));
    }
    if service.is_empty() {
        tracing::warn!("No export formats selected; nothing will be written");
    }
    tracing::info!(
        exporters = ?service.exporter_names(),
        policy = ?service.policy(),
        payload_bytes = payload.len(),
        "Generating report"
    );

    let result = service.generate(&payload);
    sink.flush().context("Failed flushing exporter output")?;
    result?;

    if let Some(path) = &args.output {
        tracing::info!("Wrote report to {}", path.display());
    }
    Ok(())
}

fn cli_failure_policy(continue_on_error: bool, fail_fast: bool) -> Option<FailurePolicy> {
    match (continue_on_error, fail_fast) {
        (true, _) => Some(FailurePolicy::Continue),
        (_, true) => Some(FailurePolicy::FailFast),
        _ => None,
    }
}

fn read_stdin_payload() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf).context("Failed reading payload from stdin")?;
    Ok(trim_line_ending(buf))
}
