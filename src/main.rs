//! report-export: run every selected exporter over one report payload.

use anyhow::Result;

fn main() -> Result<()> {
    report_export::cli::run()
}
