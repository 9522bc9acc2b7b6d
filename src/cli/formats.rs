//! Formats command implementation

use anyhow::Result;

use crate::domain::ExportFormat;

pub fn run() -> Result<()> {
    println!("Available formats:");
    for format in ExportFormat::ALL {
        println!("  {:<6} {}", format.as_str(), format.description());
    }
    Ok(())
}
