//! Report rendering.

use anyhow::Result;
use archcheck::{Report, Violation};
use serde::Serialize;
use std::io::Write;

use crate::OutputFormat;

/// Prints the report in the requested format.
///
/// Text goes to stderr, one tagged line per violation; JSON goes to stdout.
pub fn print(report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(report),
        OutputFormat::Json => print_json(report),
    }
}

fn print_text(report: &Report) -> Result<()> {
    let mut err = std::io::stderr().lock();
    for violation in &report.violations {
        writeln!(err, "{violation}")?;
    }
    Ok(())
}

/// JSON document written by `--format json`.
#[derive(Serialize)]
struct JsonReport<'a> {
    files_checked: usize,
    composition: usize,
    boundary: usize,
    violations: &'a [Violation],
}

impl<'a> From<&'a Report> for JsonReport<'a> {
    fn from(report: &'a Report) -> Self {
        let (composition, boundary) = report.count_by_subsystem();
        Self {
            files_checked: report.files_checked,
            composition,
            boundary,
            violations: &report.violations,
        }
    }
}

fn print_json(report: &Report) -> Result<()> {
    let json = serde_json::to_string_pretty(&JsonReport::from(report))?;
    println!("{json}");
    Ok(())
}
