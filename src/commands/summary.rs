//! End-of-run summary printed to stdout.

use super::generate::GenerationReport;
use colored::*;
use std::io::{self, Write};

pub fn write_summary<W: Write>(out: &mut W, report: &GenerationReport) -> io::Result<()> {
    if report.dry_run {
        writeln!(out, "{}", "Dry run: no files were written".yellow().bold())?;
    }

    for class in &report.classes {
        writeln!(
            out,
            "{} {} : {} ({} bound, {} skipped)",
            "✓".green(),
            class.class_name.bold(),
            class.parent_name,
            class.bound_methods.len(),
            class.rejected.len()
        )?;
        writeln!(out, "    {}", class.header.display())?;
        writeln!(out, "    {}", class.implementation.display())?;
        for rejection in &class.rejected {
            writeln!(out, "    {} {}", "skipped".yellow(), rejection)?;
        }
    }

    if !report.excluded.is_empty() {
        writeln!(
            out,
            "{} {}",
            "Hand-written:".dimmed(),
            report.excluded.join(", ")
        )?;
    }

    writeln!(
        out,
        "{} {} classes, {} methods bound, {} skipped",
        "Summary:".bright_cyan().bold(),
        report.classes.len(),
        report.bound_method_count(),
        report.rejected_method_count()
    )
}

pub fn print_summary(report: &GenerationReport) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_summary(&mut lock, report)
}
