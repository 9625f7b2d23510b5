//! CSV export for production summaries.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::reporting::MONTH_LABELS;
use crate::sim::engine::Simulator;
use crate::sim::types::Month;

/// Column header for the summary CSV export.
const HEADER: &str = "month,label,quantity_kg,water_liters,cost_eur,profit_eur";

/// Exports the twelve monthly summaries plus the annual aggregate to a CSV
/// file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(sim: &Simulator, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(sim, buf)
}

/// Writes monthly and annual production summaries as CSV to any writer.
///
/// One row per month in calendar order, then the annual row with month
/// number 0 and label "Year". Output is deterministic for a given simulator.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(sim: &Simulator, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    for month in Month::ALL {
        let s = sim.production_summary(month);
        wtr.write_record(&[
            month.number().to_string(),
            MONTH_LABELS[month.index()].to_string(),
            format!("{:.4}", s.quantity_kg),
            format!("{:.4}", s.water_liters),
            format!("{:.4}", s.cost_eur),
            format!("{:.4}", s.profit_eur),
        ])?;
    }

    let annual = sim.annual_production_summary();
    wtr.write_record(&[
        annual.scope.number().to_string(),
        "Year".to_string(),
        format!("{:.4}", annual.quantity_kg),
        format!("{:.4}", annual.water_liters),
        format!("{:.4}", annual.cost_eur),
        format!("{:.4}", annual.profit_eur),
    ])?;

    wtr.flush()?;
    Ok(())
}
