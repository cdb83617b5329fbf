//! CSV export of a projection table and its summary

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::projection::ProjectionResult;

/// File name offered when exporting
pub const DEFAULT_EXPORT_FILE_NAME: &str = "revenue_projections.csv";

const HEADER: &str = "Year,Projected Revenue ($),Year-over-Year Growth (%)";

/// Render the export as text.
///
/// Rows are joined with `\n` and the text has no trailing newline, so the
/// same result always produces the same bytes.
pub fn projection_csv(result: &ProjectionResult) -> String {
    let mut rows = Vec::with_capacity(result.years.len() + 5);
    rows.push(HEADER.to_string());

    for row in &result.years {
        rows.push(format!(
            "Year {},{:.2},{:.2}%",
            row.year, row.revenue, row.year_over_year_growth_percent
        ));
    }

    rows.push(String::new());
    rows.push("Summary".to_string());
    rows.push(format!("Total Revenue ($),{:.2}", result.summary.total_revenue));
    rows.push(format!(
        "Average Annual Growth (%),{:.2}",
        result.summary.average_annual_growth_percent
    ));

    rows.join("\n")
}

/// Write the export to any writer
pub fn write_projection_csv<W: Write>(writer: &mut W, result: &ProjectionResult) -> Result<()> {
    writer.write_all(projection_csv(result).as_bytes())?;
    Ok(())
}

/// Write the export to a file, replacing it if present
pub fn export_to_path<P: AsRef<Path>>(path: P, result: &ProjectionResult) -> Result<()> {
    let mut file = File::create(path.as_ref())?;
    write_projection_csv(&mut file, result)?;
    log::info!("wrote projection export to {}", path.as_ref().display());
    Ok(())
}
