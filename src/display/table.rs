//! Plain-text table and summary for terminal output

use std::fmt::Write;

use crate::projection::{ProjectionResult, ProjectionSummary};

/// Projected revenue table, one line per year
pub fn render_table(result: &ProjectionResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Projected Revenue");
    let _ = writeln!(
        out,
        "{:<8} {:>22} {:>27}",
        "Year", "Projected Revenue ($)", "Year-over-Year Growth (%)"
    );
    let _ = writeln!(out, "{}", "-".repeat(59));

    for row in &result.years {
        let _ = writeln!(
            out,
            "{:<8} {:>22.2} {:>26.2}%",
            format!("Year {}", row.year),
            row.revenue,
            row.year_over_year_growth_percent,
        );
    }

    out
}

/// Summary block shown under the table
pub fn render_summary(summary: &ProjectionSummary) -> String {
    format!(
        "Revenue Upside Summary\n  Total Revenue: ${:.2}\n  Average Annual Growth: {:.2}%\n",
        summary.total_revenue, summary.average_annual_growth_percent
    )
}
