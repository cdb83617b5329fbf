//! Table, summary and chart views of a projection

mod chart;
mod table;

pub use chart::{ChartData, ChartDataset};
pub use table::{render_summary, render_table};
