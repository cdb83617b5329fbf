//! Export of projection results

pub mod csv;

pub use self::csv::{export_to_path, projection_csv, write_projection_csv, DEFAULT_EXPORT_FILE_NAME};
