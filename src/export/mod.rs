mod fs_utils;
mod json_csv;
pub mod logic;
mod model;

pub use json_csv::{csv_bytes, write_csv, write_json};
pub use logic::ExportLogic;
pub use model::{EventExport, get_headers};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// File name offered for the dashboard download.
pub const DOWNLOAD_FILE_NAME: &str = "script_data.csv";

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
