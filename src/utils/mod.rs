// Utility functions and helpers
//
// This module provides the source fetching helpers and progress reporting.

pub mod io_utils;
pub mod progress_report;

#[cfg(feature = "download")]
pub use io_utils::download_file_if_not_exists;
pub use io_utils::{archive_file_name, extract_archive};
pub use progress_report::{ProgressState, ProgressReportFn};
