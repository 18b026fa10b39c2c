//! Progress reporting for long-running conversions.
//!
//! The callback is invoked at regular intervals while records are converted
//! and may cancel the run by returning `true`.
//!
//! # Examples
//!
//! ```
//! use warodai_edict::utils::progress_report::ProgressState;
//!
//! fn my_reporter(state: &mut ProgressState) -> bool {
//!     println!("Progress: {}/{}", state.current, state.total);
//!     false // Return true to cancel the operation
//! }
//!
//! let mut progress = ProgressState::new("converting", 100, 10, Some(my_reporter));
//! for i in 0..100 {
//!     if progress.report(i) {
//!         break;
//!     }
//! }
//! ```

/// Function type for progress reporting callbacks.
///
/// Returns `true` to cancel the operation, or `false` to continue.
pub type ProgressReportFn = fn(&mut ProgressState) -> bool;

/// State information for progress reporting.
pub struct ProgressState {
    /// Identifier for this progress state (e.g., "EdictBuilder::build")
    pub state_id: String,
    /// Total number of items to process
    pub total: u64,
    /// Current item being processed
    pub current: u64,
    /// Last item at which progress was reported
    pub last: u64,
    /// Number of items between progress reports
    pub report_interval: u64,
    /// Optional reporter function to call
    pub reporter: Option<ProgressReportFn>,
}

impl ProgressState {
    /// Creates a new progress state reporting every `report_interval_percent` percent of `total`.
    pub fn new(state_id: &str, total: u64, report_interval_percent: u64, reporter: Option<ProgressReportFn>) -> Self {
        Self {
            state_id: state_id.to_string(),
            total,
            current: 0,
            last: 0,
            report_interval: total * report_interval_percent / 100,
            reporter,
        }
    }

    /// Reports progress for the current item.
    ///
    /// The reporter is called once the interval has passed since the last
    /// report, and always for the final item. Returns `true` if the reporter
    /// asked to cancel.
    pub fn report(&mut self, current: u64) -> bool {
        let Some(reporter) = self.reporter else {
            return false;
        };
        if current - self.last > self.report_interval || current + 1 == self.total {
            self.current = current;
            let cancelled = reporter(self);
            self.last = current;
            cancelled
        } else {
            false
        }
    }
}
