/// Trait for reporting audit progress.
///
/// The CLI implements this with indicatif spinners; library callers and
/// tests use [`SilentReporter`]. All methods default to no-ops.
pub trait ProgressReporter: Send + Sync {
    fn on_scan_start(&self) {}
    fn on_scan_progress(&self, _folders_found: usize, _current_root: &str) {}
    fn on_scan_complete(&self, _total_folders: usize, _duration_secs: f64) {}
    fn on_reconcile_start(&self) {}
    fn on_reconcile_complete(&self, _total_rows: usize, _duration_secs: f64) {}
    fn on_write_start(&self) {}
    fn on_write_complete(&self, _rows_written: usize, _duration_secs: f64) {}
}

/// No-op progress reporter for silent operation.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {}
