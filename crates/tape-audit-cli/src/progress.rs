use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use tape_audit_core::ProgressReporter;

/// CLI progress reporter using indicatif spinners.
///
/// Every phase is open-ended (the walk doesn't know its total upfront and
/// the reconcile/write phases are quick), so spinners throughout.
pub struct CliReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl CliReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn set_bar(&self, pb: ProgressBar) {
        let mut guard = self.bar.lock().unwrap();
        if let Some(old) = guard.take() {
            old.finish_and_clear();
        }
        *guard = Some(pb);
    }

    fn finish_bar(&self) {
        let mut guard = self.bar.lock().unwrap();
        if let Some(pb) = guard.take() {
            pb.finish_and_clear();
        }
    }

    fn spinner(&self, message: &'static str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        pb.set_message(message);
        pb.enable_steady_tick(std::time::Duration::from_millis(80));
        self.set_bar(pb);
    }
}

impl ProgressReporter for CliReporter {
    fn on_scan_start(&self) {
        self.spinner("Scanning tape folders...");
    }

    fn on_scan_progress(&self, folders_found: usize, _current_root: &str) {
        let guard = self.bar.lock().unwrap();
        if let Some(pb) = guard.as_ref() {
            pb.set_message(format!("Scanning... {} folders classified", folders_found));
        }
    }

    fn on_scan_complete(&self, total_folders: usize, duration_secs: f64) {
        self.finish_bar();
        eprintln!(
            "  \x1b[32m✓\x1b[0m Scan complete: {} folders in {:.2}s",
            total_folders, duration_secs
        );
    }

    fn on_reconcile_start(&self) {
        self.spinner("Reconciling against the reference table...");
    }

    fn on_reconcile_complete(&self, total_rows: usize, duration_secs: f64) {
        self.finish_bar();
        eprintln!(
            "  \x1b[32m✓\x1b[0m Reconcile complete: {} rows in {:.2}s",
            total_rows, duration_secs
        );
    }

    fn on_write_start(&self) {
        self.spinner("Writing report...");
    }

    fn on_write_complete(&self, rows_written: usize, duration_secs: f64) {
        self.finish_bar();
        eprintln!(
            "  \x1b[32m✓\x1b[0m Report written: {} rows in {:.2}s",
            rows_written, duration_secs
        );
    }
}
