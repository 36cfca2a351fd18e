use crate::config::{self, AppConfig};
use crate::error::Error;
use crate::extractor;
use crate::model::{FolderRecord, ReconciledRow, Statistics};
use crate::progress::ProgressReporter;
use crate::reconciler;
use crate::report;
use glob::Pattern;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

pub struct AuditEngine {
    config: AppConfig,
}

#[derive(Debug)]
pub struct AuditResult {
    pub scan_duration: Duration,
    pub reconcile_duration: Duration,
    pub write_duration: Duration,
    pub folders_scanned: usize,
    pub rows_written: usize,
    pub statistics: Statistics,
    pub output_path: PathBuf,
}

impl AuditEngine {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Run the full audit pipeline:
    /// 1. Read the known-shows reference CSV
    /// 2. Walk the configured roots, extracting a date per folder name
    /// 3. Reconcile folders against the reference table
    /// 4. Write the combined table to CSV and derive coverage statistics
    pub fn audit(&self, reporter: &dyn ProgressReporter) -> Result<AuditResult, Error> {
        let roots = self.checked_roots()?;
        let ignore_patterns = self.ignore_patterns();

        let reference = report::read_reference_csv(Path::new(&self.config.reference_csv))?;
        info!(
            "Loaded {} reference shows from {}",
            reference.len(),
            self.config.reference_csv
        );

        // Phase 1: Scan
        info!("Scanning tape folders...");
        reporter.on_scan_start();
        let scan_start = Instant::now();
        let mut folders: Vec<FolderRecord> = Vec::new();
        for root in &roots {
            folders.extend(extractor::extract_dates_filtered(
                Path::new(root),
                &ignore_patterns,
            ));
            reporter.on_scan_progress(folders.len(), root);
        }
        let scan_duration = scan_start.elapsed();
        reporter.on_scan_complete(folders.len(), scan_duration.as_secs_f64());
        debug!(
            "Scan completed in {:.2}s — {} folders classified",
            scan_duration.as_secs_f64(),
            folders.len(),
        );

        // Phase 2: Reconcile
        info!("Reconciling folders against the reference table...");
        reporter.on_reconcile_start();
        let reconcile_start = Instant::now();
        let rows: Vec<ReconciledRow> = reconciler::reconcile(&reference, &folders);
        let statistics = Statistics::from_rows(&rows);
        let reconcile_duration = reconcile_start.elapsed();
        reporter.on_reconcile_complete(rows.len(), reconcile_duration.as_secs_f64());
        debug!(
            "Reconcile completed in {:.2}s — {} rows, coverage {:.1}%",
            reconcile_duration.as_secs_f64(),
            rows.len(),
            statistics.coverage,
        );

        // Phase 3: Write report
        info!("Writing reconciled table...");
        reporter.on_write_start();
        let write_start = Instant::now();
        let output_path = PathBuf::from(&self.config.output_csv);
        let rows_written = report::write_reconciled_csv(&output_path, &rows)?;
        let write_duration = write_start.elapsed();
        reporter.on_write_complete(rows_written, write_duration.as_secs_f64());
        debug!(
            "Report written in {:.2}s — {} rows to {}",
            write_duration.as_secs_f64(),
            rows_written,
            output_path.display(),
        );

        Ok(AuditResult {
            scan_duration,
            reconcile_duration,
            write_duration,
            folders_scanned: folders.len(),
            rows_written,
            statistics,
            output_path,
        })
    }

    /// Extractor-only run for inspecting what the walk finds, without a
    /// reference table.
    pub fn scan_only(&self) -> Result<Vec<FolderRecord>, Error> {
        let roots = self.checked_roots()?;
        let ignore_patterns = self.ignore_patterns();

        let mut folders = Vec::new();
        for root in &roots {
            folders.extend(extractor::extract_dates_filtered(
                Path::new(root),
                &ignore_patterns,
            ));
        }
        Ok(folders)
    }

    fn checked_roots(&self) -> Result<Vec<String>, Error> {
        let roots = config::non_overlapping_directories(self.config.root_paths.clone());
        if roots.is_empty() {
            return Err(Error::Other("no root paths configured".to_string()));
        }
        for root in &roots {
            if !Path::new(root).is_dir() {
                return Err(Error::RootNotFound(root.clone()));
            }
        }
        Ok(roots)
    }

    fn ignore_patterns(&self) -> Vec<Pattern> {
        self.config
            .ignore_patterns
            .iter()
            .filter_map(|glob| match Pattern::new(glob) {
                Ok(pattern) => Some(pattern),
                Err(err) => {
                    error!("Invalid glob pattern '{}': {}", glob, err);
                    None
                }
            })
            .collect()
    }
}
