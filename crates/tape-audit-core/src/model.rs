use std::fmt;
use std::path::PathBuf;

/// Date string used when no pattern matched a folder name.
pub const NO_DATE_FOUND: &str = "No date found";
/// Substring marking a pattern match whose calendar date is impossible.
pub const INVALID_DATE_TAG: &str = "Invalid date";
/// Prefix for synthetic rows whose folder date has no known show.
pub const UNMATCHED_PREFIX: &str = "Unmatched: ";

/// How a folder name was classified by the date rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderType {
    /// Bare `19xx`/`20xx` container folder, dated January 1st.
    YearFolder,
    /// `gd`-prefixed show folder.
    GdPrefix,
    /// Date without a recognized artist prefix.
    DateOnly,
    /// No date rule matched.
    NonDate,
}

impl fmt::Display for FolderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FolderType::YearFolder => "year_folder",
            FolderType::GdPrefix => "gd_prefix",
            FolderType::DateOnly => "date_only",
            FolderType::NonDate => "non_date",
        };
        f.write_str(s)
    }
}

/// The result of classifying one directory during the walk.
#[derive(Debug, Clone, PartialEq)]
pub struct FolderRecord {
    pub folder_name: String,
    /// `YYYY-MM-DD`, or [`NO_DATE_FOUND`], or a best-effort date tagged
    /// with [`INVALID_DATE_TAG`].
    pub date: String,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub full_path: PathBuf,
    pub folder_type: FolderType,
    /// True only when a full, calendar-valid date was parsed.
    pub valid: bool,
}

/// One row of the known-shows table.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceShow {
    /// Canonical show date, `YYYY-MM-DD`.
    pub show_date: String,
    /// Remaining descriptive columns, in source column order.
    pub extra: Vec<(String, String)>,
}

/// One row of the reconciled output table.
///
/// Reference rows carry their descriptive columns and, when a folder
/// matched, the folder-derived fields. Synthetic rows (unmatched or
/// no-date/invalid folders) carry only folder-derived fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciledRow {
    pub show_date: String,
    pub reference: Vec<(String, String)>,
    pub folder_date: Option<String>,
    pub folder_name: Option<String>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub full_path: Option<PathBuf>,
    pub folder_type: Option<FolderType>,
    pub shows_per_year: Option<usize>,
    pub shows_per_date: Option<usize>,
}

impl ReconciledRow {
    pub fn from_reference(show: &ReferenceShow) -> Self {
        Self {
            show_date: show.show_date.clone(),
            reference: show.extra.clone(),
            folder_date: None,
            folder_name: None,
            year: None,
            month: None,
            day: None,
            full_path: None,
            folder_type: None,
            shows_per_year: None,
            shows_per_date: None,
        }
    }
}

/// Coverage summary over a reconciled table.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    /// Reference rows, sentinel rows excluded.
    pub total_shows: usize,
    /// Rows that received a folder match, sentinel rows excluded.
    pub shows_with_folders: usize,
    /// Computed from the unfiltered row counts, so it can differ from
    /// `total_shows - shows_with_folders`.
    pub missing_shows: usize,
    /// Percent of known shows with a matching folder, one decimal.
    /// 0.0 when there is nothing to divide by.
    pub coverage: f64,
    pub no_date_found: usize,
    pub invalid_dates: usize,
    pub unmatched_dates: usize,
}

impl Statistics {
    pub fn from_rows(rows: &[ReconciledRow]) -> Self {
        let total_rows = rows.len() as i64;
        let with_folders = rows.iter().filter(|r| r.folder_name.is_some()).count() as i64;
        let no_date_found = rows.iter().filter(|r| r.show_date == NO_DATE_FOUND).count() as i64;
        let invalid_dates = rows
            .iter()
            .filter(|r| r.show_date.contains(INVALID_DATE_TAG))
            .count() as i64;
        let unmatched_dates = rows
            .iter()
            .filter(|r| r.show_date.starts_with(UNMATCHED_PREFIX))
            .count() as i64;

        let excluded = no_date_found + invalid_dates + unmatched_dates;
        let denominator = total_rows - excluded;
        let coverage = if denominator > 0 {
            let raw = (with_folders - excluded) as f64 / denominator as f64 * 100.0;
            (raw * 10.0).round() / 10.0
        } else {
            0.0
        };

        Self {
            total_shows: (total_rows - excluded).max(0) as usize,
            shows_with_folders: (with_folders - excluded).max(0) as usize,
            missing_shows: (total_rows - with_folders).max(0) as usize,
            coverage,
            no_date_found: no_date_found as usize,
            invalid_dates: invalid_dates as usize,
            unmatched_dates: unmatched_dates as usize,
        }
    }
}
