use crate::model::{FolderRecord, FolderType, NO_DATE_FOUND};
use crate::patterns;
use chrono::NaiveDate;
use glob::Pattern;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Walk every directory under `root` and classify each one by name.
///
/// One record per directory, emitted pre-order in filesystem enumeration
/// order. Files are ignored. Unreadable directories are logged and skipped
/// together with their descendants; the rest of the walk continues.
pub fn extract_dates(root: &Path) -> Vec<FolderRecord> {
    extract_dates_filtered(root, &[])
}

/// Same walk, pruned by glob ignore patterns: a matching directory gets
/// neither a record nor a descent.
pub fn extract_dates_filtered(root: &Path, ignore_patterns: &[Pattern]) -> Vec<FolderRecord> {
    let mut records = Vec::new();
    visit_dirs(root, ignore_patterns, &mut records);
    records
}

fn visit_dirs(dir: &Path, ignore_patterns: &[Pattern], records: &mut Vec<FolderRecord>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("Error reading directory {}: {}", dir.display(), err);
            return;
        }
    };

    for entry_result in entries {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Error reading entry in directory {}: {}", dir.display(), err);
                continue;
            }
        };

        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(err) => {
                warn!("Error reading file type for {}: {}", path.display(), err);
                continue;
            }
        };

        // Only directories are classified; show folders hold the audio
        // files but the date lives in the directory name.
        if !file_type.is_dir() {
            continue;
        }

        if ignore_patterns.iter().any(|p| p.matches_path(&path)) {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        records.push(classify_folder(&name, &path));

        // Descend regardless of whether a date was found at this level —
        // show-folder hierarchies are irregular in depth.
        visit_dirs(&path, ignore_patterns, records);
    }
}

/// Classify a single directory name against the year rule and the ordered
/// date rules.
pub fn classify_folder(name: &str, path: &Path) -> FolderRecord {
    if let Some(caps) = patterns::YEAR_ONLY.captures(name) {
        let year: i32 = caps[1].parse().unwrap_or(0);
        return FolderRecord {
            folder_name: name.to_string(),
            date: format!("{}-01-01", year),
            year: Some(year),
            month: Some(1),
            day: Some(1),
            full_path: path.to_path_buf(),
            folder_type: FolderType::YearFolder,
            valid: true,
        };
    }

    match patterns::match_folder_name(name) {
        Some((rule, year_token, month_token, day_token)) => {
            let year = expand_year(year_token);
            let month: u32 = month_token.parse().unwrap_or(0);
            let day: u32 = day_token.parse().unwrap_or(0);

            match NaiveDate::from_ymd_opt(year, month, day) {
                Some(date) => FolderRecord {
                    folder_name: name.to_string(),
                    date: date.format("%Y-%m-%d").to_string(),
                    year: Some(year),
                    month: Some(month),
                    day: Some(day),
                    full_path: path.to_path_buf(),
                    folder_type: rule.folder_type,
                    valid: true,
                },
                None => FolderRecord {
                    folder_name: name.to_string(),
                    // Keep the raw tokens so the bad input stays visible.
                    date: format!("{}-{}-{} (Invalid date)", year, month_token, day_token),
                    year: Some(year),
                    month: Some(month),
                    day: Some(day),
                    full_path: path.to_path_buf(),
                    folder_type: rule.folder_type,
                    valid: false,
                },
            }
        }
        None => FolderRecord {
            folder_name: name.to_string(),
            date: NO_DATE_FOUND.to_string(),
            year: None,
            month: None,
            day: None,
            full_path: path.to_path_buf(),
            folder_type: FolderType::NonDate,
            valid: false,
        },
    }
}

/// Two-digit years split at 50: below it is 2000s, at or above it is 1900s.
fn expand_year(token: &str) -> i32 {
    let value: i32 = token.parse().unwrap_or(0);
    if token.len() == 2 {
        if value < 50 {
            value + 2000
        } else {
            value + 1900
        }
    } else {
        value
    }
}
