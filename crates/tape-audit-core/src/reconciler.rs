use crate::model::{
    FolderRecord, ReconciledRow, ReferenceShow, INVALID_DATE_TAG, NO_DATE_FOUND, UNMATCHED_PREFIX,
};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Join extracted folder records against the known-shows table.
///
/// Output order: one row per reference show (folder fields filled where a
/// folder matched), then one synthetic row per leftover folder with a valid
/// but unknown date, then one per dateless/invalid folder.
///
/// Matching is exact string equality on the normalized date, so records
/// tagged invalid never match. The first folder in enumeration order wins a
/// date; a later folder with the same date is left over and surfaces as an
/// `Unmatched:` row rather than disappearing.
pub fn reconcile(reference: &[ReferenceShow], folders: &[FolderRecord]) -> Vec<ReconciledRow> {
    let mut rows: Vec<ReconciledRow> = reference.iter().map(ReconciledRow::from_reference).collect();

    // Folders consumed by a reference row, keyed by identity (full path is
    // unique per record), not by date.
    let mut matched_paths: HashSet<&Path> = HashSet::new();

    for row in rows.iter_mut() {
        if let Some(folder) = folders.iter().find(|f| f.date == row.show_date) {
            row.folder_date = Some(folder.date.clone());
            row.folder_name = Some(folder.folder_name.clone());
            row.year = folder.year;
            row.month = folder.month;
            row.day = folder.day;
            row.full_path = Some(folder.full_path.clone());
            row.folder_type = Some(folder.folder_type);
            matched_paths.insert(folder.full_path.as_path());
        }
    }

    // Shows per year, over the reference rows that received a folder.
    let mut year_counts: HashMap<i32, usize> = HashMap::new();
    for row in &rows {
        if let Some(year) = row.year {
            *year_counts.entry(year).or_default() += 1;
        }
    }
    for row in rows.iter_mut() {
        if let Some(year) = row.year {
            row.shows_per_year = year_counts.get(&year).copied();
        }
    }

    // Folder count per distinct valid show date, attached where non-zero.
    let mut date_counts: HashMap<String, usize> = HashMap::new();
    for row in &rows {
        let show_date = row.show_date.as_str();
        if show_date.is_empty()
            || show_date.contains(NO_DATE_FOUND)
            || show_date.contains(INVALID_DATE_TAG)
        {
            continue;
        }
        if !date_counts.contains_key(show_date) {
            let count = folders.iter().filter(|f| f.date == show_date).count();
            date_counts.insert(show_date.to_string(), count);
        }
    }
    for row in rows.iter_mut() {
        if let Some(&count) = date_counts.get(row.show_date.as_str()) {
            if count > 0 {
                row.shows_per_date = Some(count);
            }
        }
    }

    // Leftover folders split into valid-but-unknown dates and
    // dateless/invalid records.
    let mut unmatched_valid: Vec<&FolderRecord> = Vec::new();
    let mut no_date_or_invalid: Vec<&FolderRecord> = Vec::new();
    for folder in folders {
        if matched_paths.contains(folder.full_path.as_path()) {
            continue;
        }
        if folder.date == NO_DATE_FOUND || folder.date.contains(INVALID_DATE_TAG) {
            no_date_or_invalid.push(folder);
        } else {
            unmatched_valid.push(folder);
        }
    }

    for folder in unmatched_valid {
        rows.push(synthetic_row(
            format!("{}{}", UNMATCHED_PREFIX, folder.date),
            folder,
        ));
    }
    for folder in no_date_or_invalid {
        rows.push(synthetic_row(folder.date.clone(), folder));
    }

    rows
}

fn synthetic_row(show_date: String, folder: &FolderRecord) -> ReconciledRow {
    ReconciledRow {
        show_date,
        reference: Vec::new(),
        folder_date: Some(folder.date.clone()),
        folder_name: Some(folder.folder_name.clone()),
        year: folder.year,
        month: folder.month,
        day: folder.day,
        full_path: Some(folder.full_path.clone()),
        folder_type: Some(folder.folder_type),
        shows_per_year: None,
        shows_per_date: None,
    }
}
