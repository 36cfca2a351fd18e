use std::fs;
use std::path::Path;
use tempfile::tempdir;

use tape_audit_core::extractor::{extract_dates, extract_dates_filtered};
use tape_audit_core::model::FolderType;

/// Create a small archive tree mixing the folder-name styles found in the
/// wild. Layout:
///   root/
///     1977/
///       gd77-05-04/
///       gd77-13-40sbd/          ← impossible month/day
///       random_notes/
///     gd82-09-20/
///     gd03-06-18/
///     jg1976-01-09/
///     checksums.txt             ← file, never classified
fn create_archive_tree(root: &Path) {
    let year = root.join("1977");
    fs::create_dir_all(year.join("gd77-05-04")).unwrap();
    fs::create_dir_all(year.join("gd77-13-40sbd")).unwrap();
    fs::create_dir_all(year.join("random_notes")).unwrap();
    fs::create_dir_all(root.join("gd82-09-20")).unwrap();
    fs::create_dir_all(root.join("gd03-06-18")).unwrap();
    fs::create_dir_all(root.join("jg1976-01-09")).unwrap();
    fs::write(root.join("checksums.txt"), "d41d8cd9").unwrap();
}

fn find<'a>(
    records: &'a [tape_audit_core::FolderRecord],
    name: &str,
) -> &'a tape_audit_core::FolderRecord {
    records
        .iter()
        .find(|r| r.folder_name == name)
        .unwrap_or_else(|| panic!("no record for folder {}", name))
}

#[test]
fn test_every_directory_gets_one_record() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("archive");
    create_archive_tree(&root);

    let records = extract_dates(&root);

    // 6 directories, the file is ignored
    assert_eq!(records.len(), 6);
    let names: Vec<&str> = records.iter().map(|r| r.folder_name.as_str()).collect();
    assert!(!names.contains(&"checksums.txt"));
}

#[test]
fn test_dated_show_folder() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("archive");
    create_archive_tree(&root);

    let records = extract_dates(&root);
    let rec = find(&records, "gd77-05-04");
    assert_eq!(rec.date, "1977-05-04");
    assert_eq!(rec.year, Some(1977));
    assert_eq!(rec.month, Some(5));
    assert_eq!(rec.day, Some(4));
    assert!(rec.valid);
    assert_eq!(rec.folder_type, FolderType::GdPrefix);
    assert!(rec.full_path.ends_with("1977/gd77-05-04"));
}

#[test]
fn test_century_inference_cutoff() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("archive");
    create_archive_tree(&root);

    let records = extract_dates(&root);
    assert_eq!(find(&records, "gd82-09-20").year, Some(1982));
    assert_eq!(find(&records, "gd03-06-18").year, Some(2003));
}

#[test]
fn test_year_folder_is_recorded_and_descended() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("archive");
    create_archive_tree(&root);

    let records = extract_dates(&root);

    let year_rec = find(&records, "1977");
    assert_eq!(year_rec.date, "1977-01-01");
    assert_eq!(year_rec.folder_type, FolderType::YearFolder);
    assert!(year_rec.valid);

    // The walk still descended into the year folder
    assert!(records.iter().any(|r| r.folder_name == "gd77-05-04"));

    // Pre-order: the year folder's record comes before its children
    let year_idx = records
        .iter()
        .position(|r| r.folder_name == "1977")
        .unwrap();
    let child_idx = records
        .iter()
        .position(|r| r.folder_name == "gd77-05-04")
        .unwrap();
    assert!(year_idx < child_idx);
}

#[test]
fn test_invalid_and_dateless_folders_are_represented() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("archive");
    create_archive_tree(&root);

    let records = extract_dates(&root);

    let invalid = find(&records, "gd77-13-40sbd");
    assert!(!invalid.valid);
    assert!(invalid.date.contains("Invalid date"));
    assert_eq!(invalid.date, "1977-13-40 (Invalid date)");

    let dateless = find(&records, "random_notes");
    assert_eq!(dateless.date, "No date found");
    assert_eq!(dateless.folder_type, FolderType::NonDate);
    assert!(!dateless.valid);
}

#[test]
fn test_rescan_is_idempotent() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("archive");
    create_archive_tree(&root);

    let mut first = extract_dates(&root);
    let mut second = extract_dates(&root);

    // Enumeration order may vary between runs; record content must not.
    first.sort_by(|a, b| a.full_path.cmp(&b.full_path));
    second.sort_by(|a, b| a.full_path.cmp(&b.full_path));
    assert_eq!(first, second);
}

#[test]
fn test_missing_root_yields_no_records() {
    let tmp = tempdir().unwrap();
    let records = extract_dates(&tmp.path().join("does_not_exist"));
    assert!(records.is_empty());
}

#[test]
fn test_ignore_patterns_prune_record_and_descent() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("archive");
    create_archive_tree(&root);

    let ignore = vec![glob::Pattern::new("**/1977").unwrap()];
    let records = extract_dates_filtered(&root, &ignore);

    assert!(!records.iter().any(|r| r.folder_name == "1977"));
    // Children of the pruned folder are gone too
    assert!(!records.iter().any(|r| r.folder_name == "gd77-05-04"));
    assert!(records.iter().any(|r| r.folder_name == "gd82-09-20"));
}
