use crate::error::Error;
use crate::model::{ReconciledRow, ReferenceShow};
use std::path::Path;

/// Column carrying the canonical show date in the reference CSV.
pub const SHOW_DATE_COLUMN: &str = "ShowDate";

/// Read the known-shows table from a headered CSV.
///
/// `ShowDate` is required; every other column is carried through as a
/// descriptive column. A missing file or missing header is fatal — the
/// reconciler is never fed a guessed table.
pub fn read_reference_csv(path: &Path) -> Result<Vec<ReferenceShow>, Error> {
    let mut reader = csv::Reader::from_path(path).map_err(|err| {
        Error::Reference(format!("cannot read {}: {}", path.display(), err))
    })?;

    let headers = reader.headers()?.clone();
    let date_index = headers
        .iter()
        .position(|h| h == SHOW_DATE_COLUMN)
        .ok_or_else(|| {
            Error::Reference(format!(
                "{} has no '{}' column",
                path.display(),
                SHOW_DATE_COLUMN
            ))
        })?;

    let mut shows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let show_date = record.get(date_index).unwrap_or_default().to_string();
        let extra: Vec<(String, String)> = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != date_index)
            .map(|(i, header)| {
                (
                    header.to_string(),
                    record.get(i).unwrap_or_default().to_string(),
                )
            })
            .collect();
        shows.push(ReferenceShow { show_date, extra });
    }

    Ok(shows)
}

/// Write the reconciled table to CSV. Returns the number of data rows.
///
/// Columns: `ShowDate`, the reference table's descriptive columns, the two
/// summary counts (named to sort ahead of the folder fields), then the
/// folder-derived fields. Absent values are written as empty cells.
pub fn write_reconciled_csv(path: &Path, rows: &[ReconciledRow]) -> Result<usize, Error> {
    let extra_headers = collect_extra_headers(rows);

    let mut writer = csv::Writer::from_path(path)?;

    let mut header: Vec<&str> = vec![SHOW_DATE_COLUMN];
    header.extend(extra_headers.iter().map(|h| h.as_str()));
    header.extend([
        "<< total shows per year",
        "shows per date",
        "folder date",
        "folder_name",
        "year",
        "month",
        "day",
        "full path",
        "folder_type",
    ]);
    writer.write_record(&header)?;

    for row in rows {
        let mut record: Vec<String> = Vec::with_capacity(header.len());
        record.push(row.show_date.clone());
        for extra_header in &extra_headers {
            let value = row
                .reference
                .iter()
                .find(|(name, _)| name == extra_header)
                .map(|(_, value)| value.clone())
                .unwrap_or_default();
            record.push(value);
        }
        record.push(opt_string(row.shows_per_year));
        record.push(opt_string(row.shows_per_date));
        record.push(row.folder_date.clone().unwrap_or_default());
        record.push(row.folder_name.clone().unwrap_or_default());
        record.push(opt_string(row.year));
        record.push(opt_string(row.month));
        record.push(opt_string(row.day));
        record.push(
            row.full_path
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );
        record.push(
            row.folder_type
                .map(|t| t.to_string())
                .unwrap_or_default(),
        );
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(rows.len())
}

/// Descriptive column names in order of first appearance. Synthetic rows
/// carry none, so in practice this is the reference table's header order.
fn collect_extra_headers(rows: &[ReconciledRow]) -> Vec<String> {
    let mut headers: Vec<String> = Vec::new();
    for row in rows {
        for (name, _) in &row.reference {
            if !headers.iter().any(|h| h == name) {
                headers.push(name.clone());
            }
        }
    }
    headers
}

fn opt_string<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
