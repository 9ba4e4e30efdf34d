//! CSV file I/O with atomic writes
//!
//! Rows are always written as a whole file: header first, then every row,
//! into a temp file that is renamed over the target.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder, StringRecord, WriterBuilder};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::TrackerError;

/// Result of reading a CSV file
#[derive(Debug, PartialEq)]
pub enum CsvContents<T> {
    /// The file does not exist
    Missing,
    /// The file exists but holds no header
    Empty,
    /// Decoded rows plus the number of rows that failed to decode
    Rows { rows: Vec<T>, skipped: usize },
}

/// Read CSV rows keyed by header name
///
/// `required` lists the columns that must be present, each with its accepted
/// spellings. A missing column makes the whole file unreadable; a row that
/// fails to decode is skipped and counted.
pub fn read_csv<T, P>(path: P, required: &[&[&str]]) -> Result<CsvContents<T>, TrackerError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(CsvContents::Missing);
    }

    let file = File::open(path)
        .map_err(|e| TrackerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(BufReader::new(file));

    let headers = reader.headers()?.clone();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Ok(CsvContents::Empty);
    }

    if let Some(missing) = required
        .iter()
        .find(|names| !names.iter().any(|n| headers.iter().any(|h| h == *n)))
    {
        return Err(TrackerError::Csv(format!(
            "{} has no '{}' column",
            path.display(),
            missing.first().copied().unwrap_or_default()
        )));
    }

    let mut rows = Vec::new();
    let mut skipped = 0;
    let mut record = ByteRecord::new();
    // Rows are read as bytes so a badly encoded row only loses itself
    while reader.read_byte_record(&mut record)? {
        let line = record.position().map(|p| p.line());
        let decoded = StringRecord::from_byte_record(std::mem::take(&mut record))
            .map_err(|e| e.to_string())
            .and_then(|r| r.deserialize::<T>(Some(&headers)).map_err(|e| e.to_string()));

        match decoded {
            Ok(row) => rows.push(row),
            Err(e) => {
                tracing::warn!(
                    file = %path.display(),
                    line,
                    error = %e,
                    "skipping undecodable row"
                );
                skipped += 1;
            }
        }
    }

    Ok(CsvContents::Rows { rows, skipped })
}

/// Write a header and rows to a CSV file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_csv_atomic<'a, T, I, P>(path: P, header: &[&str], rows: I) -> Result<(), TrackerError>
where
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path);

    let result = write_rows(&temp_path, header, rows).and_then(|()| {
        fs::rename(&temp_path, path)
            .map_err(|e| TrackerError::Storage(format!("Failed to rename temp file: {}", e)))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

fn write_rows<'a, T, I>(temp_path: &Path, header: &[&str], rows: I) -> Result<(), TrackerError>
where
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let file = File::create(temp_path)
        .map_err(|e| TrackerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    writer.write_record(header)?;
    for row in rows {
        writer.serialize(row)?;
    }

    let mut inner = writer
        .into_inner()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))?;
    inner
        .flush()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    inner
        .get_ref()
        .sync_all()
        .map_err(|e| TrackerError::Storage(format!("Failed to sync data: {}", e)))?;

    Ok(())
}

fn temp_path_for(path: &Path) -> std::path::PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
