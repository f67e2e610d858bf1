//! CSV-backed log store: one `date,start,end` row per entry, no header.

use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::log::Log;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DELIMITER: u8 = b',';
const FIELDS: usize = 3;

/// Handle on the timefile. Every operation opens the file for its own
/// duration only; nothing is held between calls.
#[derive(Debug, Clone)]
pub struct TimeFile {
    path: PathBuf,
}

impl TimeFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole log. Any malformed row aborts the load.
    pub fn load(&self) -> AppResult<Log> {
        let file = File::open(&self.path)?;
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .delimiter(DELIMITER)
            .flexible(true)
            .from_reader(file);

        let mut entries = Vec::new();
        for (idx, record) in rdr.records().enumerate() {
            let row = idx + 1;
            let record = record?;

            if record.len() != FIELDS {
                return Err(AppError::Parse {
                    row,
                    reason: format!("expected {} fields, found {}", FIELDS, record.len()),
                });
            }

            let entry = Entry::from_fields(&record[0], &record[1], &record[2]).map_err(|e| {
                AppError::Parse {
                    row,
                    reason: e.to_string(),
                }
            })?;
            entries.push(entry);
        }

        debug!(path = %self.path.display(), entries = entries.len(), "loaded timefile");
        Ok(Log::new(entries))
    }

    /// Rewrite the whole file: rows go to a sibling temporary file which is
    /// then renamed over the timefile.
    pub fn replace(&self, log: &Log) -> AppResult<()> {
        let tmp = self.temp_path();
        {
            let mut wtr = WriterBuilder::new()
                .has_headers(false)
                .delimiter(DELIMITER)
                .from_writer(File::create(&tmp)?);

            for entry in log.entries() {
                wtr.write_record(entry.format_as_row())?;
            }

            let file = wtr.into_inner().map_err(|e| e.into_error())?;
            file.sync_all()?;
        }

        if let Err(e) = fs::rename(&tmp, &self.path) {
            fs::remove_file(&tmp).ok();
            return Err(e.into());
        }

        debug!(path = %self.path.display(), entries = log.len(), "rewrote timefile");
        Ok(())
    }

    /// Fast path for a freshly appended entry; equivalent to `replace` with
    /// the extended log.
    pub fn append(&self, entry: &Entry) -> AppResult<()> {
        let mut file = OpenOptions::new().read(true).append(true).open(&self.path)?;

        if ends_without_newline(&mut file)? {
            file.write_all(b"\n")?;
        }

        let mut wtr = WriterBuilder::new()
            .has_headers(false)
            .delimiter(DELIMITER)
            .from_writer(file);
        wtr.write_record(entry.format_as_row())?;
        wtr.flush()?;

        debug!(path = %self.path.display(), %entry, "appended entry");
        Ok(())
    }

    /// Create an empty timefile (and its directory). Returns `false` if it already existed.
    pub fn create_if_missing(&self) -> AppResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        File::create(&self.path)?;
        Ok(true)
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "timefile".to_string());
        self.path.with_file_name(format!(".{name}.tmp"))
    }
}

fn ends_without_newline(file: &mut File) -> AppResult<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}
