//! CSV persistence for student records.
//!
//! The file is append-only: rows are never rewritten or removed. Each
//! operation opens the file, does its work and closes it again.

use csv::{ReaderBuilder, Terminator, WriterBuilder};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{GradeError, Result};
use crate::record::{HEADERS, StudentRecord};

/// Default backing file name.
pub const DEFAULT_FILE: &str = "grades.csv";

#[derive(Debug, Clone)]
pub struct GradeStore {
    path: PathBuf,
}

impl GradeStore {
    /// Creates a store handle without touching the filesystem.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store handle and makes sure its file has a header.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self::new(path);
        store.initialize()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the file with the header row if it does not exist yet.
    ///
    /// An existing file is never truncated. Returns `true` when the file was
    /// created by this call.
    pub fn initialize(&self) -> Result<bool> {
        let file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!(path = %self.path.display(), "Grade file already exists");
                return Ok(false);
            }
            Err(e) => return Err(e.into()),
        };

        let mut writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_writer(file);
        writer.write_record(HEADERS)?;
        writer.flush()?;

        info!(path = %self.path.display(), "Created grade file");
        Ok(true)
    }

    /// Computes the record for `name` and appends it as one row.
    ///
    /// # Errors
    ///
    /// Returns [`GradeError::EmptyScores`] without touching the file when
    /// `scores` is empty.
    pub fn add_student(&self, name: &str, scores: &[f64]) -> Result<StudentRecord> {
        let record = StudentRecord::new(name, scores)?;
        let line = encode_row(&record.to_row())?;

        // A deleted file would otherwise come back without its header.
        self.initialize()?;

        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        file.write_all(&line)?;
        file.flush()?;

        info!(
            path = %self.path.display(),
            name = %record.name,
            average = record.average,
            grade = %record.final_grade,
            "Appended student record"
        );
        Ok(record)
    }

    /// Reads every row of the file, header first, in file order.
    pub fn list_all(&self) -> Result<Vec<Vec<String>>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        debug!(path = %self.path.display(), rows = rows.len(), "Read grade file");
        Ok(rows)
    }
}

/// Encodes one CSV row in memory so the append is a single write.
fn encode_row(row: &[String]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(row)?;
    writer
        .into_inner()
        .map_err(|e| GradeError::Io(e.into_error()))
}
