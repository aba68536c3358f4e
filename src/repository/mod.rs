//! File-backed storage for the roster.
//!
//! The whole roster lives in memory and is written back in full after every
//! change. Writes go to a temporary file next to the destination which then
//! replaces it, so a failed save leaves the previous contents intact.
//!
//! The repository assumes it is the only writer of its file for the lifetime
//! of the process.

mod error;

pub use error::RepositoryError;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::codec;
use crate::models::*;

pub struct Repository {
    path: PathBuf,
    records: Roster,
}

impl Repository {
    /// Load the roster stored at `path`.
    ///
    /// A missing file is an empty roster. A file that exists but cannot be
    /// decoded is an error; it is never replaced by an empty roster.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let path = path.into();
        let records = read_roster(&path)?;
        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record and persist the roster.
    ///
    /// Duplicate names are allowed. If the save fails the record is kept in
    /// memory, so calling [`Repository::save`] again retries the write.
    pub fn add(&mut self, record: impl Into<Record>) -> Result<(), RepositoryError> {
        let record = record.into();
        tracing::info!(
            kind = record.kind().as_str(),
            name = %record.person().full_name(),
            "Adding record"
        );
        self.records.push(record);
        self.save()
    }

    /// Records whose first or last name contains `query`, ignoring case, in roster order.
    pub fn find(&self, query: &str) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|record| record.person().matches(query))
            .collect()
    }

    /// Overwrite the backing file with the full roster.
    pub fn save(&self) -> Result<(), RepositoryError> {
        let json = codec::encode_pretty(&self.records)?;
        write_atomic(&self.path, json.as_bytes()).map_err(|source| {
            tracing::error!(path = %self.path.display(), error = %source, "Failed to save roster");
            RepositoryError::Write {
                path: self.path.clone(),
                source,
            }
        })?;
        tracing::debug!(
            path = %self.path.display(),
            records = self.records.len(),
            "Saved roster"
        );
        Ok(())
    }
}

fn read_roster(path: &Path) -> Result<Roster, RepositoryError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No roster file yet, starting empty");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(RepositoryError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    // Editors on Windows like to prepend a byte order mark.
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
    let records = codec::decode(content).map_err(|source| RepositoryError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), records = records.len(), "Loaded roster");
    Ok(records)
}

fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut file = NamedTempFile::new_in(parent)?;
    file.write_all(contents)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
