//! Point sources: where records come from.
//!
//! The synthesis core only sees `Vec<PointRecord>`; how the records are
//! fetched is the source's business. No source retries.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::records::{PointRecord, parse_records};
use crate::{SourceError, SourceResult};

/// Anything that can hand over a batch of point records.
pub trait PointSource {
    /// Human-readable label used in errors and logs.
    fn name(&self) -> String;

    fn fetch(&self) -> SourceResult<Vec<PointRecord>>;
}

/// Records read from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PointSource for JsonFileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> SourceResult<Vec<PointRecord>> {
        // Unreadable bytes are a payload problem; anything else means the file
        // could not be fetched.
        let text = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::InvalidData => SourceError::data_format(self.name(), e.to_string()),
            _ => SourceError::upstream(self.name(), e.to_string()),
        })?;
        let records = parse_records(&text, &self.name())?;
        debug!(source = %self.name(), records = records.len(), "fetched point records");
        Ok(records)
    }
}

/// Records parsed from JSON text already in memory (e.g. read from stdin).
#[derive(Debug, Clone)]
pub struct JsonTextSource {
    label: String,
    text: String,
}

impl JsonTextSource {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

impl PointSource for JsonTextSource {
    fn name(&self) -> String {
        self.label.clone()
    }

    fn fetch(&self) -> SourceResult<Vec<PointRecord>> {
        parse_records(&self.text, &self.label)
    }
}

/// Fixed, in-memory records.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<PointRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<PointRecord>) -> Self {
        Self { records }
    }
}

impl PointSource for StaticSource {
    fn name(&self) -> String {
        "static".to_string()
    }

    fn fetch(&self) -> SourceResult<Vec<PointRecord>> {
        Ok(self.records.clone())
    }
}
