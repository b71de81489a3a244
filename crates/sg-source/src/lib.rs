//! sg-source: point records and the sources that supply them.
//!
//! Upstream data arrives as records carrying a point name and a
//! string-encoded coordinate pair. This crate parses those records and turns
//! them into a `Layout`.

pub mod coords;
pub mod layout;
pub mod records;
pub mod source;

pub use coords::{CoordError, parse_coordinates};
pub use layout::build_layout;
pub use records::{PointRecord, parse_records};
pub use source::{JsonFileSource, JsonTextSource, PointSource, StaticSource};

pub type SourceResult<T> = Result<T, SourceError>;

#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    #[error("Data format error in {record}: {reason}")]
    DataFormat { record: String, reason: String },

    #[error("Upstream fetch from {source_name} failed: {reason}")]
    UpstreamFetch { source_name: String, reason: String },

    #[error("Layout error: {0}")]
    Layout(#[from] sg_core::SgError),
}

impl SourceError {
    pub(crate) fn data_format(record: impl Into<String>, reason: impl Into<String>) -> Self {
        SourceError::DataFormat {
            record: record.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn upstream(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        SourceError::UpstreamFetch {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }
}
