//! Error taxonomy for loading and enriching the memorial records.

use thiserror::Error;

/// A single record's date fields could not be turned into a valid lifespan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The date string does not match `YYYY-MM-DD`.
    #[error("record `{record}` has an invalid {field} date `{value}`")]
    InvalidDate {
        record: String,
        field: &'static str,
        value: String,
    },

    /// The death date precedes the birth date.
    #[error("record `{record}` died ({died}) before it was born ({born})")]
    DiedBeforeBorn {
        record: String,
        born: String,
        died: String,
    },
}

/// Loading the raw collection failed. Always fatal to initialization.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to fetch records from `{path}`: {reason}")]
    Fetch { path: String, reason: String },

    #[error("record source `{path}` answered with HTTP {status}")]
    Status { path: String, status: u16 },

    #[error("embedded record file `{0}` is missing")]
    MissingEmbedded(&'static str),

    #[error("record payload is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Record(#[from] ParseError),
}

/// The aggregator was handed an empty collection.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no records to summarize")]
pub struct EmptyInputError;
