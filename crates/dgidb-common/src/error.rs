use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("Input has no header row: {0}")]
    EmptyFile(String),

    #[error("Missing column in header: {0}")]
    MissingColumn(String),

    #[error("Row at line {line} has {found} fields; column `{column}` is at index {index}")]
    ShortRow {
        line: u64,
        found: usize,
        column: String,
        index: usize,
    },

    #[error("Cannot parse drug concept id {concept_id} (associated drug name is {drug_name})")]
    DrugConceptId { concept_id: String, drug_name: String },

    #[error("Cannot parse interaction group score {value:?}: {source}")]
    Score {
        value: String,
        source: ParseFloatError,
    },

    #[error("Interaction group score {0:?} is not a finite number")]
    NonFiniteScore(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Security policy violation: {0}")]
    SecurityError(String),
}

pub type Result<T> = std::result::Result<T, IngestError>;
