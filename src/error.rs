use thiserror::Error;

use crate::models::{RowId, RowState};

#[derive(Debug, Error)]
pub enum ShopError {
    #[error("Expected exactly {expected} day files (one per weekday), got {found}")]
    WrongFileCount { expected: usize, found: usize },

    #[error(
        "Unexpected day file '{0}': files must be exactly monday.json, tuesday.json, \
         wednesday.json, thursday.json, friday.json, saturday.json and sunday.json"
    )]
    UnknownDayFile(String),

    #[error("Day file '{0}' was given more than once")]
    DuplicateDayFile(String),

    #[error("Failed to parse {file}: {source}")]
    DayParse {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{file}: '{food}' has invalid grams {grams} (must be a non-negative number)")]
    NegativeGrams { file: String, food: String, grams: f64 },

    #[error("Could not load catalog: {0}")]
    CatalogFetch(String),

    #[error("Could not parse catalog: {0}")]
    CatalogParse(#[source] serde_json::Error),

    #[error("Row not found: {0}")]
    RowNotFound(RowId),

    #[error("Cannot {action} row {row} while it is in {state:?} state")]
    InvalidTransition {
        row: RowId,
        action: &'static str,
        state: RowState,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ShopError>;
