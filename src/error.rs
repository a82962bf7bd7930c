//! Errors for catalog loading, validation and parsing of user input.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while looking up or loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Inversión no encontrada: {0}")]
    NotFound(String),

    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog JSON is not well-formatted: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Validation(#[from] ValidationError),
}

/// Invariant violations found in a catalog file.
///
/// The seed catalog is trusted; these only ever come from user-supplied JSON.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Investment id is required")]
    EmptyId,

    #[error("Duplicate investment id '{0}'")]
    DuplicateId(String),

    #[error("Duplicate investment title '{0}'")]
    DuplicateTitle(String),

    #[error("Holding {symbol} in '{id}' has a negative percentage: {percentage}")]
    NegativeHolding {
        id: String,
        symbol: String,
        percentage: f64,
    },

    #[error("Holding {symbol} appears more than once in '{id}'")]
    DuplicateSymbol { id: String, symbol: String },

    #[error("Evolution of '{id}' is not strictly ascending at {date}")]
    EvolutionOutOfOrder { id: String, date: NaiveDate },

    #[error("Evolution of '{id}' contains a weekend date: {date}")]
    EvolutionOnWeekend { id: String, date: NaiveDate },
}

/// Failures parsing user-facing enum names.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown risk level: '{0}'")]
    UnknownRiskLevel(String),

    #[error("Unknown view mode: '{0}'")]
    UnknownViewMode(String),

    #[error("Unknown chart mode: '{0}'")]
    UnknownChartMode(String),
}
