//! Error types for the stock analyzer.

use chrono::NaiveDate;
use thiserror::Error;

/// Coarse classification of a failure, used by callers to pick a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied malformed parameters.
    InvalidArgument,
    /// The series is shorter than the computation needs.
    InsufficientData,
    /// Anything else (configuration, IO, serialization).
    Other,
}

/// Top-level stock analyzer error.
#[derive(Error, Debug)]
pub enum StockError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Indicator error: {0}")]
    Indicator(#[from] IndicatorError),

    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StockError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StockError::Data(e) => e.kind(),
            StockError::Indicator(e) => e.kind(),
            StockError::Analysis(e) => e.kind(),
            StockError::Config(_) | StockError::Io(_) | StockError::Serialization(_) => {
                ErrorKind::Other
            }
        }
    }
}

/// Series generation and construction errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid generator configuration: {0}")]
    InvalidConfig(String),

    #[error("Bars out of order at index {index}: {current} does not follow {previous}")]
    OutOfOrder {
        index: usize,
        previous: NaiveDate,
        current: NaiveDate,
    },

    #[error("Malformed bar at index {index}: {reason}")]
    MalformedBar { index: usize, reason: String },
}

impl DataError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DataError::InvalidConfig(_) => ErrorKind::Other,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

/// Indicator calculation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IndicatorError {
    #[error("Insufficient data: need {required} points, have {available}")]
    InsufficientData { required: usize, available: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl IndicatorError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            IndicatorError::InsufficientData { .. } => ErrorKind::InsufficientData,
            IndicatorError::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }
}

/// Market classification errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Insufficient data: need {required} bars, have {available}")]
    InsufficientData { required: usize, available: usize },

    #[error("Invalid classifier configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Indicator(#[from] IndicatorError),
}

impl AnalysisError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::InsufficientData { .. } => ErrorKind::InsufficientData,
            AnalysisError::InvalidConfig(_) => ErrorKind::Other,
            AnalysisError::Indicator(e) => e.kind(),
        }
    }
}

/// Result type alias for stock analyzer operations.
pub type StockResult<T> = Result<T, StockError>;
