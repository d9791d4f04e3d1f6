use thiserror::Error;

#[derive(Debug, Error)]
pub enum SwapError {
    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Cannot compute a portion: {0}")]
    UndefinedCalculation(String),

    #[error("Selected food is the same as the original")]
    NoOpSwap,

    #[error("Macros out of the allowed range: {}", .0.join("; "))]
    OutOfRange(Vec<String>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, SwapError>;
