use std::fmt;

pub const INVALID_QUERY_MESSAGE: &str = "Invalid query. Please provide a valid search string.";
pub const DATABASE_ERROR_MESSAGE: &str = "A database error occurred. Please try again later.";
pub const UNEXPECTED_ERROR_MESSAGE: &str =
    "An unexpected error occurred. Please try again later.";

/// Failures inside the search pipeline. None of them reach the caller as-is:
/// `user_message` is what gets returned, the detail is only logged.
#[derive(Debug)]
pub enum SearchError {
    InvalidInput(String),
    ParseFailure(String),
    StorageFault(String),
    Unexpected(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            SearchError::ParseFailure(msg) => write!(f, "Parse failure: {}", msg),
            SearchError::StorageFault(msg) => write!(f, "Database error: {}", msg),
            SearchError::Unexpected(msg) => write!(f, "Unexpected error: {}", msg),
        }
    }
}

impl std::error::Error for SearchError {}

impl SearchError {
    /// Classifies a storage-layer error: driver errors are storage faults,
    /// anything else is unexpected.
    pub fn from_storage(err: anyhow::Error) -> Self {
        if err.downcast_ref::<sqlx::Error>().is_some() {
            SearchError::StorageFault(format!("{:#}", err))
        } else {
            SearchError::Unexpected(format!("{:#}", err))
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            SearchError::InvalidInput(_) => INVALID_QUERY_MESSAGE,
            SearchError::StorageFault(_) => DATABASE_ERROR_MESSAGE,
            SearchError::ParseFailure(_) | SearchError::Unexpected(_) => UNEXPECTED_ERROR_MESSAGE,
        }
    }
}
