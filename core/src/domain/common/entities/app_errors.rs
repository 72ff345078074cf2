use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CoreError {
    #[error("Item with ID '{0}' not found")]
    ItemNotFound(String),

    #[error("Invalid price {price} for item '{item_id}': {reason}")]
    InvalidPrice {
        item_id: String,
        price: f64,
        reason: String,
    },

    #[error("Invalid menu: {0}")]
    InvalidMenu(String),

    #[error("Target and affecting items cannot be the same ('{0}')")]
    SameItem(String),

    #[error("Invalid percentage change {0}: expected a value strictly between -1 and 10")]
    InvalidPercentageChange(f64),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    #[error("POS integration is not configured")]
    PosNotConfigured,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error")]
    InternalServerError,
}
