// web_app/error.rs - Error types for remote calls and form input
//
// Transport and status failures come from the remote API client. Validation
// failures are produced before any request is built and never reach the
// network.

use thiserror::Error;

/// Result type for storefront operations
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Network failure or an undecodable response body
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("{operation} failed with status {status}")]
    Status { operation: &'static str, status: u16 },

    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Form fields checked before submission
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Price,
    Description,
    Image,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Title, Field::Price, Field::Description, Field::Image];

    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Product Title",
            Field::Price => "Price",
            Field::Description => "Description",
            Field::Image => "Image URL",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{} is required", .0.label())]
    Missing(Field),

    #[error("price must be a non-negative number")]
    InvalidPrice,

    #[error("image must be an absolute URL")]
    InvalidImageUrl,
}

impl ValidationError {
    /// The field the error points at
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Missing(field) => *field,
            ValidationError::InvalidPrice => Field::Price,
            ValidationError::InvalidImageUrl => Field::Image,
        }
    }
}
