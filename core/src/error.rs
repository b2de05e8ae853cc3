//! Error types for the meals API client.
//!
//! # Design
//! Two layers. `ApiError` is the low-level cause produced by the request
//! builder, the response parser or the transport. `FoodError` is what callers
//! of `FoodApi` see: one variant per operation, each displaying a fixed
//! message meant for end users, with the `ApiError` kept as `source()` for
//! diagnostics. The store does not distinguish "not found" from other
//! failures, so neither do these types.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Low-level failure behind a `FoodError`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, timeout, ...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// The logical operation a `FoodError` belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Load,
    Search,
    Create,
    Update,
    Delete,
    Fetch,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Load => "load",
            Operation::Search => "search",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::Fetch => "fetch",
        }
    }

    /// Wrap `cause` in this operation's error kind.
    pub fn fail(self, cause: ApiError) -> FoodError {
        match self {
            Operation::Load => FoodError::Load(cause),
            Operation::Search => FoodError::Search(cause),
            Operation::Create => FoodError::Create(cause),
            Operation::Update => FoodError::Update(cause),
            Operation::Delete => FoodError::Delete(cause),
            Operation::Fetch => FoodError::Fetch(cause),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by `FoodApi` operations.
#[derive(Debug, Error)]
pub enum FoodError {
    #[error("Failed to load meals. Please try again.")]
    Load(#[source] ApiError),

    #[error("Failed to search meals. Please try again.")]
    Search(#[source] ApiError),

    #[error("Failed to add meal. Please try again.")]
    Create(#[source] ApiError),

    #[error("Failed to update meal. Please try again.")]
    Update(#[source] ApiError),

    #[error("Failed to delete meal. Please try again.")]
    Delete(#[source] ApiError),

    #[error("Failed to load meal details. Please try again.")]
    Fetch(#[source] ApiError),
}

impl FoodError {
    pub fn operation(&self) -> Operation {
        match self {
            FoodError::Load(_) => Operation::Load,
            FoodError::Search(_) => Operation::Search,
            FoodError::Create(_) => Operation::Create,
            FoodError::Update(_) => Operation::Update,
            FoodError::Delete(_) => Operation::Delete,
            FoodError::Fetch(_) => Operation::Fetch,
        }
    }

    pub fn cause(&self) -> &ApiError {
        match self {
            FoodError::Load(cause)
            | FoodError::Search(cause)
            | FoodError::Create(cause)
            | FoodError::Update(cause)
            | FoodError::Delete(cause)
            | FoodError::Fetch(cause) => cause,
        }
    }
}

pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Message to show an end user for `err`.
///
/// Walks the source chain for a `FoodError` and returns its fixed message;
/// anything else gets a generic message so low-level details never leak.
pub fn error_message(err: &(dyn StdError + 'static)) -> String {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(food) = e.downcast_ref::<FoodError>() {
            return food.to_string();
        }
        current = e.source();
    }
    UNEXPECTED_ERROR_MESSAGE.to_string()
}
