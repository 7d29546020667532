//! Mapping of internal failures onto service errors.

use localdyn_model::error::{DynamoDBError, DynamoDBErrorCode};

use crate::storage::StorageError;

/// Convert a storage error into a DynamoDB validation error.
///
/// Takes `e` by value because this is used as a closure argument to `.map_err()`.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn storage_error_to_dynamodb(e: StorageError) -> DynamoDBError {
    DynamoDBError::with_message(DynamoDBErrorCode::ValidationException, e.to_string())
}

impl From<StorageError> for DynamoDBError {
    fn from(e: StorageError) -> Self {
        storage_error_to_dynamodb(e)
    }
}
