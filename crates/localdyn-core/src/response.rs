//! Response envelope wrapped around every successful operation.

use std::collections::HashMap;

use serde::Serialize;

/// Checksum algorithm applied to a response body. The store never computes one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ChecksumAlgorithm {
    #[default]
    #[serde(rename = "NONE")]
    None,
}

/// Whether a response checksum was validated. The store never validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ChecksumValidationStatus {
    #[default]
    #[serde(rename = "NOT_VALIDATED")]
    NotValidated,
}

/// Per-call metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseMetadata {
    pub request_id: String,
    pub checksum_algorithm: ChecksumAlgorithm,
    pub checksum_validation_status: ChecksumValidationStatus,
    pub metadata: HashMap<String, String>,
}

impl ResponseMetadata {
    #[must_use]
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            checksum_algorithm: ChecksumAlgorithm::None,
            checksum_validation_status: ChecksumValidationStatus::NotValidated,
            metadata: HashMap::new(),
        }
    }
}

/// A successful answer: the typed output plus the envelope a networked
/// client would have seen.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceResponse<T> {
    pub output: T,
    pub metadata: ResponseMetadata,
    pub http_status_code: http::StatusCode,
    /// Fixed placeholder: 500 for table operations, 2 for everything else.
    pub content_length: i64,
}

impl<T> ServiceResponse<T> {
    /// A `200 OK` response.
    #[must_use]
    pub fn ok(output: T, metadata: ResponseMetadata, content_length: i64) -> Self {
        Self {
            output,
            metadata,
            http_status_code: http::StatusCode::OK,
            content_length,
        }
    }

    /// Transforms the output, keeping the envelope.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ServiceResponse<U> {
        ServiceResponse {
            output: f(self.output),
            metadata: self.metadata,
            http_status_code: self.http_status_code,
            content_length: self.content_length,
        }
    }

    /// Fallible variant of [`ServiceResponse::map`].
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<ServiceResponse<U>, E> {
        Ok(ServiceResponse {
            output: f(self.output)?,
            metadata: self.metadata,
            http_status_code: self.http_status_code,
            content_length: self.content_length,
        })
    }
}
