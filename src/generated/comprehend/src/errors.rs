// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The errors returned by Amazon Comprehend.
//!
//! Error responses are classified by their error code. Each known code has an
//! [ErrorUnmarshaller] creating the corresponding [ComprehendError] variant.
//! Responses with any other code become [ComprehendError::Unhandled].
//!
//! # Example
//! ```
//! # use aws_comprehend::errors::{self, ComprehendError};
//! # use gax::error::ErrorResponse;
//! let response = ErrorResponse::new(400).set_error_code("TooManyTagKeysException");
//! let err = errors::classify(&response);
//! assert!(matches!(err, ComprehendError::TooManyTagKeys(_)));
//! assert_eq!(err.error_code(), Some("TooManyTagKeysException"));
//! ```

use gax::error::{ErrorResponse, ServiceException};
use gax::unmarshaller::ErrorUnmarshaller;

/// A classified error response.
///
/// Each variant holds the generic [ServiceException] details: the error code,
/// message, request id, and HTTP status.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ComprehendError {
    /// The number of documents in the request exceeds the limit of 25.
    #[error("BatchSizeLimitExceededException: {0}")]
    BatchSizeLimitExceeded(ServiceException),

    /// Concurrent modification of the tags associated with a resource is not
    /// supported.
    #[error("ConcurrentModificationException: {0}")]
    ConcurrentModification(ServiceException),

    /// An internal server error occurred. Retry your request.
    #[error("InternalServerException: {0}")]
    InternalServer(ServiceException),

    /// The filter specified for the operation is invalid.
    #[error("InvalidFilterException: {0}")]
    InvalidFilter(ServiceException),

    /// The request is invalid.
    #[error("InvalidRequestException: {0}")]
    InvalidRequest(ServiceException),

    /// The specified job was not found.
    #[error("JobNotFoundException: {0}")]
    JobNotFound(ServiceException),

    /// The KMS customer managed key (CMK) entered cannot be validated.
    #[error("KmsKeyValidationException: {0}")]
    KmsKeyValidation(ServiceException),

    /// The specified resource name is already in use.
    #[error("ResourceInUseException: {0}")]
    ResourceInUse(ServiceException),

    /// The maximum number of resources per account has been exceeded.
    #[error("ResourceLimitExceededException: {0}")]
    ResourceLimitExceeded(ServiceException),

    /// The specified resource ARN was not found.
    #[error("ResourceNotFoundException: {0}")]
    ResourceNotFound(ServiceException),

    /// The specified resource is not available.
    #[error("ResourceUnavailableException: {0}")]
    ResourceUnavailable(ServiceException),

    /// The size of the input text exceeds the limit.
    #[error("TextSizeLimitExceededException: {0}")]
    TextSizeLimitExceeded(ServiceException),

    /// The number of requests exceeds the limit.
    #[error("TooManyRequestsException: {0}")]
    TooManyRequests(ServiceException),

    /// The request contains more tag keys than can be associated with a
    /// resource (50 tag keys per resource).
    #[error("TooManyTagKeysException: {0}")]
    TooManyTagKeys(ServiceException),

    /// The request contains more tags than can be associated with a resource
    /// (50 tags per resource).
    #[error("TooManyTagsException: {0}")]
    TooManyTags(ServiceException),

    /// Amazon Comprehend can't process the language of the input text.
    #[error("UnsupportedLanguageException: {0}")]
    UnsupportedLanguage(ServiceException),

    /// An error code not known to this version of the client.
    #[error("unhandled service error: {0}")]
    Unhandled(ServiceException),
}

impl ComprehendError {
    /// The generic details of the error.
    pub fn exception(&self) -> &ServiceException {
        match self {
            Self::BatchSizeLimitExceeded(e) => e,
            Self::ConcurrentModification(e) => e,
            Self::InternalServer(e) => e,
            Self::InvalidFilter(e) => e,
            Self::InvalidRequest(e) => e,
            Self::JobNotFound(e) => e,
            Self::KmsKeyValidation(e) => e,
            Self::ResourceInUse(e) => e,
            Self::ResourceLimitExceeded(e) => e,
            Self::ResourceNotFound(e) => e,
            Self::ResourceUnavailable(e) => e,
            Self::TextSizeLimitExceeded(e) => e,
            Self::TooManyRequests(e) => e,
            Self::TooManyTagKeys(e) => e,
            Self::TooManyTags(e) => e,
            Self::UnsupportedLanguage(e) => e,
            Self::Unhandled(e) => e,
        }
    }

    /// The error code stamped on the exception.
    pub fn error_code(&self) -> Option<&str> {
        self.exception().error_code()
    }
}

/// Classifies `BatchSizeLimitExceededException` responses as [ComprehendError::BatchSizeLimitExceeded].
pub static BATCH_SIZE_LIMIT_EXCEEDED_EXCEPTION: ErrorUnmarshaller<ComprehendError> =
    ErrorUnmarshaller::new(
        "BatchSizeLimitExceededException",
        ComprehendError::BatchSizeLimitExceeded,
    );

/// Classifies `ConcurrentModificationException` responses as [ComprehendError::ConcurrentModification].
pub static CONCURRENT_MODIFICATION_EXCEPTION: ErrorUnmarshaller<ComprehendError> =
    ErrorUnmarshaller::new(
        "ConcurrentModificationException",
        ComprehendError::ConcurrentModification,
    );

/// Classifies `InternalServerException` responses as [ComprehendError::InternalServer].
pub static INTERNAL_SERVER_EXCEPTION: ErrorUnmarshaller<ComprehendError> =
    ErrorUnmarshaller::new("InternalServerException", ComprehendError::InternalServer);

/// Classifies `InvalidFilterException` responses as [ComprehendError::InvalidFilter].
pub static INVALID_FILTER_EXCEPTION: ErrorUnmarshaller<ComprehendError> =
    ErrorUnmarshaller::new("InvalidFilterException", ComprehendError::InvalidFilter);

/// Classifies `InvalidRequestException` responses as [ComprehendError::InvalidRequest].
pub static INVALID_REQUEST_EXCEPTION: ErrorUnmarshaller<ComprehendError> =
    ErrorUnmarshaller::new("InvalidRequestException", ComprehendError::InvalidRequest);

/// Classifies `JobNotFoundException` responses as [ComprehendError::JobNotFound].
pub static JOB_NOT_FOUND_EXCEPTION: ErrorUnmarshaller<ComprehendError> =
    ErrorUnmarshaller::new("JobNotFoundException", ComprehendError::JobNotFound);

/// Classifies `KmsKeyValidationException` responses as [ComprehendError::KmsKeyValidation].
pub static KMS_KEY_VALIDATION_EXCEPTION: ErrorUnmarshaller<ComprehendError> =
    ErrorUnmarshaller::new("KmsKeyValidationException", ComprehendError::KmsKeyValidation);

/// Classifies `ResourceInUseException` responses as [ComprehendError::ResourceInUse].
pub static RESOURCE_IN_USE_EXCEPTION: ErrorUnmarshaller<ComprehendError> =
    ErrorUnmarshaller::new("ResourceInUseException", ComprehendError::ResourceInUse);

/// Classifies `ResourceLimitExceededException` responses as [ComprehendError::ResourceLimitExceeded].
pub static RESOURCE_LIMIT_EXCEEDED_EXCEPTION: ErrorUnmarshaller<ComprehendError> =
    ErrorUnmarshaller::new(
        "ResourceLimitExceededException",
        ComprehendError::ResourceLimitExceeded,
    );

/// Classifies `ResourceNotFoundException` responses as [ComprehendError::ResourceNotFound].
pub static RESOURCE_NOT_FOUND_EXCEPTION: ErrorUnmarshaller<ComprehendError> =
    ErrorUnmarshaller::new("ResourceNotFoundException", ComprehendError::ResourceNotFound);

/// Classifies `ResourceUnavailableException` responses as [ComprehendError::ResourceUnavailable].
pub static RESOURCE_UNAVAILABLE_EXCEPTION: ErrorUnmarshaller<ComprehendError> =
    ErrorUnmarshaller::new("ResourceUnavailableException", ComprehendError::ResourceUnavailable);

/// Classifies `TextSizeLimitExceededException` responses as [ComprehendError::TextSizeLimitExceeded].
pub static TEXT_SIZE_LIMIT_EXCEEDED_EXCEPTION: ErrorUnmarshaller<ComprehendError> =
    ErrorUnmarshaller::new(
        "TextSizeLimitExceededException",
        ComprehendError::TextSizeLimitExceeded,
    );

/// Classifies `TooManyRequestsException` responses as [ComprehendError::TooManyRequests].
pub static TOO_MANY_REQUESTS_EXCEPTION: ErrorUnmarshaller<ComprehendError> =
    ErrorUnmarshaller::new("TooManyRequestsException", ComprehendError::TooManyRequests);

/// Classifies `TooManyTagKeysException` responses as [ComprehendError::TooManyTagKeys].
pub static TOO_MANY_TAG_KEYS_EXCEPTION: ErrorUnmarshaller<ComprehendError> =
    ErrorUnmarshaller::new("TooManyTagKeysException", ComprehendError::TooManyTagKeys);

/// Classifies `TooManyTagsException` responses as [ComprehendError::TooManyTags].
pub static TOO_MANY_TAGS_EXCEPTION: ErrorUnmarshaller<ComprehendError> =
    ErrorUnmarshaller::new("TooManyTagsException", ComprehendError::TooManyTags);

/// Classifies `UnsupportedLanguageException` responses as [ComprehendError::UnsupportedLanguage].
pub static UNSUPPORTED_LANGUAGE_EXCEPTION: ErrorUnmarshaller<ComprehendError> =
    ErrorUnmarshaller::new("UnsupportedLanguageException", ComprehendError::UnsupportedLanguage);

/// All the error unmarshallers, in the order they are tried.
pub static ERROR_UNMARSHALLERS: [&ErrorUnmarshaller<ComprehendError>; 16] = [
    &BATCH_SIZE_LIMIT_EXCEEDED_EXCEPTION,
    &CONCURRENT_MODIFICATION_EXCEPTION,
    &INTERNAL_SERVER_EXCEPTION,
    &INVALID_FILTER_EXCEPTION,
    &INVALID_REQUEST_EXCEPTION,
    &JOB_NOT_FOUND_EXCEPTION,
    &KMS_KEY_VALIDATION_EXCEPTION,
    &RESOURCE_IN_USE_EXCEPTION,
    &RESOURCE_LIMIT_EXCEEDED_EXCEPTION,
    &RESOURCE_NOT_FOUND_EXCEPTION,
    &RESOURCE_UNAVAILABLE_EXCEPTION,
    &TEXT_SIZE_LIMIT_EXCEEDED_EXCEPTION,
    &TOO_MANY_REQUESTS_EXCEPTION,
    &TOO_MANY_TAG_KEYS_EXCEPTION,
    &TOO_MANY_TAGS_EXCEPTION,
    &UNSUPPORTED_LANGUAGE_EXCEPTION,
];

/// Finds the unmarshaller for `code`, if any.
pub fn unmarshaller(code: &str) -> Option<&'static ErrorUnmarshaller<ComprehendError>> {
    ERROR_UNMARSHALLERS
        .iter()
        .copied()
        .find(|u| u.code() == code)
}

/// Classifies an error response.
pub fn classify(response: &ErrorResponse) -> ComprehendError {
    gax::unmarshaller::classify(
        ERROR_UNMARSHALLERS.iter().copied(),
        ComprehendError::Unhandled,
        response,
    )
}
