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

use super::ErrorResponse;

/// Which party the service blames for an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorType {
    /// The request was invalid (HTTP 4xx).
    Client,
    /// The service failed to process a valid request (HTTP 5xx).
    Service,
    #[default]
    Unknown,
}

impl ErrorType {
    /// Classifies a HTTP status code.
    pub fn from_status_code(code: u16) -> Self {
        match code {
            400..=499 => Self::Client,
            500..=599 => Self::Service,
            _ => Self::Unknown,
        }
    }
}

/// The generic representation of an error returned by an AWS service.
///
/// Every typed exception wraps one of these. The error unmarshallers build it
/// from an [ErrorResponse] and stamp the error code they matched.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ServiceException {
    error_code: Option<String>,
    error_message: Option<String>,
    request_id: Option<String>,
    status_code: Option<u16>,
    error_type: ErrorType,
}

impl ServiceException {
    /// Creates an empty exception, mostly useful in tests and mocks.
    pub fn new() -> Self {
        Self::default()
    }

    /// The error code, e.g. `TooManyTagKeysException`.
    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }

    /// The developer-facing message returned by the service.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// The value of the `x-amzn-RequestId` header, useful when contacting
    /// AWS support.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    pub fn error_type(&self) -> ErrorType {
        self.error_type
    }

    /// Sets the [error code][Self::error_code].
    pub fn set_error_code<T: Into<String>>(mut self, v: T) -> Self {
        self.error_code = Some(v.into());
        self
    }

    /// Sets the [error message][Self::error_message].
    pub fn set_error_message<T: Into<String>>(mut self, v: T) -> Self {
        self.error_message = Some(v.into());
        self
    }

    /// Sets the [request id][Self::request_id].
    pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.request_id = Some(v.into());
        self
    }

    /// Sets the HTTP status code, and derives the [ErrorType] from it.
    pub fn set_status_code<T: Into<u16>>(mut self, v: T) -> Self {
        let code = v.into();
        self.status_code = Some(code);
        self.error_type = ErrorType::from_status_code(code);
        self
    }
}

impl From<&ErrorResponse> for ServiceException {
    fn from(value: &ErrorResponse) -> Self {
        Self {
            error_code: value.error_code().map(str::to_string),
            error_message: value.message().map(str::to_string),
            request_id: value.request_id().map(str::to_string),
            status_code: Some(value.status_code()),
            error_type: ErrorType::from_status_code(value.status_code()),
        }
    }
}

impl std::fmt::Display for ServiceException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (error_code={}",
            self.error_message.as_deref().unwrap_or("[no message]"),
            self.error_code.as_deref().unwrap_or("[none]")
        )?;
        if let Some(c) = &self.status_code {
            write!(f, ", status_code={c}")?;
        }
        if let Some(id) = &self.request_id {
            write!(f, ", request_id={id}")?;
        }
        write!(f, ")")
    }
}

impl std::error::Error for ServiceException {}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(200, ErrorType::Unknown)]
    #[test_case(400, ErrorType::Client)]
    #[test_case(429, ErrorType::Client)]
    #[test_case(500, ErrorType::Service)]
    #[test_case(503, ErrorType::Service)]
    #[test_case(302, ErrorType::Unknown)]
    fn error_type(code: u16, want: ErrorType) {
        assert_eq!(ErrorType::from_status_code(code), want);
        let exception = ServiceException::new().set_status_code(code);
        assert_eq!(exception.error_type(), want);
        assert_eq!(exception.status_code(), Some(code));
    }

    #[test]
    fn setters() {
        let exception = ServiceException::new()
            .set_error_code("InvalidRequestException")
            .set_error_message("the request is bad")
            .set_request_id("req-123");
        assert_eq!(exception.error_code(), Some("InvalidRequestException"));
        assert_eq!(exception.error_message(), Some("the request is bad"));
        assert_eq!(exception.request_id(), Some("req-123"));
        assert_eq!(exception.status_code(), None);
        assert_eq!(exception.error_type(), ErrorType::Unknown);
    }

    #[test]
    fn display() {
        let exception = ServiceException::new()
            .set_error_code("InvalidRequestException")
            .set_error_message("the request is bad")
            .set_status_code(400_u16)
            .set_request_id("req-123");
        let got = exception.to_string();
        assert!(got.contains("the request is bad"), "{got}");
        assert!(got.contains("error_code=InvalidRequestException"), "{got}");
        assert!(got.contains("status_code=400"), "{got}");
        assert!(got.contains("request_id=req-123"), "{got}");

        let got = ServiceException::new().to_string();
        assert!(got.contains("[no message]"), "{got}");
    }
}
