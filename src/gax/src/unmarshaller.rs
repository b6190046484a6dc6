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

//! Error unmarshallers.
//!
//! An error unmarshaller is a classification rule: it pairs one error code
//! with the constructor of one typed exception. Services define a table of
//! rules, and [classify] picks the first rule whose code matches exactly.

use crate::error::{ErrorResponse, ServiceException};

/// Classifies error responses with one exact error code.
///
/// # Example
/// ```
/// # use aws_comprehend_gax::error::{ErrorResponse, ServiceException};
/// # use aws_comprehend_gax::unmarshaller::ErrorUnmarshaller;
/// #[derive(Debug)]
/// enum MyError { Throttled(ServiceException) }
/// static THROTTLED: ErrorUnmarshaller<MyError> =
///     ErrorUnmarshaller::new("ThrottlingException", MyError::Throttled);
///
/// let response = ErrorResponse::new(400).set_error_code("ThrottlingException");
/// assert!(THROTTLED.matches(&response));
/// let MyError::Throttled(e) = THROTTLED.unmarshall(&response);
/// assert_eq!(e.error_code(), Some("ThrottlingException"));
/// ```
pub struct ErrorUnmarshaller<E> {
    code: &'static str,
    constructor: fn(ServiceException) -> E,
}

impl<E> ErrorUnmarshaller<E> {
    pub const fn new(code: &'static str, constructor: fn(ServiceException) -> E) -> Self {
        Self { code, constructor }
    }

    /// The error code matched by this unmarshaller.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Returns true iff the response error code is exactly [code][Self::code].
    pub fn matches(&self, response: &ErrorResponse) -> bool {
        response.error_code() == Some(self.code)
    }

    /// Creates the typed exception for `response`.
    ///
    /// The generic fields are decoded from the response and the error code is
    /// always set to [code][Self::code].
    ///
    /// The caller must check [matches][Self::matches] first. Debug builds
    /// panic if the response carries a different error code.
    pub fn unmarshall(&self, response: &ErrorResponse) -> E {
        debug_assert!(
            self.matches(response),
            "{} cannot unmarshall an error response with code {:?}",
            self.code,
            response.error_code()
        );
        let exception = ServiceException::from(response).set_error_code(self.code);
        (self.constructor)(exception)
    }
}

impl<E> std::fmt::Debug for ErrorUnmarshaller<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorUnmarshaller")
            .field("code", &self.code)
            .finish()
    }
}

/// Runs `response` through `rules`, in order.
///
/// The first matching rule creates the exception. If no rule matches, the
/// `fallback` constructor receives the generic exception as decoded from the
/// response.
pub fn classify<'a, E, I>(rules: I, fallback: fn(ServiceException) -> E, response: &ErrorResponse) -> E
where
    E: 'a,
    I: IntoIterator<Item = &'a ErrorUnmarshaller<E>>,
{
    match rules.into_iter().find(|r| r.matches(response)) {
        Some(rule) => {
            tracing::debug!(
                error_code = rule.code(),
                status_code = response.status_code(),
                "classified service error"
            );
            rule.unmarshall(response)
        }
        None => {
            tracing::warn!(
                error_code = response.error_code(),
                status_code = response.status_code(),
                "unrecognized service error code"
            );
            fallback(ServiceException::from(response))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[derive(Debug, PartialEq)]
    enum TestError {
        TooManyTagKeys(ServiceException),
        TooManyTags(ServiceException),
        Unhandled(ServiceException),
    }

    static RULES: [ErrorUnmarshaller<TestError>; 2] = [
        ErrorUnmarshaller::new("TooManyTagKeysException", TestError::TooManyTagKeys),
        ErrorUnmarshaller::new("TooManyTagsException", TestError::TooManyTags),
    ];

    #[test_case("TooManyTagKeysException", true)]
    #[test_case("TooManyTagKeysExceptions", false)]
    #[test_case("TooManyTagKeysExceptio", false)]
    #[test_case("toomanytagkeysexception", false)]
    #[test_case(" TooManyTagKeysException", false)]
    #[test_case("", false)]
    fn matches(code: &str, want: bool) {
        let response = ErrorResponse::new(400).set_error_code(code);
        assert_eq!(RULES[0].matches(&response), want);
    }

    #[test]
    fn matches_missing_code() {
        assert!(!RULES[0].matches(&ErrorResponse::new(400)));
    }

    #[test]
    fn unmarshall() {
        let response = ErrorResponse::new(400)
            .set_error_code("TooManyTagKeysException")
            .set_message("too many keys")
            .set_request_id("req-1");
        let got = RULES[0].unmarshall(&response);
        let want = ServiceException::new()
            .set_error_code("TooManyTagKeysException")
            .set_error_message("too many keys")
            .set_request_id("req-1")
            .set_status_code(400_u16);
        assert_eq!(got, TestError::TooManyTagKeys(want));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "cannot unmarshall")]
    fn unmarshall_precondition() {
        let response = ErrorResponse::new(400).set_error_code("Other");
        let _ = RULES[0].unmarshall(&response);
    }

    #[test]
    fn classify_match() {
        let response = ErrorResponse::new(400).set_error_code("TooManyTagsException");
        let got = classify(&RULES, TestError::Unhandled, &response);
        assert!(matches!(got, TestError::TooManyTags(ref e) if e.error_code() == Some("TooManyTagsException")), "{got:?}");
    }

    #[test]
    fn classify_fallback() {
        let response = ErrorResponse::new(503)
            .set_error_code("SomethingNewException")
            .set_message("try again");
        let got = classify(&RULES, TestError::Unhandled, &response);
        let want = ServiceException::new()
            .set_error_code("SomethingNewException")
            .set_error_message("try again")
            .set_status_code(503_u16);
        assert_eq!(got, TestError::Unhandled(want));
    }

    #[test]
    fn debug() {
        let got = format!("{:?}", RULES[1]);
        assert!(got.contains("TooManyTagsException"), "{got}");
    }
}
