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

use bytes::Bytes;
use http::HeaderMap;
use serde::Deserialize;
use serde_with::DefaultOnError;

const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";
const REQUEST_ID_HEADER: &str = "x-amzn-requestid";

/// A parsed AWS JSON error response.
///
/// This is the input to the error unmarshallers: they only look at the
/// [error code][ErrorResponse::error_code], the rest of the fields feed the
/// generic [ServiceException][super::ServiceException].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ErrorResponse {
    status_code: u16,
    error_code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
    headers: HeaderMap,
}

/// The body of an AWS JSON 1.1 error response.
///
/// Each field is read independently, a field with an unexpected type reads
/// as absent without discarding the others.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorPayload {
    #[serde(rename = "__type")]
    #[serde_as(deserialize_as = "DefaultOnError")]
    error_type: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    code: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    message: Option<String>,
    #[serde(rename = "Message")]
    #[serde_as(deserialize_as = "DefaultOnError")]
    pascal_message: Option<String>,
}

impl ErrorResponse {
    /// Creates a response with only a status code, mostly useful in tests.
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            ..Default::default()
        }
    }

    /// Parses the error code, message, and request id out of a non-2xx
    /// response.
    ///
    /// The error code comes from the `x-amzn-ErrorType` header, or the
    /// `__type` (or `code`) field in the payload. Payloads that are not JSON
    /// objects are treated as empty, the response is still usable.
    pub fn from_http(status_code: u16, headers: &HeaderMap, body: &Bytes) -> Self {
        let payload = serde_json::from_slice::<ErrorPayload>(body).unwrap_or_default();
        let header_code = headers
            .get(ERROR_TYPE_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let error_code = header_code
            .or(payload.error_type)
            .or(payload.code)
            .and_then(|c| sanitize_error_code(&c));
        let request_id = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        Self {
            status_code,
            error_code,
            message: payload.message.or(payload.pascal_message),
            request_id,
            headers: headers.clone(),
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// The sanitized error code, e.g. `TooManyTagKeysException`.
    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Sets the [error code][Self::error_code], without sanitizing it.
    pub fn set_error_code<T: Into<String>>(mut self, v: T) -> Self {
        self.error_code = Some(v.into());
        self
    }

    /// Sets the [message][Self::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = Some(v.into());
        self
    }

    /// Sets the [request id][Self::request_id].
    pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.request_id = Some(v.into());
        self
    }
}

/// Removes the namespace (`aws.comprehend#`) and the trailing URI
/// (`:http://...`) that some services add to error codes.
fn sanitize_error_code(raw: &str) -> Option<String> {
    let code = raw.split(':').next().unwrap_or(raw);
    let code = code.rsplit('#').next().unwrap_or(code).trim();
    if code.is_empty() {
        return None;
    }
    Some(code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;
    use serde_json::json;
    use test_case::test_case;

    fn body(v: serde_json::Value) -> Bytes {
        Bytes::from(v.to_string())
    }

    #[test_case("TooManyTagKeysException", Some("TooManyTagKeysException"))]
    #[test_case("aws.comprehend#TooManyTagKeysException", Some("TooManyTagKeysException"))]
    #[test_case("TooManyTagKeysException:http://internal.amazon.com/", Some("TooManyTagKeysException"))]
    #[test_case("com.amazon#InvalidRequestException:http://x", Some("InvalidRequestException"))]
    #[test_case("", None)]
    #[test_case("aws.comprehend#", None)]
    fn sanitize(input: &str, want: Option<&str>) {
        assert_eq!(sanitize_error_code(input).as_deref(), want);
    }

    #[test]
    fn from_body() {
        let payload = body(json!({
            "__type": "com.amazonaws.comprehend#TooManyTagKeysException",
            "message": "too many tag keys",
        }));
        let mut headers = HeaderMap::new();
        headers.insert("x-amzn-requestid", HeaderValue::from_static("req-42"));
        let got = ErrorResponse::from_http(400, &headers, &payload);
        assert_eq!(got.status_code(), 400);
        assert_eq!(got.error_code(), Some("TooManyTagKeysException"));
        assert_eq!(got.message(), Some("too many tag keys"));
        assert_eq!(got.request_id(), Some("req-42"));
        assert_eq!(got.headers(), &headers);
    }

    #[test]
    fn header_wins() {
        let payload = body(json!({"__type": "InternalServerException", "Message": "boom"}));
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-amzn-errortype",
            HeaderValue::from_static("ResourceInUseException:http://internal.amazon.com/"),
        );
        let got = ErrorResponse::from_http(400, &headers, &payload);
        assert_eq!(got.error_code(), Some("ResourceInUseException"));
        assert_eq!(got.message(), Some("boom"));
    }

    #[test_case(json!({"__type": "TooManyTagKeysException", "message": {"detail": "x"}}); "object message")]
    #[test_case(json!({"__type": "TooManyTagKeysException", "message": 42, "Message": ["a"]}); "number message")]
    #[test_case(json!({"__type": "TooManyTagKeysException", "code": true}); "bool code")]
    fn mistyped_fields_keep_code(input: serde_json::Value) {
        let got = ErrorResponse::from_http(400, &HeaderMap::new(), &body(input));
        assert_eq!(got.error_code(), Some("TooManyTagKeysException"));
        assert_eq!(got.message(), None);
    }

    #[test]
    fn mistyped_type_falls_back_to_code() {
        let payload = body(json!({"__type": 7, "code": "JobNotFoundException", "Message": "gone"}));
        let got = ErrorResponse::from_http(404, &HeaderMap::new(), &payload);
        assert_eq!(got.error_code(), Some("JobNotFoundException"));
        assert_eq!(got.message(), Some("gone"));
    }

    #[test]
    fn code_field() {
        let payload = body(json!({"code": "JobNotFoundException"}));
        let got = ErrorResponse::from_http(400, &HeaderMap::new(), &payload);
        assert_eq!(got.error_code(), Some("JobNotFoundException"));
        assert_eq!(got.message(), None);
        assert_eq!(got.request_id(), None);
    }

    #[test_case(Bytes::from_static(b"<html>bad gateway</html>"))]
    #[test_case(Bytes::new())]
    #[test_case(Bytes::from_static(b"[1, 2, 3]"))]
    fn not_json(payload: Bytes) {
        let got = ErrorResponse::from_http(502, &HeaderMap::new(), &payload);
        assert_eq!(got.status_code(), 502);
        assert_eq!(got.error_code(), None);
        assert_eq!(got.message(), None);
    }

    #[test]
    fn setters() {
        let got = ErrorResponse::new(400)
            .set_error_code("X")
            .set_message("m")
            .set_request_id("r");
        assert_eq!(got.error_code(), Some("X"));
        assert_eq!(got.message(), Some("m"));
        assert_eq!(got.request_id(), Some("r"));
    }
}
