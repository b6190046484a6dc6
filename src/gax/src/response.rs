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

//! Interprets AWS JSON 1.1 responses.
//!
//! Successful responses are decoded into the result record for the
//! operation. Error responses are parsed into an [ErrorResponse] and handed to
//! a classifier, typically built from a table of
//! [ErrorUnmarshaller][crate::unmarshaller::ErrorUnmarshaller] rules.

use crate::Result;
use crate::error::{Error, ErrorResponse, ServiceException};
use bytes::Bytes;

/// Decodes `response` into `O`, or classifies it as an error.
///
/// Successful responses with an empty body produce `O::default()`. Error
/// responses without an error code cannot be classified, they are returned
/// as [Error::http].
pub fn decode<O, E, F>(response: http::Response<Bytes>, classifier: F) -> Result<O>
where
    O: serde::de::DeserializeOwned + Default,
    E: std::error::Error + Send + Sync + 'static,
    F: FnOnce(&ErrorResponse) -> E,
{
    let (parts, body) = response.into_parts();
    if !parts.status.is_success() {
        return Err(to_error(parts.status.as_u16(), parts.headers, body, classifier));
    }
    if body.is_empty() {
        return Ok(O::default());
    }
    serde_json::from_slice::<O>(&body).map_err(Error::deser)
}

fn to_error<E, F>(status_code: u16, headers: http::HeaderMap, body: Bytes, classifier: F) -> Error
where
    E: std::error::Error + Send + Sync + 'static,
    F: FnOnce(&ErrorResponse) -> E,
{
    let response = ErrorResponse::from_http(status_code, &headers, &body);
    if response.error_code().is_none() {
        return Error::http(status_code, headers, body);
    }
    let typed = classifier(&response);
    Error::service(ServiceException::from(&response), typed)
}
