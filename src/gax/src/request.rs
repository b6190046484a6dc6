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

//! Builds AWS JSON 1.1 requests.
//!
//! All operations are a `POST` to the root of the service endpoint. The
//! operation is named by the `X-Amz-Target` header, and the body is the
//! request record marshalled as a JSON object.

use crate::Result;
use crate::client_config::ClientConfig;
use crate::error::Error;
use crate::json::{self, JsonMarshaller};
use bytes::Bytes;
use http::header::{CONTENT_TYPE, HeaderValue};

/// The media type for AWS JSON 1.1 payloads.
pub const AMZ_JSON_1_1: &str = "application/x-amz-json-1.1";

/// The header naming the operation.
pub const X_AMZ_TARGET: &str = "x-amz-target";

/// Describes the service a request is sent to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ServiceInfo {
    /// The endpoint prefix, e.g. `comprehend`.
    pub endpoint_prefix: &'static str,
    /// The target prefix, e.g. `Comprehend_20171127`.
    pub target_prefix: &'static str,
}

impl ServiceInfo {
    /// The `X-Amz-Target` header value for `operation`.
    pub fn target(&self, operation: &str) -> String {
        format!("{}.{operation}", self.target_prefix)
    }
}

/// Marshalls `record` and wraps it in a request for `operation`.
///
/// Failures in the marshaller output are reported as
/// [serialization][Error::is_serialization] errors.
pub fn build<M, T>(
    config: &ClientConfig,
    service: &ServiceInfo,
    operation: &str,
    marshaller: &M,
    record: &T,
) -> Result<http::Request<Bytes>>
where
    M: JsonMarshaller<T>,
    T: ?Sized,
{
    let body = json::to_vec(marshaller, record).map_err(Error::ser)?;
    let target = service.target(operation);
    if config.tracing_enabled() {
        tracing::debug!(x_amz_target = %target, body_len = body.len(), "marshalled request");
    }
    let target = HeaderValue::from_str(&target).map_err(Error::ser)?;
    let uri = format!("{}/", config.endpoint(service.endpoint_prefix).trim_end_matches('/'));
    http::Request::builder()
        .method(http::Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, HeaderValue::from_static(AMZ_JSON_1_1))
        .header(X_AMZ_TARGET, target)
        .body(Bytes::from(body))
        .map_err(Error::ser)
}
