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

//! Request preparation and response parsing for each operation.
//!
//! The operations are identified by their request record. [prepare] turns a
//! request into an HTTP request ready to be signed and sent, and [parse] turns
//! the HTTP response into the operation result or a classified error.
//!
//! # Example
//! ```
//! # use aws_comprehend::model::DetectDominantLanguageRequest;
//! # use aws_comprehend::operation;
//! # use gax::client_config::ClientConfig;
//! # fn sample() -> gax::Result<()> {
//! let config = ClientConfig::new().set_region("eu-west-1");
//! let request = DetectDominantLanguageRequest::new().set_text("Bonjour tout le monde");
//! let http = operation::prepare(&config, &request)?;
//! assert_eq!(http.uri(), "https://comprehend.eu-west-1.amazonaws.com/");
//! # Ok(()) }
//! ```

use crate::errors;
use crate::marshaller::*;
use crate::model::*;
use bytes::Bytes;
use gax::client_config::ClientConfig;
use gax::json::JsonMarshaller;

/// A request record for one Comprehend operation.
///
/// This trait is sealed, it is implemented for the request records in
/// [model][crate::model].
pub trait Request: sealed::Request + Sized {
    /// The operation name, as sent in the `X-Amz-Target` header.
    const OPERATION: &'static str;

    /// The marshaller for the request record.
    type Marshaller: JsonMarshaller<Self> + 'static;

    /// The result record of the operation.
    type Output: serde::de::DeserializeOwned + Default;

    /// The shared marshaller instance.
    fn marshaller() -> &'static Self::Marshaller;
}

mod sealed {
    pub trait Request {}
}

macro_rules! operation {
    ($request:ident, $marshaller:ident, $output:ident, $name:literal) => {
        impl sealed::Request for $request {}
        impl Request for $request {
            const OPERATION: &'static str = $name;
            type Marshaller = $marshaller;
            type Output = $output;
            fn marshaller() -> &'static Self::Marshaller {
                $marshaller::get_instance()
            }
        }
    };
}

operation!(
    DetectDominantLanguageRequest,
    DetectDominantLanguageRequestJsonMarshaller,
    DetectDominantLanguageResult,
    "DetectDominantLanguage"
);
operation!(
    BatchDetectDominantLanguageRequest,
    BatchDetectDominantLanguageRequestJsonMarshaller,
    BatchDetectDominantLanguageResult,
    "BatchDetectDominantLanguage"
);
operation!(
    ClassifyDocumentRequest,
    ClassifyDocumentRequestJsonMarshaller,
    ClassifyDocumentResult,
    "ClassifyDocument"
);
operation!(
    StartPiiEntitiesDetectionJobRequest,
    StartPiiEntitiesDetectionJobRequestJsonMarshaller,
    StartPiiEntitiesDetectionJobResult,
    "StartPiiEntitiesDetectionJob"
);
operation!(
    TagResourceRequest,
    TagResourceRequestJsonMarshaller,
    TagResourceResult,
    "TagResource"
);
operation!(
    UntagResourceRequest,
    UntagResourceRequestJsonMarshaller,
    UntagResourceResult,
    "UntagResource"
);

/// Builds the HTTP request for `request`.
pub fn prepare<R>(config: &ClientConfig, request: &R) -> gax::Result<http::Request<Bytes>>
where
    R: Request,
{
    gax::request::build(config, &crate::SERVICE, R::OPERATION, R::marshaller(), request)
}

/// Parses the HTTP response of the `R` operation.
///
/// Error responses with an error code are returned as
/// [service][gax::error::Error::exception] errors, the classified
/// [ComprehendError][crate::errors::ComprehendError] is available via
/// [as_inner][gax::error::Error::as_inner].
pub fn parse<R: Request>(response: http::Response<Bytes>) -> gax::Result<R::Output> {
    gax::response::decode(response, errors::classify)
}
