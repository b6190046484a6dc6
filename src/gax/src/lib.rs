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

//! AWS JSON protocol helpers.
//!
//! This crate contains the types and functions used in the implementation of
//! the Amazon Comprehend bindings: the marshalling convention for records, the
//! error model, the error unmarshallers, and the request and response framing
//! for the AWS JSON 1.1 protocol.
//!
//! The HTTP transport and request signing are not part of this crate. The
//! requests built here are plain [http::Request] values, and the responses
//! are plain [http::Response] values.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions preparing or interpreting
/// requests.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

pub mod client_config;
pub mod error;
pub mod json;
pub mod request;
pub mod response;
pub mod unmarshaller;
