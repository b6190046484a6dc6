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

//! Amazon Comprehend bindings.
//!
//! This crate contains the records exchanged with Amazon Comprehend, their
//! JSON marshallers, and the classification of the service errors.
//!
//! Marshalling a record writes a JSON object with the record's fields in a
//! fixed order. Absent fields are omitted, never written as `null`.
//!
//! ```
//! # use aws_comprehend::model::DominantLanguage;
//! let language = DominantLanguage::new().set_language_code("en").set_score(0.5_f32);
//! let json = serde_json::to_string(&language)?;
//! assert_eq!(json, r#"{"LanguageCode":"en","Score":0.5}"#);
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod errors;
pub mod marshaller;
pub mod model;
pub mod operation;

/// The service the requests are sent to.
pub const SERVICE: gax::request::ServiceInfo = gax::request::ServiceInfo {
    endpoint_prefix: "comprehend",
    target_prefix: "Comprehend_20171127",
};
