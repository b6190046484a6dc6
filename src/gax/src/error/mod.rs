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

//! Errors returned by the bindings.
//!
//! The bindings distinguish between errors detected while preparing a request
//! (the request cannot be serialized), errors interpreting a response (the
//! response cannot be deserialized), and errors returned by the service itself.
//!
//! Service errors arrive as an [ErrorResponse]. The error unmarshallers turn it
//! into a [ServiceException] wrapped in a typed exception.
//!
//! # Examples
//!
//! ```
//! use aws_comprehend_gax::error::Error;
//! fn handle_error(e: Error) {
//!     if let Some(exception) = e.exception() {
//!         println!("{:?} {:?}", exception.error_code(), exception.request_id())
//!     }
//! }
//! ```

mod core_error;
mod http_error;
mod service_error;
pub use core_error::*;
pub use http_error::*;
pub use service_error::*;
