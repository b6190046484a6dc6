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

use crate::model::BatchItemError;
use gax::json::JsonMarshaller;
use serde::ser::{SerializeMap, Serializer};

/// Marshalls [BatchItemError] records as JSON objects.
#[derive(Debug)]
pub struct BatchItemErrorJsonMarshaller {
    _private: (),
}

lazy_static::lazy_static! {
    static ref INSTANCE: BatchItemErrorJsonMarshaller =
        BatchItemErrorJsonMarshaller { _private: () };
}

impl BatchItemErrorJsonMarshaller {
    /// Returns the shared instance.
    pub fn get_instance() -> &'static Self {
        &INSTANCE
    }
}

impl JsonMarshaller<BatchItemError> for BatchItemErrorJsonMarshaller {
    fn marshall<S>(&self, record: &BatchItemError, writer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = writer.serialize_map(None)?;
        if let Some(v) = &record.index {
            state.serialize_entry("Index", v)?;
        }
        if let Some(v) = &record.error_code {
            state.serialize_entry("ErrorCode", v)?;
        }
        if let Some(v) = &record.error_message {
            state.serialize_entry("ErrorMessage", v)?;
        }
        state.end()
    }
}

impl serde::ser::Serialize for BatchItemError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        BatchItemErrorJsonMarshaller::get_instance().marshall(self, serializer)
    }
}
