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

use crate::model::BatchDetectDominantLanguageRequest;
use gax::json::JsonMarshaller;
use serde::ser::{SerializeMap, Serializer};

/// Marshalls [BatchDetectDominantLanguageRequest] records as JSON objects.
#[derive(Debug)]
pub struct BatchDetectDominantLanguageRequestJsonMarshaller {
    _private: (),
}

lazy_static::lazy_static! {
    static ref INSTANCE: BatchDetectDominantLanguageRequestJsonMarshaller =
        BatchDetectDominantLanguageRequestJsonMarshaller { _private: () };
}

impl BatchDetectDominantLanguageRequestJsonMarshaller {
    /// Returns the shared instance.
    pub fn get_instance() -> &'static Self {
        &INSTANCE
    }
}

impl JsonMarshaller<BatchDetectDominantLanguageRequest>
    for BatchDetectDominantLanguageRequestJsonMarshaller
{
    fn marshall<S>(
        &self,
        record: &BatchDetectDominantLanguageRequest,
        writer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = writer.serialize_map(None)?;
        if let Some(v) = &record.text_list {
            state.serialize_entry("TextList", v)?;
        }
        state.end()
    }
}

impl serde::ser::Serialize for BatchDetectDominantLanguageRequest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        BatchDetectDominantLanguageRequestJsonMarshaller::get_instance().marshall(self, serializer)
    }
}
