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

use crate::marshaller::TagJsonMarshaller;
use crate::model::TagResourceRequest;
use gax::json::{JsonMarshaller, MarshalledSeq};
use serde::ser::{SerializeMap, Serializer};

/// Marshalls [TagResourceRequest] records as JSON objects.
#[derive(Debug)]
pub struct TagResourceRequestJsonMarshaller {
    _private: (),
}

lazy_static::lazy_static! {
    static ref INSTANCE: TagResourceRequestJsonMarshaller =
        TagResourceRequestJsonMarshaller { _private: () };
}

impl TagResourceRequestJsonMarshaller {
    /// Returns the shared instance.
    pub fn get_instance() -> &'static Self {
        &INSTANCE
    }
}

impl JsonMarshaller<TagResourceRequest> for TagResourceRequestJsonMarshaller {
    fn marshall<S>(&self, record: &TagResourceRequest, writer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = writer.serialize_map(None)?;
        if let Some(v) = &record.resource_arn {
            state.serialize_entry("ResourceArn", v)?;
        }
        if let Some(v) = &record.tags {
            state.serialize_entry(
                "Tags",
                &MarshalledSeq::new(TagJsonMarshaller::get_instance(), v),
            )?;
        }
        state.end()
    }
}

impl serde::ser::Serialize for TagResourceRequest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        TagResourceRequestJsonMarshaller::get_instance().marshall(self, serializer)
    }
}
