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

use crate::model::DocumentClass;
use gax::json::{F32, JsonMarshaller};
use serde::ser::{SerializeMap, Serializer};
use serde_with::ser::SerializeAsWrap;

/// Marshalls [DocumentClass] records as JSON objects.
#[derive(Debug)]
pub struct DocumentClassJsonMarshaller {
    _private: (),
}

lazy_static::lazy_static! {
    static ref INSTANCE: DocumentClassJsonMarshaller = DocumentClassJsonMarshaller { _private: () };
}

impl DocumentClassJsonMarshaller {
    /// Returns the shared instance.
    pub fn get_instance() -> &'static Self {
        &INSTANCE
    }
}

impl JsonMarshaller<DocumentClass> for DocumentClassJsonMarshaller {
    fn marshall<S>(&self, record: &DocumentClass, writer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = writer.serialize_map(None)?;
        if let Some(v) = &record.name {
            state.serialize_entry("Name", v)?;
        }
        if let Some(v) = &record.score {
            state.serialize_entry("Score", &SerializeAsWrap::<f32, F32>::new(v))?;
        }
        if let Some(v) = &record.page {
            state.serialize_entry("Page", v)?;
        }
        state.end()
    }
}

impl serde::ser::Serialize for DocumentClass {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        DocumentClassJsonMarshaller::get_instance().marshall(self, serializer)
    }
}
