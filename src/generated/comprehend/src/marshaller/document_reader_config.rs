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

use crate::model::DocumentReaderConfig;
use gax::json::JsonMarshaller;
use serde::ser::{SerializeMap, Serializer};

/// Marshalls [DocumentReaderConfig] records as JSON objects.
#[derive(Debug)]
pub struct DocumentReaderConfigJsonMarshaller {
    _private: (),
}

lazy_static::lazy_static! {
    static ref INSTANCE: DocumentReaderConfigJsonMarshaller =
        DocumentReaderConfigJsonMarshaller { _private: () };
}

impl DocumentReaderConfigJsonMarshaller {
    /// Returns the shared instance.
    pub fn get_instance() -> &'static Self {
        &INSTANCE
    }
}

impl JsonMarshaller<DocumentReaderConfig> for DocumentReaderConfigJsonMarshaller {
    fn marshall<S>(&self, record: &DocumentReaderConfig, writer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = writer.serialize_map(None)?;
        if let Some(v) = &record.document_read_action {
            state.serialize_entry("DocumentReadAction", v)?;
        }
        if let Some(v) = &record.document_read_mode {
            state.serialize_entry("DocumentReadMode", v)?;
        }
        if let Some(v) = &record.feature_types {
            state.serialize_entry("FeatureTypes", v)?;
        }
        state.end()
    }
}

impl serde::ser::Serialize for DocumentReaderConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        DocumentReaderConfigJsonMarshaller::get_instance().marshall(self, serializer)
    }
}
