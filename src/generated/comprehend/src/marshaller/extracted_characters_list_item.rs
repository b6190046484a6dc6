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

use crate::model::ExtractedCharactersListItem;
use gax::json::JsonMarshaller;
use serde::ser::{SerializeMap, Serializer};

/// Marshalls [ExtractedCharactersListItem] records as JSON objects.
#[derive(Debug)]
pub struct ExtractedCharactersListItemJsonMarshaller {
    _private: (),
}

lazy_static::lazy_static! {
    static ref INSTANCE: ExtractedCharactersListItemJsonMarshaller =
        ExtractedCharactersListItemJsonMarshaller { _private: () };
}

impl ExtractedCharactersListItemJsonMarshaller {
    /// Returns the shared instance.
    pub fn get_instance() -> &'static Self {
        &INSTANCE
    }
}

impl JsonMarshaller<ExtractedCharactersListItem> for ExtractedCharactersListItemJsonMarshaller {
    fn marshall<S>(
        &self,
        record: &ExtractedCharactersListItem,
        writer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = writer.serialize_map(None)?;
        if let Some(v) = &record.page {
            state.serialize_entry("Page", v)?;
        }
        if let Some(v) = &record.count {
            state.serialize_entry("Count", v)?;
        }
        state.end()
    }
}

impl serde::ser::Serialize for ExtractedCharactersListItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        ExtractedCharactersListItemJsonMarshaller::get_instance().marshall(self, serializer)
    }
}
