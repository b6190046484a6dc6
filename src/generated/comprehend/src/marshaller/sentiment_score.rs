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

use crate::model::SentimentScore;
use gax::json::{F32, JsonMarshaller};
use serde::ser::{SerializeMap, Serializer};
use serde_with::ser::SerializeAsWrap;

/// Marshalls [SentimentScore] records as JSON objects.
#[derive(Debug)]
pub struct SentimentScoreJsonMarshaller {
    _private: (),
}

lazy_static::lazy_static! {
    static ref INSTANCE: SentimentScoreJsonMarshaller =
        SentimentScoreJsonMarshaller { _private: () };
}

impl SentimentScoreJsonMarshaller {
    /// Returns the shared instance.
    pub fn get_instance() -> &'static Self {
        &INSTANCE
    }
}

impl JsonMarshaller<SentimentScore> for SentimentScoreJsonMarshaller {
    fn marshall<S>(&self, record: &SentimentScore, writer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = writer.serialize_map(None)?;
        if let Some(v) = &record.positive {
            state.serialize_entry("Positive", &SerializeAsWrap::<f32, F32>::new(v))?;
        }
        if let Some(v) = &record.negative {
            state.serialize_entry("Negative", &SerializeAsWrap::<f32, F32>::new(v))?;
        }
        if let Some(v) = &record.neutral {
            state.serialize_entry("Neutral", &SerializeAsWrap::<f32, F32>::new(v))?;
        }
        if let Some(v) = &record.mixed {
            state.serialize_entry("Mixed", &SerializeAsWrap::<f32, F32>::new(v))?;
        }
        state.end()
    }
}

impl serde::ser::Serialize for SentimentScore {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        SentimentScoreJsonMarshaller::get_instance().marshall(self, serializer)
    }
}
