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

use crate::marshaller::SentimentScoreJsonMarshaller;
use crate::model::MentionSentiment;
use gax::json::{JsonMarshaller, Marshalled};
use serde::ser::{SerializeMap, Serializer};

/// Marshalls [MentionSentiment] records as JSON objects.
#[derive(Debug)]
pub struct MentionSentimentJsonMarshaller {
    _private: (),
}

lazy_static::lazy_static! {
    static ref INSTANCE: MentionSentimentJsonMarshaller =
        MentionSentimentJsonMarshaller { _private: () };
}

impl MentionSentimentJsonMarshaller {
    /// Returns the shared instance.
    pub fn get_instance() -> &'static Self {
        &INSTANCE
    }
}

impl JsonMarshaller<MentionSentiment> for MentionSentimentJsonMarshaller {
    fn marshall<S>(&self, record: &MentionSentiment, writer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = writer.serialize_map(None)?;
        if let Some(v) = &record.sentiment {
            state.serialize_entry("Sentiment", v)?;
        }
        if let Some(v) = &record.sentiment_score {
            state.serialize_entry(
                "SentimentScore",
                &Marshalled::new(SentimentScoreJsonMarshaller::get_instance(), v),
            )?;
        }
        state.end()
    }
}

impl serde::ser::Serialize for MentionSentiment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        MentionSentimentJsonMarshaller::get_instance().marshall(self, serializer)
    }
}
