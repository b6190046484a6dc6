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

//! One JSON marshaller per record.
//!
//! Each marshaller writes the fields of its record in a fixed order, skipping
//! absent fields, and delegates nested records to their own marshaller. The
//! records also implement [serde::Serialize] through their marshaller.

mod batch_detect_dominant_language_request;
mod batch_item_error;
mod classify_document_request;
mod detect_dominant_language_request;
mod document_class;
mod document_label;
mod document_reader_config;
mod document_type_list_item;
mod dominant_language;
mod entity_label;
mod entity_recognizer_entity_list;
mod extracted_characters_list_item;
mod input_data_config;
mod mention_sentiment;
mod pii_output_data_config;
mod sentiment_score;
mod start_pii_entities_detection_job_request;
mod tag;
mod tag_resource_request;
mod untag_resource_request;

pub use batch_detect_dominant_language_request::BatchDetectDominantLanguageRequestJsonMarshaller;
pub use batch_item_error::BatchItemErrorJsonMarshaller;
pub use classify_document_request::ClassifyDocumentRequestJsonMarshaller;
pub use detect_dominant_language_request::DetectDominantLanguageRequestJsonMarshaller;
pub use document_class::DocumentClassJsonMarshaller;
pub use document_label::DocumentLabelJsonMarshaller;
pub use document_reader_config::DocumentReaderConfigJsonMarshaller;
pub use document_type_list_item::DocumentTypeListItemJsonMarshaller;
pub use dominant_language::DominantLanguageJsonMarshaller;
pub use entity_label::EntityLabelJsonMarshaller;
pub use entity_recognizer_entity_list::EntityRecognizerEntityListJsonMarshaller;
pub use extracted_characters_list_item::ExtractedCharactersListItemJsonMarshaller;
pub use input_data_config::InputDataConfigJsonMarshaller;
pub use mention_sentiment::MentionSentimentJsonMarshaller;
pub use pii_output_data_config::PiiOutputDataConfigJsonMarshaller;
pub use sentiment_score::SentimentScoreJsonMarshaller;
pub use start_pii_entities_detection_job_request::StartPiiEntitiesDetectionJobRequestJsonMarshaller;
pub use tag::TagJsonMarshaller;
pub use tag_resource_request::TagResourceRequestJsonMarshaller;
pub use untag_resource_request::UntagResourceRequestJsonMarshaller;
