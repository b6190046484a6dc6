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

//! The records exchanged with Amazon Comprehend.
//!
//! Every field is optional. Absent fields are skipped when a record is
//! marshalled, and missing or `null` fields decode as `None`.

mod enums;
pub use enums::*;

/// Describes an error that occurred while processing a document in a batch.
///
/// The operation returns one `BatchItemError` object for each document that
/// contained an error.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct BatchItemError {
    /// The zero-based index of the document in the input list.
    pub index: std::option::Option<i32>,

    /// The numeric error code of the error.
    pub error_code: std::option::Option<String>,

    /// A text description of the error.
    pub error_message: std::option::Option<String>,
}

impl BatchItemError {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [index][BatchItemError::index].
    pub fn set_index<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.index = Some(v.into());
        self
    }

    /// Sets or clears the value of [index][BatchItemError::index].
    pub fn set_or_clear_index<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.index = v.map(|x| x.into());
        self
    }

    /// Sets the value of [error_code][BatchItemError::error_code].
    pub fn set_error_code<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.error_code = Some(v.into());
        self
    }

    /// Sets or clears the value of [error_code][BatchItemError::error_code].
    pub fn set_or_clear_error_code<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.error_code = v.map(|x| x.into());
        self
    }

    /// Sets the value of [error_message][BatchItemError::error_message].
    pub fn set_error_message<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.error_message = Some(v.into());
        self
    }

    /// Sets or clears the value of [error_message][BatchItemError::error_message].
    pub fn set_or_clear_error_message<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.error_message = v.map(|x| x.into());
        self
    }
}

/// Specifies the class that categorizes the document being analyzed.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DocumentClass {
    /// The name of the class.
    pub name: std::option::Option<String>,

    /// The confidence score that Amazon Comprehend has this class correctly
    /// attributed.
    #[serde_as(deserialize_as = "Option<gax::json::F32>")]
    pub score: std::option::Option<f32>,

    /// Page number in the input document.
    ///
    /// This field is present in the response only if your request includes the
    /// `Byte` parameter.
    pub page: std::option::Option<i32>,
}

impl DocumentClass {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][DocumentClass::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][DocumentClass::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [score][DocumentClass::score].
    pub fn set_score<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<f32>,
    {
        self.score = Some(v.into());
        self
    }

    /// Sets or clears the value of [score][DocumentClass::score].
    pub fn set_or_clear_score<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<f32>,
    {
        self.score = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][DocumentClass::page].
    pub fn set_page<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.page = Some(v.into());
        self
    }

    /// Sets or clears the value of [page][DocumentClass::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.page = v.map(|x| x.into());
        self
    }
}

/// Specifies one of the label or labels that categorize the document being
/// analyzed.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DocumentLabel {
    /// The name of the label.
    pub name: std::option::Option<String>,

    /// The confidence score that Amazon Comprehend has this label correctly
    /// attributed.
    #[serde_as(deserialize_as = "Option<gax::json::F32>")]
    pub score: std::option::Option<f32>,

    /// Page number where the label occurs.
    pub page: std::option::Option<i32>,
}

impl DocumentLabel {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][DocumentLabel::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][DocumentLabel::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [score][DocumentLabel::score].
    pub fn set_score<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<f32>,
    {
        self.score = Some(v.into());
        self
    }

    /// Sets or clears the value of [score][DocumentLabel::score].
    pub fn set_or_clear_score<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<f32>,
    {
        self.score = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page][DocumentLabel::page].
    pub fn set_page<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.page = Some(v.into());
        self
    }

    /// Sets or clears the value of [page][DocumentLabel::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.page = v.map(|x| x.into());
        self
    }
}

/// Document type for each page in the document.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DocumentTypeListItem {
    /// Page number.
    pub page: std::option::Option<i32>,

    /// Document type.
    pub r#type: std::option::Option<DocumentType>,
}

impl DocumentTypeListItem {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [page][DocumentTypeListItem::page].
    pub fn set_page<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.page = Some(v.into());
        self
    }

    /// Sets or clears the value of [page][DocumentTypeListItem::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [type][DocumentTypeListItem::r#type].
    pub fn set_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<DocumentType>,
    {
        self.r#type = Some(v.into());
        self
    }

    /// Sets or clears the value of [type][DocumentTypeListItem::r#type].
    pub fn set_or_clear_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<DocumentType>,
    {
        self.r#type = v.map(|x| x.into());
        self
    }
}

/// Returns the code for the dominant language in the input text and the
/// level of confidence that Amazon Comprehend has in the accuracy of the
/// detection.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DominantLanguage {
    /// The RFC 5646 language code for the dominant language.
    pub language_code: std::option::Option<String>,

    /// The level of confidence that Amazon Comprehend has in the accuracy of
    /// the detection.
    #[serde_as(deserialize_as = "Option<gax::json::F32>")]
    pub score: std::option::Option<f32>,
}

impl DominantLanguage {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [language_code][DominantLanguage::language_code].
    pub fn set_language_code<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.language_code = Some(v.into());
        self
    }

    /// Sets or clears the value of [language_code][DominantLanguage::language_code].
    pub fn set_or_clear_language_code<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.language_code = v.map(|x| x.into());
        self
    }

    /// Sets the value of [score][DominantLanguage::score].
    pub fn set_score<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<f32>,
    {
        self.score = Some(v.into());
        self
    }

    /// Sets or clears the value of [score][DominantLanguage::score].
    pub fn set_or_clear_score<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<f32>,
    {
        self.score = v.map(|x| x.into());
        self
    }
}

/// Specifies one of the label or labels that categorize the personally
/// identifiable information (PII) entity being analyzed.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct EntityLabel {
    /// The name of the label, e.g. `SSN` or `EMAIL`.
    pub name: std::option::Option<String>,

    /// The level of confidence that Amazon Comprehend has in the accuracy of
    /// the detection.
    #[serde_as(deserialize_as = "Option<gax::json::F32>")]
    pub score: std::option::Option<f32>,
}

impl EntityLabel {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][EntityLabel::name].
    pub fn set_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][EntityLabel::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [score][EntityLabel::score].
    pub fn set_score<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<f32>,
    {
        self.score = Some(v.into());
        self
    }

    /// Sets or clears the value of [score][EntityLabel::score].
    pub fn set_or_clear_score<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<f32>,
    {
        self.score = v.map(|x| x.into());
        self
    }
}

/// Describes the entity list submitted with an entity recognizer.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct EntityRecognizerEntityList {
    /// The Amazon S3 location of the entity list file.
    pub s3_uri: std::option::Option<String>,
}

impl EntityRecognizerEntityList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [s3_uri][EntityRecognizerEntityList::s3_uri].
    pub fn set_s3_uri<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.s3_uri = Some(v.into());
        self
    }

    /// Sets or clears the value of [s3_uri][EntityRecognizerEntityList::s3_uri].
    pub fn set_or_clear_s3_uri<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.s3_uri = v.map(|x| x.into());
        self
    }
}

/// Array of the number of characters extracted from each page.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ExtractedCharactersListItem {
    /// Page number.
    pub page: std::option::Option<i32>,

    /// Number of characters extracted from each page.
    pub count: std::option::Option<i32>,
}

impl ExtractedCharactersListItem {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [page][ExtractedCharactersListItem::page].
    pub fn set_page<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.page = Some(v.into());
        self
    }

    /// Sets or clears the value of [page][ExtractedCharactersListItem::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [count][ExtractedCharactersListItem::count].
    pub fn set_count<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.count = Some(v.into());
        self
    }

    /// Sets or clears the value of [count][ExtractedCharactersListItem::count].
    pub fn set_or_clear_count<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.count = v.map(|x| x.into());
        self
    }
}

/// Provides configuration parameters to override the default actions for
/// extracting text from PDF documents and image files.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DocumentReaderConfig {
    /// The Amazon Textract API operation used to extract text.
    pub document_read_action: std::option::Option<DocumentReadAction>,

    /// Determines the text extraction actions for PDF files.
    pub document_read_mode: std::option::Option<DocumentReadMode>,

    /// The type of analysis to perform with `TEXTRACT_ANALYZE_DOCUMENT`.
    pub feature_types: std::option::Option<std::vec::Vec<DocumentReadFeatureTypes>>,
}

impl DocumentReaderConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [document_read_action][DocumentReaderConfig::document_read_action].
    pub fn set_document_read_action<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<DocumentReadAction>,
    {
        self.document_read_action = Some(v.into());
        self
    }

    /// Sets or clears the value of [document_read_action][DocumentReaderConfig::document_read_action].
    pub fn set_or_clear_document_read_action<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<DocumentReadAction>,
    {
        self.document_read_action = v.map(|x| x.into());
        self
    }

    /// Sets the value of [document_read_mode][DocumentReaderConfig::document_read_mode].
    pub fn set_document_read_mode<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<DocumentReadMode>,
    {
        self.document_read_mode = Some(v.into());
        self
    }

    /// Sets or clears the value of [document_read_mode][DocumentReaderConfig::document_read_mode].
    pub fn set_or_clear_document_read_mode<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<DocumentReadMode>,
    {
        self.document_read_mode = v.map(|x| x.into());
        self
    }

    /// Sets the value of [feature_types][DocumentReaderConfig::feature_types].
    pub fn set_feature_types<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<DocumentReadFeatureTypes>,
    {
        self.feature_types = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Clears the value of [feature_types][DocumentReaderConfig::feature_types].
    pub fn clear_feature_types(mut self) -> Self {
        self.feature_types = None;
        self
    }
}

/// The input properties for an inference job.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct InputDataConfig {
    /// The Amazon S3 URI for the input data.
    pub s3_uri: std::option::Option<String>,

    /// Specifies how the text in an input file should be processed.
    pub input_format: std::option::Option<InputFormat>,

    /// Overrides the default text extraction for image files and PDFs.
    pub document_reader_config: std::option::Option<DocumentReaderConfig>,
}

impl InputDataConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [s3_uri][InputDataConfig::s3_uri].
    pub fn set_s3_uri<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.s3_uri = Some(v.into());
        self
    }

    /// Sets or clears the value of [s3_uri][InputDataConfig::s3_uri].
    pub fn set_or_clear_s3_uri<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.s3_uri = v.map(|x| x.into());
        self
    }

    /// Sets the value of [input_format][InputDataConfig::input_format].
    pub fn set_input_format<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<InputFormat>,
    {
        self.input_format = Some(v.into());
        self
    }

    /// Sets or clears the value of [input_format][InputDataConfig::input_format].
    pub fn set_or_clear_input_format<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<InputFormat>,
    {
        self.input_format = v.map(|x| x.into());
        self
    }

    /// Sets the value of [document_reader_config][InputDataConfig::document_reader_config].
    pub fn set_document_reader_config<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<DocumentReaderConfig>,
    {
        self.document_reader_config = Some(v.into());
        self
    }

    /// Sets or clears the value of [document_reader_config][InputDataConfig::document_reader_config].
    pub fn set_or_clear_document_reader_config<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<DocumentReaderConfig>,
    {
        self.document_reader_config = v.map(|x| x.into());
        self
    }
}

/// Describes the level of confidence that Amazon Comprehend has in the
/// accuracy of its detection of sentiments.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct SentimentScore {
    /// The level of confidence that the sentiment is `POSITIVE`.
    #[serde_as(deserialize_as = "Option<gax::json::F32>")]
    pub positive: std::option::Option<f32>,

    /// The level of confidence that the sentiment is `NEGATIVE`.
    #[serde_as(deserialize_as = "Option<gax::json::F32>")]
    pub negative: std::option::Option<f32>,

    /// The level of confidence that the sentiment is `NEUTRAL`.
    #[serde_as(deserialize_as = "Option<gax::json::F32>")]
    pub neutral: std::option::Option<f32>,

    /// The level of confidence that the sentiment is `MIXED`.
    #[serde_as(deserialize_as = "Option<gax::json::F32>")]
    pub mixed: std::option::Option<f32>,
}

impl SentimentScore {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [positive][SentimentScore::positive].
    pub fn set_positive<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<f32>,
    {
        self.positive = Some(v.into());
        self
    }

    /// Sets or clears the value of [positive][SentimentScore::positive].
    pub fn set_or_clear_positive<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<f32>,
    {
        self.positive = v.map(|x| x.into());
        self
    }

    /// Sets the value of [negative][SentimentScore::negative].
    pub fn set_negative<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<f32>,
    {
        self.negative = Some(v.into());
        self
    }

    /// Sets or clears the value of [negative][SentimentScore::negative].
    pub fn set_or_clear_negative<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<f32>,
    {
        self.negative = v.map(|x| x.into());
        self
    }

    /// Sets the value of [neutral][SentimentScore::neutral].
    pub fn set_neutral<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<f32>,
    {
        self.neutral = Some(v.into());
        self
    }

    /// Sets or clears the value of [neutral][SentimentScore::neutral].
    pub fn set_or_clear_neutral<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<f32>,
    {
        self.neutral = v.map(|x| x.into());
        self
    }

    /// Sets the value of [mixed][SentimentScore::mixed].
    pub fn set_mixed<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<f32>,
    {
        self.mixed = Some(v.into());
        self
    }

    /// Sets or clears the value of [mixed][SentimentScore::mixed].
    pub fn set_or_clear_mixed<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<f32>,
    {
        self.mixed = v.map(|x| x.into());
        self
    }
}

/// Contains the sentiment and sentiment score for one mention of an entity.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct MentionSentiment {
    /// The sentiment of the mention.
    pub sentiment: std::option::Option<SentimentType>,

    /// The confidence scores for each sentiment.
    pub sentiment_score: std::option::Option<SentimentScore>,
}

impl MentionSentiment {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [sentiment][MentionSentiment::sentiment].
    pub fn set_sentiment<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<SentimentType>,
    {
        self.sentiment = Some(v.into());
        self
    }

    /// Sets or clears the value of [sentiment][MentionSentiment::sentiment].
    pub fn set_or_clear_sentiment<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<SentimentType>,
    {
        self.sentiment = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sentiment_score][MentionSentiment::sentiment_score].
    pub fn set_sentiment_score<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<SentimentScore>,
    {
        self.sentiment_score = Some(v.into());
        self
    }

    /// Sets or clears the value of [sentiment_score][MentionSentiment::sentiment_score].
    pub fn set_or_clear_sentiment_score<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<SentimentScore>,
    {
        self.sentiment_score = v.map(|x| x.into());
        self
    }
}

/// Provides configuration parameters for the output of PII entity
/// detection jobs.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct PiiOutputDataConfig {
    /// The Amazon S3 location where the output is written.
    pub s3_uri: std::option::Option<String>,

    /// The ID of the KMS key used to encrypt the output.
    pub kms_key_id: std::option::Option<String>,
}

impl PiiOutputDataConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [s3_uri][PiiOutputDataConfig::s3_uri].
    pub fn set_s3_uri<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.s3_uri = Some(v.into());
        self
    }

    /// Sets or clears the value of [s3_uri][PiiOutputDataConfig::s3_uri].
    pub fn set_or_clear_s3_uri<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.s3_uri = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kms_key_id][PiiOutputDataConfig::kms_key_id].
    pub fn set_kms_key_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.kms_key_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [kms_key_id][PiiOutputDataConfig::kms_key_id].
    pub fn set_or_clear_kms_key_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.kms_key_id = v.map(|x| x.into());
        self
    }
}

/// A key-value pair that adds as a metadata to a resource.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct Tag {
    /// The initial part of a key-value pair that forms a tag.
    pub key: std::option::Option<String>,

    /// The second part of a key-value pair that forms a tag.
    pub value: std::option::Option<String>,
}

impl Tag {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [key][Tag::key].
    pub fn set_key<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.key = Some(v.into());
        self
    }

    /// Sets or clears the value of [key][Tag::key].
    pub fn set_or_clear_key<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.key = v.map(|x| x.into());
        self
    }

    /// Sets the value of [value][Tag::value].
    pub fn set_value<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.value = Some(v.into());
        self
    }

    /// Sets or clears the value of [value][Tag::value].
    pub fn set_or_clear_value<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.value = v.map(|x| x.into());
        self
    }
}

/// Text extraction encountered one or more page-level errors in the input
/// document.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ErrorsListItem {
    /// Page number where the error occurred.
    pub page: std::option::Option<i32>,

    /// Error code for the cause of the error.
    pub error_code: std::option::Option<PageBasedErrorCode>,

    /// Text message explaining the reason for the error.
    pub error_message: std::option::Option<String>,
}

impl ErrorsListItem {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [page][ErrorsListItem::page].
    pub fn set_page<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.page = Some(v.into());
        self
    }

    /// Sets or clears the value of [page][ErrorsListItem::page].
    pub fn set_or_clear_page<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.page = v.map(|x| x.into());
        self
    }

    /// Sets the value of [error_code][ErrorsListItem::error_code].
    pub fn set_error_code<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<PageBasedErrorCode>,
    {
        self.error_code = Some(v.into());
        self
    }

    /// Sets or clears the value of [error_code][ErrorsListItem::error_code].
    pub fn set_or_clear_error_code<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<PageBasedErrorCode>,
    {
        self.error_code = v.map(|x| x.into());
        self
    }

    /// Sets the value of [error_message][ErrorsListItem::error_message].
    pub fn set_error_message<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.error_message = Some(v.into());
        self
    }

    /// Sets or clears the value of [error_message][ErrorsListItem::error_message].
    pub fn set_or_clear_error_message<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.error_message = v.map(|x| x.into());
        self
    }
}

/// Information about the document, discovered during text extraction.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DocumentMetadata {
    /// Number of pages in the document.
    pub pages: std::option::Option<i32>,

    /// List of pages in the document, with the number of characters extracted
    /// from each page.
    pub extracted_characters: std::option::Option<std::vec::Vec<ExtractedCharactersListItem>>,
}

impl DocumentMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [pages][DocumentMetadata::pages].
    pub fn set_pages<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.pages = Some(v.into());
        self
    }

    /// Sets or clears the value of [pages][DocumentMetadata::pages].
    pub fn set_or_clear_pages<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.pages = v.map(|x| x.into());
        self
    }

    /// Sets the value of [extracted_characters][DocumentMetadata::extracted_characters].
    pub fn set_extracted_characters<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<ExtractedCharactersListItem>,
    {
        self.extracted_characters = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Clears the value of [extracted_characters][DocumentMetadata::extracted_characters].
    pub fn clear_extracted_characters(mut self) -> Self {
        self.extracted_characters = None;
        self
    }
}

/// The result of calling `BatchDetectDominantLanguage` on one document.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct BatchDetectDominantLanguageItemResult {
    /// The zero-based index of the document in the input list.
    pub index: std::option::Option<i32>,

    /// One or more `DominantLanguage` objects describing the dominant
    /// languages in the document.
    pub languages: std::option::Option<std::vec::Vec<DominantLanguage>>,
}

impl BatchDetectDominantLanguageItemResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [index][BatchDetectDominantLanguageItemResult::index].
    pub fn set_index<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.index = Some(v.into());
        self
    }

    /// Sets or clears the value of [index][BatchDetectDominantLanguageItemResult::index].
    pub fn set_or_clear_index<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.index = v.map(|x| x.into());
        self
    }

    /// Sets the value of [languages][BatchDetectDominantLanguageItemResult::languages].
    pub fn set_languages<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<DominantLanguage>,
    {
        self.languages = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Clears the value of [languages][BatchDetectDominantLanguageItemResult::languages].
    pub fn clear_languages(mut self) -> Self {
        self.languages = None;
        self
    }
}

/// The request message for `DetectDominantLanguage`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DetectDominantLanguageRequest {
    /// A UTF-8 text string, at least 20 characters long for reliable results.
    pub text: std::option::Option<String>,
}

impl DetectDominantLanguageRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [text][DetectDominantLanguageRequest::text].
    pub fn set_text<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.text = Some(v.into());
        self
    }

    /// Sets or clears the value of [text][DetectDominantLanguageRequest::text].
    pub fn set_or_clear_text<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.text = v.map(|x| x.into());
        self
    }
}

/// The request message for `BatchDetectDominantLanguage`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct BatchDetectDominantLanguageRequest {
    /// A list containing the UTF-8 encoded text of the input documents.
    pub text_list: std::option::Option<std::vec::Vec<String>>,
}

impl BatchDetectDominantLanguageRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [text_list][BatchDetectDominantLanguageRequest::text_list].
    pub fn set_text_list<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.text_list = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Clears the value of [text_list][BatchDetectDominantLanguageRequest::text_list].
    pub fn clear_text_list(mut self) -> Self {
        self.text_list = None;
        self
    }
}

/// The request message for `ClassifyDocument`.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ClassifyDocumentRequest {
    /// The document text to be analyzed.
    pub text: std::option::Option<String>,

    /// The Amazon Resource Number (ARN) of the endpoint.
    pub endpoint_arn: std::option::Option<String>,

    /// Use the `Bytes` parameter to input a text, PDF, Word or image file.
    ///
    /// The bytes are sent base64-encoded.
    #[serde_as(deserialize_as = "Option<serde_with::base64::Base64>")]
    pub bytes: std::option::Option<bytes::Bytes>,

    /// Overrides the default text extraction for image files and PDFs.
    pub document_reader_config: std::option::Option<DocumentReaderConfig>,
}

impl ClassifyDocumentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [text][ClassifyDocumentRequest::text].
    pub fn set_text<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.text = Some(v.into());
        self
    }

    /// Sets or clears the value of [text][ClassifyDocumentRequest::text].
    pub fn set_or_clear_text<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.text = v.map(|x| x.into());
        self
    }

    /// Sets the value of [endpoint_arn][ClassifyDocumentRequest::endpoint_arn].
    pub fn set_endpoint_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.endpoint_arn = Some(v.into());
        self
    }

    /// Sets or clears the value of [endpoint_arn][ClassifyDocumentRequest::endpoint_arn].
    pub fn set_or_clear_endpoint_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.endpoint_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [bytes][ClassifyDocumentRequest::bytes].
    pub fn set_bytes<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bytes::Bytes>,
    {
        self.bytes = Some(v.into());
        self
    }

    /// Sets or clears the value of [bytes][ClassifyDocumentRequest::bytes].
    pub fn set_or_clear_bytes<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bytes::Bytes>,
    {
        self.bytes = v.map(|x| x.into());
        self
    }

    /// Sets the value of [document_reader_config][ClassifyDocumentRequest::document_reader_config].
    pub fn set_document_reader_config<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<DocumentReaderConfig>,
    {
        self.document_reader_config = Some(v.into());
        self
    }

    /// Sets or clears the value of [document_reader_config][ClassifyDocumentRequest::document_reader_config].
    pub fn set_or_clear_document_reader_config<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<DocumentReaderConfig>,
    {
        self.document_reader_config = v.map(|x| x.into());
        self
    }
}

/// The request message for `StartPiiEntitiesDetectionJob`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StartPiiEntitiesDetectionJobRequest {
    /// The input properties for a PII entities detection job.
    pub input_data_config: std::option::Option<InputDataConfig>,

    /// Provides configuration parameters for the output of PII entity
    /// detection jobs.
    pub output_data_config: std::option::Option<PiiOutputDataConfig>,

    /// Specifies whether the output provides the locations (offsets) of PII
    /// entities or a file in which PII entities are redacted.
    pub mode: std::option::Option<PiiEntitiesDetectionMode>,

    /// The ARN of the IAM role that grants Amazon Comprehend read access to
    /// your input data.
    pub data_access_role_arn: std::option::Option<String>,

    /// The identifier of the job.
    pub job_name: std::option::Option<String>,

    /// The language of the input documents.
    pub language_code: std::option::Option<LanguageCode>,

    /// A unique identifier for the request.
    pub client_request_token: std::option::Option<String>,
}

impl StartPiiEntitiesDetectionJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [input_data_config][StartPiiEntitiesDetectionJobRequest::input_data_config].
    pub fn set_input_data_config<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<InputDataConfig>,
    {
        self.input_data_config = Some(v.into());
        self
    }

    /// Sets or clears the value of [input_data_config][StartPiiEntitiesDetectionJobRequest::input_data_config].
    pub fn set_or_clear_input_data_config<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<InputDataConfig>,
    {
        self.input_data_config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [output_data_config][StartPiiEntitiesDetectionJobRequest::output_data_config].
    pub fn set_output_data_config<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<PiiOutputDataConfig>,
    {
        self.output_data_config = Some(v.into());
        self
    }

    /// Sets or clears the value of [output_data_config][StartPiiEntitiesDetectionJobRequest::output_data_config].
    pub fn set_or_clear_output_data_config<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<PiiOutputDataConfig>,
    {
        self.output_data_config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [mode][StartPiiEntitiesDetectionJobRequest::mode].
    pub fn set_mode<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<PiiEntitiesDetectionMode>,
    {
        self.mode = Some(v.into());
        self
    }

    /// Sets or clears the value of [mode][StartPiiEntitiesDetectionJobRequest::mode].
    pub fn set_or_clear_mode<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<PiiEntitiesDetectionMode>,
    {
        self.mode = v.map(|x| x.into());
        self
    }

    /// Sets the value of [data_access_role_arn][StartPiiEntitiesDetectionJobRequest::data_access_role_arn].
    pub fn set_data_access_role_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.data_access_role_arn = Some(v.into());
        self
    }

    /// Sets or clears the value of [data_access_role_arn][StartPiiEntitiesDetectionJobRequest::data_access_role_arn].
    pub fn set_or_clear_data_access_role_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.data_access_role_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [job_name][StartPiiEntitiesDetectionJobRequest::job_name].
    pub fn set_job_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.job_name = Some(v.into());
        self
    }

    /// Sets or clears the value of [job_name][StartPiiEntitiesDetectionJobRequest::job_name].
    pub fn set_or_clear_job_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.job_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [language_code][StartPiiEntitiesDetectionJobRequest::language_code].
    pub fn set_language_code<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<LanguageCode>,
    {
        self.language_code = Some(v.into());
        self
    }

    /// Sets or clears the value of [language_code][StartPiiEntitiesDetectionJobRequest::language_code].
    pub fn set_or_clear_language_code<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<LanguageCode>,
    {
        self.language_code = v.map(|x| x.into());
        self
    }

    /// Sets the value of [client_request_token][StartPiiEntitiesDetectionJobRequest::client_request_token].
    pub fn set_client_request_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.client_request_token = Some(v.into());
        self
    }

    /// Sets or clears the value of [client_request_token][StartPiiEntitiesDetectionJobRequest::client_request_token].
    pub fn set_or_clear_client_request_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.client_request_token = v.map(|x| x.into());
        self
    }
}

/// The request message for `TagResource`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct TagResourceRequest {
    /// The ARN of the resource to tag.
    pub resource_arn: std::option::Option<String>,

    /// Tags being associated with the resource.
    pub tags: std::option::Option<std::vec::Vec<Tag>>,
}

impl TagResourceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [resource_arn][TagResourceRequest::resource_arn].
    pub fn set_resource_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.resource_arn = Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_arn][TagResourceRequest::resource_arn].
    pub fn set_or_clear_resource_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.resource_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tags][TagResourceRequest::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<Tag>,
    {
        self.tags = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Clears the value of [tags][TagResourceRequest::tags].
    pub fn clear_tags(mut self) -> Self {
        self.tags = None;
        self
    }
}

/// The request message for `UntagResource`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UntagResourceRequest {
    /// The ARN of the resource to remove tags from.
    pub resource_arn: std::option::Option<String>,

    /// The initial part of a key-value pair that forms a tag being removed
    /// from the resource.
    pub tag_keys: std::option::Option<std::vec::Vec<String>>,
}

impl UntagResourceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [resource_arn][UntagResourceRequest::resource_arn].
    pub fn set_resource_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.resource_arn = Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_arn][UntagResourceRequest::resource_arn].
    pub fn set_or_clear_resource_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.resource_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tag_keys][UntagResourceRequest::tag_keys].
    pub fn set_tag_keys<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.tag_keys = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Clears the value of [tag_keys][UntagResourceRequest::tag_keys].
    pub fn clear_tag_keys(mut self) -> Self {
        self.tag_keys = None;
        self
    }
}

/// The response message for `DetectDominantLanguage`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DetectDominantLanguageResult {
    /// Lists the languages that Amazon Comprehend detected, with a confidence
    /// score for each.
    pub languages: std::option::Option<std::vec::Vec<DominantLanguage>>,
}

impl DetectDominantLanguageResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [languages][DetectDominantLanguageResult::languages].
    pub fn set_languages<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<DominantLanguage>,
    {
        self.languages = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Clears the value of [languages][DetectDominantLanguageResult::languages].
    pub fn clear_languages(mut self) -> Self {
        self.languages = None;
        self
    }
}

/// The response message for `BatchDetectDominantLanguage`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct BatchDetectDominantLanguageResult {
    /// One result for each document that was processed successfully.
    pub result_list: std::option::Option<std::vec::Vec<BatchDetectDominantLanguageItemResult>>,

    /// One `BatchItemError` for each document that contained an error.
    pub error_list: std::option::Option<std::vec::Vec<BatchItemError>>,
}

impl BatchDetectDominantLanguageResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [result_list][BatchDetectDominantLanguageResult::result_list].
    pub fn set_result_list<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<BatchDetectDominantLanguageItemResult>,
    {
        self.result_list = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Clears the value of [result_list][BatchDetectDominantLanguageResult::result_list].
    pub fn clear_result_list(mut self) -> Self {
        self.result_list = None;
        self
    }

    /// Sets the value of [error_list][BatchDetectDominantLanguageResult::error_list].
    pub fn set_error_list<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<BatchItemError>,
    {
        self.error_list = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Clears the value of [error_list][BatchDetectDominantLanguageResult::error_list].
    pub fn clear_error_list(mut self) -> Self {
        self.error_list = None;
        self
    }
}

/// The response message for `ClassifyDocument`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ClassifyDocumentResult {
    /// The classes used by the document being analyzed, for multi-class
    /// classifiers.
    pub classes: std::option::Option<std::vec::Vec<DocumentClass>>,

    /// The labels used in the document being analyzed, for multi-label
    /// classifiers.
    pub labels: std::option::Option<std::vec::Vec<DocumentLabel>>,

    /// Extraction information about the document.
    pub document_metadata: std::option::Option<DocumentMetadata>,

    /// The document type for each page in the input document.
    pub document_type: std::option::Option<std::vec::Vec<DocumentTypeListItem>>,

    /// Page-level errors detected while extracting text.
    pub errors: std::option::Option<std::vec::Vec<ErrorsListItem>>,
}

impl ClassifyDocumentResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [classes][ClassifyDocumentResult::classes].
    pub fn set_classes<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<DocumentClass>,
    {
        self.classes = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Clears the value of [classes][ClassifyDocumentResult::classes].
    pub fn clear_classes(mut self) -> Self {
        self.classes = None;
        self
    }

    /// Sets the value of [labels][ClassifyDocumentResult::labels].
    pub fn set_labels<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<DocumentLabel>,
    {
        self.labels = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Clears the value of [labels][ClassifyDocumentResult::labels].
    pub fn clear_labels(mut self) -> Self {
        self.labels = None;
        self
    }

    /// Sets the value of [document_metadata][ClassifyDocumentResult::document_metadata].
    pub fn set_document_metadata<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<DocumentMetadata>,
    {
        self.document_metadata = Some(v.into());
        self
    }

    /// Sets or clears the value of [document_metadata][ClassifyDocumentResult::document_metadata].
    pub fn set_or_clear_document_metadata<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<DocumentMetadata>,
    {
        self.document_metadata = v.map(|x| x.into());
        self
    }

    /// Sets the value of [document_type][ClassifyDocumentResult::document_type].
    pub fn set_document_type<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<DocumentTypeListItem>,
    {
        self.document_type = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Clears the value of [document_type][ClassifyDocumentResult::document_type].
    pub fn clear_document_type(mut self) -> Self {
        self.document_type = None;
        self
    }

    /// Sets the value of [errors][ClassifyDocumentResult::errors].
    pub fn set_errors<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<ErrorsListItem>,
    {
        self.errors = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Clears the value of [errors][ClassifyDocumentResult::errors].
    pub fn clear_errors(mut self) -> Self {
        self.errors = None;
        self
    }
}

/// The response message for `StartPiiEntitiesDetectionJob`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct StartPiiEntitiesDetectionJobResult {
    /// The identifier generated for the job.
    pub job_id: std::option::Option<String>,

    /// The Amazon Resource Name (ARN) of the PII entity detection job.
    pub job_arn: std::option::Option<String>,

    /// The status of the job.
    pub job_status: std::option::Option<JobStatus>,
}

impl StartPiiEntitiesDetectionJobResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [job_id][StartPiiEntitiesDetectionJobResult::job_id].
    pub fn set_job_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.job_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [job_id][StartPiiEntitiesDetectionJobResult::job_id].
    pub fn set_or_clear_job_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.job_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [job_arn][StartPiiEntitiesDetectionJobResult::job_arn].
    pub fn set_job_arn<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.job_arn = Some(v.into());
        self
    }

    /// Sets or clears the value of [job_arn][StartPiiEntitiesDetectionJobResult::job_arn].
    pub fn set_or_clear_job_arn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.job_arn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [job_status][StartPiiEntitiesDetectionJobResult::job_status].
    pub fn set_job_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<JobStatus>,
    {
        self.job_status = Some(v.into());
        self
    }

    /// Sets or clears the value of [job_status][StartPiiEntitiesDetectionJobResult::job_status].
    pub fn set_or_clear_job_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<JobStatus>,
    {
        self.job_status = v.map(|x| x.into());
        self
    }
}

/// The response message for `TagResource`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct TagResourceResult {}

impl TagResourceResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

/// The response message for `UntagResource`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UntagResourceResult {}

impl UntagResourceResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}
