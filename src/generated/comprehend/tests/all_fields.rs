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

#[cfg(test)]
mod test {
    use aws_comprehend::model::*;
    use pretty_assertions::assert_eq;
    use serde::Serialize;
    use serde::de::DeserializeOwned;
    use test_case::test_case;
    type Result = anyhow::Result<()>;

    fn batch_item_error() -> BatchItemError {
        BatchItemError::new()
            .set_index(3)
            .set_error_code("X")
            .set_error_message("bad")
    }

    fn document_class() -> DocumentClass {
        DocumentClass::new()
            .set_name("invoice")
            .set_score(0.5_f32)
            .set_page(1)
    }

    fn document_label() -> DocumentLabel {
        DocumentLabel::new()
            .set_name("urgent")
            .set_score(0.75_f32)
            .set_page(2)
    }

    fn document_type_list_item() -> DocumentTypeListItem {
        DocumentTypeListItem::new()
            .set_page(1)
            .set_type(DocumentType::NativePdf)
    }

    fn dominant_language() -> DominantLanguage {
        DominantLanguage::new()
            .set_language_code("en")
            .set_score(0.987_f32)
    }

    fn entity_label() -> EntityLabel {
        EntityLabel::new().set_name("SSN").set_score(0.25_f32)
    }

    fn entity_recognizer_entity_list() -> EntityRecognizerEntityList {
        EntityRecognizerEntityList::new().set_s3_uri("s3://bucket/entities.csv")
    }

    fn extracted_characters_list_item() -> ExtractedCharactersListItem {
        ExtractedCharactersListItem::new().set_page(3).set_count(120)
    }

    fn document_reader_config() -> DocumentReaderConfig {
        DocumentReaderConfig::new()
            .set_document_read_action(DocumentReadAction::TextractDetectDocumentText)
            .set_document_read_mode(DocumentReadMode::ForceDocumentReadAction)
            .set_feature_types([DocumentReadFeatureTypes::Tables])
    }

    fn input_data_config() -> InputDataConfig {
        InputDataConfig::new()
            .set_s3_uri("s3://b/in")
            .set_input_format(InputFormat::OneDocPerFile)
            .set_document_reader_config(
                DocumentReaderConfig::new().set_document_read_mode(DocumentReadMode::ServiceDefault),
            )
    }

    fn sentiment_score() -> SentimentScore {
        SentimentScore::new()
            .set_positive(0.5_f32)
            .set_negative(0.25_f32)
            .set_neutral(0.125_f32)
            .set_mixed(0.125_f32)
    }

    fn mention_sentiment() -> MentionSentiment {
        MentionSentiment::new()
            .set_sentiment(SentimentType::Negative)
            .set_sentiment_score(SentimentScore::new().set_negative(1.0_f32))
    }

    fn pii_output_data_config() -> PiiOutputDataConfig {
        PiiOutputDataConfig::new()
            .set_s3_uri("s3://b/out")
            .set_kms_key_id("key-1")
    }

    fn tag() -> Tag {
        Tag::new().set_key("team").set_value("nlp")
    }

    fn detect_dominant_language_request() -> DetectDominantLanguageRequest {
        DetectDominantLanguageRequest::new().set_text("hello")
    }

    fn batch_detect_dominant_language_request() -> BatchDetectDominantLanguageRequest {
        BatchDetectDominantLanguageRequest::new().set_text_list(["a", "b"])
    }

    fn classify_document_request() -> ClassifyDocumentRequest {
        ClassifyDocumentRequest::new()
            .set_text("t")
            .set_endpoint_arn("arn:e")
            .set_bytes(bytes::Bytes::from_static(b"Hi"))
            .set_document_reader_config(
                DocumentReaderConfig::new()
                    .set_document_read_action(DocumentReadAction::TextractAnalyzeDocument),
            )
    }

    fn start_pii_entities_detection_job_request() -> StartPiiEntitiesDetectionJobRequest {
        StartPiiEntitiesDetectionJobRequest::new()
            .set_input_data_config(InputDataConfig::new().set_s3_uri("s3://b/in"))
            .set_output_data_config(PiiOutputDataConfig::new().set_kms_key_id("k"))
            .set_mode(PiiEntitiesDetectionMode::OnlyRedaction)
            .set_data_access_role_arn("arn:role")
            .set_job_name("job")
            .set_language_code(LanguageCode::Es)
            .set_client_request_token("token")
    }

    fn tag_resource_request() -> TagResourceRequest {
        TagResourceRequest::new()
            .set_resource_arn("arn:r")
            .set_tags([Tag::new().set_key("k").set_value("v")])
    }

    fn untag_resource_request() -> UntagResourceRequest {
        UntagResourceRequest::new()
            .set_resource_arn("arn:r")
            .set_tag_keys(["k"])
    }

    #[test_case(batch_item_error(), r#"{"Index":3,"ErrorCode":"X","ErrorMessage":"bad"}"#)]
    #[test_case(document_class(), r#"{"Name":"invoice","Score":0.5,"Page":1}"#)]
    #[test_case(document_label(), r#"{"Name":"urgent","Score":0.75,"Page":2}"#)]
    #[test_case(document_type_list_item(), r#"{"Page":1,"Type":"NATIVE_PDF"}"#)]
    #[test_case(dominant_language(), r#"{"LanguageCode":"en","Score":0.987}"#)]
    #[test_case(entity_label(), r#"{"Name":"SSN","Score":0.25}"#)]
    #[test_case(entity_recognizer_entity_list(), r#"{"S3Uri":"s3://bucket/entities.csv"}"#)]
    #[test_case(extracted_characters_list_item(), r#"{"Page":3,"Count":120}"#)]
    #[test_case(document_reader_config(), r#"{"DocumentReadAction":"TEXTRACT_DETECT_DOCUMENT_TEXT","DocumentReadMode":"FORCE_DOCUMENT_READ_ACTION","FeatureTypes":["TABLES"]}"#)]
    #[test_case(input_data_config(), r#"{"S3Uri":"s3://b/in","InputFormat":"ONE_DOC_PER_FILE","DocumentReaderConfig":{"DocumentReadMode":"SERVICE_DEFAULT"}}"#)]
    #[test_case(sentiment_score(), r#"{"Positive":0.5,"Negative":0.25,"Neutral":0.125,"Mixed":0.125}"#)]
    #[test_case(mention_sentiment(), r#"{"Sentiment":"NEGATIVE","SentimentScore":{"Negative":1.0}}"#)]
    #[test_case(pii_output_data_config(), r#"{"S3Uri":"s3://b/out","KmsKeyId":"key-1"}"#)]
    #[test_case(tag(), r#"{"Key":"team","Value":"nlp"}"#)]
    #[test_case(detect_dominant_language_request(), r#"{"Text":"hello"}"#)]
    #[test_case(batch_detect_dominant_language_request(), r#"{"TextList":["a","b"]}"#)]
    #[test_case(classify_document_request(), r#"{"Text":"t","EndpointArn":"arn:e","Bytes":"SGk=","DocumentReaderConfig":{"DocumentReadAction":"TEXTRACT_ANALYZE_DOCUMENT"}}"#)]
    #[test_case(start_pii_entities_detection_job_request(), r#"{"InputDataConfig":{"S3Uri":"s3://b/in"},"OutputDataConfig":{"KmsKeyId":"k"},"Mode":"ONLY_REDACTION","DataAccessRoleArn":"arn:role","JobName":"job","LanguageCode":"es","ClientRequestToken":"token"}"#)]
    #[test_case(tag_resource_request(), r#"{"ResourceArn":"arn:r","Tags":[{"Key":"k","Value":"v"}]}"#)]
    #[test_case(untag_resource_request(), r#"{"ResourceArn":"arn:r","TagKeys":["k"]}"#)]
    fn all_fields_in_declared_order<T: Serialize>(record: T, want: &str) -> Result {
        let got = serde_json::to_string(&record)?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test_case(batch_item_error())]
    #[test_case(document_class())]
    #[test_case(document_label())]
    #[test_case(document_type_list_item())]
    #[test_case(dominant_language())]
    #[test_case(entity_label())]
    #[test_case(entity_recognizer_entity_list())]
    #[test_case(extracted_characters_list_item())]
    #[test_case(document_reader_config())]
    #[test_case(input_data_config())]
    #[test_case(sentiment_score())]
    #[test_case(mention_sentiment())]
    #[test_case(pii_output_data_config())]
    #[test_case(tag())]
    #[test_case(detect_dominant_language_request())]
    #[test_case(batch_detect_dominant_language_request())]
    #[test_case(classify_document_request())]
    #[test_case(start_pii_entities_detection_job_request())]
    #[test_case(tag_resource_request())]
    #[test_case(untag_resource_request())]
    fn round_trip<T>(input: T) -> Result
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let json = serde_json::to_string(&input)?;
        let got = serde_json::from_str::<T>(&json)?;
        assert_eq!(got, input);
        Ok(())
    }
}
