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
    use serde_json::{Value, json};
    use test_case::test_case;
    type Result = anyhow::Result<()>;

    #[test]
    fn round_trip() -> Result {
        let input = MentionSentiment::new()
            .set_sentiment(SentimentType::Mixed)
            .set_sentiment_score(SentimentScore::new().set_mixed(0.75_f32).set_neutral(0.25_f32));
        let json = serde_json::to_string(&input)?;
        let got = serde_json::from_str::<MentionSentiment>(&json)?;
        assert_eq!(got, input);
        Ok(())
    }

    #[test_case(json!({}))]
    #[test_case(json!({"LanguageCode": null, "Score": null}))]
    #[test_case(json!({"Unknown": "field"}))]
    fn dominant_language_empty(input: Value) -> Result {
        let got = serde_json::from_value::<DominantLanguage>(input)?;
        assert_eq!(got, DominantLanguage::new());
        Ok(())
    }

    #[test_case(json!("NaN"))]
    #[test_case(json!("Infinity"))]
    #[test_case(json!("-Infinity"))]
    fn special_scores(input: Value) -> Result {
        let got = serde_json::from_value::<EntityLabel>(json!({"Score": input}))?;
        let score = got.score.expect("score is present");
        assert!(score.is_nan() || score.is_infinite(), "{score}");
        Ok(())
    }

    #[test]
    fn detect_dominant_language_result() -> Result {
        let input = json!({
            "Languages": [
                {"LanguageCode": "fr", "Score": 0.5},
                {"LanguageCode": "en", "Score": 0.25},
            ]
        });
        let got = serde_json::from_value::<DetectDominantLanguageResult>(input)?;
        let want = DetectDominantLanguageResult::new().set_languages([
            DominantLanguage::new().set_language_code("fr").set_score(0.5_f32),
            DominantLanguage::new().set_language_code("en").set_score(0.25_f32),
        ]);
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn batch_detect_dominant_language_result() -> Result {
        let input = json!({
            "ResultList": [{"Index": 0, "Languages": [{"LanguageCode": "de", "Score": 1.0}]}],
            "ErrorList": [{"Index": 1, "ErrorCode": "TEXT_SIZE_LIMIT_EXCEEDED", "ErrorMessage": "too long"}],
        });
        let got = serde_json::from_value::<BatchDetectDominantLanguageResult>(input)?;
        let results = got.result_list.expect("results are present");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].index, Some(0));
        assert_eq!(
            results[0].languages,
            Some(vec![DominantLanguage::new().set_language_code("de").set_score(1.0_f32)])
        );
        assert_eq!(
            got.error_list,
            Some(vec![
                BatchItemError::new()
                    .set_index(1)
                    .set_error_code("TEXT_SIZE_LIMIT_EXCEEDED")
                    .set_error_message("too long")
            ])
        );
        Ok(())
    }

    #[test]
    fn classify_document_result() -> Result {
        let input = json!({
            "Classes": [{"Name": "invoice", "Score": 0.5, "Page": 1}],
            "DocumentMetadata": {
                "Pages": 2,
                "ExtractedCharacters": [{"Page": 1, "Count": 120}, {"Page": 2, "Count": 0}],
            },
            "DocumentType": [{"Page": 1, "Type": "NATIVE_PDF"}, {"Page": 2, "Type": "NEW_TYPE"}],
            "Errors": [{"Page": 2, "ErrorCode": "PAGE_SIZE_EXCEEDED", "ErrorMessage": "big"}],
        });
        let got = serde_json::from_value::<ClassifyDocumentResult>(input)?;
        assert_eq!(
            got.classes,
            Some(vec![DocumentClass::new().set_name("invoice").set_score(0.5_f32).set_page(1)])
        );
        assert_eq!(got.labels, None);
        let metadata = got.document_metadata.expect("metadata is present");
        assert_eq!(metadata.pages, Some(2));
        assert_eq!(
            metadata.extracted_characters,
            Some(vec![
                ExtractedCharactersListItem::new().set_page(1).set_count(120),
                ExtractedCharactersListItem::new().set_page(2).set_count(0),
            ])
        );
        assert_eq!(
            got.document_type,
            Some(vec![
                DocumentTypeListItem::new().set_page(1).set_type(DocumentType::NativePdf),
                DocumentTypeListItem::new()
                    .set_page(2)
                    .set_type(DocumentType::UnknownValue("NEW_TYPE".to_string())),
            ])
        );
        assert_eq!(
            got.errors,
            Some(vec![
                ErrorsListItem::new()
                    .set_page(2)
                    .set_error_code(PageBasedErrorCode::PageSizeExceeded)
                    .set_error_message("big")
            ])
        );
        Ok(())
    }

    #[test]
    fn classify_document_request_bytes() -> Result {
        let got = serde_json::from_value::<ClassifyDocumentRequest>(json!({"Bytes": "SGVsbG8="}))?;
        assert_eq!(got.bytes, Some(bytes::Bytes::from_static(b"Hello")));
        Ok(())
    }

    #[test]
    fn start_pii_entities_detection_job_result() -> Result {
        let input = json!({"JobId": "id", "JobArn": "arn:job", "JobStatus": "SUBMITTED"});
        let got = serde_json::from_value::<StartPiiEntitiesDetectionJobResult>(input)?;
        let want = StartPiiEntitiesDetectionJobResult::new()
            .set_job_id("id")
            .set_job_arn("arn:job")
            .set_job_status(JobStatus::Submitted);
        assert_eq!(got, want);
        Ok(())
    }
}
