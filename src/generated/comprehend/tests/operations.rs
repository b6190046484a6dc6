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
    use aws_comprehend::errors::ComprehendError;
    use aws_comprehend::model::*;
    use aws_comprehend::operation::{self, Request};
    use bytes::Bytes;
    use gax::client_config::ClientConfig;
    use gax::request::{AMZ_JSON_1_1, X_AMZ_TARGET};
    use http::header::CONTENT_TYPE;
    use serde_json::json;
    use test_case::test_case;
    type Result = anyhow::Result<()>;

    fn config() -> ClientConfig {
        ClientConfig::new().set_endpoint("http://localhost:4566")
    }

    fn response(status: u16, body: serde_json::Value) -> http::Response<Bytes> {
        http::Response::builder()
            .status(status)
            .header("x-amzn-requestid", "req-42")
            .body(Bytes::from(body.to_string()))
            .expect("valid response")
    }

    fn target<R: Request>(_: &R) -> String {
        format!("Comprehend_20171127.{}", R::OPERATION)
    }

    #[test_case(&DetectDominantLanguageRequest::new(), "Comprehend_20171127.DetectDominantLanguage")]
    #[test_case(&BatchDetectDominantLanguageRequest::new(), "Comprehend_20171127.BatchDetectDominantLanguage")]
    #[test_case(&ClassifyDocumentRequest::new(), "Comprehend_20171127.ClassifyDocument")]
    #[test_case(&StartPiiEntitiesDetectionJobRequest::new(), "Comprehend_20171127.StartPiiEntitiesDetectionJob")]
    #[test_case(&TagResourceRequest::new(), "Comprehend_20171127.TagResource")]
    #[test_case(&UntagResourceRequest::new(), "Comprehend_20171127.UntagResource")]
    fn operation_names<R: Request>(request: &R, want: &str) -> Result {
        assert_eq!(target(request), want);
        let got = operation::prepare(&config(), request)?;
        assert_eq!(
            got.headers().get(X_AMZ_TARGET).map(|v| v.to_str()).transpose()?,
            Some(want)
        );
        assert_eq!(got.body(), &Bytes::from_static(b"{}"));
        Ok(())
    }

    #[test]
    fn prepare() -> Result {
        let request = BatchDetectDominantLanguageRequest::new().set_text_list(["hello world", "bonjour"]);
        let got = operation::prepare(&config(), &request)?;
        assert_eq!(got.method(), http::Method::POST);
        assert_eq!(got.uri(), "http://localhost:4566/");
        assert_eq!(
            got.headers().get(CONTENT_TYPE).map(|v| v.to_str()).transpose()?,
            Some(AMZ_JSON_1_1)
        );
        let body = serde_json::from_slice::<serde_json::Value>(got.body())?;
        assert_eq!(body, json!({"TextList": ["hello world", "bonjour"]}));
        Ok(())
    }

    #[test]
    fn parse_success() -> Result {
        let response = response(
            200,
            json!({"JobId": "job-1", "JobArn": "arn:job", "JobStatus": "IN_PROGRESS"}),
        );
        let got = operation::parse::<StartPiiEntitiesDetectionJobRequest>(response)?;
        assert_eq!(got.job_id.as_deref(), Some("job-1"));
        assert_eq!(got.job_status, Some(JobStatus::InProgress));
        Ok(())
    }

    #[test]
    fn parse_empty_result() -> Result {
        let response = http::Response::builder().status(200).body(Bytes::new())?;
        let got = operation::parse::<TagResourceRequest>(response)?;
        assert_eq!(got, TagResourceResult::new());
        Ok(())
    }

    #[test]
    fn parse_service_error() {
        let response = response(
            400,
            json!({"__type": "com.amazonaws.comprehend#TooManyTagKeysException", "message": "50 max"}),
        );
        let err = operation::parse::<UntagResourceRequest>(response).unwrap_err();
        assert_eq!(err.http_status_code(), Some(400));
        let exception = err.exception().expect("service error");
        assert_eq!(exception.request_id(), Some("req-42"));
        let typed = err.as_inner::<ComprehendError>().expect("classified error");
        let ComprehendError::TooManyTagKeys(e) = typed else {
            panic!("unexpected variant {typed:?}");
        };
        assert_eq!(e.error_code(), Some("TooManyTagKeysException"));
        assert_eq!(e.error_message(), Some("50 max"));
    }

    #[test]
    fn parse_service_error_mistyped_message() {
        let response = response(
            400,
            json!({"__type": "TooManyTagKeysException", "message": {"detail": "x"}}),
        );
        let err = operation::parse::<TagResourceRequest>(response).unwrap_err();
        let typed = err.as_inner::<ComprehendError>().expect("classified error");
        assert!(matches!(typed, ComprehendError::TooManyTagKeys(_)), "{typed:?}");
        assert_eq!(typed.exception().error_message(), None);
    }

    #[test]
    fn parse_unhandled_error() {
        let response = response(503, json!({"__type": "ServiceUnavailableException"}));
        let err = operation::parse::<DetectDominantLanguageRequest>(response).unwrap_err();
        let typed = err.as_inner::<ComprehendError>().expect("classified error");
        assert!(matches!(typed, ComprehendError::Unhandled(_)), "{typed:?}");
        assert_eq!(typed.error_code(), Some("ServiceUnavailableException"));
    }

    #[test]
    fn parse_bad_payload() {
        let response = http::Response::builder()
            .status(200)
            .body(Bytes::from_static(b"{\"Languages\": 42}"))
            .expect("valid response");
        let err = operation::parse::<DetectDominantLanguageRequest>(response).unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
    }
}
