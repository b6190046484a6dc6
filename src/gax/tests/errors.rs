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
    use aws_comprehend_gax::error::{Error, ErrorResponse, ErrorType, ServiceException};
    use aws_comprehend_gax::unmarshaller::{ErrorUnmarshaller, classify};
    use bytes::Bytes;
    use http::HeaderMap;
    use serde_json::json;
    use test_case::test_case;

    #[derive(Debug, thiserror::Error)]
    enum ServiceError {
        #[error("throttled: {0}")]
        Throttled(ServiceException),
        #[error("unhandled: {0}")]
        Unhandled(ServiceException),
    }

    static RULES: [ErrorUnmarshaller<ServiceError>; 1] = [ErrorUnmarshaller::new(
        "ThrottlingException",
        ServiceError::Throttled,
    )];

    static_assertions::assert_impl_all!(Error: Send, Sync, std::error::Error);
    static_assertions::assert_impl_all!(ErrorUnmarshaller<ServiceError>: Send, Sync);

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        pairs
            .iter()
            .map(|(k, v)| {
                (
                    http::HeaderName::from_static(k),
                    http::HeaderValue::from_static(v),
                )
            })
            .collect()
    }

    #[test_case(&[("x-amzn-errortype", "ThrottlingException:http://internal.amazon.com/")], json!({}); "header")]
    #[test_case(&[], json!({"__type": "com.amazonaws.comprehend#ThrottlingException"}); "type field")]
    #[test_case(&[], json!({"code": "ThrottlingException"}); "code field")]
    fn end_to_end(pairs: &[(&'static str, &'static str)], body: serde_json::Value) {
        let body = Bytes::from(body.to_string());
        let response = ErrorResponse::from_http(429, &headers(pairs), &body);
        let typed = classify(&RULES, ServiceError::Unhandled, &response);
        let err = Error::service(ServiceException::from(&response), typed);

        assert_eq!(err.http_status_code(), Some(429));
        let exception = err.exception().expect("service errors carry an exception");
        assert_eq!(exception.error_type(), ErrorType::Client);
        let inner = err.as_inner::<ServiceError>().expect("typed error is the source");
        let ServiceError::Throttled(e) = inner else {
            panic!("unexpected classification {inner:?}");
        };
        assert_eq!(e.error_code(), Some("ThrottlingException"));
    }

    #[test]
    fn header_code_wins() {
        let body = Bytes::from(json!({"__type": "Other", "Message": "slow down"}).to_string());
        let response = ErrorResponse::from_http(
            400,
            &headers(&[("x-amzn-errortype", "ThrottlingException")]),
            &body,
        );
        assert_eq!(response.error_code(), Some("ThrottlingException"));
        assert_eq!(response.message(), Some("slow down"));
    }

    #[test]
    fn source_chain() {
        let response = ErrorResponse::new(500).set_error_code("InternalFailure");
        let typed = classify(&RULES, ServiceError::Unhandled, &response);
        let err = Error::service(ServiceException::from(&response), typed);
        let source = std::error::Error::source(&err).expect("typed error is the source");
        assert!(source.to_string().contains("InternalFailure"), "{source}");
        assert!(err.to_string().contains("InternalFailure"), "{err}");
    }
}
