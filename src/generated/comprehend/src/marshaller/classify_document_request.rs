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

use crate::marshaller::DocumentReaderConfigJsonMarshaller;
use crate::model::ClassifyDocumentRequest;
use gax::json::{JsonMarshaller, Marshalled};
use serde::ser::{SerializeMap, Serializer};
use serde_with::base64::Base64;
use serde_with::ser::SerializeAsWrap;

/// Marshalls [ClassifyDocumentRequest] records as JSON objects.
#[derive(Debug)]
pub struct ClassifyDocumentRequestJsonMarshaller {
    _private: (),
}

lazy_static::lazy_static! {
    static ref INSTANCE: ClassifyDocumentRequestJsonMarshaller =
        ClassifyDocumentRequestJsonMarshaller { _private: () };
}

impl ClassifyDocumentRequestJsonMarshaller {
    /// Returns the shared instance.
    pub fn get_instance() -> &'static Self {
        &INSTANCE
    }
}

impl JsonMarshaller<ClassifyDocumentRequest> for ClassifyDocumentRequestJsonMarshaller {
    fn marshall<S>(&self, record: &ClassifyDocumentRequest, writer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = writer.serialize_map(None)?;
        if let Some(v) = &record.text {
            state.serialize_entry("Text", v)?;
        }
        if let Some(v) = &record.endpoint_arn {
            state.serialize_entry("EndpointArn", v)?;
        }
        if let Some(v) = &record.bytes {
            state.serialize_entry("Bytes", &SerializeAsWrap::<bytes::Bytes, Base64>::new(v))?;
        }
        if let Some(v) = &record.document_reader_config {
            state.serialize_entry(
                "DocumentReaderConfig",
                &Marshalled::new(DocumentReaderConfigJsonMarshaller::get_instance(), v),
            )?;
        }
        state.end()
    }
}

impl serde::ser::Serialize for ClassifyDocumentRequest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        ClassifyDocumentRequestJsonMarshaller::get_instance().marshall(self, serializer)
    }
}
