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

//! Enumerated values.
//!
//! Comprehend sends enumerations as strings. New values may be added to the
//! service at any time, so each enum has an `UnknownValue` variant preserving
//! the string as received.

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value not known to this version of the client.
            UnknownValue(String),
        }

        impl $name {
            /// The wire representation of the value.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::UnknownValue(v) => v.as_str(),
                }
            }

            /// All the values known to this version of the client.
            pub fn values() -> &'static [&'static str] {
                &[$( $wire ),+]
            }
        }

        impl std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $wire => Self::$variant, )+
                    _ => Self::UnknownValue(value.to_string()),
                }
            }
        }

        impl std::convert::From<String> for $name {
            fn from(value: String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::ser::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::de::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                <String as serde::Deserialize>::deserialize(deserializer).map(Self::from)
            }
        }
    };
}

string_enum! {
    /// The sentiment of a mention or document.
    SentimentType {
        Positive => "POSITIVE",
        Negative => "NEGATIVE",
        Neutral => "NEUTRAL",
        Mixed => "MIXED",
    }
}

string_enum! {
    /// How the text in an input file is split into documents.
    InputFormat {
        /// Each file is one document.
        OneDocPerFile => "ONE_DOC_PER_FILE",
        /// Each line of each file is one document.
        OneDocPerLine => "ONE_DOC_PER_LINE",
    }
}

string_enum! {
    /// The type of a page in an input document.
    DocumentType {
        NativePdf => "NATIVE_PDF",
        ScannedPdf => "SCANNED_PDF",
        MsWord => "MS_WORD",
        Image => "IMAGE",
        PlainText => "PLAIN_TEXT",
        TextractDetectDocumentTextJson => "TEXTRACT_DETECT_DOCUMENT_TEXT_JSON",
        TextractAnalyzeDocumentJson => "TEXTRACT_ANALYZE_DOCUMENT_JSON",
    }
}

string_enum! {
    /// The Amazon Textract operation used to extract text.
    DocumentReadAction {
        TextractDetectDocumentText => "TEXTRACT_DETECT_DOCUMENT_TEXT",
        TextractAnalyzeDocument => "TEXTRACT_ANALYZE_DOCUMENT",
    }
}

string_enum! {
    /// Determines when the document read action applies to PDF files.
    DocumentReadMode {
        /// Use the service defaults: text extraction for native PDFs, Textract
        /// for scanned ones.
        ServiceDefault => "SERVICE_DEFAULT",
        /// Use the document read action for all PDF files.
        ForceDocumentReadAction => "FORCE_DOCUMENT_READ_ACTION",
    }
}

string_enum! {
    /// The analysis performed by `TEXTRACT_ANALYZE_DOCUMENT`.
    DocumentReadFeatureTypes {
        Tables => "TABLES",
        Forms => "FORMS",
    }
}

string_enum! {
    /// The output produced by a PII entities detection job.
    PiiEntitiesDetectionMode {
        /// Write a copy of the input with the PII entities redacted.
        OnlyRedaction => "ONLY_REDACTION",
        /// Write the offsets of the PII entities.
        OnlyOffsets => "ONLY_OFFSETS",
    }
}

string_enum! {
    /// The status of an asynchronous job.
    JobStatus {
        Submitted => "SUBMITTED",
        InProgress => "IN_PROGRESS",
        Completed => "COMPLETED",
        Failed => "FAILED",
        StopRequested => "STOP_REQUESTED",
        Stopped => "STOPPED",
    }
}

string_enum! {
    /// The languages supported by analysis operations.
    LanguageCode {
        En => "en",
        Es => "es",
        Fr => "fr",
        De => "de",
        It => "it",
        Pt => "pt",
        Ar => "ar",
        Hi => "hi",
        Ja => "ja",
        Ko => "ko",
        Zh => "zh",
        ZhTw => "zh-TW",
    }
}

string_enum! {
    /// The cause of a page-level text extraction error.
    PageBasedErrorCode {
        TextractBadPage => "TEXTRACT_BAD_PAGE",
        TextractProvisionedThroughputExceeded => "TEXTRACT_PROVISIONED_THROUGHPUT_EXCEEDED",
        PageCharactersExceeded => "PAGE_CHARACTERS_EXCEEDED",
        PageSizeExceeded => "PAGE_SIZE_EXCEEDED",
        InternalServerError => "INTERNAL_SERVER_ERROR",
    }
}
