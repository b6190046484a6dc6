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

//! Support for the AWS JSON marshalling convention.
//!
//! Every record has a marshaller that writes the record as a JSON object. The
//! marshaller visits the fields in their declared order and skips any field
//! that is absent, it never writes `null`. Nested records are written by
//! delegating to the marshaller of the nested type, see [Marshalled].
//!
//! The output writer is any [serde::Serializer]: beginning an object is
//! [serialize_map][serde::Serializer::serialize_map], each named value is a
//! [serialize_entry][serde::ser::SerializeMap::serialize_entry], and the
//! object ends with [end][serde::ser::SerializeMap::end].

mod float;
pub use float::*;

use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Converts a record of type `T` into a JSON object.
///
/// Implementations are stateless, a single shared instance can be used from
/// any number of threads.
pub trait JsonMarshaller<T: ?Sized>: Send + Sync {
    /// Writes `record` to `writer` as one JSON object.
    ///
    /// Failures reported by the writer are returned unchanged.
    fn marshall<S>(&self, record: &T, writer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer;
}

/// Adapts a marshaller and a record into a [Serialize] value.
///
/// Marshallers use this to delegate nested records:
///
/// ```
/// # use aws_comprehend_gax::json::{JsonMarshaller, Marshalled};
/// # use serde::ser::{SerializeMap, Serializer};
/// struct Inner { value: Option<i32> }
/// struct InnerMarshaller;
/// impl JsonMarshaller<Inner> for InnerMarshaller {
///     fn marshall<S: Serializer>(&self, record: &Inner, writer: S) -> Result<S::Ok, S::Error> {
///         let mut state = writer.serialize_map(None)?;
///         if let Some(v) = &record.value {
///             state.serialize_entry("Value", v)?;
///         }
///         state.end()
///     }
/// }
/// let inner = Inner { value: Some(42) };
/// let json = serde_json::to_string(&Marshalled::new(&InnerMarshaller, &inner))?;
/// assert_eq!(json, r#"{"Value":42}"#);
/// # Ok::<(), serde_json::Error>(())
/// ```
pub struct Marshalled<'a, M, T: ?Sized> {
    marshaller: &'a M,
    record: &'a T,
}

impl<'a, M, T: ?Sized> Marshalled<'a, M, T> {
    pub fn new(marshaller: &'a M, record: &'a T) -> Self {
        Self { marshaller, record }
    }
}

impl<M, T> Serialize for Marshalled<'_, M, T>
where
    M: JsonMarshaller<T>,
    T: ?Sized,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.marshaller.marshall(self.record, serializer)
    }
}

/// Adapts a marshaller and a list of records into a JSON array.
pub struct MarshalledSeq<'a, M, T> {
    marshaller: &'a M,
    records: &'a [T],
}

impl<'a, M, T> MarshalledSeq<'a, M, T> {
    pub fn new(marshaller: &'a M, records: &'a [T]) -> Self {
        Self {
            marshaller,
            records,
        }
    }
}

impl<M, T> Serialize for MarshalledSeq<'_, M, T>
where
    M: JsonMarshaller<T>,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_seq(Some(self.records.len()))?;
        for record in self.records {
            state.serialize_element(&Marshalled::new(self.marshaller, record))?;
        }
        state.end()
    }
}

/// Marshalls `record` into `writer`.
///
/// Errors from the writer, including I/O errors, are returned unchanged.
pub fn to_writer<M, T, W>(marshaller: &M, record: &T, writer: W) -> serde_json::Result<()>
where
    M: JsonMarshaller<T>,
    T: ?Sized,
    W: std::io::Write,
{
    let mut serializer = serde_json::Serializer::new(writer);
    marshaller.marshall(record, &mut serializer)
}

/// Marshalls `record` into a new buffer.
pub fn to_vec<M, T>(marshaller: &M, record: &T) -> serde_json::Result<Vec<u8>>
where
    M: JsonMarshaller<T>,
    T: ?Sized,
{
    let mut buffer = Vec::with_capacity(128);
    to_writer(marshaller, record, &mut buffer)?;
    Ok(buffer)
}

/// Marshalls `record` into a [String].
pub fn to_string<M, T>(marshaller: &M, record: &T) -> serde_json::Result<String>
where
    M: JsonMarshaller<T>,
    T: ?Sized,
{
    let buffer = to_vec(marshaller, record)?;
    // serde_json only produces valid UTF-8.
    String::from_utf8(buffer).map_err(serde::ser::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::SerializeMap;
    use serde_with::ser::SerializeAsWrap;
    use test_case::test_case;
    type Result = anyhow::Result<()>;

    #[derive(Default)]
    struct Leaf {
        name: Option<String>,
        score: Option<f32>,
    }

    #[derive(Default)]
    struct Branch {
        index: Option<i32>,
        leaf: Option<Leaf>,
        leaves: Option<Vec<Leaf>>,
    }

    struct LeafMarshaller;
    struct BranchMarshaller;

    impl JsonMarshaller<Leaf> for LeafMarshaller {
        fn marshall<S: Serializer>(&self, record: &Leaf, writer: S) -> std::result::Result<S::Ok, S::Error> {
            let mut state = writer.serialize_map(None)?;
            if let Some(v) = &record.name {
                state.serialize_entry("Name", v)?;
            }
            if let Some(v) = &record.score {
                state.serialize_entry("Score", &SerializeAsWrap::<f32, F32>::new(v))?;
            }
            state.end()
        }
    }

    impl JsonMarshaller<Branch> for BranchMarshaller {
        fn marshall<S: Serializer>(&self, record: &Branch, writer: S) -> std::result::Result<S::Ok, S::Error> {
            let mut state = writer.serialize_map(None)?;
            if let Some(v) = &record.index {
                state.serialize_entry("Index", v)?;
            }
            if let Some(v) = &record.leaf {
                state.serialize_entry("Leaf", &Marshalled::new(&LeafMarshaller, v))?;
            }
            if let Some(v) = &record.leaves {
                state.serialize_entry("Leaves", &MarshalledSeq::new(&LeafMarshaller, v))?;
            }
            state.end()
        }
    }

    fn leaf(name: &str, score: f32) -> Leaf {
        Leaf {
            name: Some(name.to_string()),
            score: Some(score),
        }
    }

    #[test]
    fn empty() -> Result {
        assert_eq!(to_string(&BranchMarshaller, &Branch::default())?, "{}");
        assert_eq!(to_string(&LeafMarshaller, &Leaf::default())?, "{}");
        Ok(())
    }

    #[test_case(Branch { index: Some(1), ..Default::default() }, r#"{"Index":1}"#)]
    #[test_case(Branch { leaf: Some(Leaf::default()), ..Default::default() }, r#"{"Leaf":{}}"#)]
    #[test_case(Branch { leaf: Some(leaf("a", 0.5)), ..Default::default() }, r#"{"Leaf":{"Name":"a","Score":0.5}}"#)]
    #[test_case(Branch { leaves: Some(Vec::new()), ..Default::default() }, r#"{"Leaves":[]}"#)]
    #[test_case(Branch { index: Some(2), leaves: Some(vec![leaf("a", 1.0), Leaf::default()]), ..Default::default() }, r#"{"Index":2,"Leaves":[{"Name":"a","Score":1.0},{}]}"#)]
    fn nested(input: Branch, want: &str) -> Result {
        let got = to_string(&BranchMarshaller, &input)?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn value_serializer() -> Result {
        let input = Branch {
            index: Some(7),
            leaf: Some(leaf("b", 0.25)),
            leaves: None,
        };
        let got = serde_json::to_value(Marshalled::new(&BranchMarshaller, &input))?;
        assert_eq!(
            got,
            serde_json::json!({"Index": 7, "Leaf": {"Name": "b", "Score": 0.25}})
        );
        Ok(())
    }

    struct FailingWriter;
    impl std::io::Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk full"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writer_error() {
        let input = Branch {
            index: Some(7),
            ..Default::default()
        };
        let err = to_writer(&BranchMarshaller, &input, FailingWriter).unwrap_err();
        assert!(err.is_io(), "{err:?}");
        assert!(err.to_string().contains("disk full"), "{err}");
    }
}
