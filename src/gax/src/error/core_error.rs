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

use super::ServiceException;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by the Amazon Comprehend bindings.
///
/// The bindings report errors from multiple sources. The request may not
/// serialize, the response may not deserialize, or the service may return an
/// error response. In the latter case the error carries the generic
/// [ServiceException] and, as its [source][std::error::Error::source], the
/// typed exception produced by the error unmarshallers.
///
/// # Example
/// ```
/// use aws_comprehend_gax::error::{Error, ServiceException};
/// match example_function() {
///     Err(e) if e.exception().is_some() => {
///         println!("service error {e}, code {:?}", e.exception().and_then(|x| x.error_code()));
///     },
///     Err(e) if e.is_serialization() => { println!("bad request {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # Err(Error::http(400, http::HeaderMap::new(), bytes::Bytes::from_static(b"NOT JSON")))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error for a service error response.
    ///
    /// `typed` is the classified exception, it becomes the error source and
    /// can be recovered with [as_inner][Error::as_inner].
    ///
    /// # Example
    /// ```
    /// use aws_comprehend_gax::error::{Error, ServiceException};
    /// let exception = ServiceException::new().set_error_code("ThrottlingException");
    /// let error = Error::service(exception.clone(), exception.clone());
    /// assert_eq!(error.exception(), Some(&exception));
    /// ```
    pub fn service<T: Into<BoxError>>(exception: ServiceException, typed: T) -> Self {
        Self {
            kind: ErrorKind::Service(Box::new(exception)),
            source: Some(typed.into()),
        }
    }

    /// The generic exception associated with this error, if any.
    ///
    /// Only errors created from a service error response have one. Use
    /// [as_inner][Error::as_inner] to get the typed exception.
    pub fn exception(&self) -> Option<&ServiceException> {
        match &self.kind {
            ErrorKind::Service(e) => Some(e.as_ref()),
            _ => None,
        }
    }

    /// Creates an error representing a serialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use aws_comprehend_gax::error::Error;
    /// let error = Error::ser("simulated problem");
    /// assert!(error.is_serialization());
    /// assert!(error.source().is_some());
    /// ```
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    ///
    /// This is always a client-side error, generated before the request is
    /// made. The marshallers never fail on their own, so this error wraps a
    /// failure reported by the output writer.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Creates an error representing a deserialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use aws_comprehend_gax::error::Error;
    /// let error = Error::deser("simulated problem");
    /// assert!(error.is_deserialization());
    /// assert!(error.source().is_some());
    /// ```
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    ///
    /// The most common cause for deserialization problems are bugs in the
    /// bindings and (rarely) bugs in the service.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Creates an error for a HTTP response that could not be interpreted as
    /// a service error.
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = HttpDetails {
            status_code,
            headers,
            payload,
        };
        Self {
            kind: ErrorKind::Http(Box::new(details)),
            source: None,
        }
    }

    /// The HTTP status code, if any, associated with this error.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Http(d) => Some(d.status_code),
            ErrorKind::Service(e) => e.status_code(),
            _ => None,
        }
    }

    /// The HTTP headers, if any, associated with this error.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.kind {
            ErrorKind::Http(d) => Some(&d.headers),
            _ => None,
        }
    }

    /// The HTTP payload, if any, associated with this error.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Http(d) => Some(&d.payload),
            _ => None,
        }
    }

    /// Returns the first error in the source chain with type `T`.
    ///
    /// # Example
    /// ```
    /// use aws_comprehend_gax::error::{Error, ServiceException};
    /// let exception = ServiceException::new().set_error_code("ThrottlingException");
    /// let error = Error::service(exception.clone(), exception.clone());
    /// assert_eq!(error.as_inner::<ServiceException>(), Some(&exception));
    /// ```
    pub fn as_inner<T: StdError + 'static>(&self) -> Option<&T> {
        let mut e = self.source();
        while let Some(current) = e {
            if let Some(inner) = current.downcast_ref::<T>() {
                return Some(inner);
            }
            e = current.source();
        }
        None
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Http(d), _) => {
                let code = d.status_code;
                match std::str::from_utf8(d.payload.as_ref()) {
                    Ok(message) => {
                        write!(f, "the HTTP transport reports a [{code}] error: {message}")
                    }
                    Err(_) => write!(f, "the HTTP transport reports a [{code}] error: {:?}", d.payload),
                }
            }
            (ErrorKind::Service(e), _) => write!(f, "the service reports an error: {e}"),
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &dyn std::error::Error)
    }
}

#[derive(Debug)]
enum ErrorKind {
    Serialization,
    Deserialization,
    Http(Box<HttpDetails>),
    Service(Box<ServiceException>),
}

#[derive(Debug)]
struct HttpDetails {
    status_code: u16,
    headers: HeaderMap,
    payload: bytes::Bytes,
}
