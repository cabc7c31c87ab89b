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

use super::service::ServiceError;
use super::{DecodeError, StrictDecodeError};
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client libraries.
///
/// The client libraries report errors from multiple sources. For example, a
/// request may contain keys its operation does not recognize, a value may be
/// impossible to represent in JSON, a response may fail to decode, or the
/// service may return an error in the response envelope.
///
/// Most applications will just return the error or log it, without any further
/// action. However, some applications may need to interrogate the error
/// details. This type offers a series of predicates to determine the error
/// kind. The type also offers accessors to query the most common error details.
/// Applications can query the error [source][std::error::Error::source] for
/// deeper information.
///
/// # Example
/// ```
/// use tencentcloud_gax::error::Error;
/// match example_function() {
///     Err(e) if e.is_strict_decode() => { println!("fix the request {e}"); },
///     Err(e) if e.service_error().is_some() => {
///         println!("service error {e}, debug using {:?}", e.service_error());
///     },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # use tencentcloud_gax::error::service::ServiceError;
///     # Err(Error::service(ServiceError::new("ResourceNotFound", "NOT FOUND")))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error with the information returned by Tencent Cloud services.
    ///
    /// # Example
    /// ```
    /// use tencentcloud_gax::error::Error;
    /// use tencentcloud_gax::error::service::ServiceError;
    /// let details = ServiceError::new("ResourceNotFound", "NOT FOUND");
    /// let error = Error::service(details.clone());
    /// assert_eq!(error.service_error().map(|e| e.code()), Some("ResourceNotFound"));
    /// ```
    pub fn service(details: ServiceError) -> Self {
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source: None,
        }
    }

    /// The details returned by the service, if this is a service error.
    ///
    /// Tencent Cloud services report failures inside the response envelope,
    /// as an `Error` object with a `Code` and a `Message`, next to the
    /// `RequestId` of the call.
    ///
    /// # Troubleshooting
    ///
    /// As this error type is created by the service, troubleshooting this
    /// problem typically involves reading the service documentation for the
    /// error code. The `RequestId` helps the service support team locate the
    /// call.
    pub fn service_error(&self) -> Option<&ServiceError> {
        match &self.kind {
            ErrorKind::Service(d) => Some(d.as_ref()),
            _ => None,
        }
    }

    /// Creates an error representing a request with unknown keys.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use tencentcloud_gax::error::{Error, StrictDecodeError};
    /// let error = Error::strict_decode(StrictDecodeError::unknown_key("CreateVpc", "Bogus"));
    /// assert!(error.is_strict_decode());
    /// assert!(error.source().is_some());
    /// ```
    pub fn strict_decode(source: StrictDecodeError) -> Self {
        Self {
            kind: ErrorKind::StrictDecode,
            source: Some(source.into()),
        }
    }

    /// The request text contains keys not recognized by its operation, or it is
    /// not a JSON object.
    ///
    /// This is always a client-side generated error, and it is never
    /// transient: decoding the same text will fail the same way.
    ///
    /// # Troubleshooting
    ///
    /// Member names are case-sensitive. Compare the offending key, available
    /// via [strict_decode_error][Error::strict_decode_error], with the member
    /// names documented for the operation.
    pub fn is_strict_decode(&self) -> bool {
        matches!(self.kind, ErrorKind::StrictDecode)
    }

    /// The strict decoding details, if this is a strict decoding error.
    pub fn strict_decode_error(&self) -> Option<&StrictDecodeError> {
        match self.kind {
            ErrorKind::StrictDecode => self
                .source
                .as_ref()
                .and_then(|e| e.downcast_ref::<StrictDecodeError>()),
            _ => None,
        }
    }

    /// Creates an error representing a value with the wrong JSON type.
    ///
    /// # Example
    /// ```
    /// use serde::de::Error as _;
    /// use tencentcloud_gax::error::{DecodeError, Error};
    /// let error = Error::decode(DecodeError::custom("simulated problem"));
    /// assert!(error.is_decode());
    /// ```
    pub fn decode(source: DecodeError) -> Self {
        Self {
            kind: ErrorKind::Decode,
            source: Some(source.into()),
        }
    }

    /// A recognized key holds a value of the wrong JSON type, or a number
    /// that does not fit its field.
    ///
    /// # Troubleshooting
    ///
    /// The [decode_error][Error::decode_error] details include the path to the
    /// offending value, e.g. `Instances[0].InstanceId`.
    ///
    /// When decoding responses, the most common cause is a change in the
    /// service that this version of the client library does not know about.
    /// Upgrading to the latest version of the client library may be the only
    /// possible fix.
    pub fn is_decode(&self) -> bool {
        matches!(self.kind, ErrorKind::Decode)
    }

    /// The decoding details, if this is a decoding error.
    pub fn decode_error(&self) -> Option<&DecodeError> {
        match self.kind {
            ErrorKind::Decode => self
                .source
                .as_ref()
                .and_then(|e| e.downcast_ref::<DecodeError>()),
            _ => None,
        }
    }

    /// Creates an error representing text that is not valid JSON.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use tencentcloud_gax::error::Error;
    /// let error = Error::malformed_json("simulated problem");
    /// assert!(error.is_malformed_json());
    /// assert!(error.source().is_some());
    /// ```
    pub fn malformed_json<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::MalformedJson,
            source: Some(source.into()),
        }
    }

    /// The input is not syntactically valid JSON.
    ///
    /// The source is the parser error, which includes the line and column of
    /// the problem.
    pub fn is_malformed_json(&self) -> bool {
        matches!(self.kind, ErrorKind::MalformedJson)
    }

    /// Creates an error representing a serialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use tencentcloud_gax::error::Error;
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

    /// The message could not be serialized.
    ///
    /// This is always a client-side generated error, generated before the
    /// request is made. This error is never transient: the serialization is
    /// deterministic, and will fail on future attempts with the same input
    /// data.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause is a floating point field holding `NaN` or an
    /// infinity, which have no JSON representation. A less common cause is a
    /// failure in the destination writer. Use `format!("{:?}", ...)` to
    /// examine the error as it should include the original problem.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// A problem reported by the transport layer.
    ///
    /// Use when the service returns an HTTP error without a response envelope,
    /// for example an error generated by a proxy.
    ///
    /// # Example
    /// ```
    /// use tencentcloud_gax::error::Error;
    /// let error = Error::http(502, http::HeaderMap::new(), bytes::Bytes::from_static(b"BAD GATEWAY"));
    /// assert!(error.is_transport());
    /// assert_eq!(error.http_status_code(), Some(502));
    /// ```
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = TransportDetails {
            status_code,
            headers,
            payload,
        };
        let kind = ErrorKind::Transport(Box::new(details));
        Self { kind, source: None }
    }

    /// The HTTP response did not contain a response envelope.
    ///
    /// # Troubleshooting
    ///
    /// This indicates that the request did not reach the service, or that
    /// the service failed before producing a response. The payload, available
    /// via [http_payload][Error::http_payload], often includes a description
    /// of the problem.
    pub fn is_transport(&self) -> bool {
        matches!(&self.kind, ErrorKind::Transport(_))
    }

    /// The HTTP status code, if any, associated with this error.
    ///
    /// Note that `http_status_code()`, `http_headers()`, `http_payload()`, and
    /// `service_error()` are represented as different fields, because they may
    /// be set in some errors but not others.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Transport(d) => Some(d.status_code),
            ErrorKind::Service(d) => d.http_status_code(),
            _ => None,
        }
    }

    /// The headers, if any, associated with this error.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.kind {
            ErrorKind::Transport(d) => Some(&d.headers),
            ErrorKind::Service(d) => d.headers(),
            _ => None,
        }
    }

    /// The payload, if any, associated with this error.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Transport(d) => Some(&d.payload),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::StrictDecode, Some(e)) => write!(f, "cannot decode the request: {e}"),
            (ErrorKind::Decode, Some(e)) => write!(f, "cannot decode the message: {e}"),
            (ErrorKind::MalformedJson, Some(e)) => write!(f, "the input is not valid JSON: {e}"),
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the message: {e}"),
            (ErrorKind::Transport(d), _) => {
                write!(
                    f,
                    "the HTTP transport reports a [{}] error: {}",
                    d.status_code,
                    String::from_utf8_lossy(&d.payload)
                )
            }
            (ErrorKind::Service(d), _) => {
                write!(
                    f,
                    "the service reports an error with code {} described as: {}",
                    d.code(),
                    d.message()
                )?;
                if let Some(id) = d.request_id() {
                    write!(f, " (request id {id})")?;
                }
                Ok(())
            }
            (_, None) => write!(f, "an unclassified problem"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    StrictDecode,
    Decode,
    MalformedJson,
    Serialization,
    Transport(Box<TransportDetails>),
    Service(Box<ServiceError>),
}

#[derive(Debug)]
struct TransportDetails {
    status_code: u16,
    headers: HeaderMap,
    payload: bytes::Bytes,
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;
    use serde::de::Error as _;
    use std::error::Error as _;
    use test_case::test_case;

    static_assertions::assert_impl_all!(Error: Send, Sync);

    #[test]
    fn service() {
        let details = ServiceError::new("ResourceNotFound.Vpc", "the VPC does not exist")
            .set_request_id("req-123");
        let error = Error::service(details.clone());
        assert_eq!(error.service_error(), Some(&details));
        assert!(error.source().is_none(), "{error:?}");
        let got = error.to_string();
        assert!(got.contains("ResourceNotFound.Vpc"), "{got}");
        assert!(got.contains("the VPC does not exist"), "{got}");
        assert!(got.contains("req-123"), "{got}");
        assert!(!error.is_strict_decode(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
    }

    #[test]
    fn service_with_http_metadata() {
        let mut headers = HeaderMap::new();
        headers.insert("x-tc-requestid", HeaderValue::from_static("req-123"));
        let details = ServiceError::new("InternalError", "oops")
            .set_http_status_code(500_u16)
            .set_headers(headers.clone());
        let error = Error::service(details);
        assert_eq!(error.http_status_code(), Some(500));
        assert_eq!(error.http_headers(), Some(&headers));
        assert!(error.http_payload().is_none(), "{error:?}");
    }

    #[test]
    fn strict_decode() {
        let error = Error::strict_decode(StrictDecodeError::unknown_key("CreateVpc", "Bogus"));
        assert!(error.is_strict_decode(), "{error:?}");
        let details = error.strict_decode_error();
        assert_eq!(details.map(|d| d.operation()), Some("CreateVpc"));
        assert_eq!(details.and_then(|d| d.key()), Some("Bogus"));
        let got = error.to_string();
        assert!(got.contains("CreateVpc") && got.contains("Bogus"), "{got}");
        assert!(error.decode_error().is_none(), "{error:?}");
    }

    #[test]
    fn decode() {
        let error = Error::decode(DecodeError::custom("bad value"));
        assert!(error.is_decode(), "{error:?}");
        assert_eq!(error.decode_error().map(|d| d.message()), Some("bad value"));
        assert!(error.strict_decode_error().is_none(), "{error:?}");
        assert!(error.to_string().contains("bad value"), "{error}");
    }

    #[test]
    fn http() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("text/plain"));
        let error = Error::http(502, headers.clone(), bytes::Bytes::from_static(b"BAD GATEWAY"));
        assert!(error.is_transport(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(502));
        assert_eq!(error.http_headers(), Some(&headers));
        assert_eq!(
            error.http_payload(),
            Some(&bytes::Bytes::from_static(b"BAD GATEWAY"))
        );
        let got = error.to_string();
        assert!(got.contains("502") && got.contains("BAD GATEWAY"), "{got}");
        assert!(error.service_error().is_none(), "{error:?}");
    }

    #[test_case(Error::malformed_json("test-only"), "not valid JSON")]
    #[test_case(Error::ser("test-only"), "cannot serialize")]
    fn with_source(error: Error, want: &str) {
        assert!(error.source().is_some(), "{error:?}");
        let got = error.to_string();
        assert!(got.contains(want), "{got}");
        assert!(got.contains("test-only"), "{got}");
    }

    #[test]
    fn predicates() {
        let error = Error::malformed_json("test-only");
        assert!(error.is_malformed_json(), "{error:?}");
        assert!(!error.is_serialization(), "{error:?}");
        let error = Error::ser("test-only");
        assert!(error.is_serialization(), "{error:?}");
        assert!(!error.is_decode(), "{error:?}");
        assert!(!error.is_transport(), "{error:?}");
    }
}
