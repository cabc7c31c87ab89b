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

use http::HeaderMap;

/// An error returned by a Tencent Cloud service.
///
/// Failed calls return a response envelope with an `Error` object:
///
/// ```json
/// {"Response": {"Error": {"Code": "ResourceNotFound", "Message": "..."}, "RequestId": "..."}}
/// ```
///
/// Depending on how the error is received, the error may have a HTTP status
/// code and a number of headers associated with it.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ServiceError {
    code: String,
    message: String,
    request_id: Option<String>,
    http_status_code: Option<u16>,
    headers: Option<HeaderMap>,
}

impl ServiceError {
    /// Creates a new error with the given code and message.
    pub fn new<C: Into<String>, M: Into<String>>(code: C, message: M) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            ..Default::default()
        }
    }

    /// The error code, e.g. `InvalidParameterValue.Malformed`.
    ///
    /// Codes are dot-separated, the first component is one of the common codes
    /// in [codes][crate::error::codes].
    pub fn code(&self) -> &str {
        &self.code
    }

    /// A human-readable description of the problem.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The identifier of the failed call.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// The status code, if any, associated with this error.
    ///
    /// Errors decoded from a response body without the HTTP exchange, e.g.
    /// with [decode_response][crate::codec::decode_response], have no status
    /// code.
    pub fn http_status_code(&self) -> Option<u16> {
        self.http_status_code
    }

    pub fn headers(&self) -> Option<&HeaderMap> {
        self.headers.as_ref()
    }

    /// Sets the request id.
    pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.request_id = Some(v.into());
        self
    }

    /// Sets or clears the request id.
    pub fn set_or_clear_request_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.request_id = v.map(|x| x.into());
        self
    }

    /// Sets the HTTP status code for this service error.
    pub fn set_http_status_code<T: Into<u16>>(mut self, v: T) -> Self {
        self.http_status_code = Some(v.into());
        self
    }

    /// Sets the headers for this error.
    pub fn set_headers<T: Into<HeaderMap>>(mut self, v: T) -> Self {
        self.headers = Some(v.into());
        self
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "the service returned an error: code={}, message={}",
            self.code, self.message
        )?;
        if let Some(id) = &self.request_id {
            write!(f, ", request_id={id}")?;
        }
        if let Some(c) = &self.http_status_code {
            write!(f, ", http_status_code={c}")?;
        }
        if let Some(h) = &self.headers {
            write!(f, ", headers=[")?;
            for (i, (k, v)) in h.iter().enumerate() {
                if i != 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}: {}", v.to_str().unwrap_or("[error]"))?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

impl std::error::Error for ServiceError {}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn accessors() {
        let e = ServiceError::new("LimitExceeded.Vpc", "too many VPCs");
        assert_eq!(e.code(), "LimitExceeded.Vpc");
        assert_eq!(e.message(), "too many VPCs");
        assert_eq!(e.request_id(), None);
        assert_eq!(e.http_status_code(), None);
        assert_eq!(e.headers(), None);

        let e = e.set_request_id("req-1").set_or_clear_request_id(None::<String>);
        assert_eq!(e.request_id(), None);
    }

    #[test]
    fn display() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        headers.insert("x-tc-requestid", HeaderValue::from_static("req-1"));
        let e = ServiceError::new("InternalError", "oops")
            .set_request_id("req-1")
            .set_http_status_code(500_u16)
            .set_headers(headers);
        let got = e.to_string();
        assert!(got.contains("code=InternalError"), "{got}");
        assert!(got.contains("message=oops"), "{got}");
        assert!(got.contains("request_id=req-1"), "{got}");
        assert!(got.contains("http_status_code=500"), "{got}");
        assert!(got.contains("content-type: application/json"), "{got}");
        assert!(got.contains("x-tc-requestid: req-1"), "{got}");
    }
}
