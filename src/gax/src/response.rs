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

//! Response types.
//!
//! This module contains types related to Tencent Cloud service responses.
//! Notably it contains the `Response` type itself. Typically you'll import
//! this type.
//!
//! # Examples
//!
//! Creating a response for mocks
//!
//! ```
//! # use tencentcloud_gax::Result;
//! # use tencentcloud_gax::response::{Parts, Response};
//! // A type representing a Tencent Cloud service response payload.
//! struct Vpc {
//!   // ...
//! }
//!
//! fn make_mock_response(body: Vpc) -> Result<Response<Vpc>> {
//!     let parts = Parts::new().set_request_id("req-123");
//!     Ok(Response::from_parts(parts, body))
//! }
//! # let response = make_mock_response(Vpc {})?;
//! # assert_eq!(response.request_id(), Some("req-123"));
//! # Result::<()>::Ok(())
//! ```

/// Represents a Tencent Cloud service response.
///
/// A response consists of a body, the decoded payload of the response
/// envelope, and some metadata: the HTTP headers and the request id.
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response from the body, with empty metadata.
    pub fn from(body: T) -> Self {
        Self {
            body,
            parts: Parts::default(),
        }
    }

    /// Creates a response from the given parts.
    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    /// Returns the headers associated with this response.
    pub fn headers(&self) -> &http::HeaderMap<http::HeaderValue> {
        &self.parts.headers
    }

    /// The id assigned by the service to this call.
    ///
    /// Include this value when contacting Tencent Cloud support.
    pub fn request_id(&self) -> Option<&str> {
        self.parts.request_id.as_deref()
    }

    /// Returns the body associated with this response.
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Returns the body and metadata associated with this response.
    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }

    /// Returns the body associated with this response.
    pub fn into_body(self) -> T {
        self.body
    }
}

/// Component parts of a response.
///
/// The response parts, excluding the body, consist of the HTTP headers and
/// the request id.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Parts {
    /// The HTTP headers of the response.
    pub headers: http::HeaderMap<http::HeaderValue>,

    /// The `RequestId` found in the response envelope.
    pub request_id: Option<String>,
}

impl Parts {
    /// Create a new instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the headers.
    pub fn set_headers<V>(mut self, v: V) -> Self
    where
        V: Into<http::HeaderMap>,
    {
        self.headers = v.into();
        self
    }

    /// Set the request id.
    pub fn set_request_id<V: Into<String>>(mut self, v: V) -> Self {
        self.request_id = Some(v.into());
        self
    }

    /// Set or clear the request id.
    pub fn set_or_clear_request_id<V: Into<String>>(mut self, v: Option<V>) -> Self {
        self.request_id = v.map(|x| x.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderMap, HeaderValue};

    #[test]
    fn response_from() {
        let response = Response::from("abc123".to_string());
        assert!(response.headers().is_empty());
        assert_eq!(response.request_id(), None);
        assert_eq!(response.body().as_str(), "abc123");
        let body = response.into_body();
        assert_eq!(body.as_str(), "abc123");
    }

    #[test]
    fn response_from_parts() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        let parts = Parts::new()
            .set_headers(headers.clone())
            .set_request_id("req-1");
        let response = Response::from_parts(parts.clone(), "abc123".to_string());
        assert_eq!(response.headers(), &headers);
        assert_eq!(response.request_id(), Some("req-1"));
        let (got_parts, body) = response.into_parts();
        assert_eq!(got_parts, parts);
        assert_eq!(body.as_str(), "abc123");
    }

    #[test]
    fn parts() {
        let parts = Parts::new()
            .set_request_id("req-1")
            .set_or_clear_request_id(None::<String>);
        assert_eq!(parts, Parts::default());
    }
}
