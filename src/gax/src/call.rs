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

//! The request messages carry only the operation parameters. The product,
//! version, and action come from the [Request] trait, the region and language
//! come from a [CallContext]. This module combines them into a
//! [PreparedRequest] that any HTTP transport can send, and decodes the HTTP
//! response back into a typed [Response].
//!
//! Signing and sending the request are left to the transport.
//!
//! # Example
//! ```
//! # use tencentcloud_gax::call::{CallContext, decode_http_response};
//! # use tencentcloud_gax::options::ClientConfig;
//! # use tencentcloud_gax::request::Request;
//! # use wkt::message::Message;
//! # #[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
//! # #[serde(default)]
//! # struct DeleteVpcRequest {
//! #     #[serde(rename = "VpcId", skip_serializing_if = "Option::is_none")]
//! #     vpc_id: Option<String>,
//! # }
//! # #[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
//! # #[serde(default)]
//! # struct DeleteVpcResponse {
//! #     #[serde(rename = "RequestId", skip_serializing_if = "Option::is_none")]
//! #     request_id: Option<String>,
//! # }
//! # impl Message for DeleteVpcRequest { fn typename() -> &'static str { "vpc.DeleteVpcRequest" } }
//! # impl Message for DeleteVpcResponse { fn typename() -> &'static str { "vpc.DeleteVpcResponse" } }
//! # impl Request for DeleteVpcRequest {
//! #     type Response = DeleteVpcResponse;
//! #     const SERVICE: &'static str = "vpc";
//! #     const VERSION: &'static str = "2017-03-12";
//! #     const ACTION: &'static str = "DeleteVpc";
//! # }
//! let config = ClientConfig::new().set_region("ap-guangzhou");
//! let request = DeleteVpcRequest { vpc_id: Some("vpc-123".into()) };
//! let prepared = CallContext::new(&config).prepare(&request)?;
//! assert_eq!(prepared.headers.get("x-tc-action").map(|v| v.as_bytes()), Some(&b"DeleteVpc"[..]));
//!
//! // ... send `prepared` and receive a response ...
//! let body = bytes::Bytes::from_static(br#"{"Response": {"RequestId": "req-123"}}"#);
//! let response = decode_http_response::<DeleteVpcRequest>(
//!     http::StatusCode::OK, http::HeaderMap::new(), body)?;
//! assert_eq!(response.request_id(), Some("req-123"));
//! # Ok::<(), tencentcloud_gax::error::Error>(())
//! ```

use crate::Result;
use crate::codec::{self, Envelope};
use crate::error::Error;
use crate::options::{ClientConfig, Language};
use crate::request::Request;
use crate::response::{Parts, Response};
use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};

/// The header carrying the operation name.
pub const X_TC_ACTION: HeaderName = HeaderName::from_static("x-tc-action");
/// The header carrying the API version.
pub const X_TC_VERSION: HeaderName = HeaderName::from_static("x-tc-version");
/// The header carrying the region.
pub const X_TC_REGION: HeaderName = HeaderName::from_static("x-tc-region");
/// The header carrying the language for error messages.
pub const X_TC_LANGUAGE: HeaderName = HeaderName::from_static("x-tc-language");

const DEFAULT_DOMAIN: &str = "tencentcloudapi.com";
const DEFAULT_USER_AGENT: &str = concat!("tencentcloud-sdk-rust/", env!("CARGO_PKG_VERSION"));

/// The per-call settings.
///
/// A context starts with the values in a [ClientConfig] and may override them
/// for a single call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CallContext {
    region: Option<String>,
    language: Option<Language>,
    user_agent: Option<String>,
    endpoint: Option<String>,
}

impl CallContext {
    /// Creates a context with the defaults in `config`.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            region: config.region.clone(),
            language: config.language,
            user_agent: config.user_agent.clone(),
            endpoint: config.endpoint.clone(),
        }
    }

    /// Sets the region for this call.
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = Some(v.into());
        self
    }

    /// Sets or clears the region for this call.
    pub fn set_or_clear_region<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.region = v.map(|x| x.into());
        self
    }

    /// Sets the language for this call.
    pub fn set_language(mut self, v: Language) -> Self {
        self.language = Some(v);
        self
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn language(&self) -> Option<Language> {
        self.language
    }

    /// Encodes `request` and computes the headers to send it.
    ///
    /// Fails with a [serialization][Error::is_serialization] error if the
    /// request cannot be encoded, or if the endpoint, region, or user agent
    /// are not valid header values.
    pub fn prepare<R: Request>(&self, request: &R) -> Result<PreparedRequest> {
        let span = tracing::info_span!(
            "prepare",
            service = R::SERVICE,
            version = R::VERSION,
            action = R::ACTION,
            region = self.region(),
        );
        let _enter = span.enter();
        let result = self.prepare_impl(request);
        match &result {
            Ok(prepared) => tracing::debug!(body_size = prepared.body.len(), "request prepared"),
            Err(e) => tracing::warn!("cannot prepare the request: {e}"),
        }
        result
    }

    fn prepare_impl<R: Request>(&self, request: &R) -> Result<PreparedRequest> {
        let body = codec::encode_request(request)?;
        let host = match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("{}.{DEFAULT_DOMAIN}", R::SERVICE),
        };
        let headers = self.headers::<R>(&host)?;
        Ok(PreparedRequest {
            method: Method::POST,
            host,
            path: "/",
            headers,
            body,
            service: R::SERVICE,
            version: R::VERSION,
            action: R::ACTION,
        })
    }

    fn headers<R: Request>(&self, host: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(http::header::HOST, header_value(host)?);
        headers.insert(
            http::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        headers.insert(X_TC_ACTION, header_value(R::ACTION)?);
        headers.insert(X_TC_VERSION, header_value(R::VERSION)?);
        if let Some(region) = &self.region {
            headers.insert(X_TC_REGION, header_value(region)?);
        }
        if let Some(language) = self.language {
            headers.insert(X_TC_LANGUAGE, HeaderValue::from_static(language.as_str()));
        }
        let user_agent = match &self.user_agent {
            Some(prefix) => header_value(&format!("{prefix} {DEFAULT_USER_AGENT}"))?,
            None => HeaderValue::from_static(DEFAULT_USER_AGENT),
        };
        headers.insert(http::header::USER_AGENT, user_agent);
        Ok(headers)
    }
}

impl From<&ClientConfig> for CallContext {
    fn from(config: &ClientConfig) -> Self {
        Self::new(config)
    }
}

fn header_value(v: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(v).map_err(Error::ser)
}

/// An encoded request, ready to sign and send.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct PreparedRequest {
    /// Always `POST`.
    pub method: Method,
    /// The host name, also sent in the `Host` header.
    pub host: String,
    /// Always `/`, the operation is named in the headers.
    pub path: &'static str,
    pub headers: HeaderMap,
    /// The request encoded as a JSON object.
    pub body: bytes::Bytes,
    pub service: &'static str,
    pub version: &'static str,
    pub action: &'static str,
}

/// Decodes the HTTP response of the operation `R`.
///
/// A service error in the envelope is returned as an
/// [Error::service_error], including the HTTP status code and headers. A
/// failed HTTP response without an envelope is returned as a
/// [transport][Error::is_transport] error that preserves the payload.
pub fn decode_http_response<R: Request>(
    status: StatusCode,
    headers: HeaderMap,
    body: bytes::Bytes,
) -> Result<Response<R::Response>> {
    let span = tracing::info_span!(
        "decode_response",
        service = R::SERVICE,
        version = R::VERSION,
        action = R::ACTION,
        status_code = status.as_u16(),
    );
    let _enter = span.enter();
    let result = decode_http_response_impl::<R>(status, headers, body);
    match &result {
        Ok(response) => {
            tracing::debug!(request_id = response.request_id(), "response decoded")
        }
        Err(e) => tracing::warn!("the call failed: {e}"),
    }
    result
}

fn decode_http_response_impl<R: Request>(
    status: StatusCode,
    headers: HeaderMap,
    body: bytes::Bytes,
) -> Result<Response<R::Response>> {
    let value = match codec::parse(&body) {
        Ok(v) => v,
        Err(_) if !status.is_success() => {
            return Err(Error::http(status.as_u16(), headers, body));
        }
        Err(e) => return Err(e),
    };
    let envelope = match Envelope::open(&value) {
        Ok(e) => e,
        Err(_) if !status.is_success() => {
            return Err(Error::http(status.as_u16(), headers, body));
        }
        Err(e) => return Err(Error::decode(e.with_operation(R::ACTION))),
    };
    let service_error = envelope
        .service_error()
        .map_err(|e| Error::decode(e.with_operation(R::ACTION)))?;
    if let Some(details) = service_error {
        let details = details
            .set_http_status_code(status.as_u16())
            .set_headers(headers);
        return Err(Error::service(details));
    }
    if !status.is_success() {
        return Err(Error::http(status.as_u16(), headers, body));
    }
    let payload = envelope
        .decode::<R::Response>()
        .map_err(|e| Error::decode(e.with_operation(R::ACTION)))?;
    let parts = Parts::new()
        .set_headers(headers)
        .set_or_clear_request_id(envelope.request_id());
    Ok(Response::from_parts(parts, payload))
}
