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

//! Each service publishes a [Registry] with one [OperationDescriptor] per
//! operation. The descriptors are derived from the request and response
//! messages, so the recognized member names cannot drift from what the
//! codec accepts and emits.

use crate::Result;
use crate::codec;
use crate::error::{Error, StrictDecodeError};
use crate::request::Request;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use wkt::message::Message;

/// Describes one operation of a service.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct OperationDescriptor {
    /// The product, e.g. `vpc`.
    pub service: &'static str,
    /// The API version, e.g. `2017-03-12`.
    pub version: &'static str,
    /// The operation name, e.g. `CreateVpc`.
    pub action: &'static str,
    /// The typename of the request message.
    pub request_typename: &'static str,
    /// The typename of the response message.
    pub response_typename: &'static str,
    /// The top-level member names recognized in requests, in declaration order.
    pub request_fields: &'static [&'static str],
    /// The top-level member names of the response payload, in declaration order.
    pub response_fields: &'static [&'static str],
}

impl OperationDescriptor {
    /// Creates the descriptor for the operation of `R`.
    pub fn of<R: Request>() -> Self {
        Self {
            service: R::SERVICE,
            version: R::VERSION,
            action: R::ACTION,
            request_typename: R::typename(),
            response_typename: R::Response::typename(),
            request_fields: R::fields(),
            response_fields: R::Response::fields(),
        }
    }

    /// Returns true if `name` is a recognized request member.
    ///
    /// The comparison is exact, `vpcid` does not match `VpcId`.
    pub fn recognizes(&self, name: &str) -> bool {
        self.request_fields.contains(&name)
    }
}

/// The operations of a service, indexed by name.
///
/// # Example
/// ```
/// # use tencentcloud_gax::registry::Registry;
/// # use tencentcloud_gax::request::Request;
/// # use wkt::message::Message;
/// # #[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
/// # #[serde(default)]
/// # struct DeleteVpcRequest {
/// #     #[serde(rename = "VpcId", skip_serializing_if = "Option::is_none")]
/// #     vpc_id: Option<String>,
/// # }
/// # #[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
/// # #[serde(default)]
/// # struct DeleteVpcResponse {
/// #     #[serde(rename = "RequestId", skip_serializing_if = "Option::is_none")]
/// #     request_id: Option<String>,
/// # }
/// # impl Message for DeleteVpcRequest { fn typename() -> &'static str { "vpc.DeleteVpcRequest" } }
/// # impl Message for DeleteVpcResponse { fn typename() -> &'static str { "vpc.DeleteVpcResponse" } }
/// # impl Request for DeleteVpcRequest {
/// #     type Response = DeleteVpcResponse;
/// #     const SERVICE: &'static str = "vpc";
/// #     const VERSION: &'static str = "2017-03-12";
/// #     const ACTION: &'static str = "DeleteVpc";
/// # }
/// let registry = Registry::new().register::<DeleteVpcRequest>();
/// assert_eq!(registry.recognized_request_fields("DeleteVpc"), Some(&["VpcId"][..]));
/// assert_eq!(registry.recognized_response_fields("DeleteVpc"), Some(&["RequestId"][..]));
/// assert!(registry.operation("NoSuchOperation").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Registry {
    operations: BTreeMap<&'static str, OperationDescriptor>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the operation of `R`, replacing any operation with the same name.
    pub fn register<R: Request>(mut self) -> Self {
        let descriptor = OperationDescriptor::of::<R>();
        self.operations.insert(descriptor.action, descriptor);
        self
    }

    /// Finds an operation by name.
    pub fn operation(&self, action: &str) -> Option<&OperationDescriptor> {
        self.operations.get(action)
    }

    /// The request member names recognized by `action`, or `None` if the
    /// operation is unknown.
    pub fn recognized_request_fields(&self, action: &str) -> Option<&'static [&'static str]> {
        self.operation(action).map(|d| d.request_fields)
    }

    /// The response member names of `action`, or `None` if the operation is
    /// unknown.
    pub fn recognized_response_fields(&self, action: &str) -> Option<&'static [&'static str]> {
        self.operation(action).map(|d| d.response_fields)
    }

    /// Iterates over the operations, sorted by name.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDescriptor> {
        self.operations.values()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Applies the strict top-level check of `action` to untyped JSON text.
    ///
    /// This is the check performed by [codec::decode_request], for callers
    /// that only know the operation name, such as a proxy or a request
    /// recorder. On success it returns the parsed object.
    pub fn verify_request(
        &self,
        action: &str,
        input: impl AsRef<[u8]>,
    ) -> Result<Map<String, Value>> {
        let descriptor = self
            .operation(action)
            .ok_or_else(|| Error::strict_decode(StrictDecodeError::unknown_operation(action)))?;
        match codec::parse(input.as_ref())? {
            Value::Object(object) => {
                codec::check_members(descriptor.action, descriptor.request_fields, &object)
                    .map_err(Error::strict_decode)?;
                Ok(object)
            }
            other => Err(Error::strict_decode(StrictDecodeError::expected_object(
                descriptor.action,
                codec::kind(&other),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
    #[serde(default)]
    struct CreateRequest {
        #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(rename = "CidrBlock", skip_serializing_if = "Option::is_none")]
        cidr_block: Option<String>,
    }

    #[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
    #[serde(default)]
    struct CreateResponse {
        #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(rename = "RequestId", skip_serializing_if = "Option::is_none")]
        request_id: Option<String>,
    }

    #[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
    struct ListRequest {}

    impl Message for CreateRequest {
        fn typename() -> &'static str {
            "test.CreateRequest"
        }
    }
    impl Message for CreateResponse {
        fn typename() -> &'static str {
            "test.CreateResponse"
        }
    }
    impl Message for ListRequest {
        fn typename() -> &'static str {
            "test.ListRequest"
        }
    }

    impl Request for CreateRequest {
        type Response = CreateResponse;
        const SERVICE: &'static str = "test";
        const VERSION: &'static str = "2017-03-12";
        const ACTION: &'static str = "Create";
    }
    impl Request for ListRequest {
        type Response = CreateResponse;
        const SERVICE: &'static str = "test";
        const VERSION: &'static str = "2017-03-12";
        const ACTION: &'static str = "List";
    }

    fn registry() -> Registry {
        Registry::new()
            .register::<ListRequest>()
            .register::<CreateRequest>()
    }

    #[test]
    fn descriptor() {
        let got = OperationDescriptor::of::<CreateRequest>();
        assert_eq!(got.service, "test");
        assert_eq!(got.version, "2017-03-12");
        assert_eq!(got.action, "Create");
        assert_eq!(got.request_typename, "test.CreateRequest");
        assert_eq!(got.response_typename, "test.CreateResponse");
        assert_eq!(got.request_fields, &["Name", "CidrBlock"]);
        assert_eq!(got.response_fields, &["Id", "RequestId"]);
        assert!(got.recognizes("CidrBlock"));
        assert!(!got.recognizes("cidrblock"));
    }

    #[test]
    fn lookup() {
        let registry = registry();
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
        assert!(Registry::new().is_empty());
        assert_eq!(
            registry.recognized_request_fields("Create"),
            Some(&["Name", "CidrBlock"][..])
        );
        assert_eq!(registry.recognized_request_fields("List"), Some(&[][..]));
        assert_eq!(registry.recognized_request_fields("Delete"), None);
        assert_eq!(registry.recognized_response_fields("Delete"), None);
        assert_eq!(registry.operation("create"), None);
    }

    #[test]
    fn operations_sorted() {
        let got = registry()
            .operations()
            .map(|d| d.action)
            .collect::<Vec<_>>();
        assert_eq!(got, vec!["Create", "List"]);
    }

    #[test]
    fn verify_request() -> anyhow::Result<()> {
        let registry = registry();
        let got = registry.verify_request("Create", r#"{"Name": "test"}"#)?;
        assert_eq!(Value::Object(got), json!({"Name": "test"}));
        let got = registry.verify_request("List", "{}")?;
        assert!(got.is_empty(), "{got:?}");
        Ok(())
    }

    #[test]
    fn verify_request_errors() {
        let registry = registry();
        let err = registry.verify_request("List", r#"{"Name": "x"}"#).unwrap_err();
        assert_eq!(
            err.strict_decode_error().and_then(|e| e.key()),
            Some("Name"),
            "{err:?}"
        );
        let err = registry.verify_request("Create", "[]").unwrap_err();
        assert!(err.is_strict_decode(), "{err:?}");
        let err = registry.verify_request("Create", "{").unwrap_err();
        assert!(err.is_malformed_json(), "{err:?}");
        let err = registry.verify_request("Delete", "{}").unwrap_err();
        assert_eq!(
            err.strict_decode_error().map(|e| e.operation()),
            Some("Delete"),
            "{err:?}"
        );
    }
}
