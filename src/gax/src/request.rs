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

use wkt::message::Message;

/// A trait implemented by the request message of each operation.
///
/// The request message names its operation, and the response message the
/// operation returns. The set of keys recognized when decoding a request from
/// JSON text is [Message::fields].
///
/// # Example
/// ```
/// # use tencentcloud_gax::request::Request;
/// # use wkt::message::Message;
/// #[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
/// #[serde(default)]
/// struct DeleteVpcRequest {
///     #[serde(rename = "VpcId", skip_serializing_if = "Option::is_none")]
///     vpc_id: Option<String>,
/// }
/// # #[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
/// # struct DeleteVpcResponse {}
/// # impl Message for DeleteVpcRequest { fn typename() -> &'static str { "vpc.DeleteVpcRequest" } }
/// # impl Message for DeleteVpcResponse { fn typename() -> &'static str { "vpc.DeleteVpcResponse" } }
/// impl Request for DeleteVpcRequest {
///     type Response = DeleteVpcResponse;
///     const SERVICE: &'static str = "vpc";
///     const VERSION: &'static str = "2017-03-12";
///     const ACTION: &'static str = "DeleteVpc";
/// }
/// assert_eq!(DeleteVpcRequest::fields(), &["VpcId"]);
/// ```
pub trait Request: Message {
    /// The response message returned by this operation.
    type Response: Message;

    /// The product, e.g. `vpc`.
    const SERVICE: &'static str;

    /// The API version, e.g. `2017-03-12`.
    const VERSION: &'static str;

    /// The operation name, e.g. `CreateVpc`.
    const ACTION: &'static str;
}
