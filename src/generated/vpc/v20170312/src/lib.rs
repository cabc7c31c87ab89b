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

//! Tencent Cloud Client Libraries for Rust - Virtual Private Cloud API
//!
//! This crate contains the request, response, and nested messages of the
//! VPC API, version `2017-03-12`. Every request message implements
//! [Request][gax::request::Request], so it can be encoded, strictly decoded,
//! and prepared for a transport with the functions in `tencentcloud-gax`.
//!
//! Decoding a request rejects any top-level member the operation does not
//! recognize:
//!
//! ```
//! # use tencentcloud_vpc_v20170312::model::AttachCcnInstancesRequest;
//! use gax::codec;
//! let request = codec::decode_request::<AttachCcnInstancesRequest>(
//!     r#"{"CcnId": "ccn-1", "Instances": []}"#)?;
//! assert_eq!(request.ccn_id.as_deref(), Some("ccn-1"));
//!
//! let err = codec::decode_request::<AttachCcnInstancesRequest>(
//!     r#"{"CcnId": "ccn-1", "Bogus": 1}"#).unwrap_err();
//! assert!(err.to_string().contains("Bogus"), "{err}");
//! # Ok::<(), gax::error::Error>(())
//! ```
//!
//! The recognized members of each operation are available at run time
//! through the [REGISTRY].

/// The product name, also the prefix of the endpoint `vpc.tencentcloudapi.com`.
pub const SERVICE: &str = "vpc";

/// The API version implemented by this crate.
pub const VERSION: &str = "2017-03-12";

/// The messages of the service.
pub mod model;

/// The error codes of the service.
pub mod errors;

mod registry;
pub use registry::{REGISTRY, recognized_request_fields, recognized_response_fields};
