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

mod core_error;
pub use core_error::*;

mod decode;
pub use decode::DecodeError;

mod strict;
pub use strict::StrictDecodeError;

/// Errors and error details returned by Tencent Cloud services.
///
/// The client libraries distinguish between errors detected while preparing
/// a request (e.g. the request has unknown keys), errors decoding a response,
/// and errors returned by the service itself.
///
/// The types in this module represent the `Error` object embedded in the
/// `Response` envelope of failed calls.
///
/// # Examples
///
/// ```
/// # use tencentcloud_gax::error;
/// use error::Error;
/// fn handle_error(e: Error) {
///     if let Some(details) = e.service_error() {
///         println!("the service reported {} with request id {:?}", details.code(), details.request_id())
///     }
/// }
/// ```
pub mod service;

/// Error codes shared by all Tencent Cloud services.
///
/// Each product defines its own catalogue on top of these. The constants are
/// matched against [service::ServiceError::code].
pub mod codes {
    /// The request could not be built, e.g. it contains unknown keys.
    pub const CLIENT_BUILD_REQUEST_ERROR: &str = "ClientError.BuildRequestError";
    /// The request was rejected by the CAM policy.
    pub const AUTH_FAILURE: &str = "AuthFailure";
    /// The operation failed.
    pub const FAILED_OPERATION: &str = "FailedOperation";
    /// An internal error in the service.
    pub const INTERNAL_ERROR: &str = "InternalError";
    /// A parameter is invalid.
    pub const INVALID_PARAMETER: &str = "InvalidParameter";
    /// The value of a parameter is invalid.
    pub const INVALID_PARAMETER_VALUE: &str = "InvalidParameterValue";
    /// A quota was exceeded.
    pub const LIMIT_EXCEEDED: &str = "LimitExceeded";
    /// A required parameter is missing.
    pub const MISSING_PARAMETER: &str = "MissingParameter";
    /// The request frequency limit was exceeded.
    pub const REQUEST_LIMIT_EXCEEDED: &str = "RequestLimitExceeded";
    /// The resource is in use.
    pub const RESOURCE_IN_USE: &str = "ResourceInUse";
    /// The resource does not exist.
    pub const RESOURCE_NOT_FOUND: &str = "ResourceNotFound";
    /// The operation is not supported.
    pub const UNSUPPORTED_OPERATION: &str = "UnsupportedOperation";
    /// The action does not exist.
    pub const INVALID_ACTION: &str = "InvalidAction";
}
