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

use super::codes::CLIENT_BUILD_REQUEST_ERROR;

/// The request text was rejected before any typed decoding.
///
/// Requests decoded from JSON text must be objects, and every top-level key
/// must be a member recognized by the operation. Keys are compared exactly,
/// so `vpcid` is unknown for an operation that recognizes `VpcId`.
///
/// # Example
/// ```
/// # use tencentcloud_gax::error::StrictDecodeError;
/// let e = StrictDecodeError::unknown_key("AttachCcnInstances", "Bogus");
/// assert_eq!(e.operation(), "AttachCcnInstances");
/// assert_eq!(e.key(), Some("Bogus"));
/// assert_eq!(e.code(), "ClientError.BuildRequestError");
/// ```
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum StrictDecodeError {
    /// A top-level key is not recognized by the operation.
    #[error("{operation}Request has unknown key `{key}`")]
    UnknownKey { operation: String, key: String },

    /// The top-level JSON value is not an object.
    #[error("{operation}Request: expected object, found {found}")]
    ExpectedObject {
        operation: String,
        found: &'static str,
    },

    /// The operation is not in the registry.
    #[error("unknown operation `{operation}`")]
    UnknownOperation { operation: String },
}

impl StrictDecodeError {
    pub fn unknown_key<O: Into<String>, K: Into<String>>(operation: O, key: K) -> Self {
        Self::UnknownKey {
            operation: operation.into(),
            key: key.into(),
        }
    }

    pub fn expected_object<O: Into<String>>(operation: O, found: &'static str) -> Self {
        Self::ExpectedObject {
            operation: operation.into(),
            found,
        }
    }

    pub fn unknown_operation<O: Into<String>>(operation: O) -> Self {
        Self::UnknownOperation {
            operation: operation.into(),
        }
    }

    /// The operation whose request was being decoded.
    pub fn operation(&self) -> &str {
        match self {
            Self::UnknownKey { operation, .. }
            | Self::ExpectedObject { operation, .. }
            | Self::UnknownOperation { operation } => operation,
        }
    }

    /// The offending key, if the problem is an unknown key.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::UnknownKey { key, .. } => Some(key),
            _ => None,
        }
    }

    /// The error code used by Tencent Cloud SDKs for this problem.
    pub fn code(&self) -> &'static str {
        CLIENT_BUILD_REQUEST_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn unknown_key() {
        let e = StrictDecodeError::unknown_key("AttachCcnInstances", "Bogus");
        let got = e.to_string();
        assert!(got.contains("AttachCcnInstances"), "{got}");
        assert!(got.contains("Bogus"), "{got}");
        assert_eq!(e.key(), Some("Bogus"));
    }

    #[test]
    fn expected_object() {
        let e = StrictDecodeError::expected_object("CreateVpc", "array");
        let got = e.to_string();
        assert!(got.contains("expected object"), "{got}");
        assert!(got.contains("array"), "{got}");
        assert_eq!(e.key(), None);
    }

    #[test_case(StrictDecodeError::unknown_key("A", "k"), "A")]
    #[test_case(StrictDecodeError::expected_object("B", "null"), "B")]
    #[test_case(StrictDecodeError::unknown_operation("C"), "C")]
    fn operation_and_code(e: StrictDecodeError, want: &str) {
        assert_eq!(e.operation(), want);
        assert_eq!(e.code(), "ClientError.BuildRequestError");
    }
}
