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

/// A recognized member has a value of the wrong type.
///
/// The error records the path to the offending value, using `.` between
/// member names and `[i]` for array positions, e.g.
/// `Response.AddressSet[1]`. Values at the top-level have no path.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodeError {
    operation: Option<String>,
    path: Option<String>,
    message: String,
}

impl DecodeError {
    /// The operation being decoded, if known.
    pub fn operation(&self) -> Option<&str> {
        self.operation.as_deref()
    }

    /// The path to the offending value, if it is not the top-level value.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// A description of the problem.
    pub fn message(&self) -> &str {
        &self.message
    }

    // Errors bubble up from the innermost value, the first path wins.
    pub(crate) fn locate<P: std::fmt::Display>(mut self, path: &P) -> Self {
        if self.path.is_none() {
            let path = path.to_string();
            if !path.is_empty() {
                self.path = Some(path);
            }
        }
        self
    }

    pub(crate) fn with_operation<O: Into<String>>(mut self, operation: O) -> Self {
        self.operation = Some(operation.into());
        self
    }
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        match &self.path {
            Some(p) => write!(f, " at `{p}`")?,
            None => write!(f, " at the top-level value")?,
        }
        if let Some(o) = &self.operation {
            write!(f, " in {o}")?;
        }
        Ok(())
    }
}

impl std::error::Error for DecodeError {}

impl serde::de::Error for DecodeError {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        Self {
            operation: None,
            path: None,
            message: msg.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::Error as _;

    #[test]
    fn display() {
        let e = DecodeError::custom("invalid type: integer `5`, expected a string");
        assert_eq!(
            e.to_string(),
            "invalid type: integer `5`, expected a string at the top-level value"
        );
        let e = e.locate(&"Instances[0].InstanceId").with_operation("AttachCcnInstances");
        assert_eq!(
            e.to_string(),
            "invalid type: integer `5`, expected a string at `Instances[0].InstanceId` in AttachCcnInstances"
        );
    }

    #[test]
    fn innermost_path_wins() {
        let e = DecodeError::custom("test-only")
            .locate(&"Response.AddressSet[1]")
            .locate(&"Response");
        assert_eq!(e.path(), Some("Response.AddressSet[1]"));
    }

    #[test]
    fn empty_path_is_top_level() {
        let e = DecodeError::custom("test-only").locate(&"");
        assert_eq!(e.path(), None);
        assert_eq!(e.operation(), None);
        assert_eq!(e.message(), "test-only");
    }
}
