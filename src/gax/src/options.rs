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

//! Client configuration.
//!
//! The client libraries have defaults that should work for most applications.
//! The [ClientConfig] type holds the values every call inherits, the
//! [CallContext][crate::call::CallContext] can override them for a single
//! call.

/// The language used by the service in error messages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Language {
    /// Simplified Chinese, the service default.
    #[default]
    ZhCn,
    /// English.
    EnUs,
}

impl Language {
    /// The value sent in the `X-TC-Language` header.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ZhCn => "zh-CN",
            Self::EnUs => "en-US",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zh-CN" => Ok(Self::ZhCn),
            "en-US" => Ok(Self::EnUs),
            _ => Err(format!("unsupported language {s}, expected zh-CN or en-US")),
        }
    }
}

/// Configure a client.
///
/// A client represents a connection to a Tencent Cloud service. Each service
/// has one or more client types. The default configuration for each client
/// should work for most applications. But some applications may need to
/// target a specific region, or request error messages in English.
///
/// # Example
/// ```
/// # use tencentcloud_gax::options::{ClientConfig, Language};
/// let config = ClientConfig::new()
///     .set_region("ap-guangzhou")
///     .set_language(Language::EnUs);
/// assert_eq!(config.region(), Some("ap-guangzhou"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientConfig {
    pub(crate) region: Option<String>,
    pub(crate) language: Option<Language>,
    pub(crate) user_agent: Option<String>,
    pub(crate) endpoint: Option<String>,
}

impl ClientConfig {
    /// Returns a default [ClientConfig].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the region, e.g. `ap-guangzhou`.
    ///
    /// Some operations, such as `DescribeRegions`, do not need a region.
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = Some(v.into());
        self
    }

    /// Sets the language for error messages.
    pub fn set_language(mut self, v: Language) -> Self {
        self.language = Some(v);
        self
    }

    /// Sets a prefix for the `User-Agent` header.
    pub fn set_user_agent<T: Into<String>>(mut self, v: T) -> Self {
        self.user_agent = Some(v.into());
        self
    }

    /// Overrides the host name of the service.
    ///
    /// The default is `{service}.tencentcloudapi.com`. Use this to target a
    /// regional endpoint, such as `vpc.ap-guangzhou.tencentcloudapi.com`, or
    /// a test server.
    pub fn set_endpoint<T: Into<String>>(mut self, v: T) -> Self {
        self.endpoint = Some(v.into());
        self
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn language(&self) -> Option<Language> {
        self.language
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn defaults() {
        let config = ClientConfig::new();
        assert_eq!(config.region(), None);
        assert_eq!(config.language(), None);
        assert_eq!(config.user_agent(), None);
        assert_eq!(config.endpoint(), None);
        assert_eq!(Language::default(), Language::ZhCn);
    }

    #[test]
    fn setters() {
        let config = ClientConfig::new()
            .set_region("ap-shanghai")
            .set_language(Language::EnUs)
            .set_user_agent("my-app/1.0")
            .set_endpoint("vpc.ap-shanghai.tencentcloudapi.com");
        assert_eq!(config.region(), Some("ap-shanghai"));
        assert_eq!(config.language(), Some(Language::EnUs));
        assert_eq!(config.user_agent(), Some("my-app/1.0"));
        assert_eq!(config.endpoint(), Some("vpc.ap-shanghai.tencentcloudapi.com"));
    }

    #[test_case(Language::ZhCn, "zh-CN")]
    #[test_case(Language::EnUs, "en-US")]
    fn language(input: Language, want: &str) -> anyhow::Result<()> {
        assert_eq!(input.as_str(), want);
        assert_eq!(input.to_string(), want);
        assert_eq!(want.parse::<Language>().map_err(anyhow::Error::msg)?, input);
        Ok(())
    }

    #[test]
    fn language_parse_error() {
        let err = "en".parse::<Language>().unwrap_err();
        assert!(err.contains("en"), "{err}");
    }
}
