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

use crate::message::Message;

/// A resource tag, a key-value pair attached to a resource.
///
/// # Example
/// ```
/// # use tencentcloud_wkt::Tag;
/// let tag = Tag::new().set_key("env").set_value("prod");
/// assert_eq!(tag.key.as_deref(), Some("env"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Tag {
    /// The tag key.
    #[serde(rename = "Key", skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// The tag value.
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Tag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [key][Tag::key].
    pub fn set_key<T: Into<String>>(mut self, v: T) -> Self {
        self.key = Some(v.into());
        self
    }

    /// Sets or clears the value of [key][Tag::key].
    pub fn set_or_clear_key<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.key = v.map(|x| x.into());
        self
    }

    /// Sets the value of [value][Tag::value].
    pub fn set_value<T: Into<String>>(mut self, v: T) -> Self {
        self.value = Some(v.into());
        self
    }

    /// Sets or clears the value of [value][Tag::value].
    pub fn set_or_clear_value<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.value = v.map(|x| x.into());
        self
    }
}

impl Message for Tag {
    fn typename() -> &'static str {
        "tencentcloud.Tag"
    }
}

/// A filter used in `Describe*` queries.
///
/// Within one filter the values are combined with `OR`. Multiple filters in the
/// same request are combined with `AND`.
///
/// # Example
/// ```
/// # use tencentcloud_wkt::Filter;
/// let filter = Filter::new().set_name("vpc-id").set_values(["vpc-1", "vpc-2"]);
/// assert_eq!(filter.values.as_ref().map(Vec::len), Some(2));
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Filter {
    /// The name of the attribute to filter on.
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The accepted values.
    #[serde(rename = "Values", skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Filter::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][Filter::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [values][Filter::values].
    pub fn set_values<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.values = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [values][Filter::values].
    pub fn set_or_clear_values<T, V>(mut self, v: Option<T>) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.values = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl Message for Filter {
    fn typename() -> &'static str {
        "tencentcloud.Filter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn tag_to_json() -> anyhow::Result<()> {
        let got = serde_json::to_value(Tag::new().set_key("env"))?;
        assert_eq!(got, json!({"Key": "env"}));
        let got = serde_json::to_value(Tag::new())?;
        assert_eq!(got, json!({}));
        Ok(())
    }

    #[test]
    fn tag_ignores_unknown() -> anyhow::Result<()> {
        let input = json!({"Key": "env", "Value": "prod", "UnknownNested": "ok"});
        let got = serde_json::from_value::<Tag>(input)?;
        assert_eq!(got, Tag::new().set_key("env").set_value("prod"));
        Ok(())
    }

    #[test]
    fn filter_preserves_order() -> anyhow::Result<()> {
        let input = json!({"Name": "vpc-id", "Values": ["b", "a", "c"]});
        let got = serde_json::from_value::<Filter>(input.clone())?;
        assert_eq!(got.values, Some(vec!["b".into(), "a".into(), "c".into()]));
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn clear() {
        let tag = Tag::new()
            .set_key("env")
            .set_or_clear_key(None::<String>);
        assert_eq!(tag, Tag::new());
        let filter = Filter::new()
            .set_values(["a"])
            .set_or_clear_values(None::<Vec<String>>);
        assert_eq!(filter, Filter::new());
    }

    #[test]
    fn fields() {
        assert_eq!(Tag::fields(), &["Key", "Value"]);
        assert_eq!(Filter::fields(), &["Name", "Values"]);
    }
}
