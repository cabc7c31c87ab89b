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

//! Define traits required of all messages.

use serde::de::{Deserializer, Visitor};

/// A trait that must be implemented by all messages.
///
/// Messages are the request, response, and nested shapes exchanged with
/// Tencent Cloud services. Their JSON representation is always an object, and
/// the set of member names is fixed by the (derived) serde implementation.
///
/// # Example
/// ```
/// use tencentcloud_wkt::Tag;
/// use tencentcloud_wkt::message::Message;
/// assert_eq!(Tag::fields(), &["Key", "Value"]);
/// ```
pub trait Message:
    serde::ser::Serialize + serde::de::DeserializeOwned + Default + Send + Sync
{
    /// The typename of this message.
    fn typename() -> &'static str;

    /// The wire names recognized by this message, in declaration order.
    ///
    /// The default implementation reads the names back from the
    /// `Deserialize` implementation, so they always match what the message
    /// accepts and emits.
    fn fields() -> &'static [&'static str] {
        field_names::<Self>()
    }
}

/// Returns the member names a struct-like `Deserialize` implementation
/// recognizes.
///
/// The derived implementation hands its field list to
/// [Deserializer::deserialize_struct]. We provide a deserializer that captures
/// that list and stops. Types that are not structs report no fields.
///
/// # Example
/// ```
/// use tencentcloud_wkt::message::field_names;
/// #[derive(serde::Deserialize)]
/// struct Example {
///     #[serde(rename = "VpcId")]
///     vpc_id: Option<String>,
/// }
/// assert_eq!(field_names::<Example>(), &["VpcId"]);
/// ```
pub fn field_names<T>() -> &'static [&'static str]
where
    T: serde::de::DeserializeOwned,
{
    match T::deserialize(FieldNames) {
        Err(Introspection(fields)) => fields,
        Ok(_) => &[],
    }
}

struct FieldNames;

#[derive(Debug)]
struct Introspection(&'static [&'static str]);

impl std::fmt::Display for Introspection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "captured {} field names", self.0.len())
    }
}

impl std::error::Error for Introspection {}

impl serde::de::Error for Introspection {
    fn custom<T: std::fmt::Display>(_msg: T) -> Self {
        Introspection(&[])
    }
}

impl<'de> Deserializer<'de> for FieldNames {
    type Error = Introspection;

    fn deserialize_any<V>(self, _visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        Err(Introspection(&[]))
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        _visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        Err(Introspection(fields))
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map enum identifier ignored_any
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
    #[serde(default)]
    struct TestMessage {
        #[serde(rename = "CcnId", skip_serializing_if = "Option::is_none")]
        ccn_id: Option<String>,
        #[serde(rename = "Ipv6CidrBlock", skip_serializing_if = "Option::is_none")]
        ipv6_cidr_block: Option<String>,
    }

    impl Message for TestMessage {
        fn typename() -> &'static str {
            "test.TestMessage"
        }
    }

    #[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Empty {}

    impl Message for Empty {
        fn typename() -> &'static str {
            "test.Empty"
        }
    }

    #[test]
    fn fields_in_declaration_order() {
        assert_eq!(TestMessage::fields(), &["CcnId", "Ipv6CidrBlock"]);
    }

    #[test]
    fn empty_message_has_no_fields() {
        assert!(Empty::fields().is_empty());
    }

    #[test]
    fn non_struct_types() {
        assert!(field_names::<String>().is_empty());
        assert!(field_names::<Vec<i64>>().is_empty());
        assert!(field_names::<serde_json::Value>().is_empty());
    }
}
