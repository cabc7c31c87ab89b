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

//! A deserializer over [serde_json::Value] that records where errors happen.
//!
//! `serde_json` reports the line and column of a type mismatch. Callers want
//! the member path instead, e.g. `Instances[0].InstanceId`. The deserializer
//! walks the tree keeping a stack-allocated [Path], and decorates errors as
//! they bubble up.

use crate::error::DecodeError;
use serde::de::{
    DeserializeOwned, DeserializeSeed, Deserializer, Error as _, IntoDeserializer, MapAccess,
    SeqAccess, Visitor,
};
use serde_json::Value;

/// The location of a value within a JSON document.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Path<'a> {
    Root,
    Field(&'a Path<'a>, &'a str),
    Index(&'a Path<'a>, usize),
}

impl std::fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Path::Root => Ok(()),
            Path::Field(Path::Root, name) => write!(f, "{name}"),
            Path::Field(parent, name) => write!(f, "{parent}.{name}"),
            Path::Index(parent, index) => write!(f, "{parent}[{index}]"),
        }
    }
}

/// Decodes `T` from `value`, reporting errors relative to `path`.
pub(crate) fn from_value<T>(value: &Value, path: Path<'_>) -> Result<T, DecodeError>
where
    T: DeserializeOwned,
{
    T::deserialize(ValueDeserializer { value, path })
}

struct ValueDeserializer<'a> {
    value: &'a Value,
    path: Path<'a>,
}

impl<'de> Deserializer<'de> for ValueDeserializer<'_> {
    type Error = DecodeError;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        let ValueDeserializer { value, path } = self;
        let result = match value {
            Value::Null => visitor.visit_unit(),
            Value::Bool(v) => visitor.visit_bool(*v),
            Value::Number(n) => {
                if let Some(v) = n.as_u64() {
                    visitor.visit_u64(v)
                } else if let Some(v) = n.as_i64() {
                    visitor.visit_i64(v)
                } else if let Some(v) = n.as_f64() {
                    visitor.visit_f64(v)
                } else {
                    Err(DecodeError::custom(format!("unsupported number {n}")))
                }
            }
            Value::String(s) => visitor.visit_str(s),
            Value::Array(items) => visitor.visit_seq(SeqDeserializer {
                iter: items.iter().enumerate(),
                parent: &path,
            }),
            Value::Object(map) => visitor.visit_map(MapDeserializer {
                iter: map.iter(),
                value: None,
                parent: &path,
            }),
        };
        result.map_err(|e| e.locate(&path))
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_newtype_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        // Enumerations are sent as strings.
        match self.value {
            Value::String(s) => visitor
                .visit_enum(s.as_str().into_deserializer())
                .map_err(|e: DecodeError| e.locate(&self.path)),
            _ => self.deserialize_any(visitor),
        }
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier
    }
}

struct SeqDeserializer<'a> {
    iter: std::iter::Enumerate<std::slice::Iter<'a, Value>>,
    parent: &'a Path<'a>,
}

impl<'de> SeqAccess<'de> for SeqDeserializer<'_> {
    type Error = DecodeError;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>, Self::Error>
    where
        T: DeserializeSeed<'de>,
    {
        match self.iter.next() {
            None => Ok(None),
            Some((index, value)) => seed
                .deserialize(ValueDeserializer {
                    value,
                    path: Path::Index(self.parent, index),
                })
                .map(Some),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct MapDeserializer<'a> {
    iter: serde_json::map::Iter<'a>,
    value: Option<(&'a str, &'a Value)>,
    parent: &'a Path<'a>,
}

impl<'de> MapAccess<'de> for MapDeserializer<'_> {
    type Error = DecodeError;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>, Self::Error>
    where
        K: DeserializeSeed<'de>,
    {
        match self.iter.next() {
            None => Ok(None),
            Some((key, value)) => {
                self.value = Some((key.as_str(), value));
                seed.deserialize(key.as_str().into_deserializer()).map(Some)
            }
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value, Self::Error>
    where
        V: DeserializeSeed<'de>,
    {
        let (key, value) = self
            .value
            .take()
            .ok_or_else(|| DecodeError::custom("value requested before its key"))?;
        seed.deserialize(ValueDeserializer {
            value,
            path: Path::Field(self.parent, key),
        })
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::HashMap;

    #[derive(Debug, Default, PartialEq, serde::Deserialize)]
    #[serde(default)]
    struct Instance {
        #[serde(rename = "InstanceId")]
        instance_id: Option<String>,
        #[serde(rename = "Count")]
        count: Option<i64>,
    }

    #[derive(Debug, Default, PartialEq, serde::Deserialize)]
    #[serde(default)]
    struct Outer {
        #[serde(rename = "Name")]
        name: Option<String>,
        #[serde(rename = "Instances")]
        instances: Option<Vec<Instance>>,
        #[serde(rename = "Total")]
        total: Option<u64>,
        #[serde(rename = "Ratio")]
        ratio: Option<f64>,
        #[serde(rename = "Enabled")]
        enabled: Option<bool>,
    }

    #[derive(Debug, PartialEq, serde::Deserialize)]
    enum Kind {
        #[serde(rename = "VPC")]
        Vpc,
        #[serde(rename = "CCN")]
        Ccn,
    }

    #[test]
    fn path_display() {
        let root = Path::Root;
        let response = Path::Field(&root, "Response");
        let set = Path::Field(&response, "AddressSet");
        let item = Path::Index(&set, 1);
        assert_eq!(root.to_string(), "");
        assert_eq!(response.to_string(), "Response");
        assert_eq!(item.to_string(), "Response.AddressSet[1]");
        let top = Path::Index(&root, 3);
        assert_eq!(top.to_string(), "[3]");
    }

    #[test]
    fn decode_success() -> anyhow::Result<()> {
        let input = json!({
            "Name": "test",
            "Instances": [{"InstanceId": "vpc-1", "Count": -2}, {}],
            "Total": 18446744073709551615_u64,
            "Ratio": 2,
            "Enabled": true,
            "Ignored": {"Nested": [1, 2, 3]},
        });
        let got = from_value::<Outer>(&input, Path::Root)?;
        let want = Outer {
            name: Some("test".into()),
            instances: Some(vec![
                Instance {
                    instance_id: Some("vpc-1".into()),
                    count: Some(-2),
                },
                Instance::default(),
            ]),
            total: Some(u64::MAX),
            ratio: Some(2.0),
            enabled: Some(true),
        };
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn null_is_unset() -> anyhow::Result<()> {
        let input = json!({"Name": null, "Instances": null});
        let got = from_value::<Outer>(&input, Path::Root)?;
        assert_eq!(got, Outer::default());
        Ok(())
    }

    #[test]
    fn nested_error_path() {
        let input = json!({"Instances": [{"InstanceId": "ok"}, {"InstanceId": 5}]});
        let err = from_value::<Outer>(&input, Path::Root).unwrap_err();
        assert_eq!(err.path(), Some("Instances[1].InstanceId"), "{err}");
        assert!(err.message().contains("expected a string"), "{err}");
    }

    #[test]
    fn error_path_relative_to_root() {
        let root = Path::Root;
        let response = Path::Field(&root, "Response");
        let input = json!({"Total": "many"});
        let err = from_value::<Outer>(&input, response).unwrap_err();
        assert_eq!(err.path(), Some("Response.Total"), "{err}");
    }

    #[test]
    fn top_level_error_has_no_path() {
        let err = from_value::<Outer>(&json!("text"), Path::Root).unwrap_err();
        assert_eq!(err.path(), None, "{err}");
        let err = from_value::<Outer>(&json!(null), Path::Root).unwrap_err();
        assert_eq!(err.path(), None, "{err}");
    }

    #[test]
    fn integer_range() {
        let err = from_value::<Outer>(&json!({"Total": -1}), Path::Root).unwrap_err();
        assert_eq!(err.path(), Some("Total"), "{err}");
        let err = from_value::<Instance>(&json!({"Count": 9223372036854775808_u64}), Path::Root)
            .unwrap_err();
        assert_eq!(err.path(), Some("Count"), "{err}");
        let err = from_value::<Instance>(&json!({"Count": 1.5}), Path::Root).unwrap_err();
        assert_eq!(err.path(), Some("Count"), "{err}");
    }

    #[test]
    fn null_in_array() {
        let input = json!({"Instances": [{}, null]});
        let err = from_value::<Outer>(&input, Path::Root).unwrap_err();
        assert_eq!(err.path(), Some("Instances[1]"), "{err}");
    }

    #[test]
    fn enums() -> anyhow::Result<()> {
        let got = from_value::<Vec<Kind>>(&json!(["VPC", "CCN"]), Path::Root)?;
        assert_eq!(got, vec![Kind::Vpc, Kind::Ccn]);
        let err = from_value::<Vec<Kind>>(&json!(["VPC", "BAD"]), Path::Root).unwrap_err();
        assert_eq!(err.path(), Some("[1]"), "{err}");
        Ok(())
    }

    #[test]
    fn maps() -> anyhow::Result<()> {
        let got = from_value::<HashMap<String, i32>>(&json!({"a": 1, "b": 2}), Path::Root)?;
        assert_eq!(got, HashMap::from([("a".to_string(), 1), ("b".to_string(), 2)]));
        Ok(())
    }
}
