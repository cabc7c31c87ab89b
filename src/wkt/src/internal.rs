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

//! Implementation details used by the generated code.
//!
//! These types are intended for developers of the Tencent Cloud client
//! libraries for Rust. They are undocumented and may change at any time.

/// Serializes `f64` values that must be finite.
///
/// `serde_json` writes `NaN` and the infinities as `null`, which the services
/// would read as "unset". We refuse to serialize them instead.
pub struct F64;

impl serde_with::SerializeAs<f64> for F64 {
    fn serialize_as<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        match value {
            x if x.is_finite() => serializer.serialize_f64(*x),
            x => Err(serde::ser::Error::custom(format!(
                "{x} cannot be represented as a JSON number"
            ))),
        }
    }
}

impl<'de> serde_with::DeserializeAs<'de, f64> for F64 {
    fn deserialize_as<D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        <f64 as serde::de::Deserialize>::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_with::{DeserializeAs, SerializeAs};
    use test_case::test_case;
    type Result = anyhow::Result<()>;

    #[test_case(9876.5)]
    #[test_case(0.0)]
    #[test_case(-1.25)]
    #[test_case(f64::MAX)]
    fn roundtrip(input: f64) -> Result {
        let got = F64::serialize_as(&input, serde_json::value::Serializer)?;
        assert_eq!(got, serde_json::json!(input));
        let rt = F64::deserialize_as(got)?;
        assert_eq!(input, rt);
        Ok(())
    }

    #[test_case(f64::NAN)]
    #[test_case(f64::INFINITY)]
    #[test_case(f64::NEG_INFINITY)]
    fn non_finite(input: f64) {
        let got = F64::serialize_as(&input, serde_json::value::Serializer);
        let err = got.unwrap_err();
        assert!(err.to_string().contains("JSON number"), "{err}");
    }

    #[test]
    fn deserialize_expect_err() {
        assert!(F64::deserialize_as(serde_json::json!("NaN")).is_err());
        assert!(F64::deserialize_as(serde_json::Value::Bool(false)).is_err());
    }
}
