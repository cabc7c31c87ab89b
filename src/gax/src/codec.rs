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

//! Requests are encoded as flat JSON objects whose members are the fields of
//! the request message. Unset fields are omitted.
//!
//! Decoding a request from text is strict: the text must be a JSON object and
//! every top-level key must be recognized by the operation. Nested objects
//! tolerate unknown members, as do responses.
//!
//! Responses are wrapped in an envelope:
//!
//! ```json
//! {"Response": {"VpcSet": [], "TotalCount": 0, "RequestId": "..."}}
//! ```
//!
//! Failed calls return an `Error` member inside the envelope, which the
//! decoder converts to a [service error][crate::error::Error::service_error].
//!
//! # Example
//! ```
//! # use tencentcloud_gax::codec;
//! # use tencentcloud_gax::request::Request;
//! # use wkt::message::Message;
//! # #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
//! # #[serde(default)]
//! # struct DeleteVpcRequest {
//! #     #[serde(rename = "VpcId", skip_serializing_if = "Option::is_none")]
//! #     vpc_id: Option<String>,
//! # }
//! # #[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
//! # struct DeleteVpcResponse {}
//! # impl Message for DeleteVpcRequest { fn typename() -> &'static str { "vpc.DeleteVpcRequest" } }
//! # impl Message for DeleteVpcResponse { fn typename() -> &'static str { "vpc.DeleteVpcResponse" } }
//! # impl Request for DeleteVpcRequest {
//! #     type Response = DeleteVpcResponse;
//! #     const SERVICE: &'static str = "vpc";
//! #     const VERSION: &'static str = "2017-03-12";
//! #     const ACTION: &'static str = "DeleteVpc";
//! # }
//! let request = codec::decode_request::<DeleteVpcRequest>(r#"{"VpcId": "vpc-123"}"#)?;
//! assert_eq!(codec::to_json_string(&request)?, r#"{"VpcId":"vpc-123"}"#);
//!
//! let err = codec::decode_request::<DeleteVpcRequest>(r#"{"VpcID": "vpc-123"}"#).unwrap_err();
//! assert!(err.is_strict_decode());
//! # Ok::<(), tencentcloud_gax::error::Error>(())
//! ```

use crate::Result;
use crate::error::service::ServiceError;
use crate::error::{DecodeError, Error, StrictDecodeError};
use crate::request::Request;
use serde::de::Error as _;
use serde_json::{Map, Value};
use wkt::message::Message;

mod de;
use de::Path;

/// The name of the envelope member holding the response payload.
pub const RESPONSE: &str = "Response";
/// The name of the response member holding the request id.
pub const REQUEST_ID: &str = "RequestId";
/// The name of the response member holding a service error.
pub const ERROR: &str = "Error";

const RESPONSE_PATH: Path<'static> = Path::Field(&Path::Root, RESPONSE);
const ERROR_PATH: Path<'static> = Path::Field(&RESPONSE_PATH, ERROR);

/// Encodes a request as the bytes of a JSON object.
///
/// Only set fields are included. Floating point fields holding `NaN` or an
/// infinity fail with a [serialization][Error::is_serialization] error.
pub fn encode_request<R: Request>(request: &R) -> Result<bytes::Bytes> {
    let value = to_object(request)?;
    serde_json::to_vec(&value)
        .map(bytes::Bytes::from)
        .map_err(Error::ser)
}

/// Encodes a request into `writer`.
///
/// Failures in the writer are reported as [serialization][Error::is_serialization]
/// errors. Nothing is written if the request cannot be encoded.
pub fn encode_request_to_writer<R, W>(request: &R, writer: W) -> Result<()>
where
    R: Request,
    W: std::io::Write,
{
    let value = to_object(request)?;
    serde_json::to_writer(writer, &value).map_err(Error::ser)
}

/// Encodes a request as JSON text.
pub fn to_json_string<R: Request>(request: &R) -> Result<String> {
    let value = to_object(request)?;
    serde_json::to_string(&value).map_err(Error::ser)
}

/// Decodes a request from JSON text, rejecting unknown top-level keys.
///
/// The input is parsed once. Then the top-level value must be an object and
/// each of its keys must be one of [Message::fields] for `R`, compared
/// exactly. Only then is the request decoded, with missing and `null` members
/// left unset.
pub fn decode_request<R: Request>(input: impl AsRef<[u8]>) -> Result<R> {
    let value = parse(input.as_ref())?;
    decode_request_value::<R>(&value)
}

/// Decodes a request from a parsed JSON value, rejecting unknown top-level keys.
pub fn decode_request_value<R: Request>(value: &Value) -> Result<R> {
    check_keys(R::ACTION, R::fields(), value).map_err(Error::strict_decode)?;
    de::from_value::<R>(value, Path::Root)
        .map_err(|e| Error::decode(e.with_operation(R::ACTION)))
}

/// Decodes the response for the operation `R` from JSON text.
///
/// The text must be a response envelope. Unknown members are ignored. If the
/// envelope contains an `Error` member the result is a
/// [service error][Error::service_error].
pub fn decode_response<R: Request>(input: impl AsRef<[u8]>) -> Result<R::Response> {
    let value = parse(input.as_ref())?;
    decode_response_value::<R>(&value)
}

/// Decodes the response for the operation `R` from a parsed JSON value.
pub fn decode_response_value<R: Request>(value: &Value) -> Result<R::Response> {
    let operation = |e: DecodeError| Error::decode(e.with_operation(R::ACTION));
    let envelope = Envelope::open(value).map_err(operation)?;
    if let Some(details) = envelope.service_error().map_err(operation)? {
        return Err(Error::service(details));
    }
    envelope.decode::<R::Response>().map_err(operation)
}

/// Encodes a response message inside its envelope.
///
/// This is useful to implement mocks and test servers.
pub fn encode_response<M: Message>(response: &M) -> Result<bytes::Bytes> {
    let payload = to_object(response)?;
    to_envelope(payload)
}

/// Encodes a service error inside a response envelope.
///
/// This is useful to implement mocks and test servers.
pub fn encode_service_error(details: &ServiceError) -> Result<bytes::Bytes> {
    let mut error = Map::new();
    error.insert("Code".to_string(), Value::from(details.code()));
    error.insert("Message".to_string(), Value::from(details.message()));
    let mut payload = Map::new();
    payload.insert(ERROR.to_string(), Value::Object(error));
    if let Some(id) = details.request_id() {
        payload.insert(REQUEST_ID.to_string(), Value::from(id));
    }
    to_envelope(Value::Object(payload))
}

fn to_envelope(payload: Value) -> Result<bytes::Bytes> {
    let mut envelope = Map::new();
    envelope.insert(RESPONSE.to_string(), payload);
    serde_json::to_vec(&Value::Object(envelope))
        .map(bytes::Bytes::from)
        .map_err(Error::ser)
}

fn to_object<M: Message>(message: &M) -> Result<Value> {
    let value = serde_json::to_value(message).map_err(Error::ser)?;
    debug_assert!(
        value
            .as_object()
            .is_some_and(|o| o.keys().all(|k| M::fields().contains(&k.as_str()))),
        "{} emitted members outside of its fields: {value}",
        M::typename()
    );
    Ok(value)
}

pub(crate) fn parse(input: &[u8]) -> Result<Value> {
    serde_json::from_slice(input).map_err(Error::malformed_json)
}

/// Verifies `value` is an object whose keys are all in `fields`.
///
/// When several keys are unknown the first one in the object's iteration
/// order is reported.
pub(crate) fn check_keys<'v>(
    operation: &str,
    fields: &[&str],
    value: &'v Value,
) -> std::result::Result<&'v Map<String, Value>, StrictDecodeError> {
    let object = value
        .as_object()
        .ok_or_else(|| StrictDecodeError::expected_object(operation, kind(value)))?;
    check_members(operation, fields, object)?;
    Ok(object)
}

pub(crate) fn check_members(
    operation: &str,
    fields: &[&str],
    object: &Map<String, Value>,
) -> std::result::Result<(), StrictDecodeError> {
    match object.keys().find(|k| !fields.contains(&k.as_str())) {
        Some(key) => Err(StrictDecodeError::unknown_key(operation, key.as_str())),
        None => Ok(()),
    }
}

pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A parsed response envelope.
pub(crate) struct Envelope<'a> {
    payload: &'a Value,
}

impl<'a> Envelope<'a> {
    pub(crate) fn open(value: &'a Value) -> std::result::Result<Self, DecodeError> {
        let object = value.as_object().ok_or_else(|| {
            DecodeError::custom(format!(
                "invalid type: {}, expected a response envelope",
                kind(value)
            ))
        })?;
        let payload = object
            .get(RESPONSE)
            .ok_or_else(|| DecodeError::missing_field(RESPONSE))?;
        Ok(Self { payload })
    }

    pub(crate) fn request_id(&self) -> Option<&'a str> {
        self.payload.get(REQUEST_ID).and_then(Value::as_str)
    }

    pub(crate) fn service_error(&self) -> std::result::Result<Option<ServiceError>, DecodeError> {
        let Some(error) = self.payload.get(ERROR).filter(|v| !v.is_null()) else {
            return Ok(None);
        };
        let body = de::from_value::<ErrorBody>(error, ERROR_PATH)?;
        let details = ServiceError::new(body.code, body.message)
            .set_or_clear_request_id(self.request_id());
        Ok(Some(details))
    }

    pub(crate) fn decode<T>(&self) -> std::result::Result<T, DecodeError>
    where
        T: serde::de::DeserializeOwned,
    {
        de::from_value(self.payload, RESPONSE_PATH)
    }
}

#[derive(Default, serde::Deserialize)]
#[serde(default)]
struct ErrorBody {
    #[serde(rename = "Code")]
    code: String,
    #[serde(rename = "Message")]
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    #[serde_with::serde_as]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default)]
    struct FakeRequest {
        #[serde(rename = "VpcId", skip_serializing_if = "Option::is_none")]
        vpc_id: Option<String>,
        #[serde(rename = "Limit", skip_serializing_if = "Option::is_none")]
        limit: Option<i64>,
        #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
        tags: Option<Vec<wkt::Tag>>,
        #[serde(rename = "Ratio", skip_serializing_if = "Option::is_none")]
        #[serde_as(as = "Option<wkt::internal::F64>")]
        ratio: Option<f64>,
    }

    impl Message for FakeRequest {
        fn typename() -> &'static str {
            "test.FakeRequest"
        }
    }

    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default)]
    struct FakeResponse {
        #[serde(rename = "AddressSet", skip_serializing_if = "Option::is_none")]
        address_set: Option<Vec<String>>,
        #[serde(rename = "RequestId", skip_serializing_if = "Option::is_none")]
        request_id: Option<String>,
    }

    impl Message for FakeResponse {
        fn typename() -> &'static str {
            "test.FakeResponse"
        }
    }

    impl Request for FakeRequest {
        type Response = FakeResponse;
        const SERVICE: &'static str = "test";
        const VERSION: &'static str = "2017-03-12";
        const ACTION: &'static str = "Fake";
    }

    #[test]
    fn encode_only_set_fields() -> TestResult {
        let request = FakeRequest {
            vpc_id: Some("vpc-1".into()),
            ..Default::default()
        };
        let got = encode_request(&request)?;
        assert_eq!(serde_json::from_slice::<Value>(&got)?, json!({"VpcId": "vpc-1"}));
        assert_eq!(to_json_string(&FakeRequest::default())?, "{}");
        Ok(())
    }

    #[test]
    fn encode_to_writer() -> TestResult {
        let request = FakeRequest {
            limit: Some(20),
            ..Default::default()
        };
        let mut buffer = Vec::new();
        encode_request_to_writer(&request, &mut buffer)?;
        assert_eq!(serde_json::from_slice::<Value>(&buffer)?, json!({"Limit": 20}));
        Ok(())
    }

    struct FailingWriter;
    impl std::io::Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("test-only"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn encode_writer_error() {
        let err = encode_request_to_writer(&FakeRequest::default(), FailingWriter).unwrap_err();
        assert!(err.is_serialization(), "{err:?}");
    }

    #[test_case(f64::NAN)]
    #[test_case(f64::INFINITY)]
    #[test_case(f64::NEG_INFINITY)]
    fn encode_non_finite(input: f64) {
        let request = FakeRequest {
            ratio: Some(input),
            ..Default::default()
        };
        let err = encode_request(&request).unwrap_err();
        assert!(err.is_serialization(), "{err:?}");
        let err = to_json_string(&request).unwrap_err();
        assert!(err.is_serialization(), "{err:?}");
    }

    #[test]
    fn decode_roundtrip() -> TestResult {
        let input = json!({
            "VpcId": "vpc-1",
            "Limit": -5,
            "Tags": [{"Key": "k", "Value": "v"}],
            "Ratio": 0.5,
        });
        let got = decode_request::<FakeRequest>(input.to_string())?;
        assert_eq!(got.vpc_id.as_deref(), Some("vpc-1"));
        assert_eq!(got.limit, Some(-5));
        assert_eq!(got.ratio, Some(0.5));
        let encoded = encode_request(&got)?;
        assert_eq!(serde_json::from_slice::<Value>(&encoded)?, input);
        Ok(())
    }

    #[test]
    fn decode_nested_unknown_is_tolerated() -> TestResult {
        let input = r#"{"Tags": [{"Key": "k", "Extra": true}]}"#;
        let got = decode_request::<FakeRequest>(input)?;
        assert_eq!(got.tags, Some(vec![wkt::Tag::new().set_key("k")]));
        Ok(())
    }

    #[test_case(r#"{"VpcId": "vpc-1", "Bogus": 1}"#, "Bogus")]
    #[test_case(r#"{"vpcid": "vpc-1"}"#, "vpcid")]
    #[test_case(r#"{"VPCID": "vpc-1"}"#, "VPCID")]
    #[test_case(r#"{"Bogus": "not-checked-for-type"}"#, "Bogus")]
    fn decode_unknown_key(input: &str, want: &str) {
        let err = decode_request::<FakeRequest>(input).unwrap_err();
        assert!(err.is_strict_decode(), "{err:?}");
        let details = err.strict_decode_error();
        assert_eq!(details.and_then(|d| d.key()), Some(want), "{err:?}");
        assert_eq!(details.map(|d| d.operation()), Some("Fake"), "{err:?}");
    }

    #[test]
    fn strict_check_precedes_type_check() {
        let err = decode_request::<FakeRequest>(r#"{"VpcId": 5, "Bogus": 1}"#).unwrap_err();
        assert!(err.is_strict_decode(), "{err:?}");
    }

    #[test_case("[]", "array")]
    #[test_case("null", "null")]
    #[test_case("42", "number")]
    #[test_case(r#""text""#, "string")]
    #[test_case("true", "boolean")]
    fn decode_not_an_object(input: &str, found: &str) {
        let err = decode_request::<FakeRequest>(input).unwrap_err();
        assert!(err.is_strict_decode(), "{err:?}");
        let msg = err.to_string();
        assert!(msg.contains("expected object"), "{msg}");
        assert!(msg.contains(found), "{msg}");
    }

    #[test_case(""; "empty")]
    #[test_case("{"; "truncated")]
    #[test_case(r#"{"VpcId": }"#; "bad value")]
    #[test_case("{} {}"; "trailing")]
    fn decode_malformed(input: &str) {
        let err = decode_request::<FakeRequest>(input).unwrap_err();
        assert!(err.is_malformed_json(), "{err:?}");
    }

    #[test]
    fn decode_wrong_type() {
        let err = decode_request::<FakeRequest>(r#"{"Tags": [{"Key": 7}]}"#).unwrap_err();
        assert!(err.is_decode(), "{err:?}");
        let details = err.decode_error();
        assert_eq!(details.and_then(|d| d.path()), Some("Tags[0].Key"), "{err:?}");
        assert_eq!(details.and_then(|d| d.operation()), Some("Fake"), "{err:?}");
    }

    #[test]
    fn decode_duplicate_keys_last_wins() -> TestResult {
        let got = decode_request::<FakeRequest>(r#"{"VpcId": "a", "VpcId": "b"}"#)?;
        assert_eq!(got.vpc_id.as_deref(), Some("b"));
        Ok(())
    }

    #[test]
    fn response_roundtrip() -> TestResult {
        let response = FakeResponse {
            address_set: Some(vec!["eip-1".into(), "eip-2".into()]),
            request_id: Some("req-1".into()),
        };
        let encoded = encode_response(&response)?;
        assert_eq!(
            serde_json::from_slice::<Value>(&encoded)?,
            json!({"Response": {"AddressSet": ["eip-1", "eip-2"], "RequestId": "req-1"}})
        );
        let got = decode_response::<FakeRequest>(&encoded)?;
        assert_eq!(got, response);
        Ok(())
    }

    #[test]
    fn response_tolerates_unknown() -> TestResult {
        let input = json!({
            "Response": {"AddressSet": [], "RequestId": "req-1", "NewField": {"a": 1}},
            "Other": true,
        });
        let got = decode_response::<FakeRequest>(input.to_string())?;
        assert_eq!(got.address_set, Some(Vec::new()));
        assert_eq!(got.request_id.as_deref(), Some("req-1"));
        Ok(())
    }

    #[test]
    fn response_error_path() {
        let input = json!({"Response": {"AddressSet": ["eip-1", 2], "RequestId": "req-1"}});
        let err = decode_response::<FakeRequest>(input.to_string()).unwrap_err();
        assert!(err.is_decode(), "{err:?}");
        let path = err.decode_error().and_then(|d| d.path());
        assert_eq!(path, Some("Response.AddressSet[1]"), "{err:?}");
    }

    #[test]
    fn response_service_error() -> TestResult {
        let details = ServiceError::new("ResourceNotFound", "no such address").set_request_id("req-1");
        let encoded = encode_service_error(&details)?;
        assert_eq!(
            serde_json::from_slice::<Value>(&encoded)?,
            json!({"Response": {
                "Error": {"Code": "ResourceNotFound", "Message": "no such address"},
                "RequestId": "req-1",
            }})
        );
        let err = decode_response::<FakeRequest>(&encoded).unwrap_err();
        assert_eq!(err.service_error(), Some(&details), "{err:?}");
        Ok(())
    }

    #[test_case(json!([]))]
    #[test_case(json!({}))]
    #[test_case(json!({"response": {}}))]
    fn response_bad_envelope(input: Value) {
        let err = decode_response::<FakeRequest>(input.to_string()).unwrap_err();
        assert!(err.is_decode(), "{err:?}");
    }

    #[test]
    fn response_bad_payload() {
        let err = decode_response::<FakeRequest>(r#"{"Response": "text"}"#).unwrap_err();
        assert!(err.is_decode(), "{err:?}");
        let path = err.decode_error().and_then(|d| d.path());
        assert_eq!(path, Some("Response"), "{err:?}");
    }

    #[test]
    fn check_keys_reports_first() {
        let value = json!({"B": 1, "A": 2, "VpcId": "x"});
        let err = check_keys("Fake", &["VpcId"], &value).unwrap_err();
        assert_eq!(err.key(), Some("A"));
    }
}
