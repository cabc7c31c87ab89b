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

#[cfg(test)]
mod test {
    use bytes::Bytes;
    use http::{HeaderMap, HeaderValue, Method, StatusCode};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use tencentcloud_gax::call::{CallContext, decode_http_response};
    use tencentcloud_gax::codec;
    use tencentcloud_gax::error::service::ServiceError;
    use tencentcloud_gax::options::{ClientConfig, Language};
    use tencentcloud_gax::request::Request;
    use tencentcloud_test_utils::test_layer::TestLayer;
    use test_case::test_case;
    use wkt::message::Message;

    type Result = anyhow::Result<()>;

    #[serde_with::serde_as]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default)]
    struct ReleaseAddressesRequest {
        #[serde(rename = "AddressIds", skip_serializing_if = "Option::is_none")]
        address_ids: Option<Vec<String>>,
        #[serde(rename = "Weight", skip_serializing_if = "Option::is_none")]
        #[serde_as(as = "Option<wkt::internal::F64>")]
        weight: Option<f64>,
    }

    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default)]
    struct ReleaseAddressesResponse {
        #[serde(rename = "TaskId", skip_serializing_if = "Option::is_none")]
        task_id: Option<String>,
        #[serde(rename = "RequestId", skip_serializing_if = "Option::is_none")]
        request_id: Option<String>,
    }

    impl Message for ReleaseAddressesRequest {
        fn typename() -> &'static str {
            "test.ReleaseAddressesRequest"
        }
    }

    impl Message for ReleaseAddressesResponse {
        fn typename() -> &'static str {
            "test.ReleaseAddressesResponse"
        }
    }

    impl Request for ReleaseAddressesRequest {
        type Response = ReleaseAddressesResponse;
        const SERVICE: &'static str = "vpc";
        const VERSION: &'static str = "2017-03-12";
        const ACTION: &'static str = "ReleaseAddresses";
    }

    fn request() -> ReleaseAddressesRequest {
        ReleaseAddressesRequest {
            address_ids: Some(vec!["eip-1".into()]),
            ..Default::default()
        }
    }

    fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
        headers.get(name).and_then(|v| v.to_str().ok())
    }

    #[test]
    fn prepare() -> Result {
        let config = ClientConfig::new()
            .set_region("ap-guangzhou")
            .set_language(Language::EnUs);
        let prepared = CallContext::new(&config).prepare(&request())?;
        assert_eq!(prepared.method, Method::POST);
        assert_eq!(prepared.host, "vpc.tencentcloudapi.com");
        assert_eq!(prepared.path, "/");
        assert_eq!(prepared.service, "vpc");
        assert_eq!(prepared.version, "2017-03-12");
        assert_eq!(prepared.action, "ReleaseAddresses");
        let headers = &prepared.headers;
        assert_eq!(header(headers, "host"), Some("vpc.tencentcloudapi.com"));
        assert_eq!(header(headers, "x-tc-action"), Some("ReleaseAddresses"));
        assert_eq!(header(headers, "x-tc-version"), Some("2017-03-12"));
        assert_eq!(header(headers, "x-tc-region"), Some("ap-guangzhou"));
        assert_eq!(header(headers, "x-tc-language"), Some("en-US"));
        assert_eq!(
            header(headers, "content-type"),
            Some("application/json; charset=utf-8")
        );
        let user_agent = header(headers, "user-agent").unwrap_or_default();
        assert!(user_agent.starts_with("tencentcloud-sdk-rust/"), "{user_agent}");
        let body = serde_json::from_slice::<Value>(&prepared.body)?;
        assert_eq!(body, json!({"AddressIds": ["eip-1"]}));
        Ok(())
    }

    #[test]
    fn prepare_overrides() -> Result {
        let config = ClientConfig::new()
            .set_region("ap-guangzhou")
            .set_user_agent("my-app/1.2")
            .set_endpoint("localhost:8080");
        let context = CallContext::from(&config).set_or_clear_region(None::<String>);
        assert_eq!(context.region(), None);
        let prepared = context.prepare(&request())?;
        assert_eq!(prepared.host, "localhost:8080");
        assert_eq!(header(&prepared.headers, "host"), Some("localhost:8080"));
        assert_eq!(header(&prepared.headers, "x-tc-region"), None);
        assert_eq!(header(&prepared.headers, "x-tc-language"), None);
        let user_agent = header(&prepared.headers, "user-agent").unwrap_or_default();
        assert!(user_agent.starts_with("my-app/1.2 tencentcloud-sdk-rust/"), "{user_agent}");

        let prepared = context.set_region("ap-beijing").prepare(&request())?;
        assert_eq!(header(&prepared.headers, "x-tc-region"), Some("ap-beijing"));
        Ok(())
    }

    #[test]
    fn prepare_bad_region() {
        let context = CallContext::default().set_region("ap-\nguangzhou");
        let err = context.prepare(&request()).unwrap_err();
        assert!(err.is_serialization(), "{err:?}");
    }

    #[test]
    fn prepare_non_finite() {
        let (layer, _guard) = TestLayer::initialize();
        let request = ReleaseAddressesRequest {
            weight: Some(f64::NAN),
            ..Default::default()
        };
        let err = CallContext::default().prepare(&request).unwrap_err();
        assert!(err.is_serialization(), "{err:?}");
        let events = layer.events();
        assert!(
            events
                .iter()
                .any(|e| e.level == tracing::Level::WARN && e.span.as_deref() == Some("prepare")),
            "{events:?}"
        );
    }

    #[test]
    fn prepare_tracing() -> Result {
        let (layer, _guard) = TestLayer::initialize();
        let context = CallContext::default().set_region("ap-guangzhou");
        let _ = context.prepare(&request())?;
        let spans = layer.spans();
        assert_eq!(spans.len(), 1, "{spans:?}");
        let span = &spans[0];
        assert_eq!(span.name, "prepare");
        let attr = |name: &str| span.attributes.get(name).map(String::as_str);
        assert_eq!(attr("service"), Some("vpc"));
        assert_eq!(attr("version"), Some("2017-03-12"));
        assert_eq!(attr("action"), Some("ReleaseAddresses"));
        assert_eq!(attr("region"), Some("ap-guangzhou"));
        let events = layer.events();
        assert!(
            events
                .iter()
                .any(|e| e.message.as_deref() == Some("request prepared")),
            "{events:?}"
        );
        Ok(())
    }

    #[test]
    fn decode_success() -> Result {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        let body = json!({"Response": {"TaskId": "12345", "RequestId": "req-1"}});
        let response = decode_http_response::<ReleaseAddressesRequest>(
            StatusCode::OK,
            headers.clone(),
            Bytes::from(body.to_string()),
        )?;
        assert_eq!(response.request_id(), Some("req-1"));
        assert_eq!(response.headers(), &headers);
        assert_eq!(response.body().task_id.as_deref(), Some("12345"));
        Ok(())
    }

    #[test]
    fn decode_service_error() -> Result {
        let (layer, _guard) = TestLayer::initialize();
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        let details = ServiceError::new("InvalidParameterValue", "bad address id")
            .set_request_id("req-2");
        let body = codec::encode_service_error(&details)?;
        let err = decode_http_response::<ReleaseAddressesRequest>(
            StatusCode::OK,
            headers.clone(),
            body,
        )
        .unwrap_err();
        let got = err.service_error();
        assert_eq!(got.map(|e| e.code()), Some("InvalidParameterValue"), "{err:?}");
        assert_eq!(got.map(|e| e.message()), Some("bad address id"), "{err:?}");
        assert_eq!(got.and_then(|e| e.request_id()), Some("req-2"), "{err:?}");
        assert_eq!(err.http_status_code(), Some(200));
        assert_eq!(err.http_headers(), Some(&headers));

        let spans = layer.spans();
        assert_eq!(spans.len(), 1, "{spans:?}");
        assert_eq!(spans[0].name, "decode_response");
        assert_eq!(
            spans[0].attributes.get("status_code").map(String::as_str),
            Some("200")
        );
        let events = layer.events();
        assert!(
            events.iter().any(|e| e.level == tracing::Level::WARN),
            "{events:?}"
        );
        Ok(())
    }

    #[test_case(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>")]
    #[test_case(StatusCode::INTERNAL_SERVER_ERROR, r#"{"unexpected": true}"#)]
    #[test_case(StatusCode::SERVICE_UNAVAILABLE, r#"{"Response": {"RequestId": "req-3"}}"#)]
    fn decode_http_error(status: StatusCode, payload: &'static str) {
        let err = decode_http_response::<ReleaseAddressesRequest>(
            status,
            HeaderMap::new(),
            Bytes::from_static(payload.as_bytes()),
        )
        .unwrap_err();
        assert!(err.is_transport(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(status.as_u16()));
        assert_eq!(
            err.http_payload(),
            Some(&Bytes::from_static(payload.as_bytes()))
        );
    }

    #[test]
    fn decode_service_error_with_http_error() {
        let body = json!({"Response": {
            "Error": {"Code": "InternalError", "Message": "oops"},
            "RequestId": "req-4",
        }});
        let err = decode_http_response::<ReleaseAddressesRequest>(
            StatusCode::INTERNAL_SERVER_ERROR,
            HeaderMap::new(),
            Bytes::from(body.to_string()),
        )
        .unwrap_err();
        assert_eq!(
            err.service_error().map(|e| e.code()),
            Some("InternalError"),
            "{err:?}"
        );
        assert_eq!(err.http_status_code(), Some(500));
    }

    #[test]
    fn decode_malformed_success() {
        let err = decode_http_response::<ReleaseAddressesRequest>(
            StatusCode::OK,
            HeaderMap::new(),
            Bytes::from_static(b"not json"),
        )
        .unwrap_err();
        assert!(err.is_malformed_json(), "{err:?}");
    }

    #[test]
    fn decode_bad_payload() {
        let body = json!({"Response": {"TaskId": 7, "RequestId": "req-5"}});
        let err = decode_http_response::<ReleaseAddressesRequest>(
            StatusCode::OK,
            HeaderMap::new(),
            Bytes::from(body.to_string()),
        )
        .unwrap_err();
        assert!(err.is_decode(), "{err:?}");
        let details = err.decode_error();
        assert_eq!(details.and_then(|d| d.path()), Some("Response.TaskId"), "{err:?}");
        assert_eq!(
            details.and_then(|d| d.operation()),
            Some("ReleaseAddresses"),
            "{err:?}"
        );
    }

    #[test]
    fn decode_missing_envelope() {
        let err = decode_http_response::<ReleaseAddressesRequest>(
            StatusCode::OK,
            HeaderMap::new(),
            Bytes::from_static(br#"{"TaskId": "1"}"#),
        )
        .unwrap_err();
        assert!(err.is_decode(), "{err:?}");
    }
}
