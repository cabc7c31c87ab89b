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
    use gax::call::{CallContext, decode_http_response};
    use gax::codec;
    use gax::error::service::ServiceError;
    use gax::options::ClientConfig;
    use http::{HeaderMap, StatusCode};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use tencentcloud_test_utils::test_layer::TestLayer;
    use tencentcloud_vpc_v20170312::errors;
    use tencentcloud_vpc_v20170312::model::*;
    use test_case::test_case;
    use wkt::Tag;

    type Result = anyhow::Result<()>;

    #[test]
    fn allocate_addresses_response() -> Result {
        let input = r#"{"Response":{"AddressSet":["eip-1","eip-2"],"RequestId":"r-1","FutureField":"x"}}"#;
        let got = codec::decode_response::<AllocateAddressesRequest>(input)?;
        let want = AllocateAddressesResponse::new()
            .set_address_set(["eip-1", "eip-2"])
            .set_request_id("r-1");
        assert_eq!(got, want);

        let encoded = serde_json::from_slice::<Value>(&codec::encode_response(&got)?)?;
        assert_eq!(
            encoded,
            json!({"Response": {"AddressSet": ["eip-1", "eip-2"], "RequestId": "r-1"}})
        );
        Ok(())
    }

    #[test]
    fn describe_addresses_response() -> Result {
        let input = json!({"Response": {
            "TotalCount": 2,
            "AddressSet": [
                {
                    "AddressId": "eip-1",
                    "AddressIp": "203.0.113.10",
                    "AddressStatus": "BIND",
                    "InstanceId": "ins-1",
                    "IsArrears": false,
                    "Bandwidth": 10,
                    "TagSet": [{"Key": "env", "Value": "prod"}],
                    "AntiDDoSPackageId": "bgp-1",
                },
                {
                    "AddressId": "eip-2",
                    "AddressStatus": "UNBIND",
                    "InstanceId": null,
                    "TagSet": [],
                },
            ],
            "RequestId": "req-1",
        }});
        let got = codec::decode_response::<DescribeAddressesRequest>(input.to_string())?;
        let want = DescribeAddressesResponse::new()
            .set_total_count(2)
            .set_address_set([
                Address::new()
                    .set_address_id("eip-1")
                    .set_address_ip("203.0.113.10")
                    .set_address_status("BIND")
                    .set_instance_id("ins-1")
                    .set_is_arrears(false)
                    .set_bandwidth(10_u64)
                    .set_tag_set([Tag::new().set_key("env").set_value("prod")]),
                Address::new()
                    .set_address_id("eip-2")
                    .set_address_status("UNBIND")
                    .set_tag_set(Vec::<Tag>::new()),
            ])
            .set_request_id("req-1");
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn response_type_error_path() {
        let input = json!({"Response": {
            "TotalCount": 1,
            "VpcSet": [{"VpcId": "vpc-1", "IsDefault": "yes"}],
            "RequestId": "req-1",
        }});
        let err = codec::decode_response::<DescribeVpcsRequest>(input.to_string()).unwrap_err();
        assert!(err.is_decode(), "{err:?}");
        let details = err.decode_error();
        assert_eq!(details.and_then(|d| d.path()), Some("Response.VpcSet[0].IsDefault"));
        assert_eq!(details.and_then(|d| d.operation()), Some("DescribeVpcs"));
    }

    #[test]
    fn service_error() -> Result {
        let input = json!({"Response": {
            "Error": {"Code": "InvalidVpcId.NotFound", "Message": "vpc-404 does not exist"},
            "RequestId": "req-1",
        }});
        let err = codec::decode_response::<DeleteVpcRequest>(input.to_string()).unwrap_err();
        let details = err
            .service_error()
            .ok_or_else(|| anyhow::anyhow!("expected a service error, got {err:?}"))?;
        assert_eq!(details.code(), errors::INVALID_VPC_ID_NOT_FOUND);
        assert_eq!(errors::category(details.code()), "InvalidVpcId");
        assert_eq!(details.message(), "vpc-404 does not exist");
        assert_eq!(details.request_id(), Some("req-1"));
        Ok(())
    }

    #[test]
    fn service_error_round_trip() -> Result {
        let details = ServiceError::new(errors::LIMIT_EXCEEDED_CIDR_BLOCK, "quota")
            .set_request_id("req-2");
        let body = codec::encode_service_error(&details)?;
        let err = codec::decode_response::<CreateSubnetRequest>(&body).unwrap_err();
        assert_eq!(err.service_error(), Some(&details));
        Ok(())
    }

    #[test]
    fn float_response() -> Result {
        let input = json!({"Response": {
            "BandwidthPackageBillBandwidthSet": [
                {"BandwidthUsage": 12.5},
                {"BandwidthUsage": 0},
            ],
            "RequestId": "req-1",
        }});
        let got = codec::decode_response::<DescribeBandwidthPackageBillUsageRequest>(
            input.to_string(),
        )?;
        let usage = got
            .bandwidth_package_bill_bandwidth_set
            .iter()
            .flatten()
            .filter_map(|b| b.bandwidth_usage)
            .collect::<Vec<_>>();
        assert_eq!(usage, vec![12.5, 0.0]);
        let encoded = serde_json::from_slice::<Value>(&codec::encode_response(&got)?)?;
        let first = &encoded["Response"]["BandwidthPackageBillBandwidthSet"][0];
        assert_eq!(first["BandwidthUsage"], json!(12.5));
        Ok(())
    }

    #[test_case(f64::NAN)]
    #[test_case(f64::INFINITY)]
    #[test_case(f64::NEG_INFINITY)]
    fn non_finite_float(input: f64) {
        let response = DescribeBandwidthPackageBillUsageResponse::new()
            .set_bandwidth_package_bill_bandwidth_set([
                BandwidthPackageBillBandwidth::new().set_bandwidth_usage(input)
            ]);
        let err = codec::encode_response(&response).unwrap_err();
        assert!(err.is_serialization(), "{err:?}");
    }

    #[test]
    fn http_response() -> Result {
        let (layer, _guard) = TestLayer::initialize();
        let body = codec::encode_response(
            &CreateVpcResponse::new()
                .set_vpc(
                    Vpc::new()
                        .set_vpc_id("vpc-1")
                        .set_cidr_block("10.0.0.0/16")
                        .set_dns_server_set(["183.60.83.19", "183.60.82.98"]),
                )
                .set_request_id("req-1"),
        )?;
        let response =
            decode_http_response::<CreateVpcRequest>(StatusCode::OK, HeaderMap::new(), body)?;
        assert_eq!(response.request_id(), Some("req-1"));
        let vpc = response.into_body().vpc.unwrap_or_default();
        assert_eq!(vpc.vpc_id.as_deref(), Some("vpc-1"));
        assert_eq!(
            vpc.dns_server_set,
            Some(vec!["183.60.83.19".to_string(), "183.60.82.98".into()])
        );
        let spans = layer.spans();
        assert_eq!(spans.len(), 1, "{spans:?}");
        assert_eq!(
            spans[0].attributes.get("action").map(String::as_str),
            Some("CreateVpc")
        );
        Ok(())
    }

    #[test]
    fn http_error() {
        let err = decode_http_response::<CreateVpcRequest>(
            StatusCode::BAD_GATEWAY,
            HeaderMap::new(),
            Bytes::from_static(b"upstream unavailable"),
        )
        .unwrap_err();
        assert_eq!(err.http_status_code(), Some(502));
        assert!(err.service_error().is_none(), "{err:?}");
    }

    #[test]
    fn prepare() -> Result {
        let config = ClientConfig::new().set_region("ap-guangzhou");
        let request = AttachCcnInstancesRequest::new()
            .set_ccn_id("ccn-1")
            .set_instances([CcnInstance::new()
                .set_instance_id("vpc-1")
                .set_instance_region("ap-guangzhou")
                .set_instance_type("VPC")]);
        let prepared = CallContext::new(&config).prepare(&request)?;
        assert_eq!(prepared.host, "vpc.tencentcloudapi.com");
        assert_eq!(prepared.service, tencentcloud_vpc_v20170312::SERVICE);
        assert_eq!(prepared.version, tencentcloud_vpc_v20170312::VERSION);
        assert_eq!(prepared.action, "AttachCcnInstances");
        let got = codec::decode_request::<AttachCcnInstancesRequest>(&prepared.body)?;
        assert_eq!(got, request);
        Ok(())
    }
}
