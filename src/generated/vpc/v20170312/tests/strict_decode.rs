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
    use gax::codec;
    use gax::error::StrictDecodeError;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use tencentcloud_vpc_v20170312::model::*;
    use test_case::test_case;
    use wkt::{Filter, Tag};

    type Result = anyhow::Result<()>;

    fn reencode<R: gax::request::Request>(request: &R) -> anyhow::Result<Value> {
        Ok(serde_json::from_str(&codec::to_json_string(request)?)?)
    }

    #[test]
    fn attach_ccn_instances_empty_sequence() -> Result {
        let input = json!({"CcnId": "ccn-1", "Instances": []});
        let got = codec::decode_request::<AttachCcnInstancesRequest>(input.to_string())?;
        let want = AttachCcnInstancesRequest::new()
            .set_ccn_id("ccn-1")
            .set_instances(Vec::<CcnInstance>::new());
        assert_eq!(got, want);
        assert_eq!(reencode(&got)?, input);
        Ok(())
    }

    #[test]
    fn attach_ccn_instances_unknown_key() {
        let input = r#"{"CcnId":"ccn-1","Bogus":1}"#;
        let err = codec::decode_request::<AttachCcnInstancesRequest>(input).unwrap_err();
        assert!(err.is_strict_decode(), "{err:?}");
        let details = err.strict_decode_error();
        assert_eq!(
            details,
            Some(&StrictDecodeError::unknown_key("AttachCcnInstances", "Bogus"))
        );
        let message = err.to_string();
        assert!(message.contains("Bogus"), "{message}");
        assert!(message.contains("AttachCcnInstances"), "{message}");
        assert_eq!(details.map(|e| e.code()), Some("ClientError.BuildRequestError"));
    }

    #[test]
    fn attach_ccn_instances_nested() -> Result {
        let input = json!({
            "CcnId": "ccn-1",
            "CcnUin": "100000000001",
            "Instances": [
                {"InstanceId": "vpc-1", "InstanceRegion": "ap-guangzhou", "InstanceType": "VPC"},
                {"InstanceId": "dcg-2", "InstanceRegion": "ap-shanghai", "InstanceType": "DIRECTCONNECT"},
                {"InstanceId": "vpc-3", "InstanceRegion": "ap-beijing", "Description": "third"},
            ],
        });
        let got = codec::decode_request::<AttachCcnInstancesRequest>(input.to_string())?;
        let ids = got
            .instances
            .iter()
            .flatten()
            .filter_map(|i| i.instance_id.as_deref())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["vpc-1", "dcg-2", "vpc-3"]);
        assert_eq!(reencode(&got)?, input);
        Ok(())
    }

    #[test]
    fn address_count_max() -> Result {
        let input = r#"{"AddressCount":9223372036854775807}"#;
        let got = codec::decode_request::<AllocateAddressesRequest>(input)?;
        assert_eq!(got.address_count, Some(i64::MAX));
        assert_eq!(codec::to_json_string(&got)?, input);
        Ok(())
    }

    #[test_case(r#"{"AddressCount":-9223372036854775808}"#, i64::MIN)]
    #[test_case(r#"{"AddressCount":0}"#, 0)]
    #[test_case(r#"{"AddressCount":-1}"#, -1)]
    fn address_count_extremes(input: &str, want: i64) -> Result {
        let got = codec::decode_request::<AllocateAddressesRequest>(input)?;
        assert_eq!(got.address_count, Some(want));
        assert_eq!(codec::to_json_string(&got)?, input);
        Ok(())
    }

    #[test_case(r#"{"TaskId":18446744073709551615}"#, u64::MAX)]
    #[test_case(r#"{"TaskId":0}"#, 0)]
    fn task_id_extremes(input: &str, want: u64) -> Result {
        let got = codec::decode_request::<DescribeTaskResultRequest>(input)?;
        assert_eq!(got.task_id, Some(want));
        assert_eq!(codec::to_json_string(&got)?, input);
        Ok(())
    }

    #[test_case(r#"{"AddressCount":9223372036854775808}"#)]
    #[test_case(r#"{"AddressCount":1.5}"#)]
    #[test_case(r#"{"AddressCount":"1"}"#)]
    fn address_count_out_of_range(input: &str) {
        let err = codec::decode_request::<AllocateAddressesRequest>(input).unwrap_err();
        assert!(err.is_decode(), "{err:?}");
        let details = err.decode_error();
        assert_eq!(details.and_then(|d| d.path()), Some("AddressCount"), "{err:?}");
        assert_eq!(
            details.and_then(|d| d.operation()),
            Some("AllocateAddresses"),
            "{err:?}"
        );
    }

    #[test]
    fn task_id_negative() {
        let input = r#"{"TaskId":-1}"#;
        let err = codec::decode_request::<DescribeTaskResultRequest>(input).unwrap_err();
        assert!(err.is_decode(), "{err:?}");
    }

    #[test]
    fn nested_unknown_keys_are_dropped() -> Result {
        let input = r#"{"Tags":[{"Key":"env","Value":"prod","UnknownNested":"ok"}]}"#;
        let got = codec::decode_request::<CreateVpcRequest>(input)?;
        assert_eq!(
            got,
            CreateVpcRequest::new().set_tags([Tag::new().set_key("env").set_value("prod")])
        );
        assert_eq!(
            reencode(&got)?,
            json!({"Tags": [{"Key": "env", "Value": "prod"}]})
        );
        Ok(())
    }

    #[test]
    fn nested_shape() -> Result {
        let input = json!({
            "AddressCount": 2,
            "InternetChargeType": "BANDWIDTH_PREPAID_BY_MONTH",
            "AddressChargePrepaid": {"Period": 12, "AutoRenewFlag": 1, "Discount": 0.9},
            "ApplicableForCLB": false,
        });
        let got = codec::decode_request::<AllocateAddressesRequest>(input.to_string())?;
        let want = AllocateAddressesRequest::new()
            .set_address_count(2)
            .set_internet_charge_type("BANDWIDTH_PREPAID_BY_MONTH")
            .set_address_charge_prepaid(
                AddressChargePrepaid::new()
                    .set_period(12)
                    .set_auto_renew_flag(1),
            )
            .set_applicable_for_clb(false);
        assert_eq!(got, want);
        let mut canonical = input;
        if let Some(prepaid) = canonical
            .get_mut("AddressChargePrepaid")
            .and_then(Value::as_object_mut)
        {
            prepaid.remove("Discount");
        }
        assert_eq!(reencode(&got)?, canonical);
        Ok(())
    }

    #[test_case(json!([]), "array")]
    #[test_case(json!(null), "null")]
    #[test_case(json!("CcnId"), "string")]
    #[test_case(json!(42), "number")]
    #[test_case(json!(true), "boolean")]
    fn expected_object(input: Value, found: &'static str) {
        let err =
            codec::decode_request::<AttachCcnInstancesRequest>(input.to_string()).unwrap_err();
        assert_eq!(
            err.strict_decode_error(),
            Some(&StrictDecodeError::expected_object(
                "AttachCcnInstances",
                found
            ))
        );
        assert!(err.to_string().contains("expected object"), "{err}");
    }

    #[test_case("ccnid")]
    #[test_case("CCNID")]
    #[test_case("ccnId")]
    #[test_case("CcnID")]
    #[test_case(" CcnId")]
    fn keys_are_case_sensitive(key: &str) {
        let mut object = serde_json::Map::new();
        object.insert(key.to_string(), json!("ccn-1"));
        let input = Value::Object(object).to_string();
        let err = codec::decode_request::<AttachCcnInstancesRequest>(input).unwrap_err();
        assert_eq!(err.strict_decode_error().and_then(|e| e.key()), Some(key));
    }

    #[test]
    fn unknown_key_with_valid_keys() {
        let input = json!({
            "VpcId": "vpc-1",
            "SubnetName": "default",
            "CidrBlock": "10.0.0.0/24",
            "Zone": "ap-guangzhou-3",
            "Tagz": [],
        });
        let err = codec::decode_request::<CreateSubnetRequest>(input.to_string()).unwrap_err();
        assert_eq!(
            err.strict_decode_error(),
            Some(&StrictDecodeError::unknown_key("CreateSubnet", "Tagz"))
        );
    }

    #[test]
    fn unknown_keys_reported_in_stable_order() {
        let input = r#"{"Zulu": 1, "Alpha": 2, "VpcId": "vpc-1"}"#;
        let err = codec::decode_request::<DeleteVpcRequest>(input).unwrap_err();
        assert_eq!(err.strict_decode_error().and_then(|e| e.key()), Some("Alpha"));
    }

    #[test]
    fn unknown_key_rejected_before_type_errors() {
        let input = r#"{"VpcId": 123, "Bogus": true}"#;
        let err = codec::decode_request::<DeleteVpcRequest>(input).unwrap_err();
        assert!(err.is_strict_decode(), "{err:?}");
    }

    #[test]
    fn null_members_are_unset() -> Result {
        let input = r#"{"AddressIds": null, "Filters": null, "Offset": null, "Limit": 20}"#;
        let got = codec::decode_request::<DescribeAddressesRequest>(input)?;
        assert_eq!(got, DescribeAddressesRequest::new().set_limit(20));
        assert_eq!(codec::to_json_string(&got)?, r#"{"Limit":20}"#);
        Ok(())
    }

    #[test]
    fn duplicate_keys_last_wins() -> Result {
        let input = r#"{"VpcId": "vpc-1", "VpcId": "vpc-2"}"#;
        let got = codec::decode_request::<DeleteVpcRequest>(input)?;
        assert_eq!(got.vpc_id.as_deref(), Some("vpc-2"));
        Ok(())
    }

    #[test]
    fn nested_type_error_path() {
        let input = json!({
            "CcnId": "ccn-1",
            "Instances": [{"InstanceId": "vpc-1"}, {"InstanceId": 7}],
        });
        let err =
            codec::decode_request::<AttachCcnInstancesRequest>(input.to_string()).unwrap_err();
        assert!(err.is_decode(), "{err:?}");
        assert_eq!(
            err.decode_error().and_then(|d| d.path()),
            Some("Instances[1].InstanceId"),
            "{err:?}"
        );
    }

    #[test]
    fn malformed_json() {
        let err =
            codec::decode_request::<AttachCcnInstancesRequest>(r#"{"CcnId": "#).unwrap_err();
        assert!(err.is_malformed_json(), "{err:?}");
    }

    #[test]
    fn round_trip_built_request() -> Result {
        let request = DescribeVpcsRequest::new()
            .set_vpc_ids(["vpc-2", "vpc-1", "vpc-3"])
            .set_filters([
                Filter::new().set_name("vpc-name").set_values(["prod", "staging"]),
                Filter::new().set_name("is-default").set_values(["false"]),
            ])
            .set_offset("0")
            .set_limit("100");
        let text = codec::to_json_string(&request)?;
        let got = codec::decode_request::<DescribeVpcsRequest>(&text)?;
        assert_eq!(got, request);
        assert_eq!(
            got.vpc_ids,
            Some(vec!["vpc-2".to_string(), "vpc-1".into(), "vpc-3".into()])
        );
        Ok(())
    }

    #[test]
    fn round_trip_deep_nesting() -> Result {
        let policy = |index: i64, port: &str| {
            SecurityGroupPolicy::new()
                .set_policy_index(index)
                .set_protocol("TCP")
                .set_port(port)
                .set_cidr_block("10.0.0.0/16")
                .set_action("ACCEPT")
        };
        let request = CreateSecurityGroupPoliciesRequest::new()
            .set_security_group_id("sg-1")
            .set_security_group_policy_set(
                SecurityGroupPolicySet::new()
                    .set_ingress([policy(0, "22"), policy(1, "80"), policy(2, "443")])
                    .set_egress([policy(0, "ALL")]),
            );
        let mut buffer = Vec::new();
        codec::encode_request_to_writer(&request, &mut buffer)?;
        let got = codec::decode_request::<CreateSecurityGroupPoliciesRequest>(&buffer)?;
        assert_eq!(got, request);
        Ok(())
    }

    #[test]
    fn encode_omits_unset() -> Result {
        let request = CreateRoutesRequest::new()
            .set_route_table_id("rtb-1")
            .set_routes([Route::new()
                .set_destination_cidr_block("10.1.0.0/16")
                .set_gateway_type("CCN")
                .set_gateway_id("ccn-1")
                .set_or_clear_route_description(None::<String>)]);
        let got = serde_json::from_slice::<Value>(&codec::encode_request(&request)?)?;
        assert_eq!(
            got,
            json!({
                "RouteTableId": "rtb-1",
                "Routes": [{
                    "DestinationCidrBlock": "10.1.0.0/16",
                    "GatewayType": "CCN",
                    "GatewayId": "ccn-1",
                }],
            })
        );
        Ok(())
    }
}
