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
    use gax::request::Request;
    use pretty_assertions::assert_eq;
    use serde_json::{Map, Value, json};
    use tencentcloud_vpc_v20170312::model::*;
    use tencentcloud_vpc_v20170312::{REGISTRY, recognized_request_fields};
    use wkt::message::Message;

    type Result = anyhow::Result<()>;

    /// Runs `check` on every request message of the service, returns the
    /// number of operations visited.
    fn for_each_operation<F>(mut check: F) -> anyhow::Result<usize>
    where
        F: FnMut(Operation) -> Result,
    {
        macro_rules! visit {
            ($($request:ty),* $(,)?) => {{
                let mut count = 0_usize;
                $(
                    check(Operation::of::<$request>())?;
                    count += 1;
                )*
                count
            }};
        }
        Ok(visit!(
            AllocateAddressesRequest,
            ReleaseAddressesRequest,
            DescribeAddressesRequest,
            AssociateAddressRequest,
            DisassociateAddressRequest,
            CreateVpcRequest,
            DeleteVpcRequest,
            DescribeVpcsRequest,
            ModifyVpcAttributeRequest,
            CreateSubnetRequest,
            CreateSubnetsRequest,
            DeleteSubnetRequest,
            DescribeSubnetsRequest,
            CreateCcnRequest,
            AttachCcnInstancesRequest,
            DetachCcnInstancesRequest,
            DescribeCcnsRequest,
            DeleteCcnRequest,
            CreateSecurityGroupRequest,
            DeleteSecurityGroupRequest,
            CreateSecurityGroupPoliciesRequest,
            DescribeSecurityGroupsRequest,
            CreateRouteTableRequest,
            CreateRoutesRequest,
            DeleteRouteTableRequest,
            DescribeRouteTablesRequest,
            DescribeAccountAttributesRequest,
            DescribeTaskResultRequest,
            DescribeVpcLimitsRequest,
            DescribeBandwidthPackageBillUsageRequest
        ))
    }

    /// The checks that need a typed request, erased so they fit in a table.
    struct Operation {
        action: &'static str,
        request_fields: &'static [&'static str],
        response_fields: &'static [&'static str],
        decode_request: fn(&str) -> gax::Result<String>,
        decode_response: fn(&str) -> gax::Result<()>,
        is_default: fn(&str) -> gax::Result<bool>,
    }

    impl Operation {
        fn of<R>() -> Self
        where
            R: Request + PartialEq + std::fmt::Debug,
        {
            Self {
                action: R::ACTION,
                request_fields: R::fields(),
                response_fields: R::Response::fields(),
                decode_request: |input| {
                    let request = codec::decode_request::<R>(input)?;
                    codec::to_json_string(&request)
                },
                decode_response: |input| codec::decode_response::<R>(input).map(|_| ()),
                is_default: |input| Ok(codec::decode_request::<R>(input)? == R::default()),
            }
        }
    }

    #[test]
    fn every_operation_is_registered() -> Result {
        let mut actions = Vec::new();
        let count = for_each_operation(|op| {
            let descriptor = REGISTRY
                .operation(op.action)
                .ok_or_else(|| anyhow::anyhow!("{} is not registered", op.action))?;
            assert_eq!(descriptor.request_fields, op.request_fields, "{}", op.action);
            assert_eq!(descriptor.response_fields, op.response_fields, "{}", op.action);
            actions.push(op.action);
            Ok(())
        })?;
        assert_eq!(count, REGISTRY.len());
        let registered = REGISTRY.operations().map(|d| d.action).collect::<Vec<_>>();
        actions.sort();
        assert_eq!(actions, registered);
        Ok(())
    }

    #[test]
    fn empty_request() -> Result {
        for_each_operation(|op| {
            assert!((op.is_default)("{}")?, "{}", op.action);
            assert_eq!((op.decode_request)("{}")?, "{}", "{}", op.action);
            Ok(())
        })?;
        Ok(())
    }

    #[test]
    fn null_members_are_accepted() -> Result {
        for_each_operation(|op| {
            let object = op
                .request_fields
                .iter()
                .map(|f| (f.to_string(), Value::Null))
                .collect::<Map<_, _>>();
            let input = Value::Object(object).to_string();
            assert!((op.is_default)(&input)?, "{} {input}", op.action);
            Ok(())
        })?;
        Ok(())
    }

    #[test]
    fn unknown_key() -> Result {
        for_each_operation(|op| {
            let err = (op.decode_request)(r#"{"Bogus": 1}"#).unwrap_err();
            let details = err.strict_decode_error();
            assert_eq!(details.map(|e| e.operation()), Some(op.action));
            assert_eq!(details.and_then(|e| e.key()), Some("Bogus"));
            Ok(())
        })?;
        Ok(())
    }

    #[test]
    fn case_mismatch() -> Result {
        for_each_operation(|op| {
            for field in op.request_fields {
                let key = field.to_lowercase();
                let mut object = Map::new();
                object.insert(key.clone(), Value::Null);
                let input = Value::Object(object).to_string();
                let err = (op.decode_request)(&input).unwrap_err();
                assert_eq!(
                    err.strict_decode_error().and_then(|e| e.key()),
                    Some(key.as_str()),
                    "{}",
                    op.action
                );
            }
            Ok(())
        })?;
        Ok(())
    }

    #[test]
    fn responses_carry_request_id() -> Result {
        for_each_operation(|op| {
            assert_eq!(op.response_fields.last(), Some(&"RequestId"), "{}", op.action);
            Ok(())
        })?;
        Ok(())
    }

    #[test]
    fn responses_tolerate_unknown_members() -> Result {
        for_each_operation(|op| {
            let input = json!({"Response": {
                "RequestId": "req-1",
                "FutureField": {"Nested": [1, 2, 3]},
            }});
            (op.decode_response)(&input.to_string())?;
            Ok(())
        })?;
        Ok(())
    }

    #[test]
    fn verify_request_by_name() -> Result {
        for op in REGISTRY.operations() {
            let got = REGISTRY.verify_request(op.action, "{}")?;
            assert!(got.is_empty(), "{}", op.action);
            let err = REGISTRY
                .verify_request(op.action, r#"{"Bogus": 1}"#)
                .unwrap_err();
            assert!(err.is_strict_decode(), "{err:?}");
        }
        let got = REGISTRY.verify_request(
            "AttachCcnInstances",
            r#"{"CcnId": "ccn-1", "Instances": [{"Unknown": true}]}"#,
        )?;
        assert_eq!(got.len(), 2);
        Ok(())
    }

    #[test]
    fn verify_request_unknown_operation() {
        let err = REGISTRY.verify_request("RunInstances", "{}").unwrap_err();
        let details = err.strict_decode_error();
        assert_eq!(details.map(|e| e.operation()), Some("RunInstances"));
        assert_eq!(details.and_then(|e| e.key()), None);
        assert_eq!(recognized_request_fields("RunInstances"), None);
    }
}
