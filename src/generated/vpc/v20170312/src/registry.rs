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

//! The operations of the VPC API, as data.

use gax::registry::Registry;
use std::sync::LazyLock;

/// All the operations of the service, indexed by name.
///
/// # Example
/// ```
/// # use tencentcloud_vpc_v20170312::REGISTRY;
/// let fields = REGISTRY.recognized_request_fields("AttachCcnInstances");
/// assert_eq!(fields, Some(&["CcnId", "Instances", "CcnUin"][..]));
/// ```
pub static REGISTRY: LazyLock<Registry> = LazyLock::new(|| {
    Registry::new()
        .register::<crate::model::AllocateAddressesRequest>()
        .register::<crate::model::ReleaseAddressesRequest>()
        .register::<crate::model::DescribeAddressesRequest>()
        .register::<crate::model::AssociateAddressRequest>()
        .register::<crate::model::DisassociateAddressRequest>()
        .register::<crate::model::CreateVpcRequest>()
        .register::<crate::model::DeleteVpcRequest>()
        .register::<crate::model::DescribeVpcsRequest>()
        .register::<crate::model::ModifyVpcAttributeRequest>()
        .register::<crate::model::CreateSubnetRequest>()
        .register::<crate::model::CreateSubnetsRequest>()
        .register::<crate::model::DeleteSubnetRequest>()
        .register::<crate::model::DescribeSubnetsRequest>()
        .register::<crate::model::CreateCcnRequest>()
        .register::<crate::model::AttachCcnInstancesRequest>()
        .register::<crate::model::DetachCcnInstancesRequest>()
        .register::<crate::model::DescribeCcnsRequest>()
        .register::<crate::model::DeleteCcnRequest>()
        .register::<crate::model::CreateSecurityGroupRequest>()
        .register::<crate::model::DeleteSecurityGroupRequest>()
        .register::<crate::model::CreateSecurityGroupPoliciesRequest>()
        .register::<crate::model::DescribeSecurityGroupsRequest>()
        .register::<crate::model::CreateRouteTableRequest>()
        .register::<crate::model::CreateRoutesRequest>()
        .register::<crate::model::DeleteRouteTableRequest>()
        .register::<crate::model::DescribeRouteTablesRequest>()
        .register::<crate::model::DescribeAccountAttributesRequest>()
        .register::<crate::model::DescribeTaskResultRequest>()
        .register::<crate::model::DescribeVpcLimitsRequest>()
        .register::<crate::model::DescribeBandwidthPackageBillUsageRequest>()
});

/// The request member names recognized by `action`, or `None` if the service
/// has no such operation.
pub fn recognized_request_fields(action: &str) -> Option<&'static [&'static str]> {
    REGISTRY.recognized_request_fields(action)
}

/// The response member names of `action`, or `None` if the service has no
/// such operation.
pub fn recognized_response_fields(action: &str) -> Option<&'static [&'static str]> {
    REGISTRY.recognized_response_fields(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn identity() {
        assert_eq!(REGISTRY.len(), 30);
        for op in REGISTRY.operations() {
            assert_eq!(op.service, crate::SERVICE, "{op:?}");
            assert_eq!(op.version, crate::VERSION, "{op:?}");
            assert_eq!(
                op.request_typename,
                format!("tencentcloud.vpc.v20170312.{}Request", op.action)
            );
            assert_eq!(
                op.response_typename,
                format!("tencentcloud.vpc.v20170312.{}Response", op.action)
            );
        }
    }

    #[test]
    fn lookup() {
        assert_eq!(
            recognized_request_fields("DescribeAddresses"),
            Some(&["AddressIds", "Filters", "Offset", "Limit"][..])
        );
        assert_eq!(
            recognized_response_fields("AllocateAddresses"),
            Some(&["AddressSet", "TaskId", "RequestId"][..])
        );
        assert_eq!(
            recognized_request_fields("DescribeAccountAttributes").map(<[&str]>::len),
            Some(0)
        );
        assert_eq!(recognized_request_fields("describeaddresses"), None);
        assert_eq!(recognized_response_fields("RunInstances"), None);
    }
}
