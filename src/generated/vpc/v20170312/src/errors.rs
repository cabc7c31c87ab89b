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

//! The error codes returned by the VPC API.
//!
//! Compare these against [ServiceError::code][gax::error::service::ServiceError::code].
//! The codes shared by all products live in [gax::error::codes].
//!
//! # Example
//! ```
//! # use tencentcloud_vpc_v20170312::errors;
//! # use gax::error::service::ServiceError;
//! let details = ServiceError::new("InvalidVpcId.NotFound", "vpc-123 not found");
//! assert_eq!(details.code(), errors::INVALID_VPC_ID_NOT_FOUND);
//! assert_eq!(errors::category(details.code()), "InvalidVpcId");
//! ```

/// The caller is not authorized to perform the operation.
pub const AUTH_FAILURE_UNAUTHORIZED_OPERATION: &str = "AuthFailure.UnauthorizedOperation";

/// The network interface bound to the elastic IP cannot be found.
pub const FAILED_OPERATION_ADDRESS_ENI_INFO_NOT_FOUND: &str = "FailedOperation.AddressEniInfoNotFound";

/// The operation is not available in this region.
pub const FAILED_OPERATION_INVALID_REGION: &str = "FailedOperation.InvalidRegion";

/// The asynchronous task failed.
pub const FAILED_OPERATION_TASK_FAILED: &str = "FailedOperation.TaskFailed";

/// An internal module failed.
pub const INTERNAL_ERROR_MODULE_ERROR: &str = "InternalError.ModuleError";

/// The account does not support the operation.
pub const INVALID_ACCOUNT_NOT_SUPPORTED: &str = "InvalidAccount.NotSupported";

/// The elastic IP is blocked.
pub const INVALID_ADDRESS_ID_BLOCKED: &str = "InvalidAddressId.Blocked";

/// The elastic IP does not exist.
pub const INVALID_ADDRESS_ID_NOT_FOUND: &str = "InvalidAddressId.NotFound";

/// The elastic IP is isolated due to arrears.
pub const INVALID_ADDRESS_ID_STATE_IN_ARREARS: &str = "InvalidAddressIdState.InArrears";

/// The elastic IP is not in a state that allows the operation.
pub const INVALID_ADDRESS_STATE: &str = "InvalidAddressState";

/// The instance cannot be bound to an elastic IP.
pub const INVALID_INSTANCE_NOT_SUPPORTED: &str = "InvalidInstance.NotSupported";

/// The instance already has an elastic IP.
pub const INVALID_INSTANCE_ID_ALREADY_BIND_EIP: &str = "InvalidInstanceId.AlreadyBindEip";

/// The instance does not exist.
pub const INVALID_INSTANCE_ID_NOT_FOUND: &str = "InvalidInstanceId.NotFound";

/// Two parameters that cannot be combined were both set.
pub const INVALID_PARAMETER_COEXIST: &str = "InvalidParameter.Coexist";

/// A filter names an unsupported attribute.
pub const INVALID_PARAMETER_FILTER_INVALID_KEY: &str = "InvalidParameter.FilterInvalidKey";

/// A filter is not an object.
pub const INVALID_PARAMETER_FILTER_NOT_DICT: &str = "InvalidParameter.FilterNotDict";

/// An elastic IP id is malformed.
pub const INVALID_PARAMETER_VALUE_ADDRESS_ID_MALFORMED: &str = "InvalidParameterValue.AddressIdMalformed";

/// The bandwidth is outside of the supported range.
pub const INVALID_PARAMETER_VALUE_BANDWIDTH_OUT_OF_RANGE: &str = "InvalidParameterValue.BandwidthOutOfRange";

/// The CIDR block is not within the peer VPC.
pub const INVALID_PARAMETER_VALUE_CIDR_NOT_IN_PEER_VPC: &str = "InvalidParameterValue.CidrNotInPeerVpc";

/// The input contains duplicated values.
pub const INVALID_PARAMETER_VALUE_DUPLICATE: &str = "InvalidParameterValue.Duplicate";

/// The CDC instance id is invalid.
pub const INVALID_PARAMETER_VALUE_INVALID_DEDICATED_CLUSTER_ID: &str = "InvalidParameterValue.InvalidDedicatedClusterId";

/// A value is malformed.
pub const INVALID_PARAMETER_VALUE_MALFORMED: &str = "InvalidParameterValue.Malformed";

/// A value is outside of the allowed range.
pub const INVALID_PARAMETER_VALUE_RANGE: &str = "InvalidParameterValue.Range";

/// The subnet CIDR block overlaps an existing subnet.
pub const INVALID_PARAMETER_VALUE_SUBNET_CONFLICT: &str = "InvalidParameterValue.SubnetConflict";

/// The subnet CIDR block is outside of the VPC CIDR block.
pub const INVALID_PARAMETER_VALUE_SUBNET_RANGE: &str = "InvalidParameterValue.SubnetRange";

/// A value is too long.
pub const INVALID_PARAMETER_VALUE_TOO_LONG: &str = "InvalidParameterValue.TooLong";

/// The CIDR block overlaps another VPC.
pub const INVALID_PARAMETER_VALUE_VPC_CIDR_CONFLICT: &str = "InvalidParameterValue.VpcCidrConflict";

/// The availability zone is invalid.
pub const INVALID_PARAMETER_VALUE_ZONE: &str = "InvalidParameterValue.Zone";

/// A VPC id is malformed.
pub const INVALID_VPC_ID_MALFORMED: &str = "InvalidVpcId.Malformed";

/// The VPC does not exist.
pub const INVALID_VPC_ID_NOT_FOUND: &str = "InvalidVpcId.NotFound";

/// The account exceeded the quota of elastic IP releases.
pub const LIMIT_EXCEEDED_ACCOUNT_RETURN_QUOTA: &str = "LimitExceeded.AccountReturnQuota";

/// The account exceeded the quota of elastic IPs.
pub const LIMIT_EXCEEDED_ADDRESS_QUOTA_LIMIT_EXCEEDED: &str = "LimitExceeded.AddressQuotaLimitExceeded";

/// The VPC exceeded the quota of CIDR blocks.
pub const LIMIT_EXCEEDED_CIDR_BLOCK: &str = "LimitExceeded.CidrBlock";

/// The request exceeded the number of filters.
pub const LIMIT_EXCEEDED_NUMBER_OF_FILTERS: &str = "LimitExceeded.NumberOfFilters";

/// The security group exceeded the quota of rules.
pub const LIMIT_EXCEEDED_SECURITY_GROUP_POLICY_SET: &str = "LimitExceeded.SecurityGroupPolicySet";

/// The subnet CIDR block is too small or too large.
pub const LIMIT_EXCEEDED_SUBNET_CIDR_BLOCK: &str = "LimitExceeded.SubnetCidrBlock";

/// The resource exceeded the quota of tags.
pub const LIMIT_EXCEEDED_TAG_QUOTA_EXCEEDED: &str = "LimitExceeded.TagQuotaExceeded";

/// A required parameter is missing.
pub const MISSING_PARAMETER: &str = "MissingParameter";

/// The resource is in use.
pub const RESOURCE_IN_USE: &str = "ResourceInUse";

/// The VPC has no free CIDR range left.
pub const RESOURCE_INSUFFICIENT_CIDR_BLOCK: &str = "ResourceInsufficient.CidrBlock";

/// The resource does not exist.
pub const RESOURCE_NOT_FOUND: &str = "ResourceNotFound";

/// The account has not completed real-name verification.
pub const UNAUTHORIZED_OPERATION_NO_REAL_NAME_AUTHENTICATION: &str = "UnauthorizedOperation.NoRealNameAuthentication";

/// The elastic IP status does not allow the operation.
pub const UNSUPPORTED_OPERATION_ADDRESS_STATUS_NOT_PERMIT: &str = "UnsupportedOperation.AddressStatusNotPermit";

/// The resource belongs to another account.
pub const UNSUPPORTED_OPERATION_APP_ID_MISMATCH: &str = "UnsupportedOperation.AppIdMismatch";

/// The instance is already attached to a CCN.
pub const UNSUPPORTED_OPERATION_CCN_ATTACHED: &str = "UnsupportedOperation.CcnAttached";

/// The instance is not attached to the CCN.
pub const UNSUPPORTED_OPERATION_CCN_NOT_ATTACHED: &str = "UnsupportedOperation.CcnNotAttached";

/// The default route cannot be deleted.
pub const UNSUPPORTED_OPERATION_DEL_DEFAULT_ROUTE: &str = "UnsupportedOperation.DelDefaultRoute";

/// The instance state does not allow the operation.
pub const UNSUPPORTED_OPERATION_INSTANCE_STATE_NOT_SUPPORTED: &str = "UnsupportedOperation.InstanceStateNotSupported";

/// The action is not supported.
pub const UNSUPPORTED_OPERATION_INVALID_ACTION: &str = "UnsupportedOperation.InvalidAction";

/// The account owning the CCN is not a finance account.
pub const UNSUPPORTED_OPERATION_IS_NOT_FINANCE_ACCOUNT: &str = "UnsupportedOperation.IsNotFinanceAccount";

/// An unpaid order already exists for the resource.
pub const UNSUPPORTED_OPERATION_UNPAID_ORDER_ALREADY_EXISTS: &str = "UnsupportedOperation.UnpaidOrderAlreadyExists";

/// All the codes in this module, sorted.
pub const ALL: &[&str] = &[
    AUTH_FAILURE_UNAUTHORIZED_OPERATION,
    FAILED_OPERATION_ADDRESS_ENI_INFO_NOT_FOUND,
    FAILED_OPERATION_INVALID_REGION,
    FAILED_OPERATION_TASK_FAILED,
    INTERNAL_ERROR_MODULE_ERROR,
    INVALID_ACCOUNT_NOT_SUPPORTED,
    INVALID_ADDRESS_ID_BLOCKED,
    INVALID_ADDRESS_ID_NOT_FOUND,
    INVALID_ADDRESS_ID_STATE_IN_ARREARS,
    INVALID_ADDRESS_STATE,
    INVALID_INSTANCE_NOT_SUPPORTED,
    INVALID_INSTANCE_ID_ALREADY_BIND_EIP,
    INVALID_INSTANCE_ID_NOT_FOUND,
    INVALID_PARAMETER_COEXIST,
    INVALID_PARAMETER_FILTER_INVALID_KEY,
    INVALID_PARAMETER_FILTER_NOT_DICT,
    INVALID_PARAMETER_VALUE_ADDRESS_ID_MALFORMED,
    INVALID_PARAMETER_VALUE_BANDWIDTH_OUT_OF_RANGE,
    INVALID_PARAMETER_VALUE_CIDR_NOT_IN_PEER_VPC,
    INVALID_PARAMETER_VALUE_DUPLICATE,
    INVALID_PARAMETER_VALUE_INVALID_DEDICATED_CLUSTER_ID,
    INVALID_PARAMETER_VALUE_MALFORMED,
    INVALID_PARAMETER_VALUE_RANGE,
    INVALID_PARAMETER_VALUE_SUBNET_CONFLICT,
    INVALID_PARAMETER_VALUE_SUBNET_RANGE,
    INVALID_PARAMETER_VALUE_TOO_LONG,
    INVALID_PARAMETER_VALUE_VPC_CIDR_CONFLICT,
    INVALID_PARAMETER_VALUE_ZONE,
    INVALID_VPC_ID_MALFORMED,
    INVALID_VPC_ID_NOT_FOUND,
    LIMIT_EXCEEDED_ACCOUNT_RETURN_QUOTA,
    LIMIT_EXCEEDED_ADDRESS_QUOTA_LIMIT_EXCEEDED,
    LIMIT_EXCEEDED_CIDR_BLOCK,
    LIMIT_EXCEEDED_NUMBER_OF_FILTERS,
    LIMIT_EXCEEDED_SECURITY_GROUP_POLICY_SET,
    LIMIT_EXCEEDED_SUBNET_CIDR_BLOCK,
    LIMIT_EXCEEDED_TAG_QUOTA_EXCEEDED,
    MISSING_PARAMETER,
    RESOURCE_IN_USE,
    RESOURCE_INSUFFICIENT_CIDR_BLOCK,
    RESOURCE_NOT_FOUND,
    UNAUTHORIZED_OPERATION_NO_REAL_NAME_AUTHENTICATION,
    UNSUPPORTED_OPERATION_ADDRESS_STATUS_NOT_PERMIT,
    UNSUPPORTED_OPERATION_APP_ID_MISMATCH,
    UNSUPPORTED_OPERATION_CCN_ATTACHED,
    UNSUPPORTED_OPERATION_CCN_NOT_ATTACHED,
    UNSUPPORTED_OPERATION_DEL_DEFAULT_ROUTE,
    UNSUPPORTED_OPERATION_INSTANCE_STATE_NOT_SUPPORTED,
    UNSUPPORTED_OPERATION_INVALID_ACTION,
    UNSUPPORTED_OPERATION_IS_NOT_FINANCE_ACCOUNT,
    UNSUPPORTED_OPERATION_UNPAID_ORDER_ALREADY_EXISTS,
];

/// Returns the category of `code`, the part before the first `.`.
///
/// Codes without a subcategory, such as `ResourceNotFound`, are their own
/// category.
pub fn category(code: &str) -> &str {
    code.split_once('.').map_or(code, |(category, _)| category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use test_case::test_case;

    #[test]
    fn sorted_and_unique() {
        let unique = ALL.iter().collect::<BTreeSet<_>>();
        assert_eq!(unique.len(), ALL.len());
        assert!(ALL.is_sorted(), "{ALL:?}");
    }

    #[test_case(INVALID_VPC_ID_NOT_FOUND, "InvalidVpcId")]
    #[test_case(RESOURCE_NOT_FOUND, "ResourceNotFound")]
    #[test_case(INVALID_PARAMETER_VALUE_SUBNET_CONFLICT, "InvalidParameterValue")]
    #[test_case("", "")]
    fn categories(code: &str, want: &str) {
        assert_eq!(category(code), want);
    }

    #[test]
    fn shared_categories() {
        use gax::error::codes;
        assert_eq!(category(LIMIT_EXCEEDED_CIDR_BLOCK), codes::LIMIT_EXCEEDED);
        assert_eq!(category(MISSING_PARAMETER), codes::MISSING_PARAMETER);
        assert_eq!(category(UNSUPPORTED_OPERATION_CCN_ATTACHED), codes::UNSUPPORTED_OPERATION);
    }
}
