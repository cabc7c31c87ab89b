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

// Shapes shared by several operations.

/// The billing parameters of a prepaid elastic IP.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AddressChargePrepaid {
    /// The purchase period, in months.
    #[serde(rename = "Period", skip_serializing_if = "std::option::Option::is_none")]
    pub period: std::option::Option<i64>,

    /// Whether to renew automatically. `0` disables renewal, `1` enables it.
    #[serde(rename = "AutoRenewFlag", skip_serializing_if = "std::option::Option::is_none")]
    pub auto_renew_flag: std::option::Option<i64>,
}

impl AddressChargePrepaid {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [period][AddressChargePrepaid::period].
    pub fn set_period<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.period = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [period][AddressChargePrepaid::period].
    pub fn set_or_clear_period<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.period = v.map(|x| x.into());
        self
    }

    /// Sets the value of [auto_renew_flag][AddressChargePrepaid::auto_renew_flag].
    pub fn set_auto_renew_flag<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.auto_renew_flag = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [auto_renew_flag][AddressChargePrepaid::auto_renew_flag].
    pub fn set_or_clear_auto_renew_flag<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.auto_renew_flag = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for AddressChargePrepaid {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.AddressChargePrepaid"
    }
}

/// An elastic IP (EIP).
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Address {
    /// The id of the elastic IP, e.g. `eip-11112222`.
    #[serde(rename = "AddressId", skip_serializing_if = "std::option::Option::is_none")]
    pub address_id: std::option::Option<String>,

    /// The name of the elastic IP.
    #[serde(rename = "AddressName", skip_serializing_if = "std::option::Option::is_none")]
    pub address_name: std::option::Option<String>,

    /// The status, one of `CREATING`, `BINDING`, `BIND`, `UNBINDING`, `UNBIND`, `OFFLINING`, or `BIND_ENI`.
    #[serde(rename = "AddressStatus", skip_serializing_if = "std::option::Option::is_none")]
    pub address_status: std::option::Option<String>,

    /// The public IP address.
    #[serde(rename = "AddressIp", skip_serializing_if = "std::option::Option::is_none")]
    pub address_ip: std::option::Option<String>,

    /// The id of the bound resource, e.g. `ins-11112222`.
    #[serde(rename = "InstanceId", skip_serializing_if = "std::option::Option::is_none")]
    pub instance_id: std::option::Option<String>,

    /// The creation time, as reported by the service.
    #[serde(rename = "CreatedTime", skip_serializing_if = "std::option::Option::is_none")]
    pub created_time: std::option::Option<String>,

    /// The id of the bound elastic network interface.
    #[serde(rename = "NetworkInterfaceId", skip_serializing_if = "std::option::Option::is_none")]
    pub network_interface_id: std::option::Option<String>,

    /// The private IP address of the bound resource.
    #[serde(rename = "PrivateAddressIp", skip_serializing_if = "std::option::Option::is_none")]
    pub private_address_ip: std::option::Option<String>,

    /// True if the address is isolated due to arrears.
    #[serde(rename = "IsArrears", skip_serializing_if = "std::option::Option::is_none")]
    pub is_arrears: std::option::Option<bool>,

    /// True if the address is blocked.
    #[serde(rename = "IsBlocked", skip_serializing_if = "std::option::Option::is_none")]
    pub is_blocked: std::option::Option<bool>,

    /// True if the address supports direct connection.
    #[serde(rename = "IsEipDirectConnection", skip_serializing_if = "std::option::Option::is_none")]
    pub is_eip_direct_connection: std::option::Option<bool>,

    /// The address type, e.g. `EIP`, `AnycastEIP`, or `HighQualityEIP`.
    #[serde(rename = "AddressType", skip_serializing_if = "std::option::Option::is_none")]
    pub address_type: std::option::Option<String>,

    /// True if the address is released with the bound resource.
    #[serde(rename = "CascadeRelease", skip_serializing_if = "std::option::Option::is_none")]
    pub cascade_release: std::option::Option<bool>,

    /// The internet service provider, e.g. `BGP`.
    #[serde(rename = "InternetServiceProvider", skip_serializing_if = "std::option::Option::is_none")]
    pub internet_service_provider: std::option::Option<String>,

    /// The bandwidth cap, in Mbps.
    #[serde(rename = "Bandwidth", skip_serializing_if = "std::option::Option::is_none")]
    pub bandwidth: std::option::Option<u64>,

    /// The network billing mode.
    #[serde(rename = "InternetChargeType", skip_serializing_if = "std::option::Option::is_none")]
    pub internet_charge_type: std::option::Option<String>,

    /// The tags attached to the resource.
    #[serde(rename = "TagSet", skip_serializing_if = "std::option::Option::is_none")]
    pub tag_set: std::option::Option<std::vec::Vec<wkt::Tag>>,
}

impl Address {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [address_id][Address::address_id].
    pub fn set_address_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.address_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [address_id][Address::address_id].
    pub fn set_or_clear_address_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.address_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [address_name][Address::address_name].
    pub fn set_address_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.address_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [address_name][Address::address_name].
    pub fn set_or_clear_address_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.address_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [address_status][Address::address_status].
    pub fn set_address_status<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.address_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [address_status][Address::address_status].
    pub fn set_or_clear_address_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.address_status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [address_ip][Address::address_ip].
    pub fn set_address_ip<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.address_ip = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [address_ip][Address::address_ip].
    pub fn set_or_clear_address_ip<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.address_ip = v.map(|x| x.into());
        self
    }

    /// Sets the value of [instance_id][Address::instance_id].
    pub fn set_instance_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.instance_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [instance_id][Address::instance_id].
    pub fn set_or_clear_instance_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.instance_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [created_time][Address::created_time].
    pub fn set_created_time<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.created_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [created_time][Address::created_time].
    pub fn set_or_clear_created_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.created_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [network_interface_id][Address::network_interface_id].
    pub fn set_network_interface_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.network_interface_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network_interface_id][Address::network_interface_id].
    pub fn set_or_clear_network_interface_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.network_interface_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [private_address_ip][Address::private_address_ip].
    pub fn set_private_address_ip<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.private_address_ip = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [private_address_ip][Address::private_address_ip].
    pub fn set_or_clear_private_address_ip<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.private_address_ip = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_arrears][Address::is_arrears].
    pub fn set_is_arrears<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_arrears = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_arrears][Address::is_arrears].
    pub fn set_or_clear_is_arrears<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_arrears = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_blocked][Address::is_blocked].
    pub fn set_is_blocked<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_blocked = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_blocked][Address::is_blocked].
    pub fn set_or_clear_is_blocked<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_blocked = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_eip_direct_connection][Address::is_eip_direct_connection].
    pub fn set_is_eip_direct_connection<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_eip_direct_connection = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_eip_direct_connection][Address::is_eip_direct_connection].
    pub fn set_or_clear_is_eip_direct_connection<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_eip_direct_connection = v.map(|x| x.into());
        self
    }

    /// Sets the value of [address_type][Address::address_type].
    pub fn set_address_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.address_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [address_type][Address::address_type].
    pub fn set_or_clear_address_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.address_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [cascade_release][Address::cascade_release].
    pub fn set_cascade_release<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.cascade_release = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cascade_release][Address::cascade_release].
    pub fn set_or_clear_cascade_release<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.cascade_release = v.map(|x| x.into());
        self
    }

    /// Sets the value of [internet_service_provider][Address::internet_service_provider].
    pub fn set_internet_service_provider<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.internet_service_provider = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [internet_service_provider][Address::internet_service_provider].
    pub fn set_or_clear_internet_service_provider<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.internet_service_provider = v.map(|x| x.into());
        self
    }

    /// Sets the value of [bandwidth][Address::bandwidth].
    pub fn set_bandwidth<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.bandwidth = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bandwidth][Address::bandwidth].
    pub fn set_or_clear_bandwidth<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.bandwidth = v.map(|x| x.into());
        self
    }

    /// Sets the value of [internet_charge_type][Address::internet_charge_type].
    pub fn set_internet_charge_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.internet_charge_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [internet_charge_type][Address::internet_charge_type].
    pub fn set_or_clear_internet_charge_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.internet_charge_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tag_set][Address::tag_set].
    pub fn set_tag_set<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Tag>,
    {
        self.tag_set = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [tag_set][Address::tag_set].
    pub fn set_or_clear_tag_set<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Tag>,
    {
        self.tag_set = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl wkt::message::Message for Address {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.Address"
    }
}

/// A virtual private cloud.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Vpc {
    /// The name of the VPC.
    #[serde(rename = "VpcName", skip_serializing_if = "std::option::Option::is_none")]
    pub vpc_name: std::option::Option<String>,

    /// The id of the VPC, e.g. `vpc-azd4dt1c`.
    #[serde(rename = "VpcId", skip_serializing_if = "std::option::Option::is_none")]
    pub vpc_id: std::option::Option<String>,

    /// The IPv4 CIDR block of the VPC.
    #[serde(rename = "CidrBlock", skip_serializing_if = "std::option::Option::is_none")]
    pub cidr_block: std::option::Option<String>,

    /// True for the default VPC.
    #[serde(rename = "IsDefault", skip_serializing_if = "std::option::Option::is_none")]
    pub is_default: std::option::Option<bool>,

    /// True if multicast is enabled.
    #[serde(rename = "EnableMulticast", skip_serializing_if = "std::option::Option::is_none")]
    pub enable_multicast: std::option::Option<bool>,

    /// The creation time, as reported by the service.
    #[serde(rename = "CreatedTime", skip_serializing_if = "std::option::Option::is_none")]
    pub created_time: std::option::Option<String>,

    /// The DNS servers.
    #[serde(rename = "DnsServerSet", skip_serializing_if = "std::option::Option::is_none")]
    pub dns_server_set: std::option::Option<std::vec::Vec<String>>,

    /// The DHCP domain name.
    #[serde(rename = "DomainName", skip_serializing_if = "std::option::Option::is_none")]
    pub domain_name: std::option::Option<String>,

    /// The id of the DHCP options set.
    #[serde(rename = "DhcpOptionsId", skip_serializing_if = "std::option::Option::is_none")]
    pub dhcp_options_id: std::option::Option<String>,

    /// True if DHCP is enabled.
    #[serde(rename = "EnableDhcp", skip_serializing_if = "std::option::Option::is_none")]
    pub enable_dhcp: std::option::Option<bool>,

    /// The IPv6 CIDR block of the VPC.
    #[serde(rename = "Ipv6CidrBlock", skip_serializing_if = "std::option::Option::is_none")]
    pub ipv6_cidr_block: std::option::Option<String>,

    /// The tags attached to the resource.
    #[serde(rename = "TagSet", skip_serializing_if = "std::option::Option::is_none")]
    pub tag_set: std::option::Option<std::vec::Vec<wkt::Tag>>,
}

impl Vpc {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [vpc_name][Vpc::vpc_name].
    pub fn set_vpc_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.vpc_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vpc_name][Vpc::vpc_name].
    pub fn set_or_clear_vpc_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.vpc_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [vpc_id][Vpc::vpc_id].
    pub fn set_vpc_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.vpc_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vpc_id][Vpc::vpc_id].
    pub fn set_or_clear_vpc_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.vpc_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [cidr_block][Vpc::cidr_block].
    pub fn set_cidr_block<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.cidr_block = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cidr_block][Vpc::cidr_block].
    pub fn set_or_clear_cidr_block<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.cidr_block = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_default][Vpc::is_default].
    pub fn set_is_default<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_default = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_default][Vpc::is_default].
    pub fn set_or_clear_is_default<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_default = v.map(|x| x.into());
        self
    }

    /// Sets the value of [enable_multicast][Vpc::enable_multicast].
    pub fn set_enable_multicast<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.enable_multicast = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enable_multicast][Vpc::enable_multicast].
    pub fn set_or_clear_enable_multicast<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enable_multicast = v.map(|x| x.into());
        self
    }

    /// Sets the value of [created_time][Vpc::created_time].
    pub fn set_created_time<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.created_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [created_time][Vpc::created_time].
    pub fn set_or_clear_created_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.created_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [dns_server_set][Vpc::dns_server_set].
    pub fn set_dns_server_set<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.dns_server_set = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [dns_server_set][Vpc::dns_server_set].
    pub fn set_or_clear_dns_server_set<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.dns_server_set = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [domain_name][Vpc::domain_name].
    pub fn set_domain_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.domain_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [domain_name][Vpc::domain_name].
    pub fn set_or_clear_domain_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.domain_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [dhcp_options_id][Vpc::dhcp_options_id].
    pub fn set_dhcp_options_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.dhcp_options_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [dhcp_options_id][Vpc::dhcp_options_id].
    pub fn set_or_clear_dhcp_options_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.dhcp_options_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [enable_dhcp][Vpc::enable_dhcp].
    pub fn set_enable_dhcp<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.enable_dhcp = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enable_dhcp][Vpc::enable_dhcp].
    pub fn set_or_clear_enable_dhcp<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enable_dhcp = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ipv6_cidr_block][Vpc::ipv6_cidr_block].
    pub fn set_ipv6_cidr_block<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.ipv6_cidr_block = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ipv6_cidr_block][Vpc::ipv6_cidr_block].
    pub fn set_or_clear_ipv6_cidr_block<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.ipv6_cidr_block = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tag_set][Vpc::tag_set].
    pub fn set_tag_set<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Tag>,
    {
        self.tag_set = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [tag_set][Vpc::tag_set].
    pub fn set_or_clear_tag_set<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Tag>,
    {
        self.tag_set = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl wkt::message::Message for Vpc {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.Vpc"
    }
}

/// A subnet within a VPC.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Subnet {
    /// The id of the VPC containing the subnet.
    #[serde(rename = "VpcId", skip_serializing_if = "std::option::Option::is_none")]
    pub vpc_id: std::option::Option<String>,

    /// The id of the subnet, e.g. `subnet-12345678`.
    #[serde(rename = "SubnetId", skip_serializing_if = "std::option::Option::is_none")]
    pub subnet_id: std::option::Option<String>,

    /// The name of the subnet.
    #[serde(rename = "SubnetName", skip_serializing_if = "std::option::Option::is_none")]
    pub subnet_name: std::option::Option<String>,

    /// The IPv4 CIDR block of the subnet.
    #[serde(rename = "CidrBlock", skip_serializing_if = "std::option::Option::is_none")]
    pub cidr_block: std::option::Option<String>,

    /// True for the default subnet.
    #[serde(rename = "IsDefault", skip_serializing_if = "std::option::Option::is_none")]
    pub is_default: std::option::Option<bool>,

    /// True if broadcast is enabled.
    #[serde(rename = "EnableBroadcast", skip_serializing_if = "std::option::Option::is_none")]
    pub enable_broadcast: std::option::Option<bool>,

    /// The availability zone, e.g. `ap-guangzhou-3`.
    #[serde(rename = "Zone", skip_serializing_if = "std::option::Option::is_none")]
    pub zone: std::option::Option<String>,

    /// The id of the associated route table.
    #[serde(rename = "RouteTableId", skip_serializing_if = "std::option::Option::is_none")]
    pub route_table_id: std::option::Option<String>,

    /// The creation time, as reported by the service.
    #[serde(rename = "CreatedTime", skip_serializing_if = "std::option::Option::is_none")]
    pub created_time: std::option::Option<String>,

    /// The number of available IP addresses.
    #[serde(rename = "AvailableIpAddressCount", skip_serializing_if = "std::option::Option::is_none")]
    pub available_ip_address_count: std::option::Option<u64>,

    /// The IPv6 CIDR block of the subnet.
    #[serde(rename = "Ipv6CidrBlock", skip_serializing_if = "std::option::Option::is_none")]
    pub ipv6_cidr_block: std::option::Option<String>,

    /// The id of the associated network ACL.
    #[serde(rename = "NetworkAclId", skip_serializing_if = "std::option::Option::is_none")]
    pub network_acl_id: std::option::Option<String>,

    /// True if this is a SNAT subnet.
    #[serde(rename = "IsRemoteVpcSnat", skip_serializing_if = "std::option::Option::is_none")]
    pub is_remote_vpc_snat: std::option::Option<bool>,

    /// The total number of IP addresses.
    #[serde(rename = "TotalIpAddressCount", skip_serializing_if = "std::option::Option::is_none")]
    pub total_ip_address_count: std::option::Option<u64>,

    /// The tags attached to the resource.
    #[serde(rename = "TagSet", skip_serializing_if = "std::option::Option::is_none")]
    pub tag_set: std::option::Option<std::vec::Vec<wkt::Tag>>,
}

impl Subnet {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [vpc_id][Subnet::vpc_id].
    pub fn set_vpc_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.vpc_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vpc_id][Subnet::vpc_id].
    pub fn set_or_clear_vpc_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.vpc_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [subnet_id][Subnet::subnet_id].
    pub fn set_subnet_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.subnet_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [subnet_id][Subnet::subnet_id].
    pub fn set_or_clear_subnet_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.subnet_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [subnet_name][Subnet::subnet_name].
    pub fn set_subnet_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.subnet_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [subnet_name][Subnet::subnet_name].
    pub fn set_or_clear_subnet_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.subnet_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [cidr_block][Subnet::cidr_block].
    pub fn set_cidr_block<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.cidr_block = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cidr_block][Subnet::cidr_block].
    pub fn set_or_clear_cidr_block<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.cidr_block = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_default][Subnet::is_default].
    pub fn set_is_default<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_default = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_default][Subnet::is_default].
    pub fn set_or_clear_is_default<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_default = v.map(|x| x.into());
        self
    }

    /// Sets the value of [enable_broadcast][Subnet::enable_broadcast].
    pub fn set_enable_broadcast<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.enable_broadcast = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enable_broadcast][Subnet::enable_broadcast].
    pub fn set_or_clear_enable_broadcast<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enable_broadcast = v.map(|x| x.into());
        self
    }

    /// Sets the value of [zone][Subnet::zone].
    pub fn set_zone<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.zone = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [zone][Subnet::zone].
    pub fn set_or_clear_zone<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.zone = v.map(|x| x.into());
        self
    }

    /// Sets the value of [route_table_id][Subnet::route_table_id].
    pub fn set_route_table_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.route_table_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [route_table_id][Subnet::route_table_id].
    pub fn set_or_clear_route_table_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.route_table_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [created_time][Subnet::created_time].
    pub fn set_created_time<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.created_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [created_time][Subnet::created_time].
    pub fn set_or_clear_created_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.created_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [available_ip_address_count][Subnet::available_ip_address_count].
    pub fn set_available_ip_address_count<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.available_ip_address_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [available_ip_address_count][Subnet::available_ip_address_count].
    pub fn set_or_clear_available_ip_address_count<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.available_ip_address_count = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ipv6_cidr_block][Subnet::ipv6_cidr_block].
    pub fn set_ipv6_cidr_block<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.ipv6_cidr_block = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ipv6_cidr_block][Subnet::ipv6_cidr_block].
    pub fn set_or_clear_ipv6_cidr_block<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.ipv6_cidr_block = v.map(|x| x.into());
        self
    }

    /// Sets the value of [network_acl_id][Subnet::network_acl_id].
    pub fn set_network_acl_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.network_acl_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network_acl_id][Subnet::network_acl_id].
    pub fn set_or_clear_network_acl_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.network_acl_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_remote_vpc_snat][Subnet::is_remote_vpc_snat].
    pub fn set_is_remote_vpc_snat<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_remote_vpc_snat = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_remote_vpc_snat][Subnet::is_remote_vpc_snat].
    pub fn set_or_clear_is_remote_vpc_snat<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_remote_vpc_snat = v.map(|x| x.into());
        self
    }

    /// Sets the value of [total_ip_address_count][Subnet::total_ip_address_count].
    pub fn set_total_ip_address_count<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.total_ip_address_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [total_ip_address_count][Subnet::total_ip_address_count].
    pub fn set_or_clear_total_ip_address_count<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.total_ip_address_count = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tag_set][Subnet::tag_set].
    pub fn set_tag_set<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Tag>,
    {
        self.tag_set = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [tag_set][Subnet::tag_set].
    pub fn set_or_clear_tag_set<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Tag>,
    {
        self.tag_set = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl wkt::message::Message for Subnet {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.Subnet"
    }
}

/// The parameters of a subnet created in a batch.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct SubnetInput {
    /// The IPv4 CIDR block of the subnet.
    #[serde(rename = "CidrBlock", skip_serializing_if = "std::option::Option::is_none")]
    pub cidr_block: std::option::Option<String>,

    /// The name of the subnet.
    #[serde(rename = "SubnetName", skip_serializing_if = "std::option::Option::is_none")]
    pub subnet_name: std::option::Option<String>,

    /// The availability zone.
    #[serde(rename = "Zone", skip_serializing_if = "std::option::Option::is_none")]
    pub zone: std::option::Option<String>,

    /// The id of the route table to associate.
    #[serde(rename = "RouteTableId", skip_serializing_if = "std::option::Option::is_none")]
    pub route_table_id: std::option::Option<String>,
}

impl SubnetInput {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [cidr_block][SubnetInput::cidr_block].
    pub fn set_cidr_block<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.cidr_block = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cidr_block][SubnetInput::cidr_block].
    pub fn set_or_clear_cidr_block<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.cidr_block = v.map(|x| x.into());
        self
    }

    /// Sets the value of [subnet_name][SubnetInput::subnet_name].
    pub fn set_subnet_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.subnet_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [subnet_name][SubnetInput::subnet_name].
    pub fn set_or_clear_subnet_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.subnet_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [zone][SubnetInput::zone].
    pub fn set_zone<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.zone = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [zone][SubnetInput::zone].
    pub fn set_or_clear_zone<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.zone = v.map(|x| x.into());
        self
    }

    /// Sets the value of [route_table_id][SubnetInput::route_table_id].
    pub fn set_route_table_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.route_table_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [route_table_id][SubnetInput::route_table_id].
    pub fn set_or_clear_route_table_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.route_table_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for SubnetInput {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.SubnetInput"
    }
}

/// A cloud connect network (CCN).
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Ccn {
    /// The id of the CCN, e.g. `ccn-f49l6u0z`.
    #[serde(rename = "CcnId", skip_serializing_if = "std::option::Option::is_none")]
    pub ccn_id: std::option::Option<String>,

    /// The name of the CCN.
    #[serde(rename = "CcnName", skip_serializing_if = "std::option::Option::is_none")]
    pub ccn_name: std::option::Option<String>,

    /// The description of the CCN.
    #[serde(rename = "CcnDescription", skip_serializing_if = "std::option::Option::is_none")]
    pub ccn_description: std::option::Option<String>,

    /// The number of attached instances.
    #[serde(rename = "InstanceCount", skip_serializing_if = "std::option::Option::is_none")]
    pub instance_count: std::option::Option<u64>,

    /// The creation time, as reported by the service.
    #[serde(rename = "CreateTime", skip_serializing_if = "std::option::Option::is_none")]
    pub create_time: std::option::Option<String>,

    /// The state, `ISOLATED` or `AVAILABLE`.
    #[serde(rename = "State", skip_serializing_if = "std::option::Option::is_none")]
    pub state: std::option::Option<String>,

    /// The service quality, one of `PT`, `AU`, or `AG`.
    #[serde(rename = "QosLevel", skip_serializing_if = "std::option::Option::is_none")]
    pub qos_level: std::option::Option<String>,

    /// The billing mode, `PREPAID` or `POSTPAID`.
    #[serde(rename = "InstanceChargeType", skip_serializing_if = "std::option::Option::is_none")]
    pub instance_charge_type: std::option::Option<String>,

    /// The bandwidth limit type, `OUTER_REGION_LIMIT` or `INTER_REGION_LIMIT`.
    #[serde(rename = "BandwidthLimitType", skip_serializing_if = "std::option::Option::is_none")]
    pub bandwidth_limit_type: std::option::Option<String>,

    /// The tags attached to the resource.
    #[serde(rename = "TagSet", skip_serializing_if = "std::option::Option::is_none")]
    pub tag_set: std::option::Option<std::vec::Vec<wkt::Tag>>,

    /// True if route priority is supported.
    #[serde(rename = "RoutePriorityFlag", skip_serializing_if = "std::option::Option::is_none")]
    pub route_priority_flag: std::option::Option<bool>,
}

impl Ccn {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [ccn_id][Ccn::ccn_id].
    pub fn set_ccn_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.ccn_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ccn_id][Ccn::ccn_id].
    pub fn set_or_clear_ccn_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.ccn_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ccn_name][Ccn::ccn_name].
    pub fn set_ccn_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.ccn_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ccn_name][Ccn::ccn_name].
    pub fn set_or_clear_ccn_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.ccn_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ccn_description][Ccn::ccn_description].
    pub fn set_ccn_description<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.ccn_description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ccn_description][Ccn::ccn_description].
    pub fn set_or_clear_ccn_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.ccn_description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [instance_count][Ccn::instance_count].
    pub fn set_instance_count<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.instance_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [instance_count][Ccn::instance_count].
    pub fn set_or_clear_instance_count<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.instance_count = v.map(|x| x.into());
        self
    }

    /// Sets the value of [create_time][Ccn::create_time].
    pub fn set_create_time<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.create_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [create_time][Ccn::create_time].
    pub fn set_or_clear_create_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.create_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [state][Ccn::state].
    pub fn set_state<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.state = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [state][Ccn::state].
    pub fn set_or_clear_state<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.state = v.map(|x| x.into());
        self
    }

    /// Sets the value of [qos_level][Ccn::qos_level].
    pub fn set_qos_level<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.qos_level = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [qos_level][Ccn::qos_level].
    pub fn set_or_clear_qos_level<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.qos_level = v.map(|x| x.into());
        self
    }

    /// Sets the value of [instance_charge_type][Ccn::instance_charge_type].
    pub fn set_instance_charge_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.instance_charge_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [instance_charge_type][Ccn::instance_charge_type].
    pub fn set_or_clear_instance_charge_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.instance_charge_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [bandwidth_limit_type][Ccn::bandwidth_limit_type].
    pub fn set_bandwidth_limit_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.bandwidth_limit_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bandwidth_limit_type][Ccn::bandwidth_limit_type].
    pub fn set_or_clear_bandwidth_limit_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.bandwidth_limit_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tag_set][Ccn::tag_set].
    pub fn set_tag_set<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Tag>,
    {
        self.tag_set = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [tag_set][Ccn::tag_set].
    pub fn set_or_clear_tag_set<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Tag>,
    {
        self.tag_set = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [route_priority_flag][Ccn::route_priority_flag].
    pub fn set_route_priority_flag<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.route_priority_flag = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [route_priority_flag][Ccn::route_priority_flag].
    pub fn set_or_clear_route_priority_flag<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.route_priority_flag = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for Ccn {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.CCN"
    }
}

/// An instance attached, or to attach, to a CCN.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CcnInstance {
    /// The id of the instance, e.g. `vpc-abcd1234`.
    #[serde(rename = "InstanceId", skip_serializing_if = "std::option::Option::is_none")]
    pub instance_id: std::option::Option<String>,

    /// The region of the instance, e.g. `ap-guangzhou`.
    #[serde(rename = "InstanceRegion", skip_serializing_if = "std::option::Option::is_none")]
    pub instance_region: std::option::Option<String>,

    /// The instance type, e.g. `VPC`, `DIRECTCONNECT`, or `BMVPC`.
    #[serde(rename = "InstanceType", skip_serializing_if = "std::option::Option::is_none")]
    pub instance_type: std::option::Option<String>,

    /// A description of the attachment.
    #[serde(rename = "Description", skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<String>,

    /// The id of the CCN route table to associate.
    #[serde(rename = "RouteTableId", skip_serializing_if = "std::option::Option::is_none")]
    pub route_table_id: std::option::Option<String>,
}

impl CcnInstance {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [instance_id][CcnInstance::instance_id].
    pub fn set_instance_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.instance_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [instance_id][CcnInstance::instance_id].
    pub fn set_or_clear_instance_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.instance_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [instance_region][CcnInstance::instance_region].
    pub fn set_instance_region<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.instance_region = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [instance_region][CcnInstance::instance_region].
    pub fn set_or_clear_instance_region<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.instance_region = v.map(|x| x.into());
        self
    }

    /// Sets the value of [instance_type][CcnInstance::instance_type].
    pub fn set_instance_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.instance_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [instance_type][CcnInstance::instance_type].
    pub fn set_or_clear_instance_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.instance_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][CcnInstance::description].
    pub fn set_description<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][CcnInstance::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [route_table_id][CcnInstance::route_table_id].
    pub fn set_route_table_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.route_table_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [route_table_id][CcnInstance::route_table_id].
    pub fn set_or_clear_route_table_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.route_table_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for CcnInstance {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.CcnInstance"
    }
}

/// A security group.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct SecurityGroup {
    /// The id of the security group, e.g. `sg-ohuuioma`.
    #[serde(rename = "SecurityGroupId", skip_serializing_if = "std::option::Option::is_none")]
    pub security_group_id: std::option::Option<String>,

    /// The name of the security group.
    #[serde(rename = "SecurityGroupName", skip_serializing_if = "std::option::Option::is_none")]
    pub security_group_name: std::option::Option<String>,

    /// The description of the security group.
    #[serde(rename = "SecurityGroupDesc", skip_serializing_if = "std::option::Option::is_none")]
    pub security_group_desc: std::option::Option<String>,

    /// The project id.
    #[serde(rename = "ProjectId", skip_serializing_if = "std::option::Option::is_none")]
    pub project_id: std::option::Option<String>,

    /// True for the default security group.
    #[serde(rename = "IsDefault", skip_serializing_if = "std::option::Option::is_none")]
    pub is_default: std::option::Option<bool>,

    /// The creation time, as reported by the service.
    #[serde(rename = "CreatedTime", skip_serializing_if = "std::option::Option::is_none")]
    pub created_time: std::option::Option<String>,

    /// The tags attached to the resource.
    #[serde(rename = "TagSet", skip_serializing_if = "std::option::Option::is_none")]
    pub tag_set: std::option::Option<std::vec::Vec<wkt::Tag>>,
}

impl SecurityGroup {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [security_group_id][SecurityGroup::security_group_id].
    pub fn set_security_group_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.security_group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [security_group_id][SecurityGroup::security_group_id].
    pub fn set_or_clear_security_group_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.security_group_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [security_group_name][SecurityGroup::security_group_name].
    pub fn set_security_group_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.security_group_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [security_group_name][SecurityGroup::security_group_name].
    pub fn set_or_clear_security_group_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.security_group_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [security_group_desc][SecurityGroup::security_group_desc].
    pub fn set_security_group_desc<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.security_group_desc = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [security_group_desc][SecurityGroup::security_group_desc].
    pub fn set_or_clear_security_group_desc<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.security_group_desc = v.map(|x| x.into());
        self
    }

    /// Sets the value of [project_id][SecurityGroup::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [project_id][SecurityGroup::project_id].
    pub fn set_or_clear_project_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.project_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [is_default][SecurityGroup::is_default].
    pub fn set_is_default<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_default = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [is_default][SecurityGroup::is_default].
    pub fn set_or_clear_is_default<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_default = v.map(|x| x.into());
        self
    }

    /// Sets the value of [created_time][SecurityGroup::created_time].
    pub fn set_created_time<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.created_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [created_time][SecurityGroup::created_time].
    pub fn set_or_clear_created_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.created_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tag_set][SecurityGroup::tag_set].
    pub fn set_tag_set<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Tag>,
    {
        self.tag_set = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [tag_set][SecurityGroup::tag_set].
    pub fn set_or_clear_tag_set<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Tag>,
    {
        self.tag_set = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl wkt::message::Message for SecurityGroup {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.SecurityGroup"
    }
}

/// A security group rule.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct SecurityGroupPolicy {
    /// The index of the rule, starting at `0`.
    #[serde(rename = "PolicyIndex", skip_serializing_if = "std::option::Option::is_none")]
    pub policy_index: std::option::Option<i64>,

    /// The protocol, one of `TCP`, `UDP`, `ICMP`, `ICMPv6`, or `ALL`.
    #[serde(rename = "Protocol", skip_serializing_if = "std::option::Option::is_none")]
    pub protocol: std::option::Option<String>,

    /// The port or port range, e.g. `80`, `8000-8010`, or `ALL`.
    #[serde(rename = "Port", skip_serializing_if = "std::option::Option::is_none")]
    pub port: std::option::Option<String>,

    /// The source or destination IPv4 CIDR block.
    #[serde(rename = "CidrBlock", skip_serializing_if = "std::option::Option::is_none")]
    pub cidr_block: std::option::Option<String>,

    /// The source or destination IPv6 CIDR block.
    #[serde(rename = "Ipv6CidrBlock", skip_serializing_if = "std::option::Option::is_none")]
    pub ipv6_cidr_block: std::option::Option<String>,

    /// The source or destination security group.
    #[serde(rename = "SecurityGroupId", skip_serializing_if = "std::option::Option::is_none")]
    pub security_group_id: std::option::Option<String>,

    /// The action, `ACCEPT` or `DROP`.
    #[serde(rename = "Action", skip_serializing_if = "std::option::Option::is_none")]
    pub action: std::option::Option<String>,

    /// The description of the rule.
    #[serde(rename = "PolicyDescription", skip_serializing_if = "std::option::Option::is_none")]
    pub policy_description: std::option::Option<String>,

    /// The last modification time.
    #[serde(rename = "ModifyTime", skip_serializing_if = "std::option::Option::is_none")]
    pub modify_time: std::option::Option<String>,
}

impl SecurityGroupPolicy {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [policy_index][SecurityGroupPolicy::policy_index].
    pub fn set_policy_index<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.policy_index = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [policy_index][SecurityGroupPolicy::policy_index].
    pub fn set_or_clear_policy_index<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.policy_index = v.map(|x| x.into());
        self
    }

    /// Sets the value of [protocol][SecurityGroupPolicy::protocol].
    pub fn set_protocol<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.protocol = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [protocol][SecurityGroupPolicy::protocol].
    pub fn set_or_clear_protocol<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.protocol = v.map(|x| x.into());
        self
    }

    /// Sets the value of [port][SecurityGroupPolicy::port].
    pub fn set_port<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.port = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [port][SecurityGroupPolicy::port].
    pub fn set_or_clear_port<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.port = v.map(|x| x.into());
        self
    }

    /// Sets the value of [cidr_block][SecurityGroupPolicy::cidr_block].
    pub fn set_cidr_block<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.cidr_block = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cidr_block][SecurityGroupPolicy::cidr_block].
    pub fn set_or_clear_cidr_block<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.cidr_block = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ipv6_cidr_block][SecurityGroupPolicy::ipv6_cidr_block].
    pub fn set_ipv6_cidr_block<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.ipv6_cidr_block = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ipv6_cidr_block][SecurityGroupPolicy::ipv6_cidr_block].
    pub fn set_or_clear_ipv6_cidr_block<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.ipv6_cidr_block = v.map(|x| x.into());
        self
    }

    /// Sets the value of [security_group_id][SecurityGroupPolicy::security_group_id].
    pub fn set_security_group_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.security_group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [security_group_id][SecurityGroupPolicy::security_group_id].
    pub fn set_or_clear_security_group_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.security_group_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [action][SecurityGroupPolicy::action].
    pub fn set_action<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.action = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [action][SecurityGroupPolicy::action].
    pub fn set_or_clear_action<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.action = v.map(|x| x.into());
        self
    }

    /// Sets the value of [policy_description][SecurityGroupPolicy::policy_description].
    pub fn set_policy_description<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.policy_description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [policy_description][SecurityGroupPolicy::policy_description].
    pub fn set_or_clear_policy_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.policy_description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [modify_time][SecurityGroupPolicy::modify_time].
    pub fn set_modify_time<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.modify_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [modify_time][SecurityGroupPolicy::modify_time].
    pub fn set_or_clear_modify_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.modify_time = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for SecurityGroupPolicy {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.SecurityGroupPolicy"
    }
}

/// The rules of a security group.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct SecurityGroupPolicySet {
    /// The version of the rules, incremented on each change.
    #[serde(rename = "Version", skip_serializing_if = "std::option::Option::is_none")]
    pub version: std::option::Option<String>,

    /// The outbound rules.
    #[serde(rename = "Egress", skip_serializing_if = "std::option::Option::is_none")]
    pub egress: std::option::Option<std::vec::Vec<crate::model::SecurityGroupPolicy>>,

    /// The inbound rules.
    #[serde(rename = "Ingress", skip_serializing_if = "std::option::Option::is_none")]
    pub ingress: std::option::Option<std::vec::Vec<crate::model::SecurityGroupPolicy>>,
}

impl SecurityGroupPolicySet {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [version][SecurityGroupPolicySet::version].
    pub fn set_version<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.version = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [version][SecurityGroupPolicySet::version].
    pub fn set_or_clear_version<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.version = v.map(|x| x.into());
        self
    }

    /// Sets the value of [egress][SecurityGroupPolicySet::egress].
    pub fn set_egress<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::SecurityGroupPolicy>,
    {
        self.egress = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [egress][SecurityGroupPolicySet::egress].
    pub fn set_or_clear_egress<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::SecurityGroupPolicy>,
    {
        self.egress = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [ingress][SecurityGroupPolicySet::ingress].
    pub fn set_ingress<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::SecurityGroupPolicy>,
    {
        self.ingress = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [ingress][SecurityGroupPolicySet::ingress].
    pub fn set_or_clear_ingress<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::SecurityGroupPolicy>,
    {
        self.ingress = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl wkt::message::Message for SecurityGroupPolicySet {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.SecurityGroupPolicySet"
    }
}

/// A route in a route table.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Route {
    /// The destination IPv4 CIDR block.
    #[serde(rename = "DestinationCidrBlock", skip_serializing_if = "std::option::Option::is_none")]
    pub destination_cidr_block: std::option::Option<String>,

    /// The next hop type, e.g. `CVM`, `VPN`, `NAT`, or `CCN`.
    #[serde(rename = "GatewayType", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_type: std::option::Option<String>,

    /// The id of the next hop.
    #[serde(rename = "GatewayId", skip_serializing_if = "std::option::Option::is_none")]
    pub gateway_id: std::option::Option<String>,

    /// The id of the route, unique within the route table.
    #[serde(rename = "RouteId", skip_serializing_if = "std::option::Option::is_none")]
    pub route_id: std::option::Option<u64>,

    /// The description of the route.
    #[serde(rename = "RouteDescription", skip_serializing_if = "std::option::Option::is_none")]
    pub route_description: std::option::Option<String>,

    /// True if the route is enabled.
    #[serde(rename = "Enabled", skip_serializing_if = "std::option::Option::is_none")]
    pub enabled: std::option::Option<bool>,

    /// The route type, one of `USER`, `NETD`, or `CCN`.
    #[serde(rename = "RouteType", skip_serializing_if = "std::option::Option::is_none")]
    pub route_type: std::option::Option<String>,

    /// The id of the route table.
    #[serde(rename = "RouteTableId", skip_serializing_if = "std::option::Option::is_none")]
    pub route_table_id: std::option::Option<String>,

    /// The destination IPv6 CIDR block.
    #[serde(rename = "DestinationIpv6CidrBlock", skip_serializing_if = "std::option::Option::is_none")]
    pub destination_ipv6_cidr_block: std::option::Option<String>,

    /// The unique id of the route, e.g. `rti-i8bap903`.
    #[serde(rename = "RouteItemId", skip_serializing_if = "std::option::Option::is_none")]
    pub route_item_id: std::option::Option<String>,
}

impl Route {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [destination_cidr_block][Route::destination_cidr_block].
    pub fn set_destination_cidr_block<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.destination_cidr_block = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [destination_cidr_block][Route::destination_cidr_block].
    pub fn set_or_clear_destination_cidr_block<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.destination_cidr_block = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gateway_type][Route::gateway_type].
    pub fn set_gateway_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.gateway_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_type][Route::gateway_type].
    pub fn set_or_clear_gateway_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.gateway_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gateway_id][Route::gateway_id].
    pub fn set_gateway_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.gateway_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gateway_id][Route::gateway_id].
    pub fn set_or_clear_gateway_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.gateway_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [route_id][Route::route_id].
    pub fn set_route_id<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.route_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [route_id][Route::route_id].
    pub fn set_or_clear_route_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.route_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [route_description][Route::route_description].
    pub fn set_route_description<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.route_description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [route_description][Route::route_description].
    pub fn set_or_clear_route_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.route_description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [enabled][Route::enabled].
    pub fn set_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enabled][Route::enabled].
    pub fn set_or_clear_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [route_type][Route::route_type].
    pub fn set_route_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.route_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [route_type][Route::route_type].
    pub fn set_or_clear_route_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.route_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [route_table_id][Route::route_table_id].
    pub fn set_route_table_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.route_table_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [route_table_id][Route::route_table_id].
    pub fn set_or_clear_route_table_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.route_table_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [destination_ipv6_cidr_block][Route::destination_ipv6_cidr_block].
    pub fn set_destination_ipv6_cidr_block<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.destination_ipv6_cidr_block = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [destination_ipv6_cidr_block][Route::destination_ipv6_cidr_block].
    pub fn set_or_clear_destination_ipv6_cidr_block<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.destination_ipv6_cidr_block = v.map(|x| x.into());
        self
    }

    /// Sets the value of [route_item_id][Route::route_item_id].
    pub fn set_route_item_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.route_item_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [route_item_id][Route::route_item_id].
    pub fn set_or_clear_route_item_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.route_item_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for Route {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.Route"
    }
}

/// The association between a route table and a subnet.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct RouteTableAssociation {
    /// The id of the subnet.
    #[serde(rename = "SubnetId", skip_serializing_if = "std::option::Option::is_none")]
    pub subnet_id: std::option::Option<String>,

    /// The id of the route table.
    #[serde(rename = "RouteTableId", skip_serializing_if = "std::option::Option::is_none")]
    pub route_table_id: std::option::Option<String>,
}

impl RouteTableAssociation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [subnet_id][RouteTableAssociation::subnet_id].
    pub fn set_subnet_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.subnet_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [subnet_id][RouteTableAssociation::subnet_id].
    pub fn set_or_clear_subnet_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.subnet_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [route_table_id][RouteTableAssociation::route_table_id].
    pub fn set_route_table_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.route_table_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [route_table_id][RouteTableAssociation::route_table_id].
    pub fn set_or_clear_route_table_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.route_table_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for RouteTableAssociation {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.RouteTableAssociation"
    }
}

/// A route table.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct RouteTable {
    /// The id of the VPC.
    #[serde(rename = "VpcId", skip_serializing_if = "std::option::Option::is_none")]
    pub vpc_id: std::option::Option<String>,

    /// The id of the route table, e.g. `rtb-azd4dt1c`.
    #[serde(rename = "RouteTableId", skip_serializing_if = "std::option::Option::is_none")]
    pub route_table_id: std::option::Option<String>,

    /// The name of the route table.
    #[serde(rename = "RouteTableName", skip_serializing_if = "std::option::Option::is_none")]
    pub route_table_name: std::option::Option<String>,

    /// The subnets associated with the route table.
    #[serde(rename = "AssociationSet", skip_serializing_if = "std::option::Option::is_none")]
    pub association_set: std::option::Option<std::vec::Vec<crate::model::RouteTableAssociation>>,

    /// The routes.
    #[serde(rename = "RouteSet", skip_serializing_if = "std::option::Option::is_none")]
    pub route_set: std::option::Option<std::vec::Vec<crate::model::Route>>,

    /// True for the default route table.
    #[serde(rename = "Main", skip_serializing_if = "std::option::Option::is_none")]
    pub main: std::option::Option<bool>,

    /// The creation time, as reported by the service.
    #[serde(rename = "CreatedTime", skip_serializing_if = "std::option::Option::is_none")]
    pub created_time: std::option::Option<String>,

    /// The tags attached to the resource.
    #[serde(rename = "TagSet", skip_serializing_if = "std::option::Option::is_none")]
    pub tag_set: std::option::Option<std::vec::Vec<wkt::Tag>>,
}

impl RouteTable {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [vpc_id][RouteTable::vpc_id].
    pub fn set_vpc_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.vpc_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vpc_id][RouteTable::vpc_id].
    pub fn set_or_clear_vpc_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.vpc_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [route_table_id][RouteTable::route_table_id].
    pub fn set_route_table_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.route_table_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [route_table_id][RouteTable::route_table_id].
    pub fn set_or_clear_route_table_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.route_table_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [route_table_name][RouteTable::route_table_name].
    pub fn set_route_table_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.route_table_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [route_table_name][RouteTable::route_table_name].
    pub fn set_or_clear_route_table_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.route_table_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [association_set][RouteTable::association_set].
    pub fn set_association_set<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::RouteTableAssociation>,
    {
        self.association_set = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [association_set][RouteTable::association_set].
    pub fn set_or_clear_association_set<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::RouteTableAssociation>,
    {
        self.association_set = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [route_set][RouteTable::route_set].
    pub fn set_route_set<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Route>,
    {
        self.route_set = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [route_set][RouteTable::route_set].
    pub fn set_or_clear_route_set<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Route>,
    {
        self.route_set = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [main][RouteTable::main].
    pub fn set_main<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.main = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [main][RouteTable::main].
    pub fn set_or_clear_main<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.main = v.map(|x| x.into());
        self
    }

    /// Sets the value of [created_time][RouteTable::created_time].
    pub fn set_created_time<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.created_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [created_time][RouteTable::created_time].
    pub fn set_or_clear_created_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.created_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tag_set][RouteTable::tag_set].
    pub fn set_tag_set<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Tag>,
    {
        self.tag_set = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [tag_set][RouteTable::tag_set].
    pub fn set_or_clear_tag_set<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Tag>,
    {
        self.tag_set = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl wkt::message::Message for RouteTable {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.RouteTable"
    }
}

/// An attribute of the account.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AccountAttribute {
    /// The name of the attribute.
    #[serde(rename = "AttributeName", skip_serializing_if = "std::option::Option::is_none")]
    pub attribute_name: std::option::Option<String>,

    /// The values of the attribute.
    #[serde(rename = "AttributeValues", skip_serializing_if = "std::option::Option::is_none")]
    pub attribute_values: std::option::Option<std::vec::Vec<String>>,
}

impl AccountAttribute {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [attribute_name][AccountAttribute::attribute_name].
    pub fn set_attribute_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.attribute_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [attribute_name][AccountAttribute::attribute_name].
    pub fn set_or_clear_attribute_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.attribute_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [attribute_values][AccountAttribute::attribute_values].
    pub fn set_attribute_values<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.attribute_values = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [attribute_values][AccountAttribute::attribute_values].
    pub fn set_or_clear_attribute_values<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.attribute_values = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl wkt::message::Message for AccountAttribute {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.AccountAttribute"
    }
}

/// A quota of the VPC product.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct VpcLimit {
    /// The quota name, e.g. `appid-max-vpcs`.
    #[serde(rename = "LimitType", skip_serializing_if = "std::option::Option::is_none")]
    pub limit_type: std::option::Option<String>,

    /// The quota value.
    #[serde(rename = "LimitValue", skip_serializing_if = "std::option::Option::is_none")]
    pub limit_value: std::option::Option<u64>,
}

impl VpcLimit {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [limit_type][VpcLimit::limit_type].
    pub fn set_limit_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.limit_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit_type][VpcLimit::limit_type].
    pub fn set_or_clear_limit_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.limit_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit_value][VpcLimit::limit_value].
    pub fn set_limit_value<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.limit_value = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit_value][VpcLimit::limit_value].
    pub fn set_or_clear_limit_value<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.limit_value = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for VpcLimit {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.VpcLimit"
    }
}

/// The billed usage of a bandwidth package.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct BandwidthPackageBillBandwidth {
    /// The billed bandwidth, in Mbps.
    #[serde(rename = "BandwidthUsage", skip_serializing_if = "std::option::Option::is_none")]
    #[serde_as(as = "std::option::Option<wkt::internal::F64>")]
    pub bandwidth_usage: std::option::Option<f64>,
}

impl BandwidthPackageBillBandwidth {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [bandwidth_usage][BandwidthPackageBillBandwidth::bandwidth_usage].
    pub fn set_bandwidth_usage<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.bandwidth_usage = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bandwidth_usage][BandwidthPackageBillBandwidth::bandwidth_usage].
    pub fn set_or_clear_bandwidth_usage<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<f64>,
    {
        self.bandwidth_usage = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for BandwidthPackageBillBandwidth {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.BandwidthPackageBillBandwidth"
    }
}

/// The request message for `AllocateAddresses`.
///
/// Allocates one or more elastic IPs.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AllocateAddressesRequest {
    /// The number of elastic IPs to allocate. Defaults to `1`.
    #[serde(rename = "AddressCount", skip_serializing_if = "std::option::Option::is_none")]
    pub address_count: std::option::Option<i64>,

    /// The internet service provider, e.g. `BGP`, `CMCC`, `CTCC`, or `CUCC`.
    #[serde(rename = "InternetServiceProvider", skip_serializing_if = "std::option::Option::is_none")]
    pub internet_service_provider: std::option::Option<String>,

    /// The network billing mode, e.g. `TRAFFIC_POSTPAID_BY_HOUR`.
    #[serde(rename = "InternetChargeType", skip_serializing_if = "std::option::Option::is_none")]
    pub internet_charge_type: std::option::Option<String>,

    /// The bandwidth cap, in Mbps.
    #[serde(rename = "InternetMaxBandwidthOut", skip_serializing_if = "std::option::Option::is_none")]
    pub internet_max_bandwidth_out: std::option::Option<i64>,

    /// The billing parameters for prepaid addresses.
    #[serde(rename = "AddressChargePrepaid", skip_serializing_if = "std::option::Option::is_none")]
    pub address_charge_prepaid: std::option::Option<crate::model::AddressChargePrepaid>,

    /// The address type, e.g. `EIP` or `AnycastEIP`.
    #[serde(rename = "AddressType", skip_serializing_if = "std::option::Option::is_none")]
    pub address_type: std::option::Option<String>,

    /// The anycast zone, `ANYCAST_ZONE_GLOBAL` or `ANYCAST_ZONE_OVERSEAS`.
    #[serde(rename = "AnycastZone", skip_serializing_if = "std::option::Option::is_none")]
    pub anycast_zone: std::option::Option<String>,

    /// True if the anycast address may be bound to load balancers.
    #[serde(rename = "ApplicableForCLB", skip_serializing_if = "std::option::Option::is_none")]
    pub applicable_for_clb: std::option::Option<bool>,

    /// The tags to attach to the resource.
    #[serde(rename = "Tags", skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::vec::Vec<wkt::Tag>>,

    /// The id of the bandwidth package to join.
    #[serde(rename = "BandwidthPackageId", skip_serializing_if = "std::option::Option::is_none")]
    pub bandwidth_package_id: std::option::Option<String>,

    /// The name of the addresses.
    #[serde(rename = "AddressName", skip_serializing_if = "std::option::Option::is_none")]
    pub address_name: std::option::Option<String>,
}

impl AllocateAddressesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [address_count][AllocateAddressesRequest::address_count].
    pub fn set_address_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.address_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [address_count][AllocateAddressesRequest::address_count].
    pub fn set_or_clear_address_count<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.address_count = v.map(|x| x.into());
        self
    }

    /// Sets the value of [internet_service_provider][AllocateAddressesRequest::internet_service_provider].
    pub fn set_internet_service_provider<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.internet_service_provider = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [internet_service_provider][AllocateAddressesRequest::internet_service_provider].
    pub fn set_or_clear_internet_service_provider<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.internet_service_provider = v.map(|x| x.into());
        self
    }

    /// Sets the value of [internet_charge_type][AllocateAddressesRequest::internet_charge_type].
    pub fn set_internet_charge_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.internet_charge_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [internet_charge_type][AllocateAddressesRequest::internet_charge_type].
    pub fn set_or_clear_internet_charge_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.internet_charge_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [internet_max_bandwidth_out][AllocateAddressesRequest::internet_max_bandwidth_out].
    pub fn set_internet_max_bandwidth_out<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.internet_max_bandwidth_out = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [internet_max_bandwidth_out][AllocateAddressesRequest::internet_max_bandwidth_out].
    pub fn set_or_clear_internet_max_bandwidth_out<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.internet_max_bandwidth_out = v.map(|x| x.into());
        self
    }

    /// Sets the value of [address_charge_prepaid][AllocateAddressesRequest::address_charge_prepaid].
    pub fn set_address_charge_prepaid<T: std::convert::Into<crate::model::AddressChargePrepaid>>(mut self, v: T) -> Self {
        self.address_charge_prepaid = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [address_charge_prepaid][AllocateAddressesRequest::address_charge_prepaid].
    pub fn set_or_clear_address_charge_prepaid<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::AddressChargePrepaid>,
    {
        self.address_charge_prepaid = v.map(|x| x.into());
        self
    }

    /// Sets the value of [address_type][AllocateAddressesRequest::address_type].
    pub fn set_address_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.address_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [address_type][AllocateAddressesRequest::address_type].
    pub fn set_or_clear_address_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.address_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [anycast_zone][AllocateAddressesRequest::anycast_zone].
    pub fn set_anycast_zone<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.anycast_zone = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [anycast_zone][AllocateAddressesRequest::anycast_zone].
    pub fn set_or_clear_anycast_zone<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.anycast_zone = v.map(|x| x.into());
        self
    }

    /// Sets the value of [applicable_for_clb][AllocateAddressesRequest::applicable_for_clb].
    pub fn set_applicable_for_clb<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.applicable_for_clb = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [applicable_for_clb][AllocateAddressesRequest::applicable_for_clb].
    pub fn set_or_clear_applicable_for_clb<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.applicable_for_clb = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tags][AllocateAddressesRequest::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Tag>,
    {
        self.tags = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [tags][AllocateAddressesRequest::tags].
    pub fn set_or_clear_tags<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Tag>,
    {
        self.tags = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [bandwidth_package_id][AllocateAddressesRequest::bandwidth_package_id].
    pub fn set_bandwidth_package_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.bandwidth_package_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bandwidth_package_id][AllocateAddressesRequest::bandwidth_package_id].
    pub fn set_or_clear_bandwidth_package_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.bandwidth_package_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [address_name][AllocateAddressesRequest::address_name].
    pub fn set_address_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.address_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [address_name][AllocateAddressesRequest::address_name].
    pub fn set_or_clear_address_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.address_name = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for AllocateAddressesRequest {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.AllocateAddressesRequest"
    }
}

impl gax::request::Request for AllocateAddressesRequest {
    type Response = crate::model::AllocateAddressesResponse;
    const SERVICE: &'static str = crate::SERVICE;
    const VERSION: &'static str = crate::VERSION;
    const ACTION: &'static str = "AllocateAddresses";
}

/// The response message for `AllocateAddresses`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AllocateAddressesResponse {
    /// The ids of the allocated elastic IPs.
    #[serde(rename = "AddressSet", skip_serializing_if = "std::option::Option::is_none")]
    pub address_set: std::option::Option<std::vec::Vec<String>>,

    /// The id of the asynchronous task, see `DescribeTaskResult`.
    #[serde(rename = "TaskId", skip_serializing_if = "std::option::Option::is_none")]
    pub task_id: std::option::Option<String>,

    /// The unique id of the call, include it when contacting support.
    #[serde(rename = "RequestId", skip_serializing_if = "std::option::Option::is_none")]
    pub request_id: std::option::Option<String>,
}

impl AllocateAddressesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [address_set][AllocateAddressesResponse::address_set].
    pub fn set_address_set<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.address_set = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [address_set][AllocateAddressesResponse::address_set].
    pub fn set_or_clear_address_set<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.address_set = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [task_id][AllocateAddressesResponse::task_id].
    pub fn set_task_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.task_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [task_id][AllocateAddressesResponse::task_id].
    pub fn set_or_clear_task_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.task_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [request_id][AllocateAddressesResponse::request_id].
    pub fn set_request_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][AllocateAddressesResponse::request_id].
    pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.request_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for AllocateAddressesResponse {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.AllocateAddressesResponse"
    }
}

/// The request message for `ReleaseAddresses`.
///
/// Releases one or more elastic IPs.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ReleaseAddressesRequest {
    /// The ids of the elastic IPs to release.
    #[serde(rename = "AddressIds", skip_serializing_if = "std::option::Option::is_none")]
    pub address_ids: std::option::Option<std::vec::Vec<String>>,
}

impl ReleaseAddressesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [address_ids][ReleaseAddressesRequest::address_ids].
    pub fn set_address_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.address_ids = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [address_ids][ReleaseAddressesRequest::address_ids].
    pub fn set_or_clear_address_ids<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.address_ids = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl wkt::message::Message for ReleaseAddressesRequest {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.ReleaseAddressesRequest"
    }
}

impl gax::request::Request for ReleaseAddressesRequest {
    type Response = crate::model::ReleaseAddressesResponse;
    const SERVICE: &'static str = crate::SERVICE;
    const VERSION: &'static str = crate::VERSION;
    const ACTION: &'static str = "ReleaseAddresses";
}

/// The response message for `ReleaseAddresses`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ReleaseAddressesResponse {
    /// The id of the asynchronous task.
    #[serde(rename = "TaskId", skip_serializing_if = "std::option::Option::is_none")]
    pub task_id: std::option::Option<String>,

    /// The unique id of the call, include it when contacting support.
    #[serde(rename = "RequestId", skip_serializing_if = "std::option::Option::is_none")]
    pub request_id: std::option::Option<String>,
}

impl ReleaseAddressesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [task_id][ReleaseAddressesResponse::task_id].
    pub fn set_task_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.task_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [task_id][ReleaseAddressesResponse::task_id].
    pub fn set_or_clear_task_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.task_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [request_id][ReleaseAddressesResponse::request_id].
    pub fn set_request_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][ReleaseAddressesResponse::request_id].
    pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.request_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for ReleaseAddressesResponse {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.ReleaseAddressesResponse"
    }
}

/// The request message for `DescribeAddresses`.
///
/// Lists elastic IPs.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DescribeAddressesRequest {
    /// The ids of the elastic IPs to query.
    #[serde(rename = "AddressIds", skip_serializing_if = "std::option::Option::is_none")]
    pub address_ids: std::option::Option<std::vec::Vec<String>>,

    /// Filter conditions. Within a filter the values are combined with `OR`, filters are combined with `AND`.
    #[serde(rename = "Filters", skip_serializing_if = "std::option::Option::is_none")]
    pub filters: std::option::Option<std::vec::Vec<wkt::Filter>>,

    /// The offset of the first result.
    #[serde(rename = "Offset", skip_serializing_if = "std::option::Option::is_none")]
    pub offset: std::option::Option<i64>,

    /// The maximum number of results.
    #[serde(rename = "Limit", skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<i64>,
}

impl DescribeAddressesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [address_ids][DescribeAddressesRequest::address_ids].
    pub fn set_address_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.address_ids = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [address_ids][DescribeAddressesRequest::address_ids].
    pub fn set_or_clear_address_ids<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.address_ids = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [filters][DescribeAddressesRequest::filters].
    pub fn set_filters<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Filter>,
    {
        self.filters = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [filters][DescribeAddressesRequest::filters].
    pub fn set_or_clear_filters<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Filter>,
    {
        self.filters = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [offset][DescribeAddressesRequest::offset].
    pub fn set_offset<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.offset = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [offset][DescribeAddressesRequest::offset].
    pub fn set_or_clear_offset<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.offset = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][DescribeAddressesRequest::limit].
    pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][DescribeAddressesRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DescribeAddressesRequest {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DescribeAddressesRequest"
    }
}

impl gax::request::Request for DescribeAddressesRequest {
    type Response = crate::model::DescribeAddressesResponse;
    const SERVICE: &'static str = crate::SERVICE;
    const VERSION: &'static str = crate::VERSION;
    const ACTION: &'static str = "DescribeAddresses";
}

/// The response message for `DescribeAddresses`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DescribeAddressesResponse {
    /// The number of elastic IPs matching the query.
    #[serde(rename = "TotalCount", skip_serializing_if = "std::option::Option::is_none")]
    pub total_count: std::option::Option<i64>,

    /// The elastic IPs.
    #[serde(rename = "AddressSet", skip_serializing_if = "std::option::Option::is_none")]
    pub address_set: std::option::Option<std::vec::Vec<crate::model::Address>>,

    /// The unique id of the call, include it when contacting support.
    #[serde(rename = "RequestId", skip_serializing_if = "std::option::Option::is_none")]
    pub request_id: std::option::Option<String>,
}

impl DescribeAddressesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [total_count][DescribeAddressesResponse::total_count].
    pub fn set_total_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.total_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [total_count][DescribeAddressesResponse::total_count].
    pub fn set_or_clear_total_count<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.total_count = v.map(|x| x.into());
        self
    }

    /// Sets the value of [address_set][DescribeAddressesResponse::address_set].
    pub fn set_address_set<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Address>,
    {
        self.address_set = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [address_set][DescribeAddressesResponse::address_set].
    pub fn set_or_clear_address_set<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Address>,
    {
        self.address_set = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [request_id][DescribeAddressesResponse::request_id].
    pub fn set_request_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][DescribeAddressesResponse::request_id].
    pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.request_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DescribeAddressesResponse {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DescribeAddressesResponse"
    }
}

/// The request message for `AssociateAddress`.
///
/// Binds an elastic IP to an instance or network interface.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AssociateAddressRequest {
    /// The id of the elastic IP.
    #[serde(rename = "AddressId", skip_serializing_if = "std::option::Option::is_none")]
    pub address_id: std::option::Option<String>,

    /// The id of the instance to bind.
    #[serde(rename = "InstanceId", skip_serializing_if = "std::option::Option::is_none")]
    pub instance_id: std::option::Option<String>,

    /// The id of the network interface to bind.
    #[serde(rename = "NetworkInterfaceId", skip_serializing_if = "std::option::Option::is_none")]
    pub network_interface_id: std::option::Option<String>,

    /// The private IP of the network interface to bind.
    #[serde(rename = "PrivateIpAddress", skip_serializing_if = "std::option::Option::is_none")]
    pub private_ip_address: std::option::Option<String>,

    /// True to bind in direct connection mode.
    #[serde(rename = "EipDirectConnection", skip_serializing_if = "std::option::Option::is_none")]
    pub eip_direct_connection: std::option::Option<bool>,
}

impl AssociateAddressRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [address_id][AssociateAddressRequest::address_id].
    pub fn set_address_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.address_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [address_id][AssociateAddressRequest::address_id].
    pub fn set_or_clear_address_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.address_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [instance_id][AssociateAddressRequest::instance_id].
    pub fn set_instance_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.instance_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [instance_id][AssociateAddressRequest::instance_id].
    pub fn set_or_clear_instance_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.instance_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [network_interface_id][AssociateAddressRequest::network_interface_id].
    pub fn set_network_interface_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.network_interface_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [network_interface_id][AssociateAddressRequest::network_interface_id].
    pub fn set_or_clear_network_interface_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.network_interface_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [private_ip_address][AssociateAddressRequest::private_ip_address].
    pub fn set_private_ip_address<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.private_ip_address = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [private_ip_address][AssociateAddressRequest::private_ip_address].
    pub fn set_or_clear_private_ip_address<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.private_ip_address = v.map(|x| x.into());
        self
    }

    /// Sets the value of [eip_direct_connection][AssociateAddressRequest::eip_direct_connection].
    pub fn set_eip_direct_connection<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.eip_direct_connection = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [eip_direct_connection][AssociateAddressRequest::eip_direct_connection].
    pub fn set_or_clear_eip_direct_connection<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.eip_direct_connection = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for AssociateAddressRequest {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.AssociateAddressRequest"
    }
}

impl gax::request::Request for AssociateAddressRequest {
    type Response = crate::model::AssociateAddressResponse;
    const SERVICE: &'static str = crate::SERVICE;
    const VERSION: &'static str = crate::VERSION;
    const ACTION: &'static str = "AssociateAddress";
}

/// The response message for `AssociateAddress`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AssociateAddressResponse {
    /// The id of the asynchronous task.
    #[serde(rename = "TaskId", skip_serializing_if = "std::option::Option::is_none")]
    pub task_id: std::option::Option<String>,

    /// The unique id of the call, include it when contacting support.
    #[serde(rename = "RequestId", skip_serializing_if = "std::option::Option::is_none")]
    pub request_id: std::option::Option<String>,
}

impl AssociateAddressResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [task_id][AssociateAddressResponse::task_id].
    pub fn set_task_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.task_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [task_id][AssociateAddressResponse::task_id].
    pub fn set_or_clear_task_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.task_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [request_id][AssociateAddressResponse::request_id].
    pub fn set_request_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][AssociateAddressResponse::request_id].
    pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.request_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for AssociateAddressResponse {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.AssociateAddressResponse"
    }
}

/// The request message for `DisassociateAddress`.
///
/// Unbinds an elastic IP.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DisassociateAddressRequest {
    /// The id of the elastic IP.
    #[serde(rename = "AddressId", skip_serializing_if = "std::option::Option::is_none")]
    pub address_id: std::option::Option<String>,

    /// True to assign a regular public IP after unbinding.
    #[serde(rename = "ReallocateNormalPublicIp", skip_serializing_if = "std::option::Option::is_none")]
    pub reallocate_normal_public_ip: std::option::Option<bool>,
}

impl DisassociateAddressRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [address_id][DisassociateAddressRequest::address_id].
    pub fn set_address_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.address_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [address_id][DisassociateAddressRequest::address_id].
    pub fn set_or_clear_address_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.address_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [reallocate_normal_public_ip][DisassociateAddressRequest::reallocate_normal_public_ip].
    pub fn set_reallocate_normal_public_ip<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.reallocate_normal_public_ip = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [reallocate_normal_public_ip][DisassociateAddressRequest::reallocate_normal_public_ip].
    pub fn set_or_clear_reallocate_normal_public_ip<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.reallocate_normal_public_ip = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DisassociateAddressRequest {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DisassociateAddressRequest"
    }
}

impl gax::request::Request for DisassociateAddressRequest {
    type Response = crate::model::DisassociateAddressResponse;
    const SERVICE: &'static str = crate::SERVICE;
    const VERSION: &'static str = crate::VERSION;
    const ACTION: &'static str = "DisassociateAddress";
}

/// The response message for `DisassociateAddress`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DisassociateAddressResponse {
    /// The id of the asynchronous task.
    #[serde(rename = "TaskId", skip_serializing_if = "std::option::Option::is_none")]
    pub task_id: std::option::Option<String>,

    /// The unique id of the call, include it when contacting support.
    #[serde(rename = "RequestId", skip_serializing_if = "std::option::Option::is_none")]
    pub request_id: std::option::Option<String>,
}

impl DisassociateAddressResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [task_id][DisassociateAddressResponse::task_id].
    pub fn set_task_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.task_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [task_id][DisassociateAddressResponse::task_id].
    pub fn set_or_clear_task_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.task_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [request_id][DisassociateAddressResponse::request_id].
    pub fn set_request_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][DisassociateAddressResponse::request_id].
    pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.request_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DisassociateAddressResponse {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DisassociateAddressResponse"
    }
}

/// The request message for `CreateVpc`.
///
/// Creates a VPC.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CreateVpcRequest {
    /// The name of the VPC.
    #[serde(rename = "VpcName", skip_serializing_if = "std::option::Option::is_none")]
    pub vpc_name: std::option::Option<String>,

    /// The IPv4 CIDR block, within `10.0.0.0/12`, `172.16.0.0/12`, or `192.168.0.0/16`.
    #[serde(rename = "CidrBlock", skip_serializing_if = "std::option::Option::is_none")]
    pub cidr_block: std::option::Option<String>,

    /// Whether to enable multicast, `true` or `false`.
    #[serde(rename = "EnableMulticast", skip_serializing_if = "std::option::Option::is_none")]
    pub enable_multicast: std::option::Option<String>,

    /// The DNS servers, at most four.
    #[serde(rename = "DnsServers", skip_serializing_if = "std::option::Option::is_none")]
    pub dns_servers: std::option::Option<std::vec::Vec<String>>,

    /// The DHCP domain name.
    #[serde(rename = "DomainName", skip_serializing_if = "std::option::Option::is_none")]
    pub domain_name: std::option::Option<String>,

    /// The tags to attach to the resource.
    #[serde(rename = "Tags", skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::vec::Vec<wkt::Tag>>,
}

impl CreateVpcRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [vpc_name][CreateVpcRequest::vpc_name].
    pub fn set_vpc_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.vpc_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vpc_name][CreateVpcRequest::vpc_name].
    pub fn set_or_clear_vpc_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.vpc_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [cidr_block][CreateVpcRequest::cidr_block].
    pub fn set_cidr_block<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.cidr_block = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cidr_block][CreateVpcRequest::cidr_block].
    pub fn set_or_clear_cidr_block<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.cidr_block = v.map(|x| x.into());
        self
    }

    /// Sets the value of [enable_multicast][CreateVpcRequest::enable_multicast].
    pub fn set_enable_multicast<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.enable_multicast = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enable_multicast][CreateVpcRequest::enable_multicast].
    pub fn set_or_clear_enable_multicast<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.enable_multicast = v.map(|x| x.into());
        self
    }

    /// Sets the value of [dns_servers][CreateVpcRequest::dns_servers].
    pub fn set_dns_servers<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.dns_servers = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [dns_servers][CreateVpcRequest::dns_servers].
    pub fn set_or_clear_dns_servers<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.dns_servers = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [domain_name][CreateVpcRequest::domain_name].
    pub fn set_domain_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.domain_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [domain_name][CreateVpcRequest::domain_name].
    pub fn set_or_clear_domain_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.domain_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tags][CreateVpcRequest::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Tag>,
    {
        self.tags = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [tags][CreateVpcRequest::tags].
    pub fn set_or_clear_tags<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Tag>,
    {
        self.tags = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl wkt::message::Message for CreateVpcRequest {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.CreateVpcRequest"
    }
}

impl gax::request::Request for CreateVpcRequest {
    type Response = crate::model::CreateVpcResponse;
    const SERVICE: &'static str = crate::SERVICE;
    const VERSION: &'static str = crate::VERSION;
    const ACTION: &'static str = "CreateVpc";
}

/// The response message for `CreateVpc`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CreateVpcResponse {
    /// The new VPC.
    #[serde(rename = "Vpc", skip_serializing_if = "std::option::Option::is_none")]
    pub vpc: std::option::Option<crate::model::Vpc>,

    /// The unique id of the call, include it when contacting support.
    #[serde(rename = "RequestId", skip_serializing_if = "std::option::Option::is_none")]
    pub request_id: std::option::Option<String>,
}

impl CreateVpcResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [vpc][CreateVpcResponse::vpc].
    pub fn set_vpc<T: std::convert::Into<crate::model::Vpc>>(mut self, v: T) -> Self {
        self.vpc = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vpc][CreateVpcResponse::vpc].
    pub fn set_or_clear_vpc<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Vpc>,
    {
        self.vpc = v.map(|x| x.into());
        self
    }

    /// Sets the value of [request_id][CreateVpcResponse::request_id].
    pub fn set_request_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][CreateVpcResponse::request_id].
    pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.request_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for CreateVpcResponse {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.CreateVpcResponse"
    }
}

/// The request message for `DeleteVpc`.
///
/// Deletes a VPC.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DeleteVpcRequest {
    /// The id of the VPC.
    #[serde(rename = "VpcId", skip_serializing_if = "std::option::Option::is_none")]
    pub vpc_id: std::option::Option<String>,
}

impl DeleteVpcRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [vpc_id][DeleteVpcRequest::vpc_id].
    pub fn set_vpc_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.vpc_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vpc_id][DeleteVpcRequest::vpc_id].
    pub fn set_or_clear_vpc_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.vpc_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DeleteVpcRequest {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DeleteVpcRequest"
    }
}

impl gax::request::Request for DeleteVpcRequest {
    type Response = crate::model::DeleteVpcResponse;
    const SERVICE: &'static str = crate::SERVICE;
    const VERSION: &'static str = crate::VERSION;
    const ACTION: &'static str = "DeleteVpc";
}

/// The response message for `DeleteVpc`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DeleteVpcResponse {
    /// The unique id of the call, include it when contacting support.
    #[serde(rename = "RequestId", skip_serializing_if = "std::option::Option::is_none")]
    pub request_id: std::option::Option<String>,
}

impl DeleteVpcResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][DeleteVpcResponse::request_id].
    pub fn set_request_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][DeleteVpcResponse::request_id].
    pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.request_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DeleteVpcResponse {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DeleteVpcResponse"
    }
}

/// The request message for `DescribeVpcs`.
///
/// Lists VPCs.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DescribeVpcsRequest {
    /// The ids of the VPCs to query.
    #[serde(rename = "VpcIds", skip_serializing_if = "std::option::Option::is_none")]
    pub vpc_ids: std::option::Option<std::vec::Vec<String>>,

    /// Filter conditions. Within a filter the values are combined with `OR`, filters are combined with `AND`.
    #[serde(rename = "Filters", skip_serializing_if = "std::option::Option::is_none")]
    pub filters: std::option::Option<std::vec::Vec<wkt::Filter>>,

    /// The offset of the first result.
    #[serde(rename = "Offset", skip_serializing_if = "std::option::Option::is_none")]
    pub offset: std::option::Option<String>,

    /// The maximum number of results.
    #[serde(rename = "Limit", skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<String>,
}

impl DescribeVpcsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [vpc_ids][DescribeVpcsRequest::vpc_ids].
    pub fn set_vpc_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.vpc_ids = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [vpc_ids][DescribeVpcsRequest::vpc_ids].
    pub fn set_or_clear_vpc_ids<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.vpc_ids = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [filters][DescribeVpcsRequest::filters].
    pub fn set_filters<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Filter>,
    {
        self.filters = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [filters][DescribeVpcsRequest::filters].
    pub fn set_or_clear_filters<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Filter>,
    {
        self.filters = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [offset][DescribeVpcsRequest::offset].
    pub fn set_offset<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.offset = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [offset][DescribeVpcsRequest::offset].
    pub fn set_or_clear_offset<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.offset = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][DescribeVpcsRequest::limit].
    pub fn set_limit<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][DescribeVpcsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.limit = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DescribeVpcsRequest {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DescribeVpcsRequest"
    }
}

impl gax::request::Request for DescribeVpcsRequest {
    type Response = crate::model::DescribeVpcsResponse;
    const SERVICE: &'static str = crate::SERVICE;
    const VERSION: &'static str = crate::VERSION;
    const ACTION: &'static str = "DescribeVpcs";
}

/// The response message for `DescribeVpcs`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DescribeVpcsResponse {
    /// The number of VPCs matching the query.
    #[serde(rename = "TotalCount", skip_serializing_if = "std::option::Option::is_none")]
    pub total_count: std::option::Option<u64>,

    /// The VPCs.
    #[serde(rename = "VpcSet", skip_serializing_if = "std::option::Option::is_none")]
    pub vpc_set: std::option::Option<std::vec::Vec<crate::model::Vpc>>,

    /// The unique id of the call, include it when contacting support.
    #[serde(rename = "RequestId", skip_serializing_if = "std::option::Option::is_none")]
    pub request_id: std::option::Option<String>,
}

impl DescribeVpcsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [total_count][DescribeVpcsResponse::total_count].
    pub fn set_total_count<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.total_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [total_count][DescribeVpcsResponse::total_count].
    pub fn set_or_clear_total_count<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.total_count = v.map(|x| x.into());
        self
    }

    /// Sets the value of [vpc_set][DescribeVpcsResponse::vpc_set].
    pub fn set_vpc_set<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Vpc>,
    {
        self.vpc_set = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [vpc_set][DescribeVpcsResponse::vpc_set].
    pub fn set_or_clear_vpc_set<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Vpc>,
    {
        self.vpc_set = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [request_id][DescribeVpcsResponse::request_id].
    pub fn set_request_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][DescribeVpcsResponse::request_id].
    pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.request_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DescribeVpcsResponse {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DescribeVpcsResponse"
    }
}

/// The request message for `ModifyVpcAttribute`.
///
/// Modifies the attributes of a VPC.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ModifyVpcAttributeRequest {
    /// The id of the VPC.
    #[serde(rename = "VpcId", skip_serializing_if = "std::option::Option::is_none")]
    pub vpc_id: std::option::Option<String>,

    /// The new name.
    #[serde(rename = "VpcName", skip_serializing_if = "std::option::Option::is_none")]
    pub vpc_name: std::option::Option<String>,

    /// Whether to enable multicast, `true` or `false`.
    #[serde(rename = "EnableMulticast", skip_serializing_if = "std::option::Option::is_none")]
    pub enable_multicast: std::option::Option<String>,

    /// The DNS servers, at most four.
    #[serde(rename = "DnsServers", skip_serializing_if = "std::option::Option::is_none")]
    pub dns_servers: std::option::Option<std::vec::Vec<String>>,

    /// The DHCP domain name.
    #[serde(rename = "DomainName", skip_serializing_if = "std::option::Option::is_none")]
    pub domain_name: std::option::Option<String>,
}

impl ModifyVpcAttributeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [vpc_id][ModifyVpcAttributeRequest::vpc_id].
    pub fn set_vpc_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.vpc_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vpc_id][ModifyVpcAttributeRequest::vpc_id].
    pub fn set_or_clear_vpc_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.vpc_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [vpc_name][ModifyVpcAttributeRequest::vpc_name].
    pub fn set_vpc_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.vpc_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vpc_name][ModifyVpcAttributeRequest::vpc_name].
    pub fn set_or_clear_vpc_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.vpc_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [enable_multicast][ModifyVpcAttributeRequest::enable_multicast].
    pub fn set_enable_multicast<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.enable_multicast = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enable_multicast][ModifyVpcAttributeRequest::enable_multicast].
    pub fn set_or_clear_enable_multicast<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.enable_multicast = v.map(|x| x.into());
        self
    }

    /// Sets the value of [dns_servers][ModifyVpcAttributeRequest::dns_servers].
    pub fn set_dns_servers<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.dns_servers = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [dns_servers][ModifyVpcAttributeRequest::dns_servers].
    pub fn set_or_clear_dns_servers<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.dns_servers = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [domain_name][ModifyVpcAttributeRequest::domain_name].
    pub fn set_domain_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.domain_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [domain_name][ModifyVpcAttributeRequest::domain_name].
    pub fn set_or_clear_domain_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.domain_name = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for ModifyVpcAttributeRequest {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.ModifyVpcAttributeRequest"
    }
}

impl gax::request::Request for ModifyVpcAttributeRequest {
    type Response = crate::model::ModifyVpcAttributeResponse;
    const SERVICE: &'static str = crate::SERVICE;
    const VERSION: &'static str = crate::VERSION;
    const ACTION: &'static str = "ModifyVpcAttribute";
}

/// The response message for `ModifyVpcAttribute`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ModifyVpcAttributeResponse {
    /// The unique id of the call, include it when contacting support.
    #[serde(rename = "RequestId", skip_serializing_if = "std::option::Option::is_none")]
    pub request_id: std::option::Option<String>,
}

impl ModifyVpcAttributeResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][ModifyVpcAttributeResponse::request_id].
    pub fn set_request_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][ModifyVpcAttributeResponse::request_id].
    pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.request_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for ModifyVpcAttributeResponse {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.ModifyVpcAttributeResponse"
    }
}

/// The request message for `CreateSubnet`.
///
/// Creates a subnet.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CreateSubnetRequest {
    /// The id of the VPC.
    #[serde(rename = "VpcId", skip_serializing_if = "std::option::Option::is_none")]
    pub vpc_id: std::option::Option<String>,

    /// The name of the subnet.
    #[serde(rename = "SubnetName", skip_serializing_if = "std::option::Option::is_none")]
    pub subnet_name: std::option::Option<String>,

    /// The IPv4 CIDR block, within the CIDR block of the VPC.
    #[serde(rename = "CidrBlock", skip_serializing_if = "std::option::Option::is_none")]
    pub cidr_block: std::option::Option<String>,

    /// The availability zone.
    #[serde(rename = "Zone", skip_serializing_if = "std::option::Option::is_none")]
    pub zone: std::option::Option<String>,

    /// The tags to attach to the resource.
    #[serde(rename = "Tags", skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::vec::Vec<wkt::Tag>>,

    /// The id of the CDC instance.
    #[serde(rename = "CdcId", skip_serializing_if = "std::option::Option::is_none")]
    pub cdc_id: std::option::Option<String>,
}

impl CreateSubnetRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [vpc_id][CreateSubnetRequest::vpc_id].
    pub fn set_vpc_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.vpc_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vpc_id][CreateSubnetRequest::vpc_id].
    pub fn set_or_clear_vpc_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.vpc_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [subnet_name][CreateSubnetRequest::subnet_name].
    pub fn set_subnet_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.subnet_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [subnet_name][CreateSubnetRequest::subnet_name].
    pub fn set_or_clear_subnet_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.subnet_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [cidr_block][CreateSubnetRequest::cidr_block].
    pub fn set_cidr_block<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.cidr_block = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cidr_block][CreateSubnetRequest::cidr_block].
    pub fn set_or_clear_cidr_block<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.cidr_block = v.map(|x| x.into());
        self
    }

    /// Sets the value of [zone][CreateSubnetRequest::zone].
    pub fn set_zone<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.zone = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [zone][CreateSubnetRequest::zone].
    pub fn set_or_clear_zone<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.zone = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tags][CreateSubnetRequest::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Tag>,
    {
        self.tags = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [tags][CreateSubnetRequest::tags].
    pub fn set_or_clear_tags<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Tag>,
    {
        self.tags = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [cdc_id][CreateSubnetRequest::cdc_id].
    pub fn set_cdc_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.cdc_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cdc_id][CreateSubnetRequest::cdc_id].
    pub fn set_or_clear_cdc_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.cdc_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for CreateSubnetRequest {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.CreateSubnetRequest"
    }
}

impl gax::request::Request for CreateSubnetRequest {
    type Response = crate::model::CreateSubnetResponse;
    const SERVICE: &'static str = crate::SERVICE;
    const VERSION: &'static str = crate::VERSION;
    const ACTION: &'static str = "CreateSubnet";
}

/// The response message for `CreateSubnet`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CreateSubnetResponse {
    /// The new subnet.
    #[serde(rename = "Subnet", skip_serializing_if = "std::option::Option::is_none")]
    pub subnet: std::option::Option<crate::model::Subnet>,

    /// The unique id of the call, include it when contacting support.
    #[serde(rename = "RequestId", skip_serializing_if = "std::option::Option::is_none")]
    pub request_id: std::option::Option<String>,
}

impl CreateSubnetResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [subnet][CreateSubnetResponse::subnet].
    pub fn set_subnet<T: std::convert::Into<crate::model::Subnet>>(mut self, v: T) -> Self {
        self.subnet = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [subnet][CreateSubnetResponse::subnet].
    pub fn set_or_clear_subnet<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Subnet>,
    {
        self.subnet = v.map(|x| x.into());
        self
    }

    /// Sets the value of [request_id][CreateSubnetResponse::request_id].
    pub fn set_request_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][CreateSubnetResponse::request_id].
    pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.request_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for CreateSubnetResponse {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.CreateSubnetResponse"
    }
}

/// The request message for `CreateSubnets`.
///
/// Creates subnets in a batch.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CreateSubnetsRequest {
    /// The id of the VPC.
    #[serde(rename = "VpcId", skip_serializing_if = "std::option::Option::is_none")]
    pub vpc_id: std::option::Option<String>,

    /// The subnets to create.
    #[serde(rename = "Subnets", skip_serializing_if = "std::option::Option::is_none")]
    pub subnets: std::option::Option<std::vec::Vec<crate::model::SubnetInput>>,

    /// The tags to attach to the resource.
    #[serde(rename = "Tags", skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::vec::Vec<wkt::Tag>>,

    /// The id of the CDC instance.
    #[serde(rename = "CdcId", skip_serializing_if = "std::option::Option::is_none")]
    pub cdc_id: std::option::Option<String>,
}

impl CreateSubnetsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [vpc_id][CreateSubnetsRequest::vpc_id].
    pub fn set_vpc_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.vpc_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vpc_id][CreateSubnetsRequest::vpc_id].
    pub fn set_or_clear_vpc_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.vpc_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [subnets][CreateSubnetsRequest::subnets].
    pub fn set_subnets<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::SubnetInput>,
    {
        self.subnets = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [subnets][CreateSubnetsRequest::subnets].
    pub fn set_or_clear_subnets<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::SubnetInput>,
    {
        self.subnets = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [tags][CreateSubnetsRequest::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Tag>,
    {
        self.tags = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [tags][CreateSubnetsRequest::tags].
    pub fn set_or_clear_tags<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Tag>,
    {
        self.tags = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [cdc_id][CreateSubnetsRequest::cdc_id].
    pub fn set_cdc_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.cdc_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cdc_id][CreateSubnetsRequest::cdc_id].
    pub fn set_or_clear_cdc_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.cdc_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for CreateSubnetsRequest {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.CreateSubnetsRequest"
    }
}

impl gax::request::Request for CreateSubnetsRequest {
    type Response = crate::model::CreateSubnetsResponse;
    const SERVICE: &'static str = crate::SERVICE;
    const VERSION: &'static str = crate::VERSION;
    const ACTION: &'static str = "CreateSubnets";
}

/// The response message for `CreateSubnets`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CreateSubnetsResponse {
    /// The new subnets.
    #[serde(rename = "SubnetSet", skip_serializing_if = "std::option::Option::is_none")]
    pub subnet_set: std::option::Option<std::vec::Vec<crate::model::Subnet>>,

    /// The unique id of the call, include it when contacting support.
    #[serde(rename = "RequestId", skip_serializing_if = "std::option::Option::is_none")]
    pub request_id: std::option::Option<String>,
}

impl CreateSubnetsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [subnet_set][CreateSubnetsResponse::subnet_set].
    pub fn set_subnet_set<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Subnet>,
    {
        self.subnet_set = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [subnet_set][CreateSubnetsResponse::subnet_set].
    pub fn set_or_clear_subnet_set<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Subnet>,
    {
        self.subnet_set = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [request_id][CreateSubnetsResponse::request_id].
    pub fn set_request_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][CreateSubnetsResponse::request_id].
    pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.request_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for CreateSubnetsResponse {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.CreateSubnetsResponse"
    }
}

/// The request message for `DeleteSubnet`.
///
/// Deletes a subnet.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DeleteSubnetRequest {
    /// The id of the subnet.
    #[serde(rename = "SubnetId", skip_serializing_if = "std::option::Option::is_none")]
    pub subnet_id: std::option::Option<String>,
}

impl DeleteSubnetRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [subnet_id][DeleteSubnetRequest::subnet_id].
    pub fn set_subnet_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.subnet_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [subnet_id][DeleteSubnetRequest::subnet_id].
    pub fn set_or_clear_subnet_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.subnet_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DeleteSubnetRequest {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DeleteSubnetRequest"
    }
}

impl gax::request::Request for DeleteSubnetRequest {
    type Response = crate::model::DeleteSubnetResponse;
    const SERVICE: &'static str = crate::SERVICE;
    const VERSION: &'static str = crate::VERSION;
    const ACTION: &'static str = "DeleteSubnet";
}

/// The response message for `DeleteSubnet`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DeleteSubnetResponse {
    /// The unique id of the call, include it when contacting support.
    #[serde(rename = "RequestId", skip_serializing_if = "std::option::Option::is_none")]
    pub request_id: std::option::Option<String>,
}

impl DeleteSubnetResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][DeleteSubnetResponse::request_id].
    pub fn set_request_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][DeleteSubnetResponse::request_id].
    pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.request_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DeleteSubnetResponse {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DeleteSubnetResponse"
    }
}

/// The request message for `DescribeSubnets`.
///
/// Lists subnets.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DescribeSubnetsRequest {
    /// The ids of the subnets to query.
    #[serde(rename = "SubnetIds", skip_serializing_if = "std::option::Option::is_none")]
    pub subnet_ids: std::option::Option<std::vec::Vec<String>>,

    /// Filter conditions. Within a filter the values are combined with `OR`, filters are combined with `AND`.
    #[serde(rename = "Filters", skip_serializing_if = "std::option::Option::is_none")]
    pub filters: std::option::Option<std::vec::Vec<wkt::Filter>>,

    /// The offset of the first result.
    #[serde(rename = "Offset", skip_serializing_if = "std::option::Option::is_none")]
    pub offset: std::option::Option<String>,

    /// The maximum number of results.
    #[serde(rename = "Limit", skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<String>,
}

impl DescribeSubnetsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [subnet_ids][DescribeSubnetsRequest::subnet_ids].
    pub fn set_subnet_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.subnet_ids = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [subnet_ids][DescribeSubnetsRequest::subnet_ids].
    pub fn set_or_clear_subnet_ids<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.subnet_ids = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [filters][DescribeSubnetsRequest::filters].
    pub fn set_filters<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Filter>,
    {
        self.filters = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [filters][DescribeSubnetsRequest::filters].
    pub fn set_or_clear_filters<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Filter>,
    {
        self.filters = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [offset][DescribeSubnetsRequest::offset].
    pub fn set_offset<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.offset = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [offset][DescribeSubnetsRequest::offset].
    pub fn set_or_clear_offset<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.offset = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][DescribeSubnetsRequest::limit].
    pub fn set_limit<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][DescribeSubnetsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.limit = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DescribeSubnetsRequest {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DescribeSubnetsRequest"
    }
}

impl gax::request::Request for DescribeSubnetsRequest {
    type Response = crate::model::DescribeSubnetsResponse;
    const SERVICE: &'static str = crate::SERVICE;
    const VERSION: &'static str = crate::VERSION;
    const ACTION: &'static str = "DescribeSubnets";
}

/// The response message for `DescribeSubnets`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DescribeSubnetsResponse {
    /// The number of subnets matching the query.
    #[serde(rename = "TotalCount", skip_serializing_if = "std::option::Option::is_none")]
    pub total_count: std::option::Option<u64>,

    /// The subnets.
    #[serde(rename = "SubnetSet", skip_serializing_if = "std::option::Option::is_none")]
    pub subnet_set: std::option::Option<std::vec::Vec<crate::model::Subnet>>,

    /// The unique id of the call, include it when contacting support.
    #[serde(rename = "RequestId", skip_serializing_if = "std::option::Option::is_none")]
    pub request_id: std::option::Option<String>,
}

impl DescribeSubnetsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [total_count][DescribeSubnetsResponse::total_count].
    pub fn set_total_count<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.total_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [total_count][DescribeSubnetsResponse::total_count].
    pub fn set_or_clear_total_count<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.total_count = v.map(|x| x.into());
        self
    }

    /// Sets the value of [subnet_set][DescribeSubnetsResponse::subnet_set].
    pub fn set_subnet_set<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Subnet>,
    {
        self.subnet_set = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [subnet_set][DescribeSubnetsResponse::subnet_set].
    pub fn set_or_clear_subnet_set<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Subnet>,
    {
        self.subnet_set = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [request_id][DescribeSubnetsResponse::request_id].
    pub fn set_request_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][DescribeSubnetsResponse::request_id].
    pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.request_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DescribeSubnetsResponse {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DescribeSubnetsResponse"
    }
}

/// The request message for `CreateCcn`.
///
/// Creates a cloud connect network.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CreateCcnRequest {
    /// The name of the CCN.
    #[serde(rename = "CcnName", skip_serializing_if = "std::option::Option::is_none")]
    pub ccn_name: std::option::Option<String>,

    /// The description of the CCN.
    #[serde(rename = "CcnDescription", skip_serializing_if = "std::option::Option::is_none")]
    pub ccn_description: std::option::Option<String>,

    /// The service quality, one of `PT`, `AU`, or `AG`.
    #[serde(rename = "QosLevel", skip_serializing_if = "std::option::Option::is_none")]
    pub qos_level: std::option::Option<String>,

    /// The billing mode, `PREPAID` or `POSTPAID`.
    #[serde(rename = "InstanceChargeType", skip_serializing_if = "std::option::Option::is_none")]
    pub instance_charge_type: std::option::Option<String>,

    /// The bandwidth limit type.
    #[serde(rename = "BandwidthLimitType", skip_serializing_if = "std::option::Option::is_none")]
    pub bandwidth_limit_type: std::option::Option<String>,

    /// The tags to attach to the resource.
    #[serde(rename = "Tags", skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::vec::Vec<wkt::Tag>>,
}

impl CreateCcnRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [ccn_name][CreateCcnRequest::ccn_name].
    pub fn set_ccn_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.ccn_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ccn_name][CreateCcnRequest::ccn_name].
    pub fn set_or_clear_ccn_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.ccn_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ccn_description][CreateCcnRequest::ccn_description].
    pub fn set_ccn_description<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.ccn_description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ccn_description][CreateCcnRequest::ccn_description].
    pub fn set_or_clear_ccn_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.ccn_description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [qos_level][CreateCcnRequest::qos_level].
    pub fn set_qos_level<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.qos_level = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [qos_level][CreateCcnRequest::qos_level].
    pub fn set_or_clear_qos_level<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.qos_level = v.map(|x| x.into());
        self
    }

    /// Sets the value of [instance_charge_type][CreateCcnRequest::instance_charge_type].
    pub fn set_instance_charge_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.instance_charge_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [instance_charge_type][CreateCcnRequest::instance_charge_type].
    pub fn set_or_clear_instance_charge_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.instance_charge_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [bandwidth_limit_type][CreateCcnRequest::bandwidth_limit_type].
    pub fn set_bandwidth_limit_type<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.bandwidth_limit_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bandwidth_limit_type][CreateCcnRequest::bandwidth_limit_type].
    pub fn set_or_clear_bandwidth_limit_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.bandwidth_limit_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tags][CreateCcnRequest::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Tag>,
    {
        self.tags = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [tags][CreateCcnRequest::tags].
    pub fn set_or_clear_tags<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Tag>,
    {
        self.tags = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl wkt::message::Message for CreateCcnRequest {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.CreateCcnRequest"
    }
}

impl gax::request::Request for CreateCcnRequest {
    type Response = crate::model::CreateCcnResponse;
    const SERVICE: &'static str = crate::SERVICE;
    const VERSION: &'static str = crate::VERSION;
    const ACTION: &'static str = "CreateCcn";
}

/// The response message for `CreateCcn`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CreateCcnResponse {
    /// The new CCN.
    #[serde(rename = "Ccn", skip_serializing_if = "std::option::Option::is_none")]
    pub ccn: std::option::Option<crate::model::Ccn>,

    /// The unique id of the call, include it when contacting support.
    #[serde(rename = "RequestId", skip_serializing_if = "std::option::Option::is_none")]
    pub request_id: std::option::Option<String>,
}

impl CreateCcnResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [ccn][CreateCcnResponse::ccn].
    pub fn set_ccn<T: std::convert::Into<crate::model::Ccn>>(mut self, v: T) -> Self {
        self.ccn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ccn][CreateCcnResponse::ccn].
    pub fn set_or_clear_ccn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Ccn>,
    {
        self.ccn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [request_id][CreateCcnResponse::request_id].
    pub fn set_request_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][CreateCcnResponse::request_id].
    pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.request_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for CreateCcnResponse {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.CreateCcnResponse"
    }
}

/// The request message for `AttachCcnInstances`.
///
/// Attaches network instances to a cloud connect network.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AttachCcnInstancesRequest {
    /// The id of the CCN.
    #[serde(rename = "CcnId", skip_serializing_if = "std::option::Option::is_none")]
    pub ccn_id: std::option::Option<String>,

    /// The instances to attach.
    #[serde(rename = "Instances", skip_serializing_if = "std::option::Option::is_none")]
    pub instances: std::option::Option<std::vec::Vec<crate::model::CcnInstance>>,

    /// The account owning the CCN, required for cross-account attachments.
    #[serde(rename = "CcnUin", skip_serializing_if = "std::option::Option::is_none")]
    pub ccn_uin: std::option::Option<String>,
}

impl AttachCcnInstancesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [ccn_id][AttachCcnInstancesRequest::ccn_id].
    pub fn set_ccn_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.ccn_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ccn_id][AttachCcnInstancesRequest::ccn_id].
    pub fn set_or_clear_ccn_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.ccn_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [instances][AttachCcnInstancesRequest::instances].
    pub fn set_instances<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::CcnInstance>,
    {
        self.instances = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [instances][AttachCcnInstancesRequest::instances].
    pub fn set_or_clear_instances<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::CcnInstance>,
    {
        self.instances = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [ccn_uin][AttachCcnInstancesRequest::ccn_uin].
    pub fn set_ccn_uin<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.ccn_uin = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ccn_uin][AttachCcnInstancesRequest::ccn_uin].
    pub fn set_or_clear_ccn_uin<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.ccn_uin = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for AttachCcnInstancesRequest {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.AttachCcnInstancesRequest"
    }
}

impl gax::request::Request for AttachCcnInstancesRequest {
    type Response = crate::model::AttachCcnInstancesResponse;
    const SERVICE: &'static str = crate::SERVICE;
    const VERSION: &'static str = crate::VERSION;
    const ACTION: &'static str = "AttachCcnInstances";
}

/// The response message for `AttachCcnInstances`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AttachCcnInstancesResponse {
    /// The unique id of the call, include it when contacting support.
    #[serde(rename = "RequestId", skip_serializing_if = "std::option::Option::is_none")]
    pub request_id: std::option::Option<String>,
}

impl AttachCcnInstancesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][AttachCcnInstancesResponse::request_id].
    pub fn set_request_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][AttachCcnInstancesResponse::request_id].
    pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.request_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for AttachCcnInstancesResponse {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.AttachCcnInstancesResponse"
    }
}

/// The request message for `DetachCcnInstances`.
///
/// Detaches network instances from a cloud connect network.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DetachCcnInstancesRequest {
    /// The id of the CCN.
    #[serde(rename = "CcnId", skip_serializing_if = "std::option::Option::is_none")]
    pub ccn_id: std::option::Option<String>,

    /// The instances to detach.
    #[serde(rename = "Instances", skip_serializing_if = "std::option::Option::is_none")]
    pub instances: std::option::Option<std::vec::Vec<crate::model::CcnInstance>>,
}

impl DetachCcnInstancesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [ccn_id][DetachCcnInstancesRequest::ccn_id].
    pub fn set_ccn_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.ccn_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ccn_id][DetachCcnInstancesRequest::ccn_id].
    pub fn set_or_clear_ccn_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.ccn_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [instances][DetachCcnInstancesRequest::instances].
    pub fn set_instances<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::CcnInstance>,
    {
        self.instances = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [instances][DetachCcnInstancesRequest::instances].
    pub fn set_or_clear_instances<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::CcnInstance>,
    {
        self.instances = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl wkt::message::Message for DetachCcnInstancesRequest {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DetachCcnInstancesRequest"
    }
}

impl gax::request::Request for DetachCcnInstancesRequest {
    type Response = crate::model::DetachCcnInstancesResponse;
    const SERVICE: &'static str = crate::SERVICE;
    const VERSION: &'static str = crate::VERSION;
    const ACTION: &'static str = "DetachCcnInstances";
}

/// The response message for `DetachCcnInstances`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DetachCcnInstancesResponse {
    /// The unique id of the call, include it when contacting support.
    #[serde(rename = "RequestId", skip_serializing_if = "std::option::Option::is_none")]
    pub request_id: std::option::Option<String>,
}

impl DetachCcnInstancesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][DetachCcnInstancesResponse::request_id].
    pub fn set_request_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][DetachCcnInstancesResponse::request_id].
    pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.request_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DetachCcnInstancesResponse {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DetachCcnInstancesResponse"
    }
}

/// The request message for `DescribeCcns`.
///
/// Lists cloud connect networks.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DescribeCcnsRequest {
    /// The ids of the CCNs to query.
    #[serde(rename = "CcnIds", skip_serializing_if = "std::option::Option::is_none")]
    pub ccn_ids: std::option::Option<std::vec::Vec<String>>,

    /// Filter conditions. Within a filter the values are combined with `OR`, filters are combined with `AND`.
    #[serde(rename = "Filters", skip_serializing_if = "std::option::Option::is_none")]
    pub filters: std::option::Option<std::vec::Vec<wkt::Filter>>,

    /// The offset of the first result.
    #[serde(rename = "Offset", skip_serializing_if = "std::option::Option::is_none")]
    pub offset: std::option::Option<u64>,

    /// The maximum number of results.
    #[serde(rename = "Limit", skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<u64>,

    /// The sort field, `CreateTime` or `CcnName`.
    #[serde(rename = "OrderField", skip_serializing_if = "std::option::Option::is_none")]
    pub order_field: std::option::Option<String>,

    /// The sort direction, `ASC` or `DESC`.
    #[serde(rename = "OrderDirection", skip_serializing_if = "std::option::Option::is_none")]
    pub order_direction: std::option::Option<String>,
}

impl DescribeCcnsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [ccn_ids][DescribeCcnsRequest::ccn_ids].
    pub fn set_ccn_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.ccn_ids = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [ccn_ids][DescribeCcnsRequest::ccn_ids].
    pub fn set_or_clear_ccn_ids<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.ccn_ids = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [filters][DescribeCcnsRequest::filters].
    pub fn set_filters<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Filter>,
    {
        self.filters = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [filters][DescribeCcnsRequest::filters].
    pub fn set_or_clear_filters<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Filter>,
    {
        self.filters = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [offset][DescribeCcnsRequest::offset].
    pub fn set_offset<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.offset = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [offset][DescribeCcnsRequest::offset].
    pub fn set_or_clear_offset<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.offset = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][DescribeCcnsRequest::limit].
    pub fn set_limit<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][DescribeCcnsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [order_field][DescribeCcnsRequest::order_field].
    pub fn set_order_field<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.order_field = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [order_field][DescribeCcnsRequest::order_field].
    pub fn set_or_clear_order_field<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.order_field = v.map(|x| x.into());
        self
    }

    /// Sets the value of [order_direction][DescribeCcnsRequest::order_direction].
    pub fn set_order_direction<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.order_direction = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [order_direction][DescribeCcnsRequest::order_direction].
    pub fn set_or_clear_order_direction<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.order_direction = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DescribeCcnsRequest {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DescribeCcnsRequest"
    }
}

impl gax::request::Request for DescribeCcnsRequest {
    type Response = crate::model::DescribeCcnsResponse;
    const SERVICE: &'static str = crate::SERVICE;
    const VERSION: &'static str = crate::VERSION;
    const ACTION: &'static str = "DescribeCcns";
}

/// The response message for `DescribeCcns`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DescribeCcnsResponse {
    /// The number of CCNs matching the query.
    #[serde(rename = "TotalCount", skip_serializing_if = "std::option::Option::is_none")]
    pub total_count: std::option::Option<u64>,

    /// The CCNs.
    #[serde(rename = "CcnSet", skip_serializing_if = "std::option::Option::is_none")]
    pub ccn_set: std::option::Option<std::vec::Vec<crate::model::Ccn>>,

    /// The unique id of the call, include it when contacting support.
    #[serde(rename = "RequestId", skip_serializing_if = "std::option::Option::is_none")]
    pub request_id: std::option::Option<String>,
}

impl DescribeCcnsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [total_count][DescribeCcnsResponse::total_count].
    pub fn set_total_count<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.total_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [total_count][DescribeCcnsResponse::total_count].
    pub fn set_or_clear_total_count<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.total_count = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ccn_set][DescribeCcnsResponse::ccn_set].
    pub fn set_ccn_set<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Ccn>,
    {
        self.ccn_set = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [ccn_set][DescribeCcnsResponse::ccn_set].
    pub fn set_or_clear_ccn_set<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Ccn>,
    {
        self.ccn_set = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [request_id][DescribeCcnsResponse::request_id].
    pub fn set_request_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][DescribeCcnsResponse::request_id].
    pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.request_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DescribeCcnsResponse {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DescribeCcnsResponse"
    }
}

/// The request message for `DeleteCcn`.
///
/// Deletes a cloud connect network.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DeleteCcnRequest {
    /// The id of the CCN.
    #[serde(rename = "CcnId", skip_serializing_if = "std::option::Option::is_none")]
    pub ccn_id: std::option::Option<String>,
}

impl DeleteCcnRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [ccn_id][DeleteCcnRequest::ccn_id].
    pub fn set_ccn_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.ccn_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [ccn_id][DeleteCcnRequest::ccn_id].
    pub fn set_or_clear_ccn_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.ccn_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DeleteCcnRequest {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DeleteCcnRequest"
    }
}

impl gax::request::Request for DeleteCcnRequest {
    type Response = crate::model::DeleteCcnResponse;
    const SERVICE: &'static str = crate::SERVICE;
    const VERSION: &'static str = crate::VERSION;
    const ACTION: &'static str = "DeleteCcn";
}

/// The response message for `DeleteCcn`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DeleteCcnResponse {
    /// The unique id of the call, include it when contacting support.
    #[serde(rename = "RequestId", skip_serializing_if = "std::option::Option::is_none")]
    pub request_id: std::option::Option<String>,
}

impl DeleteCcnResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][DeleteCcnResponse::request_id].
    pub fn set_request_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][DeleteCcnResponse::request_id].
    pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.request_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DeleteCcnResponse {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DeleteCcnResponse"
    }
}

/// The request message for `CreateSecurityGroup`.
///
/// Creates a security group.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CreateSecurityGroupRequest {
    /// The name of the security group.
    #[serde(rename = "GroupName", skip_serializing_if = "std::option::Option::is_none")]
    pub group_name: std::option::Option<String>,

    /// The description of the security group.
    #[serde(rename = "GroupDescription", skip_serializing_if = "std::option::Option::is_none")]
    pub group_description: std::option::Option<String>,

    /// The project id, defaults to `0`.
    #[serde(rename = "ProjectId", skip_serializing_if = "std::option::Option::is_none")]
    pub project_id: std::option::Option<String>,

    /// The tags to attach to the resource.
    #[serde(rename = "Tags", skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::vec::Vec<wkt::Tag>>,
}

impl CreateSecurityGroupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [group_name][CreateSecurityGroupRequest::group_name].
    pub fn set_group_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.group_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [group_name][CreateSecurityGroupRequest::group_name].
    pub fn set_or_clear_group_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.group_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [group_description][CreateSecurityGroupRequest::group_description].
    pub fn set_group_description<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.group_description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [group_description][CreateSecurityGroupRequest::group_description].
    pub fn set_or_clear_group_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.group_description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [project_id][CreateSecurityGroupRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.project_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [project_id][CreateSecurityGroupRequest::project_id].
    pub fn set_or_clear_project_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.project_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tags][CreateSecurityGroupRequest::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Tag>,
    {
        self.tags = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [tags][CreateSecurityGroupRequest::tags].
    pub fn set_or_clear_tags<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Tag>,
    {
        self.tags = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl wkt::message::Message for CreateSecurityGroupRequest {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.CreateSecurityGroupRequest"
    }
}

impl gax::request::Request for CreateSecurityGroupRequest {
    type Response = crate::model::CreateSecurityGroupResponse;
    const SERVICE: &'static str = crate::SERVICE;
    const VERSION: &'static str = crate::VERSION;
    const ACTION: &'static str = "CreateSecurityGroup";
}

/// The response message for `CreateSecurityGroup`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CreateSecurityGroupResponse {
    /// The new security group.
    #[serde(rename = "SecurityGroup", skip_serializing_if = "std::option::Option::is_none")]
    pub security_group: std::option::Option<crate::model::SecurityGroup>,

    /// The unique id of the call, include it when contacting support.
    #[serde(rename = "RequestId", skip_serializing_if = "std::option::Option::is_none")]
    pub request_id: std::option::Option<String>,
}

impl CreateSecurityGroupResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [security_group][CreateSecurityGroupResponse::security_group].
    pub fn set_security_group<T: std::convert::Into<crate::model::SecurityGroup>>(mut self, v: T) -> Self {
        self.security_group = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [security_group][CreateSecurityGroupResponse::security_group].
    pub fn set_or_clear_security_group<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SecurityGroup>,
    {
        self.security_group = v.map(|x| x.into());
        self
    }

    /// Sets the value of [request_id][CreateSecurityGroupResponse::request_id].
    pub fn set_request_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][CreateSecurityGroupResponse::request_id].
    pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.request_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for CreateSecurityGroupResponse {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.CreateSecurityGroupResponse"
    }
}

/// The request message for `DeleteSecurityGroup`.
///
/// Deletes a security group.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DeleteSecurityGroupRequest {
    /// The id of the security group.
    #[serde(rename = "SecurityGroupId", skip_serializing_if = "std::option::Option::is_none")]
    pub security_group_id: std::option::Option<String>,
}

impl DeleteSecurityGroupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [security_group_id][DeleteSecurityGroupRequest::security_group_id].
    pub fn set_security_group_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.security_group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [security_group_id][DeleteSecurityGroupRequest::security_group_id].
    pub fn set_or_clear_security_group_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.security_group_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DeleteSecurityGroupRequest {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DeleteSecurityGroupRequest"
    }
}

impl gax::request::Request for DeleteSecurityGroupRequest {
    type Response = crate::model::DeleteSecurityGroupResponse;
    const SERVICE: &'static str = crate::SERVICE;
    const VERSION: &'static str = crate::VERSION;
    const ACTION: &'static str = "DeleteSecurityGroup";
}

/// The response message for `DeleteSecurityGroup`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DeleteSecurityGroupResponse {
    /// The unique id of the call, include it when contacting support.
    #[serde(rename = "RequestId", skip_serializing_if = "std::option::Option::is_none")]
    pub request_id: std::option::Option<String>,
}

impl DeleteSecurityGroupResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][DeleteSecurityGroupResponse::request_id].
    pub fn set_request_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][DeleteSecurityGroupResponse::request_id].
    pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.request_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DeleteSecurityGroupResponse {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DeleteSecurityGroupResponse"
    }
}

/// The request message for `CreateSecurityGroupPolicies`.
///
/// Adds rules to a security group.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CreateSecurityGroupPoliciesRequest {
    /// The id of the security group.
    #[serde(rename = "SecurityGroupId", skip_serializing_if = "std::option::Option::is_none")]
    pub security_group_id: std::option::Option<String>,

    /// The rules to add.
    #[serde(rename = "SecurityGroupPolicySet", skip_serializing_if = "std::option::Option::is_none")]
    pub security_group_policy_set: std::option::Option<crate::model::SecurityGroupPolicySet>,
}

impl CreateSecurityGroupPoliciesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [security_group_id][CreateSecurityGroupPoliciesRequest::security_group_id].
    pub fn set_security_group_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.security_group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [security_group_id][CreateSecurityGroupPoliciesRequest::security_group_id].
    pub fn set_or_clear_security_group_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.security_group_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [security_group_policy_set][CreateSecurityGroupPoliciesRequest::security_group_policy_set].
    pub fn set_security_group_policy_set<T: std::convert::Into<crate::model::SecurityGroupPolicySet>>(mut self, v: T) -> Self {
        self.security_group_policy_set = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [security_group_policy_set][CreateSecurityGroupPoliciesRequest::security_group_policy_set].
    pub fn set_or_clear_security_group_policy_set<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SecurityGroupPolicySet>,
    {
        self.security_group_policy_set = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for CreateSecurityGroupPoliciesRequest {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.CreateSecurityGroupPoliciesRequest"
    }
}

impl gax::request::Request for CreateSecurityGroupPoliciesRequest {
    type Response = crate::model::CreateSecurityGroupPoliciesResponse;
    const SERVICE: &'static str = crate::SERVICE;
    const VERSION: &'static str = crate::VERSION;
    const ACTION: &'static str = "CreateSecurityGroupPolicies";
}

/// The response message for `CreateSecurityGroupPolicies`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CreateSecurityGroupPoliciesResponse {
    /// The unique id of the call, include it when contacting support.
    #[serde(rename = "RequestId", skip_serializing_if = "std::option::Option::is_none")]
    pub request_id: std::option::Option<String>,
}

impl CreateSecurityGroupPoliciesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][CreateSecurityGroupPoliciesResponse::request_id].
    pub fn set_request_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][CreateSecurityGroupPoliciesResponse::request_id].
    pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.request_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for CreateSecurityGroupPoliciesResponse {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.CreateSecurityGroupPoliciesResponse"
    }
}

/// The request message for `DescribeSecurityGroups`.
///
/// Lists security groups.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DescribeSecurityGroupsRequest {
    /// The ids of the security groups to query.
    #[serde(rename = "SecurityGroupIds", skip_serializing_if = "std::option::Option::is_none")]
    pub security_group_ids: std::option::Option<std::vec::Vec<String>>,

    /// Filter conditions. Within a filter the values are combined with `OR`, filters are combined with `AND`.
    #[serde(rename = "Filters", skip_serializing_if = "std::option::Option::is_none")]
    pub filters: std::option::Option<std::vec::Vec<wkt::Filter>>,

    /// The offset of the first result.
    #[serde(rename = "Offset", skip_serializing_if = "std::option::Option::is_none")]
    pub offset: std::option::Option<String>,

    /// The maximum number of results.
    #[serde(rename = "Limit", skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<String>,
}

impl DescribeSecurityGroupsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [security_group_ids][DescribeSecurityGroupsRequest::security_group_ids].
    pub fn set_security_group_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.security_group_ids = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [security_group_ids][DescribeSecurityGroupsRequest::security_group_ids].
    pub fn set_or_clear_security_group_ids<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.security_group_ids = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [filters][DescribeSecurityGroupsRequest::filters].
    pub fn set_filters<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Filter>,
    {
        self.filters = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [filters][DescribeSecurityGroupsRequest::filters].
    pub fn set_or_clear_filters<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Filter>,
    {
        self.filters = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [offset][DescribeSecurityGroupsRequest::offset].
    pub fn set_offset<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.offset = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [offset][DescribeSecurityGroupsRequest::offset].
    pub fn set_or_clear_offset<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.offset = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][DescribeSecurityGroupsRequest::limit].
    pub fn set_limit<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][DescribeSecurityGroupsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.limit = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DescribeSecurityGroupsRequest {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DescribeSecurityGroupsRequest"
    }
}

impl gax::request::Request for DescribeSecurityGroupsRequest {
    type Response = crate::model::DescribeSecurityGroupsResponse;
    const SERVICE: &'static str = crate::SERVICE;
    const VERSION: &'static str = crate::VERSION;
    const ACTION: &'static str = "DescribeSecurityGroups";
}

/// The response message for `DescribeSecurityGroups`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DescribeSecurityGroupsResponse {
    /// The security groups.
    #[serde(rename = "SecurityGroupSet", skip_serializing_if = "std::option::Option::is_none")]
    pub security_group_set: std::option::Option<std::vec::Vec<crate::model::SecurityGroup>>,

    /// The number of security groups matching the query.
    #[serde(rename = "TotalCount", skip_serializing_if = "std::option::Option::is_none")]
    pub total_count: std::option::Option<u64>,

    /// The unique id of the call, include it when contacting support.
    #[serde(rename = "RequestId", skip_serializing_if = "std::option::Option::is_none")]
    pub request_id: std::option::Option<String>,
}

impl DescribeSecurityGroupsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [security_group_set][DescribeSecurityGroupsResponse::security_group_set].
    pub fn set_security_group_set<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::SecurityGroup>,
    {
        self.security_group_set = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [security_group_set][DescribeSecurityGroupsResponse::security_group_set].
    pub fn set_or_clear_security_group_set<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::SecurityGroup>,
    {
        self.security_group_set = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [total_count][DescribeSecurityGroupsResponse::total_count].
    pub fn set_total_count<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.total_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [total_count][DescribeSecurityGroupsResponse::total_count].
    pub fn set_or_clear_total_count<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.total_count = v.map(|x| x.into());
        self
    }

    /// Sets the value of [request_id][DescribeSecurityGroupsResponse::request_id].
    pub fn set_request_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][DescribeSecurityGroupsResponse::request_id].
    pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.request_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DescribeSecurityGroupsResponse {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DescribeSecurityGroupsResponse"
    }
}

/// The request message for `CreateRouteTable`.
///
/// Creates a route table.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CreateRouteTableRequest {
    /// The id of the VPC.
    #[serde(rename = "VpcId", skip_serializing_if = "std::option::Option::is_none")]
    pub vpc_id: std::option::Option<String>,

    /// The name of the route table.
    #[serde(rename = "RouteTableName", skip_serializing_if = "std::option::Option::is_none")]
    pub route_table_name: std::option::Option<String>,

    /// The tags to attach to the resource.
    #[serde(rename = "Tags", skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::vec::Vec<wkt::Tag>>,
}

impl CreateRouteTableRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [vpc_id][CreateRouteTableRequest::vpc_id].
    pub fn set_vpc_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.vpc_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vpc_id][CreateRouteTableRequest::vpc_id].
    pub fn set_or_clear_vpc_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.vpc_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [route_table_name][CreateRouteTableRequest::route_table_name].
    pub fn set_route_table_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.route_table_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [route_table_name][CreateRouteTableRequest::route_table_name].
    pub fn set_or_clear_route_table_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.route_table_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tags][CreateRouteTableRequest::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Tag>,
    {
        self.tags = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [tags][CreateRouteTableRequest::tags].
    pub fn set_or_clear_tags<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Tag>,
    {
        self.tags = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl wkt::message::Message for CreateRouteTableRequest {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.CreateRouteTableRequest"
    }
}

impl gax::request::Request for CreateRouteTableRequest {
    type Response = crate::model::CreateRouteTableResponse;
    const SERVICE: &'static str = crate::SERVICE;
    const VERSION: &'static str = crate::VERSION;
    const ACTION: &'static str = "CreateRouteTable";
}

/// The response message for `CreateRouteTable`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CreateRouteTableResponse {
    /// The new route table.
    #[serde(rename = "RouteTable", skip_serializing_if = "std::option::Option::is_none")]
    pub route_table: std::option::Option<crate::model::RouteTable>,

    /// The unique id of the call, include it when contacting support.
    #[serde(rename = "RequestId", skip_serializing_if = "std::option::Option::is_none")]
    pub request_id: std::option::Option<String>,
}

impl CreateRouteTableResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [route_table][CreateRouteTableResponse::route_table].
    pub fn set_route_table<T: std::convert::Into<crate::model::RouteTable>>(mut self, v: T) -> Self {
        self.route_table = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [route_table][CreateRouteTableResponse::route_table].
    pub fn set_or_clear_route_table<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::RouteTable>,
    {
        self.route_table = v.map(|x| x.into());
        self
    }

    /// Sets the value of [request_id][CreateRouteTableResponse::request_id].
    pub fn set_request_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][CreateRouteTableResponse::request_id].
    pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.request_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for CreateRouteTableResponse {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.CreateRouteTableResponse"
    }
}

/// The request message for `CreateRoutes`.
///
/// Adds routes to a route table.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CreateRoutesRequest {
    /// The id of the route table.
    #[serde(rename = "RouteTableId", skip_serializing_if = "std::option::Option::is_none")]
    pub route_table_id: std::option::Option<String>,

    /// The routes to add.
    #[serde(rename = "Routes", skip_serializing_if = "std::option::Option::is_none")]
    pub routes: std::option::Option<std::vec::Vec<crate::model::Route>>,
}

impl CreateRoutesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [route_table_id][CreateRoutesRequest::route_table_id].
    pub fn set_route_table_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.route_table_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [route_table_id][CreateRoutesRequest::route_table_id].
    pub fn set_or_clear_route_table_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.route_table_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [routes][CreateRoutesRequest::routes].
    pub fn set_routes<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Route>,
    {
        self.routes = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [routes][CreateRoutesRequest::routes].
    pub fn set_or_clear_routes<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Route>,
    {
        self.routes = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl wkt::message::Message for CreateRoutesRequest {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.CreateRoutesRequest"
    }
}

impl gax::request::Request for CreateRoutesRequest {
    type Response = crate::model::CreateRoutesResponse;
    const SERVICE: &'static str = crate::SERVICE;
    const VERSION: &'static str = crate::VERSION;
    const ACTION: &'static str = "CreateRoutes";
}

/// The response message for `CreateRoutes`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CreateRoutesResponse {
    /// The number of routes added.
    #[serde(rename = "TotalCount", skip_serializing_if = "std::option::Option::is_none")]
    pub total_count: std::option::Option<u64>,

    /// The updated route tables.
    #[serde(rename = "RouteTableSet", skip_serializing_if = "std::option::Option::is_none")]
    pub route_table_set: std::option::Option<std::vec::Vec<crate::model::RouteTable>>,

    /// The unique id of the call, include it when contacting support.
    #[serde(rename = "RequestId", skip_serializing_if = "std::option::Option::is_none")]
    pub request_id: std::option::Option<String>,
}

impl CreateRoutesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [total_count][CreateRoutesResponse::total_count].
    pub fn set_total_count<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.total_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [total_count][CreateRoutesResponse::total_count].
    pub fn set_or_clear_total_count<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.total_count = v.map(|x| x.into());
        self
    }

    /// Sets the value of [route_table_set][CreateRoutesResponse::route_table_set].
    pub fn set_route_table_set<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::RouteTable>,
    {
        self.route_table_set = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [route_table_set][CreateRoutesResponse::route_table_set].
    pub fn set_or_clear_route_table_set<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::RouteTable>,
    {
        self.route_table_set = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [request_id][CreateRoutesResponse::request_id].
    pub fn set_request_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][CreateRoutesResponse::request_id].
    pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.request_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for CreateRoutesResponse {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.CreateRoutesResponse"
    }
}

/// The request message for `DeleteRouteTable`.
///
/// Deletes a route table.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DeleteRouteTableRequest {
    /// The id of the route table.
    #[serde(rename = "RouteTableId", skip_serializing_if = "std::option::Option::is_none")]
    pub route_table_id: std::option::Option<String>,
}

impl DeleteRouteTableRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [route_table_id][DeleteRouteTableRequest::route_table_id].
    pub fn set_route_table_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.route_table_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [route_table_id][DeleteRouteTableRequest::route_table_id].
    pub fn set_or_clear_route_table_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.route_table_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DeleteRouteTableRequest {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DeleteRouteTableRequest"
    }
}

impl gax::request::Request for DeleteRouteTableRequest {
    type Response = crate::model::DeleteRouteTableResponse;
    const SERVICE: &'static str = crate::SERVICE;
    const VERSION: &'static str = crate::VERSION;
    const ACTION: &'static str = "DeleteRouteTable";
}

/// The response message for `DeleteRouteTable`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DeleteRouteTableResponse {
    /// The unique id of the call, include it when contacting support.
    #[serde(rename = "RequestId", skip_serializing_if = "std::option::Option::is_none")]
    pub request_id: std::option::Option<String>,
}

impl DeleteRouteTableResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][DeleteRouteTableResponse::request_id].
    pub fn set_request_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][DeleteRouteTableResponse::request_id].
    pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.request_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DeleteRouteTableResponse {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DeleteRouteTableResponse"
    }
}

/// The request message for `DescribeRouteTables`.
///
/// Lists route tables.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DescribeRouteTablesRequest {
    /// Filter conditions. Within a filter the values are combined with `OR`, filters are combined with `AND`.
    #[serde(rename = "Filters", skip_serializing_if = "std::option::Option::is_none")]
    pub filters: std::option::Option<std::vec::Vec<wkt::Filter>>,

    /// The ids of the route tables to query.
    #[serde(rename = "RouteTableIds", skip_serializing_if = "std::option::Option::is_none")]
    pub route_table_ids: std::option::Option<std::vec::Vec<String>>,

    /// The offset of the first result.
    #[serde(rename = "Offset", skip_serializing_if = "std::option::Option::is_none")]
    pub offset: std::option::Option<String>,

    /// The maximum number of results.
    #[serde(rename = "Limit", skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<String>,
}

impl DescribeRouteTablesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [filters][DescribeRouteTablesRequest::filters].
    pub fn set_filters<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Filter>,
    {
        self.filters = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [filters][DescribeRouteTablesRequest::filters].
    pub fn set_or_clear_filters<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<wkt::Filter>,
    {
        self.filters = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [route_table_ids][DescribeRouteTablesRequest::route_table_ids].
    pub fn set_route_table_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.route_table_ids = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [route_table_ids][DescribeRouteTablesRequest::route_table_ids].
    pub fn set_or_clear_route_table_ids<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.route_table_ids = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [offset][DescribeRouteTablesRequest::offset].
    pub fn set_offset<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.offset = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [offset][DescribeRouteTablesRequest::offset].
    pub fn set_or_clear_offset<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.offset = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][DescribeRouteTablesRequest::limit].
    pub fn set_limit<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][DescribeRouteTablesRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.limit = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DescribeRouteTablesRequest {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DescribeRouteTablesRequest"
    }
}

impl gax::request::Request for DescribeRouteTablesRequest {
    type Response = crate::model::DescribeRouteTablesResponse;
    const SERVICE: &'static str = crate::SERVICE;
    const VERSION: &'static str = crate::VERSION;
    const ACTION: &'static str = "DescribeRouteTables";
}

/// The response message for `DescribeRouteTables`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DescribeRouteTablesResponse {
    /// The number of route tables matching the query.
    #[serde(rename = "TotalCount", skip_serializing_if = "std::option::Option::is_none")]
    pub total_count: std::option::Option<u64>,

    /// The route tables.
    #[serde(rename = "RouteTableSet", skip_serializing_if = "std::option::Option::is_none")]
    pub route_table_set: std::option::Option<std::vec::Vec<crate::model::RouteTable>>,

    /// The unique id of the call, include it when contacting support.
    #[serde(rename = "RequestId", skip_serializing_if = "std::option::Option::is_none")]
    pub request_id: std::option::Option<String>,
}

impl DescribeRouteTablesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [total_count][DescribeRouteTablesResponse::total_count].
    pub fn set_total_count<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.total_count = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [total_count][DescribeRouteTablesResponse::total_count].
    pub fn set_or_clear_total_count<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.total_count = v.map(|x| x.into());
        self
    }

    /// Sets the value of [route_table_set][DescribeRouteTablesResponse::route_table_set].
    pub fn set_route_table_set<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::RouteTable>,
    {
        self.route_table_set = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [route_table_set][DescribeRouteTablesResponse::route_table_set].
    pub fn set_or_clear_route_table_set<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::RouteTable>,
    {
        self.route_table_set = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [request_id][DescribeRouteTablesResponse::request_id].
    pub fn set_request_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][DescribeRouteTablesResponse::request_id].
    pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.request_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DescribeRouteTablesResponse {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DescribeRouteTablesResponse"
    }
}

/// The request message for `DescribeAccountAttributes`.
///
/// Returns the attributes of the account.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DescribeAccountAttributesRequest {}

impl DescribeAccountAttributesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

impl wkt::message::Message for DescribeAccountAttributesRequest {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DescribeAccountAttributesRequest"
    }
}

impl gax::request::Request for DescribeAccountAttributesRequest {
    type Response = crate::model::DescribeAccountAttributesResponse;
    const SERVICE: &'static str = crate::SERVICE;
    const VERSION: &'static str = crate::VERSION;
    const ACTION: &'static str = "DescribeAccountAttributes";
}

/// The response message for `DescribeAccountAttributes`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DescribeAccountAttributesResponse {
    /// The attributes.
    #[serde(rename = "AccountAttributeSet", skip_serializing_if = "std::option::Option::is_none")]
    pub account_attribute_set: std::option::Option<std::vec::Vec<crate::model::AccountAttribute>>,

    /// The unique id of the call, include it when contacting support.
    #[serde(rename = "RequestId", skip_serializing_if = "std::option::Option::is_none")]
    pub request_id: std::option::Option<String>,
}

impl DescribeAccountAttributesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [account_attribute_set][DescribeAccountAttributesResponse::account_attribute_set].
    pub fn set_account_attribute_set<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::AccountAttribute>,
    {
        self.account_attribute_set = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [account_attribute_set][DescribeAccountAttributesResponse::account_attribute_set].
    pub fn set_or_clear_account_attribute_set<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::AccountAttribute>,
    {
        self.account_attribute_set = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [request_id][DescribeAccountAttributesResponse::request_id].
    pub fn set_request_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][DescribeAccountAttributesResponse::request_id].
    pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.request_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DescribeAccountAttributesResponse {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DescribeAccountAttributesResponse"
    }
}

/// The request message for `DescribeTaskResult`.
///
/// Returns the result of an asynchronous task.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DescribeTaskResultRequest {
    /// The id of the task.
    #[serde(rename = "TaskId", skip_serializing_if = "std::option::Option::is_none")]
    pub task_id: std::option::Option<u64>,

    /// The name of the order, used when the task id is unknown.
    #[serde(rename = "DealName", skip_serializing_if = "std::option::Option::is_none")]
    pub deal_name: std::option::Option<String>,
}

impl DescribeTaskResultRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [task_id][DescribeTaskResultRequest::task_id].
    pub fn set_task_id<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.task_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [task_id][DescribeTaskResultRequest::task_id].
    pub fn set_or_clear_task_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.task_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [deal_name][DescribeTaskResultRequest::deal_name].
    pub fn set_deal_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.deal_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [deal_name][DescribeTaskResultRequest::deal_name].
    pub fn set_or_clear_deal_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.deal_name = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DescribeTaskResultRequest {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DescribeTaskResultRequest"
    }
}

impl gax::request::Request for DescribeTaskResultRequest {
    type Response = crate::model::DescribeTaskResultResponse;
    const SERVICE: &'static str = crate::SERVICE;
    const VERSION: &'static str = crate::VERSION;
    const ACTION: &'static str = "DescribeTaskResult";
}

/// The response message for `DescribeTaskResult`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DescribeTaskResultResponse {
    /// The id of the task.
    #[serde(rename = "TaskId", skip_serializing_if = "std::option::Option::is_none")]
    pub task_id: std::option::Option<u64>,

    /// The result, one of `SUCCESS`, `FAILED`, or `RUNNING`.
    #[serde(rename = "Result", skip_serializing_if = "std::option::Option::is_none")]
    pub result: std::option::Option<String>,

    /// The unique id of the call, include it when contacting support.
    #[serde(rename = "RequestId", skip_serializing_if = "std::option::Option::is_none")]
    pub request_id: std::option::Option<String>,
}

impl DescribeTaskResultResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [task_id][DescribeTaskResultResponse::task_id].
    pub fn set_task_id<T: std::convert::Into<u64>>(mut self, v: T) -> Self {
        self.task_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [task_id][DescribeTaskResultResponse::task_id].
    pub fn set_or_clear_task_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<u64>,
    {
        self.task_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [result][DescribeTaskResultResponse::result].
    pub fn set_result<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.result = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [result][DescribeTaskResultResponse::result].
    pub fn set_or_clear_result<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.result = v.map(|x| x.into());
        self
    }

    /// Sets the value of [request_id][DescribeTaskResultResponse::request_id].
    pub fn set_request_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][DescribeTaskResultResponse::request_id].
    pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.request_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DescribeTaskResultResponse {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DescribeTaskResultResponse"
    }
}

/// The request message for `DescribeVpcLimits`.
///
/// Returns the quotas of the VPC product.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DescribeVpcLimitsRequest {
    /// The quotas to query.
    #[serde(rename = "LimitTypes", skip_serializing_if = "std::option::Option::is_none")]
    pub limit_types: std::option::Option<std::vec::Vec<String>>,
}

impl DescribeVpcLimitsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [limit_types][DescribeVpcLimitsRequest::limit_types].
    pub fn set_limit_types<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.limit_types = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [limit_types][DescribeVpcLimitsRequest::limit_types].
    pub fn set_or_clear_limit_types<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.limit_types = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl wkt::message::Message for DescribeVpcLimitsRequest {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DescribeVpcLimitsRequest"
    }
}

impl gax::request::Request for DescribeVpcLimitsRequest {
    type Response = crate::model::DescribeVpcLimitsResponse;
    const SERVICE: &'static str = crate::SERVICE;
    const VERSION: &'static str = crate::VERSION;
    const ACTION: &'static str = "DescribeVpcLimits";
}

/// The response message for `DescribeVpcLimits`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DescribeVpcLimitsResponse {
    /// The quotas.
    #[serde(rename = "VpcLimitSet", skip_serializing_if = "std::option::Option::is_none")]
    pub vpc_limit_set: std::option::Option<std::vec::Vec<crate::model::VpcLimit>>,

    /// The unique id of the call, include it when contacting support.
    #[serde(rename = "RequestId", skip_serializing_if = "std::option::Option::is_none")]
    pub request_id: std::option::Option<String>,
}

impl DescribeVpcLimitsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [vpc_limit_set][DescribeVpcLimitsResponse::vpc_limit_set].
    pub fn set_vpc_limit_set<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::VpcLimit>,
    {
        self.vpc_limit_set = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [vpc_limit_set][DescribeVpcLimitsResponse::vpc_limit_set].
    pub fn set_or_clear_vpc_limit_set<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::VpcLimit>,
    {
        self.vpc_limit_set = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [request_id][DescribeVpcLimitsResponse::request_id].
    pub fn set_request_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][DescribeVpcLimitsResponse::request_id].
    pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.request_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DescribeVpcLimitsResponse {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DescribeVpcLimitsResponse"
    }
}

/// The request message for `DescribeBandwidthPackageBillUsage`.
///
/// Returns the billed usage of a bandwidth package.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DescribeBandwidthPackageBillUsageRequest {
    /// The id of the bandwidth package.
    #[serde(rename = "BandwidthPackageId", skip_serializing_if = "std::option::Option::is_none")]
    pub bandwidth_package_id: std::option::Option<String>,
}

impl DescribeBandwidthPackageBillUsageRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [bandwidth_package_id][DescribeBandwidthPackageBillUsageRequest::bandwidth_package_id].
    pub fn set_bandwidth_package_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.bandwidth_package_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bandwidth_package_id][DescribeBandwidthPackageBillUsageRequest::bandwidth_package_id].
    pub fn set_or_clear_bandwidth_package_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.bandwidth_package_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DescribeBandwidthPackageBillUsageRequest {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DescribeBandwidthPackageBillUsageRequest"
    }
}

impl gax::request::Request for DescribeBandwidthPackageBillUsageRequest {
    type Response = crate::model::DescribeBandwidthPackageBillUsageResponse;
    const SERVICE: &'static str = crate::SERVICE;
    const VERSION: &'static str = crate::VERSION;
    const ACTION: &'static str = "DescribeBandwidthPackageBillUsage";
}

/// The response message for `DescribeBandwidthPackageBillUsage`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DescribeBandwidthPackageBillUsageResponse {
    /// The billed usage.
    #[serde(rename = "BandwidthPackageBillBandwidthSet", skip_serializing_if = "std::option::Option::is_none")]
    pub bandwidth_package_bill_bandwidth_set: std::option::Option<std::vec::Vec<crate::model::BandwidthPackageBillBandwidth>>,

    /// The unique id of the call, include it when contacting support.
    #[serde(rename = "RequestId", skip_serializing_if = "std::option::Option::is_none")]
    pub request_id: std::option::Option<String>,
}

impl DescribeBandwidthPackageBillUsageResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [bandwidth_package_bill_bandwidth_set][DescribeBandwidthPackageBillUsageResponse::bandwidth_package_bill_bandwidth_set].
    pub fn set_bandwidth_package_bill_bandwidth_set<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::BandwidthPackageBillBandwidth>,
    {
        self.bandwidth_package_bill_bandwidth_set = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [bandwidth_package_bill_bandwidth_set][DescribeBandwidthPackageBillUsageResponse::bandwidth_package_bill_bandwidth_set].
    pub fn set_or_clear_bandwidth_package_bill_bandwidth_set<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::BandwidthPackageBillBandwidth>,
    {
        self.bandwidth_package_bill_bandwidth_set = v.map(|x| x.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [request_id][DescribeBandwidthPackageBillUsageResponse::request_id].
    pub fn set_request_id<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.request_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][DescribeBandwidthPackageBillUsageResponse::request_id].
    pub fn set_or_clear_request_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<String>,
    {
        self.request_id = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DescribeBandwidthPackageBillUsageResponse {
    fn typename() -> &'static str {
        "tencentcloud.vpc.v20170312.DescribeBandwidthPackageBillUsageResponse"
    }
}
