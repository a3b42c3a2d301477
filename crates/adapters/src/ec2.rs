// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Compute-instance and network client (EC2).

use crate::error::AdapterError;
use async_trait::async_trait;
use aws_sdk_ec2::error::DisplayErrorContext;
use aws_sdk_ec2::types as ec2;
use jt_core::{
    InstanceDetail, NetworkInterfaceDetail, SecurityGroupRef, SubnetDetail, Tag, VpcDetail,
};

/// Read-only view of the compute-instance service.
#[async_trait]
pub trait ComputeApi: Send + Sync {
    async fn describe_instance(&self, id: &str) -> Result<Option<InstanceDetail>, AdapterError>;

    /// Describe a network interface by ENI id (`eni-...`) or locate it by
    /// attachment id — attempt records carry either shape.
    async fn describe_network_interface(
        &self,
        reference: &str,
    ) -> Result<Option<NetworkInterfaceDetail>, AdapterError>;

    async fn describe_subnet(&self, id: &str) -> Result<Option<SubnetDetail>, AdapterError>;

    async fn describe_vpc(&self, id: &str) -> Result<Option<VpcDetail>, AdapterError>;
}

/// EC2 implementation.
#[derive(Clone)]
pub struct Ec2Compute {
    client: aws_sdk_ec2::Client,
}

impl Ec2Compute {
    pub fn new(client: aws_sdk_ec2::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ComputeApi for Ec2Compute {
    async fn describe_instance(&self, id: &str) -> Result<Option<InstanceDetail>, AdapterError> {
        let out = self.client.describe_instances().instance_ids(id).send().await.map_err(|e| {
            AdapterError::Request(format!("DescribeInstances: {}", DisplayErrorContext(e)))
        })?;
        Ok(out
            .reservations()
            .iter()
            .flat_map(|r| r.instances())
            .next()
            .map(map_instance))
    }

    async fn describe_network_interface(
        &self,
        reference: &str,
    ) -> Result<Option<NetworkInterfaceDetail>, AdapterError> {
        let request = if reference.starts_with("eni-") {
            self.client.describe_network_interfaces().network_interface_ids(reference)
        } else {
            self.client.describe_network_interfaces().filters(
                ec2::Filter::builder()
                    .name("attachment.attachment-id")
                    .values(reference)
                    .build(),
            )
        };
        let out = request.send().await.map_err(|e| {
            AdapterError::Request(format!(
                "DescribeNetworkInterfaces: {}",
                DisplayErrorContext(e)
            ))
        })?;
        Ok(out.network_interfaces().first().map(map_network_interface))
    }

    async fn describe_subnet(&self, id: &str) -> Result<Option<SubnetDetail>, AdapterError> {
        let out = self.client.describe_subnets().subnet_ids(id).send().await.map_err(|e| {
            AdapterError::Request(format!("DescribeSubnets: {}", DisplayErrorContext(e)))
        })?;
        Ok(out.subnets().first().map(|s| SubnetDetail {
            id: s.subnet_id().unwrap_or_default().to_string(),
            vpc_id: s.vpc_id().map(str::to_string),
        }))
    }

    async fn describe_vpc(&self, id: &str) -> Result<Option<VpcDetail>, AdapterError> {
        let out = self.client.describe_vpcs().vpc_ids(id).send().await.map_err(|e| {
            AdapterError::Request(format!("DescribeVpcs: {}", DisplayErrorContext(e)))
        })?;
        Ok(out.vpcs().first().map(map_vpc))
    }
}

fn map_tags(tags: &[ec2::Tag]) -> Vec<Tag> {
    tags.iter()
        .filter_map(|t| {
            t.key().map(|key| Tag {
                key: key.to_string(),
                value: t.value().unwrap_or_default().to_string(),
            })
        })
        .collect()
}

fn map_instance(instance: &ec2::Instance) -> InstanceDetail {
    InstanceDetail {
        id: instance.instance_id().unwrap_or_default().to_string(),
        private_ip: instance.private_ip_address().map(str::to_string),
        public_ip: instance.public_ip_address().map(str::to_string),
        subnet_id: instance.subnet_id().map(str::to_string),
        vpc_id: instance.vpc_id().map(str::to_string),
        security_groups: instance
            .security_groups()
            .iter()
            .map(|g| SecurityGroupRef {
                id: g.group_id().map(str::to_string),
                name: g.group_name().map(str::to_string),
            })
            .collect(),
        state: instance
            .state()
            .and_then(|s| s.name())
            .map(|n| n.as_str().to_string()),
        instance_type: instance.instance_type().map(|t| t.as_str().to_string()),
        availability_zone: instance
            .placement()
            .and_then(|p| p.availability_zone())
            .map(str::to_string),
    }
}

fn map_network_interface(eni: &ec2::NetworkInterface) -> NetworkInterfaceDetail {
    NetworkInterfaceDetail {
        id: eni.network_interface_id().unwrap_or_default().to_string(),
        vpc_id: eni.vpc_id().map(str::to_string),
        subnet_id: eni.subnet_id().map(str::to_string),
        attached_instance_id: eni.attachment().and_then(|a| a.instance_id()).map(str::to_string),
    }
}

fn map_vpc(vpc: &ec2::Vpc) -> VpcDetail {
    let tags = map_tags(vpc.tags());
    VpcDetail {
        id: vpc.vpc_id().unwrap_or_default().to_string(),
        name: VpcDetail::name_from_tags(&tags),
        cidr_block: vpc.cidr_block().map(str::to_string),
        ipv6_cidr_block: vpc
            .ipv6_cidr_block_association_set()
            .iter()
            .filter_map(|a| a.ipv6_cidr_block())
            .find(|cidr| !cidr.is_empty())
            .map(str::to_string),
        state: vpc.state().map(|s| s.as_str().to_string()),
        dhcp_options_id: vpc.dhcp_options_id().map(str::to_string),
        tags,
    }
}
