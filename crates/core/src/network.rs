// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Network records derived transitively from the resolved host or task.

use serde::{Deserialize, Serialize};

/// Key/value resource tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

/// Described network interface. Either looked up by ENI id or located via
/// its attachment id, depending on what the attempt recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkInterfaceDetail {
    pub id: String,
    pub vpc_id: Option<String>,
    pub subnet_id: Option<String>,
    /// Instance the interface is attached to, from attachment metadata.
    pub attached_instance_id: Option<String>,
}

/// Subnet reference carried in a compute environment's resource spec.
pub type SubnetRef = String;

/// Described subnet; only the VPC linkage matters here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubnetDetail {
    pub id: String,
    pub vpc_id: Option<String>,
}

/// One virtual network, enriched from a single describe call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VpcDetail {
    pub id: String,
    /// Value of the `Name` tag, when present.
    pub name: Option<String>,
    pub cidr_block: Option<String>,
    /// First non-empty IPv6 association.
    pub ipv6_cidr_block: Option<String>,
    pub state: Option<String>,
    pub dhcp_options_id: Option<String>,
    pub tags: Vec<Tag>,
}

impl VpcDetail {
    /// Pull the `Name` tag out of a tag list.
    pub fn name_from_tags(tags: &[Tag]) -> Option<String> {
        tags.iter().find(|t| t.key == "Name").map(|t| t.value.clone())
    }
}
