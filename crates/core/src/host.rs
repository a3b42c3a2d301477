// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Compute-host records: container instances and the EC2 hosts behind them.

use serde::{Deserialize, Serialize};

/// One orchestrator-registered host slot. EC2 launch type only; a Fargate
/// task never has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerInstanceDetail {
    pub arn: String,
    pub ec2_instance_id: Option<String>,
}

/// Security group reference attached to an instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityGroupRef {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// One compute host, described by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceDetail {
    pub id: String,
    pub private_ip: Option<String>,
    pub public_ip: Option<String>,
    pub subnet_id: Option<String>,
    pub vpc_id: Option<String>,
    pub security_groups: Vec<SecurityGroupRef>,
    pub state: Option<String>,
    pub instance_type: Option<String>,
    pub availability_zone: Option<String>,
}
