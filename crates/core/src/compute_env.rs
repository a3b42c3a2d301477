// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scheduler-side resource pool records: queues and compute environments.

use serde::{Deserialize, Serialize};

/// One scheduler-managed resource pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputeEnvironmentDetail {
    pub arn: String,
    pub name: Option<String>,
    /// `MANAGED` or `UNMANAGED`.
    pub env_type: Option<String>,
    pub state: Option<String>,
    /// Orchestrator cluster this environment feeds. The only reliable
    /// correlation between a queue's environments and a resolved task.
    pub cluster_arn: Option<String>,
    pub instance_types: Vec<String>,
    pub subnets: Vec<crate::network::SubnetRef>,
    pub security_group_ids: Vec<String>,
    pub allocation_strategy: Option<String>,
}

/// A job queue and its compute environments in declared priority order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobQueueDetail {
    pub name: String,
    pub arn: Option<String>,
    pub state: Option<String>,
    /// Compute-environment ARNs in the queue's declared order.
    pub compute_environment_order: Vec<String>,
}
