// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host resolution: from a resolved task to the EC2 instance under it.
//!
//! Two derivation paths, first success wins:
//!
//! 1. container-instance describe against the resolved cluster
//! 2. network-interface describe, reading the instance off the attachment
//!
//! Fargate jobs have no host; the gate holds regardless of whatever
//! stale references the records still carry.

use jt_adapters::{ComputeApi, OrchestratorApi};
use jt_core::{ContainerInstanceDetail, Diagnostics, InstanceDetail, Job, TaskDetail};

/// What host resolution produced. "Task resolved but no instance found"
/// is a reportable outcome, not a failure.
#[derive(Debug, Clone, Default)]
pub struct HostResolution {
    pub container_instance: Option<ContainerInstanceDetail>,
    pub instance: Option<InstanceDetail>,
}

/// Resolve the compute host behind the job's task.
pub async fn resolve_host(
    orchestrator: &dyn OrchestratorApi,
    compute: &dyn ComputeApi,
    job: &Job,
    task: Option<&TaskDetail>,
    cluster_arn: Option<&str>,
    diag: &Diagnostics,
) -> HostResolution {
    if job.is_fargate() || task.is_some_and(|t| t.is_fargate()) {
        diag.note("host", "fargate launch, no host to resolve");
        return HostResolution::default();
    }

    let mut resolution = HostResolution::default();

    // Path 1: container-instance registration.
    let container_instance_arn = task
        .and_then(|t| t.container_instance_arn.as_deref())
        .or_else(|| job.runtime_container().and_then(|c| c.container_instance_arn.as_deref()));
    if let (Some(arn), Some(cluster)) = (container_instance_arn, cluster_arn) {
        match orchestrator.describe_container_instance(cluster, arn).await {
            Ok(found) => resolution.container_instance = found,
            Err(e) => diag.note("host", format!("container-instance describe failed: {e}")),
        }
    }

    let mut instance_id = resolution
        .container_instance
        .as_ref()
        .and_then(|ci| ci.ec2_instance_id.clone());

    // Path 2: network-interface attachment (awsvpc networking, or the
    // registration is gone).
    if instance_id.is_none() {
        let eni_ref = job.runtime_container().and_then(|c| c.network_interfaces.first());
        if let Some(eni_ref) = eni_ref {
            match compute.describe_network_interface(eni_ref).await {
                Ok(Some(eni)) => instance_id = eni.attached_instance_id,
                Ok(None) => diag.note("host", format!("network interface {eni_ref} not found")),
                Err(e) => diag.note("host", format!("network-interface describe failed: {e}")),
            }
        }
    }

    let Some(instance_id) = instance_id else {
        return resolution;
    };

    match compute.describe_instance(&instance_id).await {
        Ok(found) => resolution.instance = found,
        Err(e) => diag.note("host", format!("instance describe failed: {e}")),
    }
    resolution
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
