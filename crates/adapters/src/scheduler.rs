// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job scheduler client (AWS Batch).

use crate::error::AdapterError;
use async_trait::async_trait;
use aws_sdk_batch::error::DisplayErrorContext;
use aws_sdk_batch::types as batch;
use jt_core::{
    AttemptContainer, ComputeEnvironmentDetail, ContainerSpec, Job, JobAttempt, JobQueueDetail,
    JobStatus, PlatformCapability,
};

/// Read-only view of the job scheduler.
#[async_trait]
pub trait SchedulerApi: Send + Sync {
    /// Point-in-time job lookup. `None` means the scheduler has no record
    /// for the id — definitive, no retry.
    async fn describe_job(&self, job_id: &str) -> Result<Option<Job>, AdapterError>;

    /// Queue lookup by name or ARN.
    async fn describe_job_queue(&self, queue: &str)
        -> Result<Option<JobQueueDetail>, AdapterError>;

    /// Batched compute-environment describe, by name or ARN.
    async fn describe_compute_environments(
        &self,
        refs: &[String],
    ) -> Result<Vec<ComputeEnvironmentDetail>, AdapterError>;
}

/// AWS Batch implementation.
#[derive(Clone)]
pub struct BatchScheduler {
    client: aws_sdk_batch::Client,
}

impl BatchScheduler {
    pub fn new(client: aws_sdk_batch::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SchedulerApi for BatchScheduler {
    async fn describe_job(&self, job_id: &str) -> Result<Option<Job>, AdapterError> {
        let out =
            self.client.describe_jobs().jobs(job_id).send().await.map_err(|e| {
                AdapterError::Request(format!("DescribeJobs: {}", DisplayErrorContext(e)))
            })?;
        Ok(out.jobs().first().map(map_job))
    }

    async fn describe_job_queue(
        &self,
        queue: &str,
    ) -> Result<Option<JobQueueDetail>, AdapterError> {
        let out = self.client.describe_job_queues().job_queues(queue).send().await.map_err(|e| {
            AdapterError::Request(format!("DescribeJobQueues: {}", DisplayErrorContext(e)))
        })?;
        Ok(out.job_queues().first().map(map_queue))
    }

    async fn describe_compute_environments(
        &self,
        refs: &[String],
    ) -> Result<Vec<ComputeEnvironmentDetail>, AdapterError> {
        let out = self
            .client
            .describe_compute_environments()
            .set_compute_environments(Some(refs.to_vec()))
            .send()
            .await
            .map_err(|e| {
                AdapterError::Request(format!(
                    "DescribeComputeEnvironments: {}",
                    DisplayErrorContext(e)
                ))
            })?;
        Ok(out.compute_environments().iter().map(map_compute_environment).collect())
    }
}

fn map_status(status: &batch::JobStatus) -> JobStatus {
    match status {
        batch::JobStatus::Submitted => JobStatus::Submitted,
        batch::JobStatus::Pending => JobStatus::Pending,
        batch::JobStatus::Runnable => JobStatus::Runnable,
        batch::JobStatus::Starting => JobStatus::Starting,
        batch::JobStatus::Running => JobStatus::Running,
        batch::JobStatus::Succeeded => JobStatus::Succeeded,
        batch::JobStatus::Failed => JobStatus::Failed,
        _ => JobStatus::Unknown,
    }
}

fn map_platform(pc: &batch::PlatformCapability) -> Option<PlatformCapability> {
    match pc {
        batch::PlatformCapability::Ec2 => Some(PlatformCapability::Ec2),
        batch::PlatformCapability::Fargate => Some(PlatformCapability::Fargate),
        _ => None,
    }
}

fn map_attempt_container(c: &batch::AttemptContainerDetail) -> AttemptContainer {
    AttemptContainer {
        task_arn: c.task_arn().map(str::to_string),
        container_instance_arn: c.container_instance_arn().map(str::to_string),
        log_stream_name: c.log_stream_name().map(str::to_string),
        // Attempt records carry attachment ids, not ENI ids; the compute
        // adapter accepts either shape.
        network_interfaces: c
            .network_interfaces()
            .iter()
            .filter_map(|ni| ni.attachment_id().map(str::to_string))
            .collect(),
        exit_code: c.exit_code(),
        reason: c.reason().map(str::to_string),
    }
}

fn map_attempt(a: &batch::AttemptDetail) -> JobAttempt {
    JobAttempt {
        container: a.container().map(map_attempt_container),
        started_at_ms: a.started_at(),
        stopped_at_ms: a.stopped_at(),
        status_reason: a.status_reason().map(str::to_string),
    }
}

fn map_container_spec(c: &batch::ContainerDetail) -> ContainerSpec {
    let mut vcpus = None;
    let mut memory_mb = None;
    for rr in c.resource_requirements() {
        match rr.r#type() {
            batch::ResourceType::Vcpu => vcpus = Some(rr.value().to_string()),
            batch::ResourceType::Memory => memory_mb = Some(rr.value().to_string()),
            _ => {}
        }
    }
    ContainerSpec {
        image: c.image().map(str::to_string),
        command: c.command().to_vec(),
        environment: c
            .environment()
            .iter()
            .filter_map(|kv| {
                kv.name().map(|n| (n.to_string(), kv.value().unwrap_or_default().to_string()))
            })
            .collect(),
        vcpus,
        memory_mb,
        job_role_arn: c.job_role_arn().map(str::to_string),
    }
}

fn map_job(detail: &batch::JobDetail) -> Job {
    Job {
        id: detail.job_id().to_string(),
        name: detail.job_name().to_string(),
        status: map_status(detail.status()),
        status_reason: detail.status_reason().map(str::to_string),
        queue: Some(detail.job_queue().to_string()),
        // DescribeJobs does not report the executing environment directly;
        // it is resolved through the queue instead.
        compute_environment: None,
        attempts: detail.attempts().iter().map(map_attempt).collect(),
        container: detail.container().map(map_container_spec),
        platform: detail.platform_capabilities().iter().filter_map(map_platform).collect(),
        created_at_ms: detail.created_at(),
        // startedAt reads as 0 until the job actually starts
        started_at_ms: Some(detail.started_at()).filter(|&ms| ms != 0),
        stopped_at_ms: detail.stopped_at(),
    }
}

fn map_queue(q: &batch::JobQueueDetail) -> JobQueueDetail {
    JobQueueDetail {
        name: q.job_queue_name().to_string(),
        arn: Some(q.job_queue_arn().to_string()),
        state: Some(q.state().as_str().to_string()),
        compute_environment_order: q
            .compute_environment_order()
            .iter()
            .map(|o| o.compute_environment().to_string())
            .collect(),
    }
}

fn map_compute_environment(ce: &batch::ComputeEnvironmentDetail) -> ComputeEnvironmentDetail {
    let resources = ce.compute_resources();
    ComputeEnvironmentDetail {
        arn: ce.compute_environment_arn().to_string(),
        name: Some(ce.compute_environment_name().to_string()),
        env_type: ce.r#type().map(|t| t.as_str().to_string()),
        state: ce.state().map(|s| s.as_str().to_string()),
        cluster_arn: ce.ecs_cluster_arn().map(str::to_string),
        instance_types: resources.map(|r| r.instance_types().to_vec()).unwrap_or_default(),
        subnets: resources.map(|r| r.subnets().to_vec()).unwrap_or_default(),
        security_group_ids: resources.map(|r| r.security_group_ids().to_vec()).unwrap_or_default(),
        allocation_strategy: resources
            .and_then(|r| r.allocation_strategy())
            .map(|s| s.as_str().to_string()),
    }
}
