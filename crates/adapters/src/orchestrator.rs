// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Container orchestrator client (ECS).
//!
//! Task lookups return a tagged [`TaskLookup`] instead of an error for
//! wrong-cluster guesses: the resolution engine probes several candidate
//! clusters per task and a miss is routine, not exceptional. Mismatches
//! are recognized from the SDK's typed `ClusterNotFoundException` and the
//! DescribeTasks per-ARN failure channel — never from message text.

use crate::error::AdapterError;
use async_trait::async_trait;
use aws_sdk_ecs::error::DisplayErrorContext;
use aws_sdk_ecs::types as ecs;
use jt_core::{ContainerInstanceDetail, LaunchType, TaskDetail};

/// Outcome of one task describe against one candidate cluster.
#[derive(Debug, Clone)]
pub enum TaskLookup {
    /// Task found; the detail's cluster ARN is verified.
    Found(TaskDetail),
    /// The guessed cluster was wrong. Expected during candidate probing.
    ClusterMismatch,
    /// Cluster accepted the call but has no record of the task.
    NotFound,
}

/// Read-only view of the container orchestrator.
#[async_trait]
pub trait OrchestratorApi: Send + Sync {
    /// Describe one task against an optional candidate cluster.
    async fn describe_task(
        &self,
        cluster: Option<&str>,
        task: &str,
    ) -> Result<TaskLookup, AdapterError>;

    /// Every cluster ARN reachable to the caller.
    async fn list_clusters(&self) -> Result<Vec<String>, AdapterError>;

    /// Task ARNs in one cluster whose `startedBy` tag matches.
    async fn list_tasks_started_by(
        &self,
        cluster: &str,
        started_by: &str,
    ) -> Result<Vec<String>, AdapterError>;

    /// Resolve a container instance to its registration record.
    async fn describe_container_instance(
        &self,
        cluster: &str,
        arn: &str,
    ) -> Result<Option<ContainerInstanceDetail>, AdapterError>;
}

/// ECS implementation.
#[derive(Clone)]
pub struct EcsOrchestrator {
    client: aws_sdk_ecs::Client,
}

impl EcsOrchestrator {
    pub fn new(client: aws_sdk_ecs::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrchestratorApi for EcsOrchestrator {
    async fn describe_task(
        &self,
        cluster: Option<&str>,
        task: &str,
    ) -> Result<TaskLookup, AdapterError> {
        let result = self
            .client
            .describe_tasks()
            .set_cluster(cluster.map(str::to_string))
            .tasks(task)
            .send()
            .await;

        match result {
            Ok(out) => {
                if let Some(found) = out.tasks().first() {
                    Ok(TaskLookup::Found(map_task(found)))
                } else {
                    Ok(classify_failures(out.failures()))
                }
            }
            Err(err) => {
                let service = err.into_service_error();
                if service.is_cluster_not_found_exception() {
                    Ok(TaskLookup::ClusterMismatch)
                } else {
                    Err(AdapterError::Request(format!(
                        "DescribeTasks: {}",
                        DisplayErrorContext(service)
                    )))
                }
            }
        }
    }

    async fn list_clusters(&self) -> Result<Vec<String>, AdapterError> {
        let mut arns = Vec::new();
        let mut next_token: Option<String> = None;
        loop {
            let out = self
                .client
                .list_clusters()
                .set_next_token(next_token)
                .send()
                .await
                .map_err(|e| {
                    AdapterError::Request(format!("ListClusters: {}", DisplayErrorContext(e)))
                })?;
            arns.extend(out.cluster_arns().iter().cloned());
            next_token = out.next_token().map(str::to_string);
            if next_token.is_none() {
                break;
            }
        }
        Ok(arns)
    }

    async fn list_tasks_started_by(
        &self,
        cluster: &str,
        started_by: &str,
    ) -> Result<Vec<String>, AdapterError> {
        let out = self
            .client
            .list_tasks()
            .cluster(cluster)
            .started_by(started_by)
            .send()
            .await
            .map_err(|e| {
                AdapterError::Request(format!("ListTasks: {}", DisplayErrorContext(e)))
            })?;
        Ok(out.task_arns().to_vec())
    }

    async fn describe_container_instance(
        &self,
        cluster: &str,
        arn: &str,
    ) -> Result<Option<ContainerInstanceDetail>, AdapterError> {
        let out = self
            .client
            .describe_container_instances()
            .cluster(cluster)
            .container_instances(arn)
            .send()
            .await
            .map_err(|e| {
                AdapterError::Request(format!(
                    "DescribeContainerInstances: {}",
                    DisplayErrorContext(e)
                ))
            })?;
        Ok(out.container_instances().first().map(map_container_instance))
    }
}

/// A wrong-cluster describe comes back as a per-ARN failure with reason
/// `MISSING` rather than an error.
fn classify_failures(failures: &[ecs::Failure]) -> TaskLookup {
    if failures.iter().any(|f| f.reason() == Some("MISSING")) {
        TaskLookup::ClusterMismatch
    } else {
        TaskLookup::NotFound
    }
}

fn map_launch_type(lt: Option<&ecs::LaunchType>) -> LaunchType {
    match lt {
        Some(ecs::LaunchType::Ec2) => LaunchType::Ec2,
        Some(ecs::LaunchType::Fargate) => LaunchType::Fargate,
        Some(ecs::LaunchType::External) => LaunchType::External,
        _ => LaunchType::Unknown,
    }
}

fn map_task(task: &ecs::Task) -> TaskDetail {
    TaskDetail {
        arn: task.task_arn().unwrap_or_default().to_string(),
        cluster_arn: task.cluster_arn().map(str::to_string),
        container_instance_arn: task.container_instance_arn().map(str::to_string),
        launch_type: map_launch_type(task.launch_type()),
        status: task.last_status().map(str::to_string),
        started_by: task.started_by().map(str::to_string),
    }
}

fn map_container_instance(ci: &ecs::ContainerInstance) -> ContainerInstanceDetail {
    ContainerInstanceDetail {
        arn: ci.container_instance_arn().unwrap_or_default().to_string(),
        ec2_instance_id: ci.ec2_instance_id().map(str::to_string),
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
