// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The composite job-chain record: everything one resolution learned.

use crate::compute_env::ComputeEnvironmentDetail;
use crate::host::{ContainerInstanceDetail, InstanceDetail};
use crate::job::{AttemptContainer, Job};
use crate::network::VpcDetail;
use crate::task::TaskDetail;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Resolution failure. Only a missing root job aborts a resolution;
/// everything else degrades into absent fields on [`JobChain`].
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("job not found: {0}")]
    JobNotFound(String),
    /// The root job lookup itself could not be made.
    #[error("scheduler lookup failed: {0}")]
    Scheduler(String),
}

/// One resolution's composite output.
///
/// The job is the root and always present. Every other field is what the
/// engines managed to resolve; absence is a reportable outcome, not an
/// error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobChain {
    pub job: Job,
    /// Authoritative runtime container record (latest attempt).
    pub container: Option<AttemptContainer>,
    /// Verified owning cluster of the resolved task.
    pub cluster_arn: Option<String>,
    pub task: Option<TaskDetail>,
    pub container_instance: Option<ContainerInstanceDetail>,
    pub instance: Option<InstanceDetail>,
    pub compute_environment: Option<ComputeEnvironmentDetail>,
    pub vpc: Option<VpcDetail>,
    pub log_stream: Option<String>,
    /// Most recent log lines, oldest retained line first.
    pub log_lines: Vec<String>,
}

impl JobChain {
    /// Seed a chain from the root job: the runtime container and log stream
    /// come from the latest attempt, everything else starts unresolved.
    pub fn for_job(job: Job) -> Self {
        let container = job.runtime_container().cloned();
        let log_stream = job.log_stream_name().map(str::to_string);
        Self {
            job,
            container,
            cluster_arn: None,
            task: None,
            container_instance: None,
            instance: None,
            compute_environment: None,
            vpc: None,
            log_stream,
            log_lines: Vec::new(),
        }
    }

    /// EC2 instance id, if host resolution got that far.
    pub fn instance_id(&self) -> Option<&str> {
        self.instance.as_ref().map(|i| i.id.as_str())
    }
}

#[cfg(test)]
#[path = "chain_tests.rs"]
mod tests;
