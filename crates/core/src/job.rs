// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The scheduler's job record: the root of every resolution.

use serde::{Deserialize, Serialize};

/// Lifecycle status reported by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Submitted,
    Pending,
    Runnable,
    Starting,
    Running,
    Succeeded,
    Failed,
    /// Status string the scheduler added after this crate was written.
    Unknown,
}

impl JobStatus {
    /// Terminal jobs are immutable; their latest attempt is final.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Succeeded | JobStatus::Failed)
    }
}

crate::simple_display! {
    JobStatus {
        Submitted => "submitted",
        Pending => "pending",
        Runnable => "runnable",
        Starting => "starting",
        Running => "running",
        Succeeded => "succeeded",
        Failed => "failed",
        Unknown => "unknown",
    }
}

/// Execution platform the job was declared to run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformCapability {
    Ec2,
    Fargate,
    Eks,
}

crate::simple_display! {
    PlatformCapability {
        Ec2 => "ec2",
        Fargate => "fargate",
        Eks => "eks",
    }
}

/// The job's declared container spec (image, command, env).
///
/// This is the submission-time declaration — authoritative for what the job
/// was *asked* to run, as opposed to the attempt's runtime container record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSpec {
    pub image: Option<String>,
    pub command: Vec<String>,
    pub environment: Vec<(String, String)>,
    pub vcpus: Option<String>,
    pub memory_mb: Option<String>,
    pub job_role_arn: Option<String>,
}

/// Runtime container facts recorded on one attempt.
///
/// Everything here describes what actually happened at execution time:
/// which task picked the job up, where it landed, and where its logs went.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptContainer {
    pub task_arn: Option<String>,
    pub container_instance_arn: Option<String>,
    pub log_stream_name: Option<String>,
    /// Network-interface references (ENI ids or attachment ids).
    pub network_interfaces: Vec<String>,
    pub exit_code: Option<i32>,
    pub reason: Option<String>,
}

/// One execution try of a job. Appended by the scheduler on each retry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobAttempt {
    pub container: Option<AttemptContainer>,
    pub started_at_ms: Option<i64>,
    pub stopped_at_ms: Option<i64>,
    pub status_reason: Option<String>,
}

/// One submitted unit of work, as the scheduler reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub name: String,
    pub status: JobStatus,
    pub status_reason: Option<String>,
    /// Queue the job was submitted to (name or ARN).
    pub queue: Option<String>,
    /// Direct compute-environment reference, when the record carries one.
    pub compute_environment: Option<String>,
    /// Ordered attempt history; the last entry is the authoritative one.
    pub attempts: Vec<JobAttempt>,
    /// Declared container spec from submission time.
    pub container: Option<ContainerSpec>,
    pub platform: Vec<PlatformCapability>,
    pub created_at_ms: Option<i64>,
    pub started_at_ms: Option<i64>,
    pub stopped_at_ms: Option<i64>,
}

impl Job {
    /// The latest attempt, authoritative for runtime facts.
    pub fn latest_attempt(&self) -> Option<&JobAttempt> {
        self.attempts.last()
    }

    /// Runtime container record from the latest attempt.
    ///
    /// Not to be confused with [`Job::container`], the declared spec.
    pub fn runtime_container(&self) -> Option<&AttemptContainer> {
        self.latest_attempt()?.container.as_ref()
    }

    /// Log-stream name recorded by the latest attempt.
    pub fn log_stream_name(&self) -> Option<&str> {
        self.runtime_container()?.log_stream_name.as_deref()
    }

    /// Task reference recorded by the latest attempt.
    pub fn task_arn(&self) -> Option<&str> {
        self.runtime_container()?.task_arn.as_deref()
    }

    /// Whether the job was declared Fargate-launched.
    ///
    /// Host resolution must never run for these: there is no
    /// container-instance registration to follow.
    pub fn is_fargate(&self) -> bool {
        self.platform.contains(&PlatformCapability::Fargate)
    }
}

crate::builder! {
    pub struct JobBuilder => Job {
        into {
            id: String = "job-0011",
            name: String = "test-job",
        }
        set {
            status: JobStatus = JobStatus::Succeeded,
            attempts: Vec<JobAttempt> = Vec::new(),
            platform: Vec<PlatformCapability> = vec![PlatformCapability::Ec2],
        }
        option {
            status_reason: String = None,
            queue: String = None,
            compute_environment: String = None,
            container: ContainerSpec = None,
            created_at_ms: i64 = None,
            started_at_ms: i64 = None,
            stopped_at_ms: i64 = None,
        }
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
