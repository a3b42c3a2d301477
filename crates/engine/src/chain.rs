// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The resolution pipeline: one job id in, one job chain out.
//!
//! Stage order:
//!
//! 1. job fetch — the only fatal stage
//! 2. direct compute-environment describe, when the job carries a
//!    reference (its linked cluster becomes the task engine's hint)
//! 3. task resolution
//! 4. queue-based compute-environment resolution, disambiguated by the
//!    task's verified cluster
//! 5. host resolution (skipped for Fargate)
//! 6. VPC derivation
//! 7. bounded log tail
//!
//! Each stage consumes the partial chain built so far and augments it;
//! failure in any stage after the first degrades to an absent field.

use crate::compute_env::resolve_compute_environment;
use crate::host::resolve_host;
use crate::log_tail::{fetch_tail, TailOptions};
use crate::network::derive_vpc;
use crate::task::resolve_task;
use jt_adapters::{ComputeApi, LogsApi, OrchestratorApi, SchedulerApi};
use jt_core::{Diagnostics, JobChain, ResolveError};
use std::sync::Arc;
use std::time::Duration;

/// Tunables for one resolution.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    pub log_group_name: String,
    pub log_line_count: usize,
    pub log_since: Option<Duration>,
    /// Skip the log stage entirely (the caller will tail separately).
    pub fetch_logs: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            log_group_name: "/aws/batch/job".to_string(),
            log_line_count: 50,
            log_since: None,
            fetch_logs: true,
        }
    }
}

impl ResolveOptions {
    jt_core::setters! {
        into {
            log_group_name: String,
        }
        set {
            log_line_count: usize,
            fetch_logs: bool,
        }
        option {
            log_since: Duration,
        }
    }
}

/// Owns the service clients and runs resolutions against them.
pub struct Resolver {
    scheduler: Arc<dyn SchedulerApi>,
    orchestrator: Arc<dyn OrchestratorApi>,
    compute: Arc<dyn ComputeApi>,
    logs: Arc<dyn LogsApi>,
    options: ResolveOptions,
    diag: Diagnostics,
}

impl Resolver {
    pub fn new(
        scheduler: Arc<dyn SchedulerApi>,
        orchestrator: Arc<dyn OrchestratorApi>,
        compute: Arc<dyn ComputeApi>,
        logs: Arc<dyn LogsApi>,
    ) -> Self {
        Self {
            scheduler,
            orchestrator,
            compute,
            logs,
            options: ResolveOptions::default(),
            diag: Diagnostics::default(),
        }
    }

    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_diagnostics(mut self, diag: Diagnostics) -> Self {
        self.diag = diag;
        self
    }

    /// Resolve the full job chain for one job id.
    pub async fn resolve(&self, job_id: &str) -> Result<JobChain, ResolveError> {
        let job = match self.scheduler.describe_job(job_id).await {
            Ok(Some(job)) => job,
            Ok(None) => return Err(ResolveError::JobNotFound(job_id.to_string())),
            Err(e) => return Err(ResolveError::Scheduler(e.to_string())),
        };
        tracing::debug!(%job_id, status = %job.status, "job record fetched");
        let mut chain = JobChain::for_job(job);

        // A direct compute-environment reference is described up front so
        // its linked cluster can seed the task engine.
        let direct_ce_ref = chain.job.compute_environment.is_some();
        let mut compute_env = None;
        if direct_ce_ref {
            compute_env =
                resolve_compute_environment(self.scheduler.as_ref(), &chain.job, None, &self.diag)
                    .await;
        }
        let hint = compute_env.as_ref().and_then(|ce| ce.cluster_arn.clone());

        let task_arn = chain.job.task_arn().map(str::to_string);
        let resolution = resolve_task(
            self.orchestrator.as_ref(),
            &chain.job.id,
            task_arn.as_deref(),
            hint.as_deref(),
            &self.diag,
        )
        .await;
        chain.cluster_arn = resolution.cluster_arn;
        chain.task = resolution.task;

        // Without a direct reference the queue decides, using the verified
        // cluster to pick among its environments. A failed direct describe
        // is not retried; the field stays absent.
        if !direct_ce_ref {
            compute_env = resolve_compute_environment(
                self.scheduler.as_ref(),
                &chain.job,
                chain.cluster_arn.as_deref(),
                &self.diag,
            )
            .await;
        }
        chain.compute_environment = compute_env;

        let host = resolve_host(
            self.orchestrator.as_ref(),
            self.compute.as_ref(),
            &chain.job,
            chain.task.as_ref(),
            chain.cluster_arn.as_deref(),
            &self.diag,
        )
        .await;
        chain.container_instance = host.container_instance;
        chain.instance = host.instance;

        let eni_reference =
            chain.container.as_ref().and_then(|c| c.network_interfaces.first().cloned());
        chain.vpc = derive_vpc(
            self.compute.as_ref(),
            chain.instance.as_ref(),
            eni_reference.as_deref(),
            chain.compute_environment.as_ref(),
            &self.diag,
        )
        .await;

        if self.options.fetch_logs {
            if let Some(stream) = chain.log_stream.clone() {
                let tail_opts = TailOptions {
                    lines: self.options.log_line_count,
                    since: self.options.log_since,
                };
                match fetch_tail(self.logs.as_ref(), &self.options.log_group_name, &stream, &tail_opts)
                    .await
                {
                    Ok(lines) => chain.log_lines = lines,
                    Err(e) => self.diag.note("logs", format!("tail fetch failed: {e}")),
                }
            }
        }

        Ok(chain)
    }
}

#[cfg(test)]
#[path = "chain_tests.rs"]
mod tests;
