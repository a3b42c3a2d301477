// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Compute-environment resolution: which pool actually ran the job.
//!
//! A queue may fan out across several compute environments; the only
//! thing that distinguishes which one a task landed on is the
//! environment's linked cluster ARN. Exact match against the resolved
//! cluster wins, otherwise the queue's declared order decides.

use jt_adapters::SchedulerApi;
use jt_core::{ComputeEnvironmentDetail, Diagnostics, Job};

/// Resolve the compute environment that executed the job.
pub async fn resolve_compute_environment(
    scheduler: &dyn SchedulerApi,
    job: &Job,
    cluster_arn: Option<&str>,
    diag: &Diagnostics,
) -> Option<ComputeEnvironmentDetail> {
    // A direct reference on the job record short-circuits the queue walk.
    if let Some(reference) = &job.compute_environment {
        return describe_one(scheduler, reference, diag).await;
    }

    let queue_ref = job.queue.as_deref()?;
    let queue = match scheduler.describe_job_queue(queue_ref).await {
        Ok(Some(queue)) => queue,
        Ok(None) => {
            diag.note("compute-env", format!("queue {queue_ref} not found"));
            return None;
        }
        Err(e) => {
            diag.note("compute-env", format!("queue describe failed: {e}"));
            return None;
        }
    };
    if queue.compute_environment_order.is_empty() {
        return None;
    }

    let described = match scheduler
        .describe_compute_environments(&queue.compute_environment_order)
        .await
    {
        Ok(described) => described,
        Err(e) => {
            diag.note("compute-env", format!("environment describe failed: {e}"));
            return None;
        }
    };

    select_environment(&queue.compute_environment_order, described, cluster_arn)
}

/// Pick the environment whose linked cluster matches the resolved one
/// (exact match only), else the first in the queue's declared order.
fn select_environment(
    declared_order: &[String],
    described: Vec<ComputeEnvironmentDetail>,
    cluster_arn: Option<&str>,
) -> Option<ComputeEnvironmentDetail> {
    // The batched describe does not guarantee order; realign to the queue's.
    let in_order: Vec<ComputeEnvironmentDetail> = declared_order
        .iter()
        .filter_map(|r| {
            described.iter().find(|ce| &ce.arn == r || ce.name.as_deref() == Some(r)).cloned()
        })
        .collect();

    if let Some(cluster) = cluster_arn {
        if let Some(matched) =
            in_order.iter().find(|ce| ce.cluster_arn.as_deref() == Some(cluster))
        {
            return Some(matched.clone());
        }
    }
    in_order.into_iter().next()
}

async fn describe_one(
    scheduler: &dyn SchedulerApi,
    reference: &str,
    diag: &Diagnostics,
) -> Option<ComputeEnvironmentDetail> {
    match scheduler.describe_compute_environments(&[reference.to_string()]).await {
        Ok(described) => described.into_iter().next(),
        Err(e) => {
            diag.note("compute-env", format!("environment describe failed: {e}"));
            None
        }
    }
}

#[cfg(test)]
#[path = "compute_env_tests.rs"]
mod tests;
