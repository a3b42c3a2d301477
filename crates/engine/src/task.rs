// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Task resolution: find the cluster that owns a task reference.
//!
//! A task ARN alone does not determine which cluster accepted it, so the
//! engine works through an ordered list of candidate clusters, stopping
//! at the first verified hit:
//!
//! 1. hinted cluster (from a direct compute-environment lookup)
//! 2. cluster ARN reconstructed from the task ARN's own segments
//! 3. cluster name parsed the same way, tried as a bare identifier
//! 4. no cluster at all (the API resolves against the default)
//! 5. exhaustive scan over every reachable cluster
//! 6. per-cluster search for tasks started by the job id
//!
//! Wrong-cluster guesses are routine; they surface only as diagnostics.
//! The loop is bounded by the fixed list plus two passes over the
//! cluster list, and issues no calls at all without a task reference.

use jt_adapters::{OrchestratorApi, TaskLookup};
use jt_core::{arn, Diagnostics, TaskDetail};

/// What task resolution produced. Both fields absent is a valid outcome
/// (task expired, inaccessible, or never started).
#[derive(Debug, Clone, Default)]
pub struct TaskResolution {
    pub task: Option<TaskDetail>,
    pub cluster_arn: Option<String>,
}

impl TaskResolution {
    fn found(task: TaskDetail) -> Self {
        let cluster_arn = task.cluster_arn.clone();
        Self { task: Some(task), cluster_arn }
    }
}

/// Resolve the task and its owning cluster.
///
/// `cluster_hint` comes from the compute-environment chain when the job
/// carried a direct reference; `job_id` feeds the last-resort search.
pub async fn resolve_task(
    orchestrator: &dyn OrchestratorApi,
    job_id: &str,
    task_arn: Option<&str>,
    cluster_hint: Option<&str>,
    diag: &Diagnostics,
) -> TaskResolution {
    let Some(task_arn) = task_arn else {
        return TaskResolution::default();
    };

    let candidates = candidate_clusters(task_arn, cluster_hint);
    for (label, cluster) in &candidates {
        match try_describe(orchestrator, cluster.as_deref(), task_arn, label, diag).await {
            Some(task) => return TaskResolution::found(task),
            None => continue,
        }
    }

    // Candidate guesses exhausted; fall back to scanning every cluster.
    let clusters = match orchestrator.list_clusters().await {
        Ok(clusters) => clusters,
        Err(e) => {
            diag.note("task", format!("cluster enumeration failed: {e}"));
            return TaskResolution::default();
        }
    };

    for cluster in &clusters {
        if let Some(task) =
            try_describe(orchestrator, Some(cluster), task_arn, "scan", diag).await
        {
            return TaskResolution::found(task);
        }
    }

    // Last resort: the task reference may be stale; search each cluster
    // for whatever the scheduler started under this job id.
    for cluster in &clusters {
        let arns = match orchestrator.list_tasks_started_by(cluster, job_id).await {
            Ok(arns) => arns,
            Err(e) => {
                diag.note("task", format!("started-by search in {cluster} failed: {e}"));
                continue;
            }
        };
        let Some(first) = arns.first() else { continue };
        if let Some(task) =
            try_describe(orchestrator, Some(cluster), first, "started-by", diag).await
        {
            return TaskResolution::found(task);
        }
    }

    TaskResolution::default()
}

/// Fixed candidate list, in precedence order.
fn candidate_clusters(
    task_arn: &str,
    cluster_hint: Option<&str>,
) -> Vec<(&'static str, Option<String>)> {
    let mut candidates = Vec::new();
    if let Some(hint) = cluster_hint {
        candidates.push(("hint", Some(hint.to_string())));
    }
    if let Some(cluster_arn) = arn::cluster_arn_from(task_arn) {
        candidates.push(("task-arn", Some(cluster_arn)));
    }
    if let Some(name) = arn::cluster_name_from(task_arn) {
        candidates.push(("cluster-name", Some(name)));
    }
    candidates.push(("default", None));
    candidates
}

/// One describe attempt. `None` means "keep trying": a mismatch, an empty
/// describe, or a hard error all fall through to the next candidate.
async fn try_describe(
    orchestrator: &dyn OrchestratorApi,
    cluster: Option<&str>,
    task_arn: &str,
    label: &str,
    diag: &Diagnostics,
) -> Option<TaskDetail> {
    match orchestrator.describe_task(cluster, task_arn).await {
        Ok(TaskLookup::Found(task)) => Some(task),
        Ok(TaskLookup::ClusterMismatch) => {
            diag.note("task", format!("candidate {label}: cluster mismatch"));
            None
        }
        Ok(TaskLookup::NotFound) => {
            diag.note("task", format!("candidate {label}: task not found"));
            None
        }
        Err(e) => {
            diag.note("task", format!("candidate {label}: {e}"));
            None
        }
    }
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
