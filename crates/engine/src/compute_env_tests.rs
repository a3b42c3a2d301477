// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use jt_adapters::fake::{FakeScheduler, SchedulerCall};
use jt_core::{Job, JobQueueDetail};

const CE_A: &str = "arn:aws:batch:us-west-2:111122223333:compute-environment/pool-a";
const CE_B: &str = "arn:aws:batch:us-west-2:111122223333:compute-environment/pool-b";
const CLUSTER_A: &str = "arn:aws:ecs:us-west-2:111122223333:cluster/pool-a-cluster";
const CLUSTER_B: &str = "arn:aws:ecs:us-west-2:111122223333:cluster/pool-b-cluster";

fn env(arn: &str, cluster: &str) -> ComputeEnvironmentDetail {
    ComputeEnvironmentDetail {
        arn: arn.to_string(),
        cluster_arn: Some(cluster.to_string()),
        ..Default::default()
    }
}

fn queue_with(envs: &[&str]) -> JobQueueDetail {
    JobQueueDetail {
        name: "batch-queue".to_string(),
        compute_environment_order: envs.iter().map(|e| e.to_string()).collect(),
        ..Default::default()
    }
}

#[tokio::test]
async fn direct_reference_skips_the_queue_walk() {
    let scheduler = FakeScheduler::new();
    scheduler.insert_compute_environment(env(CE_A, CLUSTER_A));
    let job = Job::builder().compute_environment(CE_A).queue("batch-queue").build();
    let diag = jt_core::Diagnostics::disabled();

    let resolved = resolve_compute_environment(&scheduler, &job, None, &diag).await;

    assert_eq!(resolved.unwrap().arn, CE_A);
    assert!(!scheduler.calls().iter().any(|c| matches!(c, SchedulerCall::DescribeJobQueue(_))));
}

#[tokio::test]
async fn cluster_match_beats_declared_order() {
    let scheduler = FakeScheduler::new();
    scheduler.insert_queue(queue_with(&[CE_A, CE_B]));
    scheduler.insert_compute_environment(env(CE_A, CLUSTER_A));
    scheduler.insert_compute_environment(env(CE_B, CLUSTER_B));
    let job = Job::builder().queue("batch-queue").build();
    let diag = jt_core::Diagnostics::disabled();

    // The resolved cluster belongs to the second environment in order.
    let resolved =
        resolve_compute_environment(&scheduler, &job, Some(CLUSTER_B), &diag).await;

    assert_eq!(resolved.unwrap().arn, CE_B);
}

#[tokio::test]
async fn no_cluster_match_falls_back_to_first_in_order() {
    let scheduler = FakeScheduler::new();
    scheduler.insert_queue(queue_with(&[CE_A, CE_B]));
    scheduler.insert_compute_environment(env(CE_A, CLUSTER_A));
    scheduler.insert_compute_environment(env(CE_B, CLUSTER_B));
    let job = Job::builder().queue("batch-queue").build();
    let diag = jt_core::Diagnostics::disabled();

    let other = "arn:aws:ecs:us-west-2:111122223333:cluster/elsewhere";
    let resolved = resolve_compute_environment(&scheduler, &job, Some(other), &diag).await;

    assert_eq!(resolved.unwrap().arn, CE_A);
}

#[tokio::test]
async fn no_resolved_cluster_takes_first_in_order() {
    let scheduler = FakeScheduler::new();
    scheduler.insert_queue(queue_with(&[CE_B, CE_A]));
    scheduler.insert_compute_environment(env(CE_A, CLUSTER_A));
    scheduler.insert_compute_environment(env(CE_B, CLUSTER_B));
    let job = Job::builder().queue("batch-queue").build();
    let diag = jt_core::Diagnostics::disabled();

    let resolved = resolve_compute_environment(&scheduler, &job, None, &diag).await;

    assert_eq!(resolved.unwrap().arn, CE_B);
}

#[tokio::test]
async fn missing_queue_is_absorbed() {
    let scheduler = FakeScheduler::new();
    let job = Job::builder().queue("gone-queue").build();
    let (diag, sink) = jt_core::CollectSink::pair();

    let resolved = resolve_compute_environment(&scheduler, &job, None, &diag).await;

    assert!(resolved.is_none());
    assert!(sink.for_stage("compute-env").iter().any(|m| m.contains("not found")));
}

#[tokio::test]
async fn job_without_queue_resolves_nothing() {
    let scheduler = FakeScheduler::new();
    let job = Job::builder().build();
    let diag = jt_core::Diagnostics::disabled();

    let resolved = resolve_compute_environment(&scheduler, &job, None, &diag).await;

    assert!(resolved.is_none());
    assert!(scheduler.calls().is_empty());
}

#[tokio::test]
async fn environments_are_described_in_one_batched_call() {
    let scheduler = FakeScheduler::new();
    scheduler.insert_queue(queue_with(&[CE_A, CE_B]));
    scheduler.insert_compute_environment(env(CE_A, CLUSTER_A));
    scheduler.insert_compute_environment(env(CE_B, CLUSTER_B));
    let job = Job::builder().queue("batch-queue").build();
    let diag = jt_core::Diagnostics::disabled();

    resolve_compute_environment(&scheduler, &job, None, &diag).await;

    let batched: Vec<_> = scheduler
        .calls()
        .into_iter()
        .filter(|c| matches!(c, SchedulerCall::DescribeComputeEnvironments(_)))
        .collect();
    assert_eq!(
        batched,
        vec![SchedulerCall::DescribeComputeEnvironments(vec![
            CE_A.to_string(),
            CE_B.to_string()
        ])]
    );
}
