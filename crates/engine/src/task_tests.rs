// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use jt_adapters::fake::{FakeOrchestrator, OrchestratorCall};
use jt_core::{CollectSink, LaunchType, TaskDetail};

const TASK_ARN: &str = "arn:aws:ecs:us-west-2:111122223333:task/my-cluster/abcd";
const CLUSTER_ARN: &str = "arn:aws:ecs:us-west-2:111122223333:cluster/my-cluster";

fn detail(cluster_arn: &str) -> TaskDetail {
    TaskDetail::builder().arn(TASK_ARN).cluster_arn(cluster_arn).build()
}

#[tokio::test]
async fn no_task_reference_issues_no_calls() {
    let orch = FakeOrchestrator::new();
    let diag = jt_core::Diagnostics::disabled();

    let resolution = resolve_task(&orch, "job-123", None, None, &diag).await;

    assert!(resolution.task.is_none());
    assert!(resolution.cluster_arn.is_none());
    assert!(orch.calls().is_empty());
}

#[tokio::test]
async fn correct_hint_resolves_on_first_candidate() {
    let orch = FakeOrchestrator::new();
    let hint = "arn:aws:ecs:us-west-2:111122223333:cluster/hinted";
    orch.insert_task(Some(hint), TASK_ARN, detail(hint));
    let diag = jt_core::Diagnostics::disabled();

    let resolution = resolve_task(&orch, "job-123", Some(TASK_ARN), Some(hint), &diag).await;

    assert_eq!(resolution.cluster_arn.as_deref(), Some(hint));
    assert_eq!(orch.describe_task_count(), 1);
    assert_eq!(orch.list_clusters_count(), 0);
}

#[tokio::test]
async fn arn_derived_cluster_resolves_without_enumeration() {
    let orch = FakeOrchestrator::new();
    orch.insert_task(Some(CLUSTER_ARN), TASK_ARN, detail(CLUSTER_ARN));
    let diag = jt_core::Diagnostics::disabled();

    // No hint: the first candidate is the ARN-reconstructed cluster.
    let resolution = resolve_task(&orch, "job-123", Some(TASK_ARN), None, &diag).await;

    assert_eq!(resolution.cluster_arn.as_deref(), Some(CLUSTER_ARN));
    assert_eq!(orch.describe_task_count(), 1);
    assert_eq!(orch.list_clusters_count(), 0);
}

#[tokio::test]
async fn wrong_hint_falls_through_to_arn_candidate() {
    let orch = FakeOrchestrator::new();
    orch.insert_task(Some(CLUSTER_ARN), TASK_ARN, detail(CLUSTER_ARN));
    let (diag, sink) = CollectSink::pair();

    let wrong_hint = "arn:aws:ecs:us-west-2:111122223333:cluster/other";
    let resolution =
        resolve_task(&orch, "job-123", Some(TASK_ARN), Some(wrong_hint), &diag).await;

    assert_eq!(resolution.cluster_arn.as_deref(), Some(CLUSTER_ARN));
    assert_eq!(orch.describe_task_count(), 2);
    // The mismatch is diagnosed, not surfaced.
    assert!(sink.for_stage("task").iter().any(|m| m.contains("cluster mismatch")));
}

#[tokio::test]
async fn bare_cluster_name_is_third_candidate() {
    let orch = FakeOrchestrator::new();
    orch.insert_task(Some("my-cluster"), TASK_ARN, detail(CLUSTER_ARN));
    let diag = jt_core::Diagnostics::disabled();

    let resolution = resolve_task(&orch, "job-123", Some(TASK_ARN), None, &diag).await;

    assert_eq!(resolution.cluster_arn.as_deref(), Some(CLUSTER_ARN));
    // ARN candidate missed, name candidate hit.
    assert_eq!(orch.describe_task_count(), 2);
}

#[tokio::test]
async fn exhaustive_scan_stops_at_first_match() {
    let orch = FakeOrchestrator::new();
    let c1 = "arn:aws:ecs:us-west-2:111122223333:cluster/alpha";
    let c2 = "arn:aws:ecs:us-west-2:111122223333:cluster/beta";
    let c3 = "arn:aws:ecs:us-west-2:111122223333:cluster/gamma";
    orch.set_clusters(&[c1, c2, c3]);
    orch.insert_task(Some(c2), TASK_ARN, detail(c2));
    let diag = jt_core::Diagnostics::disabled();

    let resolution = resolve_task(&orch, "job-123", Some(TASK_ARN), None, &diag).await;

    assert_eq!(resolution.cluster_arn.as_deref(), Some(c2));
    assert_eq!(orch.list_clusters_count(), 1);
    // 3 fixed candidates (arn, name, default) + scan of alpha + beta.
    assert_eq!(orch.describe_task_count(), 5);
    // gamma never probed.
    assert!(!orch.calls().contains(&OrchestratorCall::DescribeTask {
        cluster: Some(c3.to_string()),
        task: TASK_ARN.to_string(),
    }));
}

#[tokio::test]
async fn started_by_search_recovers_a_stale_reference() {
    let orch = FakeOrchestrator::new();
    let cluster = "arn:aws:ecs:us-west-2:111122223333:cluster/alpha";
    let live_arn = "arn:aws:ecs:us-west-2:111122223333:task/alpha/ff99";
    orch.set_clusters(&[cluster]);
    orch.insert_started_by(cluster, "job-123", &[live_arn]);
    orch.insert_task(
        Some(cluster),
        live_arn,
        TaskDetail::builder().arn(live_arn).cluster_arn(cluster).build(),
    );
    let diag = jt_core::Diagnostics::disabled();

    // The recorded task ARN is stale everywhere; only the search finds it.
    let resolution = resolve_task(&orch, "job-123", Some(TASK_ARN), None, &diag).await;

    let task = resolution.task.unwrap();
    assert_eq!(task.arn, live_arn);
    assert_eq!(resolution.cluster_arn.as_deref(), Some(cluster));
}

#[tokio::test]
async fn hard_errors_are_absorbed_and_the_loop_continues() {
    let orch = FakeOrchestrator::new();
    orch.insert_task_error(Some(CLUSTER_ARN), TASK_ARN);
    orch.insert_task(Some("my-cluster"), TASK_ARN, detail(CLUSTER_ARN));
    let (diag, sink) = CollectSink::pair();

    let resolution = resolve_task(&orch, "job-123", Some(TASK_ARN), None, &diag).await;

    assert!(resolution.task.is_some());
    assert!(sink.for_stage("task").iter().any(|m| m.contains("injected")));
}

#[tokio::test]
async fn unresolvable_task_yields_empty_resolution() {
    let orch = FakeOrchestrator::new();
    orch.set_clusters(&["arn:aws:ecs:us-west-2:111122223333:cluster/alpha"]);
    let diag = jt_core::Diagnostics::disabled();

    let resolution = resolve_task(&orch, "job-123", Some(TASK_ARN), None, &diag).await;

    assert!(resolution.task.is_none());
    assert!(resolution.cluster_arn.is_none());
}

#[tokio::test]
async fn resolution_is_idempotent_under_stable_state() {
    let orch = FakeOrchestrator::new();
    orch.insert_task(Some(CLUSTER_ARN), TASK_ARN, detail(CLUSTER_ARN));
    let diag = jt_core::Diagnostics::disabled();

    let first = resolve_task(&orch, "job-123", Some(TASK_ARN), None, &diag).await;
    let second = resolve_task(&orch, "job-123", Some(TASK_ARN), None, &diag).await;

    assert_eq!(first.cluster_arn, second.cluster_arn);
    assert_eq!(first.task.map(|t| t.arn), second.task.map(|t| t.arn));
}

#[tokio::test]
async fn launch_type_comes_from_the_verified_describe() {
    let orch = FakeOrchestrator::new();
    orch.insert_task(
        Some(CLUSTER_ARN),
        TASK_ARN,
        TaskDetail::builder()
            .arn(TASK_ARN)
            .cluster_arn(CLUSTER_ARN)
            .launch_type(LaunchType::Fargate)
            .build(),
    );
    let diag = jt_core::Diagnostics::disabled();

    let resolution = resolve_task(&orch, "job-123", Some(TASK_ARN), None, &diag).await;
    assert!(resolution.task.unwrap().is_fargate());
}
