// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use jt_adapters::fake::{ComputeCall, FakeCompute, FakeOrchestrator, OrchestratorCall};
use jt_core::{
    AttemptContainer, ContainerInstanceDetail, InstanceDetail, Job, JobAttempt, LaunchType,
    NetworkInterfaceDetail, PlatformCapability, TaskDetail,
};

const CLUSTER: &str = "arn:aws:ecs:us-west-2:111122223333:cluster/prod";
const CI_ARN: &str = "arn:aws:ecs:us-west-2:111122223333:container-instance/prod/slot1";

fn job_with_container(container: AttemptContainer) -> Job {
    Job::builder()
        .attempts(vec![JobAttempt { container: Some(container), ..Default::default() }])
        .build()
}

fn ec2_task(ci_arn: Option<&str>) -> TaskDetail {
    let builder = TaskDetail::builder().cluster_arn(CLUSTER).launch_type(LaunchType::Ec2);
    match ci_arn {
        Some(arn) => builder.container_instance_arn(arn).build(),
        None => builder.build(),
    }
}

#[tokio::test]
async fn container_instance_path_resolves_the_host() {
    let orch = FakeOrchestrator::new();
    let compute = FakeCompute::new();
    orch.insert_container_instance(
        CLUSTER,
        ContainerInstanceDetail {
            arn: CI_ARN.to_string(),
            ec2_instance_id: Some("i-0abc".to_string()),
        },
    );
    compute.insert_instance(InstanceDetail {
        id: "i-0abc".to_string(),
        private_ip: Some("10.0.1.5".to_string()),
        ..Default::default()
    });
    let job = job_with_container(AttemptContainer::default());
    let task = ec2_task(Some(CI_ARN));
    let diag = jt_core::Diagnostics::disabled();

    let host =
        resolve_host(&orch, &compute, &job, Some(&task), Some(CLUSTER), &diag).await;

    assert_eq!(host.container_instance.unwrap().ec2_instance_id.as_deref(), Some("i-0abc"));
    assert_eq!(host.instance.unwrap().private_ip.as_deref(), Some("10.0.1.5"));
}

#[tokio::test]
async fn fargate_job_never_touches_the_container_instance_api() {
    let orch = FakeOrchestrator::new();
    let compute = FakeCompute::new();
    // Records still carry references; the gate must hold anyway.
    let job = Job::builder()
        .platform(vec![PlatformCapability::Fargate])
        .attempts(vec![JobAttempt {
            container: Some(AttemptContainer {
                container_instance_arn: Some(CI_ARN.to_string()),
                network_interfaces: vec!["eni-attach".to_string()],
                ..Default::default()
            }),
            ..Default::default()
        }])
        .build();
    let task = ec2_task(Some(CI_ARN));
    let diag = jt_core::Diagnostics::disabled();

    let host = resolve_host(&orch, &compute, &job, Some(&task), Some(CLUSTER), &diag).await;

    assert!(host.container_instance.is_none());
    assert!(host.instance.is_none());
    assert!(orch.calls().is_empty());
    assert!(compute.calls().is_empty());
}

#[tokio::test]
async fn fargate_task_detail_also_gates() {
    let orch = FakeOrchestrator::new();
    let compute = FakeCompute::new();
    let job = job_with_container(AttemptContainer {
        container_instance_arn: Some(CI_ARN.to_string()),
        ..Default::default()
    });
    let task = TaskDetail::builder().launch_type(LaunchType::Fargate).build();
    let diag = jt_core::Diagnostics::disabled();

    let host = resolve_host(&orch, &compute, &job, Some(&task), Some(CLUSTER), &diag).await;

    assert!(host.instance.is_none());
    assert!(orch.calls().is_empty());
}

#[tokio::test]
async fn network_interface_path_is_the_fallback() {
    let orch = FakeOrchestrator::new();
    let compute = FakeCompute::new();
    compute.insert_network_interface(
        "eni-attach-1",
        NetworkInterfaceDetail {
            id: "eni-00aa".to_string(),
            attached_instance_id: Some("i-0def".to_string()),
            ..Default::default()
        },
    );
    compute.insert_instance(InstanceDetail { id: "i-0def".to_string(), ..Default::default() });
    // No container-instance reference anywhere: awsvpc networking.
    let job = job_with_container(AttemptContainer {
        network_interfaces: vec!["eni-attach-1".to_string()],
        ..Default::default()
    });
    let task = ec2_task(None);
    let diag = jt_core::Diagnostics::disabled();

    let host = resolve_host(&orch, &compute, &job, Some(&task), Some(CLUSTER), &diag).await;

    assert!(host.container_instance.is_none());
    assert_eq!(host.instance.unwrap().id, "i-0def");
    assert!(!orch
        .calls()
        .iter()
        .any(|c| matches!(c, OrchestratorCall::DescribeContainerInstance { .. })));
}

#[tokio::test]
async fn missing_registration_falls_back_to_the_interface() {
    let orch = FakeOrchestrator::new();
    let compute = FakeCompute::new();
    // Container instance describe returns nothing (deregistered host).
    compute.insert_network_interface(
        "eni-attach-2",
        NetworkInterfaceDetail {
            id: "eni-11bb".to_string(),
            attached_instance_id: Some("i-0aaa".to_string()),
            ..Default::default()
        },
    );
    compute.insert_instance(InstanceDetail { id: "i-0aaa".to_string(), ..Default::default() });
    let job = job_with_container(AttemptContainer {
        container_instance_arn: Some(CI_ARN.to_string()),
        network_interfaces: vec!["eni-attach-2".to_string()],
        ..Default::default()
    });
    let task = ec2_task(Some(CI_ARN));
    let diag = jt_core::Diagnostics::disabled();

    let host = resolve_host(&orch, &compute, &job, Some(&task), Some(CLUSTER), &diag).await;

    assert_eq!(host.instance.unwrap().id, "i-0aaa");
}

#[tokio::test]
async fn total_absence_is_a_valid_outcome() {
    let orch = FakeOrchestrator::new();
    let compute = FakeCompute::new();
    let job = job_with_container(AttemptContainer::default());
    let diag = jt_core::Diagnostics::disabled();

    let host = resolve_host(&orch, &compute, &job, None, None, &diag).await;

    assert!(host.container_instance.is_none());
    assert!(host.instance.is_none());
    // Nothing to go on, nothing described.
    assert!(compute.calls().is_empty());
}

#[tokio::test]
async fn instance_describe_failure_keeps_the_container_instance() {
    let orch = FakeOrchestrator::new();
    let compute = FakeCompute::new();
    orch.insert_container_instance(
        CLUSTER,
        ContainerInstanceDetail {
            arn: CI_ARN.to_string(),
            ec2_instance_id: Some("i-0broken".to_string()),
        },
    );
    compute.insert_error("i-0broken");
    let job = job_with_container(AttemptContainer::default());
    let task = ec2_task(Some(CI_ARN));
    let (diag, sink) = jt_core::CollectSink::pair();

    let host = resolve_host(&orch, &compute, &job, Some(&task), Some(CLUSTER), &diag).await;

    assert!(host.container_instance.is_some());
    assert!(host.instance.is_none());
    assert!(sink.for_stage("host").iter().any(|m| m.contains("instance describe failed")));
    assert_eq!(compute.calls(), vec![ComputeCall::DescribeInstance("i-0broken".to_string())]);
}
