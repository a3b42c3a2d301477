// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

const TASK_ARN: &str = "arn:aws:ecs:us-west-2:111122223333:task/my-cluster/abcd1234";
const LEGACY_TASK_ARN: &str = "arn:aws:ecs:us-west-2:111122223333:task/abcd1234";
const CI_ARN: &str =
    "arn:aws:ecs:eu-central-1:444455556666:container-instance/prod-batch/0f1e2d3c";

#[test]
fn parse_new_format_task_arn() {
    let arn = EcsArn::parse(TASK_ARN).unwrap();
    assert_eq!(arn.partition, "aws");
    assert_eq!(arn.region, "us-west-2");
    assert_eq!(arn.account, "111122223333");
    assert_eq!(arn.kind, "task");
    assert_eq!(arn.cluster.as_deref(), Some("my-cluster"));
    assert_eq!(arn.id, "abcd1234");
}

#[test]
fn parse_legacy_task_arn_has_no_cluster() {
    let arn = EcsArn::parse(LEGACY_TASK_ARN).unwrap();
    assert_eq!(arn.cluster, None);
    assert_eq!(arn.id, "abcd1234");
    assert_eq!(arn.cluster_arn(), None);
}

#[test]
fn cluster_arn_reconstruction() {
    assert_eq!(
        cluster_arn_from(TASK_ARN).as_deref(),
        Some("arn:aws:ecs:us-west-2:111122223333:cluster/my-cluster")
    );
    assert_eq!(
        cluster_arn_from(CI_ARN).as_deref(),
        Some("arn:aws:ecs:eu-central-1:444455556666:cluster/prod-batch")
    );
}

#[test]
fn cluster_name_extraction() {
    assert_eq!(cluster_name_from(TASK_ARN).as_deref(), Some("my-cluster"));
    assert_eq!(cluster_name_from(CI_ARN).as_deref(), Some("prod-batch"));
    assert_eq!(cluster_name_from(LEGACY_TASK_ARN), None);
}

#[parameterized(
    empty = { "" },
    not_an_arn = { "my-cluster" },
    wrong_service = { "arn:aws:ec2:us-west-2:111122223333:instance/i-0abc" },
    missing_resource_id = { "arn:aws:ecs:us-west-2:111122223333:task/" },
    too_many_segments = { "arn:aws:ecs:us-west-2:111122223333:task/a/b/c" },
    bare_kind = { "arn:aws:ecs:us-west-2:111122223333:task" },
)]
fn rejects_malformed(raw: &str) {
    assert_eq!(EcsArn::parse(raw), None);
}

#[test]
fn gov_partition_round_trips() {
    let arn = "arn:aws-us-gov:ecs:us-gov-west-1:111122223333:task/secure/feed42";
    assert_eq!(
        cluster_arn_from(arn).as_deref(),
        Some("arn:aws-us-gov:ecs:us-gov-west-1:111122223333:cluster/secure")
    );
}
