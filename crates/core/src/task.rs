// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The orchestrator's task record, as resolved against a verified cluster.

use serde::{Deserialize, Serialize};

/// Launch type the orchestrator recorded for a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchType {
    Ec2,
    Fargate,
    External,
    Unknown,
}

crate::simple_display! {
    LaunchType {
        Ec2 => "ec2",
        Fargate => "fargate",
        External => "external",
        Unknown => "unknown",
    }
}

/// One orchestrator-managed execution instance.
///
/// Only ever constructed from a successful describe call, so the
/// `cluster_arn` here is verified, never guessed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDetail {
    pub arn: String,
    pub cluster_arn: Option<String>,
    /// Host slot the task is bound to. Absent for Fargate.
    pub container_instance_arn: Option<String>,
    pub launch_type: LaunchType,
    pub status: Option<String>,
    /// Free-text submitter tag; the scheduler stamps the job id here.
    pub started_by: Option<String>,
}

impl TaskDetail {
    pub fn is_fargate(&self) -> bool {
        self.launch_type == LaunchType::Fargate
    }
}

crate::builder! {
    pub struct TaskDetailBuilder => TaskDetail {
        into {
            arn: String = "arn:aws:ecs:us-west-2:111122223333:task/test/abcd",
        }
        set {
            launch_type: LaunchType = LaunchType::Ec2,
        }
        option {
            cluster_arn: String = Some("arn:aws:ecs:us-west-2:111122223333:cluster/test".into()),
            container_instance_arn: String = None,
            status: String = None,
            started_by: String = None,
        }
    }
}
