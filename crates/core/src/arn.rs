// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structural parsing of ECS-style ARNs.
//!
//! Task and container-instance ARNs embed their owning cluster in the
//! resource path: `arn:<partition>:ecs:<region>:<account>:<kind>/<cluster>/<id>`.
//! Legacy ARNs omit the cluster segment (`...:task/<id>`), so the cluster
//! is optional. No I/O here; everything is string surgery.

use serde::{Deserialize, Serialize};

/// Parsed parts of an ECS-style ARN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcsArn {
    pub partition: String,
    pub region: String,
    pub account: String,
    /// Resource kind: `task`, `container-instance`, `cluster`, ...
    pub kind: String,
    /// Cluster segment, present only in new-format ARNs.
    pub cluster: Option<String>,
    /// Trailing resource id.
    pub id: String,
}

impl EcsArn {
    /// Parse an ECS-service ARN. Returns `None` for anything that is not
    /// shaped like `arn:<partition>:ecs:<region>:<account>:<resource>`.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.splitn(6, ':');
        if parts.next()? != "arn" {
            return None;
        }
        let partition = parts.next()?;
        if parts.next()? != "ecs" {
            return None;
        }
        let region = parts.next()?;
        let account = parts.next()?;
        let resource = parts.next()?;

        let mut segments = resource.split('/');
        let kind = segments.next()?;
        let rest: Vec<&str> = segments.collect();
        let (cluster, id) = match rest.as_slice() {
            [id] => (None, *id),
            [cluster, id] => (Some(*cluster), *id),
            _ => return None,
        };
        if kind.is_empty() || id.is_empty() {
            return None;
        }

        Some(Self {
            partition: partition.to_string(),
            region: region.to_string(),
            account: account.to_string(),
            kind: kind.to_string(),
            cluster: cluster.map(str::to_string),
            id: id.to_string(),
        })
    }

    /// Reconstruct the owning cluster's ARN from the embedded segments.
    pub fn cluster_arn(&self) -> Option<String> {
        self.cluster.as_ref().map(|cluster| {
            format!(
                "arn:{}:ecs:{}:{}:cluster/{}",
                self.partition, self.region, self.account, cluster
            )
        })
    }
}

/// Extract the owning cluster's ARN from a task or container-instance ARN.
pub fn cluster_arn_from(raw: &str) -> Option<String> {
    EcsArn::parse(raw)?.cluster_arn()
}

/// Extract the owning cluster's bare name from a task or container-instance ARN.
pub fn cluster_name_from(raw: &str) -> Option<String> {
    EcsArn::parse(raw)?.cluster
}

#[cfg(test)]
#[path = "arn_tests.rs"]
mod tests;
