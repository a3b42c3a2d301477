// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jt-core: Core library for the jobtrail (jt) CLI tool

pub mod macros;

pub mod arn;
pub mod chain;
pub mod compute_env;
pub mod diag;
pub mod host;
pub mod job;
pub mod network;
pub mod task;
pub mod time_fmt;

pub use arn::{cluster_arn_from, cluster_name_from, EcsArn};
pub use chain::{JobChain, ResolveError};
pub use compute_env::{ComputeEnvironmentDetail, JobQueueDetail};
#[cfg(any(test, feature = "test-support"))]
pub use diag::CollectSink;
pub use diag::{DiagSink, Diagnostics, NullSink, TracingSink};
pub use host::{ContainerInstanceDetail, InstanceDetail, SecurityGroupRef};
#[cfg(any(test, feature = "test-support"))]
pub use job::JobBuilder;
pub use job::{AttemptContainer, ContainerSpec, Job, JobAttempt, JobStatus, PlatformCapability};
pub use network::{NetworkInterfaceDetail, SubnetDetail, SubnetRef, Tag, VpcDetail};
pub use task::{LaunchType, TaskDetail};
pub use time_fmt::format_elapsed;
