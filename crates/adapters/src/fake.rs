// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Programmable fake clients with call recording.
//!
//! Each fake mirrors one service trait: responses are inserted up front,
//! every call is recorded, and unprogrammed lookups return the service's
//! natural negative (a cluster mismatch, an empty describe, an empty log
//! page). Engine tests assert on both the results and the recorded calls.

use crate::ec2::ComputeApi;
use crate::error::AdapterError;
use crate::logs::{LogEvent, LogFetchOpts, LogPage, LogsApi};
use crate::orchestrator::{OrchestratorApi, TaskLookup};
use crate::scheduler::SchedulerApi;
use async_trait::async_trait;
use jt_core::{
    ComputeEnvironmentDetail, ContainerInstanceDetail, InstanceDetail, Job, JobQueueDetail,
    NetworkInterfaceDetail, SubnetDetail, TaskDetail, VpcDetail,
};
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet, VecDeque};

/// Recorded scheduler call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulerCall {
    DescribeJob(String),
    DescribeJobQueue(String),
    DescribeComputeEnvironments(Vec<String>),
}

#[derive(Default)]
pub struct FakeScheduler {
    jobs: Mutex<HashMap<String, Job>>,
    queues: Mutex<HashMap<String, JobQueueDetail>>,
    envs: Mutex<Vec<ComputeEnvironmentDetail>>,
    calls: Mutex<Vec<SchedulerCall>>,
}

impl FakeScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_job(&self, job: Job) {
        self.jobs.lock().insert(job.id.clone(), job);
    }

    pub fn insert_queue(&self, queue: JobQueueDetail) {
        self.queues.lock().insert(queue.name.clone(), queue);
    }

    pub fn insert_compute_environment(&self, env: ComputeEnvironmentDetail) {
        self.envs.lock().push(env);
    }

    pub fn calls(&self) -> Vec<SchedulerCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl SchedulerApi for FakeScheduler {
    async fn describe_job(&self, job_id: &str) -> Result<Option<Job>, AdapterError> {
        self.calls.lock().push(SchedulerCall::DescribeJob(job_id.to_string()));
        Ok(self.jobs.lock().get(job_id).cloned())
    }

    async fn describe_job_queue(
        &self,
        queue: &str,
    ) -> Result<Option<JobQueueDetail>, AdapterError> {
        self.calls.lock().push(SchedulerCall::DescribeJobQueue(queue.to_string()));
        let queues = self.queues.lock();
        Ok(queues
            .get(queue)
            .or_else(|| queues.values().find(|q| q.arn.as_deref() == Some(queue)))
            .cloned())
    }

    async fn describe_compute_environments(
        &self,
        refs: &[String],
    ) -> Result<Vec<ComputeEnvironmentDetail>, AdapterError> {
        self.calls.lock().push(SchedulerCall::DescribeComputeEnvironments(refs.to_vec()));
        let envs = self.envs.lock();
        Ok(refs
            .iter()
            .filter_map(|r| {
                envs.iter().find(|e| &e.arn == r || e.name.as_deref() == Some(r)).cloned()
            })
            .collect())
    }
}

/// Recorded orchestrator call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrchestratorCall {
    DescribeTask { cluster: Option<String>, task: String },
    ListClusters,
    ListTasksStartedBy { cluster: String, started_by: String },
    DescribeContainerInstance { cluster: String, arn: String },
}

#[derive(Default)]
pub struct FakeOrchestrator {
    lookups: Mutex<HashMap<(Option<String>, String), TaskLookup>>,
    lookup_errors: Mutex<HashSet<(Option<String>, String)>>,
    clusters: Mutex<Vec<String>>,
    started_by: Mutex<HashMap<(String, String), Vec<String>>>,
    container_instances: Mutex<HashMap<(String, String), ContainerInstanceDetail>>,
    calls: Mutex<Vec<OrchestratorCall>>,
}

impl FakeOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Program a successful describe for `(cluster, task)`.
    pub fn insert_task(&self, cluster: Option<&str>, task: &str, detail: TaskDetail) {
        self.lookups.lock().insert(
            (cluster.map(str::to_string), task.to_string()),
            TaskLookup::Found(detail),
        );
    }

    /// Program an explicit lookup outcome for `(cluster, task)`.
    pub fn insert_lookup(&self, cluster: Option<&str>, task: &str, lookup: TaskLookup) {
        self.lookups.lock().insert((cluster.map(str::to_string), task.to_string()), lookup);
    }

    /// Program a hard error for `(cluster, task)`.
    pub fn insert_task_error(&self, cluster: Option<&str>, task: &str) {
        self.lookup_errors.lock().insert((cluster.map(str::to_string), task.to_string()));
    }

    pub fn set_clusters(&self, clusters: &[&str]) {
        *self.clusters.lock() = clusters.iter().map(|c| c.to_string()).collect();
    }

    pub fn insert_started_by(&self, cluster: &str, started_by: &str, arns: &[&str]) {
        self.started_by.lock().insert(
            (cluster.to_string(), started_by.to_string()),
            arns.iter().map(|a| a.to_string()).collect(),
        );
    }

    pub fn insert_container_instance(&self, cluster: &str, detail: ContainerInstanceDetail) {
        self.container_instances.lock().insert((cluster.to_string(), detail.arn.clone()), detail);
    }

    pub fn calls(&self) -> Vec<OrchestratorCall> {
        self.calls.lock().clone()
    }

    pub fn describe_task_count(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|c| matches!(c, OrchestratorCall::DescribeTask { .. }))
            .count()
    }

    pub fn list_clusters_count(&self) -> usize {
        self.calls.lock().iter().filter(|c| matches!(c, OrchestratorCall::ListClusters)).count()
    }
}

#[async_trait]
impl OrchestratorApi for FakeOrchestrator {
    async fn describe_task(
        &self,
        cluster: Option<&str>,
        task: &str,
    ) -> Result<TaskLookup, AdapterError> {
        self.calls.lock().push(OrchestratorCall::DescribeTask {
            cluster: cluster.map(str::to_string),
            task: task.to_string(),
        });
        let key = (cluster.map(str::to_string), task.to_string());
        if self.lookup_errors.lock().contains(&key) {
            return Err(AdapterError::Request("injected describe-task failure".to_string()));
        }
        // Unprogrammed guesses behave like a wrong cluster.
        Ok(self.lookups.lock().get(&key).cloned().unwrap_or(TaskLookup::ClusterMismatch))
    }

    async fn list_clusters(&self) -> Result<Vec<String>, AdapterError> {
        self.calls.lock().push(OrchestratorCall::ListClusters);
        Ok(self.clusters.lock().clone())
    }

    async fn list_tasks_started_by(
        &self,
        cluster: &str,
        started_by: &str,
    ) -> Result<Vec<String>, AdapterError> {
        self.calls.lock().push(OrchestratorCall::ListTasksStartedBy {
            cluster: cluster.to_string(),
            started_by: started_by.to_string(),
        });
        Ok(self
            .started_by
            .lock()
            .get(&(cluster.to_string(), started_by.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn describe_container_instance(
        &self,
        cluster: &str,
        arn: &str,
    ) -> Result<Option<ContainerInstanceDetail>, AdapterError> {
        self.calls.lock().push(OrchestratorCall::DescribeContainerInstance {
            cluster: cluster.to_string(),
            arn: arn.to_string(),
        });
        Ok(self.container_instances.lock().get(&(cluster.to_string(), arn.to_string())).cloned())
    }
}

/// Recorded compute call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComputeCall {
    DescribeInstance(String),
    DescribeNetworkInterface(String),
    DescribeSubnet(String),
    DescribeVpc(String),
}

#[derive(Default)]
pub struct FakeCompute {
    instances: Mutex<HashMap<String, InstanceDetail>>,
    interfaces: Mutex<HashMap<String, NetworkInterfaceDetail>>,
    subnets: Mutex<HashMap<String, SubnetDetail>>,
    vpcs: Mutex<HashMap<String, VpcDetail>>,
    errors: Mutex<HashSet<String>>,
    calls: Mutex<Vec<ComputeCall>>,
}

impl FakeCompute {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_instance(&self, detail: InstanceDetail) {
        self.instances.lock().insert(detail.id.clone(), detail);
    }

    pub fn insert_network_interface(&self, reference: &str, detail: NetworkInterfaceDetail) {
        self.interfaces.lock().insert(reference.to_string(), detail);
    }

    pub fn insert_subnet(&self, detail: SubnetDetail) {
        self.subnets.lock().insert(detail.id.clone(), detail);
    }

    pub fn insert_vpc(&self, detail: VpcDetail) {
        self.vpcs.lock().insert(detail.id.clone(), detail);
    }

    /// Any lookup for this id returns a hard error.
    pub fn insert_error(&self, id: &str) {
        self.errors.lock().insert(id.to_string());
    }

    pub fn calls(&self) -> Vec<ComputeCall> {
        self.calls.lock().clone()
    }

    fn check(&self, id: &str) -> Result<(), AdapterError> {
        if self.errors.lock().contains(id) {
            return Err(AdapterError::Request(format!("injected failure for {id}")));
        }
        Ok(())
    }
}

#[async_trait]
impl ComputeApi for FakeCompute {
    async fn describe_instance(&self, id: &str) -> Result<Option<InstanceDetail>, AdapterError> {
        self.calls.lock().push(ComputeCall::DescribeInstance(id.to_string()));
        self.check(id)?;
        Ok(self.instances.lock().get(id).cloned())
    }

    async fn describe_network_interface(
        &self,
        reference: &str,
    ) -> Result<Option<NetworkInterfaceDetail>, AdapterError> {
        self.calls.lock().push(ComputeCall::DescribeNetworkInterface(reference.to_string()));
        self.check(reference)?;
        Ok(self.interfaces.lock().get(reference).cloned())
    }

    async fn describe_subnet(&self, id: &str) -> Result<Option<SubnetDetail>, AdapterError> {
        self.calls.lock().push(ComputeCall::DescribeSubnet(id.to_string()));
        self.check(id)?;
        Ok(self.subnets.lock().get(id).cloned())
    }

    async fn describe_vpc(&self, id: &str) -> Result<Option<VpcDetail>, AdapterError> {
        self.calls.lock().push(ComputeCall::DescribeVpc(id.to_string()));
        self.check(id)?;
        Ok(self.vpcs.lock().get(id).cloned())
    }
}

#[derive(Default)]
pub struct FakeLogs {
    pages: Mutex<VecDeque<LogPage>>,
    calls: Mutex<Vec<(String, String, LogFetchOpts)>>,
}

impl FakeLogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a page of single-line events with sequential timestamps.
    pub fn push_lines(&self, lines: &[&str], next_token: Option<&str>) {
        let base = 1_700_000_000_000_i64;
        let events = lines
            .iter()
            .enumerate()
            .map(|(i, line)| LogEvent {
                timestamp_ms: Some(base + i as i64 * 1000),
                message: line.to_string(),
            })
            .collect();
        self.pages
            .lock()
            .push_back(LogPage { events, next_token: next_token.map(str::to_string) });
    }

    pub fn push_page(&self, page: LogPage) {
        self.pages.lock().push_back(page);
    }

    /// Recorded `(group, stream, opts)` triples.
    pub fn calls(&self) -> Vec<(String, String, LogFetchOpts)> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl LogsApi for FakeLogs {
    async fn get_log_events(
        &self,
        group: &str,
        stream: &str,
        opts: LogFetchOpts,
    ) -> Result<LogPage, AdapterError> {
        self.calls.lock().push((group.to_string(), stream.to_string(), opts));
        Ok(self.pages.lock().pop_front().unwrap_or_default())
    }
}
