// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Messages for the Batch REST API.
//!
//! Only the fields used by the samples are modeled. Unknown fields in
//! responses are ignored. `int64` fields travel as JSON strings.

use google_cloud_wkt::{Duration, Timestamp};
use std::collections::HashMap;

pub use crate::rest::{GetOperationRequest, Operation};

fn is_default<T: Default + PartialEq>(v: &T) -> bool {
    *v == T::default()
}

/// A job runs one or more groups of tasks on Compute Engine VMs.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Job {
    /// `projects/{project}/locations/{location}/jobs/{job}`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub uid: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub task_groups: Vec<TaskGroup>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_policy: Option<AllocationPolicy>,

    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,

    /// Set by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<Timestamp>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<Timestamp>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logs_policy: Option<LogsPolicy>,
}

impl Job {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    pub fn set_uid<T: Into<String>>(mut self, v: T) -> Self {
        self.uid = v.into();
        self
    }

    pub fn set_task_groups<T: IntoIterator<Item = TaskGroup>>(mut self, v: T) -> Self {
        self.task_groups = v.into_iter().collect();
        self
    }

    pub fn set_allocation_policy<T: Into<AllocationPolicy>>(mut self, v: T) -> Self {
        self.allocation_policy = Some(v.into());
        self
    }

    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_status<T: Into<JobStatus>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    pub fn set_create_time<T: Into<Timestamp>>(mut self, v: T) -> Self {
        self.create_time = Some(v.into());
        self
    }

    pub fn set_logs_policy<T: Into<LogsPolicy>>(mut self, v: T) -> Self {
        self.logs_policy = Some(v.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct JobStatus {
    pub state: State,
}

impl JobStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_state(mut self, v: State) -> Self {
        self.state = v;
        self
    }
}

/// The lifecycle of a job.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum State {
    #[default]
    StateUnspecified,
    Queued,
    Scheduled,
    Running,
    Succeeded,
    Failed,
    DeletionInProgress,
    /// A state added after this code was written.
    #[serde(other)]
    Unknown,
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TaskGroup {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_spec: Option<TaskSpec>,

    /// Zero means the service default, one task.
    #[serde_as(as = "serde_with::DisplayFromStr")]
    #[serde(skip_serializing_if = "is_default")]
    pub task_count: i64,

    /// How many tasks run at the same time. Zero means the service default.
    #[serde_as(as = "serde_with::DisplayFromStr")]
    #[serde(skip_serializing_if = "is_default")]
    pub parallelism: i64,
}

impl TaskGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_task_spec<T: Into<TaskSpec>>(mut self, v: T) -> Self {
        self.task_spec = Some(v.into());
        self
    }

    pub fn set_task_count(mut self, v: i64) -> Self {
        self.task_count = v;
        self
    }

    pub fn set_parallelism(mut self, v: i64) -> Self {
        self.parallelism = v;
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TaskSpec {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub runnables: Vec<Runnable>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute_resource: Option<ComputeResource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_run_duration: Option<Duration>,

    #[serde(skip_serializing_if = "is_default")]
    pub max_retry_count: i32,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<Volume>,
}

impl TaskSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_runnables<T: IntoIterator<Item = Runnable>>(mut self, v: T) -> Self {
        self.runnables = v.into_iter().collect();
        self
    }

    pub fn set_compute_resource<T: Into<ComputeResource>>(mut self, v: T) -> Self {
        self.compute_resource = Some(v.into());
        self
    }

    pub fn set_max_run_duration<T: Into<Duration>>(mut self, v: T) -> Self {
        self.max_run_duration = Some(v.into());
        self
    }

    pub fn set_max_retry_count(mut self, v: i32) -> Self {
        self.max_retry_count = v;
        self
    }

    pub fn set_volumes<T: IntoIterator<Item = Volume>>(mut self, v: T) -> Self {
        self.volumes = v.into_iter().collect();
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Runnable {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<Script>,
}

impl Runnable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_script<T: Into<Script>>(mut self, v: T) -> Self {
        self.script = Some(v.into());
        self
    }
}

/// A shell script, either inline (`text`) or a file on the VM (`path`).
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Script {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub path: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_path<T: Into<String>>(mut self, v: T) -> Self {
        self.path = v.into();
        self
    }

    pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
        self.text = v.into();
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ComputeResource {
    /// 1000 milli-CPU is one vCPU.
    #[serde_as(as = "serde_with::DisplayFromStr")]
    #[serde(skip_serializing_if = "is_default")]
    pub cpu_milli: i64,

    #[serde_as(as = "serde_with::DisplayFromStr")]
    #[serde(skip_serializing_if = "is_default")]
    pub memory_mib: i64,
}

impl ComputeResource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_cpu_milli(mut self, v: i64) -> Self {
        self.cpu_milli = v;
        self
    }

    pub fn set_memory_mib(mut self, v: i64) -> Self {
        self.memory_mib = v;
        self
    }
}

/// Mounts a disk attached to the VM into the task's file system.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Volume {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub device_name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub mount_path: String,
}

impl Volume {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_device_name<T: Into<String>>(mut self, v: T) -> Self {
        self.device_name = v.into();
        self
    }

    pub fn set_mount_path<T: Into<String>>(mut self, v: T) -> Self {
        self.mount_path = v.into();
        self
    }
}

/// Where the job VMs run and what they look like.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AllocationPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationPolicy>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instances: Vec<InstancePolicyOrTemplate>,
}

impl AllocationPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_location<T: Into<LocationPolicy>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    pub fn set_instances<T: IntoIterator<Item = InstancePolicyOrTemplate>>(mut self, v: T) -> Self {
        self.instances = v.into_iter().collect();
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LocationPolicy {
    /// For example `regions/us-central1` or `zones/us-central1-a`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_locations: Vec<String>,
}

impl LocationPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_allowed_locations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.allowed_locations = v.into_iter().map(Into::into).collect();
        self
    }
}

/// Either an inline [InstancePolicy] or the name of an instance template.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InstancePolicyOrTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<InstancePolicy>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub instance_template: String,
}

impl InstancePolicyOrTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_policy<T: Into<InstancePolicy>>(mut self, v: T) -> Self {
        self.policy = Some(v.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InstancePolicy {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub machine_type: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub disks: Vec<AttachedDisk>,
}

impl InstancePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_machine_type<T: Into<String>>(mut self, v: T) -> Self {
        self.machine_type = v.into();
        self
    }

    pub fn set_disks<T: IntoIterator<Item = AttachedDisk>>(mut self, v: T) -> Self {
        self.disks = v.into_iter().collect();
        self
    }
}

/// A disk attached to each VM: a new disk, or an existing one by name.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AttachedDisk {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_disk: Option<Disk>,

    /// `projects/{project}/regions/{region}/disks/{disk}` or
    /// `projects/{project}/zones/{zone}/disks/{disk}`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub existing_disk: String,

    /// Matches [Volume::device_name].
    #[serde(skip_serializing_if = "String::is_empty")]
    pub device_name: String,
}

impl AttachedDisk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_new_disk<T: Into<Disk>>(mut self, v: T) -> Self {
        self.new_disk = Some(v.into());
        self.existing_disk.clear();
        self
    }

    pub fn set_existing_disk<T: Into<String>>(mut self, v: T) -> Self {
        self.existing_disk = v.into();
        self.new_disk = None;
        self
    }

    pub fn set_device_name<T: Into<String>>(mut self, v: T) -> Self {
        self.device_name = v.into();
        self
    }
}

#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Disk {
    /// For example `pd-balanced` or `local-ssd`.
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub r#type: String,

    #[serde_as(as = "serde_with::DisplayFromStr")]
    #[serde(skip_serializing_if = "is_default")]
    pub size_gb: i64,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub disk_interface: String,
}

impl Disk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }

    pub fn set_size_gb(mut self, v: i64) -> Self {
        self.size_gb = v;
        self
    }

    pub fn set_disk_interface<T: Into<String>>(mut self, v: T) -> Self {
        self.disk_interface = v.into();
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogsPolicy {
    pub destination: Destination,
}

impl LogsPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_destination(mut self, v: Destination) -> Self {
        self.destination = v;
        self
    }
}

/// Where the task logs go.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum Destination {
    #[default]
    DestinationUnspecified,
    CloudLogging,
    Path,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListJobsResponse {
    pub jobs: Vec<Job>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,
    pub unreachable: Vec<String>,
}

impl ListJobsResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_jobs<T: IntoIterator<Item = Job>>(mut self, v: T) -> Self {
        self.jobs = v.into_iter().collect();
        self
    }

    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

// Requests map to the path and query string, only `job` is sent as a body.

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateJobRequest {
    pub parent: String,
    pub job_id: String,
    pub job: Option<Job>,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetJobRequest {
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListJobsRequest {
    pub parent: String,
    pub filter: String,
    pub page_size: i32,
    pub page_token: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteJobRequest {
    pub name: String,
    pub reason: String,
}
