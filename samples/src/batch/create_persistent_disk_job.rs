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

// [START batch_create_persistent_disk_job]
use crate::batch::BatchService;
use crate::batch::model::{
    AllocationPolicy, AttachedDisk, ComputeResource, Destination, Disk, InstancePolicy,
    InstancePolicyOrTemplate, Job, LocationPolicy, LogsPolicy, Runnable, Script, TaskGroup,
    TaskSpec, Volume,
};
use google_cloud_wkt::Duration;

/// The device name of the disk created with each VM.
pub const NEW_PERSISTENT_DISK_NAME: &str = "new-persistent-disk-name";
/// The device name of a regional disk that must exist before running the job.
pub const EXISTING_PERSISTENT_DISK_NAME: &str = "existing-persistent-disk-name";

/// # Parameters
/// - `project_id`: the id of a Google Cloud project. For example: `my-project`.
/// - `region`: the region where the job runs. For example: `europe-central2`.
/// - `zone`: a zone in `region`. For example: `europe-central2-b`.
/// - `disk_region`: the region of the existing disk. For example:
///   `us-central1`.
/// - `job_id`: the id for the new job.
pub async fn sample(
    client: &BatchService,
    project_id: &str,
    region: &str,
    zone: &str,
    disk_region: &str,
    job_id: &str,
) -> anyhow::Result<Job> {
    let response = client
        .create_job(
            format!("projects/{project_id}/locations/{region}"),
            job_id,
            job(project_id, region, zone, disk_region),
        )
        .await?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(response)
}

/// The job definition: three tasks, each writing a file into the new disk.
pub fn job(project_id: &str, region: &str, zone: &str, disk_region: &str) -> Job {
    let new_disk = NEW_PERSISTENT_DISK_NAME;
    let existing_disk = EXISTING_PERSISTENT_DISK_NAME;

    let runnable = Runnable::new().set_script(Script::new().set_text(format!(
        "echo Hello world from task ${{BATCH_TASK_INDEX}}. >> /mnt/disks/{new_disk}/output_task_${{BATCH_TASK_INDEX}}.txt"
    )));

    let task_spec = TaskSpec::new()
        .set_runnables([runnable])
        // 2000 milli-CPU is 2 vCPUs.
        .set_compute_resource(ComputeResource::new().set_cpu_milli(2000).set_memory_mib(16))
        .set_max_retry_count(1)
        .set_max_run_duration(Duration::clamp(3600, 0))
        .set_volumes([
            Volume::new()
                .set_device_name(new_disk)
                .set_mount_path(format!("/mnt/disks/{new_disk}")),
            Volume::new()
                .set_device_name(existing_disk)
                .set_mount_path(format!("/mnt/disks/{existing_disk}")),
        ]);

    let task_group = TaskGroup::new()
        .set_task_count(3)
        .set_parallelism(1)
        .set_task_spec(task_spec);

    let disks = [
        AttachedDisk::new().set_device_name(new_disk).set_new_disk(
            Disk::new()
                .set_type("pd-balanced")
                .set_size_gb(10)
                .set_disk_interface(""),
        ),
        AttachedDisk::new()
            .set_device_name(existing_disk)
            .set_existing_disk(format!(
                "projects/{project_id}/regions/{disk_region}/disks/{existing_disk}"
            )),
    ];

    let allocation_policy = AllocationPolicy::new()
        .set_instances([InstancePolicyOrTemplate::new().set_policy(
            InstancePolicy::new()
                .set_machine_type("n1-standard-1")
                .set_disks(disks),
        )])
        // The new disk is zonal, so the VMs must run in `zone`.
        .set_location(LocationPolicy::new().set_allowed_locations([
            format!("regions/{region}"),
            format!("zones/{zone}"),
        ]));

    Job::new()
        .set_task_groups([task_group])
        .set_allocation_policy(allocation_policy)
        .set_labels([("env", "testing"), ("type", "script")])
        .set_logs_policy(LogsPolicy::new().set_destination(Destination::CloudLogging))
}
// [END batch_create_persistent_disk_job]
