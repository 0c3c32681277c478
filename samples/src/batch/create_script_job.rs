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

// [START batch_create_script_job]
use crate::batch::BatchService;
use crate::batch::model::{
    AllocationPolicy, ComputeResource, Destination, InstancePolicy, InstancePolicyOrTemplate, Job,
    LogsPolicy, Runnable, Script, TaskGroup, TaskSpec,
};
use google_cloud_wkt::Duration;

/// # Parameters
/// - `project_id`: the id of a Google Cloud project. For example: `my-project`.
/// - `region`: the region where the job runs. For example: `us-central1`.
/// - `job_id`: the id for the new job.
pub async fn sample(
    client: &BatchService,
    project_id: &str,
    region: &str,
    job_id: &str,
) -> anyhow::Result<Job> {
    let runnable = Runnable::new().set_script(Script::new().set_text(
        "echo Hello world! This is task ${BATCH_TASK_INDEX}. This job has a total of ${BATCH_TASK_COUNT} tasks.",
    ));
    let task_spec = TaskSpec::new()
        .set_runnables([runnable])
        .set_compute_resource(ComputeResource::new().set_cpu_milli(2000).set_memory_mib(16))
        .set_max_retry_count(2)
        .set_max_run_duration(Duration::clamp(3600, 0));
    let job = Job::new()
        .set_task_groups([TaskGroup::new().set_task_count(4).set_task_spec(task_spec)])
        .set_allocation_policy(AllocationPolicy::new().set_instances([
            InstancePolicyOrTemplate::new()
                .set_policy(InstancePolicy::new().set_machine_type("e2-standard-4")),
        ]))
        .set_labels([("env", "testing"), ("type", "script")])
        .set_logs_policy(LogsPolicy::new().set_destination(Destination::CloudLogging));

    let response = client
        .create_job(
            format!("projects/{project_id}/locations/{region}"),
            job_id,
            job,
        )
        .await?;
    println!("Job created: {}", response.name);

    Ok(response)
}
// [END batch_create_script_job]
