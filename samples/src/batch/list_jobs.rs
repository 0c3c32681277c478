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

// [START batch_list_jobs]
use crate::batch::BatchService;
use crate::batch::model::Job;

pub async fn sample(
    client: &BatchService,
    project_id: &str,
    region: &str,
) -> anyhow::Result<Vec<Job>> {
    let jobs = client
        .list_jobs(format!("projects/{project_id}/locations/{region}"))
        .await?;
    for job in &jobs {
        println!("{}", job.name);
    }

    Ok(jobs)
}
// [END batch_list_jobs]
