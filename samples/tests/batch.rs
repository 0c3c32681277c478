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

#[cfg(all(test, feature = "run-integration-tests"))]
mod batch {
    use google_cloud_samples::batch::*;
    use google_cloud_samples_test_utils::resource_names::{PREFIX, random_job_id};
    use google_cloud_samples_test_utils::runtime_config::{batch_region_id, project_id, region_id};

    async fn assert_deleted(
        client: &BatchService,
        project_id: &str,
        region: &str,
        job_id: &str,
    ) {
        let got = get_job::sample(client, project_id, region, job_id).await;
        let err = got.expect_err("deleted jobs are not found");
        let err = err
            .downcast_ref::<google_cloud_gax::error::Error>()
            .expect("the error is a service error");
        assert!(google_cloud_samples::is_not_found(err), "{err:?}");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn job_samples() -> anyhow::Result<()> {
        let _guard = google_cloud_samples_test_utils::tracing::enable_tracing();
        let project_id = project_id()?;
        let region = batch_region_id();
        let zone = format!("{region}-b");
        let disk_region = region_id();
        let client = BatchService::new().await?;

        let _cleanup = tokio::spawn({
            let client = client.clone();
            let project_id = project_id.clone();
            let region = region.clone();
            async move {
                if let Err(err) = cleanup_stale_jobs(&client, &project_id, &region, PREFIX).await {
                    eprintln!("Error cleaning up stale jobs: {err:?}");
                }
            }
        });

        let job_id = random_job_id();
        let job = create_script_job::sample(&client, &project_id, &region, &job_id).await?;
        assert_eq!(
            job.name,
            format!("projects/{project_id}/locations/{region}/jobs/{job_id}")
        );
        let got = get_job::sample(&client, &project_id, &region, &job_id).await?;
        assert_eq!(got.uid, job.uid);
        let jobs = list_jobs::sample(&client, &project_id, &region).await?;
        assert!(jobs.iter().any(|j| j.name == job.name), "{jobs:?}");
        delete_job::sample(&client, &project_id, &region, &job_id).await?;
        assert_deleted(&client, &project_id, &region, &job_id).await;

        let job_id = random_job_id();
        let job = create_persistent_disk_job::sample(
            &client,
            &project_id,
            &region,
            &zone,
            &disk_region,
            &job_id,
        )
        .await?;
        assert_eq!(
            job.name,
            format!("projects/{project_id}/locations/{region}/jobs/{job_id}")
        );
        let labels = &job.labels;
        assert_eq!(labels.get("env").map(String::as_str), Some("testing"));
        let disks = job
            .allocation_policy
            .as_ref()
            .and_then(|p| p.instances.first())
            .and_then(|i| i.policy.as_ref())
            .map(|p| p.disks.clone())
            .unwrap_or_default();
        assert!(
            disks.iter().any(|d| d.existing_disk
                == format!(
                    "projects/{project_id}/regions/{disk_region}/disks/{}",
                    create_persistent_disk_job::EXISTING_PERSISTENT_DISK_NAME
                )),
            "{disks:?}"
        );
        delete_job::sample(&client, &project_id, &region, &job_id).await?;
        assert_deleted(&client, &project_id, &region, &job_id).await;

        Ok(())
    }
}
