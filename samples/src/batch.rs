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

//! Samples for [Batch](https://cloud.google.com/batch/docs).
//!
//! [BatchService] is a small client for the Batch REST API, built like the
//! Game Servers client, with a [stub] to mock it in tests.

pub mod client;
pub mod model;
pub mod stub;
mod transport;

pub use client::{BatchService, PollingPolicy};

pub mod create_persistent_disk_job;
pub mod create_script_job;
pub mod delete_job;
pub mod get_job;
pub mod list_jobs;

/// Deletes jobs created by the integration tests that are older than
/// [crate::STALE_AGE].
///
/// Errors deleting individual jobs are logged and otherwise ignored, the next
/// test run will try again.
pub async fn cleanup_stale_jobs(
    client: &BatchService,
    project_id: &str,
    region: &str,
    prefix: &str,
) -> anyhow::Result<()> {
    let stale_deadline = crate::stale_deadline()?;
    let location = crate::names::LocationName::new(project_id, region);

    let mut stale = Vec::new();
    for job in client.list_jobs(location.to_string()).await? {
        let Some(job_id) = job.name.rsplit('/').next() else {
            continue;
        };
        if !job_id.starts_with(prefix) {
            continue;
        }
        if job.create_time.is_none_or(|t| t > stale_deadline) {
            continue;
        }
        stale.push(job.name);
    }

    let pending = stale.into_iter().map(|name| async move {
        let result = match client.delete_job(&name).await {
            Ok(op) => client.until_done(op).await,
            Err(e) => Err(e),
        };
        (name, crate::ignore_not_found(result))
    });
    for (name, result) in futures::future::join_all(pending).await {
        match result {
            Ok(_) => tracing::info!("deleted stale job {name}"),
            Err(e) => tracing::warn!("error deleting stale job {name}: {e}"),
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::model;
    use google_cloud_gax as gax;

    mockall::mock! {
        #[derive(Debug)]
        pub BatchService {}
        #[async_trait::async_trait]
        impl super::stub::BatchService for BatchService {
            async fn create_job(&self, req: model::CreateJobRequest) -> gax::Result<model::Job>;
            async fn get_job(&self, req: model::GetJobRequest) -> gax::Result<model::Job>;
            async fn list_jobs(&self, req: model::ListJobsRequest) -> gax::Result<model::ListJobsResponse>;
            async fn delete_job(&self, req: model::DeleteJobRequest) -> gax::Result<model::Operation>;
            async fn get_operation(&self, req: model::GetOperationRequest) -> gax::Result<model::Operation>;
        }
    }

    /// A finished operation with an empty response.
    pub(crate) fn finished_empty_operation() -> model::Operation {
        model::Operation::new()
            .set_name("projects/p/locations/us-central1/operations/test-only")
            .set_done(true)
    }

    #[tokio::test]
    async fn cleanup_only_deletes_stale_jobs_with_prefix() -> anyhow::Result<()> {
        use google_cloud_wkt::Timestamp;
        let old = Timestamp::clamp(0, 0);
        let recent = Timestamp::clamp(i64::MAX / 2, 0);
        let parent = "projects/p/locations/us-central1";

        let mut mock = MockBatchService::new();
        mock.expect_list_jobs()
            .withf(move |r| r.parent == parent)
            .return_once(move |_| {
                Ok(model::ListJobsResponse::new().set_jobs([
                    model::Job::new()
                        .set_name(format!("{parent}/jobs/rust-samples-old"))
                        .set_create_time(old.clone()),
                    model::Job::new()
                        .set_name(format!("{parent}/jobs/rust-samples-new"))
                        .set_create_time(recent),
                    model::Job::new()
                        .set_name(format!("{parent}/jobs/other-old"))
                        .set_create_time(old),
                ]))
            });
        mock.expect_delete_job()
            .withf(move |r| r.name == format!("{parent}/jobs/rust-samples-old"))
            .times(1)
            .returning(|_| Ok(finished_empty_operation()));

        let client = super::BatchService::from_stub(mock);
        super::cleanup_stale_jobs(&client, "p", "us-central1", "rust-samples-").await?;
        Ok(())
    }

    #[tokio::test]
    async fn cleanup_ignores_jobs_already_gone() -> anyhow::Result<()> {
        use google_cloud_wkt::Timestamp;
        let mut mock = MockBatchService::new();
        mock.expect_list_jobs().return_once(|_| {
            Ok(model::ListJobsResponse::new().set_jobs([model::Job::new()
                .set_name("projects/p/locations/us-central1/jobs/rust-samples-gone")
                .set_create_time(Timestamp::clamp(0, 0))]))
        });
        mock.expect_delete_job().times(1).returning(|_| {
            use gax::error::rpc::{Code, Status};
            Err(gax::error::Error::service(
                Status::default().set_code(Code::NotFound),
            ))
        });

        let client = super::BatchService::from_stub(mock);
        super::cleanup_stale_jobs(&client, "p", "us-central1", "rust-samples-").await?;
        Ok(())
    }
}
