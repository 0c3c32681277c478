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

use super::model;
use super::stub;
use google_cloud_gax::Result;
use std::sync::Arc;

pub use crate::rest::PollingPolicy;

/// Implements a client for the Batch API.
///
/// # Example
/// ```no_run
/// # use google_cloud_samples::batch::BatchService;
/// # async fn sample() -> anyhow::Result<()> {
/// let client = BatchService::new().await?;
/// let job = client
///     .get_job("projects/my-project/locations/us-central1/jobs/my-job")
///     .await?;
/// println!("{job:?}");
/// # Ok(()) }
/// ```
///
/// `BatchService` holds a connection pool internally, create one and reuse
/// it. Clones share the pool.
#[derive(Clone, Debug)]
pub struct BatchService {
    inner: Arc<dyn stub::BatchService>,
    polling: PollingPolicy,
}

impl BatchService {
    /// Creates a client using Application Default Credentials.
    pub async fn new() -> anyhow::Result<Self> {
        Self::with_endpoint(super::transport::DEFAULT_ENDPOINT).await
    }

    pub async fn with_endpoint<T: Into<String>>(endpoint: T) -> anyhow::Result<Self> {
        let cred = google_cloud_auth::credentials::Builder::default().build()?;
        let transport = super::transport::BatchService::new(crate::rest::RestClient::new(
            cred,
            endpoint.into(),
        ));
        Ok(Self::from_stub(transport))
    }

    /// Creates a client from an implementation of [stub::BatchService].
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: stub::BatchService + 'static,
    {
        Self {
            inner: Arc::new(stub),
            polling: PollingPolicy::default(),
        }
    }

    pub fn with_polling_policy(mut self, v: PollingPolicy) -> Self {
        self.polling = v;
        self
    }

    pub async fn create_job(
        &self,
        parent: impl Into<String>,
        job_id: impl Into<String>,
        job: model::Job,
    ) -> Result<model::Job> {
        let req = model::CreateJobRequest {
            parent: parent.into(),
            job_id: job_id.into(),
            job: Some(job),
        };
        self.inner.create_job(req).await
    }

    pub async fn get_job(&self, name: impl Into<String>) -> Result<model::Job> {
        let req = model::GetJobRequest { name: name.into() };
        self.inner.get_job(req).await
    }

    /// Returns all the jobs in `parent`, following `next_page_token`.
    pub async fn list_jobs(&self, parent: impl Into<String>) -> Result<Vec<model::Job>> {
        let mut req = model::ListJobsRequest {
            parent: parent.into(),
            ..Default::default()
        };
        let mut jobs = Vec::new();
        loop {
            let page = self.inner.list_jobs(req.clone()).await?;
            jobs.extend(page.jobs);
            if page.next_page_token.is_empty() {
                return Ok(jobs);
            }
            req.page_token = page.next_page_token;
        }
    }

    /// Starts deleting a job. Use [until_done][Self::until_done] to wait for
    /// the deletion to finish.
    pub async fn delete_job(&self, name: impl Into<String>) -> Result<model::Operation> {
        let req = model::DeleteJobRequest {
            name: name.into(),
            ..Default::default()
        };
        self.inner.delete_job(req).await
    }

    /// Polls `operation` until it is done, see [crate::rest::until_done].
    pub async fn until_done(&self, operation: model::Operation) -> Result<model::Operation> {
        let inner = self.inner.clone();
        crate::rest::until_done(&self.polling, operation, move |req| {
            let inner = inner.clone();
            async move { inner.get_operation(req).await }
        })
        .await
    }
}
