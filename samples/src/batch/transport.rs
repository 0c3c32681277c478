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
use crate::rest::{NoBody, RestClient, page_query};
use google_cloud_gax::Result;
use reqwest::Method;

pub(crate) const DEFAULT_ENDPOINT: &str = "https://batch.googleapis.com";

#[derive(Clone, Debug)]
pub(crate) struct BatchService {
    inner: RestClient,
}

impl BatchService {
    pub(crate) fn new(inner: RestClient) -> Self {
        Self { inner }
    }
}

#[async_trait::async_trait]
impl super::stub::BatchService for BatchService {
    async fn create_job(&self, req: model::CreateJobRequest) -> Result<model::Job> {
        let builder = self
            .inner
            .builder(Method::POST, &format!("{}/jobs", req.parent))
            .query(&[("jobId", &req.job_id)]);
        self.inner.execute(builder, req.job.as_ref()).await
    }

    async fn get_job(&self, req: model::GetJobRequest) -> Result<model::Job> {
        let builder = self.inner.builder(Method::GET, &req.name);
        self.inner.execute(builder, None::<&NoBody>).await
    }

    async fn list_jobs(&self, req: model::ListJobsRequest) -> Result<model::ListJobsResponse> {
        let builder = self
            .inner
            .builder(Method::GET, &format!("{}/jobs", req.parent));
        let builder = match req.filter.as_str() {
            "" => builder,
            f => builder.query(&[("filter", f)]),
        };
        let builder = page_query(builder, req.page_size, &req.page_token);
        self.inner.execute(builder, None::<&NoBody>).await
    }

    async fn delete_job(&self, req: model::DeleteJobRequest) -> Result<model::Operation> {
        let builder = self.inner.builder(Method::DELETE, &req.name);
        let builder = match req.reason.as_str() {
            "" => builder,
            r => builder.query(&[("reason", r)]),
        };
        self.inner.execute(builder, None::<&NoBody>).await
    }

    async fn get_operation(&self, req: model::GetOperationRequest) -> Result<model::Operation> {
        let builder = self.inner.builder(Method::GET, &req.name);
        self.inner.execute(builder, None::<&NoBody>).await
    }
}
