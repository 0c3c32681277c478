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

//! The trait implemented by the Batch transport.
//!
//! Tests implement it with `mockall` and create clients with
//! [BatchService::from_stub][crate::batch::BatchService::from_stub].

use super::model;
use google_cloud_gax::Result;

#[async_trait::async_trait]
pub trait BatchService: std::fmt::Debug + Send + Sync {
    async fn create_job(&self, req: model::CreateJobRequest) -> Result<model::Job>;

    async fn get_job(&self, req: model::GetJobRequest) -> Result<model::Job>;

    async fn list_jobs(&self, req: model::ListJobsRequest) -> Result<model::ListJobsResponse>;

    async fn delete_job(&self, req: model::DeleteJobRequest) -> Result<model::Operation>;

    async fn get_operation(&self, req: model::GetOperationRequest) -> Result<model::Operation>;
}
