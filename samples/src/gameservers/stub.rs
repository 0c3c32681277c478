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

//! The trait implemented by the Game Services transport.
//!
//! Application code uses [GameServices][crate::gameservers::GameServices].
//! Tests implement this trait, usually with `mockall`, and create clients
//! with [GameServices::from_stub][crate::gameservers::GameServices::from_stub].

use super::model;
use google_cloud_gax::Result;

#[async_trait::async_trait]
pub trait GameServices: std::fmt::Debug + Send + Sync {
    async fn create_realm(&self, req: model::CreateRealmRequest) -> Result<model::Operation>;

    async fn get_realm(&self, req: model::GetRealmRequest) -> Result<model::Realm>;

    async fn list_realms(&self, req: model::ListRealmsRequest) -> Result<model::ListRealmsResponse>;

    async fn update_realm(&self, req: model::UpdateRealmRequest) -> Result<model::Operation>;

    async fn delete_realm(&self, req: model::DeleteRealmRequest) -> Result<model::Operation>;

    async fn create_game_server_cluster(
        &self,
        req: model::CreateGameServerClusterRequest,
    ) -> Result<model::Operation>;

    async fn get_game_server_cluster(
        &self,
        req: model::GetGameServerClusterRequest,
    ) -> Result<model::GameServerCluster>;

    async fn list_game_server_clusters(
        &self,
        req: model::ListGameServerClustersRequest,
    ) -> Result<model::ListGameServerClustersResponse>;

    async fn update_game_server_cluster(
        &self,
        req: model::UpdateGameServerClusterRequest,
    ) -> Result<model::Operation>;

    async fn delete_game_server_cluster(
        &self,
        req: model::DeleteGameServerClusterRequest,
    ) -> Result<model::Operation>;

    async fn get_operation(&self, req: model::GetOperationRequest) -> Result<model::Operation>;
}
