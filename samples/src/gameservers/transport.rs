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

//! Sends Game Services requests as JSON over HTTP.

use super::model;
use crate::rest::{NoBody, RestClient, page_query};
use google_cloud_gax::Result;
use reqwest::Method;

pub(crate) const DEFAULT_ENDPOINT: &str = "https://gameservices.googleapis.com";

#[derive(Clone, Debug)]
pub(crate) struct GameServices {
    inner: RestClient,
}

impl GameServices {
    pub(crate) fn new(inner: RestClient) -> Self {
        Self { inner }
    }
}

#[async_trait::async_trait]
impl super::stub::GameServices for GameServices {
    async fn create_realm(&self, req: model::CreateRealmRequest) -> Result<model::Operation> {
        let builder = self
            .inner
            .builder(Method::POST, &format!("{}/realms", req.parent))
            .query(&[("realmId", &req.realm_id)]);
        self.inner.execute(builder, req.realm.as_ref()).await
    }

    async fn get_realm(&self, req: model::GetRealmRequest) -> Result<model::Realm> {
        let builder = self.inner.builder(Method::GET, &req.name);
        self.inner.execute(builder, None::<&NoBody>).await
    }

    async fn list_realms(&self, req: model::ListRealmsRequest) -> Result<model::ListRealmsResponse> {
        let builder = self
            .inner
            .builder(Method::GET, &format!("{}/realms", req.parent));
        let builder = page_query(builder, req.page_size, &req.page_token);
        self.inner.execute(builder, None::<&NoBody>).await
    }

    async fn update_realm(&self, req: model::UpdateRealmRequest) -> Result<model::Operation> {
        let builder = self
            .inner
            .builder(Method::PATCH, &resource_name(req.realm.as_ref().map(|r| &r.name)))
            .query(&[("updateMask", req.update_mask.join(","))]);
        self.inner.execute(builder, req.realm.as_ref()).await
    }

    async fn delete_realm(&self, req: model::DeleteRealmRequest) -> Result<model::Operation> {
        let builder = self.inner.builder(Method::DELETE, &req.name);
        self.inner.execute(builder, None::<&NoBody>).await
    }

    async fn create_game_server_cluster(
        &self,
        req: model::CreateGameServerClusterRequest,
    ) -> Result<model::Operation> {
        let builder = self
            .inner
            .builder(Method::POST, &format!("{}/gameServerClusters", req.parent))
            .query(&[("gameServerClusterId", &req.game_server_cluster_id)]);
        self.inner
            .execute(builder, req.game_server_cluster.as_ref())
            .await
    }

    async fn get_game_server_cluster(
        &self,
        req: model::GetGameServerClusterRequest,
    ) -> Result<model::GameServerCluster> {
        let builder = self.inner.builder(Method::GET, &req.name);
        self.inner.execute(builder, None::<&NoBody>).await
    }

    async fn list_game_server_clusters(
        &self,
        req: model::ListGameServerClustersRequest,
    ) -> Result<model::ListGameServerClustersResponse> {
        let builder = self
            .inner
            .builder(Method::GET, &format!("{}/gameServerClusters", req.parent));
        let builder = page_query(builder, req.page_size, &req.page_token);
        self.inner.execute(builder, None::<&NoBody>).await
    }

    async fn update_game_server_cluster(
        &self,
        req: model::UpdateGameServerClusterRequest,
    ) -> Result<model::Operation> {
        let name = resource_name(req.game_server_cluster.as_ref().map(|c| &c.name));
        let builder = self
            .inner
            .builder(Method::PATCH, &name)
            .query(&[("updateMask", req.update_mask.join(","))]);
        self.inner
            .execute(builder, req.game_server_cluster.as_ref())
            .await
    }

    async fn delete_game_server_cluster(
        &self,
        req: model::DeleteGameServerClusterRequest,
    ) -> Result<model::Operation> {
        let builder = self.inner.builder(Method::DELETE, &req.name);
        self.inner.execute(builder, None::<&NoBody>).await
    }

    async fn get_operation(&self, req: model::GetOperationRequest) -> Result<model::Operation> {
        let builder = self.inner.builder(Method::GET, &req.name);
        self.inner.execute(builder, None::<&NoBody>).await
    }
}

fn resource_name(name: Option<&String>) -> String {
    name.cloned().unwrap_or_default()
}
