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

/// Implements a client for the Game Services API.
///
/// # Example
/// ```no_run
/// # use google_cloud_samples::gameservers::GameServices;
/// # async fn sample() -> anyhow::Result<()> {
/// let client = GameServices::new().await?;
/// let realm = client
///     .get_realm("projects/my-project/locations/global/realms/my-realm")
///     .await?;
/// println!("{realm:?}");
/// # Ok(()) }
/// ```
///
/// # Pooling and Cloning
///
/// `GameServices` holds a connection pool internally, it is advised to
/// create one and reuse it. Cloning is cheap, the clones share the pool.
#[derive(Clone, Debug)]
pub struct GameServices {
    inner: Arc<dyn stub::GameServices>,
    polling: PollingPolicy,
}

impl GameServices {
    /// Creates a client using [Application Default Credentials].
    ///
    /// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
    pub async fn new() -> anyhow::Result<Self> {
        Self::with_endpoint(super::transport::DEFAULT_ENDPOINT).await
    }

    /// Creates a client for a different endpoint, such as a local emulator.
    pub async fn with_endpoint<T: Into<String>>(endpoint: T) -> anyhow::Result<Self> {
        let cred = google_cloud_auth::credentials::Builder::default().build()?;
        let transport = super::transport::GameServices::new(crate::rest::RestClient::new(
            cred,
            endpoint.into(),
        ));
        Ok(Self::from_stub(transport))
    }

    /// Creates a client from an implementation of [stub::GameServices].
    ///
    /// Useful to mock the service in tests.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: stub::GameServices + 'static,
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

    pub async fn create_realm(
        &self,
        parent: impl Into<String>,
        realm_id: impl Into<String>,
        realm: model::Realm,
    ) -> Result<model::Operation> {
        let req = model::CreateRealmRequest {
            parent: parent.into(),
            realm_id: realm_id.into(),
            realm: Some(realm),
        };
        self.inner.create_realm(req).await
    }

    pub async fn get_realm(&self, name: impl Into<String>) -> Result<model::Realm> {
        let req = model::GetRealmRequest { name: name.into() };
        self.inner.get_realm(req).await
    }

    /// Returns all the realms in `parent`, following `next_page_token`.
    pub async fn list_realms(&self, parent: impl Into<String>) -> Result<Vec<model::Realm>> {
        let mut req = model::ListRealmsRequest {
            parent: parent.into(),
            ..Default::default()
        };
        let mut realms = Vec::new();
        loop {
            let page = self.inner.list_realms(req.clone()).await?;
            realms.extend(page.realms);
            if page.next_page_token.is_empty() {
                return Ok(realms);
            }
            req.page_token = page.next_page_token;
        }
    }

    pub async fn update_realm<I, V>(
        &self,
        realm: model::Realm,
        update_mask: I,
    ) -> Result<model::Operation>
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let req = model::UpdateRealmRequest {
            realm: Some(realm),
            update_mask: update_mask.into_iter().map(Into::into).collect(),
        };
        self.inner.update_realm(req).await
    }

    pub async fn delete_realm(&self, name: impl Into<String>) -> Result<model::Operation> {
        let req = model::DeleteRealmRequest { name: name.into() };
        self.inner.delete_realm(req).await
    }

    pub async fn create_game_server_cluster(
        &self,
        parent: impl Into<String>,
        cluster_id: impl Into<String>,
        cluster: model::GameServerCluster,
    ) -> Result<model::Operation> {
        let req = model::CreateGameServerClusterRequest {
            parent: parent.into(),
            game_server_cluster_id: cluster_id.into(),
            game_server_cluster: Some(cluster),
        };
        self.inner.create_game_server_cluster(req).await
    }

    pub async fn get_game_server_cluster(
        &self,
        name: impl Into<String>,
    ) -> Result<model::GameServerCluster> {
        let req = model::GetGameServerClusterRequest { name: name.into() };
        self.inner.get_game_server_cluster(req).await
    }

    /// Returns all the clusters in the realm `parent`, following
    /// `next_page_token`.
    pub async fn list_game_server_clusters(
        &self,
        parent: impl Into<String>,
    ) -> Result<Vec<model::GameServerCluster>> {
        let mut req = model::ListGameServerClustersRequest {
            parent: parent.into(),
            ..Default::default()
        };
        let mut clusters = Vec::new();
        loop {
            let page = self.inner.list_game_server_clusters(req.clone()).await?;
            clusters.extend(page.game_server_clusters);
            if page.next_page_token.is_empty() {
                return Ok(clusters);
            }
            req.page_token = page.next_page_token;
        }
    }

    pub async fn update_game_server_cluster<I, V>(
        &self,
        cluster: model::GameServerCluster,
        update_mask: I,
    ) -> Result<model::Operation>
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let req = model::UpdateGameServerClusterRequest {
            game_server_cluster: Some(cluster),
            update_mask: update_mask.into_iter().map(Into::into).collect(),
        };
        self.inner.update_game_server_cluster(req).await
    }

    pub async fn delete_game_server_cluster(
        &self,
        name: impl Into<String>,
    ) -> Result<model::Operation> {
        let req = model::DeleteGameServerClusterRequest { name: name.into() };
        self.inner.delete_game_server_cluster(req).await
    }

    /// Polls `operation` until it is done.
    ///
    /// Returns the finished operation. An operation that finished with an
    /// error returns that error as a service error. Gives up with a timeout
    /// error after the polling policy deadline.
    pub async fn until_done(&self, operation: model::Operation) -> Result<model::Operation> {
        let inner = self.inner.clone();
        crate::rest::until_done(&self.polling, operation, move |req| {
            let inner = inner.clone();
            async move { inner.get_operation(req).await }
        })
        .await
    }
}
