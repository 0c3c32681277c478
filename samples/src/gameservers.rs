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

//! Samples for [Game Servers](https://cloud.google.com/game-servers/docs).
//!
//! Game Servers has no generated client in this workspace. [GameServices] is a
//! small client for the REST API, with a [stub] to mock it in tests.

pub mod client;
pub mod model;
pub mod stub;
mod transport;

pub use client::{GameServices, PollingPolicy};

pub mod create_cluster;
pub mod create_realm;
pub mod delete_cluster;
pub mod delete_realm;
pub mod get_cluster;
pub mod get_realm;
pub mod list_clusters;
pub mod list_realms;
pub mod update_cluster;
pub mod update_realm;

/// Deletes realms older than [crate::STALE_AGE], and their clusters.
///
/// A realm cannot be deleted while it has clusters, so the clusters in each
/// stale realm are deleted first. Resources that are already gone are
/// ignored, other errors are logged.
pub async fn cleanup_stale_realms(
    client: &GameServices,
    project_id: &str,
    location: &str,
) -> anyhow::Result<()> {
    let stale_deadline = crate::stale_deadline()?;
    let realms = client
        .list_realms(format!("projects/{project_id}/locations/{location}"))
        .await?;
    let stale = realms
        .into_iter()
        .filter(|r| r.create_time.as_ref().is_some_and(|t| *t < stale_deadline))
        .map(|r| r.name);

    let pending = stale.map(|name| async move {
        let result = delete_realm_and_clusters(client, &name).await;
        (name, result)
    });
    for (name, result) in futures::future::join_all(pending).await {
        match result {
            Ok(()) => tracing::info!("deleted stale realm {name}"),
            Err(e) => tracing::warn!("error deleting stale realm {name}: {e}"),
        }
    }
    Ok(())
}

async fn delete_realm_and_clusters(client: &GameServices, realm: &str) -> anyhow::Result<()> {
    let Some(clusters) = crate::ignore_not_found(client.list_game_server_clusters(realm).await)?
    else {
        return Ok(());
    };
    let pending = clusters.into_iter().map(|c| async move {
        let op = client.delete_game_server_cluster(&c.name).await?;
        client.until_done(op).await
    });
    for result in futures::future::join_all(pending).await {
        crate::ignore_not_found(result)?;
    }
    let result = match client.delete_realm(realm).await {
        Ok(op) => client.until_done(op).await,
        Err(e) => Err(e),
    };
    crate::ignore_not_found(result)?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::model;
    use google_cloud_gax as gax;

    mockall::mock! {
        #[derive(Debug)]
        pub GameServices {}
        #[async_trait::async_trait]
        impl super::stub::GameServices for GameServices {
            async fn create_realm(&self, req: model::CreateRealmRequest) -> gax::Result<model::Operation>;
            async fn get_realm(&self, req: model::GetRealmRequest) -> gax::Result<model::Realm>;
            async fn list_realms(&self, req: model::ListRealmsRequest) -> gax::Result<model::ListRealmsResponse>;
            async fn update_realm(&self, req: model::UpdateRealmRequest) -> gax::Result<model::Operation>;
            async fn delete_realm(&self, req: model::DeleteRealmRequest) -> gax::Result<model::Operation>;
            async fn create_game_server_cluster(&self, req: model::CreateGameServerClusterRequest) -> gax::Result<model::Operation>;
            async fn get_game_server_cluster(&self, req: model::GetGameServerClusterRequest) -> gax::Result<model::GameServerCluster>;
            async fn list_game_server_clusters(&self, req: model::ListGameServerClustersRequest) -> gax::Result<model::ListGameServerClustersResponse>;
            async fn update_game_server_cluster(&self, req: model::UpdateGameServerClusterRequest) -> gax::Result<model::Operation>;
            async fn delete_game_server_cluster(&self, req: model::DeleteGameServerClusterRequest) -> gax::Result<model::Operation>;
            async fn get_operation(&self, req: model::GetOperationRequest) -> gax::Result<model::Operation>;
        }
    }

    /// A finished operation with `response` as its result.
    pub(crate) fn done<T: serde::Serialize>(response: &T) -> model::Operation {
        model::Operation::new()
            .set_name("projects/p/locations/global/operations/test-only")
            .set_done(true)
            .set_response(response)
    }

    pub(crate) fn not_found() -> gax::error::Error {
        use gax::error::rpc::{Code, Status};
        gax::error::Error::service(Status::default().set_code(Code::NotFound))
    }

    #[tokio::test]
    async fn cleanup_stale_realms() -> anyhow::Result<()> {
        use google_cloud_wkt::Timestamp;
        let parent = "projects/p/locations/us-central1";
        let mut mock = MockGameServices::new();
        mock.expect_list_realms()
            .withf(move |r| r.parent == parent)
            .return_once(move |_| {
                Ok(model::ListRealmsResponse::new().set_realms([
                    model::Realm::new()
                        .set_name(format!("{parent}/realms/old"))
                        .set_create_time(Timestamp::clamp(0, 0)),
                    model::Realm::new()
                        .set_name(format!("{parent}/realms/gone"))
                        .set_create_time(Timestamp::clamp(0, 0)),
                    model::Realm::new()
                        .set_name(format!("{parent}/realms/new"))
                        .set_create_time(Timestamp::clamp(i64::MAX / 2, 0)),
                ]))
            });
        mock.expect_list_game_server_clusters()
            .withf(move |r| r.parent == format!("{parent}/realms/old"))
            .return_once(move |_| {
                Ok(model::ListGameServerClustersResponse::new().set_game_server_clusters([
                    model::GameServerCluster::new()
                        .set_name(format!("{parent}/realms/old/gameServerClusters/c1")),
                ]))
            });
        mock.expect_list_game_server_clusters()
            .withf(move |r| r.parent == format!("{parent}/realms/gone"))
            .return_once(|_| Err(not_found()));
        mock.expect_delete_game_server_cluster()
            .withf(move |r| r.name == format!("{parent}/realms/old/gameServerClusters/c1"))
            .times(1)
            .returning(|_| Ok(done(&serde_json::json!({}))));
        mock.expect_delete_realm()
            .withf(move |r| r.name == format!("{parent}/realms/old"))
            .times(1)
            .returning(|_| Ok(done(&serde_json::json!({}))));

        let client = super::GameServices::from_stub(mock);
        super::cleanup_stale_realms(&client, "p", "us-central1").await?;
        Ok(())
    }
}
