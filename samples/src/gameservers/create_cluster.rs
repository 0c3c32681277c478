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

// [START cloud_game_servers_cluster_create]
use crate::gameservers::GameServices;
use crate::gameservers::model::{
    GameServerCluster, GameServerClusterConnectionInfo, GkeClusterReference,
};

/// # Parameters
/// - `project_id`: the id of a Google Cloud project. For example: `my-project`.
/// - `location`: the location of the realm. For example: `us-central1`.
/// - `realm_id`: an existing realm.
/// - `cluster_id`: the id for the new game server cluster.
/// - `gke_cluster`: the full resource name of a GKE cluster with agones
///   installed. For example:
///   `projects/my-project/locations/us-central1/clusters/my-gke-cluster`.
pub async fn sample(
    client: &GameServices,
    project_id: &str,
    location: &str,
    realm_id: &str,
    cluster_id: &str,
    gke_cluster: &str,
) -> anyhow::Result<GameServerCluster> {
    let cluster = GameServerCluster::new()
        .set_description("My Game Server Cluster")
        .set_connection_info(
            GameServerClusterConnectionInfo::new()
                .set_gke_cluster_reference(GkeClusterReference::new().set_cluster(gke_cluster))
                .set_namespace("default"),
        );
    let operation = client
        .create_game_server_cluster(
            format!("projects/{project_id}/locations/{location}/realms/{realm_id}"),
            cluster_id,
            cluster,
        )
        .await?;
    let cluster = client
        .until_done(operation)
        .await?
        .response_as::<GameServerCluster>()?;
    println!("Cluster created: {}", cluster.name);

    Ok(cluster)
}
// [END cloud_game_servers_cluster_create]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameservers::tests::{MockGameServices, done};

    #[tokio::test]
    async fn create() -> anyhow::Result<()> {
        let gke = "projects/p/locations/us-central1/clusters/gke";
        let mut mock = MockGameServices::new();
        mock.expect_create_game_server_cluster()
            .withf(move |r| {
                let info = r
                    .game_server_cluster
                    .as_ref()
                    .and_then(|c| c.connection_info.as_ref());
                r.parent == "projects/p/locations/us-central1/realms/my-realm"
                    && r.game_server_cluster_id == "my-cluster"
                    && info.is_some_and(|i| {
                        i.namespace == "default"
                            && i.gke_cluster_reference
                                .as_ref()
                                .is_some_and(|g| g.cluster == gke)
                    })
            })
            .return_once(|r| {
                let cluster = r.game_server_cluster.unwrap_or_default().set_name(format!(
                    "{}/gameServerClusters/{}",
                    r.parent, r.game_server_cluster_id
                ));
                Ok(done(&cluster))
            });
        let client = GameServices::from_stub(mock);

        let got = sample(&client, "p", "us-central1", "my-realm", "my-cluster", gke).await?;
        assert_eq!(
            got.name,
            "projects/p/locations/us-central1/realms/my-realm/gameServerClusters/my-cluster"
        );
        Ok(())
    }
}
