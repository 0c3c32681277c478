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

// [START cloud_game_servers_cluster_get]
use crate::gameservers::GameServices;
use crate::gameservers::model::GameServerCluster;

pub async fn sample(
    client: &GameServices,
    project_id: &str,
    location: &str,
    realm_id: &str,
    cluster_id: &str,
) -> anyhow::Result<GameServerCluster> {
    let cluster = client
        .get_game_server_cluster(format!(
            "projects/{project_id}/locations/{location}/realms/{realm_id}/gameServerClusters/{cluster_id}"
        ))
        .await?;
    println!("Cluster name: {}", cluster.name);
    println!("Cluster description: {}", cluster.description);
    if let Some(gke) = cluster
        .connection_info
        .as_ref()
        .and_then(|i| i.gke_cluster_reference.as_ref())
    {
        println!("GKE cluster: {}", gke.cluster);
    }

    Ok(cluster)
}
// [END cloud_game_servers_cluster_get]
