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

// [START cloud_game_servers_cluster_list]
use crate::gameservers::GameServices;
use crate::gameservers::model::GameServerCluster;

pub async fn sample(
    client: &GameServices,
    project_id: &str,
    location: &str,
    realm_id: &str,
) -> anyhow::Result<Vec<GameServerCluster>> {
    let clusters = client
        .list_game_server_clusters(format!(
            "projects/{project_id}/locations/{location}/realms/{realm_id}"
        ))
        .await?;
    println!("Game Server Clusters:");
    for cluster in &clusters {
        println!("\tName: {}", cluster.name);
        println!("\tDescription: {}", cluster.description);
    }

    Ok(clusters)
}
// [END cloud_game_servers_cluster_list]
