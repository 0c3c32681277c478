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

// [START cloud_game_servers_cluster_update]
use crate::gameservers::GameServices;
use crate::gameservers::model::GameServerCluster;

pub async fn sample(
    client: &GameServices,
    project_id: &str,
    location: &str,
    realm_id: &str,
    cluster_id: &str,
) -> anyhow::Result<GameServerCluster> {
    let cluster = GameServerCluster::new()
        .set_name(format!(
            "projects/{project_id}/locations/{location}/realms/{realm_id}/gameServerClusters/{cluster_id}"
        ))
        .set_labels([("label-key-1", "label-value-1")])
        .set_description("My updated Game Server Cluster");
    let operation = client
        .update_game_server_cluster(cluster, ["labels", "description"])
        .await?;
    let cluster = client
        .until_done(operation)
        .await?
        .response_as::<GameServerCluster>()?;
    println!("Cluster updated: {}", cluster.name);

    Ok(cluster)
}
// [END cloud_game_servers_cluster_update]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameservers::tests::{MockGameServices, done};
    use crate::gameservers::model::Operation;

    #[tokio::test(start_paused = true)]
    async fn update() -> anyhow::Result<()> {
        let name = "projects/p/locations/us-central1/realms/r/gameServerClusters/c";
        let mut mock = MockGameServices::new();
        mock.expect_update_game_server_cluster()
            .withf(move |r| {
                r.update_mask == ["labels", "description"]
                    && r.game_server_cluster.as_ref().is_some_and(|c| {
                        c.name == name
                            && c.description == "My updated Game Server Cluster"
                            && c.labels.get("label-key-1").map(String::as_str)
                                == Some("label-value-1")
                    })
            })
            .return_once(|_| Ok(Operation::new().set_name("operations/update")));
        mock.expect_get_operation()
            .withf(|r| r.name == "operations/update")
            .return_once(move |_| {
                Ok(done(
                    &GameServerCluster::new()
                        .set_name(name)
                        .set_description("My updated Game Server Cluster"),
                ))
            });
        let client = GameServices::from_stub(mock);

        let got = sample(&client, "p", "us-central1", "r", "c").await?;
        assert_eq!(got.name, name);
        assert_eq!(got.description, "My updated Game Server Cluster");
        Ok(())
    }
}
