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

// [START tpu_vm_list]
use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_tpu_v2::client::Tpu;
use google_cloud_tpu_v2::model::Node;

/// Prints all the nodes in `zone` as a JSON array.
pub async fn sample(client: &Tpu, project_id: &str, zone: &str) -> anyhow::Result<Vec<Node>> {
    let mut nodes = Vec::new();
    let mut items = client
        .list_nodes()
        .set_parent(format!("projects/{project_id}/locations/{zone}"))
        .by_item();
    while let Some(node) = items.next().await.transpose()? {
        nodes.push(node);
    }
    println!("{}", serde_json::to_string(&nodes)?);

    Ok(nodes)
}
// [END tpu_vm_list]
