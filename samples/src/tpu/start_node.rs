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

// [START tpu_vm_start]
use google_cloud_lro::Poller;
use google_cloud_tpu_v2::client::Tpu;
use google_cloud_tpu_v2::model::Node;

pub async fn sample(client: &Tpu, project_id: &str, zone: &str, node_id: &str) -> anyhow::Result<Node> {
    let node = client
        .start_node()
        .set_name(format!("projects/{project_id}/locations/{zone}/nodes/{node_id}"))
        .poller()
        .until_done()
        .await?;
    println!("Node: {node_id} started.");

    Ok(node)
}
// [END tpu_vm_start]
