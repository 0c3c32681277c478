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

// [START tpu_vm_create]
use google_cloud_lro::Poller;
use google_cloud_tpu_v2::client::Tpu;
use google_cloud_tpu_v2::model::Node;

/// # Parameters
/// - `project_id`: the id of a Google Cloud project. For example: `my-project`.
/// - `zone`: a zone with TPU capacity. For example: `europe-west4-a`.
/// - `node_id`: the id for the new node.
/// - `accelerator_type`: the TPU type. For example: `v2-8`.
/// - `runtime_version`: the TPU software version. For example:
///   `tpu-vm-tf-2.14.1`.
pub async fn sample(
    client: &Tpu,
    project_id: &str,
    zone: &str,
    node_id: &str,
    accelerator_type: &str,
    runtime_version: &str,
) -> anyhow::Result<Node> {
    let node = client
        .create_node()
        .set_parent(format!("projects/{project_id}/locations/{zone}"))
        .set_node_id(node_id)
        .set_node(
            Node::new()
                .set_accelerator_type(accelerator_type)
                .set_runtime_version(runtime_version),
        )
        .poller()
        .until_done()
        .await?;
    println!("TPU VM: {node_id} created.");

    Ok(node)
}
// [END tpu_vm_create]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tpu::tests::{MockTpu, finished_operation};
    use google_cloud_gax::response::Response;

    #[tokio::test]
    async fn create() -> anyhow::Result<()> {
        let mut mock = MockTpu::new();
        mock.expect_create_node()
            .withf(|r, _| {
                r.parent == "projects/p/locations/europe-west4-a"
                    && r.node_id == "my-node"
                    && r.node.as_ref().is_some_and(|n| {
                        n.accelerator_type == "v2-8" && n.runtime_version == "tpu-vm-tf-2.14.1"
                    })
            })
            .return_once(|_, _| {
                let node = Node::new().set_name("projects/p/locations/europe-west4-a/nodes/my-node");
                Ok(Response::from(finished_operation(&node)))
            });
        let client = Tpu::from_stub(mock);

        let got = sample(
            &client,
            "p",
            "europe-west4-a",
            "my-node",
            "v2-8",
            "tpu-vm-tf-2.14.1",
        )
        .await?;
        assert_eq!(got.name, "projects/p/locations/europe-west4-a/nodes/my-node");
        Ok(())
    }
}
