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

//! Samples for [Cloud TPU](https://cloud.google.com/tpu/docs) VMs.

use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_lro::Poller;
use google_cloud_tpu_v2::client::Tpu;

pub mod create_node;
pub mod delete_node;
pub mod get_node;
pub mod list_nodes;
pub mod start_node;
pub mod stop_node;

/// Deletes nodes whose id starts with `prefix` and that are older than
/// [crate::STALE_AGE].
///
/// The deletions run concurrently. Errors are logged and otherwise ignored.
pub async fn cleanup_stale_nodes(
    client: &Tpu,
    project_id: &str,
    zone: &str,
    prefix: &str,
) -> anyhow::Result<()> {
    let stale_deadline = crate::stale_deadline()?;

    let mut stale = Vec::new();
    let mut items = client
        .list_nodes()
        .set_parent(format!("projects/{project_id}/locations/{zone}"))
        .by_item();
    while let Some(node) = items.next().await.transpose()? {
        if !node_id(&node.name).starts_with(prefix) {
            continue;
        }
        if node.create_time.is_none_or(|t| t > stale_deadline) {
            tracing::info!("skipping recent node {}", node.name);
            continue;
        }
        stale.push(node.name);
    }

    let pending = stale.into_iter().map(|name| async move {
        let result = client.delete_node().set_name(&name).poller().until_done().await;
        (name, crate::ignore_not_found(result))
    });
    for (name, result) in futures::future::join_all(pending).await {
        match result {
            Ok(_) => tracing::info!("deleted stale node {name}"),
            Err(e) => tracing::warn!("error deleting stale node {name}: {e}"),
        }
    }
    Ok(())
}

/// The last segment of a node name.
pub fn node_id(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

#[cfg(test)]
pub(crate) mod tests {
    use google_cloud_gax as gax;
    use google_cloud_longrunning as longrunning;
    use google_cloud_tpu_v2 as tpu;
    use google_cloud_wkt as wkt;

    mockall::mock! {
        #[derive(Debug)]
        pub Tpu {}
        impl tpu::stub::Tpu for Tpu {
            async fn list_nodes(&self, req: tpu::model::ListNodesRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<tpu::model::ListNodesResponse>>;
            async fn get_node(&self, req: tpu::model::GetNodeRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<tpu::model::Node>>;
            async fn create_node(&self, req: tpu::model::CreateNodeRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<longrunning::model::Operation>>;
            async fn delete_node(&self, req: tpu::model::DeleteNodeRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<longrunning::model::Operation>>;
            async fn stop_node(&self, req: tpu::model::StopNodeRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<longrunning::model::Operation>>;
            async fn start_node(&self, req: tpu::model::StartNodeRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<longrunning::model::Operation>>;
            async fn get_operation(&self, req: longrunning::model::GetOperationRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<longrunning::model::Operation>>;
        }
    }

    /// A finished operation whose response is `node`.
    pub(crate) fn finished_operation(node: &tpu::model::Node) -> longrunning::model::Operation {
        let any = wkt::Any::from_msg(node).expect("test message should succeed");
        longrunning::model::Operation::new()
            .set_name("operations/test-only")
            .set_done(true)
            .set_result(longrunning::model::operation::Result::Response(any.into()))
    }

    pub(crate) fn finished_empty_operation() -> longrunning::model::Operation {
        let any = wkt::Any::from_msg(&wkt::Empty::default()).expect("test message should succeed");
        longrunning::model::Operation::new()
            .set_name("operations/test-only")
            .set_done(true)
            .set_result(longrunning::model::operation::Result::Response(any.into()))
    }

    #[test]
    fn node_id() {
        assert_eq!(
            super::node_id("projects/p/locations/europe-west4-a/nodes/my-node"),
            "my-node"
        );
        assert_eq!(super::node_id("my-node"), "my-node");
    }

    #[tokio::test]
    async fn cleanup_stale_nodes() -> anyhow::Result<()> {
        let parent = "projects/p/locations/europe-west4-a";
        let old = wkt::Timestamp::clamp(0, 0);
        let mut mock = MockTpu::new();
        mock.expect_list_nodes().return_once(move |_, _| {
            Ok(gax::response::Response::from(
                tpu::model::ListNodesResponse::new().set_nodes([
                    tpu::model::Node::new()
                        .set_name(format!("{parent}/nodes/node-name-2a2b3c1"))
                        .set_create_time(old.clone()),
                    tpu::model::Node::new()
                        .set_name(format!("{parent}/nodes/node-name-2a2b3c2"))
                        .set_create_time(old.clone()),
                    tpu::model::Node::new()
                        .set_name(format!("{parent}/nodes/node-name-2a2b3c3"))
                        .set_create_time(wkt::Timestamp::clamp(i64::MAX / 2, 0)),
                    tpu::model::Node::new()
                        .set_name(format!("{parent}/nodes/production"))
                        .set_create_time(old),
                ]),
            ))
        });
        // One of the deletes fails. That should not stop the other delete,
        // nor fail the cleanup.
        mock.expect_delete_node()
            .withf(move |r, _| r.name.ends_with("/node-name-2a2b3c1"))
            .times(1)
            .returning(|_, _| {
                use gax::error::rpc::{Code, Status};
                Err(gax::error::Error::service(
                    Status::default().set_code(Code::PermissionDenied),
                ))
            });
        mock.expect_delete_node()
            .withf(move |r, _| r.name.ends_with("/node-name-2a2b3c2"))
            .times(1)
            .returning(|_, _| Ok(gax::response::Response::from(finished_empty_operation())));

        let client = tpu::client::Tpu::from_stub(mock);
        super::cleanup_stale_nodes(&client, "p", "europe-west4-a", "node-name-2a2b3c").await?;
        Ok(())
    }
}
