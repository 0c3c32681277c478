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

//! Messages for the Game Services REST API.
//!
//! The JSON field names follow the API's camelCase convention. Unknown fields
//! in responses are ignored, and empty fields are omitted from requests.

use google_cloud_wkt::Timestamp;
use std::collections::HashMap;

pub use crate::rest::{GetOperationRequest, Operation};

/// A grouping of game server clusters, scoped to a time zone.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Realm {
    /// `projects/{project}/locations/{location}/realms/{realm}`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// An IANA time zone, for example `US/Pacific`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub time_zone: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub etag: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<Timestamp>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<Timestamp>,
}

impl Realm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    pub fn set_time_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.time_zone = v.into();
        self
    }

    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }

    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_create_time<T: Into<Timestamp>>(mut self, v: T) -> Self {
        self.create_time = Some(v.into());
        self
    }
}

/// A GKE cluster registered with a realm.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GameServerCluster {
    /// `projects/{project}/locations/{location}/realms/{realm}/gameServerClusters/{cluster}`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_info: Option<GameServerClusterConnectionInfo>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub etag: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<Timestamp>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<Timestamp>,
}

impl GameServerCluster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }

    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_connection_info<T: Into<GameServerClusterConnectionInfo>>(mut self, v: T) -> Self {
        self.connection_info = Some(v.into());
        self
    }

    pub fn set_create_time<T: Into<Timestamp>>(mut self, v: T) -> Self {
        self.create_time = Some(v.into());
        self
    }
}

/// How the service reaches the agones installation in a cluster.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GameServerClusterConnectionInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gke_cluster_reference: Option<GkeClusterReference>,

    /// The Kubernetes namespace where game servers run.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub namespace: String,
}

impl GameServerClusterConnectionInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_gke_cluster_reference<T: Into<GkeClusterReference>>(mut self, v: T) -> Self {
        self.gke_cluster_reference = Some(v.into());
        self
    }

    pub fn set_namespace<T: Into<String>>(mut self, v: T) -> Self {
        self.namespace = v.into();
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GkeClusterReference {
    /// The full or partial name of a GKE cluster, for example
    /// `projects/{project}/locations/{location}/clusters/{cluster}`.
    pub cluster: String,
}

impl GkeClusterReference {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_cluster<T: Into<String>>(mut self, v: T) -> Self {
        self.cluster = v.into();
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListRealmsResponse {
    pub realms: Vec<Realm>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,
    pub unreachable: Vec<String>,
}

impl ListRealmsResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_realms<T: IntoIterator<Item = Realm>>(mut self, v: T) -> Self {
        self.realms = v.into_iter().collect();
        self
    }

    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListGameServerClustersResponse {
    pub game_server_clusters: Vec<GameServerCluster>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,
    pub unreachable: Vec<String>,
}

impl ListGameServerClustersResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_game_server_clusters<T: IntoIterator<Item = GameServerCluster>>(
        mut self,
        v: T,
    ) -> Self {
        self.game_server_clusters = v.into_iter().collect();
        self
    }

    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

// Requests. These are not sent as JSON, the transport maps their fields to
// the path, the query string, and the body.

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateRealmRequest {
    pub parent: String,
    pub realm_id: String,
    pub realm: Option<Realm>,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetRealmRequest {
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListRealmsRequest {
    pub parent: String,
    pub page_size: i32,
    pub page_token: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateRealmRequest {
    pub realm: Option<Realm>,
    pub update_mask: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteRealmRequest {
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateGameServerClusterRequest {
    pub parent: String,
    pub game_server_cluster_id: String,
    pub game_server_cluster: Option<GameServerCluster>,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetGameServerClusterRequest {
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListGameServerClustersRequest {
    pub parent: String,
    pub page_size: i32,
    pub page_token: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateGameServerClusterRequest {
    pub game_server_cluster: Option<GameServerCluster>,
    pub update_mask: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteGameServerClusterRequest {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn realm_omits_empty_fields() -> anyhow::Result<()> {
        let realm = Realm::new()
            .set_time_zone("US/Pacific")
            .set_description("Test realm");
        let got = serde_json::to_value(&realm)?;
        assert_eq!(
            got,
            json!({"timeZone": "US/Pacific", "description": "Test realm"})
        );
        Ok(())
    }

    #[test]
    fn cluster_connection_info() -> anyhow::Result<()> {
        let input = json!({
            "name": "projects/p/locations/global/realms/r/gameServerClusters/c",
            "connectionInfo": {
                "gkeClusterReference": {"cluster": "projects/p/locations/us-central1/clusters/gke"},
                "namespace": "default",
            },
            "clusterState": {"agonesVersionInstalled": "1.0"},
            "createTime": "2023-01-02T03:04:05Z",
        });
        let got = serde_json::from_value::<GameServerCluster>(input)?;
        let info = got.connection_info.as_ref().expect("has connection info");
        assert_eq!(info.namespace, "default");
        assert_eq!(
            info.gke_cluster_reference.as_ref().map(|r| r.cluster.as_str()),
            Some("projects/p/locations/us-central1/clusters/gke")
        );
        assert!(got.create_time.is_some(), "{got:?}");
        Ok(())
    }

    #[test]
    fn operation_response() -> anyhow::Result<()> {
        let input = json!({
            "name": "projects/p/locations/global/operations/op",
            "done": true,
            "response": {
                "@type": "type.googleapis.com/google.cloud.gaming.v1.Realm",
                "name": "projects/p/locations/global/realms/r",
                "timeZone": "US/Pacific",
            },
        });
        let got = serde_json::from_value::<Operation>(input)?;
        let realm = got.response_as::<Realm>()?;
        assert_eq!(realm.name, "projects/p/locations/global/realms/r");
        assert_eq!(realm.time_zone, "US/Pacific");

        let empty = Operation::new().set_done(true).response_as::<Realm>()?;
        assert_eq!(empty, Realm::default());
        Ok(())
    }
}
