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

//! Runs the Game Servers samples.

use clap::{Parser, Subcommand};
use google_cloud_samples::gameservers::{self, GameServices};

#[derive(Debug, Parser)]
#[command(version, about = "Runs the Game Servers samples")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    CreateRealm {
        project_id: String,
        location: String,
        realm_id: String,
    },
    GetRealm {
        project_id: String,
        location: String,
        realm_id: String,
    },
    ListRealms {
        project_id: String,
        location: String,
    },
    UpdateRealm {
        project_id: String,
        location: String,
        realm_id: String,
    },
    DeleteRealm {
        project_id: String,
        location: String,
        realm_id: String,
    },
    /// Registers a GKE cluster with a realm.
    CreateCluster {
        project_id: String,
        location: String,
        realm_id: String,
        cluster_id: String,
        /// The full resource name of the GKE cluster.
        #[arg(
            env = "SAMPLE_CLUSTER_NAME",
            default_value = "projects/217093627905/locations/us-central1/clusters/gke-shared-default"
        )]
        gke_cluster: String,
    },
    GetCluster {
        project_id: String,
        location: String,
        realm_id: String,
        cluster_id: String,
    },
    ListClusters {
        project_id: String,
        location: String,
        realm_id: String,
    },
    UpdateCluster {
        project_id: String,
        location: String,
        realm_id: String,
        cluster_id: String,
    },
    DeleteCluster {
        project_id: String,
        location: String,
        realm_id: String,
        cluster_id: String,
    },
    /// Deletes realms, and their clusters, left behind by previous test runs.
    CleanupStaleRealms {
        project_id: String,
        location: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    google_cloud_samples::init_tracing();
    let args = Args::parse();
    let client = GameServices::new().await?;

    use Command::*;
    match args.command {
        CreateRealm {
            project_id,
            location,
            realm_id,
        } => {
            gameservers::create_realm::sample(&client, &project_id, &location, &realm_id).await?;
        }
        GetRealm {
            project_id,
            location,
            realm_id,
        } => {
            gameservers::get_realm::sample(&client, &project_id, &location, &realm_id).await?;
        }
        ListRealms {
            project_id,
            location,
        } => {
            gameservers::list_realms::sample(&client, &project_id, &location).await?;
        }
        UpdateRealm {
            project_id,
            location,
            realm_id,
        } => {
            gameservers::update_realm::sample(&client, &project_id, &location, &realm_id).await?;
        }
        DeleteRealm {
            project_id,
            location,
            realm_id,
        } => {
            gameservers::delete_realm::sample(&client, &project_id, &location, &realm_id).await?;
        }
        CreateCluster {
            project_id,
            location,
            realm_id,
            cluster_id,
            gke_cluster,
        } => {
            gameservers::create_cluster::sample(
                &client,
                &project_id,
                &location,
                &realm_id,
                &cluster_id,
                &gke_cluster,
            )
            .await?;
        }
        GetCluster {
            project_id,
            location,
            realm_id,
            cluster_id,
        } => {
            gameservers::get_cluster::sample(&client, &project_id, &location, &realm_id, &cluster_id)
                .await?;
        }
        ListClusters {
            project_id,
            location,
            realm_id,
        } => {
            gameservers::list_clusters::sample(&client, &project_id, &location, &realm_id).await?;
        }
        UpdateCluster {
            project_id,
            location,
            realm_id,
            cluster_id,
        } => {
            gameservers::update_cluster::sample(
                &client,
                &project_id,
                &location,
                &realm_id,
                &cluster_id,
            )
            .await?;
        }
        DeleteCluster {
            project_id,
            location,
            realm_id,
            cluster_id,
        } => {
            gameservers::delete_cluster::sample(
                &client,
                &project_id,
                &location,
                &realm_id,
                &cluster_id,
            )
            .await?;
        }
        CleanupStaleRealms {
            project_id,
            location,
        } => {
            gameservers::cleanup_stale_realms(&client, &project_id, &location).await?;
        }
    }
    Ok(())
}
