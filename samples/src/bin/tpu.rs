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

//! Runs the Cloud TPU samples.

use clap::{Parser, Subcommand};
use google_cloud_samples::tpu;
use google_cloud_tpu_v2::client::Tpu;

#[derive(Debug, Parser)]
#[command(version, about = "Runs the Cloud TPU samples")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Creates a TPU VM and waits until it is ready.
    CreateNode {
        project_id: String,
        zone: String,
        node_id: String,
        #[arg(long, default_value = "v2-8")]
        accelerator_type: String,
        #[arg(long, default_value = "tpu-vm-tf-2.14.1")]
        runtime_version: String,
    },
    GetNode {
        project_id: String,
        zone: String,
        node_id: String,
    },
    /// Prints the nodes in a zone as JSON.
    ListNodes { project_id: String, zone: String },
    StopNode {
        project_id: String,
        zone: String,
        node_id: String,
    },
    StartNode {
        project_id: String,
        zone: String,
        node_id: String,
    },
    DeleteNode {
        project_id: String,
        zone: String,
        node_id: String,
    },
    /// Deletes nodes left behind by previous test runs.
    CleanupStaleNodes {
        project_id: String,
        zone: String,
        #[arg(long, default_value = "node-name-2a2b3c")]
        prefix: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    google_cloud_samples::init_tracing();
    let args = Args::parse();
    let client = Tpu::builder().with_tracing().build().await?;

    match args.command {
        Command::CreateNode {
            project_id,
            zone,
            node_id,
            accelerator_type,
            runtime_version,
        } => {
            tpu::create_node::sample(
                &client,
                &project_id,
                &zone,
                &node_id,
                &accelerator_type,
                &runtime_version,
            )
            .await?;
        }
        Command::GetNode {
            project_id,
            zone,
            node_id,
        } => {
            tpu::get_node::sample(&client, &project_id, &zone, &node_id).await?;
        }
        Command::ListNodes { project_id, zone } => {
            tpu::list_nodes::sample(&client, &project_id, &zone).await?;
        }
        Command::StopNode {
            project_id,
            zone,
            node_id,
        } => {
            tpu::stop_node::sample(&client, &project_id, &zone, &node_id).await?;
        }
        Command::StartNode {
            project_id,
            zone,
            node_id,
        } => {
            tpu::start_node::sample(&client, &project_id, &zone, &node_id).await?;
        }
        Command::DeleteNode {
            project_id,
            zone,
            node_id,
        } => {
            tpu::delete_node::sample(&client, &project_id, &zone, &node_id).await?;
        }
        Command::CleanupStaleNodes {
            project_id,
            zone,
            prefix,
        } => {
            tpu::cleanup_stale_nodes(&client, &project_id, &zone, &prefix).await?;
        }
    }
    Ok(())
}
