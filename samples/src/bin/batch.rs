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

//! Runs the Batch samples.

use clap::{Parser, Subcommand};
use google_cloud_samples::batch::{self, BatchService};

#[derive(Debug, Parser)]
#[command(version, about = "Runs the Batch samples")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Creates a job that writes to a new and an existing persistent disk.
    CreatePersistentDiskJob {
        project_id: String,
        region: String,
        job_id: String,
        /// The zone for the VMs, defaults to `{region}-b`.
        #[arg(long)]
        zone: Option<String>,
        /// The region of the existing disk, defaults to `region`.
        #[arg(long)]
        disk_region: Option<String>,
    },
    /// Creates a job that runs a script.
    CreateScriptJob {
        project_id: String,
        region: String,
        job_id: String,
    },
    GetJob {
        project_id: String,
        region: String,
        job_id: String,
    },
    ListJobs {
        project_id: String,
        region: String,
    },
    DeleteJob {
        project_id: String,
        region: String,
        job_id: String,
    },
    /// Deletes jobs left behind by previous test runs.
    CleanupStaleJobs {
        project_id: String,
        region: String,
        #[arg(long, default_value = "rust-samples-")]
        prefix: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    google_cloud_samples::init_tracing();
    let args = Args::parse();
    let client = BatchService::new().await?;

    match args.command {
        Command::CreatePersistentDiskJob {
            project_id,
            region,
            job_id,
            zone,
            disk_region,
        } => {
            let zone = zone.unwrap_or_else(|| format!("{region}-b"));
            let disk_region = disk_region.unwrap_or_else(|| region.clone());
            batch::create_persistent_disk_job::sample(
                &client,
                &project_id,
                &region,
                &zone,
                &disk_region,
                &job_id,
            )
            .await?;
        }
        Command::CreateScriptJob {
            project_id,
            region,
            job_id,
        } => {
            batch::create_script_job::sample(&client, &project_id, &region, &job_id).await?;
        }
        Command::GetJob {
            project_id,
            region,
            job_id,
        } => {
            batch::get_job::sample(&client, &project_id, &region, &job_id).await?;
        }
        Command::ListJobs { project_id, region } => {
            batch::list_jobs::sample(&client, &project_id, &region).await?;
        }
        Command::DeleteJob {
            project_id,
            region,
            job_id,
        } => {
            batch::delete_job::sample(&client, &project_id, &region, &job_id).await?;
        }
        Command::CleanupStaleJobs {
            project_id,
            region,
            prefix,
        } => {
            batch::cleanup_stale_jobs(&client, &project_id, &region, &prefix).await?;
        }
    }
    Ok(())
}
