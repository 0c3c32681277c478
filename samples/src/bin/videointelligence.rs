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

//! Runs the Video Intelligence samples.

use clap::{Parser, Subcommand};
use google_cloud_samples::videointelligence;
use google_cloud_videointelligence_v1::client::VideoIntelligenceService;

#[derive(Debug, Parser)]
#[command(version, about = "Runs the Video Intelligence samples")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Detects faces in a local video file.
    DetectFaces { path: String },
    /// Detects faces in a video stored in Cloud Storage.
    DetectFacesGcs { uri: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    google_cloud_samples::init_tracing();
    let args = Args::parse();
    let client = VideoIntelligenceService::builder()
        .with_tracing()
        .build()
        .await?;

    match args.command {
        Command::DetectFaces { path } => {
            videointelligence::detect_faces::sample(&client, &path).await?;
        }
        Command::DetectFacesGcs { uri } => {
            videointelligence::detect_faces_gcs::sample(&client, &uri).await?;
        }
    }
    Ok(())
}
