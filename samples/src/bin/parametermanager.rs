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

//! Runs the Parameter Manager samples.

use clap::{Parser, Subcommand};
use google_cloud_samples::parametermanager as pm;

#[derive(Debug, Parser)]
#[command(version, about = "Runs the Parameter Manager samples")]
struct Args {
    /// `global`, or the region for regional parameters.
    #[arg(long, global = true, default_value = "global")]
    location: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    CreateParam {
        project_id: String,
        parameter_id: String,
    },
    CreateStructuredParam {
        project_id: String,
        parameter_id: String,
    },
    CreateParamWithKmsKey {
        project_id: String,
        parameter_id: String,
        kms_key: String,
    },
    GetParam {
        project_id: String,
        parameter_id: String,
    },
    ListParams {
        project_id: String,
    },
    UpdateParamKmsKey {
        project_id: String,
        parameter_id: String,
        kms_key: String,
    },
    RemoveParamKmsKey {
        project_id: String,
        parameter_id: String,
    },
    DeleteParam {
        project_id: String,
        parameter_id: String,
    },
    CreateParamVersion {
        project_id: String,
        parameter_id: String,
        version_id: String,
        payload: String,
    },
    CreateStructuredParamVersion {
        project_id: String,
        parameter_id: String,
        version_id: String,
        /// A JSON document. For example: `{"username":"test-user"}`.
        #[arg(value_parser = parse_json)]
        payload: serde_json::Value,
    },
    CreateParamVersionWithSecret {
        project_id: String,
        parameter_id: String,
        version_id: String,
        /// For example: `projects/my-project/secrets/my-secret/versions/1`.
        secret_version: String,
    },
    GetParamVersion {
        project_id: String,
        parameter_id: String,
        version_id: String,
    },
    ListParamVersions {
        project_id: String,
        parameter_id: String,
    },
    RenderParamVersion {
        project_id: String,
        parameter_id: String,
        version_id: String,
    },
    DisableParamVersion {
        project_id: String,
        parameter_id: String,
        version_id: String,
    },
    EnableParamVersion {
        project_id: String,
        parameter_id: String,
        version_id: String,
    },
    DeleteParamVersion {
        project_id: String,
        parameter_id: String,
        version_id: String,
    },
    /// Creates a JSON parameter with one version and reads it back.
    Quickstart {
        project_id: String,
        parameter_id: String,
        version_id: String,
    },
}

fn parse_json(s: &str) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::from_str(s)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    google_cloud_samples::init_tracing();
    let args = Args::parse();
    let location = args.location.as_str();
    let client = pm::client(location).await?;

    use Command::*;
    match args.command {
        CreateParam {
            project_id,
            parameter_id,
        } => {
            pm::create_param::sample(&client, &project_id, location, &parameter_id).await?;
        }
        CreateStructuredParam {
            project_id,
            parameter_id,
        } => {
            pm::create_structured_param::sample(&client, &project_id, location, &parameter_id)
                .await?;
        }
        CreateParamWithKmsKey {
            project_id,
            parameter_id,
            kms_key,
        } => {
            pm::create_param_with_kms_key::sample(
                &client,
                &project_id,
                location,
                &parameter_id,
                &kms_key,
            )
            .await?;
        }
        GetParam {
            project_id,
            parameter_id,
        } => {
            pm::get_param::sample(&client, &project_id, location, &parameter_id).await?;
        }
        ListParams { project_id } => {
            pm::list_params::sample(&client, &project_id, location).await?;
        }
        UpdateParamKmsKey {
            project_id,
            parameter_id,
            kms_key,
        } => {
            pm::update_param_kms_key::sample(&client, &project_id, location, &parameter_id, &kms_key)
                .await?;
        }
        RemoveParamKmsKey {
            project_id,
            parameter_id,
        } => {
            pm::remove_param_kms_key::sample(&client, &project_id, location, &parameter_id).await?;
        }
        DeleteParam {
            project_id,
            parameter_id,
        } => {
            pm::delete_param::sample(&client, &project_id, location, &parameter_id).await?;
        }
        CreateParamVersion {
            project_id,
            parameter_id,
            version_id,
            payload,
        } => {
            pm::create_param_version::sample(
                &client,
                &project_id,
                location,
                &parameter_id,
                &version_id,
                &payload,
            )
            .await?;
        }
        CreateStructuredParamVersion {
            project_id,
            parameter_id,
            version_id,
            payload,
        } => {
            pm::create_structured_param_version::sample(
                &client,
                &project_id,
                location,
                &parameter_id,
                &version_id,
                &payload,
            )
            .await?;
        }
        CreateParamVersionWithSecret {
            project_id,
            parameter_id,
            version_id,
            secret_version,
        } => {
            pm::create_param_version_with_secret::sample(
                &client,
                &project_id,
                location,
                &parameter_id,
                &version_id,
                &secret_version,
            )
            .await?;
        }
        GetParamVersion {
            project_id,
            parameter_id,
            version_id,
        } => {
            pm::get_param_version::sample(&client, &project_id, location, &parameter_id, &version_id)
                .await?;
        }
        ListParamVersions {
            project_id,
            parameter_id,
        } => {
            pm::list_param_versions::sample(&client, &project_id, location, &parameter_id).await?;
        }
        RenderParamVersion {
            project_id,
            parameter_id,
            version_id,
        } => {
            pm::render_param_version::sample(
                &client,
                &project_id,
                location,
                &parameter_id,
                &version_id,
            )
            .await?;
        }
        DisableParamVersion {
            project_id,
            parameter_id,
            version_id,
        } => {
            pm::disable_param_version::sample(
                &client,
                &project_id,
                location,
                &parameter_id,
                &version_id,
            )
            .await?;
        }
        EnableParamVersion {
            project_id,
            parameter_id,
            version_id,
        } => {
            pm::enable_param_version::sample(
                &client,
                &project_id,
                location,
                &parameter_id,
                &version_id,
            )
            .await?;
        }
        DeleteParamVersion {
            project_id,
            parameter_id,
            version_id,
        } => {
            pm::delete_param_version::sample(
                &client,
                &project_id,
                location,
                &parameter_id,
                &version_id,
            )
            .await?;
        }
        Quickstart {
            project_id,
            parameter_id,
            version_id,
        } => {
            pm::quickstart::sample(&client, &project_id, location, &parameter_id, &version_id)
                .await?;
        }
    }
    Ok(())
}
