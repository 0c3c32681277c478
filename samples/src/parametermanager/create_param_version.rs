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

// [START parametermanager_create_param_version]
use google_cloud_parametermanager_v1::client::ParameterManager;
use google_cloud_parametermanager_v1::model::{ParameterVersion, ParameterVersionPayload};

/// Creates a version with an unstructured payload.
///
/// # Parameters
/// - `parameter_id`: an existing parameter without a format.
/// - `version_id`: the id for the new version.
/// - `payload`: the contents of the version. For example:
///   `This is unstructured data`.
pub async fn sample(
    client: &ParameterManager,
    project_id: &str,
    location: &str,
    parameter_id: &str,
    version_id: &str,
    payload: &str,
) -> anyhow::Result<ParameterVersion> {
    let version = client
        .create_parameter_version()
        .set_parent(format!(
            "projects/{project_id}/locations/{location}/parameters/{parameter_id}"
        ))
        .set_parameter_version_id(version_id)
        .set_parameter_version(
            ParameterVersion::new()
                .set_payload(ParameterVersionPayload::new().set_data(payload.to_string())),
        )
        .send()
        .await?;
    println!("Created parameter version: {}", version.name);

    Ok(version)
}
// [END parametermanager_create_param_version]
