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

// [START parametermanager_get_param_version]
use google_cloud_parametermanager_v1::client::ParameterManager;
use google_cloud_parametermanager_v1::model::{ParameterVersion, View};

pub async fn sample(
    client: &ParameterManager,
    project_id: &str,
    location: &str,
    parameter_id: &str,
    version_id: &str,
) -> anyhow::Result<ParameterVersion> {
    let version = client
        .get_parameter_version()
        .set_name(format!(
            "projects/{project_id}/locations/{location}/parameters/{parameter_id}/versions/{version_id}"
        ))
        .set_view(View::Full)
        .send()
        .await?;
    let state = if version.disabled { "disabled" } else { "enabled" };
    println!("Found parameter version {} with state {state}", version.name);
    if let Some(payload) = &version.payload {
        println!("Payload: {}", String::from_utf8_lossy(&payload.data));
    }

    Ok(version)
}
// [END parametermanager_get_param_version]
