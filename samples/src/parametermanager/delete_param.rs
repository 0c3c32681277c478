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

// [START parametermanager_delete_param]
use google_cloud_parametermanager_v1::client::ParameterManager;

/// Deletes a parameter and returns its name. The parameter must not have
/// any versions.
pub async fn sample(
    client: &ParameterManager,
    project_id: &str,
    location: &str,
    parameter_id: &str,
) -> anyhow::Result<String> {
    let name = format!("projects/{project_id}/locations/{location}/parameters/{parameter_id}");
    client.delete_parameter().set_name(&name).send().await?;
    println!("Deleted parameter: {name}");

    Ok(name)
}
// [END parametermanager_delete_param]
