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

// [START parametermanager_list_param_versions]
use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_parametermanager_v1::client::ParameterManager;
use google_cloud_parametermanager_v1::model::ParameterVersion;

pub async fn sample(
    client: &ParameterManager,
    project_id: &str,
    location: &str,
    parameter_id: &str,
) -> anyhow::Result<Vec<ParameterVersion>> {
    let mut versions = Vec::new();
    let mut items = client
        .list_parameter_versions()
        .set_parent(format!(
            "projects/{project_id}/locations/{location}/parameters/{parameter_id}"
        ))
        .by_item();
    while let Some(version) = items.next().await.transpose()? {
        let state = if version.disabled { "disabled" } else { "enabled" };
        println!("Found parameter version {} with state {state}", version.name);
        versions.push(version);
    }

    Ok(versions)
}
// [END parametermanager_list_param_versions]
