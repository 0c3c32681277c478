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

// [START parametermanager_remove_param_kms_key]
use google_cloud_parametermanager_v1::client::ParameterManager;
use google_cloud_parametermanager_v1::model::Parameter;
use google_cloud_wkt::FieldMask;

/// Stops encrypting new versions of a parameter with a customer managed key.
///
/// The `kms_key` field is in the update mask but not in the parameter, which
/// clears it.
pub async fn sample(
    client: &ParameterManager,
    project_id: &str,
    location: &str,
    parameter_id: &str,
) -> anyhow::Result<Parameter> {
    let parameter = client
        .update_parameter()
        .set_parameter(
            Parameter::new()
                .set_name(format!(
                    "projects/{project_id}/locations/{location}/parameters/{parameter_id}"
                ))
                .set_or_clear_kms_key(None::<String>),
        )
        .set_update_mask(FieldMask::default().set_paths(["kms_key"]))
        .send()
        .await?;
    println!("Removed kms_key for parameter {}", parameter.name);

    Ok(parameter)
}
// [END parametermanager_remove_param_kms_key]
