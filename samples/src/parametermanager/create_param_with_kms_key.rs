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

// [START parametermanager_create_param_with_kms_key]
use google_cloud_parametermanager_v1::client::ParameterManager;
use google_cloud_parametermanager_v1::model::Parameter;

/// Creates a parameter whose versions are encrypted with a Cloud KMS key.
///
/// # Parameters
/// - `kms_key`: the name of a crypto key in the same location as the
///   parameter. For example:
///   `projects/my-project/locations/global/keyRings/my-ring/cryptoKeys/my-key`.
pub async fn sample(
    client: &ParameterManager,
    project_id: &str,
    location: &str,
    parameter_id: &str,
    kms_key: &str,
) -> anyhow::Result<Parameter> {
    let parameter = client
        .create_parameter()
        .set_parent(format!("projects/{project_id}/locations/{location}"))
        .set_parameter_id(parameter_id)
        .set_parameter(Parameter::new().set_kms_key(kms_key))
        .send()
        .await?;
    println!(
        "Created parameter {} with kms_key {}",
        parameter.name,
        parameter.kms_key.as_deref().unwrap_or_default()
    );

    Ok(parameter)
}
// [END parametermanager_create_param_with_kms_key]
