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

// [START parametermanager_create_param_version_with_secret]
use google_cloud_parametermanager_v1::client::ParameterManager;
use google_cloud_parametermanager_v1::model::{ParameterVersion, ParameterVersionPayload};

/// Creates a version of a JSON parameter that references a secret.
///
/// Rendering the version replaces the reference with the secret data. The
/// parameter's principal needs `roles/secretmanager.secretAccessor` on the
/// secret for that to work.
///
/// # Parameters
/// - `secret_version`: the name of a secret version. For example:
///   `projects/my-project/secrets/my-secret/versions/1`.
pub async fn sample(
    client: &ParameterManager,
    project_id: &str,
    location: &str,
    parameter_id: &str,
    version_id: &str,
    secret_version: &str,
) -> anyhow::Result<ParameterVersion> {
    let payload = serde_json::json!({
        "db_user": "test_user",
        "db_password": secret_reference(secret_version),
    });
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
    println!(
        "Created parameter version with secret references: {}",
        version.name
    );

    Ok(version)
}

/// The placeholder replaced by the secret data when rendering.
pub fn secret_reference(secret_version: &str) -> String {
    format!("__REF__(//secretmanager.googleapis.com/{secret_version})")
}
// [END parametermanager_create_param_version_with_secret]
