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

// [START parametermanager_create_structured_param_version]
use google_cloud_parametermanager_v1::client::ParameterManager;
use google_cloud_parametermanager_v1::model::{ParameterVersion, ParameterVersionPayload};

/// Creates a version of a JSON parameter.
///
/// The service rejects payloads that are not valid JSON for parameters with
/// the JSON format.
pub async fn sample(
    client: &ParameterManager,
    project_id: &str,
    location: &str,
    parameter_id: &str,
    version_id: &str,
    payload: &serde_json::Value,
) -> anyhow::Result<ParameterVersion> {
    let data = serde_json::to_string(payload)?;
    let version = client
        .create_parameter_version()
        .set_parent(format!(
            "projects/{project_id}/locations/{location}/parameters/{parameter_id}"
        ))
        .set_parameter_version_id(version_id)
        .set_parameter_version(
            ParameterVersion::new().set_payload(ParameterVersionPayload::new().set_data(data)),
        )
        .send()
        .await?;
    println!("Created parameter version: {}", version.name);

    Ok(version)
}
// [END parametermanager_create_structured_param_version]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parametermanager::tests::MockParameterManager;
    use google_cloud_gax::response::Response;
    use serde_json::json;

    #[tokio::test]
    async fn json_payload() -> anyhow::Result<()> {
        let mut mock = MockParameterManager::new();
        mock.expect_create_parameter_version()
            .withf(|r, _| {
                let Some(payload) = r.parameter_version.as_ref().and_then(|v| v.payload.as_ref())
                else {
                    return false;
                };
                serde_json::from_slice::<serde_json::Value>(&payload.data).ok()
                    == Some(json!({"username": "test-user", "host": "localhost"}))
            })
            .return_once(|r, _| {
                let version = r
                    .parameter_version
                    .unwrap_or_default()
                    .set_name(format!("{}/versions/{}", r.parent, r.parameter_version_id));
                Ok(Response::from(version))
            });
        let client = ParameterManager::from_stub(mock);

        let payload = json!({"username": "test-user", "host": "localhost"});
        let got = sample(&client, "p", "us-central1", "my-param", "v2", &payload).await?;
        assert_eq!(
            got.name,
            "projects/p/locations/us-central1/parameters/my-param/versions/v2"
        );
        Ok(())
    }
}
