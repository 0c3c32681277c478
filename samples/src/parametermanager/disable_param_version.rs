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

// [START parametermanager_disable_param_version]
use google_cloud_parametermanager_v1::client::ParameterManager;
use google_cloud_parametermanager_v1::model::ParameterVersion;
use google_cloud_wkt::FieldMask;

pub async fn sample(
    client: &ParameterManager,
    project_id: &str,
    location: &str,
    parameter_id: &str,
    version_id: &str,
) -> anyhow::Result<ParameterVersion> {
    let version = client
        .update_parameter_version()
        .set_parameter_version(
            ParameterVersion::new()
                .set_name(format!(
                    "projects/{project_id}/locations/{location}/parameters/{parameter_id}/versions/{version_id}"
                ))
                .set_disabled(true),
        )
        .set_update_mask(FieldMask::default().set_paths(["disabled"]))
        .send()
        .await?;
    println!("Disabled parameter version {} for parameter {parameter_id}", version.name);

    Ok(version)
}
// [END parametermanager_disable_param_version]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parametermanager::tests::MockParameterManager;
    use google_cloud_gax::response::Response;

    #[tokio::test]
    async fn disable() -> anyhow::Result<()> {
        let mut mock = MockParameterManager::new();
        mock.expect_update_parameter_version()
            .withf(|r, _| {
                r.update_mask.as_ref().is_some_and(|m| m.paths == ["disabled"])
                    && r.parameter_version.as_ref().is_some_and(|v| v.disabled)
            })
            .return_once(|r, _| Ok(Response::from(r.parameter_version.unwrap_or_default())));
        let client = ParameterManager::from_stub(mock);

        let got = sample(&client, "p", "global", "my-param", "v1").await?;
        assert!(got.disabled, "{got:?}");
        Ok(())
    }
}
