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

// [START parametermanager_update_param_kms_key]
use google_cloud_parametermanager_v1::client::ParameterManager;
use google_cloud_parametermanager_v1::model::Parameter;
use google_cloud_wkt::FieldMask;

/// Changes the Cloud KMS key used to encrypt new versions of a parameter.
pub async fn sample(
    client: &ParameterManager,
    project_id: &str,
    location: &str,
    parameter_id: &str,
    kms_key: &str,
) -> anyhow::Result<Parameter> {
    let parameter = client
        .update_parameter()
        .set_parameter(
            Parameter::new()
                .set_name(format!(
                    "projects/{project_id}/locations/{location}/parameters/{parameter_id}"
                ))
                .set_kms_key(kms_key),
        )
        .set_update_mask(FieldMask::default().set_paths(["kms_key"]))
        .send()
        .await?;
    println!(
        "Updated parameter {} with kms_key {}",
        parameter.name,
        parameter.kms_key.as_deref().unwrap_or_default()
    );

    Ok(parameter)
}
// [END parametermanager_update_param_kms_key]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parametermanager::tests::MockParameterManager;
    use google_cloud_gax::response::Response;

    #[tokio::test]
    async fn update() -> anyhow::Result<()> {
        let key = "projects/p/locations/global/keyRings/r/cryptoKeys/k1";
        let mut mock = MockParameterManager::new();
        mock.expect_update_parameter()
            .withf(move |r, _| {
                r.update_mask.as_ref().map(|m| m.paths.clone()) == Some(vec!["kms_key".to_string()])
                    && r.parameter.as_ref().is_some_and(|p| {
                        p.name == "projects/p/locations/global/parameters/my-param"
                            && p.kms_key.as_deref() == Some(key)
                    })
            })
            .return_once(|r, _| Ok(Response::from(r.parameter.unwrap_or_default())));
        let client = ParameterManager::from_stub(mock);

        let got = sample(&client, "p", "global", "my-param", key).await?;
        assert_eq!(got.kms_key.as_deref(), Some(key));
        Ok(())
    }
}
