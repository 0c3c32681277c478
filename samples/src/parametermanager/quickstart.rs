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

// [START parametermanager_quickstart]
use google_cloud_parametermanager_v1::client::ParameterManager;
use google_cloud_parametermanager_v1::model::{
    Parameter, ParameterFormat, ParameterVersion, ParameterVersionPayload, View,
};

/// Creates a JSON parameter with one version, then reads the version back.
pub async fn sample(
    client: &ParameterManager,
    project_id: &str,
    location: &str,
    parameter_id: &str,
    version_id: &str,
) -> anyhow::Result<ParameterVersion> {
    let parameter = client
        .create_parameter()
        .set_parent(format!("projects/{project_id}/locations/{location}"))
        .set_parameter_id(parameter_id)
        .set_parameter(Parameter::new().set_format(ParameterFormat::Json))
        .send()
        .await?;
    println!(
        "Created parameter {} with format {:?}",
        parameter.name, parameter.format
    );

    let payload = serde_json::json!({"username": "test-user", "host": "localhost"});
    let version = client
        .create_parameter_version()
        .set_parent(&parameter.name)
        .set_parameter_version_id(version_id)
        .set_parameter_version(
            ParameterVersion::new()
                .set_payload(ParameterVersionPayload::new().set_data(payload.to_string())),
        )
        .send()
        .await?;
    println!("Created parameter version: {}", version.name);

    let version = client
        .get_parameter_version()
        .set_name(&version.name)
        .set_view(View::Full)
        .send()
        .await?;
    let data = version
        .payload
        .as_ref()
        .map(|p| String::from_utf8_lossy(&p.data).into_owned())
        .unwrap_or_default();
    println!("Payload: {data}");

    Ok(version)
}
// [END parametermanager_quickstart]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parametermanager::tests::MockParameterManager;
    use google_cloud_gax::response::Response;
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn quickstart() -> anyhow::Result<()> {
        let stored = Arc::new(Mutex::new(None::<ParameterVersion>));
        let mut mock = MockParameterManager::new();
        mock.expect_create_parameter()
            .withf(|r, _| {
                r.parameter
                    .as_ref()
                    .is_some_and(|p| p.format == ParameterFormat::Json)
            })
            .return_once(|r, _| {
                let parameter = r
                    .parameter
                    .unwrap_or_default()
                    .set_name(format!("{}/parameters/{}", r.parent, r.parameter_id));
                Ok(Response::from(parameter))
            });
        let save = stored.clone();
        mock.expect_create_parameter_version()
            .withf(|r, _| r.parent == "projects/p/locations/global/parameters/my-param")
            .return_once(move |r, _| {
                let version = r
                    .parameter_version
                    .unwrap_or_default()
                    .set_name(format!("{}/versions/{}", r.parent, r.parameter_version_id));
                *save.lock().expect("lock is not poisoned") = Some(version.clone());
                Ok(Response::from(version))
            });
        let load = stored.clone();
        mock.expect_get_parameter_version()
            .return_once(move |r, _| {
                let version = load.lock().expect("lock is not poisoned").clone();
                let version = version.filter(|v| v.name == r.name).unwrap_or_default();
                Ok(Response::from(version))
            });
        let client = ParameterManager::from_stub(mock);

        let got = sample(&client, "p", "global", "my-param", "v1").await?;
        assert_eq!(
            got.name,
            "projects/p/locations/global/parameters/my-param/versions/v1"
        );
        let data = got.payload.map(|p| p.data).unwrap_or_default();
        let json = serde_json::from_slice::<serde_json::Value>(&data)?;
        assert_eq!(
            json,
            serde_json::json!({"username": "test-user", "host": "localhost"})
        );
        Ok(())
    }
}
