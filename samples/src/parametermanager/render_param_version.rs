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

// [START parametermanager_render_param_version]
use google_cloud_parametermanager_v1::client::ParameterManager;
use google_cloud_parametermanager_v1::model::RenderParameterVersionResponse;

/// Returns the payload of a version with all secret references resolved.
pub async fn sample(
    client: &ParameterManager,
    project_id: &str,
    location: &str,
    parameter_id: &str,
    version_id: &str,
) -> anyhow::Result<RenderParameterVersionResponse> {
    let rendered = client
        .render_parameter_version()
        .set_name(format!(
            "projects/{project_id}/locations/{location}/parameters/{parameter_id}/versions/{version_id}"
        ))
        .send()
        .await?;
    println!(
        "Rendered parameter version payload: {}",
        String::from_utf8_lossy(&rendered.rendered_payload)
    );

    Ok(rendered)
}
// [END parametermanager_render_param_version]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parametermanager::tests::MockParameterManager;
    use google_cloud_gax::response::Response;

    #[tokio::test]
    async fn render() -> anyhow::Result<()> {
        let mut mock = MockParameterManager::new();
        mock.expect_render_parameter_version()
            .withf(|r, _| r.name == "projects/p/locations/us-central1/parameters/my-param/versions/v1")
            .return_once(|r, _| {
                Ok(Response::from(
                    RenderParameterVersionResponse::new()
                        .set_parameter_version(r.name)
                        .set_rendered_payload(r#"{"db_password":"secret"}"#),
                ))
            });
        let client = ParameterManager::from_stub(mock);

        let got = sample(&client, "p", "us-central1", "my-param", "v1").await?;
        assert_eq!(
            got.rendered_payload,
            bytes::Bytes::from(r#"{"db_password":"secret"}"#)
        );
        Ok(())
    }
}
