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

#[cfg(all(test, feature = "run-integration-tests"))]
mod parametermanager {
    use google_cloud_parametermanager_v1::client::ParameterManager;
    use google_cloud_parametermanager_v1::model::ParameterFormat;
    use google_cloud_samples::names::{
        LocationName, ParameterName, ParameterVersionName, crypto_key_name, secret_name,
    };
    use google_cloud_samples::parametermanager::*;
    use google_cloud_samples_test_utils::resource_names::random_uuid_id;
    use google_cloud_samples_test_utils::runtime_config::{parameter_location_id, project_id};
    use std::time::Duration;

    const KEY_RING_ID: &str = "rust-test-kms-key";
    const KEY_ID: &str = "rust-test-kms-key";
    const UPDATED_KEY_ID: &str = "rust-test-kms-key-updated";

    #[tokio::test(flavor = "multi_thread")]
    async fn global() -> anyhow::Result<()> {
        let _guard = google_cloud_samples_test_utils::tracing::enable_tracing();
        run(LocationName::global(project_id()?)).await
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn regional() -> anyhow::Result<()> {
        let _guard = google_cloud_samples_test_utils::tracing::enable_tracing();
        run(LocationName::new(project_id()?, parameter_location_id())).await
    }

    /// Resources created by one test run, removed in [Fixture::teardown].
    struct Fixture {
        location: LocationName,
        parameters: Vec<String>,
        versions: Vec<String>,
        secrets: Vec<String>,
        keys: Vec<String>,
    }

    impl Fixture {
        fn new(location: LocationName) -> Self {
            Self {
                location,
                parameters: Vec::new(),
                versions: Vec::new(),
                secrets: Vec::new(),
                keys: Vec::new(),
            }
        }

        fn parameter(&mut self) -> ParameterName {
            let name = self.location.parameter(random_uuid_id("parameter"));
            self.parameters.push(name.to_string());
            name
        }

        fn version(&mut self, parameter: &ParameterName) -> String {
            let id = random_uuid_id("version");
            self.versions.push(parameter.version(&id).to_string());
            id
        }

        async fn teardown(self, client: &ParameterManager) -> anyhow::Result<()> {
            // Versions must be gone before their parameters can be deleted.
            let versions = cleanup::delete_all_versions(client, self.versions).await;
            let parameters = cleanup::delete_all_params(client, self.parameters).await;

            let secrets = secretmanager::client(self.location.location()).await?;
            for id in &self.secrets {
                secretmanager::delete_secret(&secrets, &self.location, id).await?;
            }
            let kms = kms::client().await?;
            for key in &self.keys {
                kms::destroy_first_version(&kms, key).await?;
            }
            versions?;
            parameters
        }
    }

    async fn run(location: LocationName) -> anyhow::Result<()> {
        let client = client(location.location()).await?;
        let mut fixture = Fixture::new(location);
        let result = samples(&client, &mut fixture).await;
        let teardown = fixture.teardown(&client).await;
        result?;
        teardown
    }

    async fn samples(client: &ParameterManager, fixture: &mut Fixture) -> anyhow::Result<()> {
        let location = fixture.location.clone();
        let project_id = location.project().to_string();
        let project_id = project_id.as_str();
        let loc = location.location().to_string();
        let loc = loc.as_str();

        // Unformatted parameters and versions.
        let name = fixture.parameter();
        let id = name.parameter_id();
        let parameter = create_param::sample(client, project_id, loc, id).await?;
        assert_eq!(parameter.name.parse::<ParameterName>()?, name);
        assert_eq!(parameter.format, ParameterFormat::Unformatted);
        let got = get_param::sample(client, project_id, loc, id).await?;
        assert_eq!(got.name, parameter.name);
        let parameters = list_params::sample(client, project_id, loc).await?;
        assert!(
            parameters.iter().any(|p| p.name == parameter.name),
            "{parameters:?}"
        );

        let version_id = fixture.version(&name);
        let version =
            create_param_version::sample(client, project_id, loc, id, &version_id, "test123")
                .await?;
        let parsed = version.name.parse::<ParameterVersionName>()?;
        assert_eq!(parsed, name.version(&version_id));
        assert_eq!(parsed.parent(), &name);
        assert_eq!(parsed.version_id(), version_id);
        let got = get_param_version::sample(client, project_id, loc, id, &version_id).await?;
        assert_eq!(
            got.payload.as_ref().map(|p| p.data.clone()),
            Some(bytes::Bytes::from_static(b"test123"))
        );
        let versions = list_param_versions::sample(client, project_id, loc, id).await?;
        assert!(
            versions.iter().any(|v| v.name == version.name),
            "{versions:?}"
        );

        let disabled =
            disable_param_version::sample(client, project_id, loc, id, &version_id).await?;
        assert!(disabled.disabled);
        let enabled =
            enable_param_version::sample(client, project_id, loc, id, &version_id).await?;
        assert!(!enabled.disabled);

        let deleted =
            delete_param_version::sample(client, project_id, loc, id, &version_id).await?;
        assert_eq!(deleted, version.name);
        let got = get_param_version::sample(client, project_id, loc, id, &version_id).await;
        assert_not_found(got.map(|_| ()));
        let deleted = delete_param::sample(client, project_id, loc, id).await?;
        assert_eq!(deleted, parameter.name);
        let got = get_param::sample(client, project_id, loc, id).await;
        assert_not_found(got.map(|_| ()));

        // Structured parameters and secret references.
        let name = fixture.parameter();
        let id = name.parameter_id();
        let parameter = create_structured_param::sample(client, project_id, loc, id).await?;
        assert_eq!(parameter.format, ParameterFormat::Json);
        let parsed = parameter.name.parse::<ParameterName>()?;
        assert_eq!(parsed.parent(), &location);
        assert_eq!(parsed.parameter_id(), id);

        let version_id = fixture.version(&name);
        let payload = serde_json::json!({"username": "test-user", "host": "localhost"});
        create_structured_param_version::sample(
            client,
            project_id,
            loc,
            id,
            &version_id,
            &payload,
        )
        .await?;

        let secrets = secretmanager::client(loc).await?;
        let secret_id = random_uuid_id("secret");
        fixture.secrets.push(secret_id.clone());
        let secret = secretmanager::create_secret(&secrets, &location, &secret_id).await?;
        assert_eq!(secret.name, secret_name(&location, &secret_id));
        let secret_version =
            secretmanager::add_secret_version(&secrets, &secret.name, "hello-world").await?;
        let member = parameter
            .policy_member
            .as_ref()
            .map(|m| m.iam_policy_uid_principal.clone())
            .unwrap_or_default();
        secretmanager::grant_secret_accessor(&secrets, &secret.name, &member).await?;

        let version_id = fixture.version(&name);
        create_param_version_with_secret::sample(
            client,
            project_id,
            loc,
            id,
            &version_id,
            &secret_version.name,
        )
        .await?;
        let rendered = render(client, project_id, loc, id, &version_id).await?;
        let rendered = String::from_utf8(rendered.rendered_payload.to_vec())?;
        assert!(rendered.contains("hello-world"), "{rendered}");

        // Customer-managed encryption keys.
        let kms = kms::client().await?;
        kms::ensure_key_ring(&kms, &location, KEY_RING_ID).await?;
        for key_id in [KEY_ID, UPDATED_KEY_ID] {
            kms::ensure_crypto_key(&kms, &location, KEY_RING_ID, key_id).await?;
        }
        let key = crypto_key_name(&location, KEY_RING_ID, KEY_ID);
        let updated_key = crypto_key_name(&location, KEY_RING_ID, UPDATED_KEY_ID);

        let name = fixture.parameter();
        let id = name.parameter_id();
        let parameter =
            create_param_with_kms_key::sample(client, project_id, loc, id, &key).await?;
        assert_eq!(parameter.kms_key.as_deref(), Some(key.as_str()));
        let parameter =
            update_param_kms_key::sample(client, project_id, loc, id, &updated_key).await?;
        assert_eq!(parameter.kms_key.as_deref(), Some(updated_key.as_str()));
        let parameter = remove_param_kms_key::sample(client, project_id, loc, id).await?;
        assert_eq!(parameter.kms_key, None);

        // Quickstart.
        let name = fixture.parameter();
        let version_id = fixture.version(&name);
        let version =
            quickstart::sample(client, project_id, loc, name.parameter_id(), &version_id).await?;
        assert!(version.payload.is_some(), "{version:?}");

        Ok(())
    }

    fn assert_not_found(result: anyhow::Result<()>) {
        let err = result.expect_err("deleted resources are not found");
        let err = err
            .downcast_ref::<google_cloud_gax::error::Error>()
            .expect("the error is a service error");
        assert!(google_cloud_samples::is_not_found(err), "{err:?}");
    }

    // IAM changes take a while to propagate, in particular for regional
    // secrets. Retry until the parameter can read the secret.
    async fn render(
        client: &ParameterManager,
        project_id: &str,
        location: &str,
        parameter_id: &str,
        version_id: &str,
    ) -> anyhow::Result<google_cloud_parametermanager_v1::model::RenderParameterVersionResponse>
    {
        let mut attempt = 0;
        loop {
            match render_param_version::sample(client, project_id, location, parameter_id, version_id)
                .await
            {
                Ok(response) => return Ok(response),
                Err(e) if attempt < 12 => {
                    tracing::info!("render attempt {attempt} failed: {e}");
                    attempt += 1;
                    tokio::time::sleep(Duration::from_secs(10)).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
