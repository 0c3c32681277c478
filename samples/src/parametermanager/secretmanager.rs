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

//! Secret Manager helpers to create the secrets referenced by parameter
//! versions.

use crate::names::{LocationName, secret_name, secret_parent};
use google_cloud_iam_v1::model::{Binding, Policy};
use google_cloud_secretmanager_v1::client::SecretManagerService;
use google_cloud_secretmanager_v1::model::{
    Replication, Secret, SecretPayload, SecretVersion, replication::Automatic,
};

/// The role needed to render parameter versions that reference a secret.
pub const SECRET_ACCESSOR_ROLE: &str = "roles/secretmanager.secretAccessor";

/// Creates a Secret Manager client for `location`.
pub async fn client(location: &str) -> anyhow::Result<SecretManagerService> {
    let builder = SecretManagerService::builder().with_tracing();
    let builder = match super::regional_endpoint("secretmanager", location) {
        Some(endpoint) => builder.with_endpoint(endpoint),
        None => builder,
    };
    Ok(builder.build().await?)
}

/// Creates a secret.
///
/// Global secrets are replicated automatically. Regional secrets live in
/// their region and cannot have a replication policy.
pub async fn create_secret(
    client: &SecretManagerService,
    location: &LocationName,
    secret_id: &str,
) -> anyhow::Result<Secret> {
    let secret = if location.is_regional() {
        Secret::new()
    } else {
        Secret::new().set_replication(Replication::new().set_automatic(Automatic::new()))
    };
    let secret = client
        .create_secret()
        .set_parent(secret_parent(location))
        .set_secret_id(secret_id)
        .set_secret(secret)
        .send()
        .await?;
    tracing::info!("created secret {}", secret.name);
    Ok(secret)
}

pub async fn add_secret_version(
    client: &SecretManagerService,
    secret: &str,
    data: &str,
) -> anyhow::Result<SecretVersion> {
    let version = client
        .add_secret_version()
        .set_parent(secret)
        .set_payload(SecretPayload::new().set_data(data.to_string()))
        .send()
        .await?;
    tracing::info!("created secret version {}", version.name);
    Ok(version)
}

/// Lets `member` read the data in `secret`.
///
/// `member` is usually the IAM principal of a parameter, see
/// `Parameter::policy_member`.
pub async fn grant_secret_accessor(
    client: &SecretManagerService,
    secret: &str,
    member: &str,
) -> anyhow::Result<Policy> {
    let mut policy = client.get_iam_policy().set_resource(secret).send().await?;
    policy.bindings.push(
        Binding::new()
            .set_role(SECRET_ACCESSOR_ROLE)
            .set_members([member]),
    );
    let policy = client
        .set_iam_policy()
        .set_resource(secret)
        .set_policy(policy)
        .send()
        .await?;
    Ok(policy)
}

/// Deletes a secret, ignoring secrets that do not exist.
pub async fn delete_secret(
    client: &SecretManagerService,
    location: &LocationName,
    secret_id: &str,
) -> anyhow::Result<()> {
    let name = secret_name(location, secret_id);
    let result = client.delete_secret().set_name(&name).send().await;
    if crate::ignore_not_found(result)?.is_some() {
        tracing::info!("deleted secret {name}");
    }
    Ok(())
}
