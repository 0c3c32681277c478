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

//! Cloud KMS helpers to create the keys used to encrypt parameters.

use crate::names::{LocationName, crypto_key_name};
use google_cloud_kms_v1::client::KeyManagementService;
use google_cloud_kms_v1::model::{
    CryptoKey, CryptoKeyVersionTemplate, KeyRing, ProtectionLevel,
    crypto_key::CryptoKeyPurpose, crypto_key_version::CryptoKeyVersionAlgorithm,
};

pub async fn client() -> anyhow::Result<KeyManagementService> {
    Ok(KeyManagementService::builder().with_tracing().build().await?)
}

/// Returns the key ring, creating it if needed.
///
/// Key rings cannot be deleted, tests reuse them across runs.
pub async fn ensure_key_ring(
    client: &KeyManagementService,
    location: &LocationName,
    key_ring_id: &str,
) -> anyhow::Result<KeyRing> {
    let name = location.child("keyRings", key_ring_id);
    let result = client.get_key_ring().set_name(&name).send().await;
    if let Some(key_ring) = crate::ignore_not_found(result)? {
        return Ok(key_ring);
    }
    let key_ring = client
        .create_key_ring()
        .set_parent(location.to_string())
        .set_key_ring_id(key_ring_id)
        .set_key_ring(KeyRing::new())
        .send()
        .await?;
    tracing::info!("created key ring {}", key_ring.name);
    Ok(key_ring)
}

/// Returns the crypto key, creating an HSM symmetric encryption key if needed.
pub async fn ensure_crypto_key(
    client: &KeyManagementService,
    location: &LocationName,
    key_ring_id: &str,
    key_id: &str,
) -> anyhow::Result<CryptoKey> {
    let name = crypto_key_name(location, key_ring_id, key_id);
    let result = client.get_crypto_key().set_name(&name).send().await;
    if let Some(key) = crate::ignore_not_found(result)? {
        return Ok(key);
    }
    let key = client
        .create_crypto_key()
        .set_parent(location.child("keyRings", key_ring_id))
        .set_crypto_key_id(key_id)
        .set_crypto_key(
            CryptoKey::new()
                .set_purpose(CryptoKeyPurpose::EncryptDecrypt)
                .set_version_template(
                    CryptoKeyVersionTemplate::new()
                        .set_algorithm(CryptoKeyVersionAlgorithm::GoogleSymmetricEncryption)
                        .set_protection_level(ProtectionLevel::Hsm),
                ),
        )
        .send()
        .await?;
    tracing::info!("created crypto key {}", key.name);
    Ok(key)
}

/// Schedules the first version of `key` for destruction.
///
/// Crypto keys cannot be deleted, destroying their key material is the
/// closest thing.
pub async fn destroy_first_version(client: &KeyManagementService, key: &str) -> anyhow::Result<()> {
    let result = client
        .destroy_crypto_key_version()
        .set_name(format!("{key}/cryptoKeyVersions/1"))
        .send()
        .await;
    crate::ignore_not_found(result)?;
    Ok(())
}
