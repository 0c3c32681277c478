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

//! Samples for [Parameter Manager](https://cloud.google.com/secret-manager/parameter-manager/docs).
//!
//! Every sample receives a location. Parameters in `global` are served by
//! the default endpoint, parameters in a region are served by a regional
//! endpoint, see [client].

use google_cloud_parametermanager_v1::client::ParameterManager;

pub mod cleanup;
pub mod kms;
pub mod secretmanager;

pub mod create_param;
pub mod create_param_version;
pub mod create_param_version_with_secret;
pub mod create_param_with_kms_key;
pub mod create_structured_param;
pub mod create_structured_param_version;
pub mod delete_param;
pub mod delete_param_version;
pub mod disable_param_version;
pub mod enable_param_version;
pub mod get_param;
pub mod get_param_version;
pub mod list_param_versions;
pub mod list_params;
pub mod quickstart;
pub mod remove_param_kms_key;
pub mod render_param_version;
pub mod update_param_kms_key;

/// The endpoint for `service` in `location`, or `None` for `global`.
///
/// # Example
/// ```
/// # use google_cloud_samples::parametermanager::regional_endpoint;
/// assert_eq!(regional_endpoint("parametermanager", "global"), None);
/// assert_eq!(
///     regional_endpoint("parametermanager", "us-central1").as_deref(),
///     Some("https://parametermanager.us-central1.rep.googleapis.com")
/// );
/// ```
pub fn regional_endpoint(service: &str, location: &str) -> Option<String> {
    if location == crate::names::GLOBAL {
        return None;
    }
    Some(format!("https://{service}.{location}.rep.googleapis.com"))
}

/// Creates a Parameter Manager client for `location`.
pub async fn client(location: &str) -> anyhow::Result<ParameterManager> {
    // [START parametermanager_regional_client]
    let builder = ParameterManager::builder().with_tracing();
    let builder = match regional_endpoint("parametermanager", location) {
        Some(endpoint) => builder.with_endpoint(endpoint),
        None => builder,
    };
    let client = builder.build().await?;
    // [END parametermanager_regional_client]
    Ok(client)
}
