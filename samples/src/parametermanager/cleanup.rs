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

//! Removes the parameters and versions created by the samples.
//!
//! A parameter cannot be deleted while it has versions, so callers delete
//! all the versions first.

use google_cloud_parametermanager_v1::client::ParameterManager;

/// Deletes the parameter versions named in `names`, concurrently.
///
/// Versions that do not exist are ignored. Returns the first other error,
/// after all the deletions are attempted.
pub async fn delete_all_versions<I>(client: &ParameterManager, names: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = String>,
{
    let pending = names.into_iter().map(|name| async move {
        let result = client.delete_parameter_version().set_name(&name).send().await;
        (name, crate::ignore_not_found(result))
    });
    first_error("parameter version", futures::future::join_all(pending).await)
}

/// Deletes the parameters named in `names`, concurrently.
///
/// Same error handling as [delete_all_versions].
pub async fn delete_all_params<I>(client: &ParameterManager, names: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = String>,
{
    let pending = names.into_iter().map(|name| async move {
        let result = client.delete_parameter().set_name(&name).send().await;
        (name, crate::ignore_not_found(result))
    });
    first_error("parameter", futures::future::join_all(pending).await)
}

fn first_error<T>(
    kind: &str,
    results: Vec<(String, google_cloud_gax::Result<Option<T>>)>,
) -> anyhow::Result<()> {
    let mut first = None;
    for (name, result) in results {
        match result {
            Ok(Some(_)) => tracing::info!("deleted {kind} {name}"),
            Ok(None) => tracing::debug!("{kind} {name} was already deleted"),
            Err(e) => {
                tracing::warn!("error deleting {kind} {name}: {e}");
                first.get_or_insert(e);
            }
        }
    }
    match first {
        None => Ok(()),
        Some(e) => Err(e.into()),
    }
}
