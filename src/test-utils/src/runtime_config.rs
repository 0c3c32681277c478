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

use anyhow::Result;

const PROJECT_VAR: &str = "GOOGLE_CLOUD_PROJECT";
const REGION_VAR: &str = "GOOGLE_CLOUD_RUST_TEST_REGION";
const BATCH_REGION_VAR: &str = "GOOGLE_CLOUD_RUST_TEST_BATCH_REGION";
const TPU_ZONE_VAR: &str = "GOOGLE_CLOUD_RUST_TEST_TPU_ZONE";
const PARAMETER_LOCATION_VAR: &str = "GCLOUD_LOCATION";
const GKE_CLUSTER_VAR: &str = "SAMPLE_CLUSTER_NAME";
const DEFAULT_REGION: &str = "us-central1";
const DEFAULT_BATCH_REGION: &str = "europe-central2";
const DEFAULT_TPU_ZONE: &str = "europe-west4-a";
const DEFAULT_GKE_CLUSTER: &str =
    "projects/217093627905/locations/us-central1/clusters/gke-shared-default";

pub fn project_id() -> Result<String> {
    std::env::var(PROJECT_VAR).map_err(anyhow::Error::from)
}

/// The default region for test resources.
///
/// Game Servers realms and the existing Batch disk live here.
pub fn region_id() -> String {
    env_or(REGION_VAR, DEFAULT_REGION)
}

/// The region used by the Batch tests.
///
/// Batch quota is scarce in the default region, the tests use a different one.
pub fn batch_region_id() -> String {
    env_or(BATCH_REGION_VAR, DEFAULT_BATCH_REGION)
}

/// The zone used by the TPU tests. Must offer `v2-8` accelerators.
pub fn tpu_zone_id() -> String {
    env_or(TPU_ZONE_VAR, DEFAULT_TPU_ZONE)
}

/// The location for regional Parameter Manager, Secret Manager and KMS
/// resources.
pub fn parameter_location_id() -> String {
    env_or(PARAMETER_LOCATION_VAR, DEFAULT_REGION)
}

/// The full resource name of the GKE cluster registered with Game Servers.
pub fn gke_cluster_name() -> String {
    env_or(GKE_CLUSTER_VAR, DEFAULT_GKE_CLUSTER)
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var).ok().unwrap_or(default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;
    use serial_test::serial;
    use test_case::test_case;

    #[serial]
    #[test]
    fn project() {
        let _env = ScopedEnv::remove(PROJECT_VAR);
        let got = project_id();
        assert!(got.is_err(), "{got:?}");
        let _env = ScopedEnv::set(PROJECT_VAR, "abc");
        let got = project_id();
        assert!(got.as_ref().is_ok_and(|v| v == "abc"), "{got:?}");
    }

    #[test_case(REGION_VAR, region_id, DEFAULT_REGION; "region")]
    #[test_case(BATCH_REGION_VAR, batch_region_id, DEFAULT_BATCH_REGION; "batch region")]
    #[test_case(TPU_ZONE_VAR, tpu_zone_id, DEFAULT_TPU_ZONE; "tpu zone")]
    #[test_case(PARAMETER_LOCATION_VAR, parameter_location_id, DEFAULT_REGION; "parameter location")]
    #[test_case(GKE_CLUSTER_VAR, gke_cluster_name, DEFAULT_GKE_CLUSTER; "gke cluster")]
    #[serial]
    fn with_default(var: &str, getter: fn() -> String, default: &str) {
        let _env = ScopedEnv::remove(var);
        let got = getter();
        assert_eq!(got, default);
        let _env = ScopedEnv::set(var, "abc");
        let got = getter();
        assert_eq!(got, "abc");
    }
}
